//! CSV import of trip requests
//!
//! Expected header row (order free, `notes` and `is_night_time` optional):
//! id, client_name, client_phone, pet_type, breed, weight_kg, pickup,
//! destination, distance_km, fare, notes, is_night_time

use std::io::Read;
use std::path::Path;

use pettransit_domain::model::TripRequest;
use pettransit_types::{CatalogError, Error, Result};
use tracing::debug;

/// Load trip requests from a CSV file
pub fn load_trip_requests_from_csv(path: &Path) -> Result<Vec<TripRequest>> {
    let file = std::fs::File::open(path).map_err(|e| {
        Error::Catalog(CatalogError::Read(format!("{}: {}", path.display(), e)))
    })?;
    let requests = read_trip_requests(file)?;
    debug!(path = %path.display(), count = requests.len(), "trip requests imported");
    Ok(requests)
}

/// Read trip requests from any CSV source
pub fn read_trip_requests<R: Read>(reader: R) -> Result<Vec<TripRequest>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .has_headers(true)
        .from_reader(reader);

    let mut requests = Vec::new();
    for record in reader.deserialize() {
        let request: TripRequest = record?;
        if !request.distance_km.is_finite() || request.distance_km < 0.0 {
            return Err(Error::Catalog(CatalogError::Parse(format!(
                "trip request {} has invalid distance {}",
                request.id, request.distance_km
            ))));
        }
        requests.push(request);
    }
    Ok(requests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pettransit_types::PetType;

    const CSV: &str = "\
id,client_name,client_phone,pet_type,breed,weight_kg,pickup,destination,distance_km,fare,notes,is_night_time
10, Ana Ruiz ,+52 555 000 1111,dog,Beagle,11.5,Calle Sur 9,VetCare Center,4.0,110.0,,false
11,Luis Mora,+52 555 000 2222,cat,Maine Coon,7.2,Av. Oeste 3,Hospital Veterinario 24hrs,6.5,221.25,Bring blanket,true
";

    #[test]
    fn test_read_trip_requests() {
        let requests = read_trip_requests(CSV.as_bytes()).unwrap();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].client_name, "Ana Ruiz");
        assert_eq!(requests[0].notes, None);
        assert_eq!(requests[1].pet_type, PetType::Cat);
        assert_eq!(requests[1].notes.as_deref(), Some("Bring blanket"));
        assert!(requests[1].is_night_time);
    }

    #[test]
    fn test_bad_pet_type_is_an_error() {
        let csv = "\
id,client_name,client_phone,pet_type,breed,weight_kg,pickup,destination,distance_km,fare
1,A,1,parrot,Macaw,1.0,X,Y,1.0,65.0
";
        assert!(matches!(
            read_trip_requests(csv.as_bytes()),
            Err(Error::Csv(_))
        ));
    }

    #[test]
    fn test_negative_distance_is_an_error() {
        let csv = "\
id,client_name,client_phone,pet_type,breed,weight_kg,pickup,destination,distance_km,fare
1,A,1,dog,Pug,8.0,X,Y,-1.0,35.0
";
        assert!(matches!(
            read_trip_requests(csv.as_bytes()),
            Err(Error::Catalog(CatalogError::Parse(_)))
        ));
    }
}
