//! Built-in sample catalog used when no catalog file is configured

use pettransit_domain::model::{
    DailyTotals, GeoPoint, TripRequest, TripSummary, Vehicle, Veterinary,
};
use pettransit_types::{PetType, VehicleStatus, VetStatus};

use crate::catalog::Catalog;

pub fn catalog() -> Catalog {
    Catalog {
        veterinaries: veterinaries(),
        trip_requests: trip_requests(),
        vehicles: vehicles(),
        daily_totals: DailyTotals {
            completed_today: 24,
            revenue: 4850.0,
        },
    }
}

fn species(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

pub fn veterinaries() -> Vec<Veterinary> {
    vec![
        Veterinary {
            id: "1".to_string(),
            name: "Clínica Veterinaria San Pedro".to_string(),
            address: "Av. Principal 123".to_string(),
            distance_km: 2.5,
            status: VetStatus::Online,
            accepts: species(&["Perros", "Gatos", "Aves"]),
            rating: 4.8,
        },
        Veterinary {
            id: "2".to_string(),
            name: "Hospital Veterinario 24hrs".to_string(),
            address: "Calle Central 456".to_string(),
            distance_km: 3.8,
            status: VetStatus::Extended,
            accepts: species(&["Perros", "Gatos", "Exóticos"]),
            rating: 4.9,
        },
        Veterinary {
            id: "3".to_string(),
            name: "VetCare Center".to_string(),
            address: "Blvd. Norte 789".to_string(),
            distance_km: 5.2,
            status: VetStatus::Offline,
            accepts: species(&["Perros", "Gatos"]),
            rating: 4.6,
        },
    ]
}

pub fn trip_requests() -> Vec<TripRequest> {
    vec![
        TripRequest {
            id: "1".to_string(),
            client_name: "María González".to_string(),
            client_phone: "+52 123 456 7890".to_string(),
            pet_type: PetType::Dog,
            breed: "Golden Retriever".to_string(),
            weight_kg: 28.0,
            pickup: "Calle Norte 123".to_string(),
            destination: "Clínica Veterinaria San Pedro".to_string(),
            distance_km: 5.2,
            fare: 180.0,
            notes: Some("Perro muy tranquilo, usa correa azul".to_string()),
            is_night_time: false,
        },
        TripRequest {
            id: "2".to_string(),
            client_name: "Carlos Ramírez".to_string(),
            client_phone: "+52 987 654 3210".to_string(),
            pet_type: PetType::Cat,
            breed: "Siamés".to_string(),
            weight_kg: 4.5,
            pickup: "Av. Central 456".to_string(),
            destination: "Hospital Veterinario 24hrs".to_string(),
            distance_km: 8.5,
            fare: 320.0,
            notes: Some("Gato nervioso, mantener transportadora cerrada".to_string()),
            is_night_time: true,
        },
    ]
}

pub fn vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: "1".to_string(),
            driver: "Juan Pérez".to_string(),
            status: VehicleStatus::InTransit,
            location: GeoPoint {
                lat: 19.432608,
                lng: -99.133209,
            },
            current_trip: Some(TripSummary {
                pickup: "Calle Norte 123".to_string(),
                destination: "Clínica San Pedro".to_string(),
                pet_type: PetType::Dog,
                eta: "15 min".to_string(),
            }),
        },
        Vehicle {
            id: "2".to_string(),
            driver: "Ana López".to_string(),
            status: VehicleStatus::Available,
            location: GeoPoint {
                lat: 19.442608,
                lng: -99.143209,
            },
            current_trip: None,
        },
        Vehicle {
            id: "3".to_string(),
            driver: "Carlos Martínez".to_string(),
            status: VehicleStatus::InTransit,
            location: GeoPoint {
                lat: 19.422608,
                lng: -99.123209,
            },
            current_trip: Some(TripSummary {
                pickup: "Av. Central 456".to_string(),
                destination: "Hospital Veterinario 24hrs".to_string(),
                pet_type: PetType::Cat,
                eta: "8 min".to_string(),
            }),
        },
    ]
}
