//! Output formatting module

use pettransit_app::app::{DriverReport, FleetBoard, RiderReport};
use pettransit_domain::model::{TripRequest, Veterinary};
use pettransit_domain::service::{generate_fleet_report, FareBreakdown};
use pettransit_types::{OutputFormat, Result};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn format_fare(fare: &FareBreakdown, surcharge_percent: f64) -> String {
    let mut out = String::new();
    out.push_str("Estimated Fare\n");
    out.push_str("==============\n");
    out.push_str(&format!("Base fare:        ${:>9.2}\n", fare.base_fare));
    out.push_str(&format!(
        "Distance:         ${:>9.2}  ({} km x ${})\n",
        fare.distance_cost, fare.distance_km, fare.per_km_rate
    ));
    if let Some(surcharge) = fare.night_surcharge {
        out.push_str(&format!(
            "Night surcharge:  ${:>9.2}  (+{:.0}%)\n",
            surcharge, surcharge_percent
        ));
    }
    out.push_str("-------------------------------\n");
    out.push_str(&format!("Total:            ${:>9.2}\n", fare.total));
    out.push_str(if fare.is_night {
        "Night rate applied\n"
    } else {
        "Day rate\n"
    });
    out
}

pub fn output_fare(format: OutputFormat, fare: &FareBreakdown, surcharge_percent: f64) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(fare);
    }
    print!("\n{}", format_fare(fare, surcharge_percent));
    Ok(())
}

pub fn output_veterinaries(format: OutputFormat, vets: &[Veterinary]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(vets);
    }
    if vets.is_empty() {
        println!("No veterinaries.");
        return Ok(());
    }
    println!(
        "{:<4} {:<32} {:<20} {:>8} {:<9} {:>6}  {}",
        "ID", "Name", "Address", "Distance", "Status", "Rating", "Accepts"
    );
    println!("{}", "-".repeat(100));
    for vet in vets {
        println!(
            "{:<4} {:<32} {:<20} {:>5.1} km {:<9} {:>6.1}  {}",
            vet.id,
            vet.name,
            vet.address,
            vet.distance_km,
            vet.status.label(),
            vet.rating,
            vet.accepts.join(", ")
        );
    }
    Ok(())
}

fn format_request(request: &TripRequest) -> String {
    let mut out = format!(
        "#{} {} ({}){}\n",
        request.id,
        request.client_name,
        request.client_phone,
        if request.is_night_time { "  [night]" } else { "" }
    );
    out.push_str(&format!(
        "    Pet:     {} {}, {} kg\n",
        request.pet_type.label(),
        request.breed,
        request.weight_kg
    ));
    out.push_str(&format!("    Pickup:  {}\n", request.pickup));
    out.push_str(&format!("    To:      {}\n", request.destination));
    out.push_str(&format!(
        "    Fare:    ${:.2} ({} km)\n",
        request.fare, request.distance_km
    ));
    if let Some(notes) = &request.notes {
        out.push_str(&format!("    Notes:   {}\n", notes));
    }
    out
}

pub fn output_requests(format: OutputFormat, requests: &[TripRequest]) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(requests);
    }
    println!("Available requests ({})", requests.len());
    if requests.is_empty() {
        println!("No requests available right now.");
    }
    for request in requests {
        print!("{}", format_request(request));
    }
    Ok(())
}

pub fn output_driver_report(format: OutputFormat, report: &DriverReport) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(report);
    }
    for outcome in &report.outcomes {
        println!("{:<14} {}", outcome.action.to_string(), outcome.notice);
    }
    println!();
    println!("State:      {}", report.state.label());
    match &report.active {
        Some(active) => print!("Active trip:\n{}", format_request(active)),
        None => println!("Active trip: none"),
    }
    println!("Completed:  {} (${:.2})", report.completed.len(), report.earnings);
    println!();
    output_requests(format, &report.pending)
}

pub fn output_rider_report(
    format: OutputFormat,
    report: &RiderReport,
    surcharge_percent: f64,
) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(report);
    }
    let steps: Vec<_> = report
        .steps
        .iter()
        .map(|s| format!("{}.{}", s.number(), s.label()))
        .collect();
    println!("Steps: {}", steps.join(" -> "));
    for notice in &report.notices {
        println!("{}", notice);
    }
    if let Some(quote) = &report.quote {
        print!("\n{}", format_fare(quote, surcharge_percent));
    }
    if let Some(confirmation) = &report.confirmation {
        println!();
        println!("Request placed at {}", confirmation.confirmed_at.to_rfc3339());
        print!("{}", format_request(&confirmation.request));
    }
    println!("Current step: {}", report.final_step.label());
    Ok(())
}

pub fn output_fleet(format: OutputFormat, board: &FleetBoard) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(board);
    }
    print!("{}", generate_fleet_report(&board.entries, &board.stats));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pettransit_domain::service::{estimate_fare, FareSchedule};
    use pettransit_types::PetType;

    #[test]
    fn test_format_fare_night() {
        let fare = estimate_fare(&FareSchedule::default(), 8.5, 23).unwrap();
        let text = format_fare(&fare, 50.0);
        assert!(text.contains("Night surcharge:  $    88.75  (+50%)"));
        assert!(text.contains("Total:            $   266.25"));
        assert!(text.contains("Night rate applied"));
    }

    #[test]
    fn test_format_fare_day_has_no_surcharge() {
        let fare = estimate_fare(&FareSchedule::default(), 5.2, 14).unwrap();
        let text = format_fare(&fare, 50.0);
        assert!(!text.contains("Night surcharge"));
        assert!(text.contains("Total:            $   128.00"));
    }

    #[test]
    fn test_format_request_with_notes() {
        let request = TripRequest {
            id: "9".to_string(),
            client_name: "Ana".to_string(),
            client_phone: "123".to_string(),
            pet_type: PetType::Cat,
            breed: "Siamés".to_string(),
            weight_kg: 4.5,
            pickup: "A".to_string(),
            destination: "B".to_string(),
            distance_km: 8.5,
            fare: 320.0,
            notes: Some("Keep carrier closed".to_string()),
            is_night_time: true,
        };
        let text = format_request(&request);
        assert!(text.starts_with("#9 Ana (123)  [night]"));
        assert!(text.contains("Pet:     Cat Siamés, 4.5 kg"));
        assert!(text.contains("Notes:   Keep carrier closed"));
    }
}
