//! Rider use case: walk the request flow from veterinary choice to confirmation

use std::time::{Duration, Instant};

use pettransit_domain::model::Notice;
use pettransit_domain::repository::VeterinaryRepository;
use pettransit_domain::service::{Confirmation, FareBreakdown, RiderFlow, RiderStep};
use pettransit_types::{CatalogError, PetType, Result};
use serde::Serialize;
use tracing::debug;

use crate::config::Config;

/// Form input for one rider request
#[derive(Debug, Clone, Default)]
pub struct RiderRequest {
    pub vet_id: String,
    pub pet_type: Option<PetType>,
    pub breed: String,
    pub weight: String,
    pub notes: String,
    /// Step back from the confirm page once and resubmit
    pub revisit_details: bool,
    /// Stop at the confirm step without placing the request
    pub skip_confirm: bool,
    /// Hour used for pricing
    pub hour: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiderReport {
    /// Steps visited, in order
    pub steps: Vec<RiderStep>,
    pub notices: Vec<Notice>,
    pub quote: Option<FareBreakdown>,
    pub confirmation: Option<Confirmation>,
    pub final_step: RiderStep,
}

/// Run the rider flow.
///
/// `wait` is called with the reset delay after confirmation; the flow is
/// polled once it returns. Validation failures end the run at the step
/// where they happened, with the failure as an error notice.
pub fn run_rider_flow<R, W>(
    repo: &R,
    config: &Config,
    request: &RiderRequest,
    wait: W,
) -> Result<RiderReport>
where
    R: VeterinaryRepository,
    W: FnOnce(Duration),
{
    let vet = repo
        .find_by_id(&request.vet_id)?
        .ok_or_else(|| CatalogError::VeterinaryNotFound(request.vet_id.clone()))?;

    let mut flow = RiderFlow::new(config.rider_contact(), config.fare)
        .with_reset_delay(config.reset_delay());
    let mut report = RiderReport {
        steps: vec![flow.step()],
        notices: Vec::new(),
        quote: None,
        confirmation: None,
        final_step: flow.step(),
    };

    report.notices.push(flow.select_vet(vet)?);
    report.steps.push(flow.step());

    if let Some(pet_type) = request.pet_type {
        flow.set_pet_type(pet_type)?;
    }
    flow.set_breed(request.breed.as_str())?;
    flow.set_weight(request.weight.as_str())?;
    flow.set_notes(request.notes.as_str())?;

    if let Err(e) = flow.submit_details() {
        report.notices.push(Notice::error(e.to_string()));
        report.final_step = flow.step();
        return Ok(report);
    }
    report.steps.push(flow.step());

    if request.revisit_details {
        flow.back()?;
        report.steps.push(flow.step());
        flow.submit_details()?;
        report.steps.push(flow.step());
    }

    report.quote = Some(flow.quote(request.hour)?);

    if request.skip_confirm {
        report.final_step = flow.step();
        return Ok(report);
    }

    let confirmation = flow.confirm(Instant::now(), request.hour)?;
    report.notices.push(confirmation.notice.clone());
    report.confirmation = Some(confirmation);

    wait(flow.reset_delay());
    if flow.poll(Instant::now()) {
        report.steps.push(flow.step());
    } else {
        debug!("reset not yet due after wait");
    }
    report.final_step = flow.step();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pettransit_domain::model::NoticeLevel;
    use pettransit_infra::persistence::CatalogRepository;
    use pettransit_types::Error;

    fn config() -> Config {
        Config {
            reset_delay_ms: 0,
            ..Default::default()
        }
    }

    fn request() -> RiderRequest {
        RiderRequest {
            vet_id: "2".to_string(),
            pet_type: Some(PetType::Cat),
            breed: "Siamés".to_string(),
            weight: "4.5".to_string(),
            hour: 14,
            ..Default::default()
        }
    }

    #[test]
    fn test_full_flow_resets_after_confirmation() {
        let repo = CatalogRepository::builtin();
        let mut waited = None;
        let report = run_rider_flow(&repo, &config(), &request(), |d| waited = Some(d)).unwrap();
        assert_eq!(waited, Some(Duration::from_millis(0)));
        assert_eq!(
            report.steps,
            vec![
                RiderStep::SelectVet,
                RiderStep::PetDetails,
                RiderStep::Confirm,
                RiderStep::SelectVet
            ]
        );
        assert_eq!(report.final_step, RiderStep::SelectVet);
        let confirmation = report.confirmation.unwrap();
        // 50 + 3.8 * 15
        assert!((confirmation.request.fare - 107.0).abs() < 1e-9);
        assert_eq!(confirmation.request.client_name, "Guest Rider");
    }

    #[test]
    fn test_incomplete_form_stops_at_details() {
        let repo = CatalogRepository::builtin();
        let req = RiderRequest {
            breed: String::new(),
            ..request()
        };
        let report = run_rider_flow(&repo, &config(), &req, |_| {}).unwrap();
        assert_eq!(report.final_step, RiderStep::PetDetails);
        assert!(report.confirmation.is_none());
        let last = report.notices.last().unwrap();
        assert_eq!(last.level, NoticeLevel::Error);
        assert!(last.message.contains("breed"));
    }

    #[test]
    fn test_revisit_and_skip_confirm() {
        let repo = CatalogRepository::builtin();
        let req = RiderRequest {
            revisit_details: true,
            skip_confirm: true,
            hour: 23,
            ..request()
        };
        let report = run_rider_flow(&repo, &config(), &req, |_| panic!("no wait expected")).unwrap();
        assert_eq!(
            report.steps,
            vec![
                RiderStep::SelectVet,
                RiderStep::PetDetails,
                RiderStep::Confirm,
                RiderStep::PetDetails,
                RiderStep::Confirm
            ]
        );
        assert_eq!(report.final_step, RiderStep::Confirm);
        assert!(report.quote.unwrap().is_night);
    }

    #[test]
    fn test_unknown_vet() {
        let repo = CatalogRepository::builtin();
        let req = RiderRequest {
            vet_id: "42".to_string(),
            ..request()
        };
        assert!(matches!(
            run_rider_flow(&repo, &config(), &req, |_| {}),
            Err(Error::Catalog(CatalogError::VeterinaryNotFound(_)))
        ));
    }
}
