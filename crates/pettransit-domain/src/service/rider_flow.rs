//! Rider-side request flow
//!
//! Three linear steps: pick a veterinary, describe the pet, confirm. Back
//! navigation moves one step at a time. After confirmation the flow resets
//! itself once `reset_delay` has elapsed; `poll` applies the reset.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use pettransit_types::{PetType, RiderError};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::model::{Notice, PetDetails, TripRequest, Veterinary};
use crate::service::fare_estimator::{estimate_fare, FareBreakdown, FareSchedule};

/// Delay before a confirmed flow returns to the first step
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiderStep {
    SelectVet,
    PetDetails,
    Confirm,
}

impl RiderStep {
    pub fn label(&self) -> &'static str {
        match self {
            RiderStep::SelectVet => "select-vet",
            RiderStep::PetDetails => "pet-details",
            RiderStep::Confirm => "confirm",
        }
    }

    /// 1-based position shown in the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            RiderStep::SelectVet => 1,
            RiderStep::PetDetails => 2,
            RiderStep::Confirm => 3,
        }
    }
}

/// Identity of the rider placing the request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiderContact {
    pub name: String,
    pub phone: String,
    /// Pickup address
    pub pickup: String,
}

/// Outcome of a confirmed request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Confirmation {
    pub request: TripRequest,
    pub fare: FareBreakdown,
    pub confirmed_at: DateTime<Utc>,
    pub notice: Notice,
}

/// Rider flow state for one session
#[derive(Debug, Clone)]
pub struct RiderFlow {
    step: RiderStep,
    selected_vet: Option<Veterinary>,
    pet_type: Option<PetType>,
    details: PetDetails,
    contact: RiderContact,
    schedule: FareSchedule,
    reset_delay: Duration,
    reset_at: Option<Instant>,
}

impl RiderFlow {
    pub fn new(contact: RiderContact, schedule: FareSchedule) -> Self {
        Self {
            step: RiderStep::SelectVet,
            selected_vet: None,
            pet_type: None,
            details: PetDetails::default(),
            contact,
            schedule,
            reset_delay: DEFAULT_RESET_DELAY,
            reset_at: None,
        }
    }

    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }

    pub fn step(&self) -> RiderStep {
        self.step
    }

    pub fn selected_vet(&self) -> Option<&Veterinary> {
        self.selected_vet.as_ref()
    }

    pub fn pet_type(&self) -> Option<PetType> {
        self.pet_type
    }

    pub fn details(&self) -> &PetDetails {
        &self.details
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    /// Whether a confirmed flow is waiting for its reset
    pub fn is_reset_pending(&self) -> bool {
        self.reset_at.is_some()
    }

    /// Choose the destination veterinary and move to the pet details step
    pub fn select_vet(&mut self, vet: Veterinary) -> Result<Notice, RiderError> {
        self.ensure_step(RiderStep::SelectVet, "select a veterinary")?;
        let notice = Notice::success(format!("Veterinary selected: {}", vet.name));
        debug!(vet_id = %vet.id, "veterinary selected");
        self.selected_vet = Some(vet);
        self.step = RiderStep::PetDetails;
        Ok(notice)
    }

    pub fn set_pet_type(&mut self, pet_type: PetType) -> Result<(), RiderError> {
        self.ensure_editable()?;
        self.pet_type = Some(pet_type);
        Ok(())
    }

    pub fn set_breed(&mut self, breed: impl Into<String>) -> Result<(), RiderError> {
        self.ensure_editable()?;
        self.details.breed = breed.into();
        Ok(())
    }

    pub fn set_weight(&mut self, weight: impl Into<String>) -> Result<(), RiderError> {
        self.ensure_editable()?;
        self.details.weight = weight.into();
        Ok(())
    }

    pub fn set_notes(&mut self, notes: impl Into<String>) -> Result<(), RiderError> {
        self.ensure_editable()?;
        self.details.notes = notes.into();
        Ok(())
    }

    /// Validate the pet form and move to the confirm step
    pub fn submit_details(&mut self) -> Result<(), RiderError> {
        self.ensure_step(RiderStep::PetDetails, "submit pet details")?;
        self.validated_details()?;

        self.step = RiderStep::Confirm;
        debug!(step = self.step.label(), "rider step changed");
        Ok(())
    }

    /// Go back exactly one step
    pub fn back(&mut self) -> Result<RiderStep, RiderError> {
        self.ensure_editable()?;
        self.step = match self.step {
            RiderStep::SelectVet => return Err(RiderError::AtFirstStep),
            RiderStep::PetDetails => RiderStep::SelectVet,
            RiderStep::Confirm => RiderStep::PetDetails,
        };
        debug!(step = self.step.label(), "rider stepped back");
        Ok(self.step)
    }

    /// Fare for the selected veterinary at `hour`
    pub fn quote(&self, hour: u32) -> Result<FareBreakdown, RiderError> {
        self.ensure_step(RiderStep::Confirm, "quote a fare")?;
        let vet = self.vet_for_confirm()?;
        Ok(estimate_fare(&self.schedule, vet.distance_km, hour)?)
    }

    /// Place the request and schedule the reset at `now + reset_delay`
    pub fn confirm(&mut self, now: Instant, hour: u32) -> Result<Confirmation, RiderError> {
        self.ensure_step(RiderStep::Confirm, "confirm the trip")?;
        let vet = self.vet_for_confirm()?;
        let fare = estimate_fare(&self.schedule, vet.distance_km, hour)?;
        // The form stays editable on the confirm step, so check it again.
        let (pet_type, weight_kg) = self.validated_details()?;

        let request = TripRequest {
            id: uuid::Uuid::new_v4().to_string(),
            client_name: self.contact.name.clone(),
            client_phone: self.contact.phone.clone(),
            pet_type,
            breed: self.details.breed.trim().to_string(),
            weight_kg,
            pickup: self.contact.pickup.clone(),
            destination: vet.name.clone(),
            distance_km: vet.distance_km,
            fare: fare.total,
            notes: self.details.notes(),
            is_night_time: fare.is_night,
        };

        self.reset_at = Some(now + self.reset_delay);
        info!(request_id = %request.id, destination = %request.destination, fare = fare.total, "trip requested");

        Ok(Confirmation {
            request,
            fare,
            confirmed_at: Utc::now(),
            notice: Notice::success(
                "Trip requested successfully! A driver will be assigned soon.",
            ),
        })
    }

    /// Apply a pending reset if its deadline has passed. Returns true if the flow was reset.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.reset_at {
            Some(deadline) if now >= deadline => {
                self.step = RiderStep::SelectVet;
                self.selected_vet = None;
                self.pet_type = None;
                self.details = PetDetails::default();
                self.reset_at = None;
                debug!("rider flow reset");
                true
            }
            _ => false,
        }
    }

    /// Pet type and parsed weight, or the first problem with the form
    fn validated_details(&self) -> Result<(PetType, f64), RiderError> {
        let mut missing = Vec::new();
        if self.pet_type.is_none() {
            missing.push("pet type");
        }
        if self.details.breed.trim().is_empty() {
            missing.push("breed");
        }
        if self.details.weight.trim().is_empty() {
            missing.push("weight");
        }
        let pet_type = match self.pet_type {
            Some(pet_type) if missing.is_empty() => pet_type,
            _ => {
                warn!(?missing, "pet details incomplete");
                return Err(RiderError::IncompleteDetails { missing });
            }
        };
        let weight_kg = self.details.weight_kg().ok_or_else(|| {
            warn!(weight = %self.details.weight, "pet weight invalid");
            RiderError::InvalidWeight(self.details.weight.clone())
        })?;
        Ok((pet_type, weight_kg))
    }

    fn vet_for_confirm(&self) -> Result<&Veterinary, RiderError> {
        self.selected_vet.as_ref().ok_or(RiderError::WrongStep {
            action: "confirm without a veterinary",
            step: self.step.label(),
        })
    }

    fn ensure_editable(&self) -> Result<(), RiderError> {
        if self.reset_at.is_some() {
            return Err(RiderError::ResetPending);
        }
        Ok(())
    }

    fn ensure_step(&self, expected: RiderStep, action: &'static str) -> Result<(), RiderError> {
        self.ensure_editable()?;
        if self.step != expected {
            warn!(action, step = self.step.label(), "rider transition refused");
            return Err(RiderError::WrongStep {
                action,
                step: self.step.label(),
            });
        }
        Ok(())
    }
}
