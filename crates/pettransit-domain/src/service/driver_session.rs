//! Driver-side trip lifecycle
//!
//! A driver reviews pending requests, accepts at most one at a time, and
//! completes it before accepting another. Rejecting a request drops it from
//! the pending list regardless of the session state.

use chrono::{DateTime, Utc};
use pettransit_types::DriverError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::model::{Notice, TripRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverState {
    /// No active trip and nothing pending
    Idle,
    /// Pending requests are available
    Reviewing,
    /// A trip has been accepted
    Active,
}

impl DriverState {
    pub fn label(&self) -> &'static str {
        match self {
            DriverState::Idle => "idle",
            DriverState::Reviewing => "reviewing",
            DriverState::Active => "active",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedTrip {
    pub request: TripRequest,
    pub completed_at: DateTime<Utc>,
}

/// In-memory driver session over a list of pending requests
#[derive(Debug, Clone, Default)]
pub struct DriverSession {
    pending: Vec<TripRequest>,
    active: Option<TripRequest>,
    completed: Vec<CompletedTrip>,
}

impl DriverSession {
    pub fn new(pending: Vec<TripRequest>) -> Self {
        Self {
            pending,
            active: None,
            completed: Vec::new(),
        }
    }

    pub fn state(&self) -> DriverState {
        if self.active.is_some() {
            DriverState::Active
        } else if self.pending.is_empty() {
            DriverState::Idle
        } else {
            DriverState::Reviewing
        }
    }

    pub fn pending(&self) -> &[TripRequest] {
        &self.pending
    }

    pub fn active_trip(&self) -> Option<&TripRequest> {
        self.active.as_ref()
    }

    pub fn completed(&self) -> &[CompletedTrip] {
        &self.completed
    }

    /// Sum of fares of completed trips
    pub fn earnings(&self) -> f64 {
        self.completed.iter().map(|t| t.request.fare).sum()
    }

    /// Accept a pending request, making it the active trip
    pub fn accept(&mut self, request_id: &str) -> Result<Notice, DriverError> {
        if let Some(active) = &self.active {
            warn!(request_id, active_id = %active.id, "accept refused: trip already active");
            return Err(DriverError::AlreadyActive {
                active_id: active.id.clone(),
            });
        }

        let index = self
            .pending
            .iter()
            .position(|r| r.id == request_id)
            .ok_or_else(|| DriverError::RequestNotFound(request_id.to_string()))?;

        let request = self.pending.remove(index);
        info!(request_id, client = %request.client_name, "trip accepted");
        let notice = Notice::success(format!("Trip accepted: {}", request.client_name));
        self.active = Some(request);
        debug!(state = self.state().label(), "driver state changed");
        Ok(notice)
    }

    /// Drop a request from the pending list.
    ///
    /// Returns the removed request, or None if no pending request had that id.
    pub fn reject(&mut self, request_id: &str) -> (Option<TripRequest>, Notice) {
        let removed = self
            .pending
            .iter()
            .position(|r| r.id == request_id)
            .map(|index| self.pending.remove(index));

        match &removed {
            Some(_) => debug!(request_id, "trip rejected"),
            None => debug!(request_id, "reject ignored: no such pending request"),
        }
        (removed, Notice::info("Trip rejected"))
    }

    /// Finish the active trip
    pub fn complete(&mut self) -> Result<(CompletedTrip, Notice), DriverError> {
        let request = self.active.take().ok_or_else(|| {
            warn!("complete refused: no active trip");
            DriverError::NoActiveTrip
        })?;

        info!(request_id = %request.id, fare = request.fare, "trip completed");
        let completed = CompletedTrip {
            request,
            completed_at: Utc::now(),
        };
        self.completed.push(completed.clone());
        debug!(state = self.state().label(), "driver state changed");
        Ok((completed, Notice::success("Trip completed successfully!")))
    }
}
