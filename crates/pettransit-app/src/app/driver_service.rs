//! Driver use case: run a sequence of actions against a fresh session

use std::str::FromStr;

use pettransit_domain::model::{Notice, TripRequest};
use pettransit_domain::repository::TripRequestRepository;
use pettransit_domain::service::{CompletedTrip, DriverSession, DriverState};
use pettransit_types::{Error, Result};
use serde::Serialize;

/// One driver interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "id", rename_all = "lowercase")]
pub enum DriverAction {
    Accept(String),
    Reject(String),
    Complete,
}

impl FromStr for DriverAction {
    type Err = Error;

    /// Parses `accept:<id>`, `reject:<id>` or `complete`
    fn from_str(s: &str) -> Result<Self> {
        let (verb, id) = match s.split_once(':') {
            Some((verb, id)) => (verb.trim(), Some(id.trim())),
            None => (s.trim(), None),
        };
        match (verb.to_lowercase().as_str(), id) {
            ("accept", Some(id)) if !id.is_empty() => Ok(DriverAction::Accept(id.to_string())),
            ("reject", Some(id)) if !id.is_empty() => Ok(DriverAction::Reject(id.to_string())),
            ("complete", None) => Ok(DriverAction::Complete),
            _ => Err(Error::InvalidArgument(format!(
                "unknown driver action '{}' (expected accept:<id>, reject:<id> or complete)",
                s
            ))),
        }
    }
}

impl std::fmt::Display for DriverAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DriverAction::Accept(id) => write!(f, "accept:{}", id),
            DriverAction::Reject(id) => write!(f, "reject:{}", id),
            DriverAction::Complete => write!(f, "complete"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionOutcome {
    pub action: DriverAction,
    pub notice: Notice,
}

/// Final state of a driver session
#[derive(Debug, Clone, Serialize)]
pub struct DriverReport {
    pub outcomes: Vec<ActionOutcome>,
    pub state: DriverState,
    pub pending: Vec<TripRequest>,
    pub active: Option<TripRequest>,
    pub completed: Vec<CompletedTrip>,
    pub earnings: f64,
}

/// Load pending requests and apply `actions` in order.
///
/// Refused transitions do not stop the run; they are reported as error notices.
pub fn run_driver_session<R: TripRequestRepository>(
    repo: &R,
    actions: &[DriverAction],
) -> Result<DriverReport> {
    let mut session = DriverSession::new(repo.find_all()?);
    let outcomes = actions
        .iter()
        .map(|action| ActionOutcome {
            action: action.clone(),
            notice: apply(&mut session, action),
        })
        .collect();

    Ok(DriverReport {
        outcomes,
        state: session.state(),
        pending: session.pending().to_vec(),
        active: session.active_trip().cloned(),
        completed: session.completed().to_vec(),
        earnings: session.earnings(),
    })
}

fn apply(session: &mut DriverSession, action: &DriverAction) -> Notice {
    let result = match action {
        DriverAction::Accept(id) => session.accept(id),
        DriverAction::Reject(id) => Ok(session.reject(id).1),
        DriverAction::Complete => session.complete().map(|(_, notice)| notice),
    };
    result.unwrap_or_else(|e| Notice::error(e.to_string()))
}
