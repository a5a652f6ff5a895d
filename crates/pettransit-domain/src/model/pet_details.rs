//! Rider form input for the pet being transported

use serde::{Deserialize, Serialize};

/// Pet details as typed into the rider form.
///
/// Weight is kept as raw text until the form is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PetDetails {
    pub breed: String,
    pub weight: String,
    pub notes: String,
}

impl PetDetails {
    /// Parsed weight in kilograms, if the text is a positive number
    pub fn weight_kg(&self) -> Option<f64> {
        self.weight
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|w| w.is_finite() && *w > 0.0)
    }

    /// Notes, or None when left blank
    pub fn notes(&self) -> Option<String> {
        let notes = self.notes.trim();
        if notes.is_empty() {
            None
        } else {
            Some(notes.to_string())
        }
    }
}
