//! MotoGP calendar models
//!
//! Shape of the season file under the data directory.

use serde::{Deserialize, Serialize};

/// A full season of races.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calendar {
    pub year: i32,
    pub races: Vec<Race>,
}

/// One race weekend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    #[serde(default)]
    pub round: u32,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub circuit: String,
    #[serde(default)]
    pub date: String,
    pub sessions: Sessions,
}

/// Session start times.
///
/// Values are RFC 3339 timestamps as stored, or display strings once
/// formatted for a response. Weekends without a sprint leave it empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sessions {
    #[serde(default)]
    pub q1: String,
    #[serde(default)]
    pub q2: String,
    #[serde(default)]
    pub sprint: String,
    #[serde(default)]
    pub race: String,
}

impl Sessions {
    /// Applies `f` to every session value in place.
    pub fn map_each<F>(&mut self, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        for slot in [&mut self.q1, &mut self.q2, &mut self.sprint, &mut self.race] {
            let updated = f(slot.as_str());
            *slot = updated;
        }
    }
}
