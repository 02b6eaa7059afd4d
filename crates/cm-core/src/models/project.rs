//! Project entity - the top-level construction engagement.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A construction project. Ids are assigned by the persistence layer on
/// insert; an entity in memory always carries a real id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Site address or free-form location label
    pub location: String,
    pub start_date: NaiveDate,
    pub expected_end_date: NaiveDate,
    pub budget: f64,
    pub url_image: String,
    pub owner_user_id: i64,
}

impl Project {
    /// Check if the planned window is ordered (end on or after start)
    pub fn has_valid_schedule(&self) -> bool {
        self.expected_end_date >= self.start_date
    }
}
