//! Material entity - stock tracked per project, read-only here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: i64,
    /// Owning project (foreign key)
    pub project_id: i64,
    pub name: String,
    /// Unit of measure, e.g. "kg", "m3", "bag"
    pub unit: String,
    pub quantity: f64,
    pub total_cost: f64,
}
