use cm_core::Material;

use serde::Serialize;

/// Material view exposed at the HTTP boundary
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialResource {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub unit: String,
    pub quantity: f64,
    pub total_cost: f64,
}

impl From<Material> for MaterialResource {
    fn from(m: Material) -> Self {
        Self {
            id: m.id,
            project_id: m.project_id,
            name: m.name,
            unit: m.unit,
            quantity: m.quantity,
            total_cost: m.total_cost,
        }
    }
}
