pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::machine_repository::MachineRepository;
pub use repositories::material_repository::MaterialRepository;
pub use repositories::project_repository::ProjectRepository;
pub use repositories::team_repository::TeamRepository;
