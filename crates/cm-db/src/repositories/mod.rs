pub mod machine_repository;
pub mod material_repository;
pub mod project_repository;
pub mod team_repository;
