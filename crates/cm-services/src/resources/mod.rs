pub mod machine_query_service;
pub mod material_query_service;
