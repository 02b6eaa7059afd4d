pub mod machine_resource;
