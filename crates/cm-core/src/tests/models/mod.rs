mod dashboard;
mod machine;
mod machine_status;
mod project;
mod project_id;
