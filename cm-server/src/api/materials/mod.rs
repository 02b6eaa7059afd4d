pub mod material_resource;
