pub mod core;
pub mod loader;
pub mod registry;
