pub mod settings;
pub mod setup;
