pub mod redirect;
pub mod timestamp;
