pub mod analysis;
pub mod common;
pub mod preferences;
pub mod screen;
pub mod status;
