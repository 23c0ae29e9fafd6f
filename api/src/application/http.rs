pub mod analysis;
pub mod health;
pub mod preferences;
pub mod screen;
pub mod server;
