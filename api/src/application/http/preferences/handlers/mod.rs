pub mod get_theme;
pub mod set_theme;
