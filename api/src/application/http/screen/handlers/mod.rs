pub mod get_screens;
pub mod set_places_location;
