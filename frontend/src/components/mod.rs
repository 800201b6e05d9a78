// Reusable components live here.

pub mod error_state;
pub mod header;
pub mod loading_spinner;
pub mod recipe_card;
