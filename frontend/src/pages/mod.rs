pub mod favorites;
pub mod not_found;
pub mod recipe_detail;
pub mod recipe_list;
