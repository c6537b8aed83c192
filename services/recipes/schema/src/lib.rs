//! sea-orm entities for the recipes service.

pub mod ingredients;
pub mod recipe_ingredients;
pub mod recipe_tags;
pub mod recipes;
pub mod saved_recipes;
pub mod subscriptions;
pub mod tags;
