pub mod catalog;
pub mod recipe;
pub mod saved;
pub mod shopping_list;
pub mod subscription;
