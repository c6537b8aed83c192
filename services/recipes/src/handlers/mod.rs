pub mod ingredient;
pub mod recipe;
pub mod saved;
pub mod subscription;
pub mod tag;
