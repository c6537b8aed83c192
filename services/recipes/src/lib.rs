//! Recipes service: catalogs, recipe composition, the saved-item ledger,
//! shopping-list aggregation, and author subscriptions.

pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod infra;
pub mod router;
pub mod state;
pub mod usecase;
