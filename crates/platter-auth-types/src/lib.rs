//! Gateway-injected identity types shared by Platter services.

pub mod identity;
