//! HTTP handlers for single-pet, collection and root routes.

pub mod pet;
pub mod pets;
pub mod root;
