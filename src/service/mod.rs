//! Pet persistence and request-input validation.

mod repository;
mod seed;
mod validation;
pub use repository::{PetRepository, PgPetRepository};
pub use seed::{seed_catalog, SEED_CATALOG};
pub use validation::{parse_pet_id, CreatePetInput, PetId};
