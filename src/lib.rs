//! Pet service: CRUD over a single PostgreSQL `pets` table exposed as a JSON REST API.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{ApiError, ConfigError, StoreError};
pub use routes::{app, pet_routes, pets_routes};
pub use schema::{NewPet, Pet, PetName};
pub use service::{PetRepository, PgPetRepository};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_pets_table};
