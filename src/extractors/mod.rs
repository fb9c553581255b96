//! Request extractors that reject through `ApiError`.
//! `PetId` lives in `service` and is extracted from the `:id` path segment here.

mod pet_body;
mod pet_id;
pub use pet_body::PetBody;
