//! `pets` table and its record shapes.

use serde::{Deserialize, Serialize};

pub const PETS_TABLE: &str = "pets";
pub const NAME_MAX_LEN: usize = 50;
pub const BREED_MAX_LEN: usize = 50;

/// A persisted row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i32,
    pub pet_name: String,
    pub breed: Option<String>,
}

/// Insert shape; `id` is assigned by the table's sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPet {
    pub pet_name: String,
    pub breed: Option<String>,
}

impl NewPet {
    pub fn new(pet_name: impl Into<String>, breed: Option<&str>) -> Self {
        Self {
            pet_name: pet_name.into(),
            breed: breed.map(str::to_string),
        }
    }
}

/// Projection returned by delete-by-id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PetName {
    pub pet_name: String,
}
