//! Fixed catalog inserted by `POST /api/pets/seed-pets`.

use crate::schema::NewPet;

pub const SEED_CATALOG: [(&str, &str); 15] = [
    ("Buddy", "Golden Retriever"),
    ("Max", "German Shepherd"),
    ("Bella", "Labrador Retriever"),
    ("Charlie", "Beagle"),
    ("Luna", "Siberian Husky"),
    ("Cooper", "Bulldog"),
    ("Daisy", "Poodle"),
    ("Rocky", "Boxer"),
    ("Molly", "Dachshund"),
    ("Bailey", "Shih Tzu"),
    ("Whiskers", "Siamese"),
    ("Simba", "Maine Coon"),
    ("Cleo", "Persian"),
    ("Oliver", "British Shorthair"),
    ("Nala", "Bengal"),
];

pub fn seed_catalog() -> Vec<NewPet> {
    SEED_CATALOG
        .iter()
        .map(|(name, breed)| NewPet::new(*name, Some(*breed)))
        .collect()
}
