//! Presence and type checks for path ids and create bodies.

use crate::error::ApiError;
use crate::schema::NewPet;
use serde_json::Value;

/// A numeric `:id` path segment. Any finite number is accepted; only integers
/// in the `SERIAL` range can match a row.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PetId(f64);

impl PetId {
    /// Row id to query with, or `None` when no row can carry this number.
    pub fn row_id(self) -> Option<i32> {
        let n = self.0;
        if n.fract() == 0.0 && n >= f64::from(i32::MIN) && n <= f64::from(i32::MAX) {
            Some(n as i32)
        } else {
            None
        }
    }
}

impl std::fmt::Display for PetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.row_id() {
            Some(id) => write!(f, "{}", id),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Parse the `:id` path segment. Empty is 422, not a finite number is 400.
/// Whitespace-only counts as zero, and `0x`/`0o`/`0b` prefixes are read as integers.
pub fn parse_pet_id(raw: &str) -> Result<PetId, ApiError> {
    if raw.is_empty() {
        return Err(ApiError::id_required());
    }
    let t = raw.trim();
    if t.is_empty() {
        return Ok(PetId(0.0));
    }
    let prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .iter()
        .find_map(|(prefix, radix)| t.strip_prefix(prefix).map(|digits| (digits, *radix)));
    let n = match prefixed {
        Some((digits, radix)) => u64::from_str_radix(digits, radix).ok().map(|v| v as f64),
        None if is_decimal_literal(t) => t.parse::<f64>().ok(),
        None => None,
    };
    match n {
        // -0 and 0 name the same row
        Some(n) if n.is_finite() => Ok(PetId(n + 0.0)),
        _ => Err(ApiError::id_not_a_number()),
    }
}

/// Digits with optional sign, point and exponent. Keeps out `inf`/`nan` spellings.
fn is_decimal_literal(s: &str) -> bool {
    s.bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
}

/// Validated `POST /api/pet/create` body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatePetInput {
    pub name: String,
    pub breed: Option<String>,
}

impl CreatePetInput {
    pub fn from_json(body: Value) -> Result<Self, ApiError> {
        let mut map = match body {
            Value::Object(m) => m,
            _ => return Err(ApiError::invalid_json()),
        };
        let name = match map.remove("name") {
            Some(Value::String(s)) if !s.trim().is_empty() => s,
            _ => return Err(ApiError::name_required()),
        };
        let breed = match map.remove("breed") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(_) => return Err(ApiError::invalid_json()),
        };
        Ok(Self { name, breed })
    }

    pub fn into_new_pet(self) -> NewPet {
        NewPet {
            pet_name: self.name,
            breed: self.breed,
        }
    }
}
