//! In-memory `PetRepository` and request helpers shared by the router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pet_service::{app, AppState, NewPet, Pet, PetName, PetRepository, StoreError};
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

/// Models a serial id column: `delete_all` keeps the counter, `truncate` restarts it.
#[derive(Default)]
pub struct MemoryPetRepository {
    inner: Mutex<Inner>,
    calls: AtomicUsize,
    fail: bool,
}

#[derive(Default)]
struct Inner {
    rows: Vec<Pet>,
    last_id: i32,
}

impl MemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation fails as if the pool were closed.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<Pet> {
        self.inner.lock().unwrap().rows.clone()
    }

    fn enter(&self) -> Result<std::sync::MutexGuard<'_, Inner>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(StoreError::Db(sqlx::Error::PoolClosed));
        }
        Ok(self.inner.lock().unwrap())
    }
}

impl Inner {
    fn push(&mut self, pet: &NewPet) -> Pet {
        self.last_id += 1;
        let row = Pet {
            id: self.last_id,
            pet_name: pet.pet_name.clone(),
            breed: pet.breed.clone(),
        };
        self.rows.push(row.clone());
        row
    }
}

#[async_trait]
impl PetRepository for MemoryPetRepository {
    async fn find_by_id(&self, id: i32) -> Result<Vec<Pet>, StoreError> {
        let inner = self.enter()?;
        Ok(inner.rows.iter().filter(|p| p.id == id).cloned().collect())
    }

    async fn delete_by_id(&self, id: i32) -> Result<Vec<PetName>, StoreError> {
        let mut inner = self.enter()?;
        let (gone, kept): (Vec<Pet>, Vec<Pet>) = inner.rows.drain(..).partition(|p| p.id == id);
        inner.rows = kept;
        Ok(gone.into_iter().map(|p| PetName { pet_name: p.pet_name }).collect())
    }

    async fn insert(&self, pet: &NewPet) -> Result<Vec<Pet>, StoreError> {
        let mut inner = self.enter()?;
        Ok(vec![inner.push(pet)])
    }

    async fn list(&self) -> Result<Vec<Pet>, StoreError> {
        let inner = self.enter()?;
        Ok(inner.rows.clone())
    }

    async fn insert_many(&self, pets: &[NewPet]) -> Result<Vec<Pet>, StoreError> {
        let mut inner = self.enter()?;
        Ok(pets.iter().map(|p| inner.push(p)).collect())
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut inner = self.enter()?;
        let n = inner.rows.len() as u64;
        inner.rows.clear();
        Ok(n)
    }

    async fn truncate(&self) -> Result<(), StoreError> {
        let mut inner = self.enter()?;
        inner.rows.clear();
        inner.last_id = 0;
        Ok(())
    }
}

pub fn router(repo: Arc<MemoryPetRepository>) -> Router {
    app(AppState { pets: repo }, 64 * 1024)
}

pub async fn send(router: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(b) => {
            builder = builder.header("content-type", "application/json");
            Body::from(b.to_string())
        }
        None => Body::empty(),
    };
    let request = builder
        .body(body)
        .unwrap_or_else(|err| panic!("failed to build request: {err}"));
    let response = match router.clone().oneshot(request).await {
        Ok(response) => response,
        Err(err) => panic!("router request failed: {err}"),
    };
    let status = response.status();
    let bytes = match axum::body::to_bytes(response.into_body(), 1024 * 1024).await {
        Ok(bytes) => bytes,
        Err(err) => panic!("failed to read response body: {err}"),
    };
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|err| panic!("response body is not JSON: {err}"))
    };
    (status, value)
}

pub fn assert_error(status: StatusCode, body: &Value, expected: StatusCode, kind: &str) {
    assert_eq!(status, expected, "body: {body}");
    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["error"], kind);
    assert!(body["message"].is_string());
    assert!(body["data"].is_null());
}
