//! Pet persistence: trait seam plus the PostgreSQL implementation.
//! Every operation is a single statement; nothing runs in an explicit transaction.

use crate::error::StoreError;
use crate::schema::{NewPet, Pet, PetName};
use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

#[async_trait]
pub trait PetRepository: Send + Sync {
    /// Rows whose id matches (zero or one).
    async fn find_by_id(&self, id: i32) -> Result<Vec<Pet>, StoreError>;

    /// Delete by id, returning the names of the deleted rows.
    async fn delete_by_id(&self, id: i32) -> Result<Vec<PetName>, StoreError>;

    /// Insert one row, returning it with its assigned id.
    async fn insert(&self, pet: &NewPet) -> Result<Vec<Pet>, StoreError>;

    async fn list(&self) -> Result<Vec<Pet>, StoreError>;

    /// Insert all rows in one statement.
    async fn insert_many(&self, pets: &[NewPet]) -> Result<Vec<Pet>, StoreError>;

    /// Delete every row; the id sequence keeps counting. Returns rows affected.
    async fn delete_all(&self) -> Result<u64, StoreError>;

    /// Empty the table and restart the id sequence.
    async fn truncate(&self) -> Result<(), StoreError>;
}

pub struct PgPetRepository {
    pool: PgPool,
}

impl PgPetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_BY_ID: &str = "SELECT id, pet_name, breed FROM pets WHERE id = $1";
const DELETE_BY_ID: &str = "DELETE FROM pets WHERE id = $1 RETURNING pet_name";
const INSERT_ONE: &str = "INSERT INTO pets (pet_name, breed) VALUES ($1, $2) RETURNING id, pet_name, breed";
const SELECT_ALL: &str = "SELECT id, pet_name, breed FROM pets ORDER BY id";
const DELETE_ALL: &str = "DELETE FROM pets";
const TRUNCATE: &str = "TRUNCATE TABLE pets RESTART IDENTITY";

#[async_trait]
impl PetRepository for PgPetRepository {
    async fn find_by_id(&self, id: i32) -> Result<Vec<Pet>, StoreError> {
        tracing::debug!(sql = %SELECT_BY_ID, id, "query");
        let rows = sqlx::query_as::<_, Pet>(SELECT_BY_ID)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn delete_by_id(&self, id: i32) -> Result<Vec<PetName>, StoreError> {
        tracing::debug!(sql = %DELETE_BY_ID, id, "query");
        let rows = sqlx::query_as::<_, PetName>(DELETE_BY_ID)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, pet: &NewPet) -> Result<Vec<Pet>, StoreError> {
        tracing::debug!(sql = %INSERT_ONE, pet_name = %pet.pet_name, "query");
        let rows = sqlx::query_as::<_, Pet>(INSERT_ONE)
            .bind(&pet.pet_name)
            .bind(&pet.breed)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list(&self) -> Result<Vec<Pet>, StoreError> {
        tracing::debug!(sql = %SELECT_ALL, "query");
        let rows = sqlx::query_as::<_, Pet>(SELECT_ALL)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert_many(&self, pets: &[NewPet]) -> Result<Vec<Pet>, StoreError> {
        if pets.is_empty() {
            return Ok(Vec::new());
        }
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("INSERT INTO pets (pet_name, breed) ");
        qb.push_values(pets, |mut row, pet| {
            row.push_bind(&pet.pet_name).push_bind(&pet.breed);
        });
        qb.push(" RETURNING id, pet_name, breed");
        tracing::debug!(sql = %qb.sql(), rows = pets.len(), "query");
        let rows = qb.build_query_as::<Pet>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        tracing::debug!(sql = %DELETE_ALL, "query");
        let done = sqlx::query(DELETE_ALL).execute(&self.pool).await?;
        Ok(done.rows_affected())
    }

    async fn truncate(&self) -> Result<(), StoreError> {
        tracing::debug!(sql = %TRUNCATE, "query");
        sqlx::query(TRUNCATE).execute(&self.pool).await?;
        Ok(())
    }
}
