//! Database bootstrap: create the target database and the `pets` table if missing.

use crate::error::StoreError;
use crate::schema::{BREED_MAX_LEN, NAME_MAX_LEN, PETS_TABLE};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// DDL for the `pets` table. Idempotent.
pub fn pets_table_ddl() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id SERIAL PRIMARY KEY,
            pet_name VARCHAR({}) NOT NULL,
            breed VARCHAR({})
        )
        "#,
        PETS_TABLE, NAME_MAX_LEN, BREED_MAX_LEN
    )
}

pub async fn ensure_pets_table(pool: &PgPool) -> Result<(), StoreError> {
    let ddl = pets_table_ddl();
    tracing::debug!(sql = %ddl, "ensure table");
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Connect to the `postgres` admin database and create the database named in `database_url` if it does not exist.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| StoreError::InvalidUrl(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), StoreError> {
    let scheme_end = url
        .find("://")
        .ok_or_else(|| StoreError::InvalidUrl("missing scheme".into()))?
        + 3;
    let path_start = match url[scheme_end..].find('/') {
        Some(i) => scheme_end + i + 1,
        None => return Ok((url.to_string(), String::new())),
    };
    let path_and_query = &url[path_start..];
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let query = path_and_query.find('?').map(|i| &path_and_query[i..]).unwrap_or("");
    let admin_url = format!("{}postgres{}", &url[..path_start], query);
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
