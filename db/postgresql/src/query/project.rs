use anyhow::Result;
use sqlx::{Executor, Pool, Postgres};

use crate::{db::PostgresDb, model::project::ProjectModel};

pub const INSERT: &str = "INSERT INTO \"projects\" (\"active\", \"title\", \"description\", \"tags\", \"difficulty\", \"created_on\", \"updated_on\") VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING \"id\"";
pub const SELECT: &str = "SELECT \"id\", \"active\", \"title\", \"description\", \"tags\", \"difficulty\", \"created_on\", \"updated_on\" FROM \"projects\" WHERE \"id\" = $1";
pub const SELECT_ALL: &str = "SELECT \"id\", \"active\", \"title\", \"description\", \"tags\", \"difficulty\", \"created_on\", \"updated_on\" FROM \"projects\" ORDER BY \"id\"";
pub const UPDATE: &str = "UPDATE \"projects\" SET \"title\" = $1, \"description\" = $2, \"tags\" = $3, \"difficulty\" = $4, \"updated_on\" = $5 WHERE \"id\" = $6";
pub const DELETE: &str = "DELETE FROM \"projects\" WHERE \"id\" = $1";

pub async fn init(pool: &Pool<Postgres>) -> Result<()> {
    ep_log::info(Some("🔧"), "[PostgreSQL] Setting up projects table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"projects\" (\"id\" bigserial, \"active\" boolean NOT NULL DEFAULT true, \"title\" text NOT NULL, \"description\" text, \"tags\" text NOT NULL DEFAULT '', \"difficulty\" integer NOT NULL DEFAULT 1, \"created_on\" timestamptz NOT NULL DEFAULT now(), \"updated_on\" timestamptz NOT NULL DEFAULT now(), PRIMARY KEY (\"id\"))").await?;

    pool.prepare(INSERT).await?;
    pool.prepare(SELECT).await?;
    pool.prepare(SELECT_ALL).await?;
    pool.prepare(UPDATE).await?;
    pool.prepare(DELETE).await?;

    Ok(())
}

impl PostgresDb {
    pub async fn insert_project(&self, value: &ProjectModel) -> Result<i64> {
        let (id,): (i64,) = self
            .fetch_one(
                sqlx::query_as(INSERT)
                    .bind(value.active())
                    .bind(value.title())
                    .bind(value.description())
                    .bind(value.tags())
                    .bind(value.difficulty())
                    .bind(value.created_on())
                    .bind(value.updated_on()),
            )
            .await?;
        Ok(id)
    }

    pub async fn select_project(&self, id: &i64) -> Result<Option<ProjectModel>> {
        Ok(self.fetch_optional(sqlx::query_as(SELECT).bind(id)).await?)
    }

    pub async fn select_many_projects(&self) -> Result<Vec<ProjectModel>> {
        Ok(self.fetch_all(sqlx::query_as(SELECT_ALL)).await?)
    }

    pub async fn update_project(&self, value: &ProjectModel) -> Result<u64> {
        Ok(self
            .execute(
                sqlx::query(UPDATE)
                    .bind(value.title())
                    .bind(value.description())
                    .bind(value.tags())
                    .bind(value.difficulty())
                    .bind(value.updated_on())
                    .bind(value.id()),
            )
            .await?
            .rows_affected())
    }

    pub async fn delete_project(&self, id: &i64) -> Result<u64> {
        Ok(self
            .execute(sqlx::query(DELETE).bind(id))
            .await?
            .rows_affected())
    }
}
