use anyhow::Result;
use sqlx::{Executor, Pool, Sqlite};

use crate::{db::SqliteDb, model::project::ProjectModel};

const INSERT: &str = "INSERT INTO \"projects\" (\"active\", \"title\", \"description\", \"tags\", \"difficulty\", \"created_on\", \"updated_on\") VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING \"id\"";
const SELECT: &str = "SELECT \"id\", \"active\", \"title\", \"description\", \"tags\", \"difficulty\", \"created_on\", \"updated_on\" FROM \"projects\" WHERE \"id\" = ?";
const SELECT_ALL: &str = "SELECT \"id\", \"active\", \"title\", \"description\", \"tags\", \"difficulty\", \"created_on\", \"updated_on\" FROM \"projects\" ORDER BY \"id\"";
const UPDATE: &str = "UPDATE \"projects\" SET \"title\" = ?, \"description\" = ?, \"tags\" = ?, \"difficulty\" = ?, \"updated_on\" = ? WHERE \"id\" = ?";
const DELETE: &str = "DELETE FROM \"projects\" WHERE \"id\" = ?";

pub async fn init(pool: &Pool<Sqlite>) -> Result<()> {
    ep_log::info(Some("🔧"), "[SQLite] Setting up projects table");

    pool.execute("CREATE TABLE IF NOT EXISTS \"projects\" (\"id\" integer PRIMARY KEY AUTOINCREMENT, \"active\" boolean NOT NULL DEFAULT 1, \"title\" text NOT NULL, \"description\" text, \"tags\" text NOT NULL DEFAULT '', \"difficulty\" integer NOT NULL DEFAULT 1, \"created_on\" datetime NOT NULL, \"updated_on\" datetime NOT NULL)").await?;

    pool.prepare(INSERT).await?;
    pool.prepare(SELECT).await?;
    pool.prepare(SELECT_ALL).await?;
    pool.prepare(UPDATE).await?;
    pool.prepare(DELETE).await?;

    Ok(())
}

impl SqliteDb {
    /// Inserts `value` ignoring its id and returns the id assigned by the table.
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

    /// Returns the number of rows changed, zero when the id does not exist.
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

    /// Returns the number of rows removed, zero when the id does not exist.
    pub async fn delete_project(&self, id: &i64) -> Result<u64> {
        Ok(self
            .execute(sqlx::query(DELETE).bind(id))
            .await?
            .rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn model(title: &str) -> ProjectModel {
        let now = Utc::now();
        ProjectModel::new(
            &0,
            &true,
            title,
            &Some("Some *markdown*".to_owned()),
            "rust,web",
            &3,
            &now,
            &now,
        )
    }

    #[tokio::test]
    async fn assigns_increasing_ids() {
        let db = SqliteDb::new(":memory:", &1).await.unwrap();

        let first = db.insert_project(&model("first")).await.unwrap();
        let second = db.insert_project(&model("second")).await.unwrap();
        assert!(second > first);

        let projects = db.select_many_projects().await.unwrap();
        let titles: Vec<_> = projects.iter().map(|p| p.title()).collect();
        assert_eq!(titles, ["first", "second"]);
        assert!(projects.iter().all(|p| *p.active()));
    }

    #[tokio::test]
    async fn reports_missing_rows() {
        let db = SqliteDb::new(":memory:", &1).await.unwrap();

        assert!(db.select_project(&42).await.unwrap().is_none());
        assert_eq!(db.delete_project(&42).await.unwrap(), 0);

        let now = Utc::now();
        let missing = ProjectModel::new(&42, &true, "missing", &None, "", &1, &now, &now);
        assert_eq!(db.update_project(&missing).await.unwrap(), 0);
    }
}
