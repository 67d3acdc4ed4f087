use chrono::{DateTime, Duration, Utc};
use ep_db_postgresql::model::project::ProjectModel as ProjectPostgresModel;
use ep_db_sqlite::model::project::ProjectModel as ProjectSqliteModel;
use ep_error::{Error, Result};

use crate::Db;

pub const DEFAULT_DIFFICULTY: i32 = 1;

pub struct ProjectDao {
    id: Option<i64>,
    active: bool,
    title: String,
    description: Option<String>,
    tags: String,
    difficulty: i32,
    created_on: DateTime<Utc>,
    updated_on: DateTime<Utc>,
}

impl ProjectDao {
    /// Builds a project that is not persisted yet; `id` stays `None` until
    /// [`ProjectDao::db_insert`] succeeds.
    pub fn new(title: &str, description: Option<&str>, tags: &str, difficulty: &i32) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            active: true,
            title: title.to_owned(),
            description: description.map(str::to_owned),
            tags: tags.to_owned(),
            difficulty: *difficulty,
            created_on: now,
            updated_on: now,
        }
    }

    pub fn id(&self) -> &Option<i64> {
        &self.id
    }

    pub fn active(&self) -> &bool {
        &self.active
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tags(&self) -> &str {
        &self.tags
    }

    /// Splits the stored tags on `,` without trimming; an empty string yields one empty tag.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags.split(',').collect()
    }

    pub fn difficulty(&self) -> &i32 {
        &self.difficulty
    }

    pub fn created_on(&self) -> &DateTime<Utc> {
        &self.created_on
    }

    pub fn updated_on(&self) -> &DateTime<Utc> {
        &self.updated_on
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_owned();
    }

    pub fn set_description(&mut self, description: Option<&str>) {
        self.description = description.map(str::to_owned);
    }

    pub fn set_tags(&mut self, tags: &str) {
        self.tags = tags.to_owned();
    }

    pub fn set_difficulty(&mut self, difficulty: &i32) {
        self.difficulty = *difficulty;
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            return Err(Error::validation("title must not be empty"));
        }
        if self.description.as_deref().map_or(true, str::is_empty) {
            return Err(Error::validation("description must not be empty"));
        }
        Ok(())
    }

    pub async fn db_insert(&mut self, db: &Db) -> Result<()> {
        self.validate()?;

        let now = Utc::now();
        self.created_on = now;
        self.updated_on = now;

        let id = match db {
            Db::PostgresqlDb(db) => db.insert_project(&self.to_postgresdb_model()).await?,
            Db::SqliteDb(db) => db.insert_project(&self.to_sqlitedb_model()).await?,
        };
        self.id = Some(id);

        Ok(())
    }

    pub async fn db_select(db: &Db, id: &i64) -> Result<Self> {
        let project = match db {
            Db::PostgresqlDb(db) => db
                .select_project(id)
                .await?
                .map(|model| Self::from_postgresdb_model(&model)),
            Db::SqliteDb(db) => db
                .select_project(id)
                .await?
                .map(|model| Self::from_sqlitedb_model(&model)),
        };
        project.ok_or(Error::NotFound(*id))
    }

    pub async fn db_select_many(db: &Db) -> Result<Vec<Self>> {
        match db {
            Db::PostgresqlDb(db) => {
                let projects = db.select_many_projects().await?;
                Ok(projects.iter().map(Self::from_postgresdb_model).collect())
            }
            Db::SqliteDb(db) => {
                let projects = db.select_many_projects().await?;
                Ok(projects.iter().map(Self::from_sqlitedb_model).collect())
            }
        }
    }

    /// Writes the mutable fields back and moves `updated_on` strictly forward.
    pub async fn db_update(&mut self, db: &Db) -> Result<()> {
        let id = match self.id {
            Some(id) => id,
            None => return Err(Error::validation("project has not been inserted yet")),
        };
        self.validate()?;

        let previous_updated_on = self.updated_on;
        let now = Utc::now();
        self.updated_on = if now > previous_updated_on {
            now
        } else {
            previous_updated_on + Duration::microseconds(1)
        };

        let changed = match db {
            Db::PostgresqlDb(db) => db.update_project(&self.to_postgresdb_model()).await,
            Db::SqliteDb(db) => db.update_project(&self.to_sqlitedb_model()).await,
        };
        match changed {
            Ok(0) => {
                self.updated_on = previous_updated_on;
                Err(Error::NotFound(id))
            }
            Ok(_) => Ok(()),
            Err(err) => {
                self.updated_on = previous_updated_on;
                Err(err.into())
            }
        }
    }

    pub async fn db_delete(db: &Db, id: &i64) -> Result<()> {
        let removed = match db {
            Db::PostgresqlDb(db) => db.delete_project(id).await?,
            Db::SqliteDb(db) => db.delete_project(id).await?,
        };
        match removed {
            0 => Err(Error::NotFound(*id)),
            _ => Ok(()),
        }
    }

    fn from_postgresdb_model(model: &ProjectPostgresModel) -> Self {
        Self {
            id: Some(*model.id()),
            active: *model.active(),
            title: model.title().to_owned(),
            description: model.description().clone(),
            tags: model.tags().to_owned(),
            difficulty: *model.difficulty(),
            created_on: *model.created_on(),
            updated_on: *model.updated_on(),
        }
    }

    fn to_postgresdb_model(&self) -> ProjectPostgresModel {
        ProjectPostgresModel::new(
            &self.id.unwrap_or_default(),
            &self.active,
            &self.title,
            &self.description,
            &self.tags,
            &self.difficulty,
            &self.created_on,
            &self.updated_on,
        )
    }

    fn from_sqlitedb_model(model: &ProjectSqliteModel) -> Self {
        Self {
            id: Some(*model.id()),
            active: *model.active(),
            title: model.title().to_owned(),
            description: model.description().clone(),
            tags: model.tags().to_owned(),
            difficulty: *model.difficulty(),
            created_on: *model.created_on(),
            updated_on: *model.updated_on(),
        }
    }

    fn to_sqlitedb_model(&self) -> ProjectSqliteModel {
        ProjectSqliteModel::new(
            &self.id.unwrap_or_default(),
            &self.active,
            &self.title,
            &self.description,
            &self.tags,
            &self.difficulty,
            &self.created_on,
            &self.updated_on,
        )
    }
}

#[cfg(test)]
mod tests {
    use ep_db_sqlite::db::SqliteDb;

    use super::*;

    async fn memory_db() -> Db {
        Db::SqliteDb(SqliteDb::new(":memory:", &1).await.unwrap())
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() {
        let db = memory_db().await;

        let mut project = ProjectDao::new("Compiler", Some("Write a **compiler**"), "rust,parsing", &4);
        project.db_insert(&db).await.unwrap();
        let id = project.id().unwrap();

        let stored = ProjectDao::db_select(&db, &id).await.unwrap();
        assert_eq!(stored.id(), &Some(id));
        assert!(stored.active());
        assert_eq!(stored.title(), "Compiler");
        assert_eq!(stored.description(), Some("Write a **compiler**"));
        assert_eq!(stored.tag_list(), ["rust", "parsing"]);
        assert_eq!(stored.difficulty(), &4);
        assert_eq!(stored.created_on(), stored.updated_on());
    }

    #[tokio::test]
    async fn ids_are_unique() {
        let db = memory_db().await;

        let mut first = ProjectDao::new("One", Some("1"), "", &1);
        let mut second = ProjectDao::new("Two", Some("2"), "", &1);
        first.db_insert(&db).await.unwrap();
        second.db_insert(&db).await.unwrap();

        assert_ne!(first.id(), second.id());
        let listed: Vec<_> = ProjectDao::db_select_many(&db)
            .await
            .unwrap()
            .iter()
            .map(|p| p.id().unwrap())
            .collect();
        assert_eq!(listed, [first.id().unwrap(), second.id().unwrap()]);
    }

    #[tokio::test]
    async fn create_rejects_missing_title_or_description() {
        let db = memory_db().await;

        for mut project in [
            ProjectDao::new("", Some("body"), "", &1),
            ProjectDao::new("title", Some(""), "", &1),
            ProjectDao::new("title", None, "", &1),
        ] {
            let err = project.db_insert(&db).await.unwrap_err();
            assert!(matches!(err, Error::Validation(_)));
            assert!(project.id().is_none());
        }

        assert!(ProjectDao::db_select_many(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_changes_mutable_fields_only() {
        let db = memory_db().await;

        let mut project = ProjectDao::new("Old", Some("old"), "a", &1);
        project.db_insert(&db).await.unwrap();
        let id = project.id().unwrap();
        let created_on = *project.created_on();
        let updated_on = *project.updated_on();

        let mut project = ProjectDao::db_select(&db, &id).await.unwrap();
        project.set_title("New");
        project.set_description(Some("new"));
        project.set_tags("b,c");
        project.set_difficulty(&5);
        project.db_update(&db).await.unwrap();

        let stored = ProjectDao::db_select(&db, &id).await.unwrap();
        assert_eq!(stored.id(), &Some(id));
        assert_eq!(stored.title(), "New");
        assert_eq!(stored.description(), Some("new"));
        assert_eq!(stored.tag_list(), ["b", "c"]);
        assert_eq!(stored.difficulty(), &5);
        assert_eq!(stored.created_on(), &created_on);
        assert!(stored.updated_on() > &updated_on);
    }

    #[tokio::test]
    async fn update_rejects_empty_title_and_keeps_stored_row() {
        let db = memory_db().await;

        let mut project = ProjectDao::new("Keep", Some("me"), "", &1);
        project.db_insert(&db).await.unwrap();
        let id = project.id().unwrap();

        project.set_title("");
        let err = project.db_update(&db).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let stored = ProjectDao::db_select(&db, &id).await.unwrap();
        assert_eq!(stored.title(), "Keep");
    }

    #[tokio::test]
    async fn update_of_deleted_project_is_not_found() {
        let db = memory_db().await;

        let mut project = ProjectDao::new("Gone", Some("soon"), "", &1);
        project.db_insert(&db).await.unwrap();
        let id = project.id().unwrap();
        ProjectDao::db_delete(&db, &id).await.unwrap();

        let err = project.db_update(&db).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(missing) if missing == id));
    }

    #[tokio::test]
    async fn delete_removes_only_that_project() {
        let db = memory_db().await;

        let mut kept = ProjectDao::new("Kept", Some("k"), "", &1);
        let mut removed = ProjectDao::new("Removed", Some("r"), "", &1);
        kept.db_insert(&db).await.unwrap();
        removed.db_insert(&db).await.unwrap();
        let removed_id = removed.id().unwrap();

        ProjectDao::db_delete(&db, &removed_id).await.unwrap();

        assert!(matches!(
            ProjectDao::db_select(&db, &removed_id).await,
            Err(Error::NotFound(_))
        ));
        let titles: Vec<_> = ProjectDao::db_select_many(&db)
            .await
            .unwrap()
            .iter()
            .map(|p| p.title().to_owned())
            .collect();
        assert_eq!(titles, ["Kept"]);

        assert!(matches!(
            ProjectDao::db_delete(&db, &removed_id).await,
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn empty_tags_split_into_one_empty_tag() {
        let project = ProjectDao::new("t", Some("d"), "", &1);
        assert_eq!(project.tag_list(), [""]);

        let project = ProjectDao::new("t", Some("d"), " a,,a ", &1);
        assert_eq!(project.tag_list(), [" a", "", "a "]);
    }
}
