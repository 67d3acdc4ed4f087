use chrono::{DateTime, Utc};
use sqlx::prelude::FromRow;

#[derive(FromRow)]
pub struct ProjectModel {
    id: i64,
    active: bool,
    title: String,
    description: Option<String>,
    tags: String,
    difficulty: i32,
    created_on: DateTime<Utc>,
    updated_on: DateTime<Utc>,
}

impl ProjectModel {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: &i64,
        active: &bool,
        title: &str,
        description: &Option<String>,
        tags: &str,
        difficulty: &i32,
        created_on: &DateTime<Utc>,
        updated_on: &DateTime<Utc>,
    ) -> Self {
        Self {
            id: *id,
            active: *active,
            title: title.to_owned(),
            description: description.clone(),
            tags: tags.to_owned(),
            difficulty: *difficulty,
            created_on: *created_on,
            updated_on: *updated_on,
        }
    }

    pub fn id(&self) -> &i64 {
        &self.id
    }

    pub fn active(&self) -> &bool {
        &self.active
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &Option<String> {
        &self.description
    }

    pub fn tags(&self) -> &str {
        &self.tags
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
}
