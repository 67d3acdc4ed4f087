use ep_dao::project::{ProjectDao, DEFAULT_DIFFICULTY};
use ep_error::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::util::markdown;

#[derive(Deserialize)]
pub struct ProjectReqPath {
    project_id: i64,
}

impl ProjectReqPath {
    pub fn project_id(&self) -> &i64 {
        &self.project_id
    }
}

/// Submitted editor form. Every field may be missing from the body.
#[derive(Deserialize)]
pub struct ProjectReqForm {
    title: Option<String>,
    description: Option<String>,
    tags: Option<String>,
    difficulty: Option<String>,
}

impl ProjectReqForm {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn tags(&self) -> &str {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn difficulty(&self) -> Result<i32> {
        match self.difficulty.as_deref().map(str::trim) {
            None | Some("") => Ok(DEFAULT_DIFFICULTY),
            Some(difficulty) => difficulty
                .parse()
                .map_err(|_| Error::validation("difficulty must be an integer")),
        }
    }
}

#[derive(Serialize)]
pub struct ProjectResHtml {
    id: i64,
    title: String,
    description: String,
    tags: Vec<String>,
    difficulty: i32,
    created_on: String,
    updated_on: String,
}

impl ProjectResHtml {
    pub fn new(project: &ProjectDao) -> Self {
        Self {
            id: project.id().unwrap_or_default(),
            title: project.title().to_owned(),
            description: markdown::to_html(project.description().unwrap_or_default()),
            tags: project.tag_list().into_iter().map(str::to_owned).collect(),
            difficulty: *project.difficulty(),
            created_on: project.created_on().format("%Y-%m-%d %H:%M").to_string(),
            updated_on: project.updated_on().format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct ProjectListResHtml {
    projects: Vec<ProjectResHtml>,
}

impl ProjectListResHtml {
    pub fn new(projects: &[ProjectDao]) -> Self {
        Self {
            projects: projects.iter().map(ProjectResHtml::new).collect(),
        }
    }
}

/// Values shown in the create/edit form, kept as raw strings so a rejected
/// submission comes back exactly as typed.
#[derive(Serialize)]
pub struct ProjectFormResHtml {
    action: String,
    id: Option<i64>,
    title: String,
    description: String,
    tags: String,
    difficulty: String,
}

impl ProjectFormResHtml {
    pub fn empty() -> Self {
        Self {
            action: "/editor/add".to_owned(),
            id: None,
            title: String::new(),
            description: String::new(),
            tags: String::new(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
        }
    }

    pub fn from_project(project: &ProjectDao) -> Self {
        let id = project.id().unwrap_or_default();
        Self {
            action: format!("/editor/{id}/edit"),
            id: Some(id),
            title: project.title().to_owned(),
            description: project.description().unwrap_or_default().to_owned(),
            tags: project.tags().to_owned(),
            difficulty: project.difficulty().to_string(),
        }
    }

    pub fn from_form(id: Option<i64>, form: &ProjectReqForm) -> Self {
        Self {
            action: match id {
                Some(id) => format!("/editor/{id}/edit"),
                None => "/editor/add".to_owned(),
            },
            id,
            title: form.title().to_owned(),
            description: form.description().unwrap_or_default().to_owned(),
            tags: form.tags().to_owned(),
            difficulty: form.difficulty.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(difficulty: Option<&str>) -> ProjectReqForm {
        ProjectReqForm {
            title: Some("t".to_owned()),
            description: None,
            tags: None,
            difficulty: difficulty.map(str::to_owned),
        }
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let form = form(None);
        assert_eq!(form.title(), "t");
        assert_eq!(form.description(), None);
        assert_eq!(form.tags(), "");
        assert_eq!(form.difficulty().unwrap(), DEFAULT_DIFFICULTY);
    }

    #[test]
    fn difficulty_is_stored_as_submitted() {
        assert_eq!(form(Some("")).difficulty().unwrap(), DEFAULT_DIFFICULTY);
        assert_eq!(form(Some(" 7 ")).difficulty().unwrap(), 7);
        assert_eq!(form(Some("-3")).difficulty().unwrap(), -3);
        assert!(matches!(
            form(Some("hard")).difficulty(),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn rendered_project_splits_tags_and_converts_markdown() {
        let project = ProjectDao::new("A", Some("B"), "x,y", &2);
        let html = ProjectResHtml::new(&project);

        assert_eq!(html.tags, ["x", "y"]);
        assert_eq!(html.description, "<p>B</p>\n");
        assert_eq!(html.difficulty, 2);
    }

    #[test]
    fn rejected_form_keeps_typed_values() {
        let form = ProjectReqForm {
            title: Some(String::new()),
            description: Some("body".to_owned()),
            tags: Some("a,b".to_owned()),
            difficulty: Some("hard".to_owned()),
        };
        let html = ProjectFormResHtml::from_form(Some(3), &form);

        assert_eq!(html.action, "/editor/3/edit");
        assert_eq!(html.title, "");
        assert_eq!(html.description, "body");
        assert_eq!(html.tags, "a,b");
        assert_eq!(html.difficulty, "hard");
    }
}
