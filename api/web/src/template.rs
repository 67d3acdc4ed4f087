use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// HTML templates compiled into the binary and parsed once at start-up.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn new() -> Result<Self> {
        ep_log::info(Some("⚡"), "[Templates] Initializing component");

        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../templates/base.html")),
            ("index.html", include_str!("../templates/index.html")),
            ("error.html", include_str!("../templates/error.html")),
            (
                "editor/index.html",
                include_str!("../templates/editor/index.html"),
            ),
            (
                "editor/create.html",
                include_str!("../templates/editor/create.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        let context = Context::from_serialize(data)?;
        Ok(self.tera.render(name, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Page {
        projects: Vec<()>,
    }

    #[test]
    fn escapes_user_text() {
        #[derive(Serialize)]
        struct Form<'a> {
            action: &'a str,
            id: Option<i64>,
            title: &'a str,
            description: &'a str,
            tags: &'a str,
            difficulty: &'a str,
        }

        let html = Templates::new()
            .unwrap()
            .render(
                "editor/create.html",
                &Form {
                    action: "/editor/add",
                    id: None,
                    title: "<script>",
                    description: "",
                    tags: "",
                    difficulty: "1",
                },
            )
            .unwrap();

        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn renders_empty_listing() {
        let html = Templates::new()
            .unwrap()
            .render("index.html", &Page { projects: vec![] })
            .unwrap();

        assert!(html.contains("No projects yet"));
    }

    #[test]
    fn unknown_template_is_an_error() {
        let templates = Templates::new().unwrap();
        assert!(templates.render("missing.html", &Page { projects: vec![] }).is_err());
    }
}
