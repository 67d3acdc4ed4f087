use actix_web::web;

use crate::service::{editor::editor_api, root::root_api};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root_api).configure(editor_api);
}
