use actix_web::{http::StatusCode, web, HttpResponse};
use actix_web_httpauth::{extractors::basic, middleware::HttpAuthentication};
use ep_dao::project::ProjectDao;
use ep_error::Error;

use crate::{
    auth::{editor_validator, EDITOR_REALM},
    context::ApiWebCtx,
    model::{
        project::{ProjectFormResHtml, ProjectListResHtml, ProjectReqForm, ProjectReqPath},
        Response,
    },
};

const EDITOR_PATH: &str = "/editor";

pub fn editor_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(EDITOR_PATH)
            .app_data(basic::Config::default().realm(EDITOR_REALM))
            .wrap(HttpAuthentication::basic(editor_validator))
            .route("", web::get().to(find_many))
            .route("/add", web::get().to(insert_one_form))
            .route("/add", web::post().to(insert_one))
            .route("/{project_id}/edit", web::get().to(update_one_form))
            .route("/{project_id}/edit", web::post().to(update_one))
            .route("/{project_id}/delete", web::get().to(delete_one)),
    );
}

async fn find_many(ctx: web::Data<ApiWebCtx>) -> HttpResponse {
    let projects_data = match ProjectDao::db_select_many(ctx.dao().db()).await {
        Ok(data) => data,
        Err(err) => return Response::error(&err),
    };

    Response::render(
        &ctx,
        &StatusCode::OK,
        "editor/index.html",
        &ProjectListResHtml::new(&projects_data),
    )
}

async fn insert_one_form(ctx: web::Data<ApiWebCtx>) -> HttpResponse {
    Response::render(
        &ctx,
        &StatusCode::OK,
        "editor/create.html",
        &ProjectFormResHtml::empty(),
    )
}

async fn insert_one(ctx: web::Data<ApiWebCtx>, data: web::Form<ProjectReqForm>) -> HttpResponse {
    let difficulty = match data.difficulty() {
        Ok(difficulty) => difficulty,
        Err(_) => return rerender_form(&ctx, None, &data),
    };

    let mut project_data =
        ProjectDao::new(data.title(), data.description(), data.tags(), &difficulty);

    match project_data.db_insert(ctx.dao().db()).await {
        Ok(_) => {
            if let Some(id) = project_data.id() {
                ep_log::info(None, format!("[Editor] Created project {id}"));
            }
            Response::redirect(EDITOR_PATH)
        }
        Err(Error::Validation(_)) => rerender_form(&ctx, None, &data),
        Err(err) => Response::error(&err),
    }
}

async fn update_one_form(
    ctx: web::Data<ApiWebCtx>,
    path: web::Path<ProjectReqPath>,
) -> HttpResponse {
    let project_data = match ProjectDao::db_select(ctx.dao().db(), path.project_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error(&err),
    };

    Response::render(
        &ctx,
        &StatusCode::OK,
        "editor/create.html",
        &ProjectFormResHtml::from_project(&project_data),
    )
}

async fn update_one(
    ctx: web::Data<ApiWebCtx>,
    path: web::Path<ProjectReqPath>,
    data: web::Form<ProjectReqForm>,
) -> HttpResponse {
    let mut project_data = match ProjectDao::db_select(ctx.dao().db(), path.project_id()).await {
        Ok(data) => data,
        Err(err) => return Response::error(&err),
    };

    let difficulty = match data.difficulty() {
        Ok(difficulty) => difficulty,
        Err(_) => return rerender_form(&ctx, Some(*path.project_id()), &data),
    };

    project_data.set_title(data.title());
    project_data.set_description(data.description());
    project_data.set_tags(data.tags());
    project_data.set_difficulty(&difficulty);

    match project_data.db_update(ctx.dao().db()).await {
        Ok(_) => {
            ep_log::info(
                None,
                format!("[Editor] Updated project {}", path.project_id()),
            );
            Response::redirect(EDITOR_PATH)
        }
        Err(Error::Validation(_)) => rerender_form(&ctx, Some(*path.project_id()), &data),
        Err(err) => Response::error(&err),
    }
}

async fn delete_one(ctx: web::Data<ApiWebCtx>, path: web::Path<ProjectReqPath>) -> HttpResponse {
    if let Err(err) = ProjectDao::db_delete(ctx.dao().db(), path.project_id()).await {
        return Response::error(&err);
    }

    ep_log::info(
        None,
        format!("[Editor] Deleted project {}", path.project_id()),
    );

    Response::redirect(EDITOR_PATH)
}

fn rerender_form(ctx: &ApiWebCtx, id: Option<i64>, data: &ProjectReqForm) -> HttpResponse {
    Response::render(
        ctx,
        &StatusCode::OK,
        "editor/create.html",
        &ProjectFormResHtml::from_form(id, data),
    )
}
