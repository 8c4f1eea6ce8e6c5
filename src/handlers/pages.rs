use actix_files::NamedFile;
use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use crate::state::AppContext;
use crate::views::{self, Branding};

async fn render(ctx: &AppContext, page: fn(&Branding) -> String) -> HttpResponse {
    ctx.background.ensure_background_present().await;
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page(&ctx.branding))
}

pub async fn home(ctx: web::Data<AppContext>) -> HttpResponse {
    render(&ctx, views::add_employee_form).await
}

pub async fn about(ctx: web::Data<AppContext>) -> HttpResponse {
    render(&ctx, views::about).await
}

pub async fn get_employee_form(ctx: web::Data<AppContext>) -> HttpResponse {
    render(&ctx, views::get_employee_form).await
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("OK")
}

/// Serves the cached background; 404 until a download has succeeded.
pub async fn background_image(ctx: web::Data<AppContext>) -> actix_web::Result<NamedFile> {
    Ok(NamedFile::open_async(ctx.background.local_path()).await?)
}
