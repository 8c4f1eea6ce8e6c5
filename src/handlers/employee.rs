use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};
use log::error;

use crate::errors::AppError;
use crate::models::employee::{Employee, FetchEmployee};
use crate::state::AppContext;
use crate::views;

pub const INSERT_FAILED_NAME: &str = "Error occurred";
pub const NOT_FOUND_MESSAGE: &str = "No employee found with the given ID.";
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching data.";

fn plain_text(body: &'static str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(body)
}

// The form is only inspected after the database check, so a missing field
// on a server without a database still reports the database.
pub async fn add_employee(
    ctx: web::Data<AppContext>,
    form: Result<web::Form<Employee>, actix_web::Error>,
) -> Result<HttpResponse, actix_web::Error> {
    ctx.background.ensure_background_present().await;

    let store = ctx.store.as_ref().ok_or(AppError::DatabaseUnavailable)?;
    let employee = form?.into_inner();

    let name = match store.insert_employee(&employee).await {
        Ok(()) => employee.full_name(),
        Err(err) => {
            error!("Insert of employee {} failed: {}", employee.emp_id, err);
            INSERT_FAILED_NAME.to_string()
        }
    };

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(views::add_employee_output(&ctx.branding, &name)))
}

pub async fn fetch_data(
    ctx: web::Data<AppContext>,
    form: Result<web::Form<FetchEmployee>, actix_web::Error>,
) -> Result<HttpResponse, actix_web::Error> {
    ctx.background.ensure_background_present().await;

    let store = ctx.store.as_ref().ok_or(AppError::DatabaseUnavailable)?;
    let emp_id = form?.into_inner().emp_id;

    match store.find_employee(&emp_id).await {
        Ok(Some(employee)) => Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(views::get_employee_output(&ctx.branding, &employee))),
        Ok(None) => Ok(plain_text(NOT_FOUND_MESSAGE)),
        Err(err) => {
            error!("Lookup of employee {} failed: {}", emp_id, err);
            Ok(plain_text(FETCH_ERROR_MESSAGE))
        }
    }
}
