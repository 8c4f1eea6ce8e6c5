pub mod employee;
pub mod pages;

use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(pages::home))
            .route(web::post().to(pages::home)),
    )
    .service(web::resource("/about").route(web::get().to(pages::about)))
    .service(web::resource("/addemp").route(web::post().to(employee::add_employee)))
    .service(web::resource("/getemp").route(web::get().to(pages::get_employee_form)))
    .service(web::resource("/fetchdata").route(web::post().to(employee::fetch_data)))
    .service(web::resource("/health").route(web::get().to(pages::health)))
    .service(
        web::resource("/static/background.jpg")
            .route(web::get().to(pages::background_image))
            .route(web::head().to(pages::background_image)),
    );
}
