use actix_web::http::header;
use actix_web::{web, HttpResponse};
use futures::lock::Mutex;

use crate::controller::PageController;
use crate::geocode::Geocoder;
use crate::router::View;

pub mod pages;
pub mod restaurants;

pub struct AppState {
    pub controller: Mutex<PageController>,
    pub geocoder: Box<dyn Geocoder>,
    pub tile_url: String
}

impl AppState {
    pub fn new(controller: PageController, geocoder: Box<dyn Geocoder>, tile_url: &str) -> Self {
        AppState {
            controller: Mutex::new(controller),
            geocoder,
            tile_url: tile_url.to_owned()
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    // the other views are resolved by `pages::page` as the default service
    cfg
        .service(
            web::resource("/form")
                .route(web::get().to(pages::page))
                .route(web::post().to(restaurants::save))
        )
        .route("/api/restaurants", web::get().to(restaurants::list))
        .route("/liste/{index}/edit", web::post().to(restaurants::edit))
        .route("/liste/{index}/delete", web::post().to(restaurants::delete))
        .default_service(web::to(pages::page));
}

pub(crate) fn redirect(view: View) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, view.path()))
        .finish()
}
