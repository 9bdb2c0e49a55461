use actix_web::http::header::ContentType;
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse, HttpResponseBuilder};
use log::error;

use crate::api::AppState;
use crate::router::{resolve, View};
use crate::views;

pub(crate) fn html(mut builder: HttpResponseBuilder, body: String) -> HttpResponse {
    builder.content_type(ContentType::html()).body(body)
}

/// Renders whichever view the request path selects.
pub async fn page(req: HttpRequest, state: web::Data<AppState>) -> HttpResponse {
    let route = if req.method() == Method::GET {
        resolve(req.path())
    } else {
        None
    };
    let route = match route {
        Some(route) => route,
        None => return html(HttpResponse::NotFound(), views::not_found(req.path()))
    };

    let mut controller = state.controller.lock().await;
    controller.navigate(route);

    match route.view {
        View::Map => {
            let snapshot = controller.snapshot();
            drop(controller);

            match views::map::render(&snapshot, &state.tile_url) {
                Ok(body) => html(HttpResponse::Ok(), body),
                Err(err) => {
                    error!("Error while rendering map: {}", err);
                    HttpResponse::InternalServerError().finish()
                }
            }
        },
        View::List => {
            let snapshot = controller.snapshot();
            drop(controller);

            html(HttpResponse::Ok(), views::list::render(&snapshot))
        },
        View::Form => {
            let body = views::form::render(
                controller.draft(),
                controller.target(),
                controller.is_saving()
            );
            html(HttpResponse::Ok(), body)
        }
    }
}
