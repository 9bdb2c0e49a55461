use std::collections::HashMap;

use actix_web::{web, HttpResponse};
use log::{error, info, warn};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::pages::html;
use crate::api::{redirect, AppState};
use crate::controller::{complete_save, SaveOutcome};
use crate::data::draft::{Draft, RatingField, TextField};
use crate::router::View;
use crate::views;

#[derive(Deserialize)]
pub struct RecordRef {
    id: Uuid
}

pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    let snapshot = state.controller.lock().await.snapshot();
    HttpResponse::Ok().json(&*snapshot)
}

pub async fn edit(
    index: web::Path<usize>,
    record: web::Form<RecordRef>,
    state: web::Data<AppState>
) -> HttpResponse {
    let index = index.into_inner();
    match state.controller.lock().await.begin_edit(index, record.id) {
        Ok(()) => redirect(View::Form),
        Err(err) => {
            warn!("Ignoring edit of restaurant {}: {}", index, err);
            redirect(View::List)
        }
    }
}

pub async fn delete(
    index: web::Path<usize>,
    record: web::Form<RecordRef>,
    state: web::Data<AppState>
) -> HttpResponse {
    let index = index.into_inner();
    if let Err(err) = state.controller.lock().await.delete(index, record.id) {
        warn!("Ignoring delete of restaurant {}: {}", index, err);
    }
    redirect(View::List)
}

/// The draft `form` describes once its fields are applied on top of `base`.
/// Unparsable ratings keep the value from `base`.
fn submitted_draft(form: &HashMap<String, String>, base: &Draft) -> Draft {
    let mut draft = base.clone();
    for field in TextField::ALL.iter() {
        if let Some(value) = form.get(field.input_name()) {
            draft.set_field(*field, value.as_str());
        }
    }
    for field in RatingField::ALL.iter() {
        if let Some(value) = form.get(field.input_name()) {
            let _ = draft.set_rating(*field, value);
        }
    }
    draft
}

/// Applies the submitted fields to the draft and saves it. Geocoding runs in
/// its own task so the save still commits if the client goes away.
pub async fn save(
    form: web::Form<HashMap<String, String>>,
    state: web::Data<AppState>
) -> HttpResponse {
    let pending = {
        let mut controller = state.controller.lock().await;
        if controller.is_saving() {
            if controller.is_in_flight(&submitted_draft(&form, controller.draft())) {
                info!("Ignoring repeated submission of the restaurant being saved");
                return redirect(View::Map);
            }
            warn!("Rejecting save while another one is in flight");
            let body = views::form::render(controller.draft(), controller.target(), true);
            return html(HttpResponse::Conflict(), body);
        }

        for field in TextField::ALL.iter() {
            if let Some(value) = form.get(field.input_name()) {
                controller.set_field(*field, value.as_str());
            }
        }
        for field in RatingField::ALL.iter() {
            if let Some(value) = form.get(field.input_name()) {
                if let Err(err) = controller.set_rating(*field, value) {
                    warn!("{}", err);
                }
            }
        }

        match controller.begin_save() {
            Ok(pending) => pending,
            Err(err) => {
                error!("Could not start save: {}", err);
                return HttpResponse::InternalServerError().finish();
            }
        }
    };

    let app = state.clone();
    let task = actix_rt::spawn(async move {
        complete_save(&app.controller, &*app.geocoder, pending).await
    });

    match task.await {
        Ok(SaveOutcome::Dropped { id }) => {
            info!("Edit of restaurant {} discarded", id);
            redirect(View::Map)
        },
        Ok(_) => redirect(View::Map),
        Err(err) => {
            error!("Save task failed: {}", err);
            HttpResponse::InternalServerError().finish()
        }
    }
}
