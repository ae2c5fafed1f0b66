use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::contact::ContactForm,
    errors::AppError,
    utils::client_ip::ClientIp,
    AppState,
};

#[instrument(skip(state, form, client_ip))]
pub async fn submit_contact(
    state: web::Data<AppState>,
    form: web::Json<ContactForm>,
    client_ip: ClientIp,
) -> Result<impl Responder, AppError> {
    let response = state
        .contact_handler
        .submit(form.into_inner(), client_ip.0)
        .await?;

    Ok(HttpResponse::Created().json(response))
}
