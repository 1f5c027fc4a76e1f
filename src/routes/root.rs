use crate::models::MessageResponse;
use actix_web::{HttpResponse, Responder};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    ),
    tag = "Greeting"
)]
pub async fn greeting() -> impl Responder {
    HttpResponse::Ok().json(MessageResponse::greeting())
}
