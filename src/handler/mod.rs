pub mod auth_handler;
pub mod booking_handler;
pub mod chat_handler;
pub mod rent_handler;
pub mod room_handler;
pub mod tenant_handler;
pub mod update_handler;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Json, Request};
use bson::oid::ObjectId;
use tracing::warn;

use crate::util::error::{HandlerError, HandlerErrorKind};

pub(crate) fn parse_object_id(raw: &str) -> Result<ObjectId, HandlerError> {
    ObjectId::parse_str(raw).map_err(|_| HandlerError::bad_request(format!("Invalid id: {}", raw)))
}

/// `Json` body whose rejections (malformed JSON, wrong field types, missing
/// content type) come back as a `HandlerError` 400.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => {
                warn!("Rejected request body: {}", rejection.body_text());
                Err(HandlerError {
                    error: HandlerErrorKind::BadRequest,
                    message: "Invalid request body".to_string(),
                    details: Some(rejection.body_text()),
                })
            }
        }
    }
}
