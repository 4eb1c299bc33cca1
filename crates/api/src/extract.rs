//! Request body extraction for stock creation.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};
use gostock_core::stock::CreateStock;

use crate::error::AppError;

/// A [`CreateStock`] decoded from either a JSON or a form-encoded body,
/// chosen by `Content-Type`.
///
/// Any decode failure becomes [`AppError::BadRequest`]. Missing fields are
/// not a decode failure; they are left as `None` for validation.
#[derive(Debug)]
pub struct StockPayload(pub CreateStock);

impl<S> FromRequest<S> for StockPayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mime = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .unwrap_or_default();

        match mime.as_str() {
            "application/json" => {
                let Json(input) = Json::<CreateStock>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                Ok(Self(input))
            }
            "application/x-www-form-urlencoded" => {
                let Form(input) = Form::<CreateStock>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::BadRequest(e.body_text()))?;
                Ok(Self(input))
            }
            other => Err(AppError::BadRequest(format!(
                "Unsupported content type '{other}'. Expected application/json or application/x-www-form-urlencoded"
            ))),
        }
    }
}
