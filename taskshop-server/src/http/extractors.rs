//! Custom Axum extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;

/// JSON body whose rejections (bad syntax, wrong types, missing
/// content type) all surface as 400 with a JSON error body.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest {
                message: rejection.body_text(),
            })?;
        Ok(Self(value))
    }
}

/// Integer id from the path. Anything else cannot name a row, so it is
/// reported as not found rather than as a malformed request.
pub struct ResourceId(pub i64);

impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound {
                resource: "resource",
                id: String::new(),
            })?;

        // Plain digits with an optional leading '-'; no '+', spaces or radix forms.
        let digits = raw.strip_prefix('-').unwrap_or(&raw);
        let well_formed = !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit());

        match raw.parse::<i64>() {
            Ok(id) if well_formed => Ok(Self(id)),
            _ => Err(ApiError::NotFound {
                resource: "resource",
                id: raw,
            }),
        }
    }
}
