use super::error::{ApiError, ApiResult};
use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use log::debug;

/// Note ID taken from the `:id` path segment
///
/// Any failure, whether the segment does not decode or is not an integer,
/// is answered with the `invalid ID` envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteId(pub i64);

pub(crate) fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse().map_err(|_| {
        debug!("Rejected malformed note ID: {raw:?}");
        ApiError::invalid_id()
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for NoteId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                debug!("Rejected note ID in '{}': {e}", parts.uri.path());
                ApiError::invalid_id()
            })?;

        parse_id(&raw).map(NoteId)
    }
}
