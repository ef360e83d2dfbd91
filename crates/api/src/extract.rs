//! Request extractors with JSON rejections.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use roomfit_core::error::CoreError;
use roomfit_core::types::DbId;

use crate::error::AppError;

/// Numeric `{id}` path segment.
///
/// Wraps axum's [`Path`] so that a non-numeric segment such as
/// `/rooms/abc/delete` is rejected with the `{error, code}` body instead of
/// axum's plain-text 400.
///
/// ```ignore
/// async fn delete(ItemId(id): ItemId) -> AppResult<Json<()>> { .. }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ItemId(pub DbId);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                AppError::Core(CoreError::Validation(format!(
                    "Invalid id: {}",
                    rejection.body_text()
                )))
            })?;
        Ok(ItemId(id))
    }
}
