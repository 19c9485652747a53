//! GET /api/v1/locations/{id}/page: resolved detail page model.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use odyssey_core::LocationId;
use odyssey_page::{load, PageSession, RenderModel};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) async fn get_location_page(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Result<(StatusCode, Json<ApiResponse<RenderModel>>), ApiError> {
    let location_id = LocationId::parse(&raw_id)
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?;

    let mut session = PageSession::mount(location_id.clone());
    let settled = load(state.source.as_ref(), location_id).await;
    session.apply(settled);
    let model = session.render();

    let status = match &model {
        RenderModel::Page(_) => StatusCode::OK,
        RenderModel::Error { message } => {
            tracing::warn!(
                request_id = %req_id.0,
                location_id = %session.location_id(),
                error = %message,
                "location page resolved to error fallback"
            );
            StatusCode::BAD_GATEWAY
        }
        RenderModel::Loading => StatusCode::ACCEPTED,
    };

    Ok((
        status,
        Json(ApiResponse {
            data: model,
            meta: ResponseMeta::new(req_id.0),
        }),
    ))
}
