use crate::account::domain::inout::{EditProfileInput, SaveProfileInput};
use crate::account::inbound::profile_model::{
    EditProfileRequest, ProfileResponse, SaveProfileRequest, SessionResponse,
};
use crate::app::extractors::AppJson;
use crate::app::response::Response;
use crate::app::state::AppState;
use axum::{debug_handler, extract::State, response::IntoResponse};

#[debug_handler]
pub async fn get_session(State(state): State<AppState>) -> impl IntoResponse {
    Response::from(SessionResponse::from(state.account.session.session()))
}

#[debug_handler]
pub async fn edit_profile(
    State(state): State<AppState>,
    AppJson(req): AppJson<EditProfileRequest>,
) -> impl IntoResponse {
    state
        .account
        .session
        .edit_profile(EditProfileInput {
            field: req.field.into(),
            value: req.value,
        })
        .map(|output| ProfileResponse::from(output.profile))
        .map(Response::from)
}

#[debug_handler]
pub async fn save_profile(
    State(state): State<AppState>,
    AppJson(req): AppJson<SaveProfileRequest>,
) -> impl IntoResponse {
    state
        .account
        .session
        .save_profile(SaveProfileInput { profile: req.into() })
        .await
        .map(|output| ProfileResponse::from(output.profile))
        .map(Response::from)
}
