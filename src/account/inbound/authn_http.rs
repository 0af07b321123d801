use crate::account::domain::inout::{SignInInput, SignUpInput};
use crate::account::inbound::authn_model::{
    SignInRequest, SignInResponse, SignOutResponse, SignUpRequest, SignUpResponse,
};
use crate::app::extractors::AppJson;
use crate::app::response::Response;
use crate::app::state::AppState;
use axum::{debug_handler, extract::State, response::IntoResponse};

#[debug_handler]
pub async fn sign_in(
    State(state): State<AppState>,
    AppJson(req): AppJson<SignInRequest>,
) -> impl IntoResponse {
    state
        .account
        .session
        .sign_in(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await
        .map(SignInResponse::from)
        .map(Response::from)
}

#[debug_handler]
pub async fn sign_up(
    State(state): State<AppState>,
    AppJson(req): AppJson<SignUpRequest>,
) -> impl IntoResponse {
    state
        .account
        .session
        .sign_up(SignUpInput {
            email: req.email,
            password: req.password,
        })
        .await
        .map(SignUpResponse::from)
        .map(Response::from)
}

#[debug_handler]
pub async fn sign_out(State(state): State<AppState>) -> impl IntoResponse {
    state
        .account
        .session
        .sign_out()
        .await
        .map(SignOutResponse::from)
        .map(Response::from)
}
