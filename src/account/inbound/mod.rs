mod authn_http;
mod authn_model;
mod profile_http;
mod profile_model;
pub mod state;

use crate::account::inbound::authn_http::{sign_in, sign_out, sign_up};
use crate::account::inbound::profile_http::{edit_profile, get_session, save_profile};
use crate::app::middleware::require_session;
use crate::app::state::AppState;
use axum::routing::{get, patch, post};
use axum::{Router, middleware};

pub fn create_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        // profile scope
        .route("/me/profile", patch(edit_profile).put(save_profile))
        // authn scope
        .route("/auth/sign-out", post(sign_out))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_session));

    let public_routes = Router::new()
        // the form renders from this snapshot
        .route("/session", get(get_session))
        // authn scope
        .route("/auth/sign-in", post(sign_in))
        .route("/auth/sign-up", post(sign_up));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::Router;
    use axum::body::{Body, to_bytes};
    use axum::http::{Method, Request, StatusCode, header};
    use tower::ServiceExt;

    use super::*;
    use crate::account::domain::identity::Identity;
    use crate::account::domain::inout::{SaveProfileOutput, SignInOutput, SignOutOutput};
    use crate::account::domain::profile::Profile;
    use crate::account::domain::session::SessionSnapshot;
    use crate::account::inbound::state::AccountState;
    use crate::account::usecase::session::{MockSessionUseCase, SessionUseCase};
    use crate::account::outbound::provider::ProviderError;
    use crate::app::config::Config;
    use crate::app::error::AppError;

    fn identity() -> Identity {
        Identity {
            uid: "u1".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    fn signed_in_snapshot() -> SessionSnapshot {
        SessionSnapshot {
            identity: Some(identity()),
            profile: Some(Profile::default_for("a@x.com")),
            loading: false,
        }
    }

    fn app(session: MockSessionUseCase) -> Router {
        let session: Arc<dyn SessionUseCase> = Arc::new(session);
        let state = AppState {
            config: Arc::new(Config::builder_test().build()),
            account: AccountState::new(session),
        };
        create_router(state)
    }

    fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn get_session_reports_the_current_snapshot() {
        let mut session = MockSessionUseCase::new();
        session.expect_session().returning(signed_in_snapshot);

        let response = app(session)
            .oneshot(Request::builder().uri("/session").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["data"]["identity"]["uid"], "u1");
        assert_eq!(body["data"]["profile"]["email"], "a@x.com");
        assert_eq!(body["data"]["loading"], false);
    }

    #[tokio::test]
    async fn sign_in_returns_the_new_identity() {
        let mut session = MockSessionUseCase::new();
        session.expect_sign_in().returning(|_| {
            Ok(SignInOutput {
                uid: "u1".to_string(),
                email: "a@x.com".to_string(),
            })
        });

        let request = json_request(
            Method::POST,
            "/auth/sign-in",
            serde_json::json!({"email": "a@x.com", "password": "pw123456"}),
        );
        let response = app(session).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["data"]["uid"], "u1");
    }

    #[tokio::test]
    async fn sign_in_failures_surface_a_generic_message() {
        let mut session = MockSessionUseCase::new();
        session.expect_sign_in().returning(|_| {
            Err(AppError::Authentication(ProviderError::InvalidCredentials(
                "INVALID_LOGIN_CREDENTIALS".to_string(),
            )))
        });

        let request = json_request(
            Method::POST,
            "/auth/sign-in",
            serde_json::json!({"email": "a@x.com", "password": "wrong-pass"}),
        );
        let response = app(session).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["message"], "Authentication failed");
    }

    #[tokio::test]
    async fn sign_out_requires_a_session() {
        let mut session = MockSessionUseCase::new();
        session.expect_session().returning(|| SessionSnapshot {
            identity: None,
            profile: None,
            loading: false,
        });

        let request = json_request(Method::POST, "/auth/sign-out", serde_json::json!({}));
        let response = app(session).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn sign_out_succeeds_when_signed_in() {
        let mut session = MockSessionUseCase::new();
        session.expect_session().returning(signed_in_snapshot);
        session
            .expect_sign_out()
            .returning(|| Ok(SignOutOutput { success: true }));

        let request = json_request(Method::POST, "/auth/sign-out", serde_json::json!({}));
        let response = app(session).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["data"]["success"], true);
    }

    #[tokio::test]
    async fn save_profile_is_guarded_and_reports_the_forced_email() {
        let mut session = MockSessionUseCase::new();
        session.expect_session().returning(signed_in_snapshot);
        session.expect_save_profile().returning(|input| {
            let mut saved = input.profile;
            saved.email = "a@x.com".to_string();
            Ok(SaveProfileOutput { profile: saved })
        });

        let request = json_request(
            Method::PUT,
            "/me/profile",
            serde_json::json!({
                "firstName": "Jane",
                "lastName": "",
                "email": "someone-else@x.com",
                "phone": "",
                "age": "",
                "height": "",
            }),
        );
        let response = app(session).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["data"]["firstName"], "Jane");
        assert_eq!(body["data"]["email"], "a@x.com");
    }

    #[tokio::test]
    async fn edit_profile_updates_the_local_copy() {
        let mut session = MockSessionUseCase::new();
        session.expect_session().returning(signed_in_snapshot);
        session.expect_edit_profile().returning(|input| {
            let mut profile = Profile::default_for("a@x.com");
            profile.set(input.field, input.value);
            Ok(crate::account::domain::inout::EditProfileOutput { profile })
        });

        let request = json_request(
            Method::PATCH,
            "/me/profile",
            serde_json::json!({"field": "firstName", "value": "Jane"}),
        );
        let response = app(session).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["data"]["firstName"], "Jane");
    }
}
