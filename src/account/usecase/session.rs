use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tokio::task::JoinHandle;
use validator::Validate;

use crate::account::domain::identity::Identity;
use crate::account::domain::inout::{
    EditProfileInput, EditProfileOutput, SaveProfileInput, SaveProfileOutput, SignInInput, SignInOutput,
    SignOutOutput, SignUpInput, SignUpOutput,
};
use crate::account::domain::session::SessionSnapshot;
use crate::account::outbound::provider::IdentityProvider;
use crate::account::usecase::profile::ProfileSync;
use crate::app::error::AppError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionUseCase: Send + Sync {
    async fn sign_in(&self, input: SignInInput) -> Result<SignInOutput, AppError>;
    async fn sign_up(&self, input: SignUpInput) -> Result<SignUpOutput, AppError>;
    async fn sign_out(&self) -> Result<SignOutOutput, AppError>;

    /// Current view of {identity, profile, loading}.
    fn session(&self) -> SessionSnapshot;

    /// Mutates the in-memory profile copy only; nothing is persisted.
    fn edit_profile(&self, input: EditProfileInput) -> Result<EditProfileOutput, AppError>;

    /// Persists the submitted record wholesale through the store adapter.
    async fn save_profile(&self, input: SaveProfileInput) -> Result<SaveProfileOutput, AppError>;
}

/// Tracks the provider-owned authentication state for the lifetime of the
/// process and keeps the in-memory profile copy in sync with it.
pub struct SessionTracker {
    provider: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfileSync>,
    state: Arc<RwLock<SessionSnapshot>>,
    watcher: Mutex<Option<JoinHandle<()>>>,
}

impl SessionTracker {
    /// Subscribes to the provider's identity stream and spawns the task that
    /// applies each state change. The subscription is released by `shutdown`.
    pub fn start(provider: Arc<dyn IdentityProvider>, profiles: Arc<dyn ProfileSync>) -> Arc<Self> {
        let state = Arc::new(RwLock::new(SessionSnapshot::initial()));

        let mut rx = provider.subscribe();
        let task_state = Arc::clone(&state);
        let task_profiles = Arc::clone(&profiles);
        let watcher = tokio::spawn(async move {
            // The receiver observes the current state immediately, then each
            // change exactly once. Changes are applied one at a time, so a
            // sign-out is never processed while a profile load is in flight.
            loop {
                let identity = rx.borrow_and_update().clone();
                Self::apply_identity_change(&task_profiles, &task_state, identity).await;

                if rx.changed().await.is_err() {
                    break;
                }
            }
        });

        Arc::new(Self {
            provider,
            profiles,
            state,
            watcher: Mutex::new(Some(watcher)),
        })
    }

    /// Stops the identity watcher, releasing the provider subscription.
    pub async fn shutdown(&self) {
        let watcher = self
            .watcher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        if let Some(watcher) = watcher {
            watcher.abort();
            let _ = watcher.await;
        }
    }

    async fn apply_identity_change(
        profiles: &Arc<dyn ProfileSync>,
        state: &Arc<RwLock<SessionSnapshot>>,
        identity: Option<Identity>,
    ) {
        let profile = match &identity {
            Some(identity) => match profiles.get_or_create(identity).await {
                Ok(profile) => Some(profile),
                Err(err) => {
                    // A failed load must not block the identity state from
                    // resolving; the form simply has nothing to show yet.
                    tracing::error!("Error loading profile: {:?}", err);
                    None
                },
            },
            None => None,
        };

        let mut guard = state.write().unwrap_or_else(PoisonError::into_inner);
        guard.identity = identity;
        guard.profile = profile;
        guard.loading = false;
    }
}

#[async_trait]
impl SessionUseCase for SessionTracker {
    async fn sign_in(&self, input: SignInInput) -> Result<SignInOutput, AppError> {
        input.validate()?;

        let identity = self.provider.sign_in(&input.email, &input.password).await?;

        Ok(SignInOutput {
            uid: identity.uid,
            email: identity.email,
        })
    }

    async fn sign_up(&self, input: SignUpInput) -> Result<SignUpOutput, AppError> {
        input.validate()?;

        let identity = self.provider.sign_up(&input.email, &input.password).await?;

        Ok(SignUpOutput {
            uid: identity.uid,
            email: identity.email,
        })
    }

    async fn sign_out(&self) -> Result<SignOutOutput, AppError> {
        self.provider.sign_out().await?;

        // The watcher clears identity and profile when the provider reports
        // the signed-out state.
        Ok(SignOutOutput { success: true })
    }

    fn session(&self) -> SessionSnapshot {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn edit_profile(&self, input: EditProfileInput) -> Result<EditProfileOutput, AppError> {
        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);

        let profile = guard
            .profile
            .as_mut()
            .ok_or_else(|| AppError::NotFound("No profile is loaded".to_string()))?;

        profile.set(input.field, input.value);

        Ok(EditProfileOutput {
            profile: profile.clone(),
        })
    }

    async fn save_profile(&self, input: SaveProfileInput) -> Result<SaveProfileOutput, AppError> {
        let identity = self
            .session()
            .identity
            .ok_or_else(|| AppError::Unauthorized("Authentication required.".to_string()))?;

        let saved = self.profiles.save(&identity, input.profile).await?;

        let mut guard = self.state.write().unwrap_or_else(PoisonError::into_inner);
        guard.profile = Some(saved.clone());

        Ok(SaveProfileOutput { profile: saved })
    }
}
