use super::identity::Identity;
use super::profile::Profile;

/// Transient, process-wide view of the signed-in user and their profile.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub identity: Option<Identity>,
    pub profile: Option<Profile>,
    pub loading: bool,
}

impl SessionSnapshot {
    /// The state before the provider has reported anything.
    pub fn initial() -> Self {
        Self {
            identity: None,
            profile: None,
            loading: true,
        }
    }
}
