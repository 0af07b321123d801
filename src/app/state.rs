use super::config::Config;
use crate::account::inbound::state::AccountState;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    // Each module gets its own state struct.
    pub account: AccountState,
}
