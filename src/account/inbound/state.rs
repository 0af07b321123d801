use std::sync::Arc;

use crate::account::usecase::session::SessionUseCase;

#[derive(Clone)]
pub struct AccountState {
    pub session: Arc<dyn SessionUseCase>,
}

impl AccountState {
    pub fn new(session: Arc<dyn SessionUseCase>) -> Self {
        Self { session }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::usecase::session::MockSessionUseCase;

    #[test]
    fn test_account_state_new() {
        let session: Arc<dyn SessionUseCase> = Arc::new(MockSessionUseCase::new());

        let state = AccountState::new(session.clone());

        assert!(Arc::ptr_eq(&state.session, &session));
    }
}
