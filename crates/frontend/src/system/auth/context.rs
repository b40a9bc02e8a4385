use contracts::system::auth::{simulate_login, AdminSession, LoginRequest};
use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub session: Option<AdminSession>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    // Only sessions saved with "remember me" survive a reload
    let (auth_state, set_auth_state) = signal(AuthState {
        session: storage::load_session(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login. Any non-empty email and password are accepted.
pub fn do_login(request: LoginRequest, set_auth_state: WriteSignal<AuthState>) -> Result<AdminSession, String> {
    let session = simulate_login(&request).map_err(|e| e.to_string())?;

    if session.remember_me {
        storage::save_session(&session);
    }

    set_auth_state.set(AuthState {
        session: Some(session.clone()),
    });

    Ok(session)
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
