use contracts::system::auth::AdminSession;
use web_sys::window;

const SESSION_KEY: &str = "attendance_admin_session";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the simulated session to localStorage
pub fn save_session(session: &AdminSession) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(session) {
        Ok(json) => {
            let _ = storage.set_item(SESSION_KEY, &json);
        }
        Err(e) => log::error!("Failed to serialize session: {}", e),
    }
}

/// Restore a remembered session, dropping it if it no longer parses
pub fn load_session() -> Option<AdminSession> {
    let json = get_local_storage()?.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&json) {
        Ok(session) => Some(session),
        Err(e) => {
            log::warn!("Discarding stored session: {}", e);
            clear_session();
            None
        }
    }
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
