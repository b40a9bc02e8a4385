use leptos::prelude::Effect;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use web_sys::window;

use crate::layout::left::sidebar::nav_label_for_path;

const APP_TITLE: &str = "City Hall Attendance";

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    /// Current router path, e.g. "/logs"
    pub active: RwSignal<String>,
    /// Sidebar expanded (labels visible) or collapsed to icons
    pub left_open: RwSignal<bool>,
    /// Text of the header search box; display-only
    pub header_search: RwSignal<String>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new("/".to_string()),
            left_open: RwSignal::new(true),
            header_search: RwSignal::new(String::new()),
        }
    }

    /// Mirrors the router location into `active` and the document title.
    /// Must be called inside `<Router>`.
    pub fn init_router_integration(&self) {
        let location = use_location();
        let this = *self;
        Effect::new(move |_| {
            let path = location.pathname.get();
            let title = match nav_label_for_path(&path) {
                Some(label) => format!("{} | {}", label, APP_TITLE),
                None => APP_TITLE.to_string(),
            };
            if let Some(document) = window().and_then(|w| w.document()) {
                document.set_title(&title);
            }
            leptos::logging::log!("route changed: {}", path);
            this.active.set(path);
        });
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
