use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

/// How long a notice stays on screen
const NOTICE_TTL_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Info,
    Error,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Info => "notice notice--info",
            NoticeKind::Error => "notice notice--error",
        }
    }

    fn icon_name(&self) -> &'static str {
        match self {
            NoticeKind::Success => "check-circle",
            NoticeKind::Info => "info",
            NoticeKind::Error => "alert-triangle",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

/// Toast-style notices shown in the corner of the screen
#[derive(Clone, Copy)]
pub struct NoticeService {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(1),
        }
    }

    /// Shows a notice and schedules its removal
    pub fn show(&self, kind: NoticeKind, title: impl Into<String>, description: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.notices.update(|list| {
            list.push(Notice {
                id,
                kind,
                title: title.into(),
                description: description.into(),
            })
        });

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            this.dismiss(id);
        });
    }

    pub fn success(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(NoticeKind::Success, title, description);
    }

    pub fn info(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(NoticeKind::Info, title, description);
    }

    pub fn error(&self, title: impl Into<String>, description: impl Into<String>) {
        self.show(NoticeKind::Error, title, description);
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notices() -> NoticeService {
    use_context::<NoticeService>().expect("NoticeService not provided in context")
}

/// Renders the active notices; mounted once near the root.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let service = use_notices();

    view! {
        <div class="notice-stack">
            <For
                each=move || service.notices.get()
                key=|n| n.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.class() role="status">
                            <div class="notice__icon">{icon(notice.kind.icon_name())}</div>
                            <div class="notice__body">
                                <div class="notice__title">{notice.title.clone()}</div>
                                <div class="notice__description">{notice.description.clone()}</div>
                            </div>
                            <button class="notice__close" on:click=move |_| service.dismiss(id) title="Close">
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
