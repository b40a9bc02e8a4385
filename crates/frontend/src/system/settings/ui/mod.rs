//! Settings page: six tabs over one staged `SystemSettings` value.
//!
//! Field helpers take a getter/setter pair so every control reads from and
//! writes to the same signal. Nothing leaves the browser.

use crate::layout::use_notices;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use contracts::system::settings::{
    SystemSettings, EMAIL_FREQUENCIES, IMAGE_QUALITIES, LOG_LEVELS, TIMEZONES, WEEK_DAYS,
};
use leptos::prelude::*;
use thaw::*;

type Settings = RwSignal<SystemSettings>;

const TABS: &[(&str, &str, &str)] = &[
    ("general", "General", "building"),
    ("security", "Security", "shield"),
    ("camera", "Camera", "camera"),
    ("time", "Time", "clock"),
    ("notifications", "Notifications", "bell"),
    ("system", "System", "database"),
];

fn text_field(
    settings: Settings,
    label: &'static str,
    input_type: &'static str,
    get: fn(&SystemSettings) -> String,
    set: fn(&mut SystemSettings, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=input_type
                prop:value=move || settings.with(get)
                on:input=move |ev| settings.update(|s| set(s, event_target_value(&ev)))
            />
        </div>
    }
}

/// Numeric input; text that does not parse keeps the previous value
fn number_field(
    settings: Settings,
    label: &'static str,
    get: fn(&SystemSettings) -> u32,
    set: fn(&mut SystemSettings, u32),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type="number"
                min="0"
                prop:value=move || settings.with(get).to_string()
                on:input=move |ev| {
                    if let Ok(value) = event_target_value(&ev).trim().parse::<u32>() {
                        settings.update(|s| set(s, value));
                    }
                }
            />
        </div>
    }
}

fn toggle_field(
    settings: Settings,
    label: &'static str,
    hint: &'static str,
    get: fn(&SystemSettings) -> bool,
    set: fn(&mut SystemSettings, bool),
) -> impl IntoView {
    view! {
        <label class="toggle-row">
            <div class="toggle-row__text">
                <div class="toggle-row__label">{label}</div>
                <div class="toggle-row__hint">{hint}</div>
            </div>
            <input
                type="checkbox"
                class="toggle"
                prop:checked=move || settings.with(get)
                on:change=move |ev| settings.update(|s| set(s, event_target_checked(&ev)))
            />
        </label>
    }
}

fn select_field(
    settings: Settings,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
    get: fn(&SystemSettings) -> String,
    set: fn(&mut SystemSettings, String),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <select
                prop:value=move || settings.with(get)
                on:change=move |ev| settings.update(|s| set(s, event_target_value(&ev)))
            >
                {options.iter().map(|(value, text)| view! { <option value=*value>{*text}</option> }).collect_view()}
            </select>
        </div>
    }
}

fn section(title: &'static str, children: impl IntoView) -> impl IntoView {
    view! {
        <div class="settings-section">
            <h3 class="settings-section__title">{title}</h3>
            <div class="form-grid">{children}</div>
        </div>
    }
}

fn general_tab(s: Settings) -> AnyView {
    view! {
        {section("Organization Information", view! {
            {text_field(s, "Organization Name", "text", |v| v.general.organization_name.clone(), |v, x| v.general.organization_name = x)}
            {text_field(s, "System Name", "text", |v| v.general.system_name.clone(), |v, x| v.general.system_name = x)}
            {text_field(s, "Admin Email", "email", |v| v.general.admin_email.clone(), |v, x| v.general.admin_email = x)}
            {select_field(s, "Timezone", TIMEZONES, |v| v.general.timezone.clone(), |v, x| v.general.timezone = x)}
            <div class="form-group form-group--wide">
                <label>"Description"</label>
                <textarea
                    rows="3"
                    prop:value=move || s.with(|v| v.general.description.clone())
                    on:input=move |ev| s.update(|v| v.general.description = event_target_value(&ev))
                />
            </div>
        })}
        {section("Administrator Profile", view! {
            {text_field(s, "Full Name", "text", |v| v.general.admin_name.clone(), |v, x| v.general.admin_name = x)}
            {text_field(s, "Phone", "tel", |v| v.general.admin_phone.clone(), |v, x| v.general.admin_phone = x)}
            {text_field(s, "Position", "text", |v| v.general.admin_position.clone(), |v, x| v.general.admin_position = x)}
            {text_field(s, "Department", "text", |v| v.general.admin_department.clone(), |v, x| v.general.admin_department = x)}
        })}
    }
    .into_any()
}

fn security_tab(s: Settings) -> AnyView {
    view! {
        {section("Authentication", view! {
            {toggle_field(s, "Two-Factor Authentication", "Require a second factor for admin logins", |v| v.security.two_factor, |v, x| v.security.two_factor = x)}
            {toggle_field(s, "Auto Lock", "Lock the console after inactivity", |v| v.security.auto_lock, |v, x| v.security.auto_lock = x)}
            {toggle_field(s, "Login Notifications", "Notify on every admin login", |v| v.security.login_notifications, |v, x| v.security.login_notifications = x)}
            {number_field(s, "Session Timeout (minutes)", |v| v.security.session_timeout_minutes, |v, x| v.security.session_timeout_minutes = x)}
            {number_field(s, "Max Login Attempts", |v| v.security.max_login_attempts, |v, x| v.security.max_login_attempts = x)}
        })}
        {section("Password Policy", view! {
            {number_field(s, "Minimum Length", |v| v.security.min_password_length, |v, x| v.security.min_password_length = x)}
            {number_field(s, "Expiry (days)", |v| v.security.password_expiry_days, |v, x| v.security.password_expiry_days = x)}
            {toggle_field(s, "Uppercase Letters", "Require at least one uppercase letter", |v| v.security.require_uppercase, |v, x| v.security.require_uppercase = x)}
            {toggle_field(s, "Numbers", "Require at least one digit", |v| v.security.require_numbers, |v, x| v.security.require_numbers = x)}
            {toggle_field(s, "Special Characters", "Require at least one symbol", |v| v.security.require_special, |v, x| v.security.require_special = x)}
        })}
    }
    .into_any()
}

fn camera_tab(s: Settings) -> AnyView {
    view! {
        {section("Capture", view! {
            {select_field(s, "Image Quality", IMAGE_QUALITIES, |v| v.camera.image_quality.clone(), |v, x| v.camera.image_quality = x)}
            {number_field(s, "Capture Timeout (seconds)", |v| v.camera.capture_timeout_seconds, |v, x| v.camera.capture_timeout_seconds = x)}
            {number_field(s, "Max Retries", |v| v.camera.max_retries, |v, x| v.camera.max_retries = x)}
            {number_field(s, "Storage Period (days)", |v| v.camera.storage_days, |v, x| v.camera.storage_days = x)}
        })}
        {section("Verification", view! {
            {toggle_field(s, "Face Detection", "Reject captures without a detected face", |v| v.camera.face_detection, |v, x| v.camera.face_detection = x)}
            {toggle_field(s, "Quality Check", "Flag blurry or dark images", |v| v.camera.quality_check, |v, x| v.camera.quality_check = x)}
            {toggle_field(s, "Auto Capture", "Take the selfie as soon as a face is steady", |v| v.camera.auto_capture, |v, x| v.camera.auto_capture = x)}
        })}
    }
    .into_any()
}

fn time_tab(s: Settings) -> AnyView {
    view! {
        {section("Working Hours", view! {
            {text_field(s, "Work Start", "time", |v| v.time.work_start.clone(), |v, x| v.time.work_start = x)}
            {text_field(s, "Work End", "time", |v| v.time.work_end.clone(), |v, x| v.time.work_end = x)}
            {text_field(s, "Lunch Start", "time", |v| v.time.lunch_start.clone(), |v, x| v.time.lunch_start = x)}
            {text_field(s, "Lunch End", "time", |v| v.time.lunch_end.clone(), |v, x| v.time.lunch_end = x)}
            {number_field(s, "Late Threshold (minutes)", |v| v.time.late_threshold_minutes, |v, x| v.time.late_threshold_minutes = x)}
            {number_field(s, "Early Departure Threshold (minutes)", |v| v.time.early_threshold_minutes, |v, x| v.time.early_threshold_minutes = x)}
        })}
        <div class="settings-section">
            <h3 class="settings-section__title">"Working Days"</h3>
            <div class="weekday-picker">
                {WEEK_DAYS.iter().enumerate().map(|(i, day)| view! {
                    <label class="weekday-picker__day">
                        <input
                            type="checkbox"
                            prop:checked=move || s.with(|v| v.time.working_days[i])
                            on:change=move |ev| s.update(|v| v.time.working_days[i] = event_target_checked(&ev))
                        />
                        {*day}
                    </label>
                }).collect_view()}
            </div>
            <p class="settings-section__hint">
                {move || format!("Working days: {}", s.with(|v| v.working_day_names().join(", ")))}
            </p>
        </div>
    }
    .into_any()
}

fn notifications_tab(s: Settings) -> AnyView {
    view! {
        {section("Channels", view! {
            {toggle_field(s, "Email Notifications", "Send alerts via email", |v| v.notifications.email, |v, x| v.notifications.email = x)}
            {toggle_field(s, "SMS Notifications", "Send critical alerts via SMS", |v| v.notifications.sms, |v, x| v.notifications.sms = x)}
            {toggle_field(s, "Browser Notifications", "Show alerts in this console", |v| v.notifications.browser, |v, x| v.notifications.browser = x)}
        })}
        {section("Delivery", view! {
            {select_field(s, "Email Frequency", EMAIL_FREQUENCIES, |v| v.notifications.email_frequency.clone(), |v, x| v.notifications.email_frequency = x)}
            {text_field(s, "SMS Phone Number", "tel", |v| v.notifications.sms_phone.clone(), |v, x| v.notifications.sms_phone = x)}
        })}
    }
    .into_any()
}

fn system_tab(s: Settings) -> AnyView {
    view! {
        {section("Backup & Maintenance", view! {
            {toggle_field(s, "Automatic Backups", "Back up attendance data every night", |v| v.system.automatic_backups, |v, x| v.system.automatic_backups = x)}
            {text_field(s, "Backup Time", "time", |v| v.system.backup_time.clone(), |v, x| v.system.backup_time = x)}
            {number_field(s, "Data Retention (days)", |v| v.system.retention_days, |v, x| v.system.retention_days = x)}
            {text_field(s, "Maintenance Window", "time", |v| v.system.maintenance_window.clone(), |v, x| v.system.maintenance_window = x)}
        })}
        {section("Diagnostics", view! {
            {toggle_field(s, "Debug Mode", "Verbose logging for troubleshooting", |v| v.system.debug_mode, |v, x| v.system.debug_mode = x)}
            {toggle_field(s, "System Monitoring", "Track uptime and performance", |v| v.system.monitoring, |v, x| v.system.monitoring = x)}
            {select_field(s, "Log Level", LOG_LEVELS, |v| v.system.log_level.clone(), |v, x| v.system.log_level = x)}
        })}
        <div class="settings-section">
            <h3 class="settings-section__title">"System Information"</h3>
            <dl class="details-list">
                <dt>"Version:"</dt><dd>{env!("CARGO_PKG_VERSION")}</dd>
                <dt>"Storage:"</dt><dd>"Sample data (read-only)"</dd>
            </dl>
        </div>
    }
    .into_any()
}

fn tab_view(tab: &str, settings: Settings) -> AnyView {
    match tab {
        "security" => security_tab(settings),
        "camera" => camera_tab(settings),
        "time" => time_tab(settings),
        "notifications" => notifications_tab(settings),
        "system" => system_tab(settings),
        _ => general_tab(settings),
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let notices = use_notices();
    let selected_tab = RwSignal::new(TABS[0].0.to_string());

    let defaults = match SystemSettings::load_default() {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("default settings unavailable: {:#}", e);
            return view! {
                <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
                    <PageHeader title="Settings" />
                    <div class="page__content">
                        <div class="warning-box">{format!("Settings could not be loaded: {e}")}</div>
                    </div>
                </PageFrame>
            }
            .into_any();
        }
    };
    let settings = RwSignal::new(defaults);

    let save = move |_| match settings.with_untracked(|s| s.to_json()) {
        Ok(json) => {
            log::info!("settings staged:\n{}", json);
            notices.info("Settings Saved Locally", "Changes are kept for this session only and are not persisted.");
        }
        Err(e) => {
            log::error!("settings serialization failed: {:#}", e);
            notices.error("Save Failed", e.to_string());
        }
    };

    let reset = move |_| match SystemSettings::load_default() {
        Ok(defaults) => {
            settings.set(defaults);
            notices.info("Settings Reset", "Default values restored.");
        }
        Err(e) => notices.error("Reset Failed", e.to_string()),
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM>
            <PageHeader title="Settings" subtitle="Configure system preferences and security settings".to_string()>
                <Button appearance=ButtonAppearance::Secondary on_click=reset>
                    {icon("refresh")}
                    "Reset"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=save>
                    {icon("save")}
                    "Save Changes"
                </Button>
            </PageHeader>

            <div class="page__content">
                <TabList selected_value=selected_tab>
                    {TABS.iter().map(|(value, label, icon_name)| view! {
                        <Tab value=*value>{icon(icon_name)} {*label}</Tab>
                    }).collect_view()}
                </TabList>

                <Card>
                    {move || tab_view(&selected_tab.get(), settings)}
                </Card>
            </div>
        </PageFrame>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_cover_every_settings_group() {
        let values: Vec<&str> = TABS.iter().map(|(value, _, _)| *value).collect();
        assert_eq!(
            values,
            vec!["general", "security", "camera", "time", "notifications", "system"]
        );
    }

    #[test]
    fn test_select_options_contain_defaults() {
        let defaults = SystemSettings::load_default().unwrap();
        assert!(TIMEZONES.iter().any(|(v, _)| *v == defaults.general.timezone));
        assert!(IMAGE_QUALITIES.iter().any(|(v, _)| *v == defaults.camera.image_quality));
        assert!(EMAIL_FREQUENCIES.iter().any(|(v, _)| *v == defaults.notifications.email_frequency));
        assert!(LOG_LEVELS.iter().any(|(v, _)| *v == defaults.system.log_level));
    }
}
