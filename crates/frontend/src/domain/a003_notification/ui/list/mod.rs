use crate::layout::use_notices;
use crate::shared::components::filter_panel::{options_with_all, FilterPanel, FilterSelect};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::CountCard;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_state_from, highlight_matches, visible_records};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a003_notification::{
    AlertRule, Notification, NotificationKind, NotificationStatus, ALERT_RULES, NOTIFICATIONS,
};
use contracts::domain::common::sample_date;
use contracts::shared::indicators::IndicatorStatus;
use contracts::shared::record_filter::ALL_SENTINEL;
use contracts::shared::summary::{count_by_field, count_where};
use leptos::prelude::*;
use thaw::*;

const TAB_NOTIFICATIONS: &str = "notifications";
const TAB_RULES: &str = "rules";

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Warning | NotificationKind::Security => "alert-triangle",
        NotificationKind::Late | NotificationKind::Early => "clock",
        NotificationKind::System => "settings",
    }
}

fn kind_color(kind: NotificationKind) -> BadgeColor {
    match kind {
        NotificationKind::Warning | NotificationKind::Early => BadgeColor::Warning,
        NotificationKind::Late | NotificationKind::Security => BadgeColor::Danger,
        NotificationKind::System => BadgeColor::Brand,
    }
}

fn status_color(status: NotificationStatus) -> BadgeColor {
    match status {
        NotificationStatus::Unread => BadgeColor::Danger,
        NotificationStatus::Read => BadgeColor::Subtle,
        NotificationStatus::Resolved => BadgeColor::Success,
        NotificationStatus::Investigating => BadgeColor::Warning,
    }
}

/// Notifications raised on the sample day
fn today_count() -> usize {
    match sample_date() {
        Some(day) => count_where(&NOTIFICATIONS, |n| n.is_on(day)),
        None => 0,
    }
}

#[component]
fn NotificationCard(notification: Notification, #[prop(into)] needle: String) -> impl IntoView {
    let notices = use_notices();
    let unread = notification.status == NotificationStatus::Unread;
    let title = notification.title.clone();
    let title_for_dismiss = notification.title.clone();

    view! {
        <div class="notification-card" class:notification-card--unread=unread>
            <div class=format!("notification-card__icon notification-card__icon--{}", notification.kind.code())>
                {icon(kind_icon(notification.kind))}
            </div>
            <div class="notification-card__body">
                <div class="notification-card__header">
                    <h4 class="notification-card__title">{highlight_matches(&notification.title, &needle)}</h4>
                    <Flex gap=FlexGap::Small>
                        <Badge appearance=BadgeAppearance::Tint color=kind_color(notification.kind)>
                            {notification.kind.display_name()}
                        </Badge>
                        <Badge appearance=BadgeAppearance::Filled color=status_color(notification.status)>
                            {notification.status.display_name()}
                        </Badge>
                    </Flex>
                </div>
                <p class="notification-card__message">{highlight_matches(&notification.message, &needle)}</p>
                <div class="notification-card__footer">
                    <div class="notification-card__meta">
                        <span>{notification.display_timestamp()}</span>
                        {notification.employee.clone().map(|employee| view! {
                            <span class="notification-card__employee">
                                {icon("user")}
                                {highlight_matches(&employee, &needle)}
                            </span>
                        })}
                    </div>
                    <Flex gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            size=ButtonSize::Small
                            on_click=move |_| notices.info("Not Resolved", format!("\"{}\" is display-only.", title))
                        >
                            {icon("check")}
                            "Resolve"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            on_click=move |_| notices.info("Not Dismissed", format!("\"{}\" is display-only.", title_for_dismiss))
                        >
                            {icon("x")}
                        </Button>
                    </Flex>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AlertRulesPanel() -> impl IntoView {
    let notices = use_notices();

    // Switch state lives on this page only
    let rules: Vec<(AlertRule, RwSignal<bool>)> = ALERT_RULES
        .iter()
        .map(|rule| (rule.clone(), RwSignal::new(rule.enabled)))
        .collect();
    let email_channel = RwSignal::new(false);
    let sms_channel = RwSignal::new(false);
    let admin_email = RwSignal::new(String::new());
    let cc_emails = RwSignal::new(String::new());

    let rule_states: Vec<RwSignal<bool>> = rules.iter().map(|(_, state)| *state).collect();
    let reset = move |_| {
        for (rule, state) in ALERT_RULES.iter().zip(rule_states.iter()) {
            state.set(rule.enabled);
        }
        email_channel.set(false);
        sms_channel.set(false);
        admin_email.set(String::new());
        cc_emails.set(String::new());
    };

    view! {
        <Card>
            <div class="card-section">
                <h3 class="card-section__title">{icon("settings")} "Alert Rules Configuration"</h3>
                <p class="card-section__subtitle">"Configure automatic alert triggers and notification settings"</p>
            </div>

            <div class="card-section">
                <h4>"Alert Rules"</h4>
                {rules.into_iter().map(|(rule, enabled)| view! {
                    <div class="alert-rule">
                        <div class="alert-rule__text">
                            <div class="alert-rule__name">{rule.name}</div>
                            <div class="alert-rule__description">{rule.description}</div>
                        </div>
                        <Switch checked=enabled />
                    </div>
                }).collect_view()}
            </div>

            <div class="card-section">
                <h4>"Notification Channels"</h4>
                <div class="form-grid">
                    <Switch checked=email_channel label="Email Notifications: send alerts via email" />
                    <Switch checked=sms_channel label="SMS Notifications: send critical alerts via SMS" />
                </div>
            </div>

            <div class="card-section">
                <h4>"Email Settings"</h4>
                <div class="form-grid">
                    <div class="form-group">
                        <Label>"Admin Email"</Label>
                        <Input value=admin_email placeholder="admin@cityhall.gov" input_type=InputType::Email />
                    </div>
                    <div class="form-group">
                        <Label>"CC Emails"</Label>
                        <Input value=cc_emails placeholder="supervisor@cityhall.gov" />
                    </div>
                </div>
            </div>

            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| notices.info("Settings Not Saved", "Alert rules are display-only in this console.")
                >
                    {icon("save")}
                    "Save Settings"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=reset>
                    "Reset to Default"
                </Button>
            </Flex>
        </Card>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn NotificationList() -> impl IntoView {
    let notices = use_notices();
    let selected_tab = RwSignal::new(TAB_NOTIFICATIONS.to_string());

    let query = RwSignal::new(String::new());
    let kind = RwSignal::new(ALL_SENTINEL.to_string());
    let status = RwSignal::new(ALL_SENTINEL.to_string());

    let filter_state = Memo::new(move |_| {
        filter_state_from(&query.get(), &[("type", kind.get()), ("status", status.get())])
    });
    let visible = Memo::new(move |_| visible_records(&NOTIFICATIONS, &filter_state.get()));
    let total = NOTIFICATIONS.len();

    let reset_filters = Callback::new(move |_| {
        query.set(String::new());
        kind.set(ALL_SENTINEL.to_string());
        status.set(ALL_SENTINEL.to_string());
    });

    let unread = count_by_field(&NOTIFICATIONS, "status", NotificationStatus::Unread.code());
    let investigating = count_by_field(&NOTIFICATIONS, "status", NotificationStatus::Investigating.code());
    let resolved = count_by_field(&NOTIFICATIONS, "status", NotificationStatus::Resolved.code());
    let today = today_count();

    let kind_options = options_with_all(
        "All Types",
        NotificationKind::all()
            .into_iter()
            .map(|k| (k.code().to_string(), k.display_name().to_string())),
    );
    let status_options = options_with_all(
        "All Status",
        NotificationStatus::all()
            .into_iter()
            .map(|s| (s.code().to_string(), s.display_name().to_string())),
    );

    view! {
        <PageFrame page_id="a003_notification--list" category=PAGE_CAT_LIST>
            <PageHeader title="Notifications & Alerts" subtitle="Monitor system alerts and employee attendance notifications".to_string()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| selected_tab.set(TAB_RULES.to_string())
                >
                    {icon("mail")}
                    "Email Settings"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| notices.info("Create Alert", "Custom alerts are not available in this console.")
                >
                    {icon("plus")}
                    "Create Alert"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    <CountCard label="Unread" icon_name="bell" count=Signal::derive(move || unread) status=IndicatorStatus::Bad />
                    <CountCard label="Investigating" icon_name="alert-triangle" count=Signal::derive(move || investigating) status=IndicatorStatus::Warning />
                    <CountCard label="Resolved" icon_name="check" count=Signal::derive(move || resolved) status=IndicatorStatus::Good />
                    <CountCard label="Today" icon_name="calendar" count=Signal::derive(move || today) />
                </div>

                <TabList selected_value=selected_tab>
                    <Tab value=TAB_NOTIFICATIONS>{icon("bell")} "Notifications"</Tab>
                    <Tab value=TAB_RULES>{icon("settings")} "Alert Rules"</Tab>
                </TabList>

                {move || if selected_tab.get() == TAB_RULES {
                    view! { <AlertRulesPanel /> }.into_any()
                } else {
                    let kind_options = kind_options.clone();
                    let status_options = status_options.clone();
                    view! {
                        <FilterPanel
                            query=query
                            placeholder="Search notifications..."
                            active_filters_count=Signal::derive(move || filter_state.with(|s| s.active_count()))
                            on_reset=reset_filters
                        >
                            <FilterSelect value=kind options=kind_options label="Type" />
                            <FilterSelect value=status options=status_options label="Status" />
                        </FilterPanel>

                        <Card>
                            <div class="card-section">
                                <h3 class="card-section__title">{icon("bell")} "Recent Notifications"</h3>
                                <p class="card-section__subtitle">
                                    {move || format!("Showing {} of {} notifications", visible.with(|v| v.len()), total)}
                                </p>
                            </div>
                            <div class="notification-list">
                                {move || {
                                    let needle = query.get();
                                    visible.get().into_iter().map(|notification| {
                                        view! { <NotificationCard notification=notification needle=needle.clone() /> }
                                    }).collect_view()
                                }}
                                {move || visible.with(|v| v.is_empty()).then(|| view! {
                                    <div class="empty-state">"No notifications match the current filters."</div>
                                })}
                            </div>
                        </Card>
                    }.into_any()
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_today_counts_sample_day() {
        assert_eq!(today_count(), NOTIFICATIONS.len());
    }

    #[test]
    fn test_filter_by_type_and_status() {
        let state = filter_state_from("", &[("type", "late".to_string()), ("status", "unread".to_string())]);
        let rows = visible_records(&NOTIFICATIONS, &state);
        assert!(rows
            .iter()
            .all(|n| n.kind == NotificationKind::Late && n.status == NotificationStatus::Unread));
    }
}
