pub mod aggregate;
pub mod alert_rule;
pub mod sample;

pub use aggregate::{Notification, NotificationKind, NotificationStatus};
pub use alert_rule::{AlertRule, ALERT_RULES};
pub use sample::{open_count, NOTIFICATIONS};
