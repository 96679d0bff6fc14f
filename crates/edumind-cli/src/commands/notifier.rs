use edumind_core::timer::{NotificationPermission, Notifier};
use edumind_core::{Config, NotificationSound};
use notify_rust::Notification;

use super::sound;

/// Desktop notifications through the session's notification daemon.
pub struct DesktopNotifier {
    enabled: bool,
    desktop: bool,
}

impl DesktopNotifier {
    pub fn from_config(config: &Config) -> Self {
        Self {
            enabled: config.notifications.enabled,
            desktop: config.notifications.desktop,
        }
    }
}

impl Notifier for DesktopNotifier {
    fn play_sound(&self, selection: &NotificationSound) {
        if self.enabled {
            sound::play(selection);
        }
    }

    /// Desktops have no permission prompt; configuration decides.
    fn permission(&self) -> NotificationPermission {
        if self.enabled && self.desktop {
            NotificationPermission::Granted
        } else {
            NotificationPermission::Denied
        }
    }

    fn request_permission(&mut self) -> NotificationPermission {
        self.permission()
    }

    fn show(&self, title: &str, body: &str) {
        let shown = Notification::new()
            .summary(title)
            .body(body)
            .appname("EduMind")
            .icon("alarm-clock")
            .show();
        if let Err(e) = shown {
            tracing::warn!(error = %e, "desktop notification failed");
        }
    }
}
