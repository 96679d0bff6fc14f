use crate::locale::Locale;
use crate::preferences::NotificationSound;
use crate::session::TimerMode;

/// Permission state for system notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPermission {
    Granted,
    Denied,
    /// Not decided yet; asking is allowed.
    Default,
}

/// Side effects fired when a cycle ends.
///
/// Every method is best effort: a missing audio device or notification
/// daemon must not interrupt the timer.
pub trait Notifier {
    fn play_sound(&self, sound: &NotificationSound);

    fn permission(&self) -> NotificationPermission;

    fn request_permission(&mut self) -> NotificationPermission;

    fn show(&self, title: &str, body: &str);
}

/// Title and body of the "cycle finished" notification.
pub fn completion_notice(mode: TimerMode, locale: Locale) -> (&'static str, String) {
    let label = mode.label(locale);
    match locale {
        Locale::PtBr => ("Tempo esgotado!", format!("Sua sessão de {label} terminou.")),
        Locale::En => ("Time's up!", format!("Your {label} session is over.")),
    }
}

/// Play the sound, then show the notification if allowed. When permission
/// is undecided it is requested instead; a denial is respected silently.
pub fn notify_completion<N: Notifier + ?Sized>(
    notifier: &mut N,
    sound: &NotificationSound,
    mode: TimerMode,
    locale: Locale,
) {
    notifier.play_sound(sound);
    match notifier.permission() {
        NotificationPermission::Granted => {
            let (title, body) = completion_notice(mode, locale);
            notifier.show(title, &body);
        }
        NotificationPermission::Default => {
            let answer = notifier.request_permission();
            tracing::debug!(?answer, "notification permission requested");
        }
        NotificationPermission::Denied => {
            tracing::debug!("notifications denied; sound only");
        }
    }
}

/// Notifier that does nothing, for headless use.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn play_sound(&self, _sound: &NotificationSound) {}

    fn permission(&self) -> NotificationPermission {
        NotificationPermission::Denied
    }

    fn request_permission(&mut self) -> NotificationPermission {
        NotificationPermission::Denied
    }

    fn show(&self, _title: &str, _body: &str) {}
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Records every call for assertions.
    #[derive(Debug)]
    pub struct RecordingNotifier {
        pub permission: NotificationPermission,
        pub sounds: RefCell<Vec<String>>,
        pub shown: RefCell<Vec<(String, String)>>,
        pub requests: usize,
    }

    impl RecordingNotifier {
        pub fn new(permission: NotificationPermission) -> Self {
            Self {
                permission,
                sounds: RefCell::new(Vec::new()),
                shown: RefCell::new(Vec::new()),
                requests: 0,
            }
        }
    }

    impl Notifier for RecordingNotifier {
        fn play_sound(&self, sound: &NotificationSound) {
            self.sounds.borrow_mut().push(sound.url.clone());
        }

        fn permission(&self) -> NotificationPermission {
            self.permission
        }

        fn request_permission(&mut self) -> NotificationPermission {
            self.requests += 1;
            self.permission
        }

        fn show(&self, title: &str, body: &str) {
            self.shown.borrow_mut().push((title.to_string(), body.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingNotifier;
    use super::*;

    #[test]
    fn granted_shows_notification() {
        let mut n = RecordingNotifier::new(NotificationPermission::Granted);
        notify_completion(&mut n, &NotificationSound::default(), TimerMode::Focus, Locale::PtBr);
        assert_eq!(n.sounds.borrow().len(), 1);
        let shown = n.shown.borrow();
        assert_eq!(shown[0].0, "Tempo esgotado!");
        assert_eq!(shown[0].1, "Sua sessão de Foco terminou.");
        assert_eq!(n.requests, 0);
    }

    #[test]
    fn undecided_requests_permission() {
        let mut n = RecordingNotifier::new(NotificationPermission::Default);
        notify_completion(&mut n, &NotificationSound::default(), TimerMode::ShortBreak, Locale::En);
        assert_eq!(n.requests, 1);
        assert!(n.shown.borrow().is_empty());
        assert_eq!(n.sounds.borrow().len(), 1);
    }

    #[test]
    fn denied_only_plays_sound() {
        let mut n = RecordingNotifier::new(NotificationPermission::Denied);
        notify_completion(&mut n, &NotificationSound::default(), TimerMode::LongBreak, Locale::En);
        assert_eq!(n.requests, 0);
        assert!(n.shown.borrow().is_empty());
        assert_eq!(n.sounds.borrow().len(), 1);
    }
}
