//! Theme preference handling

use tracing::warn;

use yard_domain::model::Theme;
use yard_domain::repository::PreferenceRepository;

/// Stored theme, else the system preference. Read failures fall back silently.
pub fn current_theme<R: PreferenceRepository>(repo: &R, system_prefers_dark: bool) -> Theme {
    let stored = repo.load_theme().unwrap_or_else(|e| {
        warn!(error = %e, "theme preference unreadable");
        None
    });
    Theme::resolve(stored, system_prefers_dark)
}

/// Store `theme` and return it; a failed write only loses the preference
pub fn set_theme<R: PreferenceRepository>(repo: &R, theme: Theme) -> Theme {
    if let Err(e) = repo.save_theme(theme) {
        warn!(error = %e, "failed to persist theme preference");
    }
    theme
}

pub fn toggle_theme<R: PreferenceRepository>(repo: &R, system_prefers_dark: bool) -> Theme {
    let next = current_theme(repo, system_prefers_dark).toggled();
    set_theme(repo, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use yard_types::{Error, StorageError};

    #[derive(Default)]
    struct MemoryPrefs {
        theme: RefCell<Option<Theme>>,
        broken: bool,
    }

    impl PreferenceRepository for MemoryPrefs {
        fn load_theme(&self) -> Result<Option<Theme>, Error> {
            if self.broken {
                return Err(StorageError::Unavailable("denied".to_string()).into());
            }
            Ok(*self.theme.borrow())
        }

        fn save_theme(&self, theme: Theme) -> Result<(), Error> {
            if self.broken {
                return Err(StorageError::Unavailable("denied".to_string()).into());
            }
            *self.theme.borrow_mut() = Some(theme);
            Ok(())
        }
    }

    #[test]
    fn test_system_preference_is_fallback() {
        let prefs = MemoryPrefs::default();
        assert_eq!(current_theme(&prefs, true), Theme::Dark);
        set_theme(&prefs, Theme::Light);
        assert_eq!(current_theme(&prefs, true), Theme::Light);
    }

    #[test]
    fn test_toggle() {
        let prefs = MemoryPrefs::default();
        assert_eq!(toggle_theme(&prefs, false), Theme::Dark);
        assert_eq!(toggle_theme(&prefs, false), Theme::Light);
        assert_eq!(*prefs.theme.borrow(), Some(Theme::Light));
    }

    #[test]
    fn test_broken_storage_is_not_fatal() {
        let prefs = MemoryPrefs {
            broken: true,
            ..MemoryPrefs::default()
        };
        assert_eq!(current_theme(&prefs, false), Theme::Light);
        assert_eq!(toggle_theme(&prefs, false), Theme::Dark);
    }
}
