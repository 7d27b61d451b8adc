// SPDX-License-Identifier: MPL-2.0
//! Rapid-reload detection.
//!
//! A server that keeps redirecting between pages shows up as page loads only
//! milliseconds apart. When that happens the session and the stored user are
//! wiped so the next load starts clean.

use crate::application::port::storage::{set_best_effort, Storage, LAST_PAGE_LOAD_KEY};
use chrono::Utc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadCheck {
    /// Load recorded; carry on.
    Normal,
    /// Previous load was inside the window. Session state was cleared.
    LoopDetected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReloadGuard {
    window: Duration,
}

impl ReloadGuard {
    pub fn new(window: Duration) -> Self {
        Self { window }
    }

    /// Checks the current wall-clock time.
    pub fn check(&self, session: &mut dyn Storage, persistent: &mut dyn Storage) -> ReloadCheck {
        self.check_at(session, persistent, Utc::now().timestamp_millis())
    }

    /// Checks a page load happening at `now_ms` (epoch millis).
    pub fn check_at(
        &self,
        session: &mut dyn Storage,
        persistent: &mut dyn Storage,
        now_ms: i64,
    ) -> ReloadCheck {
        let last = session
            .get(LAST_PAGE_LOAD_KEY)
            .and_then(|raw| raw.trim().parse::<i64>().ok());
        let window_ms = i64::try_from(self.window.as_millis()).unwrap_or(i64::MAX);

        if let Some(last) = last {
            let elapsed = now_ms.saturating_sub(last);
            if (0..window_ms).contains(&elapsed) {
                tracing::error!(elapsed_ms = elapsed, "rapid reload detected, possible redirect loop");
                if let Err(err) = session.clear() {
                    tracing::warn!("failed to clear session storage: {}", err);
                }
                crate::session::clear_user(persistent);
                return ReloadCheck::LoopDetected;
            }
        }

        set_best_effort(session, LAST_PAGE_LOAD_KEY, &now_ms.to_string());
        ReloadCheck::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::storage::CURRENT_USER_KEY;
    use crate::infrastructure::MemoryStorage;

    fn guard() -> ReloadGuard {
        ReloadGuard::new(Duration::from_millis(2_000))
    }

    #[test]
    fn first_load_records_timestamp() {
        let mut session = MemoryStorage::new();
        let mut persistent = MemoryStorage::new();
        assert_eq!(guard().check_at(&mut session, &mut persistent, 10_000), ReloadCheck::Normal);
        assert_eq!(session.get(LAST_PAGE_LOAD_KEY), Some("10000".into()));
    }

    #[test]
    fn rapid_reload_clears_session_and_user() {
        let mut session = MemoryStorage::new();
        let mut persistent = MemoryStorage::new();
        persistent.set(CURRENT_USER_KEY, "{}").unwrap();
        persistent.set("language", "hi").unwrap();

        guard().check_at(&mut session, &mut persistent, 10_000);
        let check = guard().check_at(&mut session, &mut persistent, 11_500);

        assert_eq!(check, ReloadCheck::LoopDetected);
        assert!(session.is_empty());
        assert_eq!(persistent.get(CURRENT_USER_KEY), None);
        assert_eq!(persistent.get("language"), Some("hi".into()));
    }

    #[test]
    fn slow_reload_is_normal() {
        let mut session = MemoryStorage::new();
        let mut persistent = MemoryStorage::new();
        guard().check_at(&mut session, &mut persistent, 10_000);
        assert_eq!(guard().check_at(&mut session, &mut persistent, 12_000), ReloadCheck::Normal);
        assert_eq!(session.get(LAST_PAGE_LOAD_KEY), Some("12000".into()));
    }

    #[test]
    fn garbage_timestamp_is_ignored() {
        let mut session = MemoryStorage::new();
        let mut persistent = MemoryStorage::new();
        session.set(LAST_PAGE_LOAD_KEY, "yesterday").unwrap();
        assert_eq!(guard().check_at(&mut session, &mut persistent, 5), ReloadCheck::Normal);
    }
}
