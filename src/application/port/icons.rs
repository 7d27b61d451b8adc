// SPDX-License-Identifier: MPL-2.0
//! Icon rendering port.
//!
//! Pages declare icons as `<i data-lucide="name">` placeholders. An
//! [`IconRenderer`] turns them into drawable markup. The library backing it
//! may not be ready yet, so callers drive it through an [`IconRetry`]: one
//! attempt per call, with the pause before the next attempt handed back to
//! the caller's event loop instead of being slept on.

use crate::dom::Document;
use std::time::Duration;

/// Attribute naming the icon a placeholder stands for.
pub const ICON_ATTRIBUTE: &str = "data-lucide";

/// Errors reported by an icon renderer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IconError {
    /// The icon library is not loaded yet; retrying may succeed.
    #[error("icon library not available")]
    Unavailable,
    /// Rendering failed for another reason.
    #[error("icon rendering failed: {0}")]
    Failed(String),
}

/// Materializes icon placeholders in a document.
pub trait IconRenderer {
    /// Renders every placeholder in `document` and returns how many were
    /// rendered. Must be idempotent.
    ///
    /// # Errors
    ///
    /// Returns [`IconError`] when the icons could not be rendered.
    fn render_icons(&mut self, document: &mut Document) -> Result<usize, IconError>;
}

/// Retry policy for [`IconRetry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts after the first one.
    pub max_retries: u32,
    /// Pause between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: crate::config::DEFAULT_ICON_MAX_RETRIES,
            delay: Duration::from_millis(crate::config::DEFAULT_ICON_RETRY_DELAY_MS),
        }
    }
}

/// Result of one [`IconRetry::attempt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconPass {
    /// The renderer succeeded with this many icons.
    Rendered(usize),
    /// The attempt failed; try again after this pause.
    RetryAfter(Duration),
    /// The last allowed attempt failed.
    GaveUp,
}

/// Budget of one icon refresh, spread over deferred attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconRetry {
    policy: RetryPolicy,
    retries_left: u32,
}

impl IconRetry {
    #[must_use]
    pub fn new(policy: RetryPolicy) -> Self {
        Self {
            policy,
            retries_left: policy.max_retries,
        }
    }

    /// Pause the caller should wait before the next attempt.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.policy.delay
    }

    /// Calls `renderer` once and never blocks.
    ///
    /// Both error kinds count against the budget. Giving up is logged at
    /// error level; icon failures never reach the caller's render pass.
    pub fn attempt(&mut self, renderer: &mut dyn IconRenderer, document: &mut Document) -> IconPass {
        match renderer.render_icons(document) {
            Ok(count) => IconPass::Rendered(count),
            Err(err) if self.retries_left > 0 => {
                self.retries_left -= 1;
                tracing::warn!("{}, retrying in {}ms", err, self.policy.delay.as_millis());
                IconPass::RetryAfter(self.policy.delay)
            }
            Err(err) => {
                tracing::error!(
                    "failed to render icons after {} attempts: {}",
                    self.policy.max_retries + 1,
                    err
                );
                IconPass::GaveUp
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    struct Flaky {
        failures: u32,
        calls: u32,
    }

    impl IconRenderer for Flaky {
        fn render_icons(&mut self, _document: &mut Document) -> Result<usize, IconError> {
            self.calls += 1;
            if self.calls <= self.failures {
                Err(IconError::Unavailable)
            } else {
                Ok(1)
            }
        }
    }

    fn policy(max_retries: u32) -> RetryPolicy {
        RetryPolicy {
            max_retries,
            delay: Duration::from_millis(250),
        }
    }

    #[test]
    fn each_attempt_calls_renderer_once() {
        let mut renderer = Flaky { failures: 2, calls: 0 };
        let mut doc = Document::new(Element::new("body"));
        let mut retry = IconRetry::new(policy(3));

        let delay = Duration::from_millis(250);
        assert_eq!(retry.attempt(&mut renderer, &mut doc), IconPass::RetryAfter(delay));
        assert_eq!(renderer.calls, 1);
        assert_eq!(retry.attempt(&mut renderer, &mut doc), IconPass::RetryAfter(delay));
        assert_eq!(retry.attempt(&mut renderer, &mut doc), IconPass::Rendered(1));
        assert_eq!(renderer.calls, 3);
    }

    #[test]
    fn gives_up_after_max_retries() {
        let mut renderer = Flaky { failures: 10, calls: 0 };
        let mut doc = Document::new(Element::new("body"));
        let mut retry = IconRetry::new(policy(2));

        let mut passes = Vec::new();
        loop {
            let pass = retry.attempt(&mut renderer, &mut doc);
            passes.push(pass);
            if !matches!(pass, IconPass::RetryAfter(_)) {
                break;
            }
        }
        assert_eq!(passes.len(), 3);
        assert_eq!(passes.last(), Some(&IconPass::GaveUp));
        assert_eq!(renderer.calls, 3);
    }

    #[test]
    fn zero_retries_gives_up_at_once() {
        let mut renderer = Flaky { failures: 1, calls: 0 };
        let mut doc = Document::new(Element::new("body"));
        assert_eq!(
            IconRetry::new(policy(0)).attempt(&mut renderer, &mut doc),
            IconPass::GaveUp
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(IconError::Unavailable.to_string(), "icon library not available");
        assert_eq!(
            IconError::Failed("no svg".into()).to_string(),
            "icon rendering failed: no svg"
        );
    }
}
