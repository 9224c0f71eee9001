use std::time::Duration;

/// Where one warning channel currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningPhase {
    /// Nothing shown, nothing waiting.
    Quiet,
    /// A message is waiting out its delay before it appears.
    PendingShow,
    /// A message is on screen.
    Shown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingShow {
    message: String,
    remaining: Duration,
}

/// Show-delayed, hide-immediate gate for one warning channel.
///
/// A new message must survive `delay` of consecutive observations before it
/// becomes visible, so transient states during a slider drag never flash.
/// Clearing takes effect on the observation itself. While a different
/// message matures, the currently shown one stays up.
///
/// Driven by explicit ticks; the caller owns time.
#[derive(Debug)]
pub struct WarningDebouncer {
    delay: Duration,
    visible: Option<String>,
    pending: Option<PendingShow>,
}

impl WarningDebouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            visible: None,
            pending: None,
        }
    }

    /// Feeds the latest computed warning for this channel. Returns true when
    /// the visible message changed (only clears happen here; shows wait for
    /// `tick`).
    pub fn observe(&mut self, target: Option<&str>) -> bool {
        match target {
            None => {
                self.pending = None;
                self.visible.take().is_some()
            }
            Some(message) => {
                if self.visible.as_deref() == Some(message) {
                    self.pending = None;
                } else if self.pending.as_ref().is_none_or(|p| p.message != message) {
                    self.pending = Some(PendingShow {
                        message: message.to_string(),
                        remaining: self.delay,
                    });
                }
                false
            }
        }
    }

    /// Advances the delay timer. Returns true when a pending message became
    /// visible.
    pub fn tick(&mut self, delta: Duration) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };
        pending.remaining = pending.remaining.saturating_sub(delta);
        if !pending.remaining.is_zero() {
            return false;
        }
        let matured = self.pending.take();
        self.visible = matured.map(|p| p.message);
        true
    }

    #[must_use]
    pub fn visible(&self) -> Option<&str> {
        self.visible.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> WarningPhase {
        if self.pending.is_some() {
            WarningPhase::PendingShow
        } else if self.visible.is_some() {
            WarningPhase::Shown
        } else {
            WarningPhase::Quiet
        }
    }
}
