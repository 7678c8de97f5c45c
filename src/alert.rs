//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-13
// Version : 0.1.0
// License : Mulan PSL v2
//
// Self-clearing alert banner

use std::time::{Duration, Instant};

pub const ALERT_DURATION: Duration = Duration::from_millis(3000);

/// Transient notice. Raising arms a single hide deadline; raising again
/// replaces the pending deadline instead of stacking another one.
#[derive(Debug, Clone, Default)]
pub struct Alert {
    message: String,
    visible: bool,
    hide_at: Option<Instant>,
}

impl Alert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&mut self, message: impl Into<String>, now: Instant) {
        self.message = message.into();
        self.visible = true;
        self.hide_at = Some(now + ALERT_DURATION);
        tracing::debug!(text = %self.message, "alert raised");
    }

    /// Fire the pending hide if its deadline has passed. Returns true when
    /// this call hid the alert.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.hide_at {
            Some(deadline) if now >= deadline => {
                self.visible = false;
                self.hide_at = None;
                tracing::debug!("alert expired");
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Last raised message; kept after the alert hides.
    pub fn message(&self) -> &str {
        &self.message
    }
}
