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
// Form state

use rand::Rng;
use std::time::Instant;

use crate::alert::Alert;
use crate::passgen::{self, CharClass, GenerateError, Options};
use crate::validation::{LengthError, LengthRule};

/// What a submission ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Generated(String),
    InvalidLength(LengthError),
    Refused,
}

/// Everything the password form shows, owned by the form view.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub options: Options,
    pub length_input: String,
    length_error: Option<LengthError>,
    generated: String,
    alert: Alert,
    rule: LengthRule,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rule(rule: LengthRule) -> Self {
        Self { rule, ..Default::default() }
    }

    /// Store the raw length and revalidate it, so the inline error always
    /// matches what is in the field.
    pub fn set_length_input(&mut self, raw: impl Into<String>) {
        self.length_input = raw.into();
        self.length_error = self.rule.validate(&self.length_input).err();
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.options.toggle(class);
    }

    /// Validate the length, then generate. A validation failure stops the
    /// submission before the generator runs; a refusal raises the alert.
    pub fn submit<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) -> SubmitOutcome {
        let length = match self.rule.validate(&self.length_input) {
            Ok(length) => {
                self.length_error = None;
                length
            }
            Err(e) => {
                tracing::warn!(input = %self.length_input, error = %e, "length rejected");
                self.length_error = Some(e.clone());
                return SubmitOutcome::InvalidLength(e);
            }
        };

        match passgen::generate_password(&self.options, length, rng) {
            Ok(password) => {
                self.generated = password.clone();
                SubmitOutcome::Generated(password)
            }
            Err(e @ GenerateError::NoOptionSelected) => {
                self.alert.raise(e.to_string(), now);
                SubmitOutcome::Refused
            }
        }
    }

    /// Clear the options and the result. The length field and its error
    /// are left as they are.
    pub fn reset(&mut self) {
        self.options = Options::default();
        self.generated.clear();
    }

    pub fn poll_alert(&mut self, now: Instant) -> bool {
        self.alert.poll(now)
    }

    pub fn alert(&self) -> &Alert {
        &self.alert
    }

    pub fn length_error(&self) -> Option<&LengthError> {
        self.length_error.as_ref()
    }

    pub fn generated(&self) -> &str {
        &self.generated
    }

    pub fn has_result(&self) -> bool {
        !self.generated.is_empty()
    }
}
