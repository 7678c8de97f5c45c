//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password length validation

use std::num::IntErrorKind;
use thiserror::Error;

pub const MIN_LENGTH: usize = 4;
pub const MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LengthError {
    #[error("Password length is required.")]
    Required,
    #[error("Password length must be a whole number.")]
    NotANumber,
    #[error("A password should be at least {min}.")]
    TooShort { min: usize },
    #[error("Maximum supported length is {max}.")]
    TooLong { max: usize },
}

/// 密码长度规则，闭区间 [min, max]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthRule {
    pub min: usize,
    pub max: usize,
    pub required: bool,
}

impl Default for LengthRule {
    fn default() -> Self {
        Self {
            min: MIN_LENGTH,
            max: MAX_LENGTH,
            required: true,
        }
    }
}

impl LengthRule {
    /// Check raw form input. An empty field is only accepted when the rule
    /// is not required, in which case `Ok(None)` is returned.
    pub fn check(&self, raw: &str) -> Result<Option<usize>, LengthError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return if self.required { Err(LengthError::Required) } else { Ok(None) };
        }

        let value = match raw.parse::<i64>() {
            Ok(v) => v,
            Err(e) => {
                return Err(match e.kind() {
                    IntErrorKind::PosOverflow => LengthError::TooLong { max: self.max },
                    IntErrorKind::NegOverflow => LengthError::TooShort { min: self.min },
                    _ => LengthError::NotANumber,
                });
            }
        };

        if value < self.min as i64 {
            return Err(LengthError::TooShort { min: self.min });
        }
        if value > self.max as i64 {
            return Err(LengthError::TooLong { max: self.max });
        }
        Ok(Some(value as usize))
    }

    pub fn validate(&self, raw: &str) -> Result<usize, LengthError> {
        match self.check(raw)? {
            Some(length) => Ok(length),
            None => Err(LengthError::Required),
        }
    }
}

/// clap value parser for `--length`, reports the same messages as the form.
pub fn parse_length(raw: &str) -> Result<usize, LengthError> {
    LengthRule::default().validate(raw)
}
