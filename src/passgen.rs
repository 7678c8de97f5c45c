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
// Password generator

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use thiserror::Error;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()_+=";

pub const NO_OPTION_MESSAGE: &str = "Please select at least one option to generate password";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("{}", NO_OPTION_MESSAGE)]
    NoOptionSelected,
}

// 字符类别，顺序即字符池拼接顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Numbers,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Numbers,
        CharClass::Symbols,
    ];

    pub fn charset(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Numbers => NUMBERS,
            CharClass::Symbols => SYMBOLS,
        }
    }

    /// Key of the option as the form knows it.
    pub fn key(self) -> &'static str {
        match self {
            CharClass::Lowercase => "includeLowercase",
            CharClass::Uppercase => "includeUppercase",
            CharClass::Numbers => "includeNumbers",
            CharClass::Symbols => "includeSymbols",
        }
    }

    pub fn label(self) -> String {
        label_from_key(self.key())
    }
}

/// Turn a camelCase option key into a checkbox label,
/// e.g. `includeLowercase` -> `Include lowercase`.
pub fn label_from_key(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i == 0 {
            label.push(c.to_ascii_uppercase());
        } else if c.is_ascii_uppercase() {
            label.push(' ');
            label.push(c.to_ascii_lowercase());
        } else {
            label.push(c);
        }
    }
    label
}

// 四个字符类别开关，默认全部关闭
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    pub include_lowercase: bool,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Options {
    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Lowercase => self.include_lowercase,
            CharClass::Uppercase => self.include_uppercase,
            CharClass::Numbers => self.include_numbers,
            CharClass::Symbols => self.include_symbols,
        }
    }

    pub fn set(&mut self, class: CharClass, enabled: bool) {
        let flag = match class {
            CharClass::Lowercase => &mut self.include_lowercase,
            CharClass::Uppercase => &mut self.include_uppercase,
            CharClass::Numbers => &mut self.include_numbers,
            CharClass::Symbols => &mut self.include_symbols,
        };
        *flag = enabled;
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.set(class, !self.is_enabled(class));
    }

    pub fn any(&self) -> bool {
        CharClass::ALL.iter().any(|c| self.is_enabled(*c))
    }

    pub fn selected(&self) -> Vec<CharClass> {
        CharClass::ALL.into_iter().filter(|c| self.is_enabled(*c)).collect()
    }
}

/// Concatenate the selected character sets in fixed class order.
pub fn build_pool(options: &Options) -> Vec<char> {
    let pool: Vec<char> = options
        .selected()
        .into_iter()
        .flat_map(|class| class.charset().chars())
        .collect();
    tracing::debug!(size = pool.len(), "built character pool");
    pool
}

/// Draw `length` characters uniformly, with replacement, from the pool of
/// selected classes. No class is guaranteed to appear.
pub fn generate_password<R: Rng + ?Sized>(
    options: &Options,
    length: usize,
    rng: &mut R,
) -> Result<String, GenerateError> {
    if !options.any() {
        tracing::warn!("generation refused, no character class selected");
        return Err(GenerateError::NoOptionSelected);
    }

    let pool = build_pool(options);
    let password: String = (0..length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect();

    tracing::info!(length, pool = pool.len(), "generated password");
    Ok(password)
}

/// Random source used by the form and the `gen` command. Without a seed this
/// is a general purpose, non-cryptographic generator.
pub fn password_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(ChaCha8Rng::seed_from_u64(seed)),
        None => Box::new(SmallRng::from_entropy()),
    }
}
