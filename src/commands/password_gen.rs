use anyhow::{Context, Result, anyhow};
use serde::Serialize;

use crate::passgen::{self, CharClass, Options};
use crate::setclip::{self, ClipboardSink};

#[derive(Debug, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub length: usize,
    pub classes: Vec<CharClass>,
}

/// Generate one password from command-line options and return the text to
/// print, plain or as JSON.
pub fn generate_once<C: ClipboardSink + ?Sized>(
    options: Options,
    length: usize,
    seed: Option<u64>,
    json: bool,
    clipboard: Option<&mut C>,
) -> Result<String> {
    let mut rng = passgen::password_rng(seed);
    let password = passgen::generate_password(&options, length, rng.as_mut())?;

    if let Some(sink) = clipboard {
        setclip::copy_to_clipboard(sink, &password)
            .map_err(|e| anyhow!("Failed to copy password: {}", e))?;
    }

    if json {
        let result = GeneratedPassword {
            length: password.chars().count(),
            classes: options.selected(),
            password,
        };
        serde_json::to_string_pretty(&result).context("Failed to serialize password")
    } else {
        Ok(password)
    }
}
