//  ____  ____     __        __     ____
// |  _ \|  _ \ __ \ \      / /__  / ___| ___ _ __
// | |_) | |_) / _` \ \ /\ / / _ \| |  _ / _ \ '_ \
// |  _ <|  __/ (_| |\ V  V / (_) | |_| |  __/ | | |
// |_| \_\_|   \__,_| \_/\_/ \___/ \____|\___|_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-14
// Version : 0.1.0
// License : Mulan PSL v2
//
// Clipboard handler

use arboard::Clipboard;

/// Somewhere a generated password can be copied to.
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>>;
}

/// The system clipboard.
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        let mut ctx = Clipboard::new()?;
        ctx.set_text(text)?;
        Ok(())
    }
}

pub fn copy_to_clipboard<C: ClipboardSink + ?Sized>(
    sink: &mut C,
    secret: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if secret.is_empty() {
        return Err("Nothing to copy, generate a password first".into());
    }
    sink.set_text(secret)?;
    tracing::info!(length = secret.chars().count(), "password copied to clipboard");
    Ok(())
}
