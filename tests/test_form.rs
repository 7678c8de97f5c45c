use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rpawogen::alert::ALERT_DURATION;
use rpawogen::commands::form::{FormAction, FormSession, run_form};
use rpawogen::passgen::CharClass;
use rpawogen::setclip::ClipboardSink;
use std::io::Cursor;
use std::time::Instant;

// 测试用剪贴板，记录最后一次写入
#[derive(Default)]
struct MemoryClipboard {
    text: Option<String>,
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.text = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!(FormAction::parse("l 12\n"), FormAction::SetLength("12".to_string()));
        assert_eq!(FormAction::parse("length"), FormAction::SetLength(String::new()));
        assert_eq!(FormAction::parse("1"), FormAction::Toggle(CharClass::Lowercase));
        assert_eq!(FormAction::parse("4"), FormAction::Toggle(CharClass::Symbols));
        assert_eq!(FormAction::parse("G"), FormAction::Generate);
        assert_eq!(FormAction::parse("reset"), FormAction::Reset);
        assert_eq!(FormAction::parse("c"), FormAction::Copy);
        assert_eq!(FormAction::parse("q"), FormAction::Quit);
        assert_eq!(FormAction::parse("zz"), FormAction::Unknown("zz".to_string()));
    }

    #[test]
    fn test_session_render_shows_labels_and_result() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut clipboard = MemoryClipboard::default();
        let mut session = FormSession::new(&mut rng, &mut clipboard);
        let now = Instant::now();

        assert!(session.handle(FormAction::SetLength("6".to_string()), now));
        assert!(session.handle(FormAction::Toggle(CharClass::Numbers), now));
        assert!(session.handle(FormAction::Generate, now));
        let password = session.state.generated().to_string();
        assert_eq!(password.len(), 6);

        let mut out = Vec::new();
        session.render(&mut out, now).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[ ] 1. Include lowercase"));
        assert!(text.contains("[x] 3. Include numbers"));
        assert!(text.contains(&format!("Generated password: {}", password)));
        assert!(!text.contains("Please select"));
    }

    #[test]
    fn test_session_alert_banner_expires() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut clipboard = MemoryClipboard::default();
        let mut session = FormSession::new(&mut rng, &mut clipboard);
        let now = Instant::now();

        session.handle(FormAction::SetLength("10".to_string()), now);
        session.handle(FormAction::Generate, now);

        let mut out = Vec::new();
        session.render(&mut out, now).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("! Please select at least one option to generate password"));
        assert!(!text.contains("Generated password:"));

        let mut out = Vec::new();
        session.render(&mut out, now + ALERT_DURATION).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("Please select"));
    }

    #[test]
    fn test_session_copy() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut clipboard = MemoryClipboard::default();
        {
            let mut session = FormSession::new(&mut rng, &mut clipboard);
            let now = Instant::now();
            session.handle(FormAction::Copy, now);
            session.handle(FormAction::SetLength("9".to_string()), now);
            session.handle(FormAction::Toggle(CharClass::Uppercase), now);
            session.handle(FormAction::Generate, now);
            session.handle(FormAction::Copy, now);
            assert_eq!(session.state.generated().len(), 9);
        }
        let copied = clipboard.text.expect("password should be copied");
        assert_eq!(copied.len(), 9);
        assert!(copied.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn test_run_form_scripted_session() {
        let script = "l 3\ng\nl 8\n3\n4\ng\nr\nq\n";
        let mut input = Cursor::new(script.as_bytes());
        let mut output = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut clipboard = MemoryClipboard::default();

        run_form(&mut input, &mut output, &mut rng, &mut clipboard).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("A password should be at least 4."));
        assert!(text.contains("[x] 4. Include symbols"));
        assert!(text.contains("Password generated"));
        // Reset leaves the length field alone
        let last_frame = text.rsplit("==== RPawoGen ====").next().unwrap();
        assert!(last_frame.contains("Password length: 8"));
        assert!(last_frame.contains("[ ] 3. Include numbers"));
        assert!(!last_frame.contains("Generated password:"));
    }

    #[test]
    fn test_run_form_stops_at_end_of_input() {
        let mut input = Cursor::new("1\n".as_bytes());
        let mut output = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut clipboard = MemoryClipboard::default();
        run_form(&mut input, &mut output, &mut rng, &mut clipboard).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("[x] 1. Include lowercase"));
    }

    #[test]
    fn test_run_form_corrected_length_clears_error() {
        let mut input = Cursor::new("l 3\ng\nl 8\nq\n".as_bytes());
        let mut output = Vec::new();
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut clipboard = MemoryClipboard::default();

        run_form(&mut input, &mut output, &mut rng, &mut clipboard).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("A password should be at least 4."));
        let last_frame = text.rsplit("==== RPawoGen ====").next().unwrap();
        assert!(last_frame.contains("Password length: 8"));
        assert!(!last_frame.contains("A password should be at least 4."));
    }
}
