use std::io::{BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use rand::RngCore;

use crate::formstate::{FormState, SubmitOutcome};
use crate::passgen::CharClass;
use crate::setclip::{self, ClipboardSink};

const ACTIONS: &str =
    "Actions: l <n> set length | 1-4 toggle | g Generate Password | r Reset | c copy | q quit";

/// One user intent read from the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    SetLength(String),
    Toggle(CharClass),
    Generate,
    Reset,
    Copy,
    Quit,
    Unknown(String),
}

impl FormAction {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (cmd, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };
        match cmd.to_lowercase().as_str() {
            "l" | "length" => FormAction::SetLength(rest.to_string()),
            "1" => FormAction::Toggle(CharClass::Lowercase),
            "2" => FormAction::Toggle(CharClass::Uppercase),
            "3" => FormAction::Toggle(CharClass::Numbers),
            "4" => FormAction::Toggle(CharClass::Symbols),
            "g" | "generate" => FormAction::Generate,
            "r" | "reset" => FormAction::Reset,
            "c" | "copy" => FormAction::Copy,
            "q" | "quit" | "exit" => FormAction::Quit,
            _ => FormAction::Unknown(line.to_string()),
        }
    }
}

/// The terminal view over a `FormState`.
pub struct FormSession<'a, C: ClipboardSink + ?Sized> {
    pub state: FormState,
    rng: &'a mut dyn RngCore,
    clipboard: &'a mut C,
    notice: Option<String>,
}

impl<'a, C: ClipboardSink + ?Sized> FormSession<'a, C> {
    pub fn new(rng: &'a mut dyn RngCore, clipboard: &'a mut C) -> Self {
        Self {
            state: FormState::new(),
            rng,
            clipboard,
            notice: None,
        }
    }

    /// Apply one action. Returns false once the user asked to quit.
    pub fn handle(&mut self, action: FormAction, now: Instant) -> bool {
        self.notice = None;
        self.state.poll_alert(now);
        match action {
            FormAction::SetLength(raw) => self.state.set_length_input(raw),
            FormAction::Toggle(class) => self.state.toggle(class),
            FormAction::Generate => {
                if let SubmitOutcome::Generated(_) = self.state.submit(&mut *self.rng, now) {
                    self.notice = Some("Password generated".to_string());
                }
            }
            FormAction::Reset => self.state.reset(),
            FormAction::Copy => {
                let copied =
                    setclip::copy_to_clipboard(&mut *self.clipboard, self.state.generated());
                let notice = match copied {
                    Ok(()) => "Copied to clipboard".to_string(),
                    Err(e) => {
                        tracing::warn!(error = %e, "clipboard copy failed");
                        format!("Copy failed: {}", e)
                    }
                };
                self.notice = Some(notice);
            }
            FormAction::Quit => return false,
            FormAction::Unknown(input) => {
                self.notice = Some(format!("Unknown action: {}", input));
            }
        }
        true
    }

    pub fn render<W: Write>(&mut self, out: &mut W, now: Instant) -> Result<()> {
        self.state.poll_alert(now);
        let state = &self.state;

        writeln!(out)?;
        writeln!(out, "==== RPawoGen ====")?;
        writeln!(out, "Password length: {}", state.length_input)?;
        if let Some(e) = state.length_error() {
            writeln!(out, "  {}", e)?;
        }
        for (i, class) in CharClass::ALL.iter().enumerate() {
            let mark = if state.options.is_enabled(*class) { "x" } else { " " };
            writeln!(out, "[{}] {}. {}", mark, i + 1, class.label())?;
        }
        if state.alert().is_visible() {
            writeln!(out, "! {}", state.alert().message())?;
        }
        if state.has_result() {
            writeln!(out, "Generated password: {}", state.generated())?;
        }
        if let Some(notice) = &self.notice {
            writeln!(out, "{}", notice)?;
        }
        writeln!(out, "{}", ACTIONS)?;
        write!(out, "> ")?;
        out.flush()?;
        Ok(())
    }
}

/// Drive the form until the user quits or input ends.
pub fn run_form<R, W, C>(
    input: &mut R,
    output: &mut W,
    rng: &mut dyn RngCore,
    clipboard: &mut C,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    C: ClipboardSink + ?Sized,
{
    let mut session = FormSession::new(rng, clipboard);
    let mut line = String::new();
    loop {
        session.render(output, Instant::now()).context("Failed to render form")?;
        line.clear();
        let read = input.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            break;
        }
        if !session.handle(FormAction::parse(&line), Instant::now()) {
            break;
        }
    }
    writeln!(output)?;
    Ok(())
}
