// Console collaborator: key/line input, screen clearing and colored
// status lines. The terminal implementation never returns errors; a
// broken or redirected console degrades to empty input and plain output.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{cursor, execute};
use dialoguer::console::Term;
use dialoguer::theme::SimpleTheme;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

/// Key returned when no key could be read.
pub const NO_KEY: char = '\0';

const SEPARATOR_WIDTH: usize = 50;

/// Color of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
    Info,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Tone::Success => Color::Green,
            Tone::Error => Color::Red,
            Tone::Info => Color::Cyan,
        }
    }
}

/// Everything the session needs from the console.
pub trait Console {
    /// Read a single key. Returns `NO_KEY` when nothing could be read.
    fn read_key(&mut self) -> char;
    /// Show `prompt` and read one line. `None` when input is closed or broken.
    fn read_line(&mut self, prompt: &str) -> Option<String>;
    fn clear(&mut self);
    fn write(&mut self, text: &str);
    fn write_line(&mut self, text: &str);
    /// Print a blank line followed by `text` in the tone's color.
    fn notify(&mut self, tone: Tone, text: &str);
}

/// Real stdin/stdout console backed by crossterm and dialoguer.
#[derive(Debug, Default)]
pub struct TerminalConsole {
    input_closed: bool,
}

/// What a raw key event means to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Key(char),
    /// Ctrl-C: raw mode swallows SIGINT, so it arrives as a key.
    Interrupt,
}

/// Exit status used when the user interrupts a prompt (128 + SIGINT).
pub const INTERRUPT_EXIT_CODE: i32 = 130;

/// Translate a crossterm key event into a menu key.
pub fn key_press(key: &KeyEvent) -> KeyPress {
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyPress::Interrupt
        }
        KeyCode::Char(c) => KeyPress::Key(c),
        KeyCode::Enter => KeyPress::Key('\r'),
        KeyCode::Tab => KeyPress::Key('\t'),
        KeyCode::Esc => KeyPress::Key('\u{1b}'),
        _ => KeyPress::Key(NO_KEY),
    }
}

/// Read one line from `reader` without its line ending. `None` at end of input.
pub fn line_from<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Key for redirected input: the first character of the next line, or
/// `NO_KEY` for an empty line or end of input.
pub fn key_from_line<R: BufRead>(reader: &mut R) -> io::Result<char> {
    Ok(line_from(reader)?
        .and_then(|line| line.chars().next())
        .unwrap_or(NO_KEY))
}

/// Write `text` (plus a newline when asked) and flush. Failures such as a
/// closed pipe are logged and otherwise ignored.
pub fn emit<W: Write>(out: &mut W, text: &str, newline: bool) {
    let result = if newline {
        writeln!(out, "{text}")
    } else {
        write!(out, "{text}")
    }
    .and_then(|()| out.flush());
    if let Err(e) = result {
        log::debug!("console output unavailable: {e}");
    }
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_raw_key() -> io::Result<char> {
        terminal::enable_raw_mode()?;
        let press = loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => break Ok(key_press(&key)),
                Ok(_) => continue,
                Err(e) => break Err(e),
            }
        };
        terminal::disable_raw_mode()?;
        match press? {
            KeyPress::Key(c) => Ok(c),
            KeyPress::Interrupt => {
                log::info!("interrupted by user");
                emit(&mut io::stdout(), "", true);
                std::process::exit(INTERRUPT_EXIT_CODE);
            }
        }
    }

    fn read_redirected_key(&mut self) -> io::Result<char> {
        let mut stdin = io::stdin().lock();
        if stdin.fill_buf()?.is_empty() {
            if !self.input_closed {
                log::warn!("input is closed; every menu choice will read as invalid");
                self.input_closed = true;
            }
            return Ok(NO_KEY);
        }
        key_from_line(&mut stdin)
    }

    fn print_separator() {
        emit(&mut io::stdout(), &"=".repeat(SEPARATOR_WIDTH), true);
    }
}

impl Console for TerminalConsole {
    fn read_key(&mut self) -> char {
        let result = if io::stdin().is_terminal() {
            Self::read_raw_key()
        } else {
            self.read_redirected_key()
        };
        result.unwrap_or_else(|e| {
            log::debug!("key input unavailable: {e}");
            NO_KEY
        })
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        if io::stdin().is_terminal() && io::stdout().is_terminal() {
            // dialoguer renders its own ": " after the prompt
            let label = prompt.trim_end_matches([':', '：', ' ']);
            return match Input::<String>::with_theme(&SimpleTheme)
                .with_prompt(label)
                .allow_empty(true)
                .interact_text_on(&Term::stdout())
            {
                Ok(line) => Some(line),
                Err(e) => {
                    log::debug!("interactive line input failed: {e}");
                    None
                }
            };
        }
        self.write(prompt);
        line_from(&mut io::stdin().lock()).unwrap_or_else(|e| {
            log::debug!("line input unavailable: {e}");
            None
        })
    }

    fn clear(&mut self) {
        let mut stdout = io::stdout();
        if !stdout.is_terminal() || !io::stderr().is_terminal() {
            Self::print_separator();
            return;
        }
        if let Err(e) = execute!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0)) {
            log::debug!("cannot clear console: {e}");
            Self::print_separator();
        }
    }

    fn write(&mut self, text: &str) {
        emit(&mut io::stdout(), text, false);
    }

    fn write_line(&mut self, text: &str) {
        emit(&mut io::stdout(), text, true);
    }

    fn notify(&mut self, tone: Tone, text: &str) {
        let mut stdout = io::stdout();
        let colored = stdout.is_terminal();
        if colored {
            let _ = execute!(stdout, SetForegroundColor(tone.color()));
        }
        emit(&mut stdout, "", true);
        emit(&mut stdout, text, true);
        if colored {
            let _ = execute!(stdout, ResetColor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tones_map_to_colors() {
        assert_eq!(Tone::Success.color(), Color::Green);
        assert_eq!(Tone::Error.color(), Color::Red);
        assert_eq!(Tone::Info.color(), Color::Cyan);
    }

    #[test]
    fn redirected_key_is_first_char_of_line() {
        assert_eq!(key_from_line(&mut &b"3\n"[..]).unwrap(), '3');
        assert_eq!(key_from_line(&mut &b"12\n"[..]).unwrap(), '1');
        assert_eq!(key_from_line(&mut "照片\n".as_bytes()).unwrap(), '照');
    }

    #[test]
    fn empty_line_or_eof_is_no_key() {
        assert_eq!(key_from_line(&mut &b"\n"[..]).unwrap(), NO_KEY);
        assert_eq!(key_from_line(&mut &b"\r\n"[..]).unwrap(), NO_KEY);
        assert_eq!(key_from_line(&mut &b""[..]).unwrap(), NO_KEY);
    }

    #[test]
    fn keys_are_read_one_line_at_a_time() {
        let mut input = &b"2\r\n/tmp/a.jpg\n3"[..];
        assert_eq!(key_from_line(&mut input).unwrap(), '2');
        assert_eq!(line_from(&mut input).unwrap().as_deref(), Some("/tmp/a.jpg"));
        assert_eq!(key_from_line(&mut input).unwrap(), '3');
        assert_eq!(line_from(&mut input).unwrap(), None);
    }

    #[test]
    fn ctrl_c_interrupts() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_press(&ctrl_c), KeyPress::Interrupt);
        let plain_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(key_press(&plain_c), KeyPress::Key('c'));
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(key_press(&enter), KeyPress::Key('\r'));
        let arrow = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(key_press(&arrow), KeyPress::Key(NO_KEY));
    }

    /// Writer behaving like stdout after the reader closed the pipe.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn closed_output_does_not_panic() {
        emit(&mut ClosedPipe, "file:///tmp/a.jpg", true);
        emit(&mut ClosedPipe, "prompt: ", false);
    }

    #[test]
    fn emit_appends_newline_on_request() {
        let mut out = Vec::new();
        emit(&mut out, "a", false);
        emit(&mut out, "b", true);
        assert_eq!(out, b"ab\n");
    }
}
