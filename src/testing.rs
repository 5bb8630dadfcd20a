//! Test doubles for the console and file-picker collaborators.
//!
//! Useful for driving a `Session` without a terminal or a desktop.

use crate::console::{Console, Tone, NO_KEY};
use crate::picker::FilePicker;
use std::collections::VecDeque;

/// Console that replays scripted keys and lines and records everything
/// written to it.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    keys: VecDeque<char>,
    lines: VecDeque<String>,
    output: String,
    clears: usize,
}

impl ScriptedConsole {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue each character of `keys` as one key press.
    #[must_use]
    pub fn keys(mut self, keys: &str) -> Self {
        self.keys.extend(keys.chars());
        self
    }

    /// Queue lines returned by `read_line`.
    #[must_use]
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Everything written so far, status lines included.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }
}

impl Console for ScriptedConsole {
    fn read_key(&mut self) -> char {
        self.keys.pop_front().unwrap_or(NO_KEY)
    }

    fn read_line(&mut self, prompt: &str) -> Option<String> {
        self.output.push_str(prompt);
        self.lines.pop_front()
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn write_line(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn notify(&mut self, _tone: Tone, text: &str) {
        self.output.push('\n');
        self.write_line(text);
    }
}

/// Picker that returns the same paths every time it is opened.
#[derive(Debug, Default, Clone)]
pub struct FixedPicker {
    paths: Vec<String>,
    opened: usize,
}

impl FixedPicker {
    #[must_use]
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FixedPicker {
            paths: paths.into_iter().map(Into::into).collect(),
            opened: 0,
        }
    }

    /// A picker whose dialog is always cancelled.
    #[must_use]
    pub fn cancelled() -> Self {
        Self::default()
    }

    pub fn times_opened(&self) -> usize {
        self.opened
    }
}

impl FilePicker for FixedPicker {
    fn pick_files(&mut self) -> Vec<String> {
        self.opened += 1;
        self.paths.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_console_replays_then_runs_dry() {
        let mut console = ScriptedConsole::new().keys("12").lines(["a b"]);
        assert_eq!(console.read_key(), '1');
        assert_eq!(console.read_line("> ").as_deref(), Some("a b"));
        assert_eq!(console.read_key(), '2');
        assert_eq!(console.read_key(), NO_KEY);
        assert_eq!(console.read_line("> "), None);
        assert_eq!(console.output(), "> > ");
    }

    #[test]
    fn fixed_picker_counts_openings() {
        let mut picker = FixedPicker::new(["/a.png"]);
        assert_eq!(picker.pick_files(), vec!["/a.png".to_string()]);
        assert_eq!(picker.times_opened(), 1);
        assert!(FixedPicker::cancelled().pick_files().is_empty());
    }
}
