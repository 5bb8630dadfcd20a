// UI layer: the interactive menu loop. It owns the selection set and
// talks to the console, the file picker and the message catalog only
// through their traits, so the whole flow can be driven by test doubles.

use crate::console::{Console, Tone};
use crate::i18n::{Localizer, Message};
use crate::picker::FilePicker;
use crate::selection::{AddReport, SelectionSet};
use crate::tokenizer::tokenize;
use crate::uri::{render, OutputMode};
use crate::validator::{FileValidator, ImageFileValidator};

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    MainMenu,
    Output,
}

/// Result of one main-menu round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Back to the main menu.
    Stay,
    /// The user finished with a non-empty selection.
    Finish,
}

/// One interactive run of the tool.
pub struct Session<C, P, L, V = ImageFileValidator>
where
    C: Console,
    P: FilePicker,
    L: Localizer,
    V: FileValidator,
{
    console: C,
    picker: P,
    messages: L,
    selection: SelectionSet<V>,
    state: State,
}

impl<C, P, L> Session<C, P, L>
where
    C: Console,
    P: FilePicker,
    L: Localizer,
{
    pub fn new(console: C, picker: P, messages: L) -> Self {
        Self::with_selection(console, picker, messages, SelectionSet::new())
    }
}

impl<C, P, L, V> Session<C, P, L, V>
where
    C: Console,
    P: FilePicker,
    L: Localizer,
    V: FileValidator,
{
    pub fn with_selection(console: C, picker: P, messages: L, selection: SelectionSet<V>) -> Self {
        Session {
            console,
            picker,
            messages,
            selection,
            state: State::MainMenu,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn selection(&self) -> &SelectionSet<V> {
        &self.selection
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Loop over the main menu until the user finishes, then print the
    /// selection and wait for a final key press.
    pub fn run(&mut self) {
        while self.step() == Transition::Stay {}
        self.output();
    }

    /// Show the main menu once and handle the chosen option.
    pub fn step(&mut self) -> Transition {
        self.console.clear();
        self.show_main_menu();

        let choice = self.console.read_key();
        log::debug!("main menu choice {choice:?}");
        match choice {
            '1' => self.add_from_dialog(),
            '2' => self.add_from_paste(),
            '3' if !self.selection.is_empty() => {
                self.state = State::Output;
                return Transition::Finish;
            }
            '3' => {
                self.error(Message::ErrorNoFilesSelected);
                self.console.read_key();
            }
            _ => {
                self.error(Message::ErrorInvalidOption);
                self.console.read_key();
            }
        }
        Transition::Stay
    }

    fn show_main_menu(&mut self) {
        let title = self.text(Message::TitleMain);
        self.console.write_line(&format!("=== {title} ==="));
        self.console.write_line("");
        self.line(Message::MenuSelectedCount(self.selection.len()));
        self.console.write_line("");
        self.line(Message::MenuOption1);
        self.line(Message::MenuOption2);
        self.line(Message::MenuOption3);
        self.console.write_line("");
        let prompt = self.text(Message::MenuPrompt);
        self.console.write(&prompt);
    }

    fn add_from_dialog(&mut self) {
        let picked = self.picker.pick_files();
        if picked.is_empty() {
            self.info(Message::AddNoSelection);
            return;
        }
        let report = self.selection.add(&picked);
        self.report(report, |added, skipped| Message::AddSuccess { added, skipped });
    }

    fn add_from_paste(&mut self) {
        self.console.write_line("");
        self.line(Message::PasteHint);
        self.line(Message::PasteQuoteHint);
        self.console.write_line("");
        let prompt = self.text(Message::PromptFilePath);
        let input = self.console.read_line(&prompt).unwrap_or_default();

        if input.trim().is_empty() {
            self.info(Message::PasteNoInput);
            self.console.read_key();
            return;
        }

        let candidates = tokenize(&input);
        let report = self.selection.add(&candidates);
        self.report(report, |added, skipped| Message::PasteAddSuccess { added, skipped });
    }

    fn report(&mut self, report: AddReport, success: impl FnOnce(usize, usize) -> Message) {
        if report.added > 0 {
            let text = self.text(success(report.added, report.skipped()));
            self.notify(Tone::Success, Message::Success(text));
        } else {
            self.error(Message::AddNoNew);
        }
    }

    fn output(&mut self) {
        self.state = State::Output;
        self.console.clear();
        let title = self.text(Message::OutputTitle);
        self.console.write_line(&format!("=== {title} ==="));
        self.console.write_line("");
        self.line(Message::OutputTotalCount(self.selection.len()));
        self.console.write_line("");
        self.line(Message::OutputFormatOption1);
        self.line(Message::OutputFormatOption2);
        self.console.write_line("");
        let prompt = self.text(Message::OutputFormatPrompt);
        self.console.write(&prompt);

        let mode = OutputMode::from_key(self.console.read_key());
        log::info!("printing {} path(s) as {mode:?}", self.selection.len());

        self.console.write_line("");
        self.console.write_line("");
        let rendered = render(self.selection.iter(), mode);
        if !rendered.is_empty() {
            self.console.write_line(&rendered);
        }

        self.console.write_line("");
        self.line(Message::ExitPrompt);
        self.console.read_key();
    }

    fn text(&self, message: Message) -> String {
        self.messages.localize(&message)
    }

    fn line(&mut self, message: Message) {
        let text = self.text(message);
        self.console.write_line(&text);
    }

    fn notify(&mut self, tone: Tone, wrapped: Message) {
        let text = self.text(wrapped);
        self.console.notify(tone, &text);
    }

    fn error(&mut self, message: Message) {
        let inner = self.text(message);
        self.notify(Tone::Error, Message::Error(inner));
    }

    fn info(&mut self, message: Message) {
        let inner = self.text(message);
        self.notify(Tone::Info, Message::Info(inner));
    }
}

/// Run the interactive tool with the given collaborators until the user
/// finishes and the paths have been printed.
pub fn main_menu<C, P, L>(console: C, picker: P, messages: L)
where
    C: Console,
    P: FilePicker,
    L: Localizer,
{
    Session::new(console, picker, messages).run();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Locale};
    use crate::testing::{FixedPicker, ScriptedConsole};

    struct AcceptAll;

    impl FileValidator for AcceptAll {
        fn is_valid(&self, _path: &str) -> bool {
            true
        }
    }

    fn session(
        console: ScriptedConsole,
        picker: FixedPicker,
    ) -> Session<ScriptedConsole, FixedPicker, Catalog, AcceptAll> {
        Session::with_selection(
            console,
            picker,
            Catalog::new(Locale::English),
            SelectionSet::with_validator(AcceptAll),
        )
    }

    #[test]
    fn starts_on_main_menu_with_empty_selection() {
        let s = session(ScriptedConsole::default(), FixedPicker::cancelled());
        assert_eq!(s.state(), State::MainMenu);
        assert!(s.selection().is_empty());
    }

    #[test]
    fn finish_with_empty_selection_stays() {
        let console = ScriptedConsole::new().keys("3x");
        let mut s = session(console, FixedPicker::cancelled());
        assert_eq!(s.step(), Transition::Stay);
        assert_eq!(s.state(), State::MainMenu);
        assert!(s.console().output().contains("No files selected yet"));
        assert!(!s.console().output().contains("file://"));
    }

    #[test]
    fn each_round_redraws_the_menu_once() {
        let console = ScriptedConsole::new().keys("9 9 ");
        let mut s = session(console, FixedPicker::cancelled());
        s.step();
        assert_eq!(s.console().clear_count(), 1);
        s.step();
        assert_eq!(s.console().clear_count(), 2);
        assert_eq!(s.console().output().matches("Files selected: 0").count(), 2);
    }

    #[test]
    fn invalid_key_reports_and_stays() {
        let console = ScriptedConsole::new().keys("9 ");
        let mut s = session(console, FixedPicker::cancelled());
        assert_eq!(s.step(), Transition::Stay);
        assert!(s.console().output().contains("Invalid option"));
    }

    #[test]
    fn missing_key_counts_as_invalid() {
        let mut s = session(ScriptedConsole::new(), FixedPicker::cancelled());
        assert_eq!(s.step(), Transition::Stay);
        assert!(s.console().output().contains("Invalid option"));
    }

    #[test]
    fn cancelled_dialog_reports_no_selection() {
        let console = ScriptedConsole::new().keys("1");
        let mut s = session(console, FixedPicker::cancelled());
        assert_eq!(s.step(), Transition::Stay);
        assert!(s.console().output().contains("No files were selected"));
    }

    #[test]
    fn dialog_paths_are_added_with_counts() {
        let console = ScriptedConsole::new().keys("11");
        let picker = FixedPicker::new(["/p/a.jpg", "/p/b.png", "/p/A.JPG"]);
        let mut s = session(console, picker);
        s.step();
        assert_eq!(s.selection().len(), 2);
        assert!(s.console().output().contains("Added 2 file(s), skipped 1"));

        s.step();
        assert_eq!(s.selection().len(), 2);
        assert!(s.console().output().contains("No new valid files"));
    }

    #[test]
    fn blank_paste_reports_no_input() {
        let console = ScriptedConsole::new().keys("2 ").lines(["   "]);
        let mut s = session(console, FixedPicker::cancelled());
        assert_eq!(s.step(), Transition::Stay);
        assert!(s.console().output().contains("No input received"));
        assert!(s.selection().is_empty());
    }

    #[test]
    fn closed_input_during_paste_counts_as_blank() {
        let console = ScriptedConsole::new().keys("2");
        let mut s = session(console, FixedPicker::cancelled());
        s.step();
        assert!(s.console().output().contains("No input received"));
    }

    #[cfg(unix)]
    #[test]
    fn paste_then_finish_prints_comma_list() {
        let console = ScriptedConsole::new()
            .keys("232\n")
            .lines(["/x/one.jpg;\"/x/two words.png\""]);
        let mut s = session(console, FixedPicker::cancelled());
        s.run();
        assert_eq!(s.state(), State::Output);
        let out = s.console().output();
        assert!(out.contains("file:///x/one.jpg, file:///x/two%20words.png"));
        assert!(out.contains("Press any key to exit"));
    }

    #[test]
    fn chinese_catalog_is_used() {
        let console = ScriptedConsole::new().keys("3 ");
        let mut s = Session::with_selection(
            console,
            FixedPicker::cancelled(),
            Catalog::new(Locale::Chinese),
            SelectionSet::with_validator(AcceptAll),
        );
        s.step();
        assert!(s.console().output().contains("尚未选择任何文件"));
    }
}
