// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires the real collaborators together and starts the loop.
//
// Module responsibilities:
// - `tokenizer`: splits pasted text into candidate paths.
// - `validator`: existence + image-extension check for a candidate.
// - `selection`: ordered, case-insensitively deduplicated path set.
// - `uri`: path to `file://` URI conversion and the two output layouts.
// - `i18n`: localized message catalog (English, Chinese).
// - `console` / `picker`: terminal and native-dialog collaborators.
// - `config`: environment-driven settings.
// - `ui`: the interactive menu state machine.
// - `testing`: scripted collaborators for driving the UI in tests.
pub mod config;
pub mod console;
pub mod i18n;
pub mod picker;
pub mod selection;
pub mod testing;
pub mod tokenizer;
pub mod ui;
pub mod uri;
pub mod validator;
