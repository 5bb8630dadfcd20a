// Entrypoint for the CLI application.
// - Keeps `main` small: read configuration, build the collaborators and
//   hand them to the UI loop.
// - Returns `anyhow::Result` so a normal finish exits with status 0.

use picpath::config::Config;
use picpath::console::TerminalConsole;
use picpath::i18n::{Catalog, Localizer, Message};
use picpath::picker::DialogPicker;
use picpath::ui::main_menu;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries the menu and the URIs.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Language and dialog directory come from `PICPATH_LANG` /
    // `PICPATH_START_DIR` or the system defaults. See `Config::from_env`.
    let config = Config::from_env();
    let messages = Catalog::new(config.locale);

    let picker = DialogPicker::new(messages.localize(&Message::DialogTitle))
        .with_filter_labels(
            messages.localize(&Message::DialogFilterImages),
            messages.localize(&Message::DialogFilterAll),
        )
        .with_start_dir(config.start_dir);

    // Blocks until the user finishes and the paths have been printed.
    main_menu(TerminalConsole::new(), picker, messages);
    Ok(())
}
