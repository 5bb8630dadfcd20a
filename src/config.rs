// Runtime configuration read from the environment.

use crate::i18n::Locale;
use std::path::PathBuf;

/// Overrides the detected display language (e.g. `zh-CN`, `en`).
pub const LANG_VAR: &str = "PICPATH_LANG";
/// Overrides the directory the file dialog opens in.
pub const START_DIR_VAR: &str = "PICPATH_START_DIR";

const SYSTEM_LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub locale: Locale,
    pub start_dir: Option<PathBuf>,
}

impl Config {
    /// Build the configuration from `PICPATH_LANG` / the system locale
    /// variables and `PICPATH_START_DIR`, falling back to the user's
    /// pictures directory.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let locale = std::iter::once(LANG_VAR)
            .chain(SYSTEM_LOCALE_VARS)
            .find_map(|name| non_empty(name))
            .map(|tag| Locale::from_tag(&tag))
            .unwrap_or_default();

        let start_dir = non_empty(START_DIR_VAR)
            .map(PathBuf::from)
            .or_else(dirs::picture_dir);

        let config = Config { locale, start_dir };
        log::debug!("configuration: {config:?}");
        config
    }
}
