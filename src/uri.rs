// URI formatting: turns selected paths into `file://` URIs and renders
// them in one of the two output layouts.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// Why a path could not be expressed as a `file` URI.
#[derive(Debug, Error)]
pub enum UriError {
    #[error("path is empty")]
    Empty,

    #[error("cannot resolve {path:?} to an absolute path: {source}")]
    Resolve {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("{path:?} cannot be expressed as a file URI")]
    NotRepresentable { path: PathBuf },
}

/// Layout used when printing the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One URI per line.
    Newline,
    /// All URIs on one line separated by ", ".
    CommaList,
}

impl OutputMode {
    /// Map the format-menu key to a mode. Anything but '2' means newline.
    pub fn from_key(key: char) -> Self {
        match key {
            '2' => OutputMode::CommaList,
            _ => OutputMode::Newline,
        }
    }

    fn separator(self) -> &'static str {
        match self {
            OutputMode::Newline => "\n",
            OutputMode::CommaList => ", ",
        }
    }
}

/// Convert `path` to an absolute `file` URI, resolving relative paths
/// against the current directory first.
pub fn to_uri(path: &str) -> Result<String, UriError> {
    if path.trim().is_empty() {
        return Err(UriError::Empty);
    }
    let absolute = std::path::absolute(Path::new(path)).map_err(|source| UriError::Resolve {
        path: path.to_string(),
        source,
    })?;
    Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|()| UriError::NotRepresentable { path: absolute })
}

/// Render every convertible path in `mode`; unconvertible ones are left out.
pub fn render<I, S>(paths: I, mode: OutputMode) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .filter_map(|path| match to_uri(path.as_ref()) {
            Ok(uri) => Some(uri),
            Err(e) => {
                log::warn!("omitting {:?} from output: {}", path.as_ref(), e);
                None
            }
        })
        .collect::<Vec<_>>()
        .join(mode.separator())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn absolute_path_becomes_file_uri() {
        assert_eq!(to_uri("/tmp/a.jpg").unwrap(), "file:///tmp/a.jpg");
    }

    #[cfg(unix)]
    #[test]
    fn reserved_characters_are_percent_encoded() {
        let uri = to_uri("/tmp/my pic#1.png").unwrap();
        assert_eq!(uri, "file:///tmp/my%20pic%231.png");
    }

    #[cfg(unix)]
    #[test]
    fn decoded_uri_path_round_trips() {
        for original in ["/tmp/a.jpg", "/home/u/照片/海 边.webp", "/x/100%.png", "/a/b?c.gif"] {
            let uri = to_uri(original).unwrap();
            let decoded = Url::parse(&uri).unwrap().to_file_path().unwrap();
            assert_eq!(decoded, Path::new(original), "uri {uri}");
        }
    }

    #[test]
    fn relative_path_is_resolved() {
        let uri = to_uri("relative/pic.png").unwrap();
        let expected = std::env::current_dir().unwrap().join("relative/pic.png");
        let decoded = Url::parse(&uri).unwrap().to_file_path().unwrap();
        assert_eq!(decoded, expected);
    }

    #[test]
    fn empty_path_fails() {
        assert!(matches!(to_uri(""), Err(UriError::Empty)));
        assert!(matches!(to_uri("   "), Err(UriError::Empty)));
    }

    #[test]
    fn format_key_selects_mode() {
        assert_eq!(OutputMode::from_key('2'), OutputMode::CommaList);
        assert_eq!(OutputMode::from_key('1'), OutputMode::Newline);
        assert_eq!(OutputMode::from_key('\0'), OutputMode::Newline);
    }

    #[cfg(unix)]
    #[test]
    fn render_layouts_skip_failures() {
        let paths = ["/a/1.jpg", "", "/b/2.png"];
        assert_eq!(
            render(paths, OutputMode::Newline),
            "file:///a/1.jpg\nfile:///b/2.png"
        );
        assert_eq!(
            render(paths, OutputMode::CommaList),
            "file:///a/1.jpg, file:///b/2.png"
        );
    }

    #[test]
    fn render_of_nothing_is_empty() {
        assert_eq!(render(Vec::<String>::new(), OutputMode::CommaList), "");
    }
}
