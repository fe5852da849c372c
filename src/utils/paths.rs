use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Formats a path with ~ substitution for the home directory
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use snapraid_history::format_path_with_tilde;
///
/// let path = PathBuf::from("/home/alice/snapraid/output");
/// // Returns "~/snapraid/output" if the home directory is /home/alice
/// let formatted = format_path_with_tilde(&path);
/// ```
pub fn format_path_with_tilde(path: &Path) -> String {
    format_path_with_tilde_internal(path, dirs::home_dir())
}

/// Internal helper for path formatting with an explicit home (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<PathBuf>) -> String {
    if let Some(home) = home
        && !home.as_os_str().is_empty()
        && let Ok(rest) = path.strip_prefix(&home)
    {
        if rest.as_os_str().is_empty() {
            return "~".to_string();
        }
        return format!("~/{}", rest.display());
    }

    // Avoid double allocation when converting Cow to String
    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
