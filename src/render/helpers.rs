use std::time::Duration;

/// Formatting operations available to renderers.
///
/// Renderers receive an implementation by reference; the set of operations is
/// closed and nothing is looked up by name at render time.
pub trait ViewHelpers {
    /// Human-readable duration, e.g. `1h 30m`.
    fn duration(&self, duration: Duration) -> String;

    /// Uppercase the first character, leave the rest alone.
    fn title(&self, text: &str) -> String;
}

/// Default helpers used by the CLI renderers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardHelpers;

impl ViewHelpers for StandardHelpers {
    fn duration(&self, duration: Duration) -> String {
        // Sub-millisecond noise only clutters a table
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        if millis == 0 {
            return "0s".to_string();
        }
        humantime::format_duration(Duration::from_millis(millis)).to_string()
    }

    fn title(&self, text: &str) -> String {
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}
