//! ANSI color for text output.

/// Wraps strings in ANSI color codes when enabled.
#[derive(Debug, Clone, Copy)]
pub struct Paint {
    enabled: bool,
}

impl Paint {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn red(&self, s: &str) -> String {
        self.wrap("31", s)
    }

    pub fn green(&self, s: &str) -> String {
        self.wrap("32", s)
    }

    pub fn yellow(&self, s: &str) -> String {
        self.wrap("33", s)
    }

    pub fn cyan(&self, s: &str) -> String {
        self.wrap("36", s)
    }

    fn wrap(&self, code: &str, s: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, s)
        } else {
            s.to_string()
        }
    }
}

/// Whether the environment permits color.
///
/// A non-empty `NO_COLOR` value disables color, as does writing somewhere
/// other than a terminal.
pub fn color_allowed(no_color_env: Option<&str>, is_terminal: bool) -> bool {
    let no_color = no_color_env.is_some_and(|v| !v.is_empty());
    is_terminal && !no_color
}
