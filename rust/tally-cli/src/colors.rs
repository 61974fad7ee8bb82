//! ANSI color helpers for CLI output.

/// Applies ANSI styling, or passes text through when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, code: &str, s: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, s)
        } else {
            s.to_string()
        }
    }

    /// Format text in green.
    pub fn green(&self, s: &str) -> String {
        self.paint("32", s)
    }

    /// Format text in red.
    pub fn red(&self, s: &str) -> String {
        self.paint("31", s)
    }

    /// Format text in cyan.
    pub fn cyan(&self, s: &str) -> String {
        self.paint("36", s)
    }

    /// Format text in bold.
    pub fn bold(&self, s: &str) -> String {
        self.paint("1", s)
    }

    /// Format text in gray.
    pub fn gray(&self, s: &str) -> String {
        self.paint("90", s)
    }
}
