use crate::risk::RiskLevel;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    pub fn from_env() -> Self {
        let mut config = Self::default();

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// No colors at all
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }
}

/// Align the `colored` crate's global switch with the chosen mode.
pub fn apply_color_override(config: FormattingConfig) {
    match config.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => colored::control::unset_override(),
    }
}

/// Applies colors only when the configuration allows them.
#[derive(Debug, Clone, Copy)]
pub struct ColoredFormatter {
    enabled: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        Self {
            enabled: config.color.should_use_color(),
        }
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.enabled {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    /// HIGH in red, MEDIUM in yellow, LOW in green.
    pub fn risk(&self, level: RiskLevel) -> String {
        match level {
            RiskLevel::High => self.error(level.as_str()),
            RiskLevel::Medium => self.warning(level.as_str()),
            RiskLevel::Low => self.success(level.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_parse() {
        assert_eq!(ColorMode::parse("ALWAYS"), Some(ColorMode::Always));
        assert_eq!(ColorMode::parse("sometimes"), None);
    }

    #[test]
    fn test_plain_formatter_leaves_text_untouched() {
        let formatter = ColoredFormatter::new(FormattingConfig::plain());
        assert_eq!(formatter.risk(RiskLevel::High), "HIGH");
        assert_eq!(formatter.header("Summary"), "Summary");
    }

    #[test]
    fn test_forced_color_adds_escape_codes() {
        colored::control::set_override(true);
        let formatter = ColoredFormatter::new(FormattingConfig::new(ColorMode::Always));
        assert!(formatter.risk(RiskLevel::Low).contains("\u{1b}["));
        colored::control::unset_override();
    }
}
