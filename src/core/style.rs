//! Per-severity display styles

use super::color::Color;
use super::severity::Severity;
use serde::{Deserialize, Serialize};

/// The display style for one severity: a color and a prefix label.
///
/// The label is only rendered when label-prepending is resolved on for a
/// call. Any string is valid, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityStyle {
    pub color: Color,
    pub label: String,
}

impl SeverityStyle {
    #[must_use]
    pub fn new(color: Color, label: impl Into<String>) -> Self {
        Self {
            color,
            label: label.into(),
        }
    }
}

/// One style per severity, owned by a logger instance.
///
/// Styles are mutable at any time and read at format-resolution time;
/// the last write before a submit wins.
///
/// # Example
///
/// ```
/// use logpane::{Color, Severity, StyleMap};
///
/// let mut styles = StyleMap::default();
/// styles.get_mut(Severity::Error).label = "[FAIL]".to_string();
/// styles.get_mut(Severity::Custom).color = Color::rgb(255, 0, 255);
/// assert_eq!(styles.get(Severity::Error).label, "[FAIL]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleMap {
    debug: SeverityStyle,
    info: SeverityStyle,
    warning: SeverityStyle,
    error: SeverityStyle,
    custom: SeverityStyle,
}

impl Default for StyleMap {
    fn default() -> Self {
        Self {
            debug: SeverityStyle::new(Color::MEDIUM_BLUE, "[Debug]"),
            info: SeverityStyle::new(Color::BLUE, "[Info]"),
            warning: SeverityStyle::new(Color::GOLDENROD, "[Warning]"),
            error: SeverityStyle::new(Color::DARK_RED, "[Error]"),
            custom: SeverityStyle::new(Color::LIME_GREEN, ""),
        }
    }
}

impl StyleMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, severity: Severity) -> &SeverityStyle {
        match severity {
            Severity::DebugLog => &self.debug,
            Severity::Info => &self.info,
            Severity::Warning => &self.warning,
            Severity::Error => &self.error,
            Severity::Custom => &self.custom,
        }
    }

    pub fn get_mut(&mut self, severity: Severity) -> &mut SeverityStyle {
        match severity {
            Severity::DebugLog => &mut self.debug,
            Severity::Info => &mut self.info,
            Severity::Warning => &mut self.warning,
            Severity::Error => &mut self.error,
            Severity::Custom => &mut self.custom,
        }
    }

    /// Replace the style for one severity wholesale.
    pub fn set(&mut self, severity: Severity, style: SeverityStyle) {
        *self.get_mut(severity) = style;
    }
}
