//! Label placement for label/control pairs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormError;

/// Flex direction of a label and its control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelDirection {
    /// Label to the left of the control.
    #[default]
    Row,
    /// Label above the control.
    Column,
}

/// Text alignment of labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Width of the label column.
///
/// Parsed from the CSS-like strings form authors are used to writing:
/// `"100px"`, `"30%"` or `"auto"`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LabelWidth {
    Px(u16),
    Percent(f32),
    Auto,
}

impl LabelWidth {
    pub const fn px(px: u16) -> Self {
        Self::Px(px)
    }
}

impl Default for LabelWidth {
    fn default() -> Self {
        Self::Px(100)
    }
}

impl FromStr for LabelWidth {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || FormError::InvalidLabelWidth(s.to_string());

        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        if let Some(num) = trimmed.strip_suffix("px") {
            return num.trim().parse().map(Self::Px).map_err(|_| invalid());
        }
        if let Some(num) = trimmed.strip_suffix('%') {
            let pct: f32 = num.trim().parse().map_err(|_| invalid())?;
            if !(0.0..=100.0).contains(&pct) {
                return Err(invalid());
            }
            return Ok(Self::Percent(pct));
        }
        // A bare number is taken as pixels.
        trimmed.parse().map(Self::Px).map_err(|_| invalid())
    }
}

impl TryFrom<String> for LabelWidth {
    type Error = FormError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LabelWidth> for String {
    fn from(width: LabelWidth) -> Self {
        width.to_string()
    }
}

impl fmt::Display for LabelWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(px) => write!(f, "{}px", px),
            Self::Percent(pct) => write!(f, "{}%", pct),
            Self::Auto => write!(f, "auto"),
        }
    }
}
