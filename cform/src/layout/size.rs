use serde::{Deserialize, Serialize};

/// Control size shared by every field of a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FormSize {
    /// Control height in pixels.
    pub const fn control_height(self) -> u16 {
        match self {
            Self::Small => 24,
            Self::Medium => 32,
            Self::Large => 40,
        }
    }
}

/// Spacing between layout items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GutterSize {
    None,
    Small,
    #[default]
    Medium,
    Large,
}

impl GutterSize {
    /// Gap in pixels, applied both between items and between rows.
    pub const fn spacing(self) -> u16 {
        match self {
            Self::None => 0,
            Self::Small => 8,
            Self::Medium => 16,
            Self::Large => 24,
        }
    }
}
