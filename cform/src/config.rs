//! Library-wide form defaults.

use serde::{Deserialize, Serialize};

use crate::error::FormError;
use crate::item::{ErrorPlacement, ValidateTrigger};
use crate::layout::{
    DEFAULT_COL, FormSize, GutterSize, LabelAlign, LabelDirection, LabelWidth,
};

/// Defaults a form inherits for every prop it does not set.
///
/// Applications usually build one of these at startup (or load it from a
/// settings file with [`FormConfig::from_json`]) and mount every form with
/// it, so all forms share the same size and spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    /// Control size.
    pub size: FormSize,

    /// Spacing between items.
    pub gutter_size: GutterSize,

    /// Default column span of an item on the 24-column grid.
    pub col: u8,

    pub label_direction: LabelDirection,

    pub label_width: LabelWidth,

    pub label_align: LabelAlign,

    /// When items validate themselves.
    pub trigger: ValidateTrigger,

    /// Where items show their error message.
    pub error_placement: ErrorPlacement,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            size: FormSize::default(),
            gutter_size: GutterSize::default(),
            col: DEFAULT_COL,
            label_direction: LabelDirection::default(),
            label_width: LabelWidth::default(),
            label_align: LabelAlign::default(),
            trigger: ValidateTrigger::default(),
            error_placement: ErrorPlacement::default(),
        }
    }
}

impl FormConfig {
    /// Create the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing keys keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, FormError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the default size.
    pub fn size(mut self, size: FormSize) -> Self {
        self.size = size;
        self
    }

    /// Set the default gutter.
    pub fn gutter_size(mut self, gutter: GutterSize) -> Self {
        self.gutter_size = gutter;
        self
    }

    /// Set the default column span.
    pub fn col(mut self, col: u8) -> Self {
        self.col = col;
        self
    }

    /// Set the default label direction.
    pub fn label_direction(mut self, direction: LabelDirection) -> Self {
        self.label_direction = direction;
        self
    }

    /// Set the default label width.
    pub fn label_width(mut self, width: LabelWidth) -> Self {
        self.label_width = width;
        self
    }

    /// Set the default label alignment.
    pub fn label_align(mut self, align: LabelAlign) -> Self {
        self.label_align = align;
        self
    }

    /// Set the default validation trigger.
    pub fn trigger(mut self, trigger: ValidateTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the default error placement.
    pub fn error_placement(mut self, placement: ErrorPlacement) -> Self {
        self.error_placement = placement;
        self
    }
}
