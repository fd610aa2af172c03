//! Layout context shared by a form and its fields.

mod label;
mod size;

pub use label::{LabelAlign, LabelDirection, LabelWidth};
pub use size::{FormSize, GutterSize};

use crate::config::FormConfig;

/// Number of columns in the form grid.
pub const GRID_COLUMNS: u8 = 24;

/// Default column span of a field.
pub const DEFAULT_COL: u8 = 6;

/// Layout props as given on a form. Unset props fall back to `FormConfig`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutProps {
    pub size: Option<FormSize>,
    pub gutter_size: Option<GutterSize>,
    pub col: Option<u8>,
    pub label_direction: Option<LabelDirection>,
    pub label_width: Option<LabelWidth>,
    pub label_align: Option<LabelAlign>,
}

/// Fully resolved layout that descendants read from the form context.
#[derive(Debug, Clone, PartialEq)]
pub struct FormLayout {
    pub size: FormSize,
    pub gutter_size: GutterSize,
    pub col: u8,
    pub label_direction: LabelDirection,
    pub label_width: LabelWidth,
    pub label_align: LabelAlign,
}

impl Default for FormLayout {
    fn default() -> Self {
        Self::resolve(&LayoutProps::default(), &FormConfig::default())
    }
}

impl FormLayout {
    /// Resolve props against library defaults; a given prop always wins.
    pub fn resolve(props: &LayoutProps, config: &FormConfig) -> Self {
        Self {
            size: props.size.unwrap_or(config.size),
            gutter_size: props.gutter_size.unwrap_or(config.gutter_size),
            col: clamp_col(props.col.unwrap_or(config.col)),
            label_direction: props.label_direction.unwrap_or(config.label_direction),
            label_width: props.label_width.unwrap_or(config.label_width),
            label_align: props.label_align.unwrap_or(config.label_align),
        }
    }

    /// Column span for an item, honouring its own override.
    pub fn span_for(&self, item_col: Option<u8>) -> u8 {
        item_col.map(clamp_col).unwrap_or(self.col)
    }

    /// Width of a span as a percentage of the form's width.
    pub fn span_percent(&self, span: u8) -> f32 {
        f32::from(span) * 100.0 / f32::from(GRID_COLUMNS)
    }
}

/// Clamp a column span into `1..=GRID_COLUMNS`.
pub fn clamp_col(col: u8) -> u8 {
    let clamped = col.clamp(1, GRID_COLUMNS);
    if clamped != col {
        log::warn!(
            "column span {} outside 1..={}, using {}",
            col,
            GRID_COLUMNS,
            clamped
        );
    }
    clamped
}
