//! Layout properties for view nodes.

use crate::layout::LabelAlign;

/// Flex direction of a container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Children side by side.
    Row,
    /// Children stacked (default).
    #[default]
    Column,
}

/// Size specification
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Size {
    /// Fixed size in pixels
    Fixed(u16),
    /// Percentage of parent
    Percent(f32),
    /// Size to content
    #[default]
    Auto,
}

/// Layout properties for a node
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub direction: Direction,
    pub width: Size,
    pub height: Size,
    /// Gap between children
    pub gap: u16,
    /// Wrap children onto new lines when they overflow
    pub wrap: bool,
    /// Text alignment within the node
    pub align: LabelAlign,
}

impl Layout {
    pub fn row() -> Self {
        Self {
            direction: Direction::Row,
            ..Default::default()
        }
    }

    pub fn column() -> Self {
        Self {
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn wrap(mut self) -> Self {
        self.wrap = true;
        self
    }

    pub fn align(mut self, align: LabelAlign) -> Self {
        self.align = align;
        self
    }
}
