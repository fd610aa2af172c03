//! Plain-text rendering of a view tree, for logs, demos and snapshots.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::{Direction, Layout, Node, Size};
use crate::layout::LabelAlign;

/// Pixels per character cell when mapping fixed widths to text.
pub const PX_PER_CELL: u16 = 8;

/// Render `node` to text, one line per row of output.
pub fn to_plain(node: &Node) -> String {
    render(node).join("\n")
}

fn render(node: &Node) -> Vec<String> {
    match node {
        Node::Empty => Vec::new(),
        Node::Text {
            content, layout, ..
        } => vec![fit(content, layout)],
        Node::Control {
            value,
            invalid,
            layout,
            ..
        } => {
            let marker = if *invalid { "!" } else { "" };
            vec![fit(&format!("[{}]{}", value, marker), layout)]
        }
        Node::Container { children, layout } => {
            let lines: Vec<String> = match layout.direction {
                Direction::Column => children.iter().flat_map(render).collect(),
                Direction::Row if layout.wrap => wrap_rows(children)
                    .into_iter()
                    .flat_map(|line| beside(&line, layout.gap))
                    .collect(),
                Direction::Row => beside(&children.iter().collect::<Vec<_>>(), layout.gap),
            };
            lines.iter().map(|line| fit(line, layout)).collect()
        }
    }
}

/// Split children into grid lines whose percentage widths fit in 100%.
fn wrap_rows(children: &[Node]) -> Vec<Vec<&Node>> {
    let mut lines: Vec<Vec<&Node>> = Vec::new();
    let mut used = 0.0_f32;
    for child in children {
        // Anything not sized on the grid takes a line of its own.
        let share = match child.layout().map(|l| l.width) {
            Some(Size::Percent(pct)) => pct,
            _ => 100.0,
        };
        match lines.last_mut() {
            Some(line) if used + share <= 100.0 + f32::EPSILON => line.push(child),
            _ => {
                lines.push(vec![child]);
                used = 0.0;
            }
        }
        used += share;
    }
    lines
}

/// Lay rendered children side by side.
fn beside(children: &[&Node], gap: u16) -> Vec<String> {
    let blocks: Vec<Vec<String>> = children.iter().map(|c| render(c)).collect();
    let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = blocks
        .iter()
        .map(|b| b.iter().map(|l| l.width()).max().unwrap_or(0))
        .collect();
    let sep = " ".repeat(usize::from(gap / PX_PER_CELL).max(1));

    (0..height)
        .map(|row| {
            let cells: Vec<String> = blocks
                .iter()
                .zip(&widths)
                .filter(|(_, w)| **w > 0)
                .map(|(block, w)| {
                    let line = block.get(row).map(String::as_str).unwrap_or("");
                    pad(line, *w, LabelAlign::Left)
                })
                .collect();
            cells.join(&sep).trim_end().to_string()
        })
        .collect()
}

/// Pad or truncate `text` to a fixed width, honouring alignment.
fn fit(text: &str, layout: &Layout) -> String {
    let Size::Fixed(px) = layout.width else {
        return text.to_string();
    };
    let width = usize::from(px / PX_PER_CELL);
    pad(&truncate_to_width(text, width), width, layout.align)
}

/// Cut `text` to at most `max_width` terminal cells, ending in an ellipsis.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let target = max_width - 1;
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > target {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Pad `text` with spaces to `width` terminal cells.
fn pad(text: &str, width: usize, align: LabelAlign) -> String {
    let fill = width.saturating_sub(text.width());
    let (left, right) = match align {
        LabelAlign::Left => (0, fill),
        LabelAlign::Center => (fill / 2, fill - fill / 2),
        LabelAlign::Right => (fill, 0),
    };
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
