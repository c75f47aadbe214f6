//! Text-mode drawing of non-tree elements
//!
//! Every element is turned into a list of [`Line`]s. Indexed structures
//! (arrays, matrices, brackets and pointers) share a fixed cell width so a
//! bracket or pointer drawn after an array lines up under the right cells.

use crate::trace::element::{
    ArrayElement, BracketElement, Highlight, LinkedListElement, MatrixElement, PointerElement,
    PointerLabel, StackDirection, StackElement,
};
use crate::trace::value::Value;
use crate::ui::theme::{highlight_color, parse_hex_color, DEFAULT_THEME};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Columns per array cell
pub(crate) const CELL_WIDTH: usize = 5;

/// Longest bar drawn for magnitude arrays
const BAR_WIDTH: usize = 24;

/// Indexed drawing stops at this many cells; indices from the trace are
/// clamped to it before they become column offsets
pub(crate) const MAX_CELLS: usize = 256;

/// Column where cell `index` starts
fn cell_column(index: usize) -> usize {
    index.min(MAX_CELLS).saturating_mul(CELL_WIDTH)
}

/// Fit a value into one cell, truncating with `…`
pub(crate) fn cell_text(value: &Value, width: usize) -> String {
    let text = value.to_string();
    let inner = width.saturating_sub(1).max(1);
    let shown: String = if text.chars().count() > inner {
        let mut s: String = text.chars().take(inner.saturating_sub(1)).collect();
        s.push('…');
        s
    } else {
        text
    };
    format!("{:^width$}", shown, width = width)
}

fn cell_style(highlight: Highlight) -> Style {
    match highlight {
        Highlight::Default => Style::default().fg(highlight_color(highlight)),
        Highlight::Inactive => Style::default()
            .fg(highlight_color(highlight))
            .add_modifier(Modifier::DIM),
        other => Style::default()
            .bg(highlight_color(other))
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    }
}

fn header(name: &Option<String>, kind: &str) -> Line<'static> {
    let title = name.clone().unwrap_or_else(|| kind.to_string());
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    ))
}

/// A line with `label`s placed under the cells they point at
fn pointer_row(pointers: &[PointerLabel], len: usize) -> Option<Line<'static>> {
    if pointers.is_empty() {
        return None;
    }
    let mut row = vec![' '; len.max(1) * CELL_WIDTH];
    for pointer in pointers.iter().filter(|p| p.index < len) {
        let label: Vec<char> = format!("↑{}", pointer.label).chars().collect();
        let start = pointer.index * CELL_WIDTH + CELL_WIDTH.saturating_sub(label.len()) / 2;
        for (i, c) in label.into_iter().enumerate() {
            if let Some(slot) = row.get_mut(start + i) {
                *slot = c;
            } else {
                row.push(c);
            }
        }
    }
    Some(Line::from(Span::styled(
        row.into_iter().collect::<String>().trim_end().to_string(),
        Style::default().fg(DEFAULT_THEME.secondary),
    )))
}

pub(crate) fn array_lines(array: &ArrayElement) -> Vec<Line<'static>> {
    let mut lines = vec![header(&array.name, "array")];

    if array.values.is_empty() {
        lines.push(Line::styled("(empty)", Style::default().fg(DEFAULT_THEME.comment)));
        return lines;
    }

    if array.as_bars {
        let max = array
            .values
            .iter()
            .filter_map(Value::as_f64)
            .fold(0.0_f64, |m, v| m.max(v.abs()));
        for (idx, value) in array.values.iter().enumerate() {
            let magnitude = value.as_f64().unwrap_or(0.0).abs();
            let len = if max > 0.0 {
                ((magnitude / max) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let highlight = array.highlight_at(idx);
            let mut spans = vec![
                Span::styled(format!("{:>3} │", idx), Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled("█".repeat(len), Style::default().fg(highlight_color(highlight))),
                Span::styled(format!(" {}", value), Style::default().fg(DEFAULT_THEME.fg)),
            ];
            let labels: Vec<&str> = array.pointers_at(idx).collect();
            if !labels.is_empty() {
                spans.push(Span::styled(
                    format!("  ← {}", labels.join(", ")),
                    Style::default().fg(DEFAULT_THEME.secondary),
                ));
            }
            lines.push(Line::from(spans));
        }
        return lines;
    }

    let cells: Vec<Span> = array
        .values
        .iter()
        .enumerate()
        .map(|(idx, value)| Span::styled(cell_text(value, CELL_WIDTH), cell_style(array.highlight_at(idx))))
        .collect();
    lines.push(Line::from(cells));

    let indices: String = (0..array.values.len())
        .map(|i| format!("{:^width$}", i, width = CELL_WIDTH))
        .collect();
    lines.push(Line::styled(indices, Style::default().fg(DEFAULT_THEME.comment)));

    if let Some(row) = pointer_row(&array.pointers, array.values.len()) {
        lines.push(row);
    }
    lines
}

pub(crate) fn pointer_lines(pointer: &PointerElement) -> Vec<Line<'static>> {
    let indent = " ".repeat(cell_column(pointer.index) + CELL_WIDTH / 2);
    vec![Line::from(vec![
        Span::raw(indent),
        Span::styled(
            format!("↑ {} = {}", pointer.label, pointer.index),
            Style::default()
                .fg(parse_hex_color(&pointer.color))
                .add_modifier(Modifier::BOLD),
        ),
    ])]
}

pub(crate) fn bracket_lines(bracket: &BracketElement) -> Vec<Line<'static>> {
    let width = bracket.width();
    if width == 0 {
        return vec![Line::styled(
            format!("window [{}, {}] (empty)", bracket.left, bracket.right),
            Style::default().fg(DEFAULT_THEME.comment),
        )];
    }

    let left = bracket.left.min(MAX_CELLS);
    let span_width = width.min(MAX_CELLS - left).max(1) * CELL_WIDTH;
    let shape = if span_width >= 2 {
        format!("└{}┘", "─".repeat(span_width - 2))
    } else {
        "┴".to_string()
    };
    let mut spans = vec![
        Span::raw(" ".repeat(cell_column(left))),
        Span::styled(shape, Style::default().fg(highlight_color(Highlight::Comparing))),
    ];
    if let Some(value) = &bracket.value {
        spans.push(Span::styled(
            format!(" {}", value),
            Style::default()
                .fg(highlight_color(Highlight::Comparing))
                .add_modifier(Modifier::BOLD),
        ));
    }
    vec![Line::from(spans)]
}

pub(crate) fn stack_lines(stack: &StackElement) -> Vec<Line<'static>> {
    let mut lines = vec![header(&stack.name, "stack")];
    if stack.values.is_empty() {
        lines.push(Line::styled("(empty)", Style::default().fg(DEFAULT_THEME.comment)));
        return lines;
    }

    let width = stack
        .values
        .iter()
        .map(|v| v.to_string().chars().count())
        .max()
        .unwrap_or(1)
        .clamp(3, 16)
        + 2;
    let top = stack.values.len() - 1;

    for (idx, value) in stack.draw_order() {
        let mut spans = vec![
            Span::styled("│", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(cell_text(value, width), cell_style(stack.highlight_at(idx))),
            Span::styled("│", Style::default().fg(DEFAULT_THEME.comment)),
        ];
        if idx == top {
            spans.push(Span::styled(" ← top", Style::default().fg(DEFAULT_THEME.secondary)));
        }
        lines.push(Line::from(spans));
    }

    let base = format!("└{}┘", "─".repeat(width));
    match stack.direction {
        StackDirection::TopToBottom => lines.push(Line::styled(base, Style::default().fg(DEFAULT_THEME.comment))),
        StackDirection::BottomToTop => lines.insert(
            1,
            Line::styled(format!("┌{}┐", "─".repeat(width)), Style::default().fg(DEFAULT_THEME.comment)),
        ),
    }
    lines
}

pub(crate) fn linked_list_lines(list: &LinkedListElement) -> Vec<Line<'static>> {
    let mut lines = vec![header(&None, "linked list")];
    let mut spans = Vec::new();
    // Column where each node's label starts, for the pointer row
    let mut starts = Vec::with_capacity(list.nodes.len());
    let mut column = 0;

    for (idx, node) in list.nodes.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)));
            column += 3;
        }
        let text = format!("({})", node.value);
        starts.push(column);
        column += text.chars().count();
        spans.push(Span::styled(text, cell_style(node.style)));
    }
    if !list.nodes.is_empty() {
        spans.push(Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)));
    }
    spans.push(Span::styled("∅", Style::default().fg(DEFAULT_THEME.comment)));
    lines.push(Line::from(spans));

    let mut labels = String::new();
    for pointer in list.pointers.iter().filter(|p| p.index < starts.len()) {
        let start = starts[pointer.index];
        let current = labels.chars().count();
        if start > current {
            labels.push_str(&" ".repeat(start - current));
        } else if current > 0 {
            labels.push(' ');
        }
        labels.push('↑');
        labels.push_str(&pointer.label);
    }
    if !labels.is_empty() {
        lines.push(Line::styled(labels, Style::default().fg(DEFAULT_THEME.secondary)));
    }
    lines
}

pub(crate) fn matrix_lines(matrix: &MatrixElement) -> Vec<Line<'static>> {
    let mut lines = vec![header(&None, &format!("matrix {}×{}", matrix.rows, matrix.cols))];
    let rows = matrix.rows.min(MAX_CELLS);
    let cols = matrix.cols.min(MAX_CELLS);

    let col_header: String = std::iter::once("    ".to_string())
        .chain((0..cols).map(|c| format!("{:^width$}", c, width = CELL_WIDTH)))
        .collect();
    lines.push(Line::styled(col_header, Style::default().fg(DEFAULT_THEME.comment)));

    for row in 0..rows {
        let mut spans = vec![Span::styled(
            format!("{:>3} ", row),
            Style::default().fg(DEFAULT_THEME.comment),
        )];
        for col in 0..cols {
            let text = match matrix.cell(row, col) {
                Some(value) => cell_text(value, CELL_WIDTH),
                None => format!("{:^width$}", "·", width = CELL_WIDTH),
            };
            spans.push(Span::styled(text, cell_style(matrix.highlight_at(row, col))));
        }
        lines.push(Line::from(spans));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::element::{IndexHighlight, ListNode};

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Value::Int(7), 5), "  7  ");
        assert_eq!(cell_text(&Value::Int(123456), 5), "123… ");
    }

    #[test]
    fn test_array_pointer_row_alignment() {
        let array = ArrayElement {
            values: vec![Value::Int(1), Value::Int(2), Value::Int(3)],
            pointers: vec![PointerLabel {
                index: 2,
                label: "m".to_string(),
            }],
            highlights: vec![IndexHighlight {
                index: 2,
                style: Highlight::Active,
            }],
            ..ArrayElement::default()
        };
        let lines = array_lines(&array);
        // header, cells, indices, pointers
        assert_eq!(lines.len(), 4);
        assert_eq!(text(&lines[3]), format!("{}↑m", " ".repeat(2 * CELL_WIDTH + 1)));
    }

    #[test]
    fn test_bracket_under_cells() {
        let bracket = BracketElement {
            left: 1,
            right: 2,
            value: Some(Value::Int(9)),
        };
        let line = text(&bracket_lines(&bracket)[0]);
        assert!(line.starts_with(&format!("{}└", " ".repeat(CELL_WIDTH))));
        assert!(line.ends_with("┘ 9"));
    }

    #[test]
    fn test_stack_top_marker() {
        let stack = StackElement {
            values: vec![Value::Int(1), Value::Int(2)],
            ..StackElement::default()
        };
        let lines = stack_lines(&stack);
        // Top-to-bottom: the last pushed value is drawn first
        assert!(text(&lines[1]).contains('2'));
        assert!(text(&lines[1]).ends_with("← top"));
    }

    #[test]
    fn test_every_highlight_uses_table_color() {
        for highlight in Highlight::ALL {
            let color = Some(highlight_color(highlight));
            let style = cell_style(highlight);
            assert!(
                style.fg == color || style.bg == color,
                "{} cell drawn in {:?}",
                highlight,
                style
            );

            let bars = ArrayElement {
                values: vec![Value::Int(4)],
                highlights: vec![IndexHighlight { index: 0, style: highlight }],
                as_bars: true,
                ..ArrayElement::default()
            };
            let lines = array_lines(&bars);
            assert_eq!(lines[1].spans[1].style.fg, color, "{} bar", highlight);
        }
        assert_eq!(
            cell_style(Highlight::Default).fg,
            Some(Color::Rgb(0x94, 0xa3, 0xb8))
        );
    }

    #[test]
    fn test_huge_indices_are_clamped() {
        let pointer = PointerElement {
            label: "p".to_string(),
            index: usize::MAX / 2,
            color: "#3b82f6".to_string(),
        };
        let line = text(&pointer_lines(&pointer)[0]);
        assert!(line.starts_with(&" ".repeat(MAX_CELLS * CELL_WIDTH)));
        assert!(line.ends_with(&format!("↑ p = {}", usize::MAX / 2)));

        let bracket = BracketElement {
            left: usize::MAX - 1,
            right: usize::MAX,
            value: None,
        };
        let line = text(&bracket_lines(&bracket)[0]);
        assert!(line.chars().count() <= (MAX_CELLS + 1) * CELL_WIDTH);

        let whole_range = BracketElement {
            left: 0,
            right: usize::MAX,
            value: None,
        };
        let line = text(&bracket_lines(&whole_range)[0]);
        assert_eq!(line.chars().count(), MAX_CELLS * CELL_WIDTH);

        let matrix = MatrixElement {
            rows: usize::MAX,
            cols: usize::MAX,
            values: vec![Value::Int(1)],
            highlights: Vec::new(),
        };
        // header, column numbers, then one line per drawn row
        assert_eq!(matrix_lines(&matrix).len(), 2 + MAX_CELLS);
    }

    #[test]
    fn test_linked_list() {
        let list = LinkedListElement {
            nodes: vec![
                ListNode {
                    value: Value::Int(1),
                    style: Highlight::Default,
                },
                ListNode {
                    value: Value::Int(22),
                    style: Highlight::Visited,
                },
            ],
            pointers: vec![PointerLabel {
                index: 1,
                label: "cur".to_string(),
            }],
        };
        let lines = linked_list_lines(&list);
        assert_eq!(text(&lines[1]), "(1) → (22) → ∅");
        assert_eq!(text(&lines[2]), "      ↑cur");
    }
}
