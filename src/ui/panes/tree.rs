//! Tree element rendering on a braille canvas
//!
//! The layout engine works in abstract units with `y` growing downwards; the
//! canvas has `y` growing upwards, so every point is flipped against the
//! layout height.

use crate::layout::{layout_tree, Point, TreeLayout, NODE_SIZE};
use crate::trace::element::TreeElement;
use crate::ui::theme::{highlight_color, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

/// Segments per edge curve
const CURVE_SEGMENTS: usize = 12;

fn flip(layout: &TreeLayout, p: Point) -> (f64, f64) {
    (p.x, layout.bounds.height - p.y)
}

/// Render one tree element into `area`
pub fn render_tree(frame: &mut Frame, area: Rect, tree: &TreeElement, title: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let layout = layout_tree(tree).translated();
    if layout.is_empty() {
        let paragraph = Paragraph::new("(empty tree)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner_cols = area.width.saturating_sub(2).max(1) as f64;
    let units_per_col = layout.bounds.width / inner_cols;

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([0.0, layout.bounds.width])
        .y_bounds([0.0, layout.bounds.height])
        .paint(|ctx| {
            for edge in &layout.edges {
                let points = edge.path.sample(CURVE_SEGMENTS);
                for pair in points.windows(2) {
                    let (x1, y1) = flip(&layout, pair[0]);
                    let (x2, y2) = flip(&layout, pair[1]);
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: DEFAULT_THEME.comment,
                    });
                }
            }

            ctx.layer();

            let mut indices: Vec<usize> = layout.positions.keys().copied().collect();
            indices.sort_unstable();
            for index in indices {
                let Some(node) = tree.node(index) else {
                    continue;
                };
                let (x, y) = flip(&layout, layout.positions[&index]);
                let color = highlight_color(node.style);
                ctx.draw(&Circle {
                    x,
                    y,
                    radius: NODE_SIZE / 2.0,
                    color,
                });

                let label = node.value.to_string();
                let half_width = label.chars().count() as f64 / 2.0 * units_per_col;
                ctx.print(
                    x - half_width,
                    y,
                    Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                );
            }
        });

    frame.render_widget(canvas, area);
}
