//! Source code pane rendering with syntax highlighting
//!
//! This module renders the source code pane, which displays the algorithm
//! being traced with token highlighting and execution indicators.
//!
//! # Features
//!
//! - Token highlighting through [`crate::syntax::tokenize_with`], with the
//!   comment syntax of the trace's language
//! - Current line highlighting with arrow indicator
//! - Gutter marker on lines executed by earlier steps; lines not reached yet
//!   are dimmed
//! - Scroll state that keeps the current line at a fixed visual row

use crate::syntax::{tokenize_with, Dialect, TokenCategory};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Rendered in place of an empty line so it keeps its height
const EMPTY_LINE: &str = "\u{00a0}";

/// Highlighted spans for one source line
pub fn highlight_line(line: &str, dialect: Dialect) -> Vec<Span<'_>> {
    let tokens = tokenize_with(line, dialect);
    if tokens.is_empty() {
        return vec![Span::raw(EMPTY_LINE)];
    }

    tokens
        .into_iter()
        .map(|token| {
            let mut style = Style::default().fg(DEFAULT_THEME.token_color(token.category));
            if token.category == TokenCategory::Keyword {
                style = style.add_modifier(Modifier::BOLD);
            } else if token.category == TokenCategory::Comment {
                style = style.add_modifier(Modifier::ITALIC);
            }
            Span::styled(token.text, style)
        })
        .collect()
}

/// Highlighted line content with the current-line background, or the dimmed
/// color for lines no earlier step has executed
fn line_content(line: &str, dialect: Dialect, is_current: bool, is_executed: bool) -> Vec<Span<'_>> {
    let mut content = highlight_line(line, dialect);
    if is_current {
        for span in &mut content {
            span.style = span.style.bg(DEFAULT_THEME.current_line_bg);
        }
    } else if !is_executed {
        for span in &mut content {
            span.style = span.style.fg(DEFAULT_THEME.dimmed);
        }
    }
    content
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
    pub target_line_row: Option<usize>,
}

/// Data needed to render the source pane
pub struct SourceRenderData<'a> {
    pub source_code: &'a str,
    /// 1-based line of the active step
    pub current_line: Option<usize>,
    pub executed_lines: &'a FxHashSet<usize>,
    pub dialect: Dialect,
}

/// Render the source code pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    data: SourceRenderData,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Source Code ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = data.source_code.lines().collect();
    if lines.is_empty() {
        let paragraph = Paragraph::new("(no source code)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }
    let total_lines = lines.len();

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    // Initialize target_line_row to center if not set
    let target_row = scroll_state
        .target_line_row
        .unwrap_or(visible_height / 2)
        .min(visible_height.saturating_sub(1));
    scroll_state.target_line_row = Some(target_row);

    // Keep the current line at the target row
    if let Some(current_line) = data.current_line.filter(|&l| l <= total_lines) {
        scroll_state.offset = (current_line - 1).saturating_sub(target_row);
    }
    if total_lines > visible_height {
        scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
    } else {
        scroll_state.offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = data.current_line == Some(line_num);
            let is_executed = data.executed_lines.contains(&line_num);

            let (marker, marker_style) = if is_current {
                ("▶", Style::default().fg(DEFAULT_THEME.secondary))
            } else if is_executed {
                ("•", Style::default().fg(DEFAULT_THEME.executed_marker))
            } else {
                (" ", Style::default())
            };

            let num_style = if is_current {
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment)
            };

            let content = line_content(line, data.dialect, is_current, is_executed);

            let mut spans = vec![
                Span::styled(format!("{:4} ", line_num), num_style),
                Span::styled(marker, marker_style),
                Span::raw(" "),
            ];
            spans.extend(content);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
