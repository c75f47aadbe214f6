//! Watch pane: narration and variables of the active step

use crate::trace::Step;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the watch pane
pub fn render_watch_pane(
    frame: &mut Frame,
    area: Rect,
    step: Option<&Step>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Watch ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let Some(step) = step else {
        let paragraph = Paragraph::new("(empty trace)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let mut lines = Vec::new();
    if let Some(description) = &step.description {
        lines.push(Line::from(Span::styled(
            description.clone(),
            Style::default().fg(DEFAULT_THEME.fg),
        )));
    }

    if let Some(variables) = step.variables.as_ref().filter(|v| !v.is_empty()) {
        if !lines.is_empty() {
            lines.push(Line::raw(""));
        }
        let name_width = variables.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        for (name, value) in variables {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:<width$}", name, width = name_width),
                    Style::default().fg(DEFAULT_THEME.primary),
                ),
                Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.number)),
            ]));
        }
    }

    if step.is_complete {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "✓ complete",
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )));
    }

    if lines.is_empty() {
        lines.push(Line::styled("(no variables)", Style::default().fg(DEFAULT_THEME.comment)));
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = (*scroll_offset).min(lines.len().saturating_sub(visible_height));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((*scroll_offset as u16, 0));
    frame.render_widget(paragraph, area);
}
