//! Status bar rendering with keybindings and state indicators

use crate::playback::{PlaybackState, Speed};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub current_step: usize,
    pub total_steps: usize,
    pub speed: Speed,
    pub state: PlaybackState,
    /// Contents of the go-to field while it is open
    pub goto_input: Option<&'a str>,
}

/// Text of the step counter, `Step 0/0` for an empty trace
pub fn step_counter(current_step: usize, total_steps: usize) -> String {
    if total_steps == 0 {
        " Step 0/0 ".to_string()
    } else {
        format!(" Step {}/{} ", current_step + 1, total_steps)
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bar_style = Style::default().bg(DEFAULT_THEME.current_line_bg);
    let sep_style = bar_style.fg(DEFAULT_THEME.comment);

    // Left side: step info and message (or the go-to prompt)
    let mut left_spans = vec![
        Span::styled(
            step_counter(data.current_step, data.total_steps),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" {} ", data.speed), bar_style.fg(DEFAULT_THEME.secondary)),
        Span::styled("|", sep_style),
    ];
    match data.goto_input {
        Some(input) => {
            left_spans.push(Span::styled(
                " Go to step: ",
                bar_style.fg(DEFAULT_THEME.secondary).add_modifier(Modifier::BOLD),
            ));
            left_spans.push(Span::styled(format!("{}█", input), bar_style.fg(DEFAULT_THEME.fg)));
        }
        None => {
            left_spans.push(Span::styled(format!(" {} ", data.message), bar_style.fg(DEFAULT_THEME.fg)));
        }
    }

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(bar_style)
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = bar_style.fg(DEFAULT_THEME.fg);

    let mut right_spans = Vec::new();
    let bindings = [
        (" ←/→ ", " step "),
        (" ⎵ ", " play "),
        (" +/- ", " speed "),
        (" g ", " go to "),
        (" r ", " reset "),
        ("q", " quit "),
    ];
    for (idx, (key, desc)) in bindings.iter().enumerate() {
        if idx > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(*key, key_style));
        right_spans.push(Span::styled(*desc, desc_style));
    }

    let badge_color = match data.state {
        PlaybackState::Playing => DEFAULT_THEME.secondary,
        PlaybackState::Finished => DEFAULT_THEME.error,
        PlaybackState::Idle => DEFAULT_THEME.success,
        PlaybackState::Paused => DEFAULT_THEME.primary,
    };
    let badge = match data.state {
        PlaybackState::Playing => " ▶ PLAYING ".to_string(),
        other => format!(" {} ", other.label()),
    };
    right_spans.push(Span::styled("│", sep_style));
    right_spans.push(Span::styled(
        badge,
        Style::default()
            .bg(badge_color)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(bar_style)
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_counter() {
        assert_eq!(step_counter(0, 0), " Step 0/0 ");
        assert_eq!(step_counter(4, 5), " Step 5/5 ");
    }
}
