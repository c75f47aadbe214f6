//! Data-structure pane: every element of the active step
//!
//! Text-mode elements are stacked in a scrollable list at the top; each tree
//! element gets its own canvas below them.

use super::cells::{
    array_lines, bracket_lines, linked_list_lines, matrix_lines, pointer_lines, stack_lines,
};
use super::tree::render_tree;
use crate::trace::element::{Element, TreeElement};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Text lines of one non-tree element, None for trees
pub fn element_lines(element: &Element) -> Option<Vec<Line<'static>>> {
    let lines = match element {
        Element::Array(array) => array_lines(array),
        Element::Pointer(pointer) => pointer_lines(pointer),
        Element::Bracket(bracket) => bracket_lines(bracket),
        Element::Stack(stack) => stack_lines(stack),
        Element::LinkedList(list) => linked_list_lines(list),
        Element::Matrix(matrix) => matrix_lines(matrix),
        Element::Tree(_) => return None,
    };
    Some(lines)
}

/// Render the structures pane
pub fn render_structures_pane(
    frame: &mut Frame,
    area: Rect,
    elements: &[Element],
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
        .title(" Data Structures ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut text_lines: Vec<Line> = Vec::new();
    let mut trees: Vec<&TreeElement> = Vec::new();
    for element in elements {
        match element {
            Element::Tree(tree) => trees.push(tree),
            other => {
                // Pointers and brackets annotate the structure above them
                let annotates = matches!(other, Element::Pointer(_) | Element::Bracket(_));
                if !text_lines.is_empty() && !annotates {
                    text_lines.push(Line::raw(""));
                }
                text_lines.extend(element_lines(other).unwrap_or_default());
            }
        }
    }

    if text_lines.is_empty() && trees.is_empty() {
        let paragraph = Paragraph::new("(nothing to show)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = Vec::new();
    if !text_lines.is_empty() {
        let wanted = text_lines.len() as u16;
        if trees.is_empty() {
            constraints.push(Constraint::Min(0));
        } else {
            constraints.push(Constraint::Max(wanted.min(inner.height / 2)));
        }
    }
    let tree_count = trees.len() as u32;
    constraints.extend(trees.iter().map(|_| Constraint::Ratio(1, tree_count)));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);
    let mut chunk_iter = chunks.iter();

    if !text_lines.is_empty() {
        if let Some(&text_area) = chunk_iter.next() {
            let visible_height = text_area.height.max(1) as usize;
            let max_scroll = text_lines.len().saturating_sub(visible_height);
            *scroll_offset = (*scroll_offset).min(max_scroll);

            let visible: Vec<Line> = text_lines
                .into_iter()
                .skip(*scroll_offset)
                .take(visible_height)
                .collect();
            frame.render_widget(Paragraph::new(visible), text_area);
        }
    }

    for (idx, (tree, &tree_area)) in trees.into_iter().zip(chunk_iter).enumerate() {
        let title = if tree_count > 1 {
            format!("tree {}", idx + 1)
        } else {
            "tree".to_string()
        };
        render_tree(frame, tree_area, tree, &title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::element::{ArrayElement, TreeElement};
    use crate::trace::value::Value;

    #[test]
    fn test_trees_have_no_text_lines() {
        assert!(element_lines(&Element::Tree(TreeElement::default())).is_none());
        let array = Element::Array(ArrayElement {
            values: vec![Value::Int(1)],
            ..ArrayElement::default()
        });
        assert!(element_lines(&array).is_some());
    }
}
