//! Helpers shared by several panes

use crate::step::{Element, GraphFlags};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Bordered block whose border follows the focus
pub fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

/// Colour of an element: its dominant role, else sorted, else plain
pub fn element_color(element: &Element, is_sorted: bool) -> Color {
    match element.roles.dominant() {
        Some(role) => DEFAULT_THEME.role(role),
        None if is_sorted => DEFAULT_THEME.sorted,
        None => DEFAULT_THEME.fg,
    }
}

pub fn flags_color(flags: &GraphFlags) -> Color {
    flags
        .dominant()
        .map(|role| DEFAULT_THEME.graph_role(role))
        .unwrap_or(DEFAULT_THEME.border_normal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::{Role, RoleSet};

    #[test]
    fn test_role_beats_sorted() {
        let element = Element {
            value: 4.into(),
            roles: RoleSet::of(Role::Comparing),
        };
        assert_eq!(element_color(&element, true), DEFAULT_THEME.function);
    }

    #[test]
    fn test_sorted_beats_plain() {
        let element = Element::new(4);
        assert_eq!(element_color(&element, true), DEFAULT_THEME.sorted);
        assert_eq!(element_color(&element, false), DEFAULT_THEME.fg);
    }
}
