use crate::step::{GraphRole, Role};
use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub type_name: Color, // Cyan for type names
    pub pivot: Color,     // Mauve
    pub sorted: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250),        // Blue for keywords
    string: Color::Rgb(250, 179, 135),         // Orange for strings
    number: Color::Rgb(250, 179, 135),         // Orange for numbers
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for current line
    function: Color::Rgb(249, 226, 175),       // Yellow for functions
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for type names
    pivot: Color::Rgb(203, 166, 247),
    sorted: Color::Rgb(148, 226, 213),
};

impl Theme {
    /// Colour for the winning element role
    pub const fn role(&self, role: Role) -> Color {
        match role {
            Role::Pivot => self.pivot,
            Role::Comparing => self.function,
            Role::Swapping => self.error,
            Role::Current => self.primary,
            Role::Found => self.success,
            Role::Visited => self.comment,
        }
    }

    /// Colour for the winning graph node or edge flag
    pub const fn graph_role(&self, role: GraphRole) -> Color {
        match role {
            GraphRole::Current => self.primary,
            GraphRole::Comparing => self.function,
            GraphRole::InPath => self.secondary,
            GraphRole::PartOfResult => self.success,
            GraphRole::Visited => self.comment,
            GraphRole::Start => self.type_name,
            GraphRole::End => self.error,
        }
    }
}
