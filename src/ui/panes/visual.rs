//! Visual pane: bars, grid, graph or linked list, whichever the step carries

use super::utils::{element_color, flags_color, pane_block};
use crate::step::{Auxiliary, GraphState, LinkedListState, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Bar, BarChart, BarGroup, Block, Paragraph, Wrap,
    },
    Frame,
};

/// Width and height of the plane graph positions are laid out in
const PLANE: (f64, f64) = (500.0, 250.0);

pub fn render_visual_pane(frame: &mut Frame, area: Rect, step: Option<&Step>, is_focused: bool) {
    let block = pane_block(" Visualization ", is_focused);
    let Some(step) = step else {
        let empty = Paragraph::new("Nothing loaded")
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    if let Some(graph) = step.graph() {
        render_graph(frame, area, graph, block);
    } else if let Some(list) = step.linked_list() {
        let paragraph = Paragraph::new(list_lines(list))
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, area);
    } else if let Some(Auxiliary::Islands { cols, .. }) = step.auxiliary() {
        let paragraph = Paragraph::new(grid_lines(step, *cols)).block(block);
        frame.render_widget(paragraph, area);
    } else {
        render_bars(frame, area, step, block);
    }
}

fn render_bars(frame: &mut Frame, area: Rect, step: &Step, block: Block) {
    let elements = step.elements();
    if elements.is_empty() {
        let empty = Paragraph::new("Empty input")
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let sorted = step.auxiliary().and_then(Auxiliary::sorted_indices);
    // Shift so the smallest value still gets a visible bar
    let floor = elements
        .iter()
        .filter_map(|e| e.value.as_number())
        .min()
        .unwrap_or(0)
        .min(0);

    let bars: Vec<Bar> = elements
        .iter()
        .enumerate()
        .map(|(i, element)| {
            let color = element_color(element, sorted.is_some_and(|s| s.contains(&i)));
            let height = element
                .value
                .as_number()
                .map_or(0, |v| v.saturating_sub(floor).unsigned_abs() + 1);
            Bar::default()
                .value(height)
                .text_value(element.value.to_string())
                .label(Line::from(i.to_string()))
                .style(Style::default().fg(color))
                .value_style(Style::default().bg(color).fg(Color::Black))
        })
        .collect();

    let inner_width = area.width.saturating_sub(2) as usize;
    let n = bars.len().max(1);
    let bar_width = (inner_width / n).saturating_sub(1).clamp(1, 7) as u16;

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1);
    frame.render_widget(chart, area);
}

fn grid_lines(step: &Step, cols: usize) -> Vec<Line<'static>> {
    step.elements()
        .chunks(cols.max(1))
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|cell| {
                    let land = cell.value.as_number() == Some(1);
                    let color = match cell.roles.dominant() {
                        Some(role) => DEFAULT_THEME.role(role),
                        None if land => DEFAULT_THEME.secondary,
                        None => DEFAULT_THEME.primary,
                    };
                    let glyph = if land { " ██ " } else { " ~~ " };
                    Span::styled(glyph, Style::default().fg(color))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn list_lines(list: &LinkedListState) -> Vec<Line<'static>> {
    let mut nodes = Vec::new();
    let mut markers = Vec::new();
    for (i, node) in list.nodes.iter().enumerate() {
        let in_cycle = list.cycle_node_ids.contains(&node.id);
        let color = if list.slow == Some(i) || list.fast == Some(i) {
            DEFAULT_THEME.primary
        } else if in_cycle {
            DEFAULT_THEME.error
        } else {
            DEFAULT_THEME.fg
        };
        let cell = format!("[{}]", node.value);
        let width = cell.chars().count() + 3;
        nodes.push(Span::styled(
            cell,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ));
        nodes.push(Span::styled(" → ", Style::default().fg(DEFAULT_THEME.comment)));

        let marker = match (list.slow == Some(i), list.fast == Some(i)) {
            (true, true) => "S F",
            (true, false) => "S",
            (false, true) => "F",
            (false, false) => "",
        };
        markers.push(Span::styled(
            format!("{marker:<width$}"),
            Style::default().fg(DEFAULT_THEME.secondary),
        ));
    }
    nodes.pop();

    let mut lines = vec![Line::from(nodes), Line::from(markers), Line::default()];
    if let Some(tail) = list.nodes.last() {
        let target = match tail.next_id {
            Some(id) => format!("node {id}"),
            None => "nothing".to_string(),
        };
        lines.push(Line::from(Span::styled(
            format!("node {} points to {target}", tail.id),
            Style::default().fg(DEFAULT_THEME.comment),
        )));
    }
    if list.cycle_detected {
        lines.push(Line::from(Span::styled(
            "cycle detected",
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines
}

fn render_graph(frame: &mut Frame, area: Rect, graph: &GraphState, block: Block) {
    // Canvas y grows upward, layout y grows downward
    let at = |(x, y): (f64, f64)| (x, PLANE.1 - y);

    let canvas = Canvas::default()
        .block(block)
        .background_color(DEFAULT_THEME.bg)
        .x_bounds([-20.0, PLANE.0 + 20.0])
        .y_bounds([-20.0, PLANE.1 + 20.0])
        .paint(move |ctx| {
            for edge in &graph.edges {
                let (Some(from), Some(to)) = (graph.node(&edge.from), graph.node(&edge.to)) else {
                    continue;
                };
                let ((x1, y1), (x2, y2)) = (at(from.position), at(to.position));
                ctx.draw(&CanvasLine::new(x1, y1, x2, y2, flags_color(&edge.flags)));
                if let Some(weight) = edge.weight {
                    ctx.print(
                        (x1 + x2) / 2.0,
                        (y1 + y2) / 2.0,
                        Span::styled(weight.to_string(), Style::default().fg(DEFAULT_THEME.comment)),
                    );
                }
            }
            ctx.layer();
            for node in &graph.nodes {
                let (x, y) = at(node.position);
                let label = match node.distance {
                    Some(d) => format!("({}:{d})", node.id),
                    None => format!("({})", node.id),
                };
                let color = node
                    .flags
                    .dominant()
                    .map(|role| DEFAULT_THEME.graph_role(role))
                    .unwrap_or(DEFAULT_THEME.fg);
                ctx.print(
                    x,
                    y,
                    Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                );
            }
        });
    frame.render_widget(canvas, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ListFixture;

    #[test]
    fn test_list_lines_mark_pointers() {
        let fixture = ListFixture::chain(3, None);
        let state = LinkedListState {
            nodes: fixture.nodes.clone(),
            slow: Some(0),
            fast: Some(2),
            cycle_detected: false,
            cycle_node_ids: Default::default(),
        };
        let lines = list_lines(&state);
        let markers: String = lines[1].spans.iter().map(|s| s.content.to_string()).collect();
        assert!(markers.starts_with('S'));
        assert!(markers.trim_end().ends_with('F'));
        let tail: String = lines[3].spans.iter().map(|s| s.content.to_string()).collect();
        assert_eq!(tail, "node 3 points to nothing");
    }
}
