//! Narration pane: what the current step does, the algorithm's bookkeeping,
//! and the descriptor of the selected algorithm

use super::utils::pane_block;
use crate::registry::{AlgorithmDescriptor, PatternGuide};
use crate::step::{Auxiliary, Step};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use std::collections::BTreeMap;
use std::fmt::Display;

fn join<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn pairs<K: Display, V: Display>(map: &BTreeMap<K, V>) -> String {
    join(map.iter().map(|(k, v)| format!("{k}: {v}")))
}

fn opt<T: Display>(value: &Option<T>) -> String {
    value.as_ref().map_or("-".to_string(), |v| v.to_string())
}

/// One `label: value` row per piece of state the step's auxiliary carries
pub fn aux_rows(aux: &Auxiliary) -> Vec<(&'static str, String)> {
    match aux {
        Auxiliary::Sorting { sorted } => vec![("sorted", join(sorted))],
        Auxiliary::Search { target, low, high } => vec![
            ("target", target.to_string()),
            ("range", format!("{} ..= {}", opt(low), opt(high))),
        ],
        Auxiliary::SlidingWindow {
            start,
            end,
            window_sum,
            max_sum,
        } => vec![
            ("window", format!("{start} ..= {end}")),
            ("sum", window_sum.to_string()),
            ("max", max_sum.to_string()),
        ],
        Auxiliary::TwoPointer {
            left,
            right,
            sum,
            target,
        } => vec![
            ("left", left.to_string()),
            ("right", right.to_string()),
            ("sum", opt(sum)),
            ("target", target.to_string()),
        ],
        Auxiliary::PrefixSum {
            current_sum,
            target_sum,
            prefix_sums,
            count,
        } => vec![
            ("sum", current_sum.to_string()),
            ("target", target_sum.to_string()),
            ("prefixes", pairs(prefix_sums)),
            ("count", count.to_string()),
        ],
        Auxiliary::Frequency {
            freq_map,
            duplicates,
        } => vec![
            ("counts", pairs(freq_map)),
            ("duplicates", join(duplicates)),
        ],
        Auxiliary::VariableWindow {
            left,
            right,
            k,
            counts,
            best,
        } => vec![
            ("window", format!("{left} ..= {right}")),
            ("distinct", format!("{} of at most {k}", counts.len())),
            ("counts", pairs(counts)),
            (
                "best",
                best.map_or("-".to_string(), |(a, b)| format!("{a} ..= {b}")),
            ),
        ],
        Auxiliary::Subsets { path, subsets } => vec![
            ("path", format!("[{}]", join(path))),
            (
                "subsets",
                join(subsets.iter().map(|s| format!("[{}]", join(s)))),
            ),
        ],
        Auxiliary::Memo { memo, call_stack } => vec![
            ("memo", pairs(memo)),
            ("calls", join(call_stack.iter().map(|k| format!("fib({k})")))),
        ],
        Auxiliary::Greedy {
            amount,
            remaining,
            used,
        } => vec![
            ("amount", amount.to_string()),
            ("remaining", remaining.to_string()),
            ("coins", join(used)),
        ],
        Auxiliary::Traversal { frontier, order } => vec![
            ("frontier", join(frontier)),
            ("order", join(order)),
        ],
        Auxiliary::Dijkstra {
            distances,
            finalized,
            path,
            total,
        } => vec![
            (
                "distances",
                join(distances.iter().map(|(k, d)| match d {
                    Some(d) => format!("{k}: {d}"),
                    None => format!("{k}: ∞"),
                })),
            ),
            ("finalized", join(finalized)),
            ("path", path.join(" → ")),
            ("total", opt(total)),
        ],
        Auxiliary::TopoSort {
            in_degree,
            queue,
            order,
        } => vec![
            ("in-degree", pairs(in_degree)),
            ("queue", join(queue)),
            ("order", join(order)),
        ],
        Auxiliary::UnionFind {
            parent,
            rank,
            components,
        } => vec![
            ("parent", join(parent)),
            ("rank", join(rank)),
            ("components", components.to_string()),
        ],
        Auxiliary::Bits { acc, operand } => vec![
            ("acc", format!("{acc} ({acc:b})")),
            (
                "operand",
                operand.map_or("-".to_string(), |v| format!("{v} ({v:b})")),
            ),
        ],
        Auxiliary::Islands {
            rows,
            cols,
            islands,
        } => vec![
            ("grid", format!("{rows} x {cols}")),
            ("islands", islands.to_string()),
        ],
    }
}

pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    descriptor: Option<&AlgorithmDescriptor>,
    step: Option<&Step>,
    is_focused: bool,
    scroll: &mut usize,
) {
    let block = pane_block(" Narration ", is_focused);
    let label_style = Style::default().fg(DEFAULT_THEME.comment);
    let value_style = Style::default().fg(DEFAULT_THEME.fg);

    let mut lines = Vec::new();
    match step {
        Some(step) => {
            lines.push(Line::from(Span::styled(
                step.description().to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.primary)
                    .add_modifier(Modifier::BOLD),
            )));
            if let Some(aux) = step.auxiliary() {
                lines.push(Line::default());
                for (label, value) in aux_rows(aux) {
                    lines.push(Line::from(vec![
                        Span::styled(format!("{label:>10} "), label_style),
                        Span::styled(value, value_style),
                    ]));
                }
            }
        }
        None => lines.push(Line::from(Span::styled("No step", label_style))),
    }

    if let Some(d) = descriptor {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            d.name,
            Style::default()
                .fg(DEFAULT_THEME.function)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(d.description, value_style)));
        lines.push(Line::from(vec![
            Span::styled("time ", label_style),
            Span::styled(d.time_complexity, Style::default().fg(DEFAULT_THEME.type_name)),
            Span::styled("  space ", label_style),
            Span::styled(d.space_complexity, Style::default().fg(DEFAULT_THEME.type_name)),
        ]));
        if let Some(guide) = &d.guide {
            lines.extend(guide_lines(guide, label_style, value_style));
        }
    }

    let max_scroll = lines.len().saturating_sub(1);
    *scroll = (*scroll).min(max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

fn guide_lines(guide: &PatternGuide, label: Style, value: Style) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled("use when ", label),
            Span::styled(guide.when_to_use, value),
        ]),
        Line::from(vec![
            Span::styled("difficulty ", label),
            Span::styled(
                guide.difficulty.as_str(),
                Style::default().fg(DEFAULT_THEME.type_name),
            ),
        ]),
        Line::default(),
        Line::from(Span::styled(guide.approach, value)),
    ];
    for (heading, items) in [
        ("Key points", guide.key_points),
        ("Common problems", guide.common_problems),
    ] {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(heading, label)));
        lines.extend(
            items
                .iter()
                .map(|item| Line::from(Span::styled(format!("  • {item}"), value))),
        );
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Registry;

    #[test]
    fn test_guide_lists_problems_and_key_points() {
        let registry = Registry::new();
        let guide = registry.lookup("backtracking").unwrap().guide.unwrap();
        let text: Vec<String> = guide_lines(&guide, Style::default(), Style::default())
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(text[1], "difficulty hard");
        assert!(text.contains(&"  • N-Queens".to_string()));
        assert_eq!(
            text.len(),
            4 + 2 + guide.key_points.len() + 2 + guide.common_problems.len()
        );
    }

    #[test]
    fn test_search_rows() {
        let rows = aux_rows(&Auxiliary::Search {
            target: 11,
            low: Some(0),
            high: None,
        });
        assert_eq!(rows[1], ("range", "0 ..= -".to_string()));
    }

    #[test]
    fn test_dijkstra_unreached_is_infinite() {
        let rows = aux_rows(&Auxiliary::Dijkstra {
            distances: BTreeMap::from([("A".to_string(), Some(0)), ("B".to_string(), None)]),
            finalized: vec!["A".to_string()],
            path: Vec::new(),
            total: None,
        });
        assert_eq!(rows[0].1, "A: 0, B: ∞");
    }
}
