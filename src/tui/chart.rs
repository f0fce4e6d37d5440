//! Radar chart renderer and detail panels.
//!
//! Each attribute maps to one spoke: angular position follows attribute
//! order (clockwise from the top), radial value is the attribute value, and
//! the radial domain is `[0, levels]`. Below the configured width breakpoint
//! the chart renders compact: fewer grid rings, no value markers, shorter
//! chart area. Purely presentational; the two detail panels hold ephemeral
//! visibility state only.

use std::f64::consts::PI;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders, Paragraph, Wrap,
    },
    Frame,
};

use crate::models::Configuration;
use crate::tui::{AppState, Theme};

/// Ephemeral visibility state of the two collapsible detail panels.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartPanelState {
    /// Per-attribute level-by-level description table
    pub show_attribute_details: bool,
    /// Configuration-level level-description glossary
    pub show_level_glossary: bool,
    /// Scroll offset of the attribute details panel
    pub details_scroll: u16,
}

impl ChartPanelState {
    /// Toggles the attribute details panel.
    pub fn toggle_attribute_details(&mut self) {
        self.show_attribute_details = !self.show_attribute_details;
        self.details_scroll = 0;
    }

    /// Toggles the level glossary panel.
    pub fn toggle_level_glossary(&mut self) {
        self.show_level_glossary = !self.show_level_glossary;
    }
}

/// Spoke endpoint of an attribute, on the unit circle.
fn spoke_point(index: usize, count: usize, radius: f64) -> (f64, f64) {
    // Clockwise from the top, like the original chart
    let angle = PI / 2.0 - (index as f64) * 2.0 * PI / (count as f64);
    (radius * angle.cos(), radius * angle.sin())
}

/// Render the chart pane: radar canvas plus any expanded detail panels.
pub fn render_chart(f: &mut Frame, area: Rect, state: &AppState) {
    let config = &state.current;
    let theme = &state.theme;
    let compact = f.area().width < state.config.ui.compact_width;

    let mut constraints = vec![Constraint::Min(if compact { 10 } else { 14 })];
    if state.chart.show_attribute_details {
        constraints.push(Constraint::Percentage(40));
    }
    if state.chart.show_level_glossary && config.has_level_descriptions() {
        constraints.push(Constraint::Length(config.level_descriptions().len() as u16 + 2));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    render_canvas(f, chunks[0], config, theme, compact);

    let mut next = 1;
    if state.chart.show_attribute_details {
        render_attribute_details(f, chunks[next], config, theme, state.chart.details_scroll);
        next += 1;
    }
    if state.chart.show_level_glossary && config.has_level_descriptions() {
        render_level_glossary(f, chunks[next], config, theme);
    }
}

/// Render the radar polygon, grid rings, spokes, and axis labels.
fn render_canvas(f: &mut Frame, area: Rect, config: &Configuration, theme: &Theme, compact: bool) {
    let count = config.attributes.len();
    let levels = f64::from(config.levels.max(1));
    let ticks = if compact { 3 } else { 5 };

    let grid_color = theme.chart_grid;
    let chart_color = theme.chart;
    let text_color = theme.text;

    let canvas = Canvas::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", config.name))
                .style(Style::default().fg(theme.primary).bg(theme.background)),
        )
        .marker(symbols::Marker::Braille)
        .x_bounds([-1.6, 1.6])
        .y_bounds([-1.3, 1.3])
        .paint(move |ctx| {
            if count == 0 {
                return;
            }

            // Grid rings at each tick
            for tick in 1..=ticks {
                let radius = f64::from(tick) / f64::from(ticks);
                for i in 0..count {
                    let (x1, y1) = spoke_point(i, count, radius);
                    let (x2, y2) = spoke_point((i + 1) % count, count, radius);
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: grid_color,
                    });
                }
            }

            // Spokes
            for i in 0..count {
                let (x, y) = spoke_point(i, count, 1.0);
                ctx.draw(&CanvasLine {
                    x1: 0.0,
                    y1: 0.0,
                    x2: x,
                    y2: y,
                    color: grid_color,
                });
            }

            // Value polygon
            let vertex = |i: usize| {
                let value = f64::from(config.attributes[i].value).min(levels);
                spoke_point(i, count, value / levels)
            };
            for i in 0..count {
                let (x1, y1) = vertex(i);
                let (x2, y2) = vertex((i + 1) % count);
                ctx.draw(&CanvasLine {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: chart_color,
                });
            }

            // Value markers, skipped in compact mode
            if !compact {
                let coords: Vec<(f64, f64)> = (0..count).map(vertex).collect();
                ctx.draw(&Points {
                    coords: &coords,
                    color: chart_color,
                });
            }

            // Axis labels just outside the outer ring
            for (i, attr) in config.attributes.iter().enumerate() {
                let (x, y) = spoke_point(i, count, 1.12);
                let label = axis_label(&attr.name, compact);
                ctx.print(x, y, Span::styled(label, Style::default().fg(text_color)));
            }

            // Radial tick values along the upward axis
            for tick in 1..=ticks {
                let radius = f64::from(tick) / f64::from(ticks);
                let value = (levels * radius).round() as u32;
                ctx.print(
                    0.04,
                    radius,
                    Span::styled(value.to_string(), Style::default().fg(grid_color)),
                );
            }
        });

    f.render_widget(canvas, area);
}

/// Truncates an axis label; compact mode keeps labels shorter.
fn axis_label(name: &str, compact: bool) -> String {
    let max = if compact { 8 } else { 14 };
    if name.chars().count() > max {
        let head: String = name.chars().take(max.saturating_sub(1)).collect();
        format!("{head}\u{2026}")
    } else {
        name.to_string()
    }
}

/// Returns the display name of a level tier.
///
/// Uses the configuration's named tiers when present, otherwise `Level N`.
fn tier_name(config: &Configuration, level: u32) -> String {
    config
        .level_descriptions()
        .get(level.saturating_sub(1) as usize)
        .map_or_else(|| format!("Level {level}"), |tier| tier.name.clone())
}

/// Render the per-attribute level-by-level description table.
fn render_attribute_details(
    f: &mut Frame,
    area: Rect,
    config: &Configuration,
    theme: &Theme,
    scroll: u16,
) {
    let mut lines: Vec<Line> = Vec::new();

    for attr in &config.attributes {
        let Some(descs) = attr.level_descriptions.as_ref().filter(|d| !d.is_empty()) else {
            continue;
        };

        lines.push(Line::from(Span::styled(
            attr.name.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )));
        if let Some(description) = &attr.description {
            lines.push(Line::from(Span::styled(
                description.clone(),
                Style::default().fg(theme.text_muted),
            )));
        }
        for desc in descs {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {}: ", tier_name(config, desc.level)),
                    Style::default().fg(theme.primary),
                ),
                Span::styled(desc.description.clone(), Style::default().fg(theme.text)),
            ]));
        }
        lines.push(Line::from(""));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No attribute descriptions.",
            Style::default().fg(theme.text_muted),
        )));
    }

    let panel = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Attribute Details (PgUp/PgDn scroll) ")
                .style(Style::default().fg(theme.primary).bg(theme.background)),
        );

    f.render_widget(panel, area);
}

/// Render the configuration-level level-description glossary.
fn render_level_glossary(f: &mut Frame, area: Rect, config: &Configuration, theme: &Theme) {
    let lines: Vec<Line> = config
        .level_descriptions()
        .iter()
        .map(|tier| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", tier.name),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(tier.description.clone(), Style::default().fg(theme.text)),
            ])
        })
        .collect();

    let panel = Paragraph::new(lines)
        .style(Style::default().bg(theme.background))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Level Descriptions ")
                .style(Style::default().fg(theme.primary).bg(theme.background)),
        );

    f.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Attribute, LevelDescription};

    #[test]
    fn test_spoke_points_start_at_top() {
        let (x, y) = spoke_point(0, 4, 1.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_spoke_points_go_clockwise() {
        // Second of four spokes points right (east)
        let (x, y) = spoke_point(1, 4, 1.0);
        assert!((x - 1.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn test_spoke_radius_scales() {
        let (x, y) = spoke_point(1, 4, 0.5);
        assert!((x - 0.5).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn test_tier_name_prefers_configured_tiers() {
        let mut config = Configuration::new(
            "T",
            vec![
                Attribute::new("A", 1),
                Attribute::new("B", 1),
                Attribute::new("C", 1),
            ],
            4,
        );
        assert_eq!(tier_name(&config, 2), "Level 2");

        config.level_descriptions = Some(vec![
            LevelDescription {
                name: "Basic".to_string(),
                description: String::new(),
            },
            LevelDescription {
                name: "Proficient".to_string(),
                description: String::new(),
            },
        ]);
        assert_eq!(tier_name(&config, 2), "Proficient");
        assert_eq!(tier_name(&config, 3), "Level 3");
    }

    #[test]
    fn test_axis_label_truncation() {
        assert_eq!(axis_label("Communication", false), "Communication");
        assert_eq!(axis_label("Communication", true), "Communi\u{2026}");
    }

    #[test]
    fn test_panel_toggles_reset_scroll() {
        let mut panels = ChartPanelState::default();
        panels.details_scroll = 5;
        panels.toggle_attribute_details();
        assert!(panels.show_attribute_details);
        assert_eq!(panels.details_scroll, 0);
        panels.toggle_level_glossary();
        assert!(panels.show_level_glossary);
    }
}
