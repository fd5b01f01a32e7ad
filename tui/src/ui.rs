use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as Segment},
        Block, Borders, Paragraph,
    },
    Frame,
};
use waypoint_graph::{EdgeId, NodeId, Point};

use crate::app::{App, MessageKind};

const HELP: &str = "Left: add/connect  Right: origin/destination  Enter: path  c: clear  Esc: cancel  w/l: weights/labels  q: quit";

/// Screen regions: help line, canvas, message log, status bar.
pub fn layout(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(1), // Help message
                Constraint::Min(5),    // Graph
                Constraint::Length(6), // Messages
                Constraint::Length(1), // Status bar
            ]
            .as_ref(),
        )
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

pub fn draw(f: &mut Frame, app: &App) {
    let [help, canvas, log, status] = layout(f.area());

    let help_message = Paragraph::new(HELP).style(Style::default().fg(Color::Yellow));
    f.render_widget(help_message, help);

    draw_graph(f, app, canvas);

    let visible = usize::from(log.height.saturating_sub(2));
    let start = app.messages.len().saturating_sub(visible);
    let lines: Vec<Line> = app.messages[start..]
        .iter()
        .map(|m| {
            let (tag, color) = match m.kind {
                MessageKind::Info => ("info", Color::Cyan),
                MessageKind::Error => ("error", Color::Red),
            };
            Line::from(vec![
                Span::styled(
                    format!("[{}] ", tag),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(m.content.clone()),
            ])
        })
        .collect();
    let messages =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Messages"));
    f.render_widget(messages, log);

    let status_bar = Paragraph::new(app.status_message.as_str())
        .style(Style::default().bg(Color::Blue).fg(Color::White));
    f.render_widget(status_bar, status);
}

fn draw_graph(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let graph = session.graph();
    let path = session.path();
    let selection = session.selection();
    let radius = f64::from(session.settings().selection_radius);

    let path_color = if session.path_is_stale() {
        Color::Yellow
    } else {
        Color::Green
    };
    let title = match (path.total_weight(), session.path_is_stale()) {
        (Some(weight), false) => format!("Graph  {}  ({:.2})", path.describe(), weight),
        (Some(weight), true) => format!("Graph  {}  ({:.2}, outdated)", path.describe(), weight),
        (None, _) => format!("Graph  {} nodes, {} edges", graph.node_count(), graph.edge_count()),
    };

    let node_color = |id: NodeId| {
        if selection.origin == Some(id) {
            Color::Green
        } else if selection.destination == Some(id) {
            Color::Red
        } else if selection.anchor == Some(id) {
            Color::Yellow
        } else {
            Color::White
        }
    };
    let position = |id: NodeId| graph.position(id).unwrap_or_default();

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .marker(Marker::Braille)
        .x_bounds([-1.0, 1.0])
        .y_bounds([-1.0, 1.0])
        .paint(|ctx| {
            for (id, edge) in graph.edges().enumerate() {
                let (a, b) = (position(edge.a), position(edge.b));
                let color = if path.uses_edge(EdgeId(id)) {
                    path_color
                } else {
                    Color::DarkGray
                };
                ctx.draw(&Segment {
                    x1: f64::from(a.x),
                    y1: f64::from(a.y),
                    x2: f64::from(b.x),
                    y2: f64::from(b.y),
                    color,
                });
            }
            ctx.layer();

            for node in graph.nodes() {
                ctx.draw(&Circle {
                    x: f64::from(node.position.x),
                    y: f64::from(node.position.y),
                    radius,
                    color: node_color(node.id),
                });
            }

            if app.show_weights {
                for edge in graph.edges() {
                    let mid = midpoint(position(edge.a), position(edge.b));
                    ctx.print(
                        f64::from(mid.x),
                        f64::from(mid.y),
                        Span::styled(
                            format!("{:.2}", edge.weight),
                            Style::default().fg(Color::Gray),
                        ),
                    );
                }
            }
            if app.show_labels {
                for node in graph.nodes() {
                    ctx.print(
                        f64::from(node.position.x) + radius,
                        f64::from(node.position.y) + radius,
                        Span::styled(
                            node.label,
                            Style::default()
                                .fg(node_color(node.id))
                                .add_modifier(Modifier::BOLD),
                        ),
                    );
                }
            }
        });
    f.render_widget(canvas, area);
}

fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
