use crossterm::event::{self, Event, KeyCode, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Duration;
use tracing::debug;
use waypoint_config::Config;
use waypoint_session::{InputEvent, Outcome, Session};

const MAX_MESSAGES: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub kind: MessageKind,
    pub content: String,
}

pub struct App {
    pub session: Session,
    pub messages: Vec<Message>,
    pub status_message: String,
    pub show_weights: bool,
    pub show_labels: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> App {
        App {
            session: Session::from_config(config),
            messages: vec![Message {
                kind: MessageKind::Info,
                content: "Left click adds or connects nodes, right click picks endpoints."
                    .to_string(),
            }],
            status_message: "Ready.".to_string(),
            show_weights: config.ui.show_weights,
            show_labels: config.ui.show_labels,
            should_quit: false,
        }
    }

    pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    pub fn on_key(&mut self, code: KeyCode) {
        let event = match code {
            KeyCode::Char('q') => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('w') => {
                self.show_weights = !self.show_weights;
                return;
            }
            KeyCode::Char('l') => {
                self.show_labels = !self.show_labels;
                return;
            }
            KeyCode::Enter => InputEvent::ComputeTrigger,
            KeyCode::Char('c') => InputEvent::ClearSelection,
            KeyCode::Esc => InputEvent::CancelEdit,
            _ => return,
        };
        self.apply(event);
    }

    /// Left button is the primary select, right button the secondary one.
    /// Clicks outside the drawing area are dropped.
    pub fn on_mouse(&mut self, mouse: MouseEvent, canvas: Rect) {
        let MouseEventKind::Down(button) = mouse.kind else {
            return;
        };
        let Some((x, y)) = to_normalized(mouse.column, mouse.row, canvas) else {
            return;
        };
        let event = match button {
            MouseButton::Left => InputEvent::PrimarySelect { x, y },
            MouseButton::Right => InputEvent::SecondarySelect { x, y },
            MouseButton::Middle => return,
        };
        self.apply(event);
    }

    pub fn apply(&mut self, event: InputEvent) {
        debug!(?event, "input");
        match self.session.handle(event) {
            Ok(Outcome::Ignored) => {
                self.status_message = Outcome::Ignored.to_string();
            }
            Ok(outcome) => {
                self.status_message = outcome.to_string();
                self.push(MessageKind::Info, outcome.to_string());
            }
            Err(e) => {
                self.status_message = format!("Error: {}", e);
                self.push(MessageKind::Error, e.to_string());
            }
        }
    }

    fn push(&mut self, kind: MessageKind, content: String) {
        self.messages.push(Message { kind, content });
        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Map a terminal cell inside `canvas` (including its border) to
/// coordinates in -1..1 with y pointing up, taking the cell center.
pub fn to_normalized(column: u16, row: u16, canvas: Rect) -> Option<(f32, f32)> {
    let inner = inner_area(canvas);
    if inner.width == 0 || inner.height == 0 {
        return None;
    }
    if column < inner.x
        || column >= inner.x + inner.width
        || row < inner.y
        || row >= inner.y + inner.height
    {
        return None;
    }

    let fx = (f32::from(column - inner.x) + 0.5) / f32::from(inner.width);
    let fy = (f32::from(row - inner.y) + 0.5) / f32::from(inner.height);
    Some((fx * 2.0 - 1.0, 1.0 - fy * 2.0))
}

/// Area left for drawing once the one-cell border is removed.
pub fn inner_area(canvas: Rect) -> Rect {
    Rect {
        x: canvas.x.saturating_add(1),
        y: canvas.y.saturating_add(1),
        width: canvas.width.saturating_sub(2),
        height: canvas.height.saturating_sub(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn click(button: MouseButton, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(button),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn center_cell_maps_near_origin() {
        let canvas = Rect::new(0, 0, 42, 22);
        let (x, y) = to_normalized(20, 10, canvas).unwrap();
        assert!((x - (-1.0 + 2.0 * 19.5 / 40.0)).abs() < 1e-6);
        assert!((y - (1.0 - 2.0 * 9.5 / 20.0)).abs() < 1e-6);
    }

    #[test]
    fn corners_and_border() {
        let canvas = Rect::new(2, 3, 12, 12);
        let (x, y) = to_normalized(3, 4, canvas).unwrap();
        assert!(x < -0.8 && y > 0.8);
        assert_eq!(to_normalized(2, 4, canvas), None);
        assert_eq!(to_normalized(13, 4, canvas), None);
        assert_eq!(to_normalized(5, 14, canvas), None);
        assert_eq!(to_normalized(5, 5, Rect::new(0, 0, 2, 2)), None);
    }

    #[test]
    fn mouse_buttons_drive_the_session() {
        let mut app = App::new(&Config::default());
        let canvas = Rect::new(0, 0, 42, 22);

        app.on_mouse(click(MouseButton::Left, 20, 10), canvas);
        assert_eq!(app.session.graph().node_count(), 1);

        app.on_mouse(click(MouseButton::Right, 20, 10), canvas);
        assert!(app.session.endpoints().origin().is_some());

        app.on_mouse(click(MouseButton::Left, 60, 10), canvas);
        assert_eq!(app.session.graph().node_count(), 1);
    }

    #[test]
    fn keys_map_to_events() {
        let mut app = App::new(&Config::default());
        app.on_key(KeyCode::Enter);
        assert_eq!(app.messages.last().unwrap().kind, MessageKind::Error);
        assert!(app.status_message.starts_with("Error:"));

        app.on_key(KeyCode::Char('w'));
        assert_ne!(app.show_weights, Config::default().ui.show_weights);

        app.on_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
