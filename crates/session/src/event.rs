use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use waypoint_graph::{Edge, NodeId, Point, ShortestPath};

/// Input delivered by a front end, in normalized coordinates (-1..1, y up).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum InputEvent {
    /// Place a node, or pick / chain edge endpoints.
    PrimarySelect { x: f32, y: f32 },
    /// Pick the path origin, then the destination.
    SecondarySelect { x: f32, y: f32 },
    /// Compute the shortest path between the selected endpoints.
    ComputeTrigger,
    /// Forget both path endpoints and the stored path.
    ClearSelection,
    /// Drop the edge anchor.
    CancelEdit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventParseError {
    #[error("empty event")]
    Empty,
    #[error("unknown event '{0}' (expected primary, secondary, compute, clear or cancel)")]
    UnknownEvent(String),
    #[error("'{event}' expects {expected} argument(s), got {got}")]
    WrongArity {
        event: String,
        expected: usize,
        got: usize,
    },
    #[error("invalid coordinate '{0}'")]
    InvalidCoordinate(String),
}

impl FromStr for InputEvent {
    type Err = EventParseError;

    /// Parses one script line: `primary X Y`, `secondary X Y`, `compute`,
    /// `clear` or `cancel`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let name = parts.next().ok_or(EventParseError::Empty)?.to_lowercase();
        let args: Vec<&str> = parts.collect();

        let arity = |expected: usize| {
            if args.len() == expected {
                Ok(())
            } else {
                Err(EventParseError::WrongArity {
                    event: name.clone(),
                    expected,
                    got: args.len(),
                })
            }
        };
        let coords = || -> Result<(f32, f32), EventParseError> {
            arity(2)?;
            let parse = |raw: &str| {
                raw.parse::<f32>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| EventParseError::InvalidCoordinate(raw.to_string()))
            };
            Ok((parse(args[0])?, parse(args[1])?))
        };

        match name.as_str() {
            "primary" | "left" => {
                let (x, y) = coords()?;
                Ok(InputEvent::PrimarySelect { x, y })
            }
            "secondary" | "right" => {
                let (x, y) = coords()?;
                Ok(InputEvent::SecondarySelect { x, y })
            }
            "compute" | "enter" => arity(0).map(|_| InputEvent::ComputeTrigger),
            "clear" => arity(0).map(|_| InputEvent::ClearSelection),
            "cancel" | "esc" => arity(0).map(|_| InputEvent::CancelEdit),
            _ => Err(EventParseError::UnknownEvent(name.clone())),
        }
    }
}

/// What an event did to the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    NodeAdded { id: NodeId, position: Point },
    Anchored(NodeId),
    EdgeCreated(Edge),
    OriginSelected(NodeId),
    DestinationSelected(NodeId),
    PathComputed {
        origin: NodeId,
        destination: NodeId,
        path: ShortestPath,
    },
    SelectionCleared,
    EditCancelled,
    /// Nothing changed (a miss, or a click on the current anchor).
    Ignored,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NodeAdded { id, position } => {
                write!(f, "Node {} added at ({:.2}, {:.2})", id, position.x, position.y)
            }
            Outcome::Anchored(id) => write!(f, "Node {} selected for a new edge", id),
            Outcome::EdgeCreated(edge) => {
                write!(f, "Edge {} - {} created, weight {:.2}", edge.a, edge.b, edge.weight)
            }
            Outcome::OriginSelected(id) => write!(f, "Origin set to {}", id),
            Outcome::DestinationSelected(id) => write!(f, "Destination set to {}", id),
            Outcome::PathComputed {
                origin,
                destination,
                path,
            } => match path.total_weight() {
                Some(weight) => write!(f, "Shortest path: {} (weight {:.2})", path.describe(), weight),
                None => write!(f, "No path between {} and {}", origin, destination),
            },
            Outcome::SelectionCleared => write!(f, "Endpoints cleared"),
            Outcome::EditCancelled => write!(f, "Edge selection cancelled"),
            Outcome::Ignored => write!(f, "Nothing selected"),
        }
    }
}
