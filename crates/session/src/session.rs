use serde::Serialize;
use tracing::{info, warn};
use waypoint_config::Config;
use waypoint_graph::{
    Edge, EdgePolicy, GraphModel, Node, PathFinder, Point, ShortestPath,
};

use crate::error::SessionError;
use crate::event::{InputEvent, Outcome};
use crate::selection::{EditState, EndpointState, Selection};

/// Knobs the state machine needs, usually derived from [`Config`].
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub selection_radius: f32,
    pub weight_scale: f32,
    pub edge_policy: EdgePolicy,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for SessionSettings {
    fn from(config: &Config) -> Self {
        Self {
            selection_radius: config.graph.selection_radius,
            weight_scale: config.graph.weight_scale,
            edge_policy: if config.graph.allow_parallel_edges {
                EdgePolicy::AllowParallel
            } else {
                EdgePolicy::RejectParallel
            },
        }
    }
}

/// Serializable picture of a session, for reports and renderers.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub selection: Selection,
    pub path: ShortestPath,
    pub path_stale: bool,
}

/// Everything an interactive front end mutates: the graph, both selection
/// slots and the last computed path.
///
/// The stored path is only replaced by [`InputEvent::ComputeTrigger`].
/// Editing the graph or clearing the endpoints afterwards leaves it in place,
/// and [`Session::path_is_stale`] reports a graph edit.
#[derive(Debug, Clone)]
pub struct Session {
    graph: GraphModel,
    settings: SessionSettings,
    edit: EditState,
    endpoints: EndpointState,
    path: ShortestPath,
    revision: u64,
    path_revision: Option<u64>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}

impl Session {
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            graph: GraphModel::with_policy(settings.edge_policy),
            settings,
            edit: EditState::Idle,
            endpoints: EndpointState::Unset,
            path: ShortestPath::empty(),
            revision: 0,
            path_revision: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(SessionSettings::from(config))
    }

    pub fn graph(&self) -> &GraphModel {
        &self.graph
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn edit_state(&self) -> EditState {
        self.edit
    }

    pub fn endpoints(&self) -> EndpointState {
        self.endpoints
    }

    pub fn selection(&self) -> Selection {
        Selection {
            anchor: self.edit.anchor(),
            origin: self.endpoints.origin(),
            destination: self.endpoints.destination(),
        }
    }

    /// Last computed path; empty if none was computed or none exists.
    pub fn path(&self) -> &ShortestPath {
        &self.path
    }

    /// True when the graph changed after the stored path was computed.
    pub fn path_is_stale(&self) -> bool {
        self.path_revision
            .is_some_and(|computed_at| computed_at != self.revision)
    }

    /// Dispatch one input event to its transition.
    pub fn handle(&mut self, event: InputEvent) -> Result<Outcome, SessionError> {
        match event {
            InputEvent::PrimarySelect { x, y } => self.primary_select(Point::new(x, y)),
            InputEvent::SecondarySelect { x, y } => Ok(self.secondary_select(Point::new(x, y))),
            InputEvent::ComputeTrigger => self.compute(),
            InputEvent::ClearSelection => Ok(self.clear_selection()),
            InputEvent::CancelEdit => Ok(self.cancel_edit()),
        }
    }

    /// Miss: add a node. Hit while idle: anchor. Hit on another node while
    /// anchored: connect them and move the anchor to the hit node.
    pub fn primary_select(&mut self, position: Point) -> Result<Outcome, SessionError> {
        let Some(hit) = self
            .graph
            .find_nearest(position, self.settings.selection_radius)
        else {
            let id = self.graph.add_node(position);
            self.revision += 1;
            return Ok(Outcome::NodeAdded { id, position });
        };

        match self.edit {
            EditState::Idle => {
                self.edit = EditState::EdgeAnchored(hit);
                info!(node = %hit, "edge anchor set");
                Ok(Outcome::Anchored(hit))
            }
            EditState::EdgeAnchored(anchor) if anchor == hit => Ok(Outcome::Ignored),
            EditState::EdgeAnchored(anchor) => {
                let weight = self.graph.distance(anchor, hit)? * self.settings.weight_scale;
                let edge = self.graph.add_edge(anchor, hit, weight)?;
                self.revision += 1;
                self.edit = EditState::EdgeAnchored(hit);
                Ok(Outcome::EdgeCreated(edge))
            }
        }
    }

    /// Hit: pick the origin if none is set, otherwise (re)place the
    /// destination. Misses change nothing.
    pub fn secondary_select(&mut self, position: Point) -> Outcome {
        let Some(hit) = self
            .graph
            .find_nearest(position, self.settings.selection_radius)
        else {
            return Outcome::Ignored;
        };

        self.endpoints = self.endpoints.select(hit);
        match self.endpoints {
            EndpointState::OriginSet(origin) => {
                info!(%origin, "origin selected");
                Outcome::OriginSelected(origin)
            }
            _ => {
                info!(destination = %hit, "destination selected");
                Outcome::DestinationSelected(hit)
            }
        }
    }

    /// Run the search between the selected endpoints and store the result.
    pub fn compute(&mut self) -> Result<Outcome, SessionError> {
        let EndpointState::BothEndpointsSet {
            origin,
            destination,
        } = self.endpoints
        else {
            warn!("path requested without origin and destination");
            return Err(SessionError::EndpointsNotSelected);
        };

        info!(%origin, %destination, "computing shortest path");
        let path = PathFinder::new(&self.graph).shortest_path(origin, destination)?;

        match path.total_weight() {
            Some(weight) => info!(path = %path.describe(), weight, "path computed"),
            None => info!(%origin, %destination, "no path found"),
        }

        self.path = path.clone();
        self.path_revision = Some(self.revision);
        Ok(Outcome::PathComputed {
            origin,
            destination,
            path,
        })
    }

    /// Forget both endpoints. The last computed path stays until the next
    /// compute.
    pub fn clear_selection(&mut self) -> Outcome {
        self.endpoints = EndpointState::Unset;
        info!("endpoints cleared");
        Outcome::SelectionCleared
    }

    pub fn cancel_edit(&mut self) -> Outcome {
        if self.edit == EditState::Idle {
            return Outcome::Ignored;
        }
        self.edit = EditState::Idle;
        Outcome::EditCancelled
    }

    pub fn report(&self) -> SessionReport {
        let snapshot = self.graph.snapshot();
        SessionReport {
            nodes: snapshot.nodes,
            edges: snapshot.edges,
            selection: self.selection(),
            path: self.path.clone(),
            path_stale: self.path_is_stale(),
        }
    }
}
