use serde::{Deserialize, Serialize};
use waypoint_graph::NodeId;

/// Edge-building gesture state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    /// The next primary hit on another node draws an edge from here.
    EdgeAnchored(NodeId),
}

impl EditState {
    pub fn anchor(&self) -> Option<NodeId> {
        match self {
            EditState::Idle => None,
            EditState::EdgeAnchored(id) => Some(*id),
        }
    }
}

/// Path endpoint state. Independent of [`EditState`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EndpointState {
    #[default]
    Unset,
    OriginSet(NodeId),
    BothEndpointsSet {
        origin: NodeId,
        destination: NodeId,
    },
}

impl EndpointState {
    pub fn origin(&self) -> Option<NodeId> {
        match self {
            EndpointState::Unset => None,
            EndpointState::OriginSet(origin) | EndpointState::BothEndpointsSet { origin, .. } => {
                Some(*origin)
            }
        }
    }

    pub fn destination(&self) -> Option<NodeId> {
        match self {
            EndpointState::BothEndpointsSet { destination, .. } => Some(*destination),
            _ => None,
        }
    }

    /// A secondary hit: the first one picks the origin, every later one
    /// (re)places the destination. The origin only changes via a reset.
    pub(crate) fn select(self, hit: NodeId) -> Self {
        match self.origin() {
            None => EndpointState::OriginSet(hit),
            Some(origin) => EndpointState::BothEndpointsSet {
                origin,
                destination: hit,
            },
        }
    }
}

/// Flat view of both selection slots for renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub anchor: Option<NodeId>,
    pub origin: Option<NodeId>,
    pub destination: Option<NodeId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_fill_origin_then_destination() {
        let state = EndpointState::Unset.select(NodeId(2));
        assert_eq!(state, EndpointState::OriginSet(NodeId(2)));

        let state = state.select(NodeId(4));
        assert_eq!(
            state,
            EndpointState::BothEndpointsSet { origin: NodeId(2), destination: NodeId(4) }
        );

        let state = state.select(NodeId(1));
        assert_eq!(state.origin(), Some(NodeId(2)));
        assert_eq!(state.destination(), Some(NodeId(1)));
    }

    #[test]
    fn origin_may_also_be_destination() {
        let state = EndpointState::Unset.select(NodeId(0)).select(NodeId(0));
        assert_eq!(
            state,
            EndpointState::BothEndpointsSet { origin: NodeId(0), destination: NodeId(0) }
        );
    }

    #[test]
    fn idle_has_no_anchor() {
        assert_eq!(EditState::Idle.anchor(), None);
        assert_eq!(EditState::EdgeAnchored(NodeId(3)).anchor(), Some(NodeId(3)));
    }
}
