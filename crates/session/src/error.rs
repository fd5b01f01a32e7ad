use thiserror::Error;
use waypoint_graph::GraphError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// A path was requested before both endpoints were picked.
    #[error("select an origin and a destination first")]
    EndpointsNotSelected,

    #[error(transparent)]
    Graph(#[from] GraphError),
}
