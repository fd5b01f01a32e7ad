//! Interactive editing session: turns pointer and key events into graph edits,
//! endpoint selection and shortest-path queries.

pub mod error;
pub mod event;
pub mod selection;
pub mod session;

pub use error::SessionError;
pub use event::{EventParseError, InputEvent, Outcome};
pub use selection::{EditState, EndpointState, Selection};
pub use session::{Session, SessionReport, SessionSettings};
