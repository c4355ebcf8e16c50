//! Error types for the editing core.

use thiserror::Error;

use crate::types::{PartId, WireId};

/// Errors reported by the editing core.
///
/// `UnknownKind`, `UnknownPart` and `UnknownPort` mean a caller handed the core a
/// stale or invented reference. `SelfConnection` and `DuplicateConnection` are the
/// expected ways for a connection attempt to be declined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// The catalog has no component definition with this kind
    #[error("unknown component kind '{0}'")]
    UnknownKind(String),

    /// No part with this id exists in the placement model
    #[error("unknown part {0}")]
    UnknownPart(PartId),

    /// The part exists but its component definition has no such port
    #[error("part {part} has no port '{port}'")]
    UnknownPort {
        /// Part the reference points into
        part: PartId,
        /// Port id missing from that part's definition
        port: String,
    },

    /// Both ends of the requested wire are the same port
    #[error("a wire cannot connect a port to itself")]
    SelfConnection,

    /// An equal wire (in either orientation) is already committed
    #[error("these ports are already connected by wire {existing}")]
    DuplicateConnection {
        /// Wire that already joins the two ports
        existing: WireId,
    },

    /// No committed wire has this id
    #[error("wire {0} not found")]
    WireNotFound(WireId),

    /// A catalog definition lists the same port id twice
    #[error("component kind '{kind}' declares port '{port}' more than once")]
    DuplicatePortId {
        /// Kind whose definition repeats the port
        kind: String,
        /// The repeated port id
        port: String,
    },

    /// Two catalog definitions share a kind
    #[error("component kind '{0}' is defined more than once")]
    DuplicateKind(String),
}

impl EditorError {
    /// Whether this error is a benign refusal of a connection attempt rather than a
    /// broken reference.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::SelfConnection | Self::DuplicateConnection { .. })
    }
}
