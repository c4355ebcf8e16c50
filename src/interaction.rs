//! Gesture handling: the drag / wire-draft state machine.
//!
//! Raw pointer and keyboard input arrives as [`InputEvent`]s, already resolved by
//! the UI into what was under the pointer. [`Editor::handle`] runs one transition
//! per event, synchronously, and reports what happened as an [`Outcome`].
//!
//! At most one gesture is active at a time: a part drag or a wire draft. Starting
//! one while the other is running is ignored.

use serde::Serialize;

use crate::editor::Editor;
use crate::error::EditorError;
use crate::spatial;
use crate::types::{DragState, DraftState, PartId, PortRef, WireId};

/// The active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub enum InteractionState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A part is following the pointer
    Dragging(DragState),
    /// A wire has a start port and is waiting for its end
    Drafting(DraftState),
}

impl InteractionState {
    /// Short lowercase name for logs and the status line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging(_) => "dragging",
            Self::Drafting(_) => "drafting",
        }
    }

    /// Whether no gesture is active.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// What a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The body of a part (not one of its ports)
    PartBody(PartId),
    /// A port
    Port(PortRef),
    /// Nothing but canvas
    EmptyCanvas,
}

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A port
    Port(PortRef),
    /// The drawn path of a committed wire
    WireHit(WireId),
    /// Anything that is neither a port nor a wire
    EmptyCanvas,
}

/// Keys the editor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Abandons the active gesture
    Escape,
    /// Any other key; ignored
    Other,
}

/// One input event, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed
    PointerDown {
        /// What the press landed on
        target: PointerTarget,
        /// World x of the press
        x: f32,
        /// World y of the press
        y: f32,
    },
    /// Pointer moved over the canvas
    PointerMove {
        /// World x of the pointer
        x: f32,
        /// World y of the pointer
        y: f32,
    },
    /// Primary button released
    PointerUp,
    /// Pointer left the canvas area
    PointerLeaveCanvas,
    /// Press and release without a drag in between
    Click {
        /// What the click landed on
        target: ClickTarget,
        /// World x of the click
        x: f32,
        /// World y of the click
        y: f32,
    },
    /// Key pressed anywhere in the window
    KeyDown(Key),
    /// Toolbar command: remove every wire
    ClearAllWires,
}

/// What a single event did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Nothing changed
    Ignored,
    /// A part drag began
    DragStarted(PartId),
    /// The dragged part moved to a new grid position
    PartMoved {
        /// The dragged part
        part: PartId,
        /// New grid-aligned x
        x: i32,
        /// New grid-aligned y
        y: i32,
    },
    /// The drag finished (pointer up or left the canvas)
    DragEnded(PartId),
    /// The drag was abandoned with Escape; the part stays where it was last moved
    DragCancelled(PartId),
    /// A draft began at this port
    DraftStarted(PortRef),
    /// The draft cursor moved
    DraftMoved,
    /// The draft ended without a wire
    DraftCancelled,
    /// The draft was committed as a new wire
    WireCommitted(WireId),
    /// The draft ended but the store refused the wire (self or duplicate connection)
    ConnectionRejected(EditorError),
    /// A committed wire was deleted
    WireRemoved(WireId),
    /// Every wire was deleted; holds how many there were
    WiresCleared(usize),
}

impl Editor {
    /// Applies one input event.
    ///
    /// Benign refusals (duplicate wire, click on nothing while drafting, events that
    /// do not apply to the current gesture) come back as `Ok`. An `Err` means the
    /// event referenced a part or port that does not exist; the interaction state
    /// is left exactly as it was.
    pub fn handle(&mut self, event: InputEvent) -> Result<Outcome, EditorError> {
        let current = self.state;
        let (next, outcome) = self.transition(current, event)?;

        if next.name() != current.name() {
            log::debug!("{} -> {} ({:?})", current.name(), next.name(), outcome);
        } else {
            log::trace!("{}: {:?}", current.name(), outcome);
        }
        self.state = next;
        Ok(outcome)
    }

    fn transition(
        &mut self,
        state: InteractionState,
        event: InputEvent,
    ) -> Result<(InteractionState, Outcome), EditorError> {
        use InteractionState::{Dragging, Drafting, Idle};

        let result = match (state, event) {
            (_, InputEvent::ClearAllWires) => {
                let count = self.connections.clear();
                log::info!("cleared {} wires", count);
                (state, Outcome::WiresCleared(count))
            }

            (Dragging(drag), InputEvent::KeyDown(Key::Escape)) => {
                (Idle, Outcome::DragCancelled(drag.part))
            }
            (Drafting(_), InputEvent::KeyDown(Key::Escape)) => (Idle, Outcome::DraftCancelled),

            // Part drag
            (
                Idle,
                InputEvent::PointerDown {
                    target: PointerTarget::PartBody(part),
                    x,
                    y,
                },
            ) => {
                let drag = self.placement.begin_drag(part, x, y)?;
                (Dragging(drag), Outcome::DragStarted(part))
            }
            (Dragging(drag), InputEvent::PointerMove { x, y }) => {
                let (x, y) = self.placement.move_drag(&drag, x, y)?;
                (
                    state,
                    Outcome::PartMoved {
                        part: drag.part,
                        x,
                        y,
                    },
                )
            }
            (Dragging(drag), InputEvent::PointerUp | InputEvent::PointerLeaveCanvas) => {
                (Idle, Outcome::DragEnded(drag.part))
            }

            // Wire draft
            (
                Idle,
                InputEvent::Click {
                    target: ClickTarget::Port(port),
                    x,
                    y,
                },
            ) => {
                self.port_position(port)?;
                let draft = DraftState {
                    from: port,
                    cursor_x: x,
                    cursor_y: y,
                };
                (Drafting(draft), Outcome::DraftStarted(port))
            }
            (Drafting(draft), InputEvent::PointerMove { x, y }) => {
                let draft = DraftState {
                    cursor_x: x,
                    cursor_y: y,
                    ..draft
                };
                (Drafting(draft), Outcome::DraftMoved)
            }
            (
                Drafting(draft),
                InputEvent::Click {
                    target: ClickTarget::Port(port),
                    ..
                },
            ) => {
                if port == draft.from {
                    (Idle, Outcome::DraftCancelled)
                } else {
                    (Idle, self.commit_draft(draft.from, port)?)
                }
            }
            (
                Drafting(draft),
                InputEvent::Click {
                    target: ClickTarget::EmptyCanvas | ClickTarget::WireHit(_),
                    x,
                    y,
                },
            ) => {
                let target = spatial::find_nearest(
                    x,
                    y,
                    self.placement.parts(),
                    &self.catalog,
                    Some(draft.from),
                );
                match target {
                    Some(port) => (Idle, self.commit_draft(draft.from, port)?),
                    None => (Idle, Outcome::DraftCancelled),
                }
            }

            // Direct wire deletion, only while no gesture is active
            (
                Idle,
                InputEvent::Click {
                    target: ClickTarget::WireHit(id),
                    ..
                },
            ) => match self.connections.remove(id) {
                Ok(wire) => {
                    log::info!("removed wire {}", wire.id);
                    (Idle, Outcome::WireRemoved(wire.id))
                }
                Err(err) => {
                    log::debug!("ignoring click on stale wire: {}", err);
                    (Idle, Outcome::Ignored)
                }
            },

            _ => (state, Outcome::Ignored),
        };
        Ok(result)
    }

    /// Tries to wire the draft's start port to `to`. Refusals become an outcome;
    /// broken references stay errors.
    fn commit_draft(&mut self, from: PortRef, to: PortRef) -> Result<Outcome, EditorError> {
        match self.connect(from, to) {
            Ok(wire) => Ok(Outcome::WireCommitted(wire.id)),
            Err(err) if err.is_rejection() => {
                log::debug!("draft not committed: {}", err);
                Ok(Outcome::ConnectionRejected(err))
            }
            Err(err) => Err(err),
        }
    }
}
