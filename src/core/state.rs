use std::fmt::Debug;
use std::time::{Duration, Instant};

#[allow(unused_imports)]
use log::{debug, trace};

use crate::core::definitions::{Color, Dests, Key, MovableColor, PieceDrop, Pieces};
use crate::core::fen;
use crate::core::hold::{Hold, HoldTimer};
use crate::core::notify::{
    Events, MovableEvents, Notification, PredroppableEvents, PremovableEvents, Scheduler, TaskQueue,
};
use crate::core::premove::{self, PremoveFn};

#[derive(Debug)]
pub struct Movable {
    pub free: bool,
    /** `None` disables moving altogether. */
    pub color: Option<MovableColor>,
    pub dests: Option<Dests>,
    /** Squares of the last dropped-off drag, kept for the ghost piece. */
    pub dropped: Option<(Key, Key)>,
    pub events: MovableEvents,
}

pub struct Premovable {
    pub enabled: bool,
    pub castle: bool,
    pub current: Option<(Key, Key)>,
    /** Display hint for the selected premovable piece. */
    pub dests: Option<Vec<Key>>,
    pub destinations: PremoveFn,
    pub events: PremovableEvents,
}

impl Debug for Premovable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Premovable")
            .field("enabled", &self.enabled)
            .field("castle", &self.castle)
            .field("current", &self.current)
            .field("dests", &self.dests)
            .field("events", &self.events)
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct Predroppable {
    pub enabled: bool,
    pub current: Option<PieceDrop>,
    pub events: PredroppableEvents,
}

#[derive(Debug, Clone, Copy)]
pub struct Draggable {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Selectable {
    pub enabled: bool,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Stats {
    /** Whether the last interaction was a drag rather than a click. */
    pub dragged: bool,
    pub ctrl_key: Option<bool>,
}

#[derive(Debug, Clone, Copy)]
pub struct Animation {
    pub enabled: bool,
    pub duration: Duration,
    /** Start of the animation in flight. */
    pub current: Option<Instant>,
}

/** Everything the board widget knows about the position and the user's interaction with it.
 * Single owner, mutated in place for the widget's lifetime. */
pub struct BoardState {
    pub pieces: Pieces,
    pub orientation: Color,
    pub turn_color: Color,
    pub check: Option<Key>,
    pub last_move: Option<(Key, Key)>,
    pub selected: Option<Key>,
    pub auto_castle: bool,
    pub animation: Animation,
    pub movable: Movable,
    pub premovable: Premovable,
    pub predroppable: Predroppable,
    pub draggable: Draggable,
    pub selectable: Selectable,
    pub stats: Stats,
    pub events: Events,
    pub(crate) hold: Box<dyn HoldTimer>,
    pub(crate) scheduler: Box<dyn Scheduler>,
}

impl BoardState {
    pub fn new(pieces: Pieces, turn_color: Color) -> BoardState {
        BoardState {
            pieces,
            orientation: Color::White,
            turn_color,
            check: None,
            last_move: None,
            selected: None,
            auto_castle: true,
            animation: Animation {
                enabled: true,
                duration: Duration::from_millis(200),
                current: None,
            },
            movable: Movable {
                free: true,
                color: Some(MovableColor::Both),
                dests: None,
                dropped: None,
                events: Default::default(),
            },
            premovable: Premovable {
                enabled: true,
                castle: true,
                current: None,
                dests: None,
                destinations: premove::destinations,
                events: Default::default(),
            },
            predroppable: Default::default(),
            draggable: Draggable { enabled: true },
            selectable: Selectable { enabled: true },
            stats: Default::default(),
            events: Default::default(),
            hold: Box::new(Hold::default()),
            scheduler: Box::new(TaskQueue::default()),
        }
    }

    pub fn with_scheduler(mut self, scheduler: impl Scheduler + 'static) -> Self {
        self.scheduler = Box::new(scheduler);
        self
    }

    pub fn with_hold_timer(mut self, hold: impl HoldTimer + 'static) -> Self {
        self.hold = Box::new(hold);
        self
    }

    pub fn fen(&self) -> String {
        fen::write(&self.pieces)
    }

    /** Premove destinations of the piece on `origin` according to the configured calculator. */
    pub fn premove_dests(&self, origin: Key) -> Vec<Key> {
        (self.premovable.destinations)(&self.pieces, origin, self.premovable.castle)
    }

    pub(crate) fn notify(&mut self, notification: Notification) {
        self.scheduler.schedule(notification);
    }

    /** Runs every notification scheduled so far, in submission order.
     * Returns how many were taken off the queue. */
    pub fn run_deferred(&mut self) -> usize {
        let mut count = 0;
        while let Some(notification) = self.scheduler.next_task() {
            self.dispatch(notification);
            count += 1;
        }
        count
    }

    /** Invokes the callback registered for `notification`, if any. */
    pub fn dispatch(&mut self, notification: Notification) {
        trace!("Dispatching {:?}", notification);
        match notification {
            Notification::Move(origin, dest, captured) => {
                if let Some(hook) = self.events.on_move.as_mut() {
                    hook(origin, dest, captured)
                }
            }
            Notification::Change => {
                if let Some(hook) = self.events.change.as_mut() {
                    hook()
                }
            }
            Notification::Select(key) => {
                if let Some(hook) = self.events.select.as_mut() {
                    hook(key)
                }
            }
            Notification::DropNewPiece(piece, key) => {
                if let Some(hook) = self.events.drop_new_piece.as_mut() {
                    hook(piece, key)
                }
            }
            Notification::AfterMove(origin, dest, metadata) => {
                if let Some(hook) = self.movable.events.after.as_mut() {
                    hook(origin, dest, metadata)
                }
            }
            Notification::AfterNewPiece(role, key, metadata) => {
                if let Some(hook) = self.movable.events.after_new_piece.as_mut() {
                    hook(role, key, metadata)
                }
            }
            Notification::PremoveSet(origin, dest, metadata) => {
                if let Some(hook) = self.premovable.events.set.as_mut() {
                    hook(origin, dest, metadata)
                }
            }
            Notification::PremoveUnset => {
                if let Some(hook) = self.premovable.events.unset.as_mut() {
                    hook()
                }
            }
            Notification::PredropSet(role, key) => {
                if let Some(hook) = self.predroppable.events.set.as_mut() {
                    hook(role, key)
                }
            }
            Notification::PredropUnset => {
                if let Some(hook) = self.predroppable.events.unset.as_mut() {
                    hook()
                }
            }
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        BoardState::new(fen::initial_pieces(), Color::White)
    }
}

impl Debug for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardState")
            .field("fen", &self.fen())
            .field("orientation", &self.orientation)
            .field("turn_color", &self.turn_color)
            .field("check", &self.check)
            .field("last_move", &self.last_move)
            .field("selected", &self.selected)
            .field("movable", &self.movable)
            .field("premovable", &self.premovable)
            .field("predroppable", &self.predroppable)
            .field("stats", &self.stats)
            .finish()
    }
}
