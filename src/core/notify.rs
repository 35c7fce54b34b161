use std::collections::VecDeque;
use std::fmt::Debug;

#[allow(unused_imports)]
use log::{debug, error, trace};

use crate::core::definitions::{DropMetadata, Key, MoveMetadata, Piece, Role, SetPremoveMetadata};

/** Observer call recorded by a state transition, run after the transition returns. */
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /** origin, destination, captured piece */
    Move(Key, Key, Option<Piece>),
    Change,
    Select(Key),
    /** piece, where it was dropped */
    DropNewPiece(Piece, Key),
    /** origin, destination, metadata */
    AfterMove(Key, Key, MoveMetadata),
    /** role, where it was dropped, metadata */
    AfterNewPiece(Role, Key, DropMetadata),
    PremoveSet(Key, Key, SetPremoveMetadata),
    PremoveUnset,
    PredropSet(Role, Key),
    PredropUnset,
}

/** Takes notifications off the synchronous path of a state transition. */
pub trait Scheduler {
    fn schedule(&mut self, notification: Notification);

    /** Next notification to run in-process, `None` if the scheduler hands them elsewhere. */
    fn next_task(&mut self) -> Option<Notification> {
        None
    }
}

/** In-process FIFO, drained by `BoardState::run_deferred`. */
#[derive(Debug, Default)]
pub struct TaskQueue {
    tasks: VecDeque<Notification>,
}

impl TaskQueue {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Scheduler for TaskQueue {
    fn schedule(&mut self, notification: Notification) {
        self.tasks.push_back(notification);
    }

    fn next_task(&mut self) -> Option<Notification> {
        self.tasks.pop_front()
    }
}

#[cfg(feature = "channel")]
impl Scheduler for tokio::sync::mpsc::UnboundedSender<Notification> {
    fn schedule(&mut self, notification: Notification) {
        if let Err(err) = self.send(notification) {
            error!("Failed to post notification, receiver is gone! Err: {}", err);
        }
    }
}

pub type Callback<T> = Option<Box<T>>;

#[derive(Default)]
pub struct Events {
    pub change: Callback<dyn FnMut()>,
    pub on_move: Callback<dyn FnMut(Key, Key, Option<Piece>)>,
    pub drop_new_piece: Callback<dyn FnMut(Piece, Key)>,
    pub select: Callback<dyn FnMut(Key)>,
}

#[derive(Default)]
pub struct MovableEvents {
    pub after: Callback<dyn FnMut(Key, Key, MoveMetadata)>,
    pub after_new_piece: Callback<dyn FnMut(Role, Key, DropMetadata)>,
}

#[derive(Default)]
pub struct PremovableEvents {
    pub set: Callback<dyn FnMut(Key, Key, SetPremoveMetadata)>,
    pub unset: Callback<dyn FnMut()>,
}

#[derive(Default)]
pub struct PredroppableEvents {
    pub set: Callback<dyn FnMut(Role, Key)>,
    pub unset: Callback<dyn FnMut()>,
}

fn hook_names(hooks: &[(&'static str, bool)]) -> Vec<&'static str> {
    hooks
        .iter()
        .filter(|(_, present)| *present)
        .map(|(name, _)| *name)
        .collect()
}

impl Debug for Events {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Events")
            .field(
                "hooks",
                &hook_names(&[
                    ("change", self.change.is_some()),
                    ("move", self.on_move.is_some()),
                    ("dropNewPiece", self.drop_new_piece.is_some()),
                    ("select", self.select.is_some()),
                ]),
            )
            .finish()
    }
}

impl Debug for MovableEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MovableEvents")
            .field(
                "hooks",
                &hook_names(&[
                    ("after", self.after.is_some()),
                    ("afterNewPiece", self.after_new_piece.is_some()),
                ]),
            )
            .finish()
    }
}

impl Debug for PremovableEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PremovableEvents")
            .field(
                "hooks",
                &hook_names(&[("set", self.set.is_some()), ("unset", self.unset.is_some())]),
            )
            .finish()
    }
}

impl Debug for PredroppableEvents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredroppableEvents")
            .field(
                "hooks",
                &hook_names(&[("set", self.set.is_some()), ("unset", self.unset.is_some())]),
            )
            .finish()
    }
}
