use std::collections::HashMap;

use log::{debug, trace, warn};

use crate::core::definitions::{
    CheckSignal, Color, DropMetadata, Key, MaterialDiff, MoveMetadata, Piece, Role, SetPremoveMetadata,
};
use crate::core::notify::Notification;
use crate::core::state::BoardState;

impl BoardState {
    /** Click on a square: select it, or move the selected piece there. */
    pub fn select_square(&mut self, key: Key, force: bool) {
        if let Some(selected) = self.selected {
            if selected == key && !self.draggable.enabled {
                self.unselect();
                self.hold.cancel();
            } else if (self.selectable.enabled || force) && selected != key {
                if self.user_move(selected, key) {
                    self.stats.dragged = false;
                }
            } else {
                self.hold.start();
            }
        } else if self.is_movable(key) || self.is_premovable(key) {
            self.set_selected(key);
            self.hold.start();
        }
        self.notify(Notification::Select(key));
    }

    pub fn set_selected(&mut self, key: Key) {
        self.selected = Some(key);
        self.premovable.dests = if self.is_premovable(key) {
            Some(self.premove_dests(key))
        } else {
            None
        };
    }

    pub fn unselect(&mut self) {
        self.selected = None;
        self.premovable.dests = None;
        self.hold.cancel();
    }

    /** Move requested by the user. Returns `true` only when it was applied right away;
     * otherwise it may have been staged as a premove or turned into a new selection. */
    pub fn user_move(&mut self, origin: Key, dest: Key) -> bool {
        if self.can_move(origin, dest) {
            if self.base_user_move(origin, dest) {
                let hold_time = self.hold.stop();
                self.unselect();
                let metadata = MoveMetadata {
                    premove: false,
                    ctrl_key: self.stats.ctrl_key,
                    hold_time: Some(hold_time),
                };
                self.notify(Notification::AfterMove(origin, dest, metadata));
                return true;
            }
        } else if self.can_premove(origin, dest) {
            let metadata = SetPremoveMetadata {
                ctrl_key: self.stats.ctrl_key,
            };
            self.set_premove(origin, dest, metadata);
            self.unselect();
        } else if self.is_movable(dest) || self.is_premovable(dest) {
            self.set_selected(dest);
            self.hold.start();
        } else {
            debug!("Rejected move {} -> {}", origin, dest);
            self.unselect();
        }
        false
    }

    /** Drop of the piece dragged from `origin`. The origin square is emptied whatever happens. */
    pub fn drop_new_piece(&mut self, origin: Key, dest: Key, force: bool) {
        let piece = self.pieces.get(&origin).copied();
        match piece {
            Some(piece) if force || self.can_drop(origin, dest) => {
                self.pieces.remove(&origin);
                if self.base_user_new_piece(piece, dest, force) {
                    self.notify(Notification::AfterNewPiece(
                        piece.role,
                        dest,
                        DropMetadata { predrop: false },
                    ));
                }
                self.movable.dropped = None;
            }
            Some(piece) if self.can_predrop(origin, dest) => self.set_predrop(piece.role, dest),
            _ => {
                debug!("Rejected drop {} -> {}", origin, dest);
                self.unset_premove();
                self.unset_predrop();
            }
        }
        self.pieces.remove(&origin);
        self.unselect();
    }

    pub fn cancel_move(&mut self) {
        self.unset_premove();
        self.unset_predrop();
        self.unselect();
    }

    /** Cancels everything in progress and disables further moves. */
    pub fn stop(&mut self) {
        self.movable.color = None;
        self.movable.dests = None;
        self.cancel_move();
    }

    pub fn reset(&mut self) {
        self.last_move = None;
        self.unselect();
        self.unset_premove();
        self.unset_predrop();
    }

    pub fn toggle_orientation(&mut self) {
        self.orientation = self.orientation.opposite();
        self.animation.current = None;
    }

    /** Merges a placement patch; `None` empties the square. */
    pub fn set_pieces(&mut self, patch: impl IntoIterator<Item = (Key, Option<Piece>)>) {
        for (key, piece) in patch {
            match piece {
                Some(piece) => self.pieces.insert(key, piece),
                None => self.pieces.remove(&key),
            };
        }
        self.movable.dropped = None;
    }

    /** Marks the king of the given color as checked; `true` stands for the side to move. */
    pub fn set_check(&mut self, signal: impl Into<CheckSignal>) {
        let color = match signal.into() {
            CheckSignal::Flag(true) => Some(self.turn_color),
            CheckSignal::Flag(false) => None,
            CheckSignal::Color(color) => Some(color),
        };
        self.check = None;
        let Some(color) = color else {
            return;
        };
        let king = Piece::new(Role::King, color);
        let kings = self
            .pieces
            .iter()
            .filter(|(_, piece)| **piece == king)
            .map(|(key, _)| *key);
        for key in kings {
            if self.check.is_some() {
                warn!("More than one {} king on the board, checking {}", color, key);
            }
            self.check = Some(key);
        }
        trace!("Check set to {:?}", self.check);
    }

    /** Surplus of each role per side. */
    pub fn material_diff(&self) -> MaterialDiff {
        let mut counts: HashMap<Role, i32> = HashMap::new();
        for piece in self.pieces.values() {
            *counts.entry(piece.role).or_default() += sign(piece.color);
        }
        let mut diff = MaterialDiff::default();
        for role in Role::ALL {
            let count = counts.get(&role).copied().unwrap_or_default();
            if count > 0 {
                diff.white.insert(role, count.unsigned_abs());
            } else if count < 0 {
                diff.black.insert(role, count.unsigned_abs());
            }
        }
        diff
    }

    /** Material balance, positive when white is ahead. */
    pub fn score(&self) -> i32 {
        self.pieces
            .values()
            .map(|piece| piece.role.value() * sign(piece.color))
            .sum()
    }
}

fn sign(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}
