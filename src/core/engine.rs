use log::trace;

use crate::core::definitions::{Key, Piece, Role};
use crate::core::notify::Notification;
use crate::core::state::BoardState;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CastlingSide {
    KingSide,
    QueenSide,
}

impl CastlingSide {
    /** Side implied by the file a king lands on, if any. */
    fn from_destination_file(file: u8) -> Option<CastlingSide> {
        match file {
            6 | 7 => Some(CastlingSide::KingSide),
            0 | 2 => Some(CastlingSide::QueenSide),
            _ => None,
        }
    }

    fn rook_file(self) -> u8 {
        match self {
            CastlingSide::KingSide => 7,
            CastlingSide::QueenSide => 0,
        }
    }

    /** Files of king and rook after castling. */
    fn final_files(self) -> (u8, u8) {
        match self {
            CastlingSide::KingSide => (6, 5),
            CastlingSide::QueenSide => (2, 3),
        }
    }
}

const KING_HOME_FILE: u8 = 4;

impl BoardState {
    /** Moves whatever stands on `origin` to `dest` without any legality check.
     * Does not flip the turn. */
    pub fn base_move(&mut self, origin: Key, dest: Key) -> bool {
        if origin == dest {
            return false;
        }
        let Some(piece) = self.pieces.get(&origin).copied() else {
            return false;
        };
        let displaced = self.pieces.get(&dest).copied();
        let captured = displaced.filter(|target| target.color != piece.color);
        self.notify(Notification::Move(origin, dest, captured));
        self.pieces.remove(&origin);
        self.pieces.insert(dest, piece);
        self.last_move = Some((origin, dest));
        self.check = None;
        trace!("Moved {:?} {} -> {}", piece, origin, dest);
        self.try_auto_castle(origin, dest, displaced);
        self.notify(Notification::Change);
        self.movable.dropped = None;
        true
    }

    /** Places `piece` on `key`; an occupied square is only overwritten with `force`.
     * Does not flip the turn. */
    pub fn base_new_piece(&mut self, piece: Piece, key: Key, force: bool) -> bool {
        if self.pieces.contains_key(&key) {
            if force {
                self.pieces.remove(&key);
            } else {
                return false;
            }
        }
        self.notify(Notification::DropNewPiece(piece, key));
        self.pieces.insert(key, piece);
        self.last_move = Some((key, key));
        self.check = None;
        trace!("Dropped {:?} on {}", piece, key);
        self.notify(Notification::Change);
        self.movable.dropped = None;
        self.movable.dests = None;
        true
    }

    /** `base_move` followed by the bookkeeping of a move made on the user's behalf. */
    pub(crate) fn base_user_move(&mut self, origin: Key, dest: Key) -> bool {
        let result = self.base_move(origin, dest);
        if result {
            self.movable.dests = None;
            self.turn_color = self.turn_color.opposite();
        }
        result
    }

    /** `base_new_piece` followed by the bookkeeping of a drop made on the user's behalf. */
    pub(crate) fn base_user_new_piece(&mut self, piece: Piece, key: Key, force: bool) -> bool {
        let result = self.base_new_piece(piece, key, force);
        if result {
            self.turn_color = self.turn_color.opposite();
        }
        result
    }

    /** Rewrites a king jump from its home square into a full castling placement.
     * `displaced` is what stood on `dest` before the king got there. */
    fn try_auto_castle(&mut self, origin: Key, dest: Key, displaced: Option<Piece>) {
        if !self.auto_castle {
            return;
        }
        let Some(king) = self.pieces.get(&dest).copied() else {
            return;
        };
        if king.role != Role::King
            || origin.file() != KING_HOME_FILE
            || origin.rank() != king.color.back_rank()
            || dest.rank() != origin.rank()
        {
            return;
        }
        let Some(side) = CastlingSide::from_destination_file(dest.file()) else {
            return;
        };
        let rank = origin.rank();
        let (Some(rook_square), Some(king_square), Some(new_rook_square)) = (
            Key::new(side.rook_file(), rank),
            Key::new(side.final_files().0, rank),
            Key::new(side.final_files().1, rank),
        ) else {
            return;
        };
        let rook = Piece::new(Role::Rook, king.color);
        let rook_present = if rook_square == dest {
            displaced == Some(rook)
        } else {
            self.pieces.get(&rook_square) == Some(&rook)
        };
        if !rook_present {
            return;
        }
        self.pieces.remove(&origin);
        self.pieces.remove(&dest);
        self.pieces.remove(&rook_square);
        self.pieces.insert(king_square, king);
        self.pieces.insert(new_rook_square, rook);
        trace!(
            "Auto-castled {} {:?}: king {}, rook {}",
            king.color,
            side,
            king_square,
            new_rook_square
        );
    }
}
