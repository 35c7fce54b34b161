use crate::core::definitions::{Key, MovableColor, Piece, Role};
use crate::core::state::BoardState;
use crate::core::utils::is_promotion_rank;

/** Read-only checks deciding what the user may do right now. None of them mutates the state. */
impl BoardState {
    /** Whether the mover's color may act now: either side may move, or it is that side's turn. */
    fn may_act(&self, piece: &Piece) -> bool {
        match self.movable.color {
            Some(MovableColor::Both) => true,
            Some(color) => color.permits(piece.color) && self.turn_color == piece.color,
            None => false,
        }
    }

    /** Whether the user owns `piece` but has to wait for their turn. */
    fn waits_for_turn(&self, piece: &Piece) -> bool {
        self.movable.color.and_then(MovableColor::color) == Some(piece.color)
            && self.turn_color != piece.color
    }

    pub fn is_movable(&self, origin: Key) -> bool {
        self.pieces
            .get(&origin)
            .is_some_and(|piece| self.may_act(piece))
    }

    pub fn can_move(&self, origin: Key, dest: Key) -> bool {
        origin != dest
            && self.is_movable(origin)
            && (self.movable.free
                || self
                    .movable
                    .dests
                    .as_ref()
                    .and_then(|dests| dests.get(&origin))
                    .is_some_and(|targets| targets.contains(&dest)))
    }

    pub fn can_drop(&self, origin: Key, dest: Key) -> bool {
        self.pieces.get(&origin).is_some_and(|piece| {
            (origin == dest || !self.pieces.contains_key(&dest)) && self.may_act(piece)
        })
    }

    pub fn is_premovable(&self, origin: Key) -> bool {
        self.pieces
            .get(&origin)
            .is_some_and(|piece| self.premovable.enabled && self.waits_for_turn(piece))
    }

    pub fn can_premove(&self, origin: Key, dest: Key) -> bool {
        origin != dest && self.is_premovable(origin) && self.premove_dests(origin).contains(&dest)
    }

    pub fn can_predrop(&self, origin: Key, dest: Key) -> bool {
        let Some(piece) = self.pieces.get(&origin) else {
            return false;
        };
        let dest_free = self
            .pieces
            .get(&dest)
            .map_or(true, |target| target.color != piece.color);
        dest_free
            && self.predroppable.enabled
            && (piece.role != Role::Pawn || !is_promotion_rank(dest))
            && self.waits_for_turn(piece)
    }

    /** Out of turn dragging is allowed when premoves are, the drop then stages a premove. */
    pub fn is_draggable(&self, origin: Key) -> bool {
        self.pieces.get(&origin).is_some_and(|piece| {
            self.draggable.enabled
                && match self.movable.color {
                    Some(MovableColor::Both) => true,
                    Some(color) => {
                        color.permits(piece.color)
                            && (self.turn_color == piece.color || self.premovable.enabled)
                    }
                    None => false,
                }
        })
    }
}
