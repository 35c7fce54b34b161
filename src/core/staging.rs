use log::{debug, trace};

use crate::core::definitions::{
    DropMetadata, Key, MoveMetadata, Piece, PieceDrop, Role, SetPremoveMetadata,
};
use crate::core::notify::Notification;
use crate::core::state::BoardState;

/** Premove and predrop staging. At most one of them is staged at any time. */
impl BoardState {
    pub(crate) fn set_premove(&mut self, origin: Key, dest: Key, metadata: SetPremoveMetadata) {
        self.unset_predrop();
        self.premovable.current = Some((origin, dest));
        trace!("Premove staged {} -> {}", origin, dest);
        self.notify(Notification::PremoveSet(origin, dest, metadata));
    }

    pub fn unset_premove(&mut self) {
        if self.premovable.current.take().is_some() {
            trace!("Premove cleared");
            self.notify(Notification::PremoveUnset);
        }
    }

    pub(crate) fn set_predrop(&mut self, role: Role, key: Key) {
        self.unset_premove();
        self.predroppable.current = Some(PieceDrop { role, key });
        trace!("Predrop staged {:?} at {}", role, key);
        self.notify(Notification::PredropSet(role, key));
    }

    pub fn unset_predrop(&mut self) {
        if self.predroppable.current.take().is_some() {
            trace!("Predrop cleared");
            self.notify(Notification::PredropUnset);
        }
    }

    /** Plays the staged premove if the current position allows it.
     * The premove is consumed either way. */
    pub fn play_premove(&mut self) -> bool {
        let Some((origin, dest)) = self.premovable.current else {
            return false;
        };
        let mut success = false;
        if self.can_move(origin, dest) && self.base_user_move(origin, dest) {
            let metadata = MoveMetadata {
                premove: true,
                ..Default::default()
            };
            trace!("Premove {} -> {} replayed", origin, dest);
            self.notify(Notification::AfterMove(origin, dest, metadata));
            success = true;
        } else {
            debug!("Premove {} -> {} is not playable anymore", origin, dest);
        }
        self.unset_premove();
        success
    }

    /** Plays the staged predrop if `validate` accepts it.
     * The predrop is consumed either way. */
    pub fn play_predrop(&mut self, validate: impl FnOnce(&PieceDrop) -> bool) -> bool {
        let Some(drop) = self.predroppable.current else {
            return false;
        };
        let mut success = false;
        if validate(&drop) {
            match self.movable.color.and_then(|color| color.color()) {
                Some(color) => {
                    let piece = Piece::new(drop.role, color);
                    if self.base_user_new_piece(piece, drop.key, false) {
                        self.notify(Notification::AfterNewPiece(
                            drop.role,
                            drop.key,
                            DropMetadata { predrop: true },
                        ));
                        trace!("Predrop {:?} replayed", drop);
                        success = true;
                    }
                }
                None => debug!("Predrop {:?} has no single color to drop for", drop),
            }
        } else {
            debug!("Predrop {:?} rejected by validation", drop);
        }
        self.unset_predrop();
        success
    }
}
