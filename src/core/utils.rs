use serde::{Deserialize, Serialize};

use crate::core::definitions::{Color, Key};

#[inline]
pub fn is_valid_coord(coord: u8) -> bool {
    coord & 0x88 == 0x00
}

#[inline]
pub fn compact_pos(file: u8, rank: u8) -> u8 {
    rank << 4 | file
}

/** Returns `(file, rank)`. */
#[inline]
pub fn unpack_pos<T: From<u8>, V: Into<u8>>(pos: V) -> (T, T) {
    let pos: u8 = pos.into();
    ((pos & 0x0f).into(), ((pos & 0xf0) >> 4).into())
}

pub fn file_distance(a: Key, b: Key) -> u8 {
    a.file().abs_diff(b.file())
}

pub fn rank_distance(a: Key, b: Key) -> u8 {
    a.rank().abs_diff(b.rank())
}

pub fn is_in_straight_line(a: Key, b: Key) -> bool {
    file_distance(a, b) == 0 || rank_distance(a, b) == 0
}

pub fn is_in_diagonal_line(a: Key, b: Key) -> bool {
    file_distance(a, b) == rank_distance(a, b)
}

/** Last rank for pawns of either color. */
pub fn is_promotion_rank(key: Key) -> bool {
    key.rank() == 0 || key.rank() == 7
}

/** Screen rectangle the board is drawn into. */
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/** Square under a pointer position, `None` outside of the 8x8 grid. */
pub fn pointer_to_square(position: (f64, f64), bounds: &Bounds, orientation: Color) -> Option<Key> {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return None;
    }
    let file = (8.0 * ((position.0 - bounds.left) / bounds.width)).ceil();
    let rank = (8.0 - 8.0 * ((position.1 - bounds.top) / bounds.height)).ceil();
    let (file, rank) = match orientation {
        Color::White => (file, rank),
        Color::Black => (9.0 - file, 9.0 - rank),
    };
    if (1.0..=8.0).contains(&file) && (1.0..=8.0).contains(&rank) {
        Key::new(file as u8 - 1, rank as u8 - 1)
    } else {
        None
    }
}
