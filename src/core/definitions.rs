use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt::{Debug, Display};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{anyhow, bail};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};

use crate::core::utils::{compact_pos, is_valid_coord, unpack_pos};

#[derive(PartialEq, Eq, Hash, Debug, Default, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    /** Rank index (0-based) the pieces of this color start on. */
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self == &Self::White {
            "White"
        } else {
            "Black"
        })
    }
}

#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::King,
        Role::Queen,
        Role::Rook,
        Role::Bishop,
        Role::Knight,
        Role::Pawn,
    ];

    /** Material weight used by the score view. */
    pub fn value(self) -> i32 {
        match self {
            Role::Pawn => 1,
            Role::Knight => 3,
            Role::Bishop => 3,
            Role::Rook => 5,
            Role::Queen => 9,
            Role::King => 0,
        }
    }

    pub fn letter(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<Role> {
        match letter.to_ascii_lowercase() {
            'p' => Some(Role::Pawn),
            'n' => Some(Role::Knight),
            'b' => Some(Role::Bishop),
            'r' => Some(Role::Rook),
            'q' => Some(Role::Queen),
            'k' => Some(Role::King),
            _ => None,
        }
    }
}

/** Immutable piece value. Pieces are replaced on the board, never changed in place. */
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Piece {
    pub role: Role,
    pub color: Color,
}

impl Piece {
    pub fn new(role: Role, color: Color) -> Piece {
        Piece { role, color }
    }

    /** FEN letter: uppercase for white, lowercase for black. */
    pub fn letter(&self) -> char {
        match self.color {
            Color::White => self.role.letter().to_ascii_uppercase(),
            Color::Black => self.role.letter(),
        }
    }
}

/** Square key in 0x88 layout
 * Bits 6-4 -- Rank, 0 is rank "1"
 * Bits 2-0 -- File, 0 is file "a"
 * Bits 7 and 3 are always clear for keys on the board */
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, SerializeDisplay, DeserializeFromStr)]
pub struct Key(u8);

impl Key {
    /** Both coordinates are 0-based. */
    pub fn new(file: u8, rank: u8) -> Option<Key> {
        if file < 8 && rank < 8 {
            Some(Key(compact_pos(file, rank)))
        } else {
            None
        }
    }

    pub fn from_code(code: u8) -> Option<Key> {
        is_valid_coord(code).then_some(Key(code))
    }

    pub fn code(&self) -> u8 {
        self.0
    }

    pub fn file(&self) -> u8 {
        unpack_pos::<u8, u8>(self.0).0
    }

    pub fn rank(&self) -> u8 {
        unpack_pos::<u8, u8>(self.0).1
    }

    /** Every square, a1 to h8 rank by rank. */
    pub fn all() -> impl Iterator<Item = Key> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Key(compact_pos(file, rank))))
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.file()) as char, self.rank() + 1)
    }
}

impl Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Key({self})")
    }
}

impl FromStr for Key {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            bail!("Square key should be two characters long, got {s:?}");
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Key::new(file, rank).ok_or_else(|| anyhow!("{s:?} is not a square on the board"))
    }
}

/** Piece placement, at most one piece per square. */
pub type Pieces = HashMap<Key, Piece>;

/** Legal destinations per origin square, supplied by the host. */
pub type Dests = HashMap<Key, HashSet<Key>>;

/** Which side the user may move. */
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovableColor {
    White,
    Black,
    Both,
}

impl MovableColor {
    pub fn permits(self, color: Color) -> bool {
        match self {
            MovableColor::Both => true,
            MovableColor::White => color == Color::White,
            MovableColor::Black => color == Color::Black,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            MovableColor::White => Some(Color::White),
            MovableColor::Black => Some(Color::Black),
            MovableColor::Both => None,
        }
    }
}

impl From<Color> for MovableColor {
    fn from(value: Color) -> Self {
        match value {
            Color::White => MovableColor::White,
            Color::Black => MovableColor::Black,
        }
    }
}

/** A staged drop of a new piece. */
#[derive(PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PieceDrop {
    pub role: Role,
    pub key: Key,
}

#[derive(PartialEq, Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct MoveMetadata {
    pub premove: bool,
    pub ctrl_key: Option<bool>,
    pub hold_time: Option<Duration>,
}

#[derive(PartialEq, Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct SetPremoveMetadata {
    pub ctrl_key: Option<bool>,
}

#[derive(PartialEq, Debug, Default, Clone, Copy, Serialize, Deserialize)]
pub struct DropMetadata {
    pub predrop: bool,
}

/** Per-side surplus of pieces, e.g. white: {pawn: 3, queen: 1}, black: {bishop: 2} */
#[derive(PartialEq, Debug, Default, Clone, Serialize, Deserialize)]
pub struct MaterialDiff {
    pub white: BTreeMap<Role, u32>,
    pub black: BTreeMap<Role, u32>,
}

/** Input of `set_check`: `true` means the side to move. */
#[derive(PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CheckSignal {
    Flag(bool),
    Color(Color),
}

impl From<bool> for CheckSignal {
    fn from(value: bool) -> Self {
        CheckSignal::Flag(value)
    }
}

impl From<Color> for CheckSignal {
    fn from(value: Color) -> Self {
        CheckSignal::Color(value)
    }
}

impl From<Option<Color>> for CheckSignal {
    fn from(value: Option<Color>) -> Self {
        value.map_or(CheckSignal::Flag(false), CheckSignal::Color)
    }
}
