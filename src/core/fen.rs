use anyhow::{bail, Context};
use log::trace;

use crate::core::definitions::{Color, Key, Piece, Pieces, Role};

pub const INITIAL: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

pub fn initial_pieces() -> Pieces {
    let mut pieces = Pieces::with_capacity(32);
    for (file, role) in [
        Role::Rook,
        Role::Knight,
        Role::Bishop,
        Role::Queen,
        Role::King,
        Role::Bishop,
        Role::Knight,
        Role::Rook,
    ]
    .into_iter()
    .enumerate()
    {
        for (rank, piece) in [
            (0, Piece::new(role, Color::White)),
            (1, Piece::new(Role::Pawn, Color::White)),
            (6, Piece::new(Role::Pawn, Color::Black)),
            (7, Piece::new(role, Color::Black)),
        ] {
            if let Some(key) = Key::new(file as u8, rank) {
                pieces.insert(key, piece);
            }
        }
    }
    pieces
}

/** Reads the placement field of a FEN string, "start" for the initial position.
 * Anything after the first space is ignored, as are `~` promotion markers. */
pub fn read(fen: &str) -> anyhow::Result<Pieces> {
    let fen = if fen == "start" { INITIAL } else { fen };
    let placement = fen.split(' ').next().unwrap_or_default();
    let mut pieces = Pieces::new();
    let mut rank: u8 = 7;
    let mut file: u8 = 0;
    for symbol in placement.chars() {
        match symbol {
            '[' => break,
            '/' => {
                if rank == 0 {
                    bail!("Too many ranks in FEN {fen:?}");
                }
                rank -= 1;
                file = 0;
            }
            '~' => (),
            '1'..='8' => {
                file = file.saturating_add(symbol as u8 - b'0');
            }
            letter => {
                let role = Role::from_letter(letter)
                    .with_context(|| format!("Unknown piece letter {letter:?} in FEN {fen:?}"))?;
                let color = if letter.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let key = Key::new(file, rank)
                    .with_context(|| format!("Rank {} overflows in FEN {fen:?}", rank + 1))?;
                pieces.insert(key, Piece::new(role, color));
                file += 1;
            }
        }
    }
    trace!("Read {} pieces from FEN", pieces.len());
    Ok(pieces)
}

/** Writes the placement field of a FEN string. */
pub fn write(pieces: &Pieces) -> String {
    let mut fen = String::with_capacity(64);
    for rank in (0..8u8).rev() {
        let mut empty = 0;
        for file in 0..8u8 {
            match Key::new(file, rank).and_then(|key| pieces.get(&key)) {
                Some(piece) => {
                    if empty > 0 {
                        fen.push_str(&empty.to_string());
                        empty = 0;
                    }
                    fen.push(piece.letter());
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            fen.push_str(&empty.to_string());
        }
        if rank > 0 {
            fen.push('/');
        }
    }
    fen
}
