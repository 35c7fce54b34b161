use crate::core::definitions::{Color, Key, Pieces, Role};
use crate::core::utils::{file_distance, is_in_diagonal_line, is_in_straight_line, rank_distance};

/** Signature of a premove destination calculator: pieces, origin, castling allowed. */
pub type PremoveFn = fn(&Pieces, Key, bool) -> Vec<Key>;

/** Squares the piece on `origin` could reach on an empty board, ignoring turn order. */
pub fn destinations(pieces: &Pieces, origin: Key, castle: bool) -> Vec<Key> {
    let Some(piece) = pieces.get(&origin) else {
        return Vec::new();
    };
    let rook_files = match piece.role {
        Role::King => rook_files(pieces, piece.color),
        _ => Vec::new(),
    };
    Key::all()
        .filter(|&target| target != origin)
        .filter(|&target| match piece.role {
            Role::Pawn => pawn(piece.color, origin, target),
            Role::Knight => knight(origin, target),
            Role::Bishop => is_in_diagonal_line(origin, target),
            Role::Rook => is_in_straight_line(origin, target),
            Role::Queen => is_in_diagonal_line(origin, target) || is_in_straight_line(origin, target),
            Role::King => king(piece.color, &rook_files, castle, origin, target),
        })
        .collect()
}

fn pawn(color: Color, from: Key, to: Key) -> bool {
    if file_distance(from, to) > 1 {
        return false;
    }
    let (from_rank, to_rank) = (from.rank() as i8, to.rank() as i8);
    match color {
        Color::White => {
            to_rank == from_rank + 1 || (from_rank <= 1 && to_rank == from_rank + 2 && from.file() == to.file())
        }
        Color::Black => {
            to_rank == from_rank - 1 || (from_rank >= 6 && to_rank == from_rank - 2 && from.file() == to.file())
        }
    }
}

fn knight(from: Key, to: Key) -> bool {
    let (file_diff, rank_diff) = (file_distance(from, to), rank_distance(from, to));
    (file_diff == 1 && rank_diff == 2) || (file_diff == 2 && rank_diff == 1)
}

fn king(color: Color, rook_files: &[u8], castle: bool, from: Key, to: Key) -> bool {
    if file_distance(from, to) < 2 && rank_distance(from, to) < 2 {
        return true;
    }
    castle
        && from.rank() == to.rank()
        && from.rank() == color.back_rank()
        && ((from.file() == 4 && (to.file() == 2 || to.file() == 6)) || rook_files.contains(&to.file()))
}

/** Files of the own rooks still standing on the back rank. */
fn rook_files(pieces: &Pieces, color: Color) -> Vec<u8> {
    pieces
        .iter()
        .filter(|(key, piece)| {
            piece.color == color && piece.role == Role::Rook && key.rank() == color.back_rank()
        })
        .map(|(key, _)| key.file())
        .collect()
}
