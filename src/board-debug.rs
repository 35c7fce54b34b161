use std::env;

use anyhow::{bail, Context};
use board_state::{BoardState, Config, Key};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use rand::seq::IteratorRandom;

/** Usage: board-debug <fen|start> [e2e4 | random=N]...
 * Moves are played in free mode for whichever side is to move. */
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Vec<String> = env::args().collect();
    let Some(fen) = args.get(1) else {
        bail!("Usage: board-debug <fen|start> [e2e4 | random=N]...");
    };
    let mut state = BoardState::from_config(Config {
        fen: Some(fen.clone()),
        ..Default::default()
    })?;
    state.events.on_move = Some(Box::new(|origin, dest, captured| {
        info!("move {origin}{dest} captured: {captured:?}")
    }));
    state.movable.events.after = Some(Box::new(|origin, dest, metadata| {
        debug!("after {origin}{dest} {metadata:?}")
    }));

    for token in &args[2..] {
        if let Some(count) = token.strip_prefix("random=") {
            let count: usize = count
                .parse()
                .with_context(|| format!("Bad random move count {count:?}"))?;
            for _ in 0..count {
                if !random_move(&mut state) {
                    warn!("{} has nothing to move", state.turn_color);
                    break;
                }
                state.run_deferred();
            }
        } else {
            let (origin, dest) = parse_move(token)?;
            if !state.user_move(origin, dest) {
                bail!("Move {token} was rejected");
            }
            state.run_deferred();
        }
    }

    print_board(&state);
    println!("fen: {}", state.fen());
    println!("turn: {}", state.turn_color);
    println!("score: {}", state.score());
    println!("material: {:?}", state.material_diff());
    Ok(())
}

fn parse_move(token: &str) -> anyhow::Result<(Key, Key)> {
    if token.len() != 4 || !token.is_ascii() {
        bail!("Move should look like e2e4, got {token:?}");
    }
    Ok((token[0..2].parse()?, token[2..4].parse()?))
}

/** Plays a random geometric move of the side to move. */
fn random_move(state: &mut BoardState) -> bool {
    let turn = state.turn_color;
    let chosen = state
        .pieces
        .iter()
        .filter(|(_, piece)| piece.color == turn)
        .flat_map(|(origin, _)| {
            state
                .premove_dests(*origin)
                .into_iter()
                .map(move |dest| (*origin, dest))
        })
        .filter(|(_, dest)| state.pieces.get(dest).map_or(true, |piece| piece.color != turn))
        .choose(&mut rand::thread_rng());
    match chosen {
        Some((origin, dest)) => state.user_move(origin, dest),
        None => false,
    }
}

fn print_board(state: &BoardState) {
    for rank in (0..8u8).rev() {
        let row: String = (0..8u8)
            .map(|file| {
                Key::new(file, rank)
                    .and_then(|key| state.pieces.get(&key))
                    .map_or('.', |piece| piece.letter())
            })
            .collect();
        println!("{} {}", rank + 1, row);
    }
    println!("  abcdefgh");
}
