use serde::{Deserialize, Serialize};

use crate::core::definitions::{CheckSignal, Color, Dests, Key, MovableColor};
use crate::core::fen;
use crate::core::state::BoardState;

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /** Piece placement, "start" for the initial position. */
    pub fen: Option<String>,
    pub orientation: Option<Color>,
    pub turn_color: Option<Color>,
    pub check: Option<CheckSignal>,
    pub last_move: Option<(Key, Key)>,
    pub selected: Option<Key>,
    pub auto_castle: Option<bool>,
    pub movable: Option<MovableConfig>,
    pub premovable: Option<PremovableConfig>,
    pub predroppable: Option<PredroppableConfig>,
    pub draggable: Option<ToggleConfig>,
    pub selectable: Option<ToggleConfig>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MovableConfig {
    pub free: Option<bool>,
    pub color: Option<MovableColor>,
    pub dests: Option<Dests>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PremovableConfig {
    pub enabled: Option<bool>,
    pub castle: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PredroppableConfig {
    pub enabled: Option<bool>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ToggleConfig {
    pub enabled: Option<bool>,
}

impl BoardState {
    pub fn from_config(config: Config) -> anyhow::Result<BoardState> {
        let mut state = BoardState::default();
        state.configure(config)?;
        Ok(state)
    }

    /** Applies every field present in `config`, leaving the rest untouched.
     * Fails without touching the state if the FEN can't be read. */
    pub fn configure(&mut self, config: Config) -> anyhow::Result<()> {
        let pieces = config.fen.as_deref().map(fen::read).transpose()?;
        if let Some(pieces) = pieces {
            self.pieces = pieces;
            self.movable.dropped = None;
        }
        if let Some(orientation) = config.orientation {
            self.orientation = orientation;
        }
        if let Some(turn_color) = config.turn_color {
            self.turn_color = turn_color;
        }
        if let Some(check) = config.check {
            self.set_check(check);
        }
        if let Some(last_move) = config.last_move {
            self.last_move = Some(last_move);
        }
        if let Some(auto_castle) = config.auto_castle {
            self.auto_castle = auto_castle;
        }
        if let Some(movable) = config.movable {
            if let Some(free) = movable.free {
                self.movable.free = free;
            }
            if let Some(color) = movable.color {
                self.movable.color = Some(color);
            }
            if let Some(dests) = movable.dests {
                self.movable.dests = Some(dests);
            }
        }
        if let Some(premovable) = config.premovable {
            if let Some(enabled) = premovable.enabled {
                self.premovable.enabled = enabled;
            }
            if let Some(castle) = premovable.castle {
                self.premovable.castle = castle;
            }
        }
        if let Some(enabled) = config.predroppable.and_then(|predroppable| predroppable.enabled) {
            self.predroppable.enabled = enabled;
        }
        if let Some(enabled) = config.draggable.and_then(|draggable| draggable.enabled) {
            self.draggable.enabled = enabled;
        }
        if let Some(enabled) = config.selectable.and_then(|selectable| selectable.enabled) {
            self.selectable.enabled = enabled;
        }
        if let Some(selected) = config.selected {
            self.set_selected(selected);
        }
        Ok(())
    }
}
