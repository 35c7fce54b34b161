pub mod config;
pub mod definitions;
pub mod engine;
pub mod fen;
pub mod game;
pub mod hold;
pub mod notify;
pub mod premove;
pub mod rules;
pub mod staging;
pub mod state;
pub mod utils;
