//! # Connect Four Engine
//!
//! A pure, synchronous Connect Four engine for a 7x6 board: gravity drops,
//! full-board win/draw evaluation, and winning-line extraction from the last
//! placed token. Boards round-trip through the stored JSON shape of 7 column
//! arrays with 6 cells each.
//!
//! ## Modules
//!
//! - [`game`] — Board, player, outcome, win-line extraction, game session
//! - [`render`] — Text rendering with winning cells highlighted
//! - [`random`] — Uniform random player
//! - [`simulate`] — Random self-play cross-checking both evaluators
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod random;
pub mod render;
pub mod simulate;
