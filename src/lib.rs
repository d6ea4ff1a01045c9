//! # Minimax Tic Tac Toe
//!
//! A two-player 4x4 Tic Tac Toe game (four in a row wins) with an optimal
//! computer opponent. The AI searches the game tree with minimax and
//! alpha-beta pruning; the terminal UI is built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, win rules, game state machine
//! - [`ai`] — Agent trait, minimax search, random baseline opponent
//! - [`ui`] — Terminal UI: cursor-driven game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
