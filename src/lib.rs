//! Snake in the terminal.
//!
//! The game itself (`game`, `snake`, `apple`, `geometry`) does no I/O: the
//! driver feeds it one optional command per tick and draws the `Snapshot`
//! it hands back.

pub mod apple;
pub mod config;
pub mod game;
pub mod geometry;
pub mod input;
pub mod snake;
pub mod snapshot;
pub mod terminal;
pub mod ui;
