//! Core types and definitions for the intercept simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, and constants.
//! It has no dependency on the solver or any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod events;
pub mod state;
pub mod types;
