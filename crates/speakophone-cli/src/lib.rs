//! Speakophone CLI library.
//!
//! This crate provides the command implementations and logging setup behind
//! the `speakophone` binary: speaking text, narrating dice rolls, baking
//! phrase sets and dumping conditioned clips.

pub mod commands;
pub mod logging;
