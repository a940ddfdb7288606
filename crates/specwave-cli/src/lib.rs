//! SpecWave CLI library.
//!
//! Command implementations live here so they can be exercised by tests;
//! the `specwave` binary is a thin clap front end over
//! [`commands::generate`] and [`commands::spectrum`].

pub mod commands;
pub mod input;
pub mod output;
