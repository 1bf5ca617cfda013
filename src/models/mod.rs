//! Configuration models loaded at startup.

pub mod config;
