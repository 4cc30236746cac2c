// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod fields;
pub mod model;
pub mod prereq;
pub mod progress;
pub mod runner;
pub mod scrape;
pub mod store;
