//! SkillsSwap DAO terminal dashboard.
//!
//! A sidebar of pages, one mounted view at a time, and static records
//! rendered as cards. `main.rs` owns the terminal; everything else lives here
//! so integration tests can drive the app without one.

pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod input;
pub mod modules;
pub mod ui;

pub use app::{App, ViewId};
