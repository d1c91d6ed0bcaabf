//! clip-arbiter - clipboard event coordination
//!
//! This crate decides, for every cut/copy/paste event delivered by a host,
//! whether the application's internal clipboard or the platform's external
//! clipboard supplies the data, and whether the host's native action is
//! suppressed.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Clipboard events, clipboard data, configuration, and errors
//! - **Application**: The clipboard coordinator and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (clipboard cell, focus tracking, arboard, etc.)
//! - **CLI**: Command-line interface, replay scripts, and config management

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
