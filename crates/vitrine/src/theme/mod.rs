//! Theme module: the slot contract, registry, loaders and per-session context.
//!
//! This module is split into:
//! - `types`: package and slot component types (no I/O)
//! - `config`: theme configuration with deep-merge semantics
//! - `registry`: write-once catalog resolving slugs to packages
//! - `loader` / `manifest`: how packages are produced (memory, disk)
//! - `context`: the `idle → loading → ready | error` state machine
//! - `boundary`: per-slot error containment
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use vitrine::theme::{ThemeContext, ThemeRegistry};
//!
//! // Register themes once at startup
//! let mut builder = ThemeRegistry::builder();
//! vitrine::kits::register_builtin_themes(&mut builder)?;
//! let registry = Arc::new(builder.build());
//!
//! // One context per tenant session
//! let context = ThemeContext::new(registry);
//! context.set_theme("travelpass").await?;
//! let html = context.render(&props, &i18n)?.into_markup();
//! ```

mod boundary;
mod config;
mod context;
mod contract;
mod error;
mod loader;
mod manifest;
mod registry;
mod types;

pub use boundary::*;
pub use config::*;
pub use context::*;
pub use contract::*;
pub use error::*;
pub use loader::*;
pub use manifest::*;
pub use registry::*;
pub use types::*;
