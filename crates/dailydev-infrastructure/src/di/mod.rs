//! Dependency wiring
//!
//! The composition root: repositories and crypto adapters are built from
//! configuration and handed to the application services as `Arc<dyn Trait>`.

pub mod bootstrap;

pub use bootstrap::{AppContext, init_app, init_app_with_repositories};
