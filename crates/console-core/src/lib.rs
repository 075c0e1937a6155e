//! console-core: Console routing shared between WASM and Native
//!
//! - [`routes`] - the console's route registry (pattern -> page + guard)
//! - [`manifest`] - route tables loaded from TOML
//! - [`navigation`] - href resolution against a route table
//! - [`tenant`] - tenant selection read from URL query strings
//!
//! ## Features
//! - `native` - `logging::init` via tracing-subscriber

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod manifest;
pub mod navigation;
pub mod routes;
pub mod tenant;

#[cfg(feature = "native")]
pub mod logging;

// Re-exports
pub use error::{Error, Result};
pub use manifest::{ManifestRoute, RouteManifest};
pub use navigation::{Navigation, Navigator};
pub use routes::{console_routes, console_table, Guard, Page, RouteHandler};
pub use tenant::TenantSelection;

pub use console_router::{Params, RouteMatch, RouteTable};
