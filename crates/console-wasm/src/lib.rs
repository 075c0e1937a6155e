//! console-wasm: Console route matching compiled to WebAssembly
//!
//! Builds route tables from JS, resolves `window.location`, and drives
//! history navigation (`pushState` / `replaceState` + `popstate`).

pub mod router;

#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::*;

pub use router::{flat_param, flatten_params, ConsoleResolution, Found, HandlerId, HandlerRouter};
