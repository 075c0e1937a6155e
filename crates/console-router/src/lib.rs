//! console-router: Path-pattern route table for the console SPA
//!
//! Compiles an ordered list of `{path, handler}` entries once at startup and
//! resolves browser pathnames against it on every navigation.
//!
//! ## Path Syntax
//! - `/users` - Literal segments (case-insensitive)
//! - `/users/:userID` - Named parameter (captures one segment)
//! - `/accessors/:accessorID/:version` - Several parameters
//!
//! ## Selection
//! Every route whose pattern matches the pathname is a candidate. Candidates
//! are ranked by [`segment_score`]: the number of `/`-separated positions
//! where the pattern text equals the pathname, or 0 when the segment counts
//! differ. The highest score wins; on a tie the route registered first wins.
//! A literal route therefore beats a parameter route of the same shape
//! regardless of registration order.
//!
//! ## Example
//! ```
//! use console_router::RouteTable;
//!
//! let table = RouteTable::build([
//!     ("/users", 0),
//!     ("/users/create", 1),
//!     ("/users/:userID", 2),
//! ])
//! .unwrap();
//!
//! assert_eq!(*table.match_path("/users/create").unwrap().handler, 1);
//!
//! let m = table.match_path("/users/u-42").unwrap();
//! assert_eq!(*m.handler, 2);
//! assert_eq!(m.params.get("userID"), Some("u-42"));
//!
//! assert!(table.match_path("/totally/unknown/path").is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all)]

pub mod error;
pub mod params;
pub mod pattern;
pub mod score;
pub mod table;

pub use error::{Error, Result};
pub use params::Params;
pub use pattern::CompiledPattern;
pub use score::segment_score;
pub use table::{CompiledRoute, Location, RouteEntry, RouteMatch, RouteTable};
