//! Route manifests
//!
//! A route table described in TOML:
//!
//! ```toml
//! [[routes]]
//! path = "/users"
//! page = "users"
//! guard = "tenant_specific"
//!
//! [[routes]]
//! path = "/users/:userID"
//! page = "user_detail"
//! guard = "tenant_specific"
//! ```
//!
//! `guard` defaults to `none`. Entries keep file order, which is the
//! registration order of the compiled table.

use crate::routes::{console_routes, Guard, Page, RouteHandler};
use crate::{Error, Result};
use console_router::{RouteEntry, RouteTable};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// One `[[routes]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ManifestRoute {
    /// Route pattern, e.g. `/accessors/:accessorID/:version`
    pub path: String,

    /// Page rendered for the route
    pub page: Page,

    /// Access guard around the page
    #[serde(default)]
    pub guard: Guard,
}

impl ManifestRoute {
    pub fn handler(&self) -> RouteHandler {
        RouteHandler::new(self.page, self.guard)
    }
}

/// Ordered list of routes
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteManifest {
    pub routes: Vec<ManifestRoute>,
}

impl RouteManifest {
    /// The built-in console registry as a manifest
    pub fn console() -> Self {
        Self {
            routes: console_routes()
                .iter()
                .map(|(path, handler)| ManifestRoute {
                    path: (*path).to_string(),
                    page: handler.page,
                    guard: handler.guard,
                })
                .collect(),
        }
    }

    /// Parse a manifest from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let manifest: RouteManifest = toml::from_str(s)?;
        manifest.warn_duplicates();
        Ok(manifest)
    }

    /// Load and parse a manifest file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ManifestIo {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), routes = manifest.routes.len(), "route manifest loaded");
        Ok(manifest)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Paths registered more than once, in first-seen order
    ///
    /// Later entries replace the handler of earlier ones when compiled.
    pub fn duplicate_paths(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.routes
            .iter()
            .map(|r| r.path.as_str())
            .filter(|path| !seen.insert(*path) && reported.insert(*path))
            .collect()
    }

    /// Compile into a route table
    pub fn into_table(self) -> Result<RouteTable<RouteHandler>> {
        let entries = self.routes.into_iter().map(|r| {
            let handler = r.handler();
            RouteEntry::new(r.path, handler)
        });
        Ok(RouteTable::build(entries)?)
    }

    fn warn_duplicates(&self) {
        for path in self.duplicate_paths() {
            warn!(path, "route registered more than once; the last entry wins");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[routes]]
path = "/users"
page = "users"
guard = "tenant_specific"

[[routes]]
path = "/users/:userID"
page = "user_detail"
guard = "tenant_specific"

[[routes]]
path = "/iam"
page = "iam"
"#;

    #[test]
    fn test_parse() {
        let manifest = RouteManifest::from_toml_str(SAMPLE).unwrap();
        assert_eq!(manifest.routes.len(), 3);
        assert_eq!(manifest.routes[1].path, "/users/:userID");
        assert_eq!(manifest.routes[1].page, Page::UserDetail);
        assert_eq!(manifest.routes[1].guard, Guard::TenantSpecific);
        // guard omitted
        assert_eq!(manifest.routes[2].guard, Guard::None);
    }

    #[test]
    fn test_into_table() {
        let table = RouteManifest::from_toml_str(SAMPLE)
            .unwrap()
            .into_table()
            .unwrap();
        let m = table.match_path("/users/u-7").unwrap();
        assert_eq!(m.handler.page, Page::UserDetail);
        assert_eq!(m.params.get("userID"), Some("u-7"));
    }

    #[test]
    fn test_unknown_page_rejected() {
        let err = RouteManifest::from_toml_str(
            r#"
[[routes]]
path = "/x"
page = "not_a_page"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::ManifestParse(_)));
        assert!(err.to_string().contains("not_a_page"));
    }

    #[test]
    fn test_unknown_guard_rejected() {
        let err = RouteManifest::from_toml_str(
            r#"
[[routes]]
path = "/x"
page = "home"
guard = "everyone"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::ManifestParse(_)));
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = RouteManifest::from_toml_str("").unwrap();
        assert!(manifest.routes.is_empty());
        assert!(manifest.into_table().unwrap().is_empty());
    }

    #[test]
    fn test_bad_pattern_surfaces_on_compile() {
        let manifest = RouteManifest::from_toml_str(
            r#"
[[routes]]
path = "/users/:"
page = "users"
"#,
        )
        .unwrap();
        let err = manifest.into_table().unwrap_err();
        assert!(matches!(
            err,
            Error::Route(console_router::Error::MissingParameterName { .. })
        ));
    }

    #[test]
    fn test_duplicate_paths_last_wins() {
        let manifest = RouteManifest::from_toml_str(
            r#"
[[routes]]
path = "/status"
page = "status"

[[routes]]
path = "/status"
page = "events_log"

[[routes]]
path = "/status"
page = "home"
"#,
        )
        .unwrap();
        assert_eq!(manifest.duplicate_paths(), vec!["/status"]);

        let table = manifest.into_table().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.match_path("/status").unwrap().handler.page, Page::Home);
    }

    #[test]
    fn test_console_manifest_round_trip() {
        let manifest = RouteManifest::console();
        assert!(manifest.duplicate_paths().is_empty());

        let text = manifest.to_toml_string().unwrap();
        let parsed = RouteManifest::from_toml_str(&text).unwrap();
        assert_eq!(parsed, manifest);
    }

    #[test]
    fn test_load_missing_file() {
        let err = RouteManifest::load(Path::new("/nonexistent/routes.toml")).unwrap_err();
        assert!(matches!(err, Error::ManifestIo { .. }));
    }

    #[test]
    fn test_load_file() {
        let path = std::env::temp_dir().join(format!("console-routes-{}.toml", std::process::id()));
        fs::write(&path, SAMPLE).unwrap();
        let manifest = RouteManifest::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(manifest.routes.len(), 3);
    }
}
