//! Href -> route resolution
//!
//! Turns a full href (from `window.location` or a programmatic redirect)
//! into the matched pattern, handler and parameters. Updating application
//! state and rendering are left to the caller.

use crate::routes::{console_table, RouteHandler};
use crate::tenant::TenantSelection;
use crate::{Error, Result};
use console_router::{Params, RouteMatch, RouteTable};
use tracing::debug;
use url::Url;

/// A resolved navigation
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation<'t, H = RouteHandler> {
    /// Parsed location
    pub location: Url,
    /// Winning pattern
    pub pattern: &'t str,
    /// Handler registered for the pattern
    pub handler: &'t H,
    /// Captured path parameters
    pub params: Params,
}

impl<H> Navigation<'_, H> {
    /// Tenant selection named in the location's query string
    pub fn tenant(&self) -> TenantSelection {
        TenantSelection::from_url(&self.location)
    }
}

impl<'t, H> From<Navigation<'t, H>> for RouteMatch<'t, H> {
    fn from(nav: Navigation<'t, H>) -> Self {
        RouteMatch {
            pattern: nav.pattern,
            handler: nav.handler,
            params: nav.params,
        }
    }
}

/// Resolves hrefs against a route table built once at startup
#[derive(Debug, Clone)]
pub struct Navigator<H = RouteHandler> {
    table: RouteTable<H>,
}

impl Navigator<RouteHandler> {
    /// Navigator over the built-in console routes
    pub fn console() -> Result<Self> {
        Ok(Self::new(console_table()?))
    }
}

impl<H> Navigator<H> {
    pub fn new(table: RouteTable<H>) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable<H> {
        &self.table
    }

    /// Register another route; see [`RouteTable::insert`]
    pub fn insert(&mut self, pattern: impl Into<String>, handler: H) -> Result<()> {
        Ok(self.table.insert(pattern, handler)?)
    }

    /// Resolve an absolute href
    ///
    /// Returns `Ok(None)` when no route matches; the caller decides what an
    /// unmatched navigation shows.
    ///
    /// # Example
    /// ```
    /// use console_core::{Navigator, Page};
    ///
    /// let navigator = Navigator::console().unwrap();
    /// let nav = navigator
    ///     .resolve("https://console.example.com/accessors/abc/2?tenant_id=t1")
    ///     .unwrap()
    ///     .unwrap();
    ///
    /// assert_eq!(nav.pattern, "/accessors/:accessorID/:version");
    /// assert_eq!(nav.handler.page, Page::AccessorDetail);
    /// assert_eq!(nav.params.get("version"), Some("2"));
    /// assert_eq!(nav.tenant().tenant_id.as_deref(), Some("t1"));
    /// ```
    pub fn resolve(&self, href: &str) -> Result<Option<Navigation<'_, H>>> {
        let location = Url::parse(href).map_err(|source| Error::InvalidUrl {
            href: href.to_string(),
            source,
        })?;
        Ok(self.resolve_url(location))
    }

    /// Resolve an already-parsed URL
    pub fn resolve_url(&self, location: Url) -> Option<Navigation<'_, H>> {
        let Some(m) = self.table.match_url(&location) else {
            debug!(path = location.path(), "no route for location");
            return None;
        };
        debug!(path = location.path(), pattern = m.pattern, "route resolved");
        Some(Navigation {
            pattern: m.pattern,
            handler: m.handler,
            params: m.params,
            location,
        })
    }
}
