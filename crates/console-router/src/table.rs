//! Route table and best-match lookup

use crate::{segment_score, CompiledPattern, Params, Result};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Anything that exposes a URL pathname
pub trait Location {
    fn pathname(&self) -> &str;
}

impl Location for str {
    fn pathname(&self) -> &str {
        self
    }
}

impl Location for String {
    fn pathname(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "url")]
impl Location for url::Url {
    fn pathname(&self) -> &str {
        self.path()
    }
}

/// A `{path, handler}` entry handed to [`RouteTable::build`]
#[derive(Debug, Clone)]
pub struct RouteEntry<H> {
    pub path: String,
    pub handler: H,
}

impl<H> RouteEntry<H> {
    pub fn new(path: impl Into<String>, handler: H) -> Self {
        Self {
            path: path.into(),
            handler,
        }
    }
}

impl<S: Into<String>, H> From<(S, H)> for RouteEntry<H> {
    fn from((path, handler): (S, H)) -> Self {
        Self::new(path, handler)
    }
}

/// Compiled pattern plus the handler registered for it
#[derive(Debug, Clone)]
pub struct CompiledRoute<H> {
    compiled: CompiledPattern,
    handler: H,
}

impl<H> CompiledRoute<H> {
    pub fn pattern(&self) -> &str {
        self.compiled.as_str()
    }

    pub fn param_names(&self) -> &[String] {
        self.compiled.param_names()
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn compiled(&self) -> &CompiledPattern {
        &self.compiled
    }
}

/// Route match result
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'t, H> {
    /// The winning pattern as registered
    pub pattern: &'t str,
    /// Handler registered for the pattern
    pub handler: &'t H,
    /// Captured path parameters
    pub params: Params,
}

/// Pattern -> compiled route mapping
///
/// Routes are kept in registration order. Re-registering a pattern replaces
/// its handler but keeps the position of the first registration, which is
/// the order ties are broken in.
#[derive(Debug, Clone)]
pub struct RouteTable<H> {
    routes: Vec<CompiledRoute<H>>,
    index: HashMap<String, usize>,
}

impl<H> RouteTable<H> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Compile an ordered list of entries
    ///
    /// # Example
    /// ```
    /// use console_router::RouteTable;
    ///
    /// let table = RouteTable::build([
    ///     ("/mutators", "list"),
    ///     ("/mutators/:mutatorID/:version", "detail"),
    /// ])
    /// .unwrap();
    ///
    /// let m = table.match_path("/mutators/abc/3").unwrap();
    /// assert_eq!(m.pattern, "/mutators/:mutatorID/:version");
    /// assert_eq!(*m.handler, "detail");
    /// assert_eq!(m.params.get("mutatorID"), Some("abc"));
    /// assert_eq!(m.params.get("version"), Some("3"));
    /// ```
    pub fn build<I, E>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = E>,
        E: Into<RouteEntry<H>>,
    {
        let mut table = Self::new();
        for entry in entries {
            let RouteEntry { path, handler } = entry.into();
            table.insert(path, handler)?;
        }
        debug!(routes = table.len(), "route table built");
        Ok(table)
    }

    /// Register a single pattern
    pub fn insert(&mut self, pattern: impl Into<String>, handler: H) -> Result<()> {
        let pattern = pattern.into();
        let compiled = CompiledPattern::new(&pattern)?;
        let route = CompiledRoute { compiled, handler };

        match self.index.get(&pattern) {
            Some(&slot) => {
                debug!(pattern = %pattern, "replacing handler for duplicate pattern");
                self.routes[slot] = route;
            }
            None => {
                self.index.insert(pattern, self.routes.len());
                self.routes.push(route);
            }
        }
        Ok(())
    }

    /// Find the best route for a URL
    pub fn match_url<L: Location + ?Sized>(&self, location: &L) -> Option<RouteMatch<'_, H>> {
        self.match_path(location.pathname())
    }

    /// Find the best route for a pathname
    ///
    /// Among matching routes the highest [`segment_score`] wins. A score of
    /// zero never wins, and on equal scores the earlier registration is kept.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_, H>> {
        let mut best: Option<RouteMatch<'_, H>> = None;
        let mut best_score = 0;

        for route in &self.routes {
            let score = segment_score(route.pattern(), path);
            if score <= best_score {
                continue;
            }
            let Some(params) = route.compiled.captures(path) else {
                continue;
            };
            trace!(pattern = route.pattern(), path, score, "better candidate");
            best_score = score;
            best = Some(RouteMatch {
                pattern: route.pattern(),
                handler: &route.handler,
                params,
            });
        }

        if best.is_none() {
            trace!(path, "no route matched");
        }
        best
    }

    /// Look up a route by its exact pattern text
    pub fn get(&self, pattern: &str) -> Option<&CompiledRoute<H>> {
        self.index.get(pattern).map(|&slot| &self.routes[slot])
    }

    /// Registered patterns in registration order
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.pattern())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledRoute<H>> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl<H> Default for RouteTable<H> {
    fn default() -> Self {
        Self::new()
    }
}
