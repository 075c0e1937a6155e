//! Router - handler-id routing and console resolution for the JS side
//!
//! Matching lives in `console-router` / `console-core`. This module adapts
//! results to flat, JS-friendly shapes: handlers are `u32` ids the page
//! maps to render functions, and parameters are `[name, value, ...]`.

use console_core::{Navigation, Navigator, Result, RouteHandler};
use console_router::{Params, RouteMatch};

/// Opaque handler identifier chosen by the JS side
pub type HandlerId = u32;

/// Flatten params into `[name, value, name, value, ...]`
pub fn flatten_params(params: Params) -> Vec<String> {
    params.into_iter().flat_map(|(k, v)| [k, v]).collect()
}

/// Look up `name` in flattened params
pub fn flat_param<'a>(params: &'a [String], name: &str) -> Option<&'a str> {
    params
        .chunks_exact(2)
        .find(|pair| pair[0] == name)
        .map(|pair| pair[1].as_str())
}

/// Match result with flattened params
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Found {
    pub found: bool,
    pub handler_id: HandlerId,
    pub pattern: String,
    pub params: Vec<String>,
}

impl Found {
    fn missing() -> Self {
        Self::default()
    }
}

impl From<Option<RouteMatch<'_, HandlerId>>> for Found {
    fn from(m: Option<RouteMatch<'_, HandlerId>>) -> Self {
        match m {
            Some(m) => Found {
                found: true,
                handler_id: *m.handler,
                pattern: m.pattern.to_string(),
                params: flatten_params(m.params),
            },
            None => Found::missing(),
        }
    }
}

/// Route table keyed by handler id
#[derive(Debug, Clone)]
pub struct HandlerRouter {
    inner: Navigator<HandlerId>,
}

impl HandlerRouter {
    pub fn new() -> Self {
        Self {
            inner: Navigator::new(Default::default()),
        }
    }

    /// Register a pattern; a repeated pattern takes the new id
    pub fn insert(&mut self, pattern: &str, handler_id: HandlerId) -> Result<()> {
        self.inner.insert(pattern, handler_id)
    }

    /// Match a pathname
    pub fn find(&self, path: &str) -> Found {
        self.inner.table().match_path(path).into()
    }

    /// Match an absolute href
    pub fn find_href(&self, href: &str) -> Result<Found> {
        Ok(self.inner.resolve(href)?.map(RouteMatch::from).into())
    }

    pub fn len(&self) -> usize {
        self.inner.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.table().is_empty()
    }
}

impl Default for HandlerRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Console route resolution with names instead of enums
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleResolution {
    pub page: &'static str,
    pub guard: &'static str,
    pub pattern: String,
    pub params: Vec<String>,
    pub tenant_id: Option<String>,
    pub company_id: Option<String>,
}

impl From<Navigation<'_, RouteHandler>> for ConsoleResolution {
    fn from(nav: Navigation<'_, RouteHandler>) -> Self {
        let tenant = nav.tenant();
        ConsoleResolution {
            page: nav.handler.page.as_str(),
            guard: nav.handler.guard.as_str(),
            pattern: nav.pattern.to_string(),
            params: flatten_params(nav.params),
            tenant_id: tenant.tenant_id,
            company_id: tenant.company_id,
        }
    }
}

/// Resolve `href` against the console registry
pub fn resolve_console(navigator: &Navigator, href: &str) -> Result<Option<ConsoleResolution>> {
    Ok(navigator.resolve(href)?.map(ConsoleResolution::from))
}
