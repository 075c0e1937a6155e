//! WASM bindings for JavaScript interop

use crate::router::{self, ConsoleResolution, Found, HandlerRouter};
use console_core::tenant::last_viewed_tenant_key;
use console_core::{Navigator, TenantSelection};
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{PopStateEvent, PopStateEventInit, Window};

/// Element whose scroll position is saved in history state
const PAGE_CONTENT_ID: &str = "pageContent";

fn to_js(err: console_core::Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

#[cfg(feature = "console_error_panic_hook")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

// ============================================================================
// Router
// ============================================================================

/// WASM-exposed Router
#[wasm_bindgen]
pub struct WasmRouter {
    inner: HandlerRouter,
}

#[wasm_bindgen]
impl WasmRouter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: HandlerRouter::new(),
        }
    }

    /// Insert a route; throws if the pattern does not compile
    pub fn insert(&mut self, path: &str, handler_id: u32) -> Result<(), JsValue> {
        self.inner.insert(path, handler_id).map_err(to_js)
    }

    /// Find a route for a pathname
    pub fn find(&self, path: &str) -> RouteMatch {
        self.inner.find(path).into()
    }

    /// Find a route for an absolute href; throws on an invalid URL
    pub fn find_href(&self, href: &str) -> Result<RouteMatch, JsValue> {
        self.inner.find_href(href).map(Into::into).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn length(&self) -> usize {
        self.inner.len()
    }
}

impl Default for WasmRouter {
    fn default() -> Self {
        Self::new()
    }
}

/// Route match result for WASM
#[wasm_bindgen]
pub struct RouteMatch {
    pub found: bool,
    pub handler_id: u32,
    pattern: String,
    params: Vec<String>,
}

#[wasm_bindgen]
impl RouteMatch {
    #[wasm_bindgen(getter)]
    pub fn pattern(&self) -> String {
        self.pattern.clone()
    }

    /// Flattened `[name, value, ...]` pairs
    #[wasm_bindgen(getter)]
    pub fn params(&self) -> Vec<String> {
        self.params.clone()
    }

    /// Value of a single parameter
    pub fn param(&self, name: &str) -> Option<String> {
        router::flat_param(&self.params, name).map(str::to_string)
    }
}

impl From<Found> for RouteMatch {
    fn from(found: Found) -> Self {
        Self {
            found: found.found,
            handler_id: found.handler_id,
            pattern: found.pattern,
            params: found.params,
        }
    }
}

/// Match the current `window.location`
#[wasm_bindgen]
pub fn match_location(router: &WasmRouter) -> Result<RouteMatch, JsValue> {
    let href = window()?.location().href()?;
    router.find_href(&href)
}

// ============================================================================
// Console registry
// ============================================================================

/// Resolver over the built-in console routes
#[wasm_bindgen]
pub struct ConsoleRouter {
    inner: Navigator,
}

#[wasm_bindgen]
impl ConsoleRouter {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<ConsoleRouter, JsValue> {
        Ok(Self {
            inner: Navigator::console().map_err(to_js)?,
        })
    }

    /// Resolve an absolute href; `undefined` when nothing matches
    pub fn resolve(&self, href: &str) -> Result<Option<ConsoleRoute>, JsValue> {
        router::resolve_console(&self.inner, href)
            .map(|r| r.map(Into::into))
            .map_err(to_js)
    }
}

/// Resolved console route
#[wasm_bindgen]
pub struct ConsoleRoute {
    inner: ConsoleResolution,
}

#[wasm_bindgen]
impl ConsoleRoute {
    /// Page name, e.g. `accessor_detail`
    #[wasm_bindgen(getter)]
    pub fn page(&self) -> String {
        self.inner.page.to_string()
    }

    /// Guard name, e.g. `tenant_specific`
    #[wasm_bindgen(getter)]
    pub fn guard(&self) -> String {
        self.inner.guard.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn pattern(&self) -> String {
        self.inner.pattern.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn params(&self) -> Vec<String> {
        self.inner.params.clone()
    }

    pub fn param(&self, name: &str) -> Option<String> {
        router::flat_param(&self.inner.params, name).map(str::to_string)
    }

    #[wasm_bindgen(getter)]
    pub fn tenant_id(&self) -> Option<String> {
        self.inner.tenant_id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn company_id(&self) -> Option<String> {
        self.inner.company_id.clone()
    }
}

impl From<ConsoleResolution> for ConsoleRoute {
    fn from(inner: ConsoleResolution) -> Self {
        Self { inner }
    }
}

// ============================================================================
// Tenant selection
// ============================================================================

/// Tenant selection for WASM
#[wasm_bindgen]
pub struct WasmTenantSelection {
    tenant_id: Option<String>,
    company_id: Option<String>,
}

#[wasm_bindgen]
impl WasmTenantSelection {
    #[wasm_bindgen(getter)]
    pub fn tenant_id(&self) -> Option<String> {
        self.tenant_id.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn company_id(&self) -> Option<String> {
        self.company_id.clone()
    }
}

/// Read `tenant_id` / `company_id` from an href
#[wasm_bindgen]
pub fn tenant_from_href(href: &str) -> Result<WasmTenantSelection, JsValue> {
    let TenantSelection {
        tenant_id,
        company_id,
    } = TenantSelection::from_href(href).map_err(to_js)?;
    Ok(WasmTenantSelection {
        tenant_id,
        company_id,
    })
}

/// Last tenant viewed for `company_id`, from `localStorage`
#[wasm_bindgen]
pub fn last_viewed_tenant(company_id: &str) -> Result<Option<String>, JsValue> {
    match window()?.local_storage()? {
        Some(storage) => storage.get_item(&last_viewed_tenant_key(company_id)),
        None => Ok(None),
    }
}

/// Store the tenant named by the current location as its company's last
/// viewed tenant. Storage failures are logged and do not stop navigation.
fn remember_tenant(window: &Window) {
    let stored = window.location().href().and_then(|href| {
        let selection = TenantSelection::from_href(&href).map_err(to_js)?;
        let Some((key, tenant_id)) = selection.last_viewed_entry() else {
            return Ok(());
        };
        match window.local_storage()? {
            Some(storage) => storage.set_item(&key, tenant_id),
            None => Ok(()),
        }
    });
    if let Err(err) = stored {
        web_sys::console::warn_1(&err);
    }
}

// ============================================================================
// History
// ============================================================================

fn scroll_state(scroll_y: Option<i32>) -> Result<JsValue, JsValue> {
    let state = js_sys::Object::new();
    let value = scroll_y.map(JsValue::from).unwrap_or(JsValue::UNDEFINED);
    js_sys::Reflect::set(&state, &JsValue::from_str("scrollY"), &value)?;
    Ok(state.into())
}

/// Navigate to `href` and notify `popstate` listeners
///
/// Without `replace`, the current entry is rewritten to remember the page
/// scroll position before the new entry is pushed.
#[wasm_bindgen]
pub fn redirect(href: &str, replace: bool) -> Result<(), JsValue> {
    debug!(href, replace, "redirect");
    let window = window()?;
    let history = window.history()?;
    let scroll_y = window
        .document()
        .and_then(|doc| doc.get_element_by_id(PAGE_CONTENT_ID))
        .map(|el| el.scroll_top());

    if replace {
        history.replace_state_with_url(&scroll_state(Some(0))?, "", Some(href))?;
    } else {
        let current = window.location().href()?;
        history.replace_state_with_url(&scroll_state(scroll_y)?, "", Some(&current))?;
        history.push_state_with_url(&scroll_state(Some(0))?, "", Some(href))?;
    }
    remember_tenant(&window);

    let init = PopStateEventInit::new();
    init.set_state(&scroll_state(scroll_y)?);
    let event = PopStateEvent::new_with_event_init_dict("popstate", &init)?;
    window.dispatch_event(&event)?;
    Ok(())
}

/// Active `popstate` subscription
#[wasm_bindgen]
pub struct PopStateListener {
    window: Window,
    closure: Closure<dyn FnMut()>,
}

#[wasm_bindgen]
impl PopStateListener {
    /// Remove the listener
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for PopStateListener {
    fn drop(&mut self) {
        let removed = self
            .window
            .remove_event_listener_with_callback("popstate", self.closure.as_ref().unchecked_ref());
        if let Err(err) = removed {
            web_sys::console::error_1(&err);
        }
    }
}

/// Call `callback(match)` for the current location and after every `popstate`
///
/// Takes ownership of the router. The last viewed tenant is recorded before
/// each call. Dropping the returned listener removes it.
#[wasm_bindgen]
pub fn start_listening(
    router: WasmRouter,
    callback: js_sys::Function,
) -> Result<PopStateListener, JsValue> {
    let window = window()?;
    debug!(routes = router.length(), "listening for popstate");

    let notify = {
        let window = window.clone();
        move || -> Result<(), JsValue> {
            remember_tenant(&window);
            let href = window.location().href()?;
            let found = router.find_href(&href)?;
            callback.call1(&JsValue::NULL, &JsValue::from(found))?;
            Ok(())
        }
    };

    notify()?;

    let closure = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = notify() {
            web_sys::console::error_1(&err);
        }
    });
    window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;

    Ok(PopStateListener { window, closure })
}
