//! Browser binding for the page core.
//!
//! ARCHITECTURE
//! ============
//! [`WebDocument`] implements the `Document` port over `web-sys`.
//! [`PageHandle`] owns the shared core, every listener it attached and the one
//! real timeout armed for the core's next deadline. Listener and timer
//! closures only hold a `Weak` reference, so dropping the handle detaches
//! everything and the core goes with it.
//!
//! Module start waits for `DOMContentLoaded` (or runs at once when the
//! document has already parsed) and wires the page with the default
//! conventions, unless the caller already wired or disposed it.
//! `initPageBehaviors` re-wires it with overrides. `validateForm` never wires
//! a page: without an active one it validates the document directly and keeps
//! its input watches at module level until the next dispose.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, NodeList,
};

use crate::behaviors::validate;
use crate::clock;
use crate::config::BehaviorConfig;
use crate::dom::Document;
use crate::error::PageError;
use crate::format::format_file_size;
use crate::lifecycle::{Lifecycle, ValidationRoute};
use crate::page::{PageCore, PageEvent};
use crate::timers::{self, ArmedTimeout, Rearm};

thread_local! {
    static ACTIVE: RefCell<Option<PageHandle>> = const { RefCell::new(None) };
    static READY: RefCell<Option<Listener>> = const { RefCell::new(None) };
    static LIFECYCLE: Cell<Lifecycle> = const { Cell::new(Lifecycle::Waiting) };
    // Conventions of the last successful init, used by detached validation.
    static LAST_CONFIG: RefCell<Option<BehaviorConfig>> = const { RefCell::new(None) };
    static DETACHED_WATCHES: RefCell<Vec<Listener>> = const { RefCell::new(Vec::new()) };
}

impl From<PageError> for JsValue {
    fn from(err: PageError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn dom_error(err: JsValue) -> PageError {
    PageError::Dom(format!("{err:?}"))
}

/// Quote `value` as a CSS string literal.
fn css_string(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

// =============================================================================
// WebDocument
// =============================================================================

pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    fn select_all(&self, scope: Option<&Element>, selector: &str) -> Vec<Element> {
        let list = match scope {
            Some(scope) => scope.query_selector_all(selector),
            None => self.document.query_selector_all(selector),
        };
        match list {
            Ok(list) => elements(&list),
            Err(err) => {
                log::warn!("query {selector} failed: {err:?}");
                Vec::new()
            }
        }
    }
}

impl Document for WebDocument {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn elements_with_id_prefix(&self, prefix: &str) -> Vec<Element> {
        self.select_all(None, &format!("[id^={}]", css_string(prefix)))
    }

    fn elements_with_class(&self, scope: Option<&Element>, class: &str) -> Vec<Element> {
        self.select_all(scope, &format!("[class~={}]", css_string(class)))
    }

    fn elements_with_attribute(&self, scope: Option<&Element>, name: &str, value: Option<&str>) -> Vec<Element> {
        let selector = match value {
            Some(value) => format!("[{name}={}]", css_string(value)),
            None => format!("[{name}]"),
        };
        self.select_all(scope, &selector)
    }

    fn previous_element_sibling(&self, el: &Element) -> Option<Element> {
        el.previous_element_sibling()
    }

    fn parent_element(&self, el: &Element) -> Option<Element> {
        el.parent_element()
    }

    fn first_descendant_with_tag(&self, el: &Element, tag: &str) -> Option<Element> {
        match el.query_selector(tag) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("query {tag} failed: {err:?}");
                None
            }
        }
    }

    fn closest_with_attribute(&self, el: &Element, name: &str, value: &str) -> Option<Element> {
        match el.closest(&format!("[{name}={}]", css_string(value))) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("closest [{name}] failed: {err:?}");
                None
            }
        }
    }

    fn tag_name(&self, el: &Element) -> String {
        el.tag_name().to_ascii_lowercase()
    }

    fn attribute(&self, el: &Element, name: &str) -> Option<String> {
        el.get_attribute(name)
    }

    fn set_attribute(&mut self, el: &Element, name: &str, value: &str) {
        if let Err(err) = el.set_attribute(name, value) {
            log::warn!("set {name} failed: {err:?}");
        }
    }

    fn has_class(&self, el: &Element, class: &str) -> bool {
        el.class_list().contains(class)
    }

    fn add_class(&mut self, el: &Element, class: &str) {
        if let Err(err) = el.class_list().add_1(class) {
            log::warn!("add class {class} failed: {err:?}");
        }
    }

    fn remove_class(&mut self, el: &Element, class: &str) {
        if let Err(err) = el.class_list().remove_1(class) {
            log::warn!("remove class {class} failed: {err:?}");
        }
    }

    fn set_text(&mut self, el: &Element, text: &str) {
        el.set_text_content(Some(text));
    }

    fn set_style(&mut self, el: &Element, property: &str, value: &str) {
        let Some(html) = el.dyn_ref::<HtmlElement>() else {
            return;
        };
        if let Err(err) = html.style().set_property(property, value) {
            log::warn!("set style {property} failed: {err:?}");
        }
    }

    fn value(&self, el: &Element) -> String {
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn selected_file_names(&self, el: &Element) -> Vec<String> {
        let Some(files) = el.dyn_ref::<HtmlInputElement>().and_then(HtmlInputElement::files) else {
            return Vec::new();
        };
        (0..files.length())
            .filter_map(|i| files.get(i))
            .map(|file| file.name())
            .collect()
    }

    fn create_element(&mut self, tag: &str) -> Option<Element> {
        match self.document.create_element(tag) {
            Ok(el) => Some(el),
            Err(err) => {
                log::warn!("create <{tag}> failed: {err:?}");
                None
            }
        }
    }

    fn append_child(&mut self, parent: &Element, child: &Element) {
        if let Err(err) = parent.append_child(child) {
            log::warn!("append failed: {err:?}");
        }
    }

    fn remove(&mut self, el: &Element) {
        el.remove();
    }
}

// =============================================================================
// Listeners and timers
// =============================================================================

/// An attached DOM listener. Dropping it detaches the callback.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        once: bool,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, PageError> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        let options = AddEventListenerOptions::new();
        options.set_once(once);
        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .map_err(dom_error)?;
        Ok(Self { target: target.clone(), kind, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("detach {} listener failed: {err:?}", self.kind);
        }
    }
}

struct Armed {
    due_ms: u64,
    fired: Rc<Cell<bool>>,
    timeout: Timeout,
}

impl Armed {
    fn state(&self) -> ArmedTimeout {
        ArmedTimeout { due_ms: self.due_ms, fired: self.fired.get() }
    }
}

struct Shared {
    core: PageCore<WebDocument>,
    origin_ms: f64,
    listeners: Vec<Listener>,
    armed: Option<Armed>,
    // A timeout must not be dropped from inside its own callback; the one that
    // just fired parks here until the next one fires.
    spent: Option<Timeout>,
}

impl Shared {
    /// Take the armed timeout off duty. A fired one is parked in `spent`.
    fn retire_armed(&mut self) {
        let Some(armed) = self.armed.take() else {
            return;
        };
        if armed.fired.get() {
            let retired = std::mem::replace(&mut self.spent, Some(armed.timeout));
            drop(retired);
        }
    }

    fn elapsed_ms(&self) -> u64 {
        let elapsed = (clock::now_ms() - self.origin_ms).max(0.0);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ms = elapsed as u64;
        ms
    }
}

fn dispatch(weak: &Weak<RefCell<Shared>>, event: PageEvent<Element>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    match shared.try_borrow_mut() {
        Ok(mut guard) => {
            let now = guard.elapsed_ms();
            guard.core.advance_to(now);
            guard.core.handle(event);
        }
        Err(_) => {
            log::warn!("re-entrant page event dropped: {event:?}");
            return;
        }
    }
    rearm(&shared);
}

fn fire_timers(weak: &Weak<RefCell<Shared>>) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    match shared.try_borrow_mut() {
        Ok(mut guard) => {
            guard.retire_armed();
            let now = guard.elapsed_ms();
            guard.core.advance_to(now);
        }
        Err(_) => {
            // The armed timeout is now marked fired, so the event's own
            // rearm replaces it instead of keeping it.
            log::warn!("timer fired during a page event; deferring to the event's rearm");
        }
    }
    rearm(&shared);
}

/// Keep exactly one real timeout armed for the core's earliest deadline.
fn rearm(shared: &Rc<RefCell<Shared>>) {
    let Ok(mut guard) = shared.try_borrow_mut() else {
        log::warn!("timer rearm skipped: page is busy");
        return;
    };
    let current = guard.armed.as_ref().map(Armed::state);
    match timers::plan_rearm(current, guard.core.next_deadline()) {
        Rearm::Keep => {}
        Rearm::Disarm => guard.retire_armed(),
        Rearm::Arm { due_ms } => {
            guard.retire_armed();
            let delay = u32::try_from(due_ms.saturating_sub(guard.elapsed_ms())).unwrap_or(u32::MAX);
            let weak = Rc::downgrade(shared);
            let fired = Rc::new(Cell::new(false));
            let flag = Rc::clone(&fired);
            let timeout = Timeout::new(delay, move || {
                flag.set(true);
                fire_timers(&weak);
            });
            guard.armed = Some(Armed { due_ms, fired, timeout });
        }
    }
}

// =============================================================================
// PageHandle
// =============================================================================

/// A wired page. Dropping or disposing it detaches every listener and
/// cancels every pending timer.
pub struct PageHandle {
    shared: Rc<RefCell<Shared>>,
}

/// Wire every behavior onto `document`.
pub fn init_page_behaviors(document: web_sys::Document, config: BehaviorConfig) -> Result<PageHandle, PageError> {
    let core = PageCore::init(WebDocument::new(document), config, clock::current_year());
    let shared = Rc::new(RefCell::new(Shared {
        core,
        origin_ms: clock::now_ms(),
        listeners: Vec::new(),
        armed: None,
        spent: None,
    }));
    let weak = Rc::downgrade(&shared);

    let mut listeners = Vec::new();
    {
        let guard = shared.borrow();
        let registry = guard.core.registry();
        for (id, toggle) in registry.toggles() {
            let weak = weak.clone();
            listeners.push(Listener::attach(toggle, "click", false, move |_| {
                dispatch(&weak, PageEvent::ToggleActivated(id));
            })?);
        }
        for (id, control) in registry.dismiss_controls() {
            let weak = weak.clone();
            listeners.push(Listener::attach(&control.control, "click", false, move |_| {
                dispatch(&weak, PageEvent::DismissActivated(id));
            })?);
        }
        for (id, input) in registry.file_inputs() {
            let weak = weak.clone();
            listeners.push(Listener::attach(input, "change", false, move |_| {
                dispatch(&weak, PageEvent::FileChanged(id));
            })?);
        }
    }
    shared.borrow_mut().listeners = listeners;
    rearm(&shared);
    Ok(PageHandle { shared })
}

impl PageHandle {
    /// Validate `form` and arm a one-time `input` listener per invalid field.
    pub fn validate_form(&self, form: &Element) -> bool {
        let report = match self.shared.try_borrow_mut() {
            Ok(mut guard) => {
                let now = guard.elapsed_ms();
                guard.core.advance_to(now);
                guard.core.validate_form(form)
            }
            Err(_) => {
                log::warn!("validateForm skipped: page is busy");
                return false;
            }
        };

        let weak = Rc::downgrade(&self.shared);
        let mut armed = Vec::with_capacity(report.watches.len());
        for watch in &report.watches {
            let weak = weak.clone();
            let field = watch.field.clone();
            match Listener::attach(&watch.field, "input", true, move |_| {
                dispatch(&weak, PageEvent::FieldInput(field.clone()));
            }) {
                Ok(listener) => armed.push(listener),
                Err(err) => log::warn!("could not watch #{}: {err}", watch.field.id()),
            }
        }
        match self.shared.try_borrow_mut() {
            Ok(mut guard) => guard.listeners.extend(armed),
            Err(_) => log::warn!("input watches dropped: page is busy"),
        }
        rearm(&self.shared);
        report.valid
    }

    /// Detach everything. Same as dropping the handle.
    pub fn dispose(self) {
        drop(self);
    }
}

impl Drop for PageHandle {
    fn drop(&mut self) {
        match self.shared.try_borrow_mut() {
            Ok(mut guard) => {
                guard.core.dispose();
                guard.armed = None;
                guard.listeners.clear();
            }
            Err(_) => log::warn!("page handle dropped during a page event"),
        }
    }
}

// =============================================================================
// JS exports
// =============================================================================

fn browser_document() -> Result<web_sys::Document, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)?.document().ok_or(PageError::NoDocument)
}

fn boot(config: BehaviorConfig) -> Result<(), PageError> {
    let handle = init_page_behaviors(browser_document()?, config.clone())?;
    let previous = ACTIVE.with(|active| active.borrow_mut().replace(handle));
    drop(previous);
    LAST_CONFIG.with(|last| *last.borrow_mut() = Some(config));
    LIFECYCLE.with(|state| state.set(state.get().wired()));
    Ok(())
}

fn dispose_active() {
    let previous = ACTIVE.with(|active| active.borrow_mut().take());
    drop(previous);
    let watches = DETACHED_WATCHES.with(|watches| std::mem::take(&mut *watches.borrow_mut()));
    drop(watches);
    LIFECYCLE.with(|state| state.set(state.get().disposed()));
}

/// Validate against the live document without a wired page.
///
/// Each invalid field gets a one-time `input` listener that clears its error
/// through a fresh `WebDocument`; the listeners live until the next dispose.
fn validate_detached(form: &Element) -> bool {
    let document = match browser_document() {
        Ok(document) => document,
        Err(err) => {
            log::error!("validateForm failed: {err}");
            return false;
        }
    };
    let config = LAST_CONFIG.with(|last| last.borrow().clone()).unwrap_or_default();
    let report = validate::validate_form(&mut WebDocument::new(document.clone()), form, &config, None::<fn()>);

    for watch in report.watches {
        let field = watch.field.clone();
        let document = document.clone();
        let config = config.clone();
        let attached = Listener::attach(&field, "input", true, move |_| {
            let cleared = validate::clear_field_error(&mut WebDocument::new(document.clone()), &watch, &config);
            log::trace!("detached watch on #{} consumed (cleared: {cleared})", watch.field.id());
        });
        match attached {
            Ok(listener) => DETACHED_WATCHES.with(|watches| watches.borrow_mut().push(listener)),
            Err(err) => log::warn!("could not watch #{}: {err}", field.id()),
        }
    }
    report.valid
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).map_err(|err| JsValue::from_str(&err.to_string()))?;

    let document = browser_document()?;
    if document.ready_state() == "loading" {
        let listener = Listener::attach(&document, "DOMContentLoaded", true, |_| {
            let state = LIFECYCLE.with(Cell::get);
            if !state.may_auto_wire() {
                log::debug!("document ready; page already {state:?}, not auto-wiring");
                return;
            }
            if let Err(err) = boot(BehaviorConfig::default()) {
                log::error!("page behaviors failed to start: {err}");
            }
        })?;
        READY.with(|ready| *ready.borrow_mut() = Some(listener));
    } else {
        boot(BehaviorConfig::default())?;
    }
    Ok(())
}

/// Re-wire the page, optionally overriding conventions with a JSON object.
#[wasm_bindgen(js_name = initPageBehaviors)]
pub fn init_page_behaviors_js(config: Option<String>) -> Result<(), JsValue> {
    let config = match config.as_deref() {
        Some(raw) => BehaviorConfig::from_json(raw)?,
        None => BehaviorConfig::default(),
    };
    dispose_active();
    boot(config)?;
    Ok(())
}

#[wasm_bindgen(js_name = disposePageBehaviors)]
pub fn dispose_page_behaviors_js() {
    dispose_active();
}

/// Fractional byte counts are truncated. Negative or non-finite input, and
/// sizes past the GB tier, return `undefined`.
#[wasm_bindgen(js_name = formatFileSize)]
pub fn format_file_size_js(bytes: f64) -> Option<String> {
    if !bytes.is_finite() || bytes < 0.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = bytes.trunc() as u64;
    format_file_size(whole)
}

/// Check required fields in `form`; `callback` runs only when all are filled.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form_js(form: &Element, callback: Option<js_sys::Function>) -> bool {
    let routed = match LIFECYCLE.with(Cell::get).validation_route() {
        ValidationRoute::Page => ACTIVE.with(|active| active.borrow().as_ref().map(|handle| handle.validate_form(form))),
        ValidationRoute::Detached => None,
    };
    let valid = match routed {
        Some(valid) => valid,
        None => validate_detached(form),
    };
    if valid {
        if let Some(callback) = callback {
            if let Err(err) = callback.call0(&JsValue::NULL) {
                log::warn!("validateForm callback failed: {err:?}");
            }
        }
    }
    valid
}
