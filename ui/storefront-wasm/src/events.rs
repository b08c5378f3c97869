//! Event binding.
//!
//! Wires the page's listeners once at startup. Rendered cards and pagination
//! buttons are replaced on every load, so their clicks are delegated to the
//! region containers and dispatched on `data-*` attributes.

use crate::app::App;
use crate::auth;
use crate::dom;
use crate::state::SharedState;
use sf_api_types::Filter;
use sf_session::{GuardedAction, require_session};
use tracing::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlButtonElement};

/// Attach a page-lifetime listener.
fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    if let Err(err) = target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        error!(?err, event, "failed to add listener");
        return;
    }
    cb.forget();
}

/// Helper: attach click handler that receives the app.
macro_rules! on_click {
    ($el:expr, $app:expr, $handler:expr) => {{
        let app = $app.clone();
        listen($el, "click", move |event: web_sys::Event| $handler(&app, &event));
    }};
}

/// Bind all UI event listeners. Call once after init.
pub fn bind_events(app: &App) {
    let els = &app.els;

    // ── Filter tabs ──
    for tab in &els.filter_tabs {
        let app2 = app.clone();
        let this_tab = tab.clone();
        listen(tab, "click", move |_| {
            for t in &app2.els.filter_tabs {
                dom::remove_class(t, "active");
            }
            dom::add_class(&this_tab, "active");
            let filter = Filter::parse(&this_tab.get_attribute("data-filter").unwrap_or_default());
            app2.select_filter(filter);
        });
    }

    // ── Auth ──
    if let Some(btn) = &els.logout_btn {
        on_click!(btn, app, |app: &App, _: &web_sys::Event| {
            if let Err(err) = auth::logout(app) {
                error!(%err, "logout failed");
            }
        });
    }

    // ── Carousel ──
    if let Some(btn) = &els.prev_btn {
        on_click!(btn, app, |app: &App, _: &web_sys::Event| app.previous_slide());
    }
    if let Some(btn) = &els.next_btn {
        on_click!(btn, app, |app: &App, _: &web_sys::Event| app.next_slide());
    }

    // ── Delegated region clicks ──
    if let Some(pagination) = &els.pagination {
        on_click!(pagination, app, on_pagination_click);
    }
    if let Some(carousel) = &els.products_carousel {
        on_click!(carousel, app, on_products_click);
    }
    if let Some(inspiration) = &els.inspiration {
        on_click!(inspiration, app, on_inspiration_click);
    }
    if let Some(brands) = &els.brands_grid {
        on_click!(brands, app, on_brands_click);
    }

    // ── Viewport ──
    if let Some(window) = dom::window() {
        let app2 = app.clone();
        listen(&window, "resize", move |_| app2.handle_resize());
    }
}

fn on_pagination_click(app: &App, event: &web_sys::Event) {
    let Some(btn) = dom::closest_from_event(event, "button[data-page]") else {
        return;
    };
    let page = btn
        .get_attribute("data-page")
        .and_then(|p| p.parse::<u32>().ok());
    if let Some(page) = page {
        app.change_page(page);
    }
}

fn on_products_click(app: &App, event: &web_sys::Event) {
    if let Some(btn) = dom::closest_from_event(event, ".wishlist-btn") {
        toggle_wishlist(&app.state, &btn, dom::alert);
    }
}

fn on_inspiration_click(app: &App, event: &web_sys::Event) {
    if let Some(btn) = dom::closest_from_event(event, ".follow-btn") {
        follow_user(&app.state, &btn, dom::alert);
    }
}

fn on_brands_click(_app: &App, event: &web_sys::Event) {
    if let Some(card) = dom::closest_from_event(event, ".brand-card") {
        let brand = card.get_attribute("data-brand").unwrap_or_default();
        info!(%brand, "filtering by brand");
    }
}

/// Card buttons the guarded actions change.
trait ActionButton {
    fn data(&self, name: &str) -> String;
    fn toggle_active(&self);
    fn mark_following(&self);
}

impl ActionButton for Element {
    fn data(&self, name: &str) -> String {
        self.get_attribute(name).unwrap_or_default()
    }

    fn toggle_active(&self) {
        dom::toggle_class(self, "active");
    }

    fn mark_following(&self) {
        self.set_text_content(Some("Following"));
        if let Some(button) = self.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(true);
        }
    }
}

/// Decide whether a guarded action may run. A state that cannot be read
/// counts as signed out.
fn guard(state: &SharedState, action: GuardedAction) -> Result<(), &'static str> {
    let st = state.try_borrow().map_err(|_| action.login_prompt())?;
    require_session(st.session.as_ref(), action).map(|_| ())
}

fn toggle_wishlist<B: ActionButton>(state: &SharedState, btn: &B, prompt: impl FnOnce(&str)) {
    if let Err(msg) = guard(state, GuardedAction::Wishlist) {
        prompt(msg);
        return;
    }
    btn.toggle_active();
    let product_id = btn.data("data-product-id");
    info!(%product_id, "toggled wishlist");
}

fn follow_user<B: ActionButton>(state: &SharedState, btn: &B, prompt: impl FnOnce(&str)) {
    if let Err(msg) = guard(state, GuardedAction::Follow) {
        prompt(msg);
        return;
    }
    let user = btn.data("data-user");
    info!(%user, "following user");
    btn.mark_following();
}
