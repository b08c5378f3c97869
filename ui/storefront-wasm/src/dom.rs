//! DOM element bindings.
//!
//! Every element the storefront touches is resolved once at startup into an
//! `Option` handle. A page that lacks an element simply gets `None`, and the
//! operations on that region become no-ops.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, Window};

// ── Helpers ──

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn body() -> Option<HtmlElement> {
    document()?.body()
}

pub fn by_id_typed<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query_typed<T: JsCast>(doc: &Document, selector: &str) -> Option<T> {
    doc.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    match doc.query_selector_all(selector) {
        Ok(nl) => collect_elements(&nl),
        Err(_) => Vec::new(),
    }
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(nl) => collect_elements(&nl),
        Err(_) => Vec::new(),
    }
}

fn collect_elements(nl: &web_sys::NodeList) -> Vec<Element> {
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

/// Nearest ancestor (or self) of an event target matching `selector`.
pub fn closest_from_event(event: &web_sys::Event, selector: &str) -> Option<Element> {
    let target = event.target()?;
    let el = target.dyn_ref::<Element>()?;
    el.closest(selector).ok().flatten()
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str) {
    let _ = el.class_list().toggle(cls);
}

pub fn set_display(el: &HtmlElement, shown: bool) {
    let value = if shown { "inline-block" } else { "none" };
    let _ = el.style().set_property("display", value);
}

pub fn set_transform(el: &HtmlElement, transform: &str) {
    let _ = el.style().set_property("transform", transform);
}

pub fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

pub fn navigate(href: &str) {
    if let Some(w) = window() {
        let _ = w.location().set_href(href);
    }
}

// ── Regions ──

/// A render target for a markup fragment.
pub trait Region {
    fn set_html(&self, html: &str);
}

impl Region for Element {
    fn set_html(&self, html: &str) {
        self.set_inner_html(html);
    }
}

impl Region for HtmlElement {
    fn set_html(&self, html: &str) {
        self.set_inner_html(html);
    }
}

impl<R: Region> Region for Option<R> {
    fn set_html(&self, html: &str) {
        if let Some(region) = self {
            region.set_html(html);
        }
    }
}

/// The render targets the catalog loaders write into.
pub trait CatalogView {
    fn products(&self) -> &dyn Region;
    fn pagination(&self) -> &dyn Region;
    fn brands(&self) -> &dyn Region;
    fn hot_drops(&self) -> &dyn Region;
    fn inspiration(&self) -> &dyn Region;
}

// ── Elements struct ──

/// All DOM element references used by the storefront.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone, Default)]
pub struct Elements {
    // Header / auth
    pub login_link: Option<HtmlElement>,
    pub signup_link: Option<HtmlElement>,
    pub admin_link: Option<HtmlElement>,
    pub logout_btn: Option<HtmlElement>,

    // Catalog
    pub products_carousel: Option<HtmlElement>,
    pub prev_btn: Option<HtmlElement>,
    pub next_btn: Option<HtmlElement>,
    pub pagination: Option<Element>,
    pub filter_tabs: Vec<Element>,

    // Editorial
    pub brands_grid: Option<Element>,
    pub hot_drops: Option<Element>,
    pub inspiration: Option<Element>,
    pub era_image: Option<HtmlImageElement>,
}

impl Elements {
    /// Resolve all DOM references. Call once after the document has loaded.
    pub fn bind(doc: &Document) -> Elements {
        Elements {
            login_link: query_typed(doc, r#"a[href="login.html"]"#),
            signup_link: query_typed(doc, r#"a[href="signup.html"]"#),
            admin_link: by_id_typed(doc, "adminLink"),
            logout_btn: by_id_typed(doc, "logoutBtn"),

            products_carousel: by_id_typed(doc, "productsCarousel"),
            prev_btn: by_id_typed(doc, "prevBtn"),
            next_btn: by_id_typed(doc, "nextBtn"),
            pagination: by_id_typed(doc, "pagination"),
            filter_tabs: query_all(doc, ".tab-btn"),

            brands_grid: by_id_typed(doc, "brandsGrid"),
            hot_drops: query_typed(doc, ".hot-drops-carousel"),
            inspiration: query_typed(doc, ".inspiration-carousel"),
            era_image: by_id_typed(doc, "eraImage"),
        }
    }

    /// Number of product cards currently rendered in the carousel.
    pub fn product_card_count(&self) -> usize {
        self.products_carousel
            .as_ref()
            .map(|c| query_all_within(c, ".product-card").len())
            .unwrap_or(0)
    }
}

impl CatalogView for Elements {
    fn products(&self) -> &dyn Region {
        &self.products_carousel
    }

    fn pagination(&self) -> &dyn Region {
        &self.pagination
    }

    fn brands(&self) -> &dyn Region {
        &self.brands_grid
    }

    fn hot_drops(&self) -> &dyn Region {
        &self.hot_drops
    }

    fn inspiration(&self) -> &dyn Region {
        &self.inspiration
    }
}
