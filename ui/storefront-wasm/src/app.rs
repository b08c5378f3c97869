//! Application handle.
//!
//! `App` bundles the configuration, bound elements, shared state, and the
//! API client. It is cheap to clone and every event closure owns one.
//! Scheduled tasks are owned here too, so `shutdown` cancels them.

use crate::api::HttpCatalog;
use crate::banner::BannerRotator;
use crate::config::Config;
use crate::dom::{self, Elements};
use crate::error::AppError;
use crate::loaders;
use crate::state::{SharedState, UiState};
use crate::storage::LocalSessionStore;
use crate::toast::{self, ToastKind};
use gloo_timers::callback::Interval;
use sf_api_types::Filter;
use sf_session::{SessionStore, SessionUser};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, error};

#[derive(Clone)]
pub struct App {
    pub config: Rc<Config>,
    pub els: Elements,
    pub state: SharedState,
    pub api: Rc<HttpCatalog>,
    pub store: Rc<dyn SessionStore>,
    tasks: Rc<RefCell<Vec<Interval>>>,
}

impl App {
    pub fn new(config: Config, els: Elements) -> Self {
        Self {
            api: Rc::new(HttpCatalog::new(&config.api_base_url)),
            state: UiState::shared(&config),
            config: Rc::new(config),
            els,
            store: Rc::new(LocalSessionStore),
            tasks: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn session_user(&self) -> Option<SessionUser> {
        self.state
            .try_borrow()
            .ok()
            .and_then(|st| st.session.as_ref().map(|s| s.user.clone()))
    }

    pub async fn load_products(&self, page: u32, filter: Filter) -> Result<(), AppError> {
        loaders::load_products(self.api.as_ref(), &self.state, &self.els, page, filter).await
    }

    pub async fn load_brands(&self) -> Result<(), AppError> {
        loaders::load_brands(self.api.as_ref(), &self.state, &self.els).await
    }

    pub async fn load_initial_data(&self) {
        let result = loaders::load_initial_data(self.api.as_ref(), &self.state, &self.els).await;
        if let Err(err) = result {
            error!(%err, "error loading initial data");
            self.show_error("Failed to load data. Please refresh the page.");
        }
    }

    /// Reload products in the background.
    pub fn spawn_load_products(&self, page: u32, filter: Filter) {
        let app = self.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = app.load_products(page, filter).await {
                error!(%err, "error loading products");
            }
        });
    }

    /// Go to `page` keeping the current filter.
    pub fn change_page(&self, page: u32) {
        let filter = match self.state.try_borrow_mut() {
            Ok(mut st) => {
                st.page = page;
                st.filter.clone()
            }
            Err(err) => {
                error!(%err, "cannot change page");
                return;
            }
        };
        self.spawn_load_products(page, filter);
    }

    /// Switch category filter and return to the first page.
    pub fn select_filter(&self, filter: Filter) {
        match self.state.try_borrow_mut() {
            Ok(mut st) => {
                st.filter = filter.clone();
                st.page = 1;
            }
            Err(err) => {
                error!(%err, "cannot change filter");
                return;
            }
        }
        self.spawn_load_products(1, filter);
    }

    pub fn show_error(&self, message: &str) {
        toast::show(ToastKind::Error, message, self.config.toast_lifetime_ms);
    }

    pub fn show_success(&self, message: &str) {
        toast::show(ToastKind::Success, message, self.config.toast_lifetime_ms);
    }

    // ── Carousel ──

    pub fn next_slide(&self) {
        let count = self.els.product_card_count();
        let Ok(mut st) = self.state.try_borrow_mut() else {
            return;
        };
        if st.carousel.advance(count) {
            if let Some(strip) = &self.els.products_carousel {
                st.carousel.apply(strip);
            }
        }
    }

    pub fn previous_slide(&self) {
        let count = self.els.product_card_count();
        let Ok(mut st) = self.state.try_borrow_mut() else {
            return;
        };
        if st.carousel.retreat(count) {
            if let Some(strip) = &self.els.products_carousel {
                st.carousel.apply(strip);
            }
        }
    }

    /// Narrow viewports show the strip from the start.
    pub fn handle_resize(&self) {
        let Some(width) = dom::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
        else {
            return;
        };
        if width > self.config.mobile_breakpoint_px {
            return;
        }
        if let Some(strip) = &self.els.products_carousel {
            dom::set_transform(strip, "translateX(0)");
            if let Ok(mut st) = self.state.try_borrow_mut() {
                st.carousel.reset();
            }
        }
    }

    // ── Scheduled tasks ──

    /// Start carousel autoplay and, if the page has an era image, the banner
    /// rotation.
    pub fn start_timers(&self) {
        let mut tasks = self.tasks.borrow_mut();

        let app = self.clone();
        tasks.push(Interval::new(self.config.carousel_interval_ms, move || {
            app.next_slide();
        }));

        if let Some(image) = self.els.era_image.clone() {
            let mut banner = BannerRotator::default();
            tasks.push(Interval::new(self.config.banner_interval_ms, move || {
                if let Some(src) = banner.next_image() {
                    image.set_src(src);
                }
            }));
        }
        debug!(count = tasks.len(), "scheduled tasks started");
    }

    /// Cancel every scheduled task.
    pub fn shutdown(&self) {
        let cancelled = self.tasks.borrow_mut().drain(..).count();
        debug!(cancelled, "scheduled tasks cancelled");
    }
}
