//! Storefront WASM frontend.
//!
//! Loads the catalog (products, brands, hot drops, inspiration) from the REST
//! API, renders it into the page, mirrors the signed-in state in the header,
//! and drives the product carousel, pagination, and era banner.

pub mod api;
pub mod app;
pub mod auth;
pub mod banner;
pub mod carousel;
pub mod config;
pub mod dom;
pub mod error;
pub mod events;
pub mod loaders;
pub mod logs;
pub mod pagination;
pub mod render;
pub mod state;
pub mod storage;
pub mod toast;

use app::App;
use error::AppError;
use serde::Serialize;
use sf_api_types::{ALL_FILTER, Filter};
use std::cell::RefCell;
use tracing::info;
use wasm_bindgen::prelude::*;

thread_local! {
    // Handle for the exported functions below; handlers get their own clones.
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn current_app() -> Result<App, AppError> {
    APP.with(|a| a.borrow().clone()).ok_or(AppError::NotStarted)
}

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    let config = config::Config::resolve();
    logs::init_logging(&config.log_filter);

    init(config).await.map_err(JsValue::from)
}

/// Main initialisation sequence.
async fn init(config: config::Config) -> Result<(), AppError> {
    let doc = dom::document().ok_or(AppError::NoDocument)?;
    let els = dom::Elements::bind(&doc);

    let app = App::new(config, els);
    APP.with(|a| *a.borrow_mut() = Some(app.clone()));
    info!(api = %app.config.api_base_url, "storefront starting");

    auth::check_session_status(&app)?;
    events::bind_events(&app);
    app.start_timers();

    app.load_initial_data().await;
    Ok(())
}

// ── Exports for other scripts on the page ──

#[wasm_bindgen(js_name = loadProducts)]
pub async fn load_products(page: Option<u32>, filter: Option<String>) -> Result<(), JsValue> {
    let app = current_app()?;
    let filter = Filter::parse(filter.as_deref().unwrap_or(ALL_FILTER));
    app.load_products(page.unwrap_or(1), filter).await?;
    Ok(())
}

#[wasm_bindgen(js_name = loadBrands)]
pub async fn load_brands() -> Result<(), JsValue> {
    current_app()?.load_brands().await?;
    Ok(())
}

#[wasm_bindgen(js_name = showSuccessMessage)]
pub fn show_success_message(message: &str) -> Result<(), JsValue> {
    current_app()?.show_success(message);
    Ok(())
}

#[wasm_bindgen(js_name = showErrorMessage)]
pub fn show_error_message(message: &str) -> Result<(), JsValue> {
    current_app()?.show_error(message);
    Ok(())
}

/// The signed-in user as a plain object, or `null`.
#[wasm_bindgen(js_name = currentUser)]
pub fn current_user() -> Result<JsValue, JsValue> {
    match current_app()?.session_user() {
        Some(user) => Ok(user.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?),
        None => Ok(JsValue::NULL),
    }
}

#[wasm_bindgen]
pub fn logout() -> Result<(), JsValue> {
    auth::logout(&current_app()?)?;
    Ok(())
}

/// Cancel the carousel autoplay and banner rotation.
#[wasm_bindgen]
pub fn shutdown() -> Result<(), JsValue> {
    current_app()?.shutdown();
    Ok(())
}
