//! Fetch-and-render pipelines.
//!
//! Each loader takes a request ticket for its region before fetching, and
//! applies the response only if that ticket is still the latest one. API
//! failures are handled here: products fall back to the loading placeholder,
//! the editorial regions keep whatever they showed before. Only a failure to
//! reach the shared state escapes as `Err`.

use crate::api::CatalogApi;
use crate::dom::CatalogView;
use crate::error::AppError;
use crate::pagination;
use crate::render;
use crate::state::{RegionKind, SharedState};
use sf_api_types::{Filter, ProductQuery};
use tracing::{debug, error};

pub async fn load_products<A, V>(
    api: &A,
    state: &SharedState,
    view: &V,
    page: u32,
    filter: Filter,
) -> Result<(), AppError>
where
    A: CatalogApi + ?Sized,
    V: CatalogView + ?Sized,
{
    let (ticket, query) = {
        let mut st = state.try_borrow_mut()?;
        let ticket = st.requests.issue(RegionKind::Products);
        (ticket, ProductQuery::new(page, st.page_size, filter))
    };

    let result = api.products(&query).await;

    let mut st = state.try_borrow_mut()?;
    if !st.requests.is_current(ticket) {
        debug!(page, generation = ticket.generation, "dropping stale products response");
        return Ok(());
    }

    match result {
        Ok(products) => {
            view.products().set_html(&render::products(&products));
            view.pagination()
                .set_html(&pagination::render(page, st.total_pages));
            st.products = products;
        }
        Err(err) => {
            error!(%err, page, filter = %query.filter, "error loading products");
            view.products().set_html(&render::products(&[]));
        }
    }
    Ok(())
}

pub async fn load_brands<A, V>(api: &A, state: &SharedState, view: &V) -> Result<(), AppError>
where
    A: CatalogApi + ?Sized,
    V: CatalogView + ?Sized,
{
    let ticket = state.try_borrow_mut()?.requests.issue(RegionKind::Brands);
    let result = api.brands().await;

    if !state.try_borrow()?.requests.is_current(ticket) {
        debug!(generation = ticket.generation, "dropping stale brands response");
        return Ok(());
    }
    match result {
        Ok(brands) => view.brands().set_html(&render::brands(&brands)),
        Err(err) => error!(%err, "error loading brands"),
    }
    Ok(())
}

pub async fn load_hot_drops<A, V>(api: &A, state: &SharedState, view: &V) -> Result<(), AppError>
where
    A: CatalogApi + ?Sized,
    V: CatalogView + ?Sized,
{
    let ticket = state.try_borrow_mut()?.requests.issue(RegionKind::HotDrops);
    let result = api.hot_drops().await;

    if !state.try_borrow()?.requests.is_current(ticket) {
        debug!(generation = ticket.generation, "dropping stale hot drops response");
        return Ok(());
    }
    match result {
        Ok(items) => view.hot_drops().set_html(&render::hot_drops(&items)),
        Err(err) => error!(%err, "error loading hot drops"),
    }
    Ok(())
}

pub async fn load_inspiration<A, V>(
    api: &A,
    state: &SharedState,
    view: &V,
) -> Result<(), AppError>
where
    A: CatalogApi + ?Sized,
    V: CatalogView + ?Sized,
{
    let ticket = state.try_borrow_mut()?.requests.issue(RegionKind::Inspiration);
    let result = api.inspiration().await;

    if !state.try_borrow()?.requests.is_current(ticket) {
        debug!(generation = ticket.generation, "dropping stale inspiration response");
        return Ok(());
    }
    match result {
        Ok(items) => view.inspiration().set_html(&render::inspiration(&items)),
        Err(err) => error!(%err, "error loading inspiration"),
    }
    Ok(())
}

/// Run all four loaders concurrently. Every loader runs to completion; the
/// first escaped error, if any, is returned.
pub async fn load_initial_data<A, V>(
    api: &A,
    state: &SharedState,
    view: &V,
) -> Result<(), AppError>
where
    A: CatalogApi + ?Sized,
    V: CatalogView + ?Sized,
{
    let (page, filter) = {
        let st = state.try_borrow()?;
        (st.page, st.filter.clone())
    };

    let (products, brands, hot_drops, inspiration) = futures::join!(
        load_products(api, state, view, page, filter),
        load_brands(api, state, view),
        load_hot_drops(api, state, view),
        load_inspiration(api, state, view),
    );

    products.and(brands).and(hot_drops).and(inspiration)
}
