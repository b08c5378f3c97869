//! Page state.
//!
//! Everything that persists between events lives in one `UiState`, shared by
//! handle (`SharedState`) between the loaders and event handlers. Borrows are
//! never held across an `.await`.

use crate::carousel::Carousel;
use crate::config::Config;
use sf_api_types::{Filter, Product};
use sf_session::Session;
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedState = Rc<RefCell<UiState>>;

/// The independently loaded regions of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionKind {
    Products,
    Brands,
    HotDrops,
    Inspiration,
}

impl RegionKind {
    const COUNT: usize = 4;

    fn index(self) -> usize {
        match self {
            RegionKind::Products => 0,
            RegionKind::Brands => 1,
            RegionKind::HotDrops => 2,
            RegionKind::Inspiration => 3,
        }
    }
}

/// Stamp carried by an in-flight request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
    pub region: RegionKind,
    pub generation: u64,
}

/// Per-region monotonically increasing request counters. Only the response
/// holding the latest ticket for its region may be applied.
#[derive(Clone, Debug, Default)]
pub struct RequestGenerations {
    latest: [u64; RegionKind::COUNT],
}

impl RequestGenerations {
    pub fn issue(&mut self, region: RegionKind) -> Ticket {
        let slot = &mut self.latest[region.index()];
        *slot += 1;
        Ticket {
            region,
            generation: *slot,
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest[ticket.region.index()] == ticket.generation
    }
}

#[derive(Clone, Debug)]
pub struct UiState {
    pub session: Option<Session>,
    pub filter: Filter,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub products: Vec<Product>,
    pub carousel: Carousel,
    pub requests: RequestGenerations,
}

impl UiState {
    pub fn new(config: &Config) -> Self {
        Self {
            session: None,
            filter: Filter::All,
            page: 1,
            page_size: config.page_size,
            total_pages: config.total_pages,
            products: Vec::new(),
            carousel: Carousel::default(),
            requests: RequestGenerations::default(),
        }
    }

    pub fn shared(config: &Config) -> SharedState {
        Rc::new(RefCell::new(Self::new(config)))
    }
}
