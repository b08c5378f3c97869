//! Signed-in / guest header state.

use crate::app::App;
use crate::dom::{self, Elements};
use crate::error::AppError;
use crate::state::UiState;
use sf_session::{Affordances, SessionStore};
use tracing::{info, warn};

/// Read the persisted session into `state`. A record that cannot be read
/// counts as no session.
pub fn restore_session(store: &dyn SessionStore, state: &mut UiState) -> Affordances {
    let session = match sf_session::load(store) {
        Ok(session) => session,
        Err(err) => {
            warn!("ignoring persisted session: {err:#}");
            None
        }
    };
    let shown = Affordances::for_session(session.as_ref());
    state.session = session;
    shown
}

/// Drop the persisted and in-memory session.
pub fn end_session(store: &dyn SessionStore, state: &mut UiState) -> Affordances {
    if let Err(err) = sf_session::clear(store) {
        warn!("failed to clear persisted session: {err:#}");
    }
    state.session = None;
    Affordances::GUEST
}

pub fn apply_affordances(els: &Elements, shown: Affordances) {
    let toggles = [
        (&els.login_link, shown.login_link),
        (&els.signup_link, shown.signup_link),
        (&els.logout_btn, shown.logout_button),
        (&els.admin_link, shown.admin_link),
    ];
    for (el, visible) in toggles {
        if let Some(el) = el {
            dom::set_display(el, visible);
        }
    }
}

pub fn check_session_status(app: &App) -> Result<(), AppError> {
    let shown = {
        let mut st = app.state.try_borrow_mut()?;
        restore_session(app.store.as_ref(), &mut st)
    };
    apply_affordances(&app.els, shown);
    Ok(())
}

pub fn logout(app: &App) -> Result<(), AppError> {
    let shown = {
        let mut st = app.state.try_borrow_mut()?;
        end_session(app.store.as_ref(), &mut st)
    };
    apply_affordances(&app.els, shown);
    info!("signed out");
    dom::navigate(&app.config.home_page);
    Ok(())
}
