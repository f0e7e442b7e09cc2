//! Update function for the dashboard component.
//!
//! `MissingToken` and `ContactsLoaded` each resolve the loading state into
//! exactly one terminal phase; a failed fetch is additionally logged to the
//! console. `Logout` clears the injected session and leaves for the login
//! view.

use gloo_console::error;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

use super::messages::Msg;
use super::state::{DashboardComponent, ListingPhase};

pub fn update(
    component: &mut DashboardComponent,
    ctx: &Context<DashboardComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::MissingToken => {
            component.phase = ListingPhase::Error("No token found. Please log in.".to_string());
            true
        }
        Msg::ContactsLoaded(result) => {
            if let Err(err) = &result {
                error!(format!("Error fetching contacts: {:?}", err));
            }
            component.phase = ListingPhase::from_result(result);
            true
        }
        Msg::Logout => {
            ctx.props().session.clear();
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::AdminLogin);
            }
            false
        }
    }
}
