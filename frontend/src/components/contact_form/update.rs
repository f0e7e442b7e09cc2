//! Update function for the contact form component.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`,
//! mutates the state, and returns whether the view should re-render.
//!
//! Key behaviors
//! - Editing a field clears that field's error only; everything else the
//!   visitor typed stays put.
//! - `Submit` runs the pure validation first; an unclean result surfaces
//!   the per-field messages and issues no network call.
//! - A clean draft is posted once; success shows the thank-you view and
//!   navigates to the admin login after a short delay.
//! - A failed request is logged to the console and leaves the form in its
//!   submitted-but-unconfirmed state. No retry, no rollback.

use gloo_console::error;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::model::contact::Qualification;

use crate::api;
use crate::routes::Route;

use super::helpers::{validate, FieldErrors};
use super::messages::Msg;
use super::state::{ContactFormComponent, SubmitPhase};

pub fn update(
    component: &mut ContactFormComponent,
    ctx: &Context<ContactFormComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::EditFullName(value) => {
            component.draft.full_name = value;
            component.errors.full_name = None;
            true
        }
        Msg::EditEmail(value) => {
            component.draft.email = value;
            component.errors.email = None;
            true
        }
        Msg::EditPhone(value) => {
            component.draft.phone = value;
            component.errors.phone = None;
            true
        }
        Msg::EditQualification(value) => {
            component.draft.qualification = Qualification::from_label(&value);
            component.errors.qualification = None;
            true
        }
        Msg::EditMessage(value) => {
            component.draft.message = value;
            true
        }
        Msg::Submit => {
            if component.phase != SubmitPhase::Idle {
                return false;
            }

            let errors = validate(&component.draft);
            if !errors.is_clean() {
                component.errors = errors;
                return true;
            }
            component.errors = FieldErrors::default();

            let Some(request) = component.draft.to_request() else {
                return false;
            };
            component.phase = SubmitPhase::Submitting;

            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::SubmitDone(api::create_contact(&request).await));
            });
            true
        }
        Msg::SubmitDone(Ok(())) => {
            component.phase = SubmitPhase::Succeeded;

            let link = ctx.link().clone();
            spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(2000).await;
                link.send_message(Msg::GoToLogin);
            });
            true
        }
        Msg::SubmitDone(Err(err)) => {
            error!(format!("Error submitting form: {:?}", err));
            component.phase = SubmitPhase::Failed;
            true
        }
        Msg::GoToLogin => {
            if let Some(navigator) = ctx.link().navigator() {
                navigator.push(&Route::AdminLogin);
            }
            false
        }
    }
}
