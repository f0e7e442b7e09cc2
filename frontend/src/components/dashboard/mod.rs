//! Admin dashboard: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, and view rendering.
//!
//! The listing request is issued once, on first render, and only after the
//! injected session confirms a token exists. Without a token the view
//! settles into its error state without touching the backend.

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::DashboardComponent;

use crate::session::Session;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    #[prop_or_default]
    pub session: Session,
}

impl Component for DashboardComponent {
    type Message = Msg;
    type Properties = DashboardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        DashboardComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        match ctx.props().session.get() {
            None => ctx.link().send_message(Msg::MissingToken),
            Some(token) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::ContactsLoaded(api::fetch_contacts(&token).await));
                });
            }
        }
    }
}
