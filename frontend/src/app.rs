use yew::{html, Component, Context, Html};
use yew_router::BrowserRouter;
use yew_router::Switch;

use crate::routes::{switch, Route};
use crate::session::Session;

/// Application root. Owns the single browser-backed [`Session`] handle and
/// threads it into every route that needs it.
pub struct App {
    session: Session,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: Session::browser(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let session = self.session.clone();
        html! {
            <BrowserRouter>
                <Switch<Route> render={move |route| switch(route, session.clone())} />
            </BrowserRouter>
        }
    }
}
