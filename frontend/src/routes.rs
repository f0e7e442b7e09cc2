//! Route table and the session guard for the protected dashboard.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::admin_login::AdminLoginComponent;
use crate::components::contact_form::ContactFormComponent;
use crate::components::dashboard::DashboardComponent;
use crate::session::Session;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin/dashboard")]
    AdminDashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route, session: Session) -> Html {
    match route {
        Route::Home => html! { <ContactFormComponent /> },
        Route::AdminLogin => html! { <AdminLoginComponent {session} /> },
        Route::AdminDashboard => html! {
            <RequireSession session={session.clone()}>
                <DashboardComponent {session} />
            </RequireSession>
        },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct RequireSessionProps {
    #[prop_or_default]
    pub session: Session,
    #[prop_or_default]
    pub children: Children,
}

/// Gate for protected routes: checks that a session token exists before the
/// wrapped view activates, and bounces to the login view otherwise. The
/// wrapped view still validates the token against the backend itself.
pub struct RequireSession;

impl Component for RequireSession {
    type Message = ();
    type Properties = RequireSessionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if ctx.props().session.get().is_some() {
            html! { <>{ ctx.props().children.clone() }</> }
        } else {
            html! { <Redirect<Route> to={Route::AdminLogin} /> }
        }
    }
}
