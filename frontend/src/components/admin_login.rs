//! Admin login view.
//!
//! Exchanges credentials for a bearer token. On success the token is
//! persisted through the injected [`Session`] and the view navigates to
//! the dashboard; on failure the server's message (or a generic one) is
//! shown as a single banner and nothing is persisted.

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use common::requests::LoginRequest;

use crate::api::{self, ApiError};
use crate::routes::Route;
use crate::session::Session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginPhase {
    Unauthenticated,
    LoggingIn,
    Authenticated,
    LoginFailed(String),
}

pub enum Msg {
    EditEmail(String),
    EditPassword(String),
    Submit,
    LoginDone(Result<String, ApiError>),
}

#[derive(Properties, PartialEq)]
pub struct AdminLoginProps {
    #[prop_or_default]
    pub session: Session,
}

pub struct AdminLoginComponent {
    email: String,
    password: String,
    phase: LoginPhase,
}

impl Component for AdminLoginComponent {
    type Message = Msg;
    type Properties = AdminLoginProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            phase: LoginPhase::Unauthenticated,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::EditEmail(value) => {
                self.email = value;
                true
            }
            Msg::EditPassword(value) => {
                self.password = value;
                true
            }
            Msg::Submit => {
                if self.phase == LoginPhase::LoggingIn {
                    return false;
                }
                self.phase = LoginPhase::LoggingIn;

                let request = LoginRequest {
                    email: self.email.clone(),
                    password: self.password.clone(),
                };
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::LoginDone(api::login(&request).await));
                });
                true
            }
            Msg::LoginDone(Ok(token)) => {
                ctx.props().session.set(&token);
                self.phase = LoginPhase::Authenticated;
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::AdminDashboard);
                }
                true
            }
            Msg::LoginDone(Err(err)) => {
                self.phase = LoginPhase::LoginFailed(err.user_message("Login failed"));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <div class="login-page">
                <form
                    class="login-card"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <h2>{"Admin Login"}</h2>
                    {
                        if let LoginPhase::LoginFailed(message) = &self.phase {
                            html! { <p class="login-error">{ message.clone() }</p> }
                        } else {
                            html! {}
                        }
                    }
                    <input
                        type="email"
                        placeholder="Email"
                        value={self.email.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::EditEmail(input.value())
                        })}
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        value={self.password.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::EditPassword(input.value())
                        })}
                    />
                    <button type="submit" disabled={self.phase == LoginPhase::LoggingIn}>
                        {"Login"}
                    </button>
                </form>
            </div>
        }
    }
}
