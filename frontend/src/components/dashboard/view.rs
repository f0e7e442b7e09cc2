//! View rendering for the admin dashboard.
//!
//! One table, one row per contact with the five values in order, an
//! explicit "No contacts found." row for an empty listing, and a single
//! banner for errors. Loading, error, and data are never shown together.

use yew::prelude::*;

use common::model::contact::Contact;

use super::messages::Msg;
use super::state::{DashboardComponent, ListingPhase};

pub fn view(component: &DashboardComponent, ctx: &Context<DashboardComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="dashboard-page">
            <div class="dashboard-header">
                <h2>{"Contact Details"}</h2>
                <button class="logout-btn" onclick={link.callback(|_| Msg::Logout)}>
                    {"Log out"}
                </button>
            </div>
            { build_body(component) }
        </div>
    }
}

fn build_body(component: &DashboardComponent) -> Html {
    match &component.phase {
        ListingPhase::Loading => html! {
            <div class="dashboard-loading">{"Loading..."}</div>
        },
        ListingPhase::Error(message) => html! {
            <div class="dashboard-error">{ message.clone() }</div>
        },
        ListingPhase::Empty => build_table(html! {
            <tr>
                <td colspan="5" class="empty-row">{"No contacts found."}</td>
            </tr>
        }),
        ListingPhase::Loaded(contacts) => {
            build_table(contacts.iter().map(build_row).collect::<Html>())
        }
    }
}

fn build_table(body: Html) -> Html {
    html! {
        <div class="dashboard-table-wrap">
            <table class="dashboard-table">
                <thead>
                    <tr>
                        <th>{"Full Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Phone"}</th>
                        <th>{"Qualification"}</th>
                        <th>{"Message"}</th>
                    </tr>
                </thead>
                <tbody>
                    { body }
                </tbody>
            </table>
        </div>
    }
}

fn build_row(contact: &Contact) -> Html {
    html! {
        <tr>
            <td>{ contact.full_name.clone() }</td>
            <td>{ contact.email.clone() }</td>
            <td>{ contact.phone.clone() }</td>
            <td>{ contact.qualification.clone() }</td>
            <td>{ contact.message.clone().unwrap_or_default() }</td>
        </tr>
    }
}
