//! View rendering for the public contact form.
//!
//! While the form is live (`Idle`, `Submitting`, `Failed`) it renders the
//! five fields with their inline errors; once the submission is confirmed
//! (`Succeeded`) it is permanently replaced by a static thank-you block
//! for the lifetime of the view.

use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::model::contact::Qualification;

use super::messages::Msg;
use super::state::{ContactFormComponent, SubmitPhase};

pub fn view(component: &ContactFormComponent, ctx: &Context<ContactFormComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="contact-page">
            <div class="contact-card">
                {
                    if component.phase == SubmitPhase::Succeeded {
                        build_thank_you()
                    } else {
                        build_form(component, link)
                    }
                }
            </div>
        </div>
    }
}

fn build_form(component: &ContactFormComponent, link: &Scope<ContactFormComponent>) -> Html {
    let locked = component.phase != SubmitPhase::Idle;

    html! {
        <>
            <h1 class="contact-title">{"Let's Connect"}</h1>
            <p class="contact-subtitle">
                {"Let's align our constellations! Reach out and let the magic of collaboration illuminate our skies."}
            </p>
            <form onsubmit={link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::Submit
            })}>
                { text_field("fullName", "Full Name *", "Full Name", &component.draft.full_name,
                    &component.errors.full_name, link.callback(on_input(Msg::EditFullName))) }
                { text_field("email", "Email *", "Email", &component.draft.email,
                    &component.errors.email, link.callback(on_input(Msg::EditEmail))) }
                { text_field("phone", "Phone Number *", "Phone Number", &component.draft.phone,
                    &component.errors.phone, link.callback(on_input(Msg::EditPhone))) }
                { build_qualification_select(component, link) }
                <div class="form-field">
                    <label for="message">{"Message"}</label>
                    <textarea
                        id="message"
                        value={component.draft.message.clone()}
                        placeholder="Message"
                        rows={4}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            Msg::EditMessage(input.value())
                        })}
                    />
                </div>
                <button type="submit" class="submit-btn" disabled={locked}>
                    {
                        if locked { "Submitting…" } else { "Get Free Career Evaluation →" }
                    }
                </button>
            </form>
        </>
    }
}

fn build_thank_you() -> Html {
    html! {
        <div class="thank-you">
            <h2>{"Thanks for your response!"}</h2>
            <p>{"We will contact you soon."}</p>
        </div>
    }
}

fn build_qualification_select(
    component: &ContactFormComponent,
    link: &Scope<ContactFormComponent>,
) -> Html {
    html! {
        <div class="form-field">
            <label for="qualification">{"Qualification *"}</label>
            <select
                id="qualification"
                onchange={link.callback(|e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    Msg::EditQualification(select.value())
                })}
            >
                <option value="" selected={component.draft.qualification.is_none()}>
                    {"Select Qualification"}
                </option>
                {
                    Qualification::ALL.iter().map(|q| html! {
                        <option
                            value={q.label()}
                            selected={component.draft.qualification == Some(*q)}
                        >
                            { q.label() }
                        </option>
                    }).collect::<Html>()
                }
            </select>
            { field_error(&component.errors.qualification) }
        </div>
    }
}

fn text_field(
    id: &'static str,
    label: &str,
    placeholder: &'static str,
    value: &str,
    error: &Option<String>,
    oninput: Callback<InputEvent>,
) -> Html {
    html! {
        <div class="form-field">
            <label for={id}>{label}</label>
            <input
                id={id}
                type="text"
                value={value.to_string()}
                placeholder={placeholder}
                {oninput}
            />
            { field_error(error) }
        </div>
    }
}

fn field_error(error: &Option<String>) -> Html {
    match error {
        Some(message) => html! { <p class="field-error">{ message.clone() }</p> },
        None => html! {},
    }
}

fn on_input(make: fn(String) -> Msg) -> impl Fn(InputEvent) -> Msg {
    move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        make(input.value())
    }
}
