use std::collections::HashMap;

use yew::prelude::*;
use yew_router::prelude::*;
use gloo_net::http::Request;
use gloo_console::log;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::components::footer::Footer;
use crate::config;
use crate::Route;

const FAILURE_NOTICE: &str = "Failed to send message. Please try again or contact us directly.";

/// What the contact form posts. Keys match the backend's camelCase payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company_name: String,
    pub website: String,
    pub budget: String,
    pub services: Vec<String>,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactOption {
    pub value: String,
    pub label: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContactOptions {
    pub budgets: Vec<ContactOption>,
    pub services: Vec<ContactOption>,
}

#[derive(Deserialize)]
struct FieldError {
    message: String,
}

#[derive(Deserialize)]
struct FieldErrorsResponse {
    errors: HashMap<String, FieldError>,
}

#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
    Sent,
    /// Field name to message, as rejected by the backend.
    Invalid(HashMap<String, String>),
    Failed,
}

/// Adds the service if it is not selected yet, removes it otherwise.
pub fn toggle_service(selected: &[String], value: &str) -> Vec<String> {
    if selected.iter().any(|s| s == value) {
        selected.iter().filter(|s| *s != value).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(value.to_string());
        next
    }
}

/// Reads the per-field messages out of a 422 body. Anything unreadable
/// counts as a plain failure.
pub fn outcome_from_rejection(body: &str) -> SubmitOutcome {
    match serde_json::from_str::<FieldErrorsResponse>(body) {
        Ok(parsed) if !parsed.errors.is_empty() => SubmitOutcome::Invalid(
            parsed
                .errors
                .into_iter()
                .map(|(field, error)| (field, error.message))
                .collect(),
        ),
        _ => SubmitOutcome::Failed,
    }
}

/// Inline messages to show once a submission settles. Only a rejection
/// carries any; every other outcome clears what an earlier attempt left.
pub fn field_errors_after(outcome: &SubmitOutcome) -> HashMap<String, String> {
    match outcome {
        SubmitOutcome::Invalid(errors) => errors.clone(),
        SubmitOutcome::Sent | SubmitOutcome::Failed => HashMap::new(),
    }
}

async fn send_contact_form(form: &ContactFormData) -> SubmitOutcome {
    let request = match Request::post(&config::contact_url()).json(form) {
        Ok(request) => request,
        Err(e) => {
            log!("Failed to serialize contact form: {}", e.to_string());
            return SubmitOutcome::Failed;
        }
    };

    match request.send().await {
        Ok(response) if response.ok() => SubmitOutcome::Sent,
        Ok(response) if response.status() == 422 => match response.text().await {
            Ok(body) => outcome_from_rejection(&body),
            Err(_) => SubmitOutcome::Failed,
        },
        Ok(response) => {
            log!("Contact submit failed with status: {}", response.status());
            SubmitOutcome::Failed
        }
        Err(e) => {
            log!("Network error: {}", e.to_string());
            SubmitOutcome::Failed
        }
    }
}

async fn fetch_contact_options() -> Option<ContactOptions> {
    let response = Request::get(&config::contact_options_url()).send().await.ok()?;
    if !response.ok() {
        log!("Failed to load contact options: {}", response.status());
        return None;
    }
    response.json::<ContactOptions>().await.ok()
}

fn on_text_input(
    form: &UseStateHandle<ContactFormData>,
    update: fn(&mut ContactFormData, String),
) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        update(&mut next, input.value());
        form.set(next);
    })
}

fn field_error(errors: &HashMap<String, String>, field: &str) -> Html {
    match errors.get(field) {
        Some(message) => html! { <p class="field-error">{message.clone()}</p> },
        None => html! {},
    }
}

#[function_component]
pub fn Contact() -> Html {
    let form = use_state(ContactFormData::default);
    let options = use_state(ContactOptions::default);
    let field_errors = use_state(HashMap::<String, String>::new);
    let error = use_state(|| None::<String>);
    let is_submitting = use_state(|| false);
    let is_submitted = use_state(|| false);
    let navigator = use_navigator();

    {
        let options = options.clone();
        use_effect_with_deps(move |_| {
            spawn_local(async move {
                match fetch_contact_options().await {
                    Some(loaded) => options.set(loaded),
                    None => log!("Contact options unavailable"),
                }
            });
            || ()
        }, ());
    }

    let on_submit = {
        let form = form.clone();
        let field_errors = field_errors.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();
        let is_submitted = is_submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *is_submitting {
                return;
            }
            is_submitting.set(true);
            error.set(None);
            field_errors.set(HashMap::new());

            let payload = (*form).clone();
            let form = form.clone();
            let field_errors = field_errors.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            let is_submitted = is_submitted.clone();
            spawn_local(async move {
                let outcome = send_contact_form(&payload).await;
                field_errors.set(field_errors_after(&outcome));
                match outcome {
                    SubmitOutcome::Sent => {
                        form.set(ContactFormData::default());
                        is_submitted.set(true);
                    }
                    SubmitOutcome::Failed => error.set(Some(FAILURE_NOTICE.to_string())),
                    SubmitOutcome::Invalid(_) => {}
                }
                is_submitting.set(false);
            });
        })
    };

    let on_budget_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.budget = select.value();
            form.set(next);
        })
    };

    let on_message_input = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = textarea.value();
            form.set(next);
        })
    };

    let on_service_click = |value: String| {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.services = toggle_service(&next.services, &value);
            form.set(next);
        })
    };

    let styles = html! {
        <style>
        {r#".contact-page {
            min-height: 100vh;
            background: white;
            color: #0f172a;
        }
        .contact-main {
            max-width: 64rem;
            margin: 0 auto;
            padding: 8rem 1.5rem 5rem;
        }
        .contact-title {
            font-family: 'Montserrat', sans-serif;
            font-size: 3.75rem;
            font-weight: 500;
            letter-spacing: -0.02em;
            margin-bottom: 3rem;
        }
        .contact-title .muted { color: #d1d5db; }
        .contact-title .accent { color: #3b82f6; }
        .contact-form {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 2rem;
        }
        .contact-form .wide { grid-column: span 2; }
        .contact-form input,
        .contact-form select,
        .contact-form textarea {
            width: 100%;
            border: none;
            border-bottom: 1px solid #d1d5db;
            padding: 0.75rem 0;
            font-size: 1rem;
            background: transparent;
            outline: none;
        }
        .contact-form input:focus,
        .contact-form select:focus,
        .contact-form textarea:focus { border-bottom-color: #0f172a; }
        .contact-form textarea { min-height: 120px; resize: none; }
        .contact-form label { color: #6b7280; }
        .service-chips { display: flex; flex-wrap: wrap; gap: 0.5rem; padding-top: 0.5rem; }
        .service-chip {
            border: 1px solid #d1d5db;
            border-radius: 999px;
            padding: 0.5rem 1.25rem;
            background: white;
            cursor: pointer;
            transition: background 0.2s ease, color 0.2s ease, transform 0.1s ease;
        }
        .service-chip:active { transform: scale(0.9); }
        .service-chip.selected { background: #0f172a; color: white; border-color: #0f172a; }
        .field-error { color: #dc2626; font-size: 0.875rem; margin-top: 0.5rem; }
        .form-error {
            color: #dc2626;
            background: #fef2f2;
            border-radius: 8px;
            padding: 1rem;
        }
        .send-button {
            border: 1px solid #0f172a;
            border-radius: 999px;
            background: white;
            padding: 1rem 3rem;
            font-size: 1rem;
            cursor: pointer;
        }
        .send-button:hover:not(:disabled) { background: #0f172a; color: white; }
        .send-button:disabled { opacity: 0.6; cursor: not-allowed; }
        .success-card {
            max-width: 42rem;
            margin: 0 auto;
            text-align: center;
            border-radius: 16px;
            box-shadow: 0 24px 48px rgba(15, 23, 42, 0.12);
            padding: 3rem;
        }
        .success-icon { font-size: 4rem; color: #22c55e; }
        @media (max-width: 768px) {
            .contact-form { grid-template-columns: 1fr; }
            .contact-form .wide { grid-column: span 1; }
            .contact-title { font-size: 2.5rem; }
        }"#}
        </style>
    };

    if *is_submitted {
        let back_home = {
            let navigator = navigator.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = &navigator {
                    navigator.push(&Route::Home);
                }
            })
        };
        return html! {
            <div class="contact-page">
                { styles }
                <div class="contact-main">
                    <div class="success-card">
                        <div class="success-icon">{"✓"}</div>
                        <h1 style="font-family: 'Montserrat', sans-serif;">{"Thank you for reaching out!"}</h1>
                        <p style="font-size: 1.25rem; color: #475569; margin-bottom: 2rem;">
                            {"We've received your message and will be in touch soon."}
                        </p>
                        <button class="send-button" onclick={back_home}>{"Back to Home"}</button>
                    </div>
                </div>
                <Footer />
            </div>
        };
    }

    let errors = &*field_errors;

    html! {
        <div class="contact-page">
            { styles }
            <main class="contact-main">
                <h1 class="contact-title">
                    <span class="muted">{"Ready to"}</span><br />
                    <span class="accent">{"start"}</span>{" your project?"}
                </h1>
                <form class="contact-form" onsubmit={on_submit} novalidate=true>
                    <div>
                        <input
                            type="text"
                            placeholder="Name *"
                            aria-label="Name *"
                            value={form.name.clone()}
                            oninput={on_text_input(&form, |f, v| f.name = v)}
                        />
                        { field_error(errors, "name") }
                    </div>
                    <div>
                        <input
                            type="email"
                            placeholder="Email *"
                            aria-label="Email *"
                            value={form.email.clone()}
                            oninput={on_text_input(&form, |f, v| f.email = v)}
                        />
                        { field_error(errors, "email") }
                    </div>
                    <div>
                        <input
                            type="tel"
                            placeholder="Phone * (+1 415 555 2671)"
                            aria-label="Phone *"
                            value={form.phone.clone()}
                            oninput={on_text_input(&form, |f, v| f.phone = v)}
                        />
                        { field_error(errors, "phone") }
                    </div>
                    <div>
                        <input
                            type="text"
                            placeholder="Company Name"
                            aria-label="Company Name"
                            value={form.company_name.clone()}
                            oninput={on_text_input(&form, |f, v| f.company_name = v)}
                        />
                    </div>
                    <div>
                        <input
                            type="text"
                            placeholder="Website"
                            aria-label="Website"
                            value={form.website.clone()}
                            oninput={on_text_input(&form, |f, v| f.website = v)}
                        />
                    </div>
                    <div>
                        <select onchange={on_budget_change} aria-label="Select a Budget *">
                            <option value="" selected={form.budget.is_empty()} disabled=true>
                                {"Select a Budget *"}
                            </option>
                            { for options.budgets.iter().map(|budget| html! {
                                <option
                                    key={budget.value.clone()}
                                    value={budget.value.clone()}
                                    selected={form.budget == budget.value}
                                >
                                    {budget.label.clone()}
                                </option>
                            }) }
                        </select>
                        { field_error(errors, "budget") }
                    </div>
                    <div class="wide">
                        <label>{"How can we help you? *"}</label>
                        <div class="service-chips">
                            { for options.services.iter().map(|service| {
                                let selected = form.services.contains(&service.value);
                                html! {
                                    <button
                                        type="button"
                                        key={service.value.clone()}
                                        class={classes!("service-chip", selected.then(|| "selected"))}
                                        onclick={on_service_click(service.value.clone())}
                                    >
                                        {service.label.clone()}
                                    </button>
                                }
                            }) }
                        </div>
                        { field_error(errors, "services") }
                    </div>
                    <div class="wide">
                        <textarea
                            placeholder="Message *"
                            aria-label="Message *"
                            value={form.message.clone()}
                            oninput={on_message_input}
                        />
                        { field_error(errors, "message") }
                    </div>
                    if let Some(message) = (*error).as_ref() {
                        <div class="wide form-error">{message.clone()}</div>
                    }
                    <div class="wide">
                        <button type="submit" class="send-button" disabled={*is_submitting}>
                            { if *is_submitting { "Sending..." } else { "Send" } }
                        </button>
                    </div>
                </form>
            </main>
            <Footer />
        </div>
    }
}
