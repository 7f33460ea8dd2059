use gloo_console::log;
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::funnel::catalog::quiz_steps;
use crate::funnel::lead::{build_submission, LeadContact, SubmitOutcome};
use crate::funnel::state::QuizFunnel;

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    /// Finished quiz session whose answers ride along with the contact info.
    pub funnel: QuizFunnel,
    pub on_submitted: Callback<SubmitOutcome>,
}

#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let lead = use_state(LeadContact::default);
    let sending = use_state(|| false);

    let can_submit = lead.can_submit() && !*sending;

    let on_name = {
        let lead = lead.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*lead).clone();
            next.name = input.value();
            lead.set(next);
        })
    };
    let on_email = {
        let lead = lead.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*lead).clone();
            next.email = input.value();
            lead.set(next);
        })
    };
    let on_company = {
        let lead = lead.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*lead).clone();
            next.company = input.value();
            lead.set(next);
        })
    };
    let on_website = {
        let lead = lead.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*lead).clone();
            next.website = input.value();
            lead.set(next);
        })
    };
    let on_message = {
        let lead = lead.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*lead).clone();
            next.message = input.value();
            lead.set(next);
        })
    };
    let on_consent = {
        let lead = lead.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*lead).clone();
            next.consent = input.checked();
            lead.set(next);
        })
    };

    let onsubmit = {
        let lead = lead.clone();
        let sending = sending.clone();
        let funnel = props.funnel.clone();
        let on_submitted = props.on_submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !lead.can_submit() || *sending {
                return;
            }
            sending.set(true);

            let submission = build_submission(&lead, quiz_steps(), &funnel);
            let sending = sending.clone();
            let on_submitted = on_submitted.clone();
            spawn_local(async move {
                let outcome = match Request::post(&format!(
                    "{}/api/send",
                    config::get_backend_url()
                ))
                .json(&submission)
                .unwrap()
                .send()
                .await
                {
                    Ok(response) if response.ok() => SubmitOutcome::Delivered,
                    Ok(response) => {
                        log!("Submission rejected with status:", response.status().to_string());
                        SubmitOutcome::Unconfirmed
                    }
                    Err(e) => {
                        log!("Submission network error:", e.to_string());
                        SubmitOutcome::Unconfirmed
                    }
                };
                sending.set(false);
                on_submitted.emit(outcome);
            });
        })
    };

    html! {
        <form class="lead-form" {onsubmit}>
            <style>
                {r#"
                .lead-form {
                    padding: 1.5rem;
                    border-radius: 1.5rem;
                    background: #ffffff;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .lead-form h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .lead-form .form-intro {
                    color: #525252;
                    margin-bottom: 1.25rem;
                }
                .lead-form .form-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }
                .lead-form .form-field.wide {
                    grid-column: span 2;
                }
                .lead-form label {
                    font-size: 0.85rem;
                    color: #525252;
                }
                .lead-form label .required {
                    color: red;
                }
                .lead-form input[type="text"],
                .lead-form input[type="email"],
                .lead-form textarea {
                    margin-top: 0.25rem;
                    width: 100%;
                    padding: 0.5rem 0.75rem;
                    border: 1px solid #e5e5e5;
                    border-radius: 0.75rem;
                    outline: none;
                }
                .lead-form .consent-row {
                    grid-column: span 2;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .lead-form .form-actions {
                    margin-top: 1.5rem;
                    display: flex;
                    justify-content: flex-end;
                }
                .lead-form .submit-button {
                    padding: 0.6rem 1.25rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: #0B29FF;
                    color: #ffffff;
                    cursor: pointer;
                }
                .lead-form .submit-button:disabled {
                    background: #a3a3a3;
                    cursor: not-allowed;
                }
                @media (max-width: 640px) {
                    .lead-form .form-grid {
                        grid-template-columns: 1fr;
                    }
                    .lead-form .form-field.wide,
                    .lead-form .consent-row {
                        grid-column: span 1;
                    }
                }
                "#}
            </style>
            <h3>{"Where can we send your scoped plan?"}</h3>
            <p class="form-intro">
                {"Share a few details and we'll follow up with a tailored plan and timeline."}
            </p>
            <div class="form-grid">
                <div class="form-field">
                    <label>{"Full name "}<span class="required">{"*"}</span></label>
                    <input type="text" value={lead.name.clone()} oninput={on_name} />
                </div>
                <div class="form-field">
                    <label>{"Work email "}<span class="required">{"*"}</span></label>
                    <input
                        type="email"
                        placeholder="you@company.com"
                        value={lead.email.clone()}
                        oninput={on_email}
                    />
                </div>
                <div class="form-field">
                    <label>{"Company"}</label>
                    <input type="text" value={lead.company.clone()} oninput={on_company} />
                </div>
                <div class="form-field">
                    <label>{"Website (optional)"}</label>
                    <input
                        type="text"
                        placeholder="https://example.com"
                        value={lead.website.clone()}
                        oninput={on_website}
                    />
                </div>
                <div class="form-field wide">
                    <label>{"What's the goal / context?"}</label>
                    <textarea
                        rows="4"
                        placeholder="Key outcomes, integrations, constraints…"
                        value={lead.message.clone()}
                        oninput={on_message}
                    />
                </div>
                <div class="consent-row">
                    <input
                        id="consent"
                        type="checkbox"
                        checked={lead.consent}
                        onchange={on_consent}
                    />
                    <label for="consent">
                        {"I agree to be contacted by Sinister Consulting and accept the "}
                        <a href="#">{"privacy policy"}</a>
                        {"."}
                    </label>
                </div>
            </div>
            <div class="form-actions">
                <button class="submit-button" type="submit" disabled={!can_submit}>
                    { if *sending { "Sending..." } else { "Get my plan" } }
                </button>
            </div>
        </form>
    }
}
