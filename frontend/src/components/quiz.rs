use yew::prelude::*;

use crate::components::lead_form::LeadForm;
use crate::components::progress::ProgressBar;
use crate::components::quiz_card::QuizCard;
use crate::config;
use crate::funnel::catalog;
use crate::funnel::lead::SubmitOutcome;
use crate::funnel::state::QuizFunnel;

fn thank_you() -> Html {
    html! {
        <div class="funnel-thanks">
            <h2>{"Thank you for the trust."}</h2>
            <p>
                {"We'll contact you ASAP. Our global team of sharp minds will align, \
                  scope, and deploy."}
            </p>
        </div>
    }
}

#[function_component(QuizSection)]
pub fn quiz_section() -> Html {
    let funnel = use_state(QuizFunnel::new);
    let outcome = use_state(|| None::<SubmitOutcome>);

    let steps = catalog::quiz_steps();
    let total = catalog::total_steps();
    let current = steps.get(funnel.step_index());
    let can_next = current.map_or(false, |step| funnel.step_complete(step));

    let on_back = {
        let funnel = funnel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*funnel).clone();
            next.retreat();
            funnel.set(next);
        })
    };
    let on_next = {
        let funnel = funnel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*funnel).clone();
            next.advance(total);
            funnel.set(next);
        })
    };
    let on_submitted = {
        let outcome = outcome.clone();
        Callback::from(move |result: SubmitOutcome| outcome.set(Some(result)))
    };
    let on_retry = {
        let outcome = outcome.clone();
        Callback::from(move |_: MouseEvent| outcome.set(None))
    };

    let body = match *outcome {
        Some(SubmitOutcome::Delivered) => thank_you(),
        Some(SubmitOutcome::Unconfirmed) if config::mask_unconfirmed_submission() => thank_you(),
        Some(SubmitOutcome::Unconfirmed) => html! {
            <div class="funnel-thanks">
                <h2>{"We couldn't confirm your submission."}</h2>
                <p>{"Something went wrong on the way to us. Your answers are still here."}</p>
                <button type="button" class="funnel-next" onclick={on_retry}>
                    {"Try again"}
                </button>
            </div>
        },
        None => match current {
            Some(step) => {
                let options = step.options.iter().map(|option| {
                    let onclick = {
                        let funnel = funnel.clone();
                        let key = step.key.clone();
                        let value = option.value.clone();
                        let mode = step.mode;
                        Callback::from(move |_: MouseEvent| {
                            let mut next = (*funnel).clone();
                            next.select(&key, &value, mode);
                            funnel.set(next);
                        })
                    };
                    html! {
                        <QuizCard
                            option={option.clone()}
                            active={funnel.is_selected(&step.key, &option.value)}
                            {onclick}
                        />
                    }
                });

                html! {
                    <div class="funnel-step">
                        <h3>{&step.title}</h3>
                        <p class="funnel-subtitle">{&step.subtitle}</p>
                        <div class="funnel-options">
                            { for options }
                        </div>
                        <div class="funnel-controls">
                            {
                                if funnel.step_index() > 0 {
                                    html! {
                                        <button type="button" class="funnel-back" onclick={on_back}>
                                            {"‹ Back"}
                                        </button>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                            <button
                                type="button"
                                class="funnel-next"
                                disabled={!can_next}
                                onclick={on_next}
                            >
                                {"Next ›"}
                            </button>
                        </div>
                    </div>
                }
            }
            None => html! {
                <LeadForm funnel={(*funnel).clone()} on_submitted={on_submitted} />
            },
        },
    };

    html! {
        <section id="funnel" class="funnel">
            <style>
                {r#"
                .funnel {
                    max-width: 48rem;
                    margin: 0 auto;
                    padding: 2.5rem 1rem 3rem;
                    background: #ffffff;
                    color: #000000;
                    border-radius: 1.5rem 1.5rem 0 0;
                }
                .funnel-step {
                    margin-top: 1.5rem;
                    padding: 1.5rem;
                    border: 1px solid #e5e5e5;
                    border-radius: 1.5rem;
                    background: #ffffff;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }
                .funnel-step h3 {
                    font-size: 1.5rem;
                    font-weight: 600;
                }
                .funnel-subtitle {
                    color: #525252;
                    margin-bottom: 1.25rem;
                }
                .funnel-options {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 0.75rem;
                }
                @media (max-width: 640px) {
                    .funnel-options {
                        grid-template-columns: 1fr;
                    }
                }
                .funnel-controls {
                    margin-top: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .funnel-back {
                    padding: 0.5rem 1rem;
                    border: 1px solid #e5e5e5;
                    border-radius: 0.75rem;
                    background: #ffffff;
                    cursor: pointer;
                }
                .funnel-next {
                    margin-left: auto;
                    padding: 0.6rem 1.25rem;
                    border: none;
                    border-radius: 0.75rem;
                    background: #0B29FF;
                    color: #ffffff;
                    cursor: pointer;
                }
                .funnel-next:disabled {
                    background: #a3a3a3;
                    cursor: not-allowed;
                }
                .funnel-thanks {
                    margin: 1.5rem 0;
                    padding: 1.5rem;
                    border-radius: 1.5rem;
                    background: #ffffff;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    text-align: center;
                }
                .funnel-thanks h2 {
                    font-size: 2.25rem;
                    font-weight: 600;
                    color: #1d4ed8;
                    margin-bottom: 1rem;
                }
                .funnel-thanks p {
                    max-width: 36rem;
                    margin: 0 auto 1rem;
                    color: #404040;
                    font-size: 1.1rem;
                }
                "#}
            </style>
            <ProgressBar step={funnel.step_index()} total={total} />
            { body }
        </section>
    }
}
