use yew::prelude::*;

use crate::funnel::catalog::StepOption;

#[derive(Properties, PartialEq)]
pub struct QuizCardProps {
    pub option: StepOption,
    pub active: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(QuizCard)]
pub fn quiz_card(props: &QuizCardProps) -> Html {
    let class = if props.active {
        "quiz-card active"
    } else {
        "quiz-card"
    };

    html! {
        <button type="button" {class} onclick={props.onclick.clone()}>
            <style>
                {r#"
                .quiz-card {
                    display: block;
                    width: 100%;
                    padding: 1rem;
                    border: 1px solid #e5e5e5;
                    border-radius: 1rem;
                    background: #ffffff;
                    text-align: left;
                    cursor: pointer;
                }
                .quiz-card:hover {
                    border-color: #a3a3a3;
                }
                .quiz-card.active {
                    border-color: #0B29FF;
                    box-shadow: 0 0 0 1px #0B29FF;
                }
                .quiz-card .card-label {
                    font-weight: 600;
                }
                .quiz-card .card-desc {
                    margin-top: 0.25rem;
                    font-size: 0.85rem;
                    color: #525252;
                }
                .quiz-card .card-details {
                    margin: 0.5rem 0 0;
                    padding-left: 1rem;
                    font-size: 0.8rem;
                    color: #737373;
                }
                "#}
            </style>
            <div class="card-label">{&props.option.label}</div>
            {
                if let Some(desc) = &props.option.desc {
                    html! { <div class="card-desc">{desc}</div> }
                } else {
                    html! {}
                }
            }
            {
                if props.active && !props.option.details.is_empty() {
                    html! {
                        <ul class="card-details">
                            { for props.option.details.iter().map(|line| html! { <li>{line}</li> }) }
                        </ul>
                    }
                } else {
                    html! {}
                }
            }
        </button>
    }
}
