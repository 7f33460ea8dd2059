use yew::prelude::*;

use crate::funnel::progress::compute_progress;

#[derive(Properties, PartialEq)]
pub struct ProgressProps {
    pub step: usize,
    pub total: usize,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressProps) -> Html {
    let pct = compute_progress(props.step, props.total);

    html! {
        <div class="quiz-progress">
            <style>
                {r#"
                .quiz-progress-labels {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 0.5rem;
                    font-size: 0.75rem;
                    color: #737373;
                }
                .quiz-progress-track {
                    height: 0.5rem;
                    width: 100%;
                    border-radius: 9999px;
                    background: #e5e5e5;
                    overflow: hidden;
                }
                .quiz-progress-fill {
                    height: 100%;
                    border-radius: 9999px;
                    background: #0B29FF;
                    transition: width 0.3s ease;
                }
                "#}
            </style>
            <div class="quiz-progress-labels">
                <span>{format!("Step {} of {}", props.step + 1, props.total)}</span>
                <span>{format!("{}%", pct)}</span>
            </div>
            <div class="quiz-progress-track">
                <div class="quiz-progress-fill" style={format!("width: {}%", pct)}></div>
            </div>
        </div>
    }
}
