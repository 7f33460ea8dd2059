use chrono::Datelike;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                .site-footer {
                    padding: 2.5rem 0;
                    text-align: center;
                    color: rgba(255, 255, 255, 0.8);
                }
                .site-footer a {
                    color: inherit;
                }
                "#}
            </style>
            <div>{format!("© {} Sinister Consulting", year)}</div>
            <div>
                <a href="mailto:info@sinisterconsulting.com">{"info@sinisterconsulting.com"}</a>
                {" • sinisterconsulting.com"}
            </div>
        </footer>
    }
}
