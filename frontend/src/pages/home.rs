use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::quiz::QuizSection;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="landing">
            <style>
                {r#"
                body {
                    margin: 0;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI",
                        Roboto, "Helvetica Neue", Arial, sans-serif;
                }
                .landing {
                    min-height: 100vh;
                    background: #0B29FF;
                    color: #ffffff;
                }
                "#}
            </style>
            <Hero />
            <QuizSection />
            <Footer />
        </div>
    }
}
