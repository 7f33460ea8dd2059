use yew::prelude::*;

#[function_component(Hero)]
pub fn hero() -> Html {
    let scroll_to_funnel = Callback::from(|_: MouseEvent| {
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = document.get_element_by_id("funnel") {
                el.scroll_into_view();
            }
        }
    });

    html! {
        <section class="hero">
            <style>
                {r#"
                .hero {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 5rem 1rem 6rem;
                    text-align: center;
                }
                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    margin-bottom: 1.5rem;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.05);
                    font-size: 0.75rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .hero-badge .dot {
                    width: 6px;
                    height: 6px;
                    border-radius: 50%;
                    background: #34d399;
                }
                .hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    font-weight: 600;
                    line-height: 1.1;
                    letter-spacing: -0.02em;
                    margin-bottom: 1rem;
                }
                .hero-subcopy {
                    max-width: 42rem;
                    margin: 0 auto 2rem;
                    font-size: 1.1rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                .hero-ctas {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                }
                .hero-cta-primary {
                    padding: 0.75rem 1.5rem;
                    border: none;
                    border-radius: 1rem;
                    background: #ffffff;
                    color: #1d4ed8;
                    font-weight: 500;
                    cursor: pointer;
                }
                .hero-cta-secondary {
                    padding: 0.5rem 1rem;
                    border: 1px solid rgba(255, 255, 255, 0.25);
                    border-radius: 1rem;
                    color: rgba(255, 255, 255, 0.8);
                    text-decoration: none;
                }
                .hero-note {
                    margin-top: 1rem;
                    font-size: 0.85rem;
                    color: rgba(255, 255, 255, 0.6);
                }
                "#}
            </style>
            <div class="hero-badge">
                <span class="dot"></span>
                <span>{"Available for new onboardings"}</span>
            </div>
            <h1>{"We build digital systems that actually ship."}</h1>
            <p class="hero-subcopy">
                {"Sinister Consulting unites senior engineers, designers, and operators \
                  across time zones to ship production-grade apps, platforms, and tools."}
            </p>
            <div class="hero-ctas">
                <button type="button" class="hero-cta-primary" onclick={scroll_to_funnel}>
                    {"Start your project"}
                </button>
                <a class="hero-cta-secondary" href="mailto:info@sinisterconsulting.com">
                    {"Or email us directly"}
                </a>
            </div>
            <p class="hero-note">
                {"Typical engagement: discovery in 1 week, first prototype in 2–4 weeks."}
            </p>
        </section>
    }
}
