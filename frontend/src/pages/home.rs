use yew::prelude::*;
use yew_router::prelude::*;
use gloo_timers::callback::Timeout;

use crate::components::footer::Footer;
use crate::location_key;
use crate::navigation::{
    home_mount_action, scroll_to_section, strip_stale_fragment, MountAction, SCROLL_SETTLE_MS,
};
use crate::pages::sections::{
    FinalCta, Hero, Methodology, Problem, Results, Services, Team, Vision,
};
use crate::scroll_target::consume_pending_scroll_target;


#[function_component]
pub fn Home() -> Html {
    let location = location_key(use_location());

    // Runs once per mount and once per route change while mounted.
    {
        use_effect_with_deps(move |location| {
            let hash = location.as_ref().map(|(_, _, hash)| hash.as_str()).unwrap_or_default();
            let pending_scroll = match home_mount_action(consume_pending_scroll_target(), hash) {
                MountAction::Scroll(target) => {
                    log::info!("Scrolling to pending section {}", target);
                    Some(Timeout::new(SCROLL_SETTLE_MS, move || scroll_to_section(&target)))
                }
                MountAction::StripFragment => {
                    strip_stale_fragment();
                    None
                }
                MountAction::Nothing => None,
            };
            move || drop(pending_scroll)
        }, location);
    }

    html! {
        <div class="home-page">
            <style>
            {r#".home-page {
                min-height: 100vh;
                background: white;
                color: #0f172a;
                font-family: 'Inter', system-ui, sans-serif;
            }
            .home-page section {
                padding: 6rem 1.5rem;
                scroll-margin-top: 4rem;
            }
            .section-inner {
                max-width: 80rem;
                margin: 0 auto;
            }
            .section-headline {
                font-family: 'Montserrat', sans-serif;
                font-size: 2.75rem;
                font-weight: 500;
                letter-spacing: -0.02em;
                margin-bottom: 1.5rem;
            }
            .section-headline .muted { color: #cbd5e1; }
            .section-headline .accent { color: #3b82f6; }
            .card-grid {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                gap: 1.5rem;
            }
            .card {
                background: white;
                border: 1px solid #e5e7eb;
                border-radius: 16px;
                padding: 2rem;
                transition: transform 0.2s ease, box-shadow 0.2s ease;
            }
            .card:hover {
                transform: translateY(-4px);
                box-shadow: 0 12px 32px rgba(15, 23, 42, 0.08);
            }
            .badge {
                display: inline-block;
                border: 1px solid #e5e7eb;
                border-radius: 999px;
                padding: 0.35rem 1rem;
                font-size: 0.875rem;
                color: #475569;
            }
            .cta-button {
                background: #0f172a;
                color: white;
                border: none;
                border-radius: 999px;
                padding: 1rem 2.5rem;
                font-size: 1rem;
                cursor: pointer;
                text-decoration: none;
                display: inline-block;
            }
            .cta-button:hover { background: #334155; }
            .cta-button.outline {
                background: transparent;
                color: #0f172a;
                border: 1px solid #0f172a;
            }
            @media (max-width: 768px) {
                .section-headline { font-size: 2rem; }
                .home-page section { padding: 4rem 1.25rem; }
            }"#}
            </style>
            <Hero />
            <Problem />
            <Team />
            <Services />
            <Methodology />
            <Results />
            <Vision />
            <FinalCta />
            <Footer />
        </div>
    }
}
