use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div style="min-height: 100vh; display: flex; align-items: center; justify-content: center; gap: 4rem; flex-wrap: wrap; padding: 1rem; background: white;">
            <div style="max-width: 24rem;">
                <h2 style="font-size: 1.5rem; font-weight: 600; color: #1f2937; margin-bottom: 1rem;">
                    {"What are you looking for?"}
                </h2>
                <p style="color: #6b7280; margin-bottom: 2rem;">
                    {"We couldn't find the page you're looking for. Let's get you back on track."}
                </p>
                <Link<Route> to={Route::Home} classes="back-home-button">
                    <span style="display: inline-block; background: #1f2937; color: white; border-radius: 8px; padding: 0.75rem 2rem;">
                        {"Back to Homepage"}
                    </span>
                </Link<Route>>
            </div>
            <div style="font-size: 12rem; font-weight: 700; display: flex; align-items: center;">
                <span style="color: #e5e7eb;">{"4"}</span>
                <span style="color: #c084fc;">{"0"}</span>
                <span style="color: #e5e7eb;">{"4"}</span>
            </div>
        </div>
    }
}
