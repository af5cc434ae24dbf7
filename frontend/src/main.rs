use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::history::Location;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod navigation;
mod scroll_target;
mod components {
    pub mod footer;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod not_found;
    pub mod sections;
}

use navigation::{perform_nav_action, resolve_nav_action, scroll_window_to_top, NavLink, NAV_LINKS};
use pages::{
    contact::Contact,
    home::Home,
    not_found::NotFound,
};



#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

/// Path, query and fragment of the current location; changes on every real route change.
pub fn location_key(location: Option<Location>) -> Option<(String, String, String)> {
    location.map(|l| (l.path().to_string(), l.query_str().to_string(), l.hash().to_string()))
}

#[function_component(ScrollToTop)]
fn scroll_to_top() -> Html {
    let location = location_key(use_location());
    use_effect_with_deps(move |_| {
        scroll_window_to_top();
        || ()
    }, location);
    html! {}
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let navigator = use_navigator();
    let on_home = use_route::<Route>() == Some(Route::Home);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    if let Some(window) = &window {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > 10.0);
                    }
                }) as Box<dyn FnMut()>)
            };

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let go_to = {
        let menu_open = menu_open.clone();
        let navigator = navigator.clone();
        move |route: Route| {
            let menu_open = menu_open.clone();
            let navigator = navigator.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if let Some(navigator) = &navigator {
                    navigator.push(&route);
                }
                menu_open.set(false);
            })
        }
    };

    let nav_click = {
        let menu_open = menu_open.clone();
        let navigator = navigator.clone();
        move |link: &NavLink| {
            let menu_open = menu_open.clone();
            let navigator = navigator.clone();
            let target = link.target.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                let action = resolve_nav_action(&target, on_home);
                if let Some(route) = perform_nav_action(action) {
                    if let Some(navigator) = &navigator {
                        navigator.push(&route);
                    }
                }
                menu_open.set(false);
            })
        }
    };

    let render_links = |class: &'static str| -> Html {
        NAV_LINKS.iter().map(|link| {
            html! {
                <button
                    key={link.label}
                    class={class}
                    onclick={nav_click(link)}
                >
                    {link.label}
                </button>
            }
        }).collect::<Html>()
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
            {r#".top-nav {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 50;
                background: rgba(255, 255, 255, 0.95);
                border-bottom: 1px solid #e5e7eb;
                transition: all 0.3s ease;
            }
            .top-nav.scrolled {
                background: rgba(255, 255, 255, 0.8);
                backdrop-filter: blur(12px);
                box-shadow: 0 4px 16px rgba(15, 23, 42, 0.08);
            }
            .nav-content {
                max-width: 80rem;
                margin: 0 auto;
                padding: 0 1.5rem;
                height: 4rem;
                display: flex;
                justify-content: space-between;
                align-items: center;
            }
            .nav-logo {
                font-family: 'Montserrat', sans-serif;
                font-size: 1.5rem;
                font-weight: 600;
                color: #0f172a;
                text-decoration: none;
                letter-spacing: -0.02em;
            }
            .nav-links { display: flex; gap: 2rem; }
            .nav-link {
                background: none;
                border: none;
                color: #0f172a;
                font-size: 1rem;
                cursor: pointer;
            }
            .nav-link:hover { color: #3b82f6; }
            .nav-cta {
                background: #3b82f6;
                color: white;
                border: none;
                border-radius: 8px;
                padding: 0.5rem 1.5rem;
                font-weight: 500;
                cursor: pointer;
            }
            .nav-cta:hover { background: #2563eb; }
            .burger-menu {
                display: none;
                background: none;
                border: none;
                font-size: 1.5rem;
                cursor: pointer;
            }
            .mobile-menu {
                display: flex;
                flex-direction: column;
                gap: 1rem;
                padding: 1rem 1.5rem;
                border-top: 1px solid #e5e7eb;
                background: white;
            }
            .mobile-menu .nav-link { text-align: left; }
            @media (max-width: 768px) {
                .nav-links, .nav-content > .nav-cta { display: none; }
                .burger-menu { display: block; }
            }"#}
            </style>
            <div class="nav-content">
                <a href="/" class="nav-logo" onclick={go_to(Route::Home)}>
                    {"Envobit"}
                </a>
                <div class="nav-links">
                    { render_links("nav-link") }
                </div>
                <button class="nav-cta" onclick={go_to(Route::Contact)}>
                    {"Book Strategy Call"}
                </button>
                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            if *menu_open {
                <div class="mobile-menu">
                    { render_links("nav-link") }
                    <button class="nav-cta" onclick={go_to(Route::Contact)}>
                        {"Book Strategy Call"}
                    </button>
                </div>
            }
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ScrollToTop />
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
