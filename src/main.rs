use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod state {
    pub mod lead_capture;
    pub mod role_handoff;
}
mod components {
    pub mod outcome_chart;
    pub mod proposal_form;
    pub mod role_modal;
}
mod pages {
    pub mod common;
    pub mod home;
    pub mod site_landing;
}

use pages::{home::Home, site_landing::SiteLanding};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sites")]
    Sites,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering sponsor landing page");
            html! { <Home /> }
        }
        Route::Sites => {
            info!("Rendering site landing page");
            html! { <SiteLanding /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll_top > 80);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"TrialBridge"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"For Sponsors"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <Link<Route> to={Route::Sites} classes="nav-link">
                            {"For Sites"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_menu.clone()}>
                        <a href="/#contact" class="nav-cta">{"Request Proposal"}</a>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 100;
                        background: transparent;
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }

                    .top-nav.scrolled {
                        background: rgba(11, 18, 32, 0.95);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.25);
                    }

                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 0.9rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1rem;
                    }

                    .nav-logo {
                        font-size: 1.25rem;
                        font-weight: 800;
                        color: #E8EEFC;
                        text-decoration: none;
                    }

                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }

                    .nav-link {
                        color: #A4B0CC;
                        text-decoration: none;
                        font-size: 0.95rem;
                        transition: color 0.3s ease;
                    }

                    .nav-link:hover {
                        color: #E8EEFC;
                    }

                    .nav-cta {
                        background: #16B1F0;
                        color: #ffffff;
                        font-weight: 700;
                        font-size: 0.95rem;
                        text-decoration: none;
                        padding: 0.5rem 1.25rem;
                        border-radius: 8px;
                        transition: background 0.3s ease;
                    }

                    .nav-cta:hover {
                        background: #10224E;
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: transparent;
                        border: none;
                        cursor: pointer;
                        padding: 0.25rem;
                    }

                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #E8EEFC;
                    }

                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }

                        .nav-right {
                            display: none;
                        }

                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            background: rgba(11, 18, 32, 0.98);
                            padding: 1.5rem;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: 'Inter', 'Helvetica Neue', Arial, sans-serif;
                        background: #ffffff;
                    }
                "#}
            </style>
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
