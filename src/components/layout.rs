use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::router::Route;

const NAVIGATION: [(&str, &str, Route); 3] = [
    ("Home", "🏠", Route::Home),
    ("Upload", "⬆️", Route::Upload),
    ("Contracts", "📋", Route::Contracts),
];

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let current = use_route::<Route>();

    html! {
        <div class="app-shell">
            <header class="app-header">
                <div class="container header-row">
                    <Link<Route> to={Route::Home} classes="brand">
                        <div class="brand-logo">{"📄"}</div>
                        <div>
                            <h1 class="brand-name">{CONFIG.app_name.clone()}</h1>
                            <p class="brand-tagline">{"Contract Intelligence"}</p>
                        </div>
                    </Link<Route>>

                    <nav class="main-nav">
                        { for NAVIGATION.iter().map(|(name, icon, route)| {
                            let active = current.as_ref() == Some(route);
                            html! {
                                <Link<Route>
                                    to={route.clone()}
                                    classes={classes!("nav-link", active.then_some("active"))}
                                >
                                    <span class="icon">{*icon}</span>
                                    {*name}
                                </Link<Route>>
                            }
                        })}
                    </nav>
                </div>
            </header>

            <main class="container app-main">
                {props.children.clone()}
            </main>
        </div>
    }
}
