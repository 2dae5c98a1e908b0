//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::back_to_top::BackToTop;
use crate::components::navbar::Navbar;
use crate::components::page_loader::PageLoader;
use crate::pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, projects::ProjectsPage,
    skills::SkillsPage,
};
use crate::state::ui::{ScrollFx, UiState};
use crate::util::{scroll, theme};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the shared chrome state, applies the persisted theme on startup,
/// attaches the window scroll effects once, and routes the five pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    provide_context(ui);

    // Theme first, so the correct body class is there before first paint.
    let saved = theme::read_preference();
    theme::apply(saved);
    ui.update(|state| state.theme = saved);

    scroll::attach_scroll_effects(ui, ScrollFx::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Portfolio"/>

        <Router>
            <PageLoader/>
            <Navbar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("skills") view=SkillsPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <BackToTop/>
        </Router>
    }
}
