//! Top navigation bar with scroll styling, active-link highlighting, and the
//! theme toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::{Theme, UiState};
use crate::util::theme;

/// Navigation entries in display order: route path and label.
const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Home"),
    ("/about", "About"),
    ("/skills", "Skills"),
    ("/projects", "Projects"),
    ("/contact", "Contact"),
];

/// Site navbar.
///
/// Gains the `scrolled` class past the configured scroll depth, marks the
/// link matching the current location as `active`, and hosts the theme
/// toggle button, which persists the flipped preference on every click.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let on_toggle_theme = move |_| {
        ui.update(|state| state.theme = theme::toggle(state.theme));
    };

    let toggle_label = move || match ui.get().theme {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    };

    // Sun while dark, moon while light: the icon shows the theme a click
    // switches to.
    let toggle_icon = move || match ui.get().theme {
        Theme::Light => "fas fa-moon theme-icon",
        Theme::Dark => "fas fa-sun theme-icon",
    };

    view! {
        <nav class="navbar" class:scrolled=move || ui.get().navbar_scrolled>
            <a class="navbar__brand" href="/">
                "Portfolio"
            </a>
            <ul class="navbar-nav">
                {NAV_LINKS
                    .iter()
                    .map(|(href, label)| {
                        let href = *href;
                        let label = *label;
                        let is_active = move || location.pathname.get() == href;
                        view! {
                            <li class="nav-item">
                                <a class="nav-link" class:active=is_active href=href>
                                    {label}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
                <li class="nav-item">
                    <button class="theme-toggle" aria-label=toggle_label on:click=on_toggle_theme>
                        <i class=toggle_icon aria-hidden="true"></i>
                    </button>
                </li>
            </ul>
        </nav>
    }
}
