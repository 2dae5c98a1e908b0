//! Projects page with All/Featured filtering.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::state::projects::{Project, ProjectFilter};

/// The portfolio entries, in display order.
fn portfolio_projects() -> Vec<Project> {
    vec![
        Project {
            title: "Ledgerline",
            description: "Double-entry budgeting app with offline-first sync.",
            image: "images/projects/ledgerline.webp",
            tags: &["Rust", "WebAssembly", "SQLite"],
            featured: true,
            link: "https://example.com/ledgerline",
        },
        Project {
            title: "Wavefold",
            description: "Browser-based granular synthesizer and sequencer.",
            image: "images/projects/wavefold.webp",
            tags: &["TypeScript", "WebAudio"],
            featured: false,
            link: "https://example.com/wavefold",
        },
        Project {
            title: "Fieldnotes",
            description: "Markdown knowledge base with full-text search.",
            image: "images/projects/fieldnotes.webp",
            tags: &["Rust", "Axum", "PostgreSQL"],
            featured: true,
            link: "https://example.com/fieldnotes",
        },
        Project {
            title: "Traceroute Atlas",
            description: "Visualizes network paths on a world map in real time.",
            image: "images/projects/traceroute-atlas.webp",
            tags: &["Python", "D3"],
            featured: false,
            link: "https://example.com/traceroute-atlas",
        },
        Project {
            title: "Shutterstack",
            description: "Photo portfolio generator with smart layout packing.",
            image: "images/projects/shutterstack.webp",
            tags: &["Rust", "Image processing"],
            featured: false,
            link: "https://example.com/shutterstack",
        },
    ]
}

/// Projects page: filter buttons and the filtered card grid. Cards keep
/// their unfiltered list index for the stagger delay, so filtering doesn't
/// reshuffle the entrance order.
#[component]
pub fn ProjectsPage() -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::default());

    view! {
        <section class="py-5 projects">
            <h1>"Projects"</h1>

            <div class="projects__filters" role="group" aria-label="Filter projects">
                {[ProjectFilter::All, ProjectFilter::Featured]
                    .iter()
                    .map(|&option| {
                        view! {
                            <button
                                class="filter-btn"
                                class:active=move || filter.get() == option
                                on:click=move |_| filter.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="projects__grid">
                {move || {
                    let active = filter.get();
                    portfolio_projects()
                        .into_iter()
                        .enumerate()
                        .filter(|(_, project)| active.matches(project))
                        .map(|(index, project)| {
                            view! { <ProjectCard project=project index=index/> }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </section>
    }
}
