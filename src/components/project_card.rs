//! One project card with lazy image loading and a staggered entrance.

use leptos::html;
use leptos::prelude::*;

use crate::state::projects::Project;
use crate::util::reveal;

/// Project card. The image waits on `data-src` until the card scrolls into
/// view; the entrance animation fires once, staggered by list position via
/// the `--delay` custom property.
#[component]
pub fn ProjectCard(project: Project, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let image_ref = NodeRef::<html::Img>::new();
    let visible = RwSignal::new(false);

    reveal::mount_reveal(card_ref, visible);
    reveal::mount_lazy_image(image_ref);

    view! {
        <div
            node_ref=card_ref
            class="project-item"
            class:featured=project.featured
            class:animate=move || visible.get()
            style=format!("--delay: {index}")
        >
            <img
                node_ref=image_ref
                class="project-item__image"
                data-src=project.image
                alt=project.title
            />
            <div class="project-item__body">
                <h3 class="project-item__title">{project.title}</h3>
                <p class="project-item__description">{project.description}</p>
                <div class="project-item__tags">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="tech-badge">{*tag}</span> })
                        .collect::<Vec<_>>()}
                </div>
                <a
                    class="project-item__link"
                    href=project.link
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "View Project"
                </a>
            </div>
        </div>
    }
}
