//! Skills page: progress bars that fill on first view, staggered badges.

use leptos::html;
use leptos::prelude::*;

use crate::util::reveal;

/// One skill meter: label and proficiency percentage.
struct Skill {
    label: &'static str,
    percent: u8,
}

const SKILLS: [Skill; 6] = [
    Skill { label: "Rust", percent: 90 },
    Skill { label: "TypeScript", percent: 85 },
    Skill { label: "Python", percent: 80 },
    Skill { label: "SQL & data modeling", percent: 85 },
    Skill { label: "Cloud & CI", percent: 75 },
    Skill { label: "UI & accessibility", percent: 80 },
];

const TECH_BADGES: [&str; 8] = [
    "Leptos",
    "WebAssembly",
    "PostgreSQL",
    "Docker",
    "Axum",
    "React",
    "Tailwind",
    "GitHub Actions",
];

/// Skills page. The bars stay empty until the section scrolls into view,
/// then fill once with a per-bar stagger; the badges fade in the same way.
#[component]
pub fn SkillsPage() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let visible = RwSignal::new(false);
    reveal::mount_reveal(section_ref, visible);

    view! {
        <section class="py-5 skills">
            <h1>"Skills"</h1>

            <div node_ref=section_ref class="skills__bars">
                {SKILLS
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        let percent = skill.percent;
                        view! {
                            <div class="skill">
                                <span class="skill__label">{skill.label}</span>
                                <div
                                    class="progress-bar"
                                    class:animate=move || visible.get()
                                    role="progressbar"
                                    aria-valuenow=percent.to_string()
                                    aria-valuemin="0"
                                    aria-valuemax="100"
                                    style=format!("--progress-width: {percent}%; --delay: {i}")
                                ></div>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="skills__badges">
                {TECH_BADGES
                    .iter()
                    .enumerate()
                    .map(|(i, badge)| {
                        view! {
                            <span class="tech-badge" style=format!("--delay: {i}")>
                                {*badge}
                            </span>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
