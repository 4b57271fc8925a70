use leptos::{either::Either, prelude::*};

use crate::content::{Achievement, Certification, Project, ProjectLink, Skill};

use super::icons::{Icon, IconKind};

const CARD_CLASS: &str =
    "rounded-lg border border-border bg-card text-card-foreground shadow-sm text-left";

#[component]
pub fn Badge(#[prop(optional)] outline: bool, children: Children) -> impl IntoView {
    let variant = if outline {
        "border border-border text-xs"
    } else {
        "bg-secondary text-secondary-foreground text-sm py-2 px-4 hover:bg-primary hover:text-primary-foreground"
    };
    view! {
        <span class=format!(
            "inline-flex items-center rounded-md px-2.5 py-0.5 font-semibold transition-colors {variant}",
        )>{children()}</span>
    }
}

#[component]
pub fn SkillBadge(skill: Skill) -> impl IntoView {
    view! {
        <div data-kind="skill">
            <Badge>{skill.name}</Badge>
        </div>
    }
}

#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let preview = if project.image.is_empty() {
        Either::Left(view! { <Icon kind=IconKind::Code size=48 class="text-muted-foreground" /> })
    } else {
        Either::Right(
            view! {
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="w-full h-full object-cover rounded-t-lg"
                />
            },
        )
    };

    view! {
        <article
            data-kind="project"
            class=format!("group {CARD_CLASS} hover:shadow-lg transition-all duration-300 hover:-translate-y-2")
        >
            <div class="aspect-video bg-muted rounded-t-lg flex items-center justify-center">
                {preview}
            </div>
            <div class="flex flex-col space-y-1.5 p-6">
                <h3 class="text-2xl font-semibold leading-none tracking-tight group-hover:text-primary transition-colors">
                    {project.title}
                </h3>
                <p class="text-sm text-muted-foreground">{project.description}</p>
            </div>
            <div class="p-6 pt-0">
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <Badge outline=true>{*tech}</Badge> })
                        .collect_view()}
                </div>
                <div class="flex gap-2">
                    {project
                        .links()
                        .into_iter()
                        .map(|link| view! { <ProjectAction link /> })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}

#[component]
fn ProjectAction(link: ProjectLink) -> impl IntoView {
    let (icon, variant) = match link {
        ProjectLink::Code(_) => (IconKind::Github, "border border-border bg-background hover:bg-accent"),
        ProjectLink::Demo(_) => (IconKind::ExternalLink, "bg-primary text-primary-foreground hover:bg-primary/90"),
    };
    view! {
        <a
            href=link.href()
            target="_blank"
            rel="noopener noreferrer"
            data-action=link.label().to_lowercase()
            class=format!(
                "flex-1 inline-flex items-center justify-center rounded-md h-9 px-3 text-sm font-medium transition-colors {variant}",
            )
        >
            <Icon kind=icon size=16 class="mr-2" />
            {link.label()}
        </a>
    }
}

#[component]
pub fn CertificationCard(certification: Certification) -> impl IntoView {
    let issued_by = certification.issued_by();
    let issued_by = (!issued_by.is_empty())
        .then(|| view! { <p class="text-sm text-muted-foreground">{issued_by}</p> });
    let credential = (!certification.credential_id.is_empty()).then(|| {
        view! {
            <p class="text-sm text-muted-foreground">
                "Credential ID: " {certification.credential_id}
            </p>
        }
    });

    view! {
        <article data-kind="certification" class=format!("{CARD_CLASS} hover:shadow-lg transition-shadow")>
            <div class="flex flex-col space-y-1.5 p-6">
                <h3 class="flex items-center gap-2 text-2xl font-semibold leading-none tracking-tight">
                    <Icon kind=IconKind::Award size=20 class="text-primary" />
                    {certification.name}
                </h3>
                {issued_by}
            </div>
            <div class="p-6 pt-0">{credential}</div>
        </article>
    }
}

#[component]
pub fn AchievementCard(achievement: Achievement) -> impl IntoView {
    view! {
        <article data-kind="achievement" class=format!("{CARD_CLASS} hover:shadow-lg transition-shadow")>
            <div class="flex flex-col space-y-1.5 p-6">
                <h3 class="flex items-center gap-2 text-2xl font-semibold leading-none tracking-tight">
                    <Icon kind=IconKind::Star size=20 class="text-primary" />
                    {achievement.title}
                </h3>
                <p class="text-sm text-muted-foreground">{achievement.date}</p>
            </div>
            <div class="p-6 pt-0">
                <p class="text-muted-foreground">{achievement.description}</p>
            </div>
        </article>
    }
}
