use leptos::prelude::*;

use crate::content::{ABOUT, ACHIEVEMENTS, CERTIFICATIONS, PERSONAL_INFO, PROJECTS, SKILLS};
use crate::motion::{Motion, Stagger};

use super::cards::{AchievementCard, CertificationCard, ProjectCard, SkillBadge};
use super::icons::{Icon, IconKind};
use super::reveal::{RevealGroup, RevealItem};

#[component]
fn SectionHeading(icon: IconKind, title: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center gap-2 mb-4">
            <Icon kind=icon class="text-primary" />
            <h2 class="text-3xl md:text-4xl font-bold">{title}</h2>
        </div>
    }
}

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 bg-muted/30">
            <div class="max-w-6xl mx-auto px-4">
                <RevealGroup class="text-center mb-16">
                    <RevealItem delay=Stagger::HEADINGS.delay_for(0)>
                        <SectionHeading icon=IconKind::User title="About Me" />
                    </RevealItem>
                    <RevealItem delay=Stagger::HEADINGS.delay_for(1)>
                        <p class="text-lg text-muted-foreground max-w-3xl mx-auto">{ABOUT}</p>
                    </RevealItem>
                </RevealGroup>
            </div>
        </section>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="py-20">
            <div class="max-w-6xl mx-auto px-4">
                <RevealGroup class="text-center mb-16">
                    <RevealItem delay=Stagger::HEADINGS.delay_for(0)>
                        <SectionHeading icon=IconKind::Code title="Skills" />
                    </RevealItem>
                    <RevealItem
                        delay=Stagger::HEADINGS.delay_for(1)
                        class="flex flex-wrap justify-center gap-3 max-w-4xl mx-auto"
                    >
                        {SKILLS
                            .iter()
                            .enumerate()
                            .map(|(i, skill)| {
                                view! {
                                    <RevealItem motion=Motion::ScaleIn delay=Stagger::BADGES.delay_for(i)>
                                        <SkillBadge skill=*skill />
                                    </RevealItem>
                                }
                            })
                            .collect_view()}
                    </RevealItem>
                </RevealGroup>
            </div>
        </section>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 bg-muted/30">
            <div class="max-w-6xl mx-auto px-4">
                <RevealGroup class="text-center mb-16">
                    <RevealItem delay=Stagger::HEADINGS.delay_for(0)>
                        <SectionHeading icon=IconKind::Briefcase title="Projects" />
                    </RevealItem>
                    <RevealItem delay=Stagger::HEADINGS.delay_for(1)>
                        <p class="text-lg text-muted-foreground">
                            "Here are some of my recent projects that showcase my skills and experience."
                        </p>
                    </RevealItem>
                </RevealGroup>
                <RevealGroup class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(i, project)| {
                            view! {
                                <RevealItem motion=Motion::Rise delay=Stagger::CARDS.delay_for(i)>
                                    <ProjectCard project=*project />
                                </RevealItem>
                            }
                        })
                        .collect_view()}
                </RevealGroup>
            </div>
        </section>
    }
}

#[component]
pub fn Certifications() -> impl IntoView {
    view! {
        <section id="certifications" class="py-20">
            <div class="max-w-6xl mx-auto px-4">
                <RevealGroup class="text-center mb-16">
                    <RevealItem>
                        <SectionHeading icon=IconKind::GraduationCap title="Certifications" />
                    </RevealItem>
                </RevealGroup>
                <RevealGroup class="grid md:grid-cols-2 gap-6">
                    {CERTIFICATIONS
                        .iter()
                        .enumerate()
                        .map(|(i, certification)| {
                            view! {
                                <RevealItem
                                    motion=Motion::alternating(i)
                                    delay=Stagger::CARDS.delay_for(i)
                                >
                                    <CertificationCard certification=*certification />
                                </RevealItem>
                            }
                        })
                        .collect_view()}
                </RevealGroup>
            </div>
        </section>
    }
}

#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <section id="achievements" class="py-20 bg-muted/30">
            <div class="max-w-6xl mx-auto px-4">
                <RevealGroup class="text-center mb-16">
                    <RevealItem>
                        <SectionHeading icon=IconKind::Trophy title="Achievements" />
                    </RevealItem>
                </RevealGroup>
                <RevealGroup class="grid md:grid-cols-2 gap-6">
                    {ACHIEVEMENTS
                        .iter()
                        .enumerate()
                        .map(|(i, achievement)| {
                            view! {
                                <RevealItem motion=Motion::Rise delay=Stagger::CARDS.delay_for(i)>
                                    <AchievementCard achievement=*achievement />
                                </RevealItem>
                            }
                        })
                        .collect_view()}
                </RevealGroup>
            </div>
        </section>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let button = "group inline-flex items-center justify-center rounded-md h-11 px-8 font-medium transition-colors";
    let outline = format!("{button} border border-border bg-background hover:bg-accent");

    view! {
        <section id="contact" class="py-20">
            <div class="max-w-4xl mx-auto px-4 text-center">
                <RevealGroup>
                    <RevealItem delay=Stagger::HEADINGS.delay_for(0)>
                        <SectionHeading icon=IconKind::Mail title="Get In Touch" />
                    </RevealItem>
                    <RevealItem delay=Stagger::HEADINGS.delay_for(1)>
                        <p class="text-lg text-muted-foreground mb-12">
                            "I'm always open to discussing new opportunities and interesting projects. Feel free to reach out if you'd like to connect!"
                        </p>
                    </RevealItem>
                    <RevealItem
                        delay=Stagger::HEADINGS.delay_for(2)
                        class="flex flex-wrap justify-center gap-6"
                    >
                        <a
                            href=PERSONAL_INFO.mailto()
                            data-contact="email"
                            class=format!("{button} bg-primary text-primary-foreground hover:bg-primary/90")
                        >
                            <Icon
                                kind=IconKind::Mail
                                size=20
                                class="mr-2 group-hover:scale-110 transition-transform"
                            />
                            "Email Me"
                        </a>
                        <a
                            href=PERSONAL_INFO.linkedin
                            target="_blank"
                            rel="noopener noreferrer"
                            data-contact="linkedin"
                            class=outline.clone()
                        >
                            <Icon
                                kind=IconKind::Linkedin
                                size=20
                                class="mr-2 group-hover:scale-110 transition-transform"
                            />
                            "LinkedIn"
                        </a>
                        <a
                            href=PERSONAL_INFO.github
                            target="_blank"
                            rel="noopener noreferrer"
                            data-contact="github"
                            class=outline
                        >
                            <Icon
                                kind=IconKind::Github
                                size=20
                                class="mr-2 group-hover:scale-110 transition-transform"
                            />
                            "GitHub"
                        </a>
                    </RevealItem>
                </RevealGroup>
            </div>
        </section>
    }
}
