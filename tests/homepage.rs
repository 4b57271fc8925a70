#![cfg(feature = "ssr")]

use chrono::{Datelike, Utc};
use leptos::prelude::*;
use portfolio_site::app::{footer_text, HomePage, REVEAL_READY_CLASS};
use portfolio_site::content::{NAVIGATION, PERSONAL_INFO, PROJECTS};

fn render_home() -> String {
    let owner = Owner::new();
    owner.with(|| view! { <HomePage /> }.to_html())
}

const STYLESHEET: &str = include_str!("../input.css");

fn count(html: &str, needle: &str) -> usize {
    html.matches(needle).count()
}

#[test]
fn test_renders_every_card() {
    let html = render_home();

    assert_eq!(count(&html, r#"data-kind="skill""#), 12);
    assert_eq!(count(&html, r#"data-kind="project""#), 3);
    assert_eq!(count(&html, r#"data-kind="certification""#), 2);
    assert_eq!(count(&html, r#"data-kind="achievement""#), 2);
}

#[test]
fn test_project_cards_have_two_actions() {
    let html = render_home();

    assert_eq!(count(&html, r#"data-action="code""#), 3);
    assert_eq!(count(&html, r#"data-action="demo""#), 3);
    for project in PROJECTS {
        assert!(html.contains(project.github), "missing code link for {}", project.title);
        assert!(html.contains(project.demo), "missing demo link for {}", project.title);
    }
}

#[test]
fn test_footer_has_year_and_name() {
    let html = render_home();
    let year = Utc::now().year();

    assert!(html.contains("<footer"));
    assert!(html.contains(&footer_text(year, PERSONAL_INFO.name)));
    assert!(html.contains("Your Name"));
}

#[test]
fn test_nav_targets_exist_on_page() {
    let html = render_home();

    for item in NAVIGATION {
        assert!(html.contains(&format!(r#"href="{}""#, item.href)));
        assert!(
            html.contains(&format!(r#"id="{}""#, item.section_id())),
            "no section for {}",
            item.name
        );
    }
}

#[test]
fn test_mobile_menu_starts_closed() {
    let html = render_home();

    assert!(html.contains(r#"data-nav="desktop""#));
    assert!(!html.contains(r#"data-nav="mobile""#));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(html.contains(r#"aria-label="Open menu""#));
}

#[test]
fn test_page_renders_unscrolled() {
    let html = render_home();

    assert!(html.contains("translateY(0.00%)"));
}

#[test]
fn test_contact_links() {
    let html = render_home();

    assert!(html.contains(r#"href="mailto:your.email@example.com""#));
    assert!(html.contains(PERSONAL_INFO.linkedin));
    assert!(html.contains(PERSONAL_INFO.github));
}

#[test]
fn test_content_visible_without_hydration() {
    let html = render_home();

    // sections are server rendered in their pre-animation classes...
    assert!(count(&html, r#"class="reveal "#) > 0);
    // ...but nothing on the page hides them until the client marks the root
    assert!(!html.contains(REVEAL_READY_CLASS));
    assert!(!html.contains("opacity"));
}

#[test]
fn test_hidden_pose_requires_hydrated_root() {
    let gated = format!(".{REVEAL_READY_CLASS} .reveal:not(.is-revealed)");
    let start = STYLESHEET.find(&gated).expect("gated reveal rule");
    let rule = &STYLESHEET[start..start + STYLESHEET[start..].find('}').expect("rule end")];
    assert!(rule.contains("opacity: 0"));

    // the bare selector only sets up the transition
    let start = STYLESHEET.find("\n.reveal {").expect("base reveal rule");
    let rule = &STYLESHEET[start..start + STYLESHEET[start..].find('}').expect("rule end")];
    assert!(!rule.contains("opacity"));
    assert!(!rule.contains("transform:"));
}
