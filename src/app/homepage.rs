use chrono::{Datelike, Utc};
use leptos::prelude::*;

use crate::content::PERSONAL_INFO;

use super::header::Header;
use super::hero::Hero;
use super::sections::{About, Achievements, Certifications, Contact, Projects, Skills};

pub fn footer_text(year: i32, name: &str) -> String {
    format!("© {year} {name}. Built with Leptos and Tailwind CSS.")
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-background text-foreground">
            <Header />
            <Hero />
            <About />
            <Skills />
            <Projects />
            <Certifications />
            <Achievements />
            <Contact />
            <Footer />
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = Utc::now().year();
    view! {
        <footer class="py-8 border-t border-border">
            <div class="max-w-6xl mx-auto px-4 text-center">
                <p class="text-muted-foreground">{footer_text(year, PERSONAL_INFO.name)}</p>
            </div>
        </footer>
    }
}
