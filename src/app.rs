mod cards;
mod header;
mod hero;
mod homepage;
mod icons;
mod reveal;
mod sections;

pub use homepage::{footer_text, HomePage};

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PERSONAL_INFO;

// never removed: the page has no light theme
pub const THEME_CLASS: &str = "dark";

const BUILD_TIME: &str = env!("BUILD_TIME");

/// Set on `<html>` after hydration. Reveal targets are only hidden under it.
pub const REVEAL_READY_CLASS: &str = "reveal-ready";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class=THEME_CLASS>
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <meta name="build-time" content=BUILD_TIME />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=format!("{} - {}", PERSONAL_INFO.name, PERSONAL_INFO.title) />
        <Meta name="description" content=PERSONAL_INFO.bio />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[cfg(feature = "ssr")]
fn respond_not_found() {
    if let Some(res) = use_context::<leptos_axum::ResponseOptions>() {
        res.set_status(http::StatusCode::NOT_FOUND);
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    respond_not_found();

    view! {
        <Title text="Page not found" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4 bg-background text-foreground">
            <h1 class="text-5xl font-bold">"404"</h1>
            <p class="text-muted-foreground">"There's nothing at this address."</p>
            <a href="/" class="text-primary hover:underline">
                "Back to " {PERSONAL_INFO.name}
            </a>
        </main>
    }
}
