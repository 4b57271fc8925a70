use leptos::prelude::*;
use leptos_use::{use_window_scroll, use_window_size};

use crate::content::PERSONAL_INFO;
use crate::motion::parallax_offset;

use super::icons::{Icon, IconKind};

#[cfg(feature = "hydrate")]
fn page_progress(scroll_y: f64, viewport_height: f64) -> f64 {
    use crate::motion::scroll_progress;

    let Some(root) = document().document_element() else {
        return 0.0;
    };
    scroll_progress(scroll_y, root.scroll_height() as f64, viewport_height)
}

// the server always renders the page scrolled to the top
#[cfg(not(feature = "hydrate"))]
fn page_progress(_scroll_y: f64, _viewport_height: f64) -> f64 {
    0.0
}

#[component]
pub fn Hero() -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let viewport = use_window_size();
    let offset = Memo::new(move |_| {
        // a width change reflows the page and changes its scroll height
        viewport.width.track();
        parallax_offset(page_progress(scroll_y.get(), viewport.height.get()))
    });

    view! {
        <section class="min-h-screen flex items-center justify-center relative overflow-hidden">
            <div
                class="absolute inset-0 bg-gradient-to-br from-primary/10 to-secondary/10"
                data-parallax=""
                style=move || format!("transform: translateY({:.2}%)", offset.get())
            ></div>
            <div class="max-w-4xl mx-auto px-4 text-center relative z-10">
                <div class="animate-hero-in">
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 bg-gradient-to-r from-foreground to-muted-foreground bg-clip-text text-transparent">
                        {PERSONAL_INFO.name}
                    </h1>
                    <p class="text-xl md:text-2xl text-muted-foreground mb-8">
                        {PERSONAL_INFO.title}
                    </p>
                    <p class="text-lg text-muted-foreground mb-12 max-w-2xl mx-auto">
                        {PERSONAL_INFO.bio}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <a
                            href="#contact"
                            class="group inline-flex items-center justify-center gap-2 rounded-md h-11 px-8 bg-primary text-primary-foreground hover:bg-primary/90 transition-colors"
                        >
                            "Get In Touch"
                            <Icon
                                kind=IconKind::ExternalLink
                                size=16
                                class="group-hover:translate-x-1 transition-transform"
                            />
                        </a>
                        <a
                            href="#projects"
                            class="inline-flex items-center justify-center gap-2 rounded-md h-11 px-8 border border-border bg-background hover:bg-accent transition-colors"
                        >
                            "View My Work"
                            <Icon kind=IconKind::Code size=16 />
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
