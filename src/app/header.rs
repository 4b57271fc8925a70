use leptos::{ev::MouseEvent, prelude::*};

use crate::content::{NavItem, NAVIGATION, PERSONAL_INFO};
use crate::nav::MenuState;

use super::icons::{Icon, IconKind};

const MOBILE_MENU_ID: &str = "mobile-menu";

#[component]
pub fn Header() -> impl IntoView {
    let (menu, set_menu) = signal(MenuState::default());

    let toggle = move |_: MouseEvent| {
        set_menu.update(|m| *m = m.toggled());
        log::debug!("mobile menu {:?}", menu.get_untracked());
    };
    let close = move || set_menu.update(|m| *m = m.after_navigate());

    view! {
        <nav class="fixed top-0 w-full bg-background/80 backdrop-blur-md border-b border-border z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <div class="text-xl font-bold animate-slide-in">{PERSONAL_INFO.name}</div>

                    <div class="hidden md:flex space-x-8" data-nav="desktop">
                        {NAVIGATION
                            .iter()
                            .map(|item| view! { <NavLink item=*item /> })
                            .collect_view()}
                    </div>

                    <button
                        type="button"
                        class="md:hidden"
                        aria-controls=MOBILE_MENU_ID
                        aria-expanded=move || menu.get().is_open().to_string()
                        aria-label=move || menu.get().toggle_label()
                        on:click=toggle
                    >
                        {move || {
                            let kind = if menu.get().is_open() {
                                IconKind::Close
                            } else {
                                IconKind::Menu
                            };
                            view! { <Icon kind /> }
                        }}
                    </button>
                </div>

                <Show when=move || menu.get().is_open()>
                    <div
                        id=MOBILE_MENU_ID
                        class="md:hidden py-4 border-t border-border animate-drop-in"
                        data-nav="mobile"
                    >
                        {NAVIGATION
                            .iter()
                            .map(|item| {
                                view! {
                                    <a
                                        href=item.href
                                        class="block py-2 text-muted-foreground hover:text-foreground transition-colors"
                                        on:click=move |_| close()
                                    >
                                        {item.name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(item: NavItem) -> impl IntoView {
    view! {
        <a
            href=item.href
            class="text-muted-foreground hover:text-foreground transition-colors"
        >
            {item.name}
        </a>
    }
}
