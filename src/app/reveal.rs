use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

use crate::motion::{EntranceLatch, Motion};

#[derive(Debug, Clone, Copy)]
struct Revealed(Signal<bool>);

/// Container that plays its children's entrance animations the first time it
/// scrolls into view. Leaving and re-entering the viewport does nothing.
#[component]
pub fn RevealGroup(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);

    let mut latch = EntranceLatch::default();
    Effect::new(move |_| {
        if latch.observe(visible.get()) {
            log::debug!("reveal group entered viewport");
            set_revealed.set(true);
        }
    });

    provide_context(Revealed(revealed.into()));

    view! {
        <div node_ref=target class=class>
            {children()}
        </div>
    }
}

// outside of a group the item renders in its final state
#[component]
pub fn RevealItem(
    #[prop(optional)] motion: Motion,
    #[prop(optional)] delay: f64,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let revealed = use_context::<Revealed>()
        .map(|r| r.0)
        .unwrap_or_else(|| Signal::stored(true));
    let class = move || {
        if revealed.get() {
            format!("reveal is-revealed {class}")
        } else {
            format!("reveal {class}")
        }
    };

    view! {
        <div class=class style=motion.style(delay)>
            {children()}
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn render<V: IntoView>(f: impl FnOnce() -> V) -> String {
        Owner::new().with(|| f().to_html())
    }

    #[test]
    fn test_item_outside_group_is_revealed() {
        let html = render(|| view! { <RevealItem>"hello"</RevealItem> });
        assert!(html.contains("reveal is-revealed"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_item_waits_for_group() {
        let html = render(|| {
            view! {
                <RevealGroup>
                    <RevealItem motion=Motion::Rise delay=0.4>
                        "hello"
                    </RevealItem>
                </RevealGroup>
            }
        });
        assert!(html.contains(r#"class="reveal ""#));
        assert!(!html.contains("is-revealed"));
        assert!(html.contains("--reveal-from: translateY(30px)"));
        assert!(html.contains("transition-delay: 0.40s"));
    }

    #[test]
    fn test_group_context_reaches_nested_items() {
        let html = render(|| {
            view! {
                <RevealGroup>
                    <RevealItem>
                        <RevealItem>"nested"</RevealItem>
                    </RevealItem>
                </RevealGroup>
            }
        });
        assert_eq!(html.matches(r#"class="reveal ""#).count(), 2);
    }
}
