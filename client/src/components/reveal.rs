//! Wrapper that plays an entrance animation when scrolled into view.

use leptos::prelude::*;

use crate::util::reveal::{RevealConfig, RevealVariant, reveal_class, transition_style};

/// Wraps `children` in a block that animates in on first sight.
#[component]
pub fn Reveal(
    #[prop(optional)] variant: RevealVariant,
    #[prop(optional)] delay_ms: u32,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let config = RevealConfig::default();
    let node_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let active = StoredValue::new_local(None::<crate::util::reveal::RevealObserver>);
        Effect::new(move || {
            if let Some(el) = node_ref.get() {
                if active.with_value(Option::is_none) {
                    active.set_value(crate::util::reveal::observe(&el, &config));
                }
            }
        });
        on_cleanup(move || {
            if let Some(observer) = active.try_update_value(Option::take).flatten() {
                observer.disconnect();
            }
        });
    }

    view! {
        <div class=reveal_class(variant, &class) style=transition_style(delay_ms, &config) node_ref=node_ref>
            {children()}
        </div>
    }
}
