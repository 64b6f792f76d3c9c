//! Fixed top navigation with theme toggle and mobile drawer.
//!
//! DESIGN
//! ======
//! Scroll, theme and drawer flags live in the shared `UiState` signal. The
//! scroll listener and theme side effects only exist in the hydrated build.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::logo::Logo;
use crate::content::LAB_NAME;
use crate::state::ui::UiState;

/// A top-level navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/solutions", label: "Solutions" },
    NavLink { href: "/blog", label: "Blog" },
    NavLink { href: "/open-source", label: "Open Source" },
    NavLink { href: "/resources", label: "Resources" },
    NavLink { href: "/contact", label: "Contact" },
];

/// A link is active only on an exact path match.
#[must_use]
pub fn is_active(pathname: &str, href: &str) -> bool {
    pathname == href
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();
    let pathname = location.pathname;

    // Any navigation closes the drawer.
    Effect::new(move || {
        pathname.track();
        ui.update(UiState::close_menu);
    });

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = match web_sys::window().map(|w| w.scroll_y()) {
                Some(Ok(y)) => y,
                _ => 0.0,
            };
            if ui.with_untracked(|u| u.scrolled) != crate::state::ui::is_scrolled(y) {
                ui.update(|u| {
                    u.set_scroll_offset(y);
                });
            }
        });
        on_cleanup(move || handle.remove());
    }

    let on_toggle_theme = move |_| {
        let current = ui.get_untracked().dark_mode;
        let next = crate::util::dark_mode::toggle(current);
        ui.update(|u| u.dark_mode = next);
    };

    let link_class = move |href: &'static str, base: &'static str| {
        move || {
            if is_active(&pathname.get(), href) {
                format!("{base} {base}--active")
            } else {
                base.to_owned()
            }
        }
    };

    view! {
        <nav class="navbar" class:navbar--scrolled=move || ui.get().scrolled>
            <div class="container navbar__inner">
                <a href="/" class="navbar__brand">
                    <Logo size=40/>
                    <span class="navbar__name">{LAB_NAME}</span>
                </a>

                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class=link_class(link.href, "navbar__link")>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="navbar__actions">
                    <button
                        class="btn btn--ghost navbar__theme"
                        on:click=on_toggle_theme
                        title="Toggle dark mode"
                        aria-label="Toggle dark mode"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>
                    <button
                        class="btn btn--ghost navbar__menu"
                        on:click=move |_| ui.update(UiState::open_menu)
                        aria-label="Open menu"
                    >
                        "☰"
                    </button>
                </div>
            </div>
        </nav>

        <Show when=move || ui.get().mobile_menu_open>
            <div class="drawer__backdrop" on:click=move |_| ui.update(UiState::close_menu)></div>
            <aside class="drawer">
                <div class="drawer__header">
                    <span class="drawer__title">"Menu"</span>
                    <button
                        class="btn btn--ghost"
                        on:click=move |_| ui.update(UiState::close_menu)
                        aria-label="Close menu"
                    >
                        "✕"
                    </button>
                </div>
                <nav class="drawer__links">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a href=link.href class=link_class(link.href, "drawer__link")>
                                    {link.label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </aside>
        </Show>
    }
}
