//! Scroll-triggered entrance animations.
//!
//! Elements render with a `reveal` class and a variant modifier that holds
//! them in their start pose. In the browser an `IntersectionObserver` adds
//! `is-visible` once the element crosses into the viewport, and the CSS
//! transition plays it in. SSR output carries the start pose only.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

/// Class added when an element has entered the viewport.
pub const VISIBLE_CLASS: &str = "is-visible";

/// Timing shared by every reveal on the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RevealConfig {
    pub duration_ms: u32,
    /// Distance from the bottom of the viewport at which elements trigger.
    pub offset_px: u32,
    /// Animate only the first time an element enters the viewport.
    pub once: bool,
    /// CSS timing function; the default is the ease-out-cubic curve.
    pub easing: &'static str,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self { duration_ms: 800, offset_px: 50, once: true, easing: "cubic-bezier(0.33, 1, 0.68, 1)" }
    }
}

/// Start pose of a reveal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealVariant {
    #[default]
    FadeUp,
    FadeIn,
    ZoomIn,
    SlideLeft,
    SlideRight,
}

impl RevealVariant {
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::FadeUp => "reveal--fade-up",
            Self::FadeIn => "reveal--fade-in",
            Self::ZoomIn => "reveal--zoom-in",
            Self::SlideLeft => "reveal--slide-left",
            Self::SlideRight => "reveal--slide-right",
        }
    }
}

/// Delay for the `index`-th item of a staggered group.
#[must_use]
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(step_ms))
}

/// Observer root margin that shrinks the viewport bottom by `offset_px`.
#[must_use]
pub fn root_margin(offset_px: u32) -> String {
    format!("0px 0px -{offset_px}px 0px")
}

#[must_use]
pub fn reveal_class(variant: RevealVariant, extra: &str) -> String {
    let base = format!("reveal {}", variant.modifier());
    if extra.is_empty() { base } else { format!("{base} {extra}") }
}

#[must_use]
pub fn transition_style(delay_ms: u32, config: &RevealConfig) -> String {
    format!(
        "transition-duration: {}ms; transition-delay: {delay_ms}ms; transition-timing-function: {};",
        config.duration_ms, config.easing
    )
}

#[cfg(feature = "hydrate")]
type ObserverCallback = wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// A live observer together with the JS callback it invokes.
///
/// The callback is owned here rather than leaked, so dropping the handle after
/// [`RevealObserver::disconnect`] frees both sides.
#[cfg(feature = "hydrate")]
pub struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback: ObserverCallback,
}

#[cfg(feature = "hydrate")]
impl RevealObserver {
    /// Stop observing every target and release the callback.
    pub fn disconnect(self) {
        self.observer.disconnect();
    }
}

/// Watch `element` and add [`VISIBLE_CLASS`] when it scrolls into view.
///
/// Returns `None` when the observer cannot be created; the element is then
/// shown immediately so content is never left hidden.
#[cfg(feature = "hydrate")]
pub fn observe(element: &web_sys::Element, config: &RevealConfig) -> Option<RevealObserver> {
    use wasm_bindgen::JsCast as _;

    let once = config.once;
    let callback = ObserverCallback::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                if entry.is_intersecting() {
                    show(&target);
                    if once {
                        observer.unobserve(&target);
                    }
                } else if !once {
                    if let Err(err) = target.class_list().remove_1(VISIBLE_CLASS) {
                        log::warn!("reveal: failed to reset element: {err:?}");
                    }
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_root_margin(&root_margin(config.offset_px));
    match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some(RevealObserver { observer, _callback: callback })
        }
        Err(err) => {
            log::warn!("reveal: IntersectionObserver unavailable: {err:?}");
            show(element);
            None
        }
    }
}

#[cfg(feature = "hydrate")]
fn show(element: &web_sys::Element) {
    if let Err(err) = element.class_list().add_1(VISIBLE_CLASS) {
        log::warn!("reveal: failed to show element: {err:?}");
    }
}
