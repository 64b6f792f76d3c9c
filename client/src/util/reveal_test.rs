use super::*;

#[test]
fn default_config_matches_site_timing() {
    let config = RevealConfig::default();
    assert_eq!(config.duration_ms, 800);
    assert_eq!(config.offset_px, 50);
    assert!(config.once);
}

#[test]
fn default_easing_is_ease_out_cubic_curve() {
    assert_eq!(RevealConfig::default().easing, "cubic-bezier(0.33, 1, 0.68, 1)");
}

#[test]
fn stagger_delay_scales_with_index() {
    assert_eq!(stagger_delay_ms(0, 100), 0);
    assert_eq!(stagger_delay_ms(3, 100), 300);
    assert_eq!(stagger_delay_ms(2, 50), 100);
}

#[test]
fn stagger_delay_saturates() {
    assert_eq!(stagger_delay_ms(usize::MAX, 100), u32::MAX);
    assert_eq!(stagger_delay_ms(1 << 30, 1 << 10), u32::MAX);
}

#[test]
fn root_margin_shrinks_bottom_edge() {
    assert_eq!(root_margin(50), "0px 0px -50px 0px");
}

#[test]
fn reveal_class_appends_extra_classes() {
    assert_eq!(reveal_class(RevealVariant::FadeUp, ""), "reveal reveal--fade-up");
    assert_eq!(reveal_class(RevealVariant::ZoomIn, "card"), "reveal reveal--zoom-in card");
}

#[test]
fn variant_default_is_fade_up() {
    assert_eq!(RevealVariant::default(), RevealVariant::FadeUp);
}

#[test]
fn variant_modifiers_are_distinct() {
    let variants = [
        RevealVariant::FadeUp,
        RevealVariant::FadeIn,
        RevealVariant::ZoomIn,
        RevealVariant::SlideLeft,
        RevealVariant::SlideRight,
    ];
    for (i, a) in variants.iter().enumerate() {
        for (j, b) in variants.iter().enumerate() {
            assert_eq!(i == j, a.modifier() == b.modifier());
        }
    }
}

#[test]
fn transition_style_carries_timing() {
    let style = transition_style(200, &RevealConfig::default());
    assert!(style.contains("transition-duration: 800ms;"));
    assert!(style.contains("transition-delay: 200ms;"));
}
