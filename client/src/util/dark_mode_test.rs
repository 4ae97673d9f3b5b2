use super::*;

#[test]
fn theme_attr_matches_stylesheet_selectors() {
    assert_eq!(theme_attr(true), "dark");
    assert_eq!(theme_attr(false), "light");
}

#[test]
fn toggle_label_names_the_other_theme() {
    assert_eq!(toggle_label(true), "Switch to light mode");
    assert_eq!(toggle_label(false), "Switch to dark mode");
}

#[cfg(not(feature = "csr"))]
#[test]
fn apply_is_noop_but_callable() {
    apply(false);
    apply(true);
}
