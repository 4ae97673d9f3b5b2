//! Theme application on the document root.
//!
//! The preference itself lives in `stage::theme` and is persisted through the
//! preference store; this module only mirrors the current value onto the
//! `<html data-theme>` attribute the stylesheet keys off.
//!
//! TRADE-OFFS
//! ==========
//! Applying the attribute is best-effort: outside a browser, or when the
//! document has no root element, the call logs and does nothing.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Attribute value for the given theme.
pub fn theme_attr(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(root) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            log::warn!("dark_mode: no document root");
            return;
        };
        if let Err(err) = root.set_attribute("data-theme", theme_attr(dark)) {
            log::warn!("dark_mode: set data-theme failed: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("dark_mode: apply({}) skipped off-browser", theme_attr(dark));
    }
}

/// Accessible label for the theme toggle button.
pub fn toggle_label(dark: bool) -> &'static str {
    if dark { "Switch to light mode" } else { "Switch to dark mode" }
}
