//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and sections from the `SiteHandle`
//! context and dispatch DOM events back into it. None of them own timers or
//! persistent state.

pub mod carousel;
pub mod cookie_banner;
pub mod cookie_settings_modal;
pub mod curtain;
pub mod header;
pub mod intro_overlay;
pub mod navbar;
pub mod scramble_logo;
pub mod sections;
pub mod theme_toggle;
