//! Presentation engine for the JT Lab site.
//!
//! This crate owns every piece of the site that has temporal logic or state
//! invariants: the intro choreography, the text scramble effect, the section
//! carousel, the post-intro reveal curtain, theme persistence and the cookie
//! consent flow. Nothing here touches the DOM. Time is passed in as
//! milliseconds and randomness as an [`rand::Rng`], so the browser host only
//! has to forward events and frame timestamps and render the resulting state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`site`] | Top-level coordinator that owns all state below |
//! | [`intro`] | Timed intro sequencer and its render snapshot |
//! | [`scramble`] | Character-substitution text animation |
//! | [`page`] | Intro -> curtain -> revealed page flow |
//! | [`nav`] | Section carousel with clamp/loop edge modes |
//! | [`input`] | Wheel/touch/keyboard interpretation for the carousel |
//! | [`sections`] | Canonical section and legal page identifiers |
//! | [`theme`] | Dark/light preference with write-through persistence |
//! | [`consent`] | Cookie consent record and banner/modal flow |
//! | [`prefs`] | Key-value preference store abstraction |
//! | [`timeline`] | Deadline queue shared by all timed components |
//! | [`config`] | Tunable timings and thresholds |
//! | [`consts`] | Reference constants (defaults, storage keys, copy) |

pub mod config;
pub mod consent;
pub mod consts;
pub mod input;
pub mod intro;
pub mod nav;
pub mod page;
pub mod prefs;
pub mod scramble;
pub mod sections;
pub mod site;
pub mod theme;
pub mod timeline;
