//! # client
//!
//! Leptos + WASM frontend for the JT Lab site.
//!
//! The presentation logic lives in the `stage` crate; this crate renders it
//! and connects it to the browser. Browser APIs are only touched behind the
//! `csr` feature, so `cargo test` on the host exercises the pure helpers.
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Router and document metadata |
//! | [`pages`] | Landing page (engine owner) and legal pages |
//! | [`components`] | Header, intro, curtain, carousel, consent UI, sections |
//! | [`state`] | `SiteHandle`: the engine in a signal plus frame scheduling |
//! | [`util`] | Storage, clock, theme attribute, config block, input values |

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;
