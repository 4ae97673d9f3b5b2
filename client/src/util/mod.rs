//! Browser glue shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate `window`, `localStorage`, `performance` and
//! requestAnimationFrame access from components so the engine in `stage`
//! never sees a DOM type. Each browser call is gated on the `csr` feature and
//! degrades to a no-op (or a fixed value) on the host, which keeps the pure
//! helpers here testable with plain `cargo test`.

pub mod clock;
pub mod config;
pub mod dark_mode;
pub mod frame_loop;
pub mod input;
pub mod storage;
