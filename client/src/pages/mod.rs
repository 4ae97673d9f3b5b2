//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `landing` owns the site engine for its lifetime and wires window-level
//! input into it. `legal` pages are static and only read the stored theme.

pub mod landing;
pub mod legal;
