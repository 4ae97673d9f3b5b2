//! Reactive state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! All presentation state lives in one `stage::site::Site`. This module wraps
//! it in a signal and owns the frame scheduling around it; components read
//! from it and dispatch DOM events into it.

pub mod site;
