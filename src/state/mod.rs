//! Shared overlay state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider owns one `RwSignal` per state struct below; regions, forms,
//! and chrome read/write them via `expect_context`. Everything here is plain
//! data so the transition rules test on the native target.

pub mod mode;
pub mod session;
pub mod toasts;
pub mod ui;
