//! Foundation types for the panelkit widget crates.
//!
//! Units ([`Px`], [`Dp`]), colors, shared state handles, callback slots
//! and the pointer event model. Everything here is leaf-level: no
//! widget logic, no rendering, no host integration.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod callback;
pub mod color;
pub mod cursor;
pub mod dp;
pub mod px;
pub mod state;

pub use callback::{Callback, CallbackWith};
pub use color::Color;
pub use cursor::{CursorEvent, CursorEventContent, PressKeyEventType};
pub use dp::{Dp, set_scale_factor};
pub use px::{Px, PxPosition, PxSize};
pub use state::State;
