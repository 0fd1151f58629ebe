//! Smart-home control panel widgets.
//!
//! A headless widget catalog: the drag-to-position slider family
//! (snap-to-step, continuous and segmented mode variants), toggle
//! switches, selector button groups, toggle rows and titled control
//! rows, plus the design tokens and animation primitives they share.
//!
//! Widgets own their interaction state and expose it through plain
//! methods: hosts feed pointer events (relative to the widget), report
//! layout sizes, advance animations with frame ticks and read back
//! projection values for visual placement. Committed values flow out
//! through callback slots; nothing here renders or talks to devices.
//!
//! # Example
//!
//! ```
//! use panelkit_components::slider::{Slider, SliderArgs};
//! use panelkit_foundation::Px;
//!
//! let mut slider = Slider::new(&SliderArgs::default().on_change(|index| {
//!     println!("slider committed slot {index}");
//! }));
//! slider.set_track_width(Px(1200));
//!
//! // A tap over slot 4 commits it.
//! slider.on_press(Px(810));
//! slider.on_release();
//! assert_eq!(slider.committed_index(), Some(4));
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;
pub mod button_group;
pub mod control_title;
pub mod input;
pub mod mode_slider;
pub mod slider;
pub mod switch;
pub mod theme;
pub mod toggle_button;
