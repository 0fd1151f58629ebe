//! The browsable screens of the control panel tour.

pub mod air_conditioner;
pub mod button_group_screen;
pub mod control_title_screen;
pub mod home;
pub mod slider_screen;
