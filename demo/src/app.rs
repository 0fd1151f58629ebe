//! Screen registry and the scripted tour.
//!
//! A stack navigator in miniature: the home catalog at the bottom,
//! feature screens pushed on top and popped when their session ends.
//! The tour visits every screen the way a user browsing the panel
//! would.

use tracing::info;

use crate::{
    robot::Robot,
    screens::{
        air_conditioner::AirConditionerScreen, button_group_screen::ButtonGroupScreen,
        control_title_screen::ControlTitleScreen, home::HomeScreen,
        slider_screen::SliderScreen,
    },
};

/// The navigable screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The catalog listing.
    Home,
    /// The step slider card.
    Sliders,
    /// Circle/square groups and toggle rows.
    ButtonGroups,
    /// Titled rows with pills and switches.
    ControlTitles,
    /// The mode picker in both styles.
    AirConditioner,
}

impl Route {
    fn title(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Sliders => "sliders",
            Route::ButtonGroups => "button groups",
            Route::ControlTitles => "control titles",
            Route::AirConditioner => "air conditioner",
        }
    }
}

/// The demo application.
pub struct App {
    stack: Vec<Route>,
}

impl App {
    /// Creates the app resting on the home screen.
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    fn push(&mut self, route: Route) {
        info!(screen = route.title(), "navigate");
        self.stack.push(route);
    }

    fn pop(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        if let Some(current) = self.stack.last() {
            info!(screen = current.title(), "back");
        }
    }

    /// Visits every screen with a scripted session.
    pub fn run_tour(&mut self, robot: &mut Robot) {
        HomeScreen::new().run();

        self.push(Route::Sliders);
        SliderScreen::new().run(robot);
        self.pop();

        self.push(Route::ButtonGroups);
        ButtonGroupScreen::new().run();
        self.pop();

        self.push(Route::ControlTitles);
        ControlTitleScreen::new().run();
        self.pop();

        self.push(Route::AirConditioner);
        AirConditionerScreen::new().run(robot);
        self.pop();
    }
}
