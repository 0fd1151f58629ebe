//! Home screen: the catalog listing.
//!
//! Static category data mirroring the panel's home grid; the tour logs
//! the sections a user would browse before diving into a feature
//! screen.

use tracing::info;

/// One catalog section with its tab labels.
pub struct Category {
    /// Section title.
    pub title: &'static str,
    /// Tab labels inside the section.
    pub tabs: &'static [&'static str],
}

/// The home grid contents.
pub const CATALOG: &[Category] = &[
    Category {
        title: "Modes",
        tabs: &[
            "Air conditioner",
            "Air purifier",
            "Lighting",
            "Sound",
            "Headphones",
            "Fridge",
        ],
    },
    Category {
        title: "Levels",
        tabs: &["Fan speed", "Humidifier", "Range hood", "Heater"],
    },
    Category {
        title: "Direction",
        tabs: &[
            "Air outlet",
            "Bathroom heater",
            "Fan",
            "AC sweep",
            "AC hold",
            "Curtain",
        ],
    },
    Category {
        title: "Temperature",
        tabs: &["Air conditioner", "Water heater", "Fridge", "Kettle"],
    },
    Category {
        title: "Buttons",
        tabs: &["Square"],
    },
    Category {
        title: "Stepless",
        tabs: &["Lighting", "Volume", "Player", "Curtain", "Humidifier", "Fan"],
    },
    Category {
        title: "Widgets",
        tabs: &[
            "Control title",
            "Buttons",
            "Slider",
            "Switch slider",
            "Number slider",
            "Stepper",
        ],
    },
];

/// The catalog screen.
pub struct HomeScreen;

impl HomeScreen {
    /// Creates the screen.
    pub fn new() -> Self {
        Self
    }

    /// Logs the catalog a user would browse.
    pub fn run(&self) {
        for category in CATALOG {
            info!(
                section = category.title,
                tabs = category.tabs.len(),
                "catalog section"
            );
        }
    }
}
