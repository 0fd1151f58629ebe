//! Toggle button rows: independently switchable cards with a
//! secondary title action.
//!
//! Each row is an on/off card (airflow, horizontal sweep, ...) whose
//! body press toggles it. The title line is its own press target,
//! active only while the row is on; hosts typically open a detail
//! drawer from it, so the widget surfaces it as a callback.

use derive_setters::Setters;
use panelkit_foundation::CallbackWith;
use tracing::debug;

/// One toggleable row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleItem {
    /// Stable identifier reported through the callbacks.
    pub id: String,
    /// Title line (also the secondary press target).
    pub title: String,
    /// Subtitle line.
    pub subtitle: String,
    /// Whether the row is on.
    pub enabled: bool,
    /// Optional icon asset name.
    pub icon: Option<String>,
}

impl ToggleItem {
    /// Creates an off row.
    pub fn new(id: impl Into<String>, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            subtitle: subtitle.into(),
            enabled: false,
            icon: None,
        }
    }

    /// Marks the row as initially on.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Attaches an icon asset name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Arguments for constructing a [`ToggleButtonGroup`].
#[derive(Clone, PartialEq, Default, Setters)]
pub struct ToggleButtonGroupArgs {
    /// The rows.
    pub items: Vec<ToggleItem>,
    /// Fired with the row id after a body press toggled it.
    #[setters(skip)]
    pub on_item_press: Option<CallbackWith<String>>,
    /// Fired with the row id after a title press on an enabled row.
    #[setters(skip)]
    pub on_item_title_press: Option<CallbackWith<String>>,
}

impl ToggleButtonGroupArgs {
    /// Sets the body-press handler.
    pub fn on_item_press<F>(mut self, on_item_press: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_item_press = Some(CallbackWith::new(on_item_press));
        self
    }

    /// Sets the title-press handler.
    pub fn on_item_title_press<F>(mut self, on_item_title_press: F) -> Self
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.on_item_title_press = Some(CallbackWith::new(on_item_title_press));
        self
    }
}

/// The toggle row group widget.
pub struct ToggleButtonGroup {
    items: Vec<ToggleItem>,
    on_item_press: Option<CallbackWith<String>>,
    on_item_title_press: Option<CallbackWith<String>>,
}

impl ToggleButtonGroup {
    /// Creates a group from its arguments.
    pub fn new(args: &ToggleButtonGroupArgs) -> Self {
        Self {
            items: args.items.clone(),
            on_item_press: args.on_item_press.clone(),
            on_item_title_press: args.on_item_title_press.clone(),
        }
    }

    /// A body press on the row at `index`: toggles it and reports its
    /// id. Out-of-range indices are ignored.
    pub fn press(&mut self, index: usize) {
        let Some(item) = self.items.get_mut(index) else {
            return;
        };
        item.enabled = !item.enabled;
        debug!(id = %item.id, enabled = item.enabled, "toggle row");
        let id = item.id.clone();
        if let Some(on_item_press) = &self.on_item_press {
            on_item_press.call(id);
        }
    }

    /// A title press on the row at `index`: reports the id, but only
    /// while the row is on.
    pub fn title_press(&self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        if !item.enabled {
            return;
        }
        if let Some(on_item_title_press) = &self.on_item_title_press {
            on_item_title_press.call(item.id.clone());
        }
    }

    /// The rows.
    pub fn items(&self) -> &[ToggleItem] {
        &self.items
    }

    /// Whether the row with `id` is on.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.items
            .iter()
            .any(|item| item.id == id && item.enabled)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn rows() -> Vec<ToggleItem> {
        vec![
            ToggleItem::new("toggle-1", "Airflow", "Dual soft").enabled(true),
            ToggleItem::new("toggle-2", "Vertical sweep", "Dual soft"),
            ToggleItem::new("toggle-3", "Horizontal sweep", "Dual soft"),
        ]
    }

    #[test]
    fn press_toggles_only_the_pressed_row() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let args = ToggleButtonGroupArgs::default().items(rows()).on_item_press({
            let log = log.clone();
            move |id: String| log.lock().expect("press log").push(id)
        });
        let mut group = ToggleButtonGroup::new(&args);

        group.press(1);
        assert!(group.is_enabled("toggle-2"));
        assert!(group.is_enabled("toggle-1"));
        assert!(!group.is_enabled("toggle-3"));

        group.press(1);
        assert!(!group.is_enabled("toggle-2"));
        assert_eq!(
            log.lock().expect("log").as_slice(),
            &["toggle-2".to_string(), "toggle-2".to_string()]
        );
    }

    #[test]
    fn title_press_requires_the_row_to_be_on() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let args = ToggleButtonGroupArgs::default()
            .items(rows())
            .on_item_title_press({
                let log = log.clone();
                move |id: String| log.lock().expect("title log").push(id)
            });
        let group = ToggleButtonGroup::new(&args);

        group.title_press(0);
        group.title_press(1);
        assert_eq!(log.lock().expect("log").as_slice(), &["toggle-1".to_string()]);
    }

    #[test]
    fn out_of_range_presses_are_ignored() {
        let mut group = ToggleButtonGroup::new(&ToggleButtonGroupArgs::default().items(rows()));
        group.press(9);
        group.title_press(9);
        assert_eq!(group.items().len(), 3);
    }
}
