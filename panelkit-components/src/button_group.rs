//! Circle and square selector button groups.
//!
//! A row of selectable buttons with single selection per group. Groups
//! wider than the column limit wrap into fixed-width rows, padding the
//! last row with empty slots so every column keeps its width. Pressing
//! an item always reports it; the selection only moves when a
//! different item was pressed (re-pressing the selected one is
//! feedback-only, so hosts can still play a haptic tick).

use derive_setters::Setters;
use panelkit_foundation::CallbackWith;
use smallvec::SmallVec;
use tracing::debug;

/// Visual shape of the group's buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonShape {
    /// Circular icon button with a label underneath.
    #[default]
    Circle,
    /// Rounded square tile with an inset label.
    Square,
}

/// One selectable button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorItem {
    /// Label under or inside the button.
    pub label: String,
    /// Optional glyph shown when no icon asset resolves.
    pub glyph: Option<String>,
    /// Whether this item is the group's selection.
    pub selected: bool,
}

impl SelectorItem {
    /// Creates an unselected item.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            glyph: None,
            selected: false,
        }
    }

    /// Attaches a fallback glyph.
    pub fn glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }
}

/// A row of layout slots: item indices, `None` for padding slots.
pub type SlotRow = SmallVec<[Option<usize>; 4]>;

/// Arguments for constructing a [`ButtonGroup`].
#[derive(Clone, PartialEq, Setters)]
pub struct ButtonGroupArgs {
    /// Button shape.
    pub shape: ButtonShape,
    /// The group's items.
    pub items: Vec<SelectorItem>,
    /// Whether labels are rendered.
    pub show_label: bool,
    /// Optional cap on how many items are visible.
    pub visible_count: Option<usize>,
    /// Items per row before wrapping.
    pub columns: usize,
    /// Fired with the pressed index on every press.
    #[setters(skip)]
    pub on_item_press: Option<CallbackWith<usize>>,
}

impl ButtonGroupArgs {
    /// Sets the press handler.
    pub fn on_item_press<F>(mut self, on_item_press: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.on_item_press = Some(CallbackWith::new(on_item_press));
        self
    }

    /// Sets the press handler from a shared callback.
    pub fn on_item_press_shared(mut self, on_item_press: impl Into<CallbackWith<usize>>) -> Self {
        self.on_item_press = Some(on_item_press.into());
        self
    }
}

impl Default for ButtonGroupArgs {
    fn default() -> Self {
        Self {
            shape: ButtonShape::default(),
            items: Vec::new(),
            show_label: true,
            visible_count: None,
            columns: 4,
            on_item_press: None,
        }
    }
}

/// The selector group widget.
pub struct ButtonGroup {
    shape: ButtonShape,
    items: Vec<SelectorItem>,
    show_label: bool,
    visible_count: Option<usize>,
    columns: usize,
    on_item_press: Option<CallbackWith<usize>>,
}

impl ButtonGroup {
    /// Creates a group from its arguments.
    pub fn new(args: &ButtonGroupArgs) -> Self {
        Self {
            shape: args.shape,
            items: args.items.clone(),
            show_label: args.show_label,
            visible_count: args.visible_count,
            columns: args.columns.max(1),
            on_item_press: args.on_item_press.clone(),
        }
    }

    /// Button shape of this group.
    pub fn shape(&self) -> ButtonShape {
        self.shape
    }

    /// Whether labels are rendered.
    pub fn shows_label(&self) -> bool {
        self.show_label
    }

    /// The visible items.
    pub fn visible_items(&self) -> &[SelectorItem] {
        let count = self
            .visible_count
            .unwrap_or(self.items.len())
            .min(self.items.len());
        &self.items[..count]
    }

    /// Layout slots, wrapped into rows of `columns` once the group
    /// exceeds one row. The final row is padded with `None` slots so
    /// columns keep their width; a single row is never padded.
    pub fn rows(&self) -> SmallVec<[SlotRow; 2]> {
        let visible = self.visible_items().len();
        let mut rows = SmallVec::new();
        if visible <= self.columns {
            rows.push((0..visible).map(Some).collect());
            return rows;
        }
        let row_count = visible.div_ceil(self.columns);
        for row in 0..row_count {
            let mut slots: SlotRow = SmallVec::new();
            for column in 0..self.columns {
                let index = row * self.columns + column;
                slots.push((index < visible).then_some(index));
            }
            rows.push(slots);
        }
        rows
    }

    /// A press on the item at `index`.
    ///
    /// Always reports the press; moves the selection only when a
    /// different item was pressed. Out-of-range indices are ignored.
    pub fn press(&mut self, index: usize) {
        if index >= self.visible_items().len() {
            return;
        }
        if !self.items[index].selected {
            for (position, item) in self.items.iter_mut().enumerate() {
                item.selected = position == index;
            }
            debug!(index, "button group selection");
        }
        if let Some(on_item_press) = &self.on_item_press {
            on_item_press.call(index);
        }
    }

    /// Moves the selection programmatically without reporting a press.
    pub fn select(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        for (position, item) in self.items.iter_mut().enumerate() {
            item.selected = position == index;
        }
    }

    /// The selected index, if any item is selected.
    pub fn selected_index(&self) -> Option<usize> {
        self.items.iter().position(|item| item.selected)
    }

    /// All configured items.
    pub fn items(&self) -> &[SelectorItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn items(count: usize) -> Vec<SelectorItem> {
        (0..count)
            .map(|index| {
                let mut item = SelectorItem::new(format!("item-{index}"));
                item.selected = index == 0;
                item
            })
            .collect()
    }

    #[test]
    fn single_row_groups_are_not_padded() {
        let group = ButtonGroup::new(&ButtonGroupArgs::default().items(items(3)));
        let rows = group.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].as_slice(), &[Some(0), Some(1), Some(2)]);
    }

    #[test]
    fn wide_groups_wrap_with_placeholder_slots() {
        let group = ButtonGroup::new(&ButtonGroupArgs::default().items(items(6)));
        let rows = group.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].as_slice(), &[Some(0), Some(1), Some(2), Some(3)]);
        assert_eq!(rows[1].as_slice(), &[Some(4), Some(5), None, None]);
    }

    #[test]
    fn visible_count_limits_the_layout() {
        let args = ButtonGroupArgs::default().items(items(6)).visible_count(Some(2));
        let group = ButtonGroup::new(&args);
        assert_eq!(group.visible_items().len(), 2);
        assert_eq!(group.rows().len(), 1);
    }

    #[test]
    fn press_moves_the_selection_exclusively() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let args = ButtonGroupArgs::default().items(items(4)).on_item_press({
            let log = log.clone();
            move |index| log.lock().expect("press log").push(index)
        });
        let mut group = ButtonGroup::new(&args);

        group.press(2);
        assert_eq!(group.selected_index(), Some(2));
        assert!(!group.items()[0].selected);

        // Re-pressing reports but keeps the selection.
        group.press(2);
        assert_eq!(group.selected_index(), Some(2));
        assert_eq!(log.lock().expect("log").as_slice(), &[2, 2]);
    }

    #[test]
    fn out_of_range_presses_are_ignored() {
        let mut group = ButtonGroup::new(&ButtonGroupArgs::default().items(items(3)));
        group.press(7);
        assert_eq!(group.selected_index(), Some(0));
    }

    #[test]
    fn programmatic_selection_does_not_report() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let args = ButtonGroupArgs::default().items(items(3)).on_item_press({
            let log = log.clone();
            move |index| log.lock().expect("press log").push(index)
        });
        let mut group = ButtonGroup::new(&args);
        group.select(1);
        assert_eq!(group.selected_index(), Some(1));
        assert!(log.lock().expect("log").is_empty());
    }
}
