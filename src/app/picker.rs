//! Type-to-filter list selector used by the state and city steps.

use crate::api::model::{CityOption, StateOption};

/// Rows moved by PgUp/PgDn.
pub const PAGE_SIZE: usize = 10;

/// Something a [`Picker`] can list and filter.
pub trait Labeled {
    fn label(&self) -> &str;
}

impl Labeled for StateOption {
    fn label(&self) -> &str {
        &self.name
    }
}

impl Labeled for CityOption {
    fn label(&self) -> &str {
        &self.name
    }
}

/// Cursor and filter text over a list owned elsewhere. `selected` indexes the
/// filtered view, not the underlying list.
#[derive(Debug, Default)]
pub struct Picker {
    pub filter: String,
    pub selected: usize,
}

impl Picker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn matches(&self, label: &str) -> bool {
        self.filter.is_empty() || label.to_lowercase().contains(&self.filter.to_lowercase())
    }

    pub fn visible<'a, T: Labeled>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item.label())).collect()
    }

    pub fn highlighted<'a, T: Labeled>(&self, items: &'a [T]) -> Option<&'a T> {
        self.visible(items).get(self.selected).copied()
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self, total: usize) {
        if self.selected + 1 < total {
            self.selected += 1;
        }
    }

    pub fn page_up(&mut self) {
        self.selected = self.selected.saturating_sub(PAGE_SIZE);
    }

    pub fn page_down(&mut self, total: usize) {
        self.selected = (self.selected + PAGE_SIZE).min(total.saturating_sub(1));
    }

    pub fn home(&mut self) {
        self.selected = 0;
    }

    pub fn end(&mut self, total: usize) {
        self.selected = total.saturating_sub(1);
    }

    pub fn push_char(&mut self, c: char) {
        self.filter.push(c);
        self.selected = 0;
    }

    pub fn pop_char(&mut self) {
        if self.filter.pop().is_some() {
            self.selected = 0;
        }
    }

    pub fn clear(&mut self) {
        self.filter.clear();
        self.selected = 0;
    }

    /// First row to draw so the cursor stays inside a viewport of `height` rows.
    pub fn window_start(&self, height: usize) -> usize {
        if height == 0 {
            return self.selected;
        }
        (self.selected + 1).saturating_sub(height)
    }
}
