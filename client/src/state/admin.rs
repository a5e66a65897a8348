//! List state for admin CRUD tables.
//!
//! DESIGN
//! ======
//! Every admin screen repeats fetch-list → confirm/submit → refetch. One
//! generic container keeps that cycle identical across entities; deletion
//! is two-phase so a row only disappears after the confirmation dialog is
//! accepted and the backend has answered.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use market::ApiError;
use market::models::Identified;

#[derive(Clone, Debug, PartialEq)]
pub struct ResourceList<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Row awaiting delete confirmation.
    pub pending_delete: Option<String>,
    /// Bumped to trigger a refetch effect.
    pub reload: u32,
}

impl<T> Default for ResourceList<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: true, error: None, pending_delete: None, reload: 0 }
    }
}

impl<T: Identified> ResourceList<T> {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn loaded(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    pub fn failed(&mut self, err: &ApiError) {
        self.loading = false;
        self.error = Some(err.to_string());
    }

    pub fn request_reload(&mut self) {
        self.reload = self.reload.wrapping_add(1);
    }

    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_owned());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Accept the confirmation dialog, yielding the id to delete.
    pub fn confirm_delete(&mut self) -> Option<String> {
        self.pending_delete.take()
    }

    /// Drop a row after the backend confirmed a delete (or an approval moved
    /// it out of this list). Returns whether a row was removed.
    pub fn removed(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Insert a created record or replace an updated one in place.
    pub fn upserted(&mut self, item: T) {
        match self.items.iter_mut().find(|existing| existing.id() == item.id()) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }
}

/// Which form an admin page has open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Closed,
    Create,
    Edit(String),
}

impl EditorMode {
    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    #[must_use]
    pub fn title(&self, noun: &str) -> String {
        match self {
            Self::Edit(_) => format!("Edit {noun}"),
            Self::Create | Self::Closed => format!("New {noun}"),
        }
    }
}
