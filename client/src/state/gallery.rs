//! Project gallery state: category filter, "load more" cursor, detail modal.
//!
//! DESIGN
//! ======
//! The modal references projects by index into the full list, never into
//! the filtered or visible slice, so a selection stays valid across filter
//! changes. Filtering is lazy; nothing is copied until the view iterates.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::catalog::Project;

/// Sentinel category that matches every project.
pub const ALL_CATEGORIES: &str = "all";

/// Number of cards revealed initially and per "load more".
pub const PAGE_SIZE: usize = 6;

/// Detail modal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    /// Index into the full project list.
    Open(usize),
}

impl ModalState {
    pub fn is_open(self) -> bool {
        matches!(self, Self::Open(_))
    }
}

/// What a modal operation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalTransition {
    Opened,
    /// Open(p) -> Open(q) without passing through Closed.
    Replaced,
    Closed,
    Unchanged,
}

#[derive(Clone, Debug)]
pub struct GalleryState {
    projects: Vec<Project>,
    pub active_category: String,
    pub visible_count: usize,
    pub modal: ModalState,
}

impl GalleryState {
    pub fn new(projects: Vec<Project>) -> Self {
        Self {
            projects,
            active_category: ALL_CATEGORIES.to_owned(),
            visible_count: PAGE_SIZE,
            modal: ModalState::Closed,
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// `"all"` followed by each distinct lowercased category, first-seen order.
    pub fn categories(&self) -> Vec<String> {
        let mut out = vec![ALL_CATEGORIES.to_owned()];
        for project in &self.projects {
            let category = project.category.to_lowercase();
            if !out.contains(&category) {
                out.push(category);
            }
        }
        out
    }

    /// Switch the filter. Always rewinds the cursor to one page.
    pub fn set_category(&mut self, category: &str) {
        self.active_category = category.to_lowercase();
        self.visible_count = PAGE_SIZE;
    }

    fn matches(&self, project: &Project) -> bool {
        self.active_category == ALL_CATEGORIES || project.category.to_lowercase() == self.active_category
    }

    /// Projects passing the filter, paired with their index in the full list.
    pub fn filtered_entries(&self) -> impl Iterator<Item = (usize, &Project)> + '_ {
        self.projects.iter().enumerate().filter(|(_, p)| self.matches(p))
    }

    pub fn filtered_projects(&self) -> impl Iterator<Item = &Project> + '_ {
        self.filtered_entries().map(|(_, p)| p)
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered_entries().count()
    }

    /// The first `visible_count` filtered entries.
    pub fn visible_entries(&self) -> impl Iterator<Item = (usize, &Project)> + '_ {
        self.filtered_entries().take(self.visible_count)
    }

    pub fn visible_projects(&self) -> impl Iterator<Item = &Project> + '_ {
        self.visible_entries().map(|(_, p)| p)
    }

    /// Whether the "load more" control should be shown.
    pub fn has_more(&self) -> bool {
        self.filtered_len() > self.visible_count
    }

    pub fn load_more(&mut self) {
        self.visible_count += PAGE_SIZE;
    }

    /// Open the modal on `index` (full-list index).
    ///
    /// Out-of-range indices and re-selecting the open project are no-ops.
    pub fn select_project(&mut self, index: usize) -> ModalTransition {
        if index >= self.projects.len() {
            return ModalTransition::Unchanged;
        }
        let transition = match self.modal {
            ModalState::Closed => ModalTransition::Opened,
            ModalState::Open(current) if current == index => return ModalTransition::Unchanged,
            ModalState::Open(_) => ModalTransition::Replaced,
        };
        self.modal = ModalState::Open(index);
        transition
    }

    pub fn clear_selection(&mut self) -> ModalTransition {
        if self.modal.is_open() {
            self.modal = ModalState::Closed;
            ModalTransition::Closed
        } else {
            ModalTransition::Unchanged
        }
    }

    pub fn selected_project(&self) -> Option<&Project> {
        match self.modal {
            ModalState::Open(index) => self.projects.get(index),
            ModalState::Closed => None,
        }
    }
}

/// Position within the modal's image list. Navigation wraps at both ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageCursor {
    len: usize,
    index: usize,
}

impl ImageCursor {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(self) -> usize {
        self.index
    }

    /// Whether prev/next controls are worth showing.
    pub fn can_navigate(self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}
