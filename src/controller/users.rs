//! User Controller
//!
//! State behind the paginated user table.

use reactive_stores::Store;

use super::{ListState, Submission};
use crate::models::{User, UserDraft};
use crate::pagination::{full_markers, PageMarker};
use crate::validation::validate_user_draft;

#[derive(Debug, Clone, Store)]
pub struct UserController {
    pub list: ListState<User>,
}

impl UserController {
    pub fn new(page_size: usize) -> Self {
        Self { list: ListState::new(page_size) }
    }

    pub fn open_create(&mut self) {
        self.list.open_create(UserDraft::default());
    }

    /// Validate the open form and turn it into a request
    ///
    /// A draft with a bad name or email sets the banner and yields
    /// `None`, so nothing reaches the gateway.
    pub fn begin_submit(&mut self) -> Option<Submission<User>> {
        let draft = self.list.form.draft()?;
        if let Err(err) = validate_user_draft(draft) {
            self.list.report(err.into());
            return None;
        }
        self.list.begin_submit()
    }

    /// Users on the current page
    pub fn visible(&self) -> &[User] {
        self.list.pager.slice(&self.list.items)
    }

    pub fn total_pages(&self) -> usize {
        self.list.pager.total_pages(self.list.items.len())
    }

    /// Every page number, the user table is never long enough to need gaps
    pub fn page_markers(&self) -> Vec<PageMarker> {
        full_markers(self.total_pages())
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        self.list.pager.go_to(page, self.list.items.len())
    }

    pub fn next_page(&mut self) -> bool {
        self.list.pager.next(self.list.items.len())
    }

    pub fn previous_page(&mut self) -> bool {
        self.list.pager.previous(self.list.items.len())
    }

    pub fn heading(&self) -> String {
        format!("Total Users ({})", self.list.items.len())
    }
}
