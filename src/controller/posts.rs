//! Post Controller
//!
//! State behind the post grid: posts, the users needed to show author
//! names, and the optional author filter.

use reactive_stores::Store;

use super::{ListState, Phase, Submission};
use crate::api::Gateway;
use crate::error::GatewayError;
use crate::models::{Post, PostDraft, User};
use crate::pagination::{compact_markers, PageMarker};

const FETCH_FAILED: &str = "Failed to fetch data";

/// Author preselected when no user is known
const FALLBACK_AUTHOR: u32 = 1;

/// Fetch authors and posts concurrently, failing if either fails
pub async fn fetch_posts_and_authors<UG, PG>(
    users: &UG,
    posts: &PG,
) -> Result<(Vec<User>, Vec<Post>), GatewayError>
where
    UG: Gateway<User> + ?Sized,
    PG: Gateway<Post> + ?Sized,
{
    futures::try_join!(users.list(), posts.list())
}

#[derive(Debug, Clone, Store)]
pub struct PostController {
    pub list: ListState<Post>,
    /// All users, for author names and the author select
    pub authors: Vec<User>,
    /// Only show posts by this user
    pub filter: Option<u32>,
}

impl PostController {
    pub fn new(page_size: usize, filter: Option<u32>) -> Self {
        Self {
            list: ListState::new(page_size),
            authors: Vec::new(),
            filter: filter.filter(|id| *id != 0),
        }
    }

    pub fn begin_load(&mut self) {
        self.list.begin_load();
    }

    pub fn finish_load(&mut self, result: Result<(Vec<User>, Vec<Post>), GatewayError>) {
        match result {
            Ok((authors, posts)) => {
                self.authors = authors;
                self.list.finish_load(Ok(posts));
            }
            Err(err) => {
                log::error!("post list: {err}");
                self.authors.clear();
                self.list.items.clear();
                self.list.phase = Phase::Failed;
                self.list.error = Some(FETCH_FAILED.to_string());
            }
        }
    }

    /// First known user, preselected in the create form
    pub fn default_author(&self) -> u32 {
        self.authors.first().map(|u| u.id).unwrap_or(FALLBACK_AUTHOR)
    }

    pub fn open_create(&mut self) {
        let author = self.default_author();
        self.list.open_create(PostDraft::for_author(author));
    }

    pub fn begin_submit(&self) -> Option<Submission<Post>> {
        self.list.begin_submit()
    }

    /// Reconcile a save response, then keep the page inside the filtered set
    ///
    /// An edit can move a post out of the active author filter, which
    /// shrinks the filtered set without changing the collection size.
    pub fn finish_submit(&mut self, submission: Submission<Post>, result: Result<Post, GatewayError>) {
        self.list.finish_submit(submission, result);
        let len = self.filtered_len();
        self.list.pager.clamp(len);
    }

    /// Display name for `user_id`, `"User {id}"` for unknown authors
    pub fn author_name(&self, user_id: u32) -> String {
        self.authors
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| format!("User {user_id}"))
    }

    /// Change the author filter; a real change returns to page 1
    pub fn set_filter(&mut self, filter: Option<u32>) {
        let filter = filter.filter(|id| *id != 0);
        if self.filter != filter {
            self.filter = filter;
            self.list.pager.reset();
        }
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(None);
    }

    /// Posts matching the filter, in collection order
    pub fn filtered(&self) -> Vec<&Post> {
        match self.filter {
            Some(user_id) => self.list.items.iter().filter(|p| p.user_id == user_id).collect(),
            None => self.list.items.iter().collect(),
        }
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().len()
    }

    /// Filtered posts on the current page
    pub fn visible(&self) -> Vec<Post> {
        let filtered = self.filtered();
        self.list.pager.slice(&filtered).iter().map(|p| (*p).clone()).collect()
    }

    pub fn total_pages(&self) -> usize {
        self.list.pager.total_pages(self.filtered_len())
    }

    pub fn page_markers(&self) -> Vec<PageMarker> {
        compact_markers(self.list.pager.current(), self.total_pages())
    }

    pub fn go_to_page(&mut self, page: usize) -> bool {
        let len = self.filtered_len();
        self.list.pager.go_to(page, len)
    }

    pub fn next_page(&mut self) -> bool {
        let len = self.filtered_len();
        self.list.pager.next(len)
    }

    pub fn previous_page(&mut self) -> bool {
        let len = self.filtered_len();
        self.list.pager.previous(len)
    }

    pub fn heading(&self) -> String {
        match self.filter {
            Some(_) => format!("Total posts ({})", self.filtered_len()),
            None => format!("Total Posts ({})", self.list.items.len()),
        }
    }

    /// Text under "No Posts Found"
    pub fn empty_message(&self) -> String {
        match self.filter {
            Some(user_id) => format!("No posts found for {}.", self.author_name(user_id)),
            None => "Add your first post to get started!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeGateway;
    use crate::pagination::PageMarker::{Ellipsis, Page};

    fn user(id: u32, name: &str) -> User {
        User {
            id,
            name: name.to_string(),
            username: name.to_lowercase(),
            email: format!("{}@example.com", name.to_lowercase()),
        }
    }

    fn post(id: u32, user_id: u32) -> Post {
        Post { user_id, id, title: format!("Post {id}"), body: Some("body".to_string()) }
    }

    /// 60 posts, user 1 owns ids 1..=10, user 2 owns 11..=20, and so on
    fn sixty_posts() -> Vec<Post> {
        (1..=60).map(|id| post(id, (id - 1) / 10 + 1)).collect()
    }

    #[tokio::test]
    async fn test_hydrate_preselects_first_author() {
        let users = FakeGateway::new(vec![user(4, "Dana"), user(7, "Emre")]);
        let posts = FakeGateway::new(sixty_posts());
        let mut controller = PostController::new(6, None);
        controller.begin_load();

        controller.finish_load(fetch_posts_and_authors(&users, &posts).await);

        assert_eq!(controller.list.phase, Phase::Ready);
        assert_eq!(controller.authors.len(), 2);
        assert_eq!(controller.list.items.len(), 60);
        controller.open_create();
        assert_eq!(controller.list.form.draft().map(|d| d.user_id), Some(4));
    }

    #[tokio::test]
    async fn test_hydrate_fails_if_either_fetch_fails() {
        let users = FakeGateway::new(vec![user(1, "Ann")]);
        let posts = FakeGateway::new(sixty_posts());
        users.fail_on("list");
        let mut controller = PostController::new(6, None);

        controller.finish_load(fetch_posts_and_authors(&users, &posts).await);

        assert_eq!(controller.list.phase, Phase::Failed);
        assert!(controller.list.items.is_empty());
        assert!(controller.authors.is_empty());
        assert_eq!(controller.list.error.as_deref(), Some("Failed to fetch data"));
        assert_eq!(controller.default_author(), 1);
    }

    #[tokio::test]
    async fn test_create_scenario() {
        let users = FakeGateway::new(vec![user(1, "Ann")]);
        let posts = FakeGateway::<Post>::new(vec![]);
        let mut controller = PostController::new(6, None);
        controller.finish_load(fetch_posts_and_authors(&users, &posts).await);

        controller.open_create();
        controller.list.edit_draft(|draft| {
            draft.title = "Hi".to_string();
            draft.set_body_text("x".to_string());
        });
        let submission = controller.begin_submit().unwrap();
        let result = submission.send(&posts).await;
        controller.finish_submit(submission, result);

        assert_eq!(controller.list.items, vec![Post { user_id: 1, id: 1, title: "Hi".to_string(), body: Some("x".to_string()) }]);
        assert!(!controller.list.form.is_open());
        assert_eq!(posts.calls(), vec!["list", "create"]);
    }

    #[test]
    fn test_filter_is_a_subset_and_clearing_restores() {
        let mut controller = PostController::new(6, Some(2));
        controller.finish_load(Ok((vec![user(2, "Bob")], sixty_posts())));

        let filtered = controller.filtered();
        assert_eq!(filtered.len(), 10);
        assert!(filtered.iter().all(|p| p.user_id == 2));
        assert!(filtered.iter().all(|p| controller.list.items.contains(*p)));
        assert_eq!(controller.heading(), "Total posts (10)");

        controller.clear_filter();
        let all: Vec<Post> = controller.filtered().into_iter().cloned().collect();
        assert_eq!(all, controller.list.items);
        assert_eq!(controller.heading(), "Total Posts (60)");
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut controller = PostController::new(6, None);
        controller.finish_load(Ok((vec![], sixty_posts())));
        assert!(controller.go_to_page(5));

        controller.set_filter(Some(3));
        assert_eq!(controller.list.pager.current(), 1);
        assert_eq!(controller.total_pages(), 2);
        assert_eq!(controller.visible().iter().map(|p| p.id).collect::<Vec<_>>(), vec![21, 22, 23, 24, 25, 26]);

        // Setting the same filter again keeps the page
        assert!(controller.next_page());
        controller.set_filter(Some(3));
        assert_eq!(controller.list.pager.current(), 2);
        assert_eq!(controller.visible().len(), 4);
    }

    #[tokio::test]
    async fn test_edit_out_of_filter_keeps_page_in_range() {
        let posts = FakeGateway::new((1..=7).map(|id| post(id, 1)).collect());
        let mut controller = PostController::new(6, Some(1));
        controller.finish_load(Ok((vec![user(1, "Ann"), user(2, "Bob")], posts.list().await.unwrap())));
        assert!(controller.go_to_page(2));
        assert_eq!(controller.visible().len(), 1);

        controller.list.open_edit(7);
        controller.list.edit_draft(|draft| draft.user_id = 2);
        let submission = controller.begin_submit().unwrap();
        let result = submission.send(&posts).await;
        controller.finish_submit(submission, result);

        assert_eq!(controller.filtered_len(), 6);
        assert_eq!(controller.total_pages(), 1);
        assert_eq!(controller.list.pager.current(), 1);
        assert_eq!(controller.visible().len(), 6);
    }

    #[test]
    fn test_zero_filter_means_no_filter() {
        let controller = PostController::new(6, Some(0));
        assert_eq!(controller.filter, None);
    }

    #[test]
    fn test_page_markers_use_ellipsis() {
        let mut controller = PostController::new(6, None);
        controller.finish_load(Ok((vec![], sixty_posts())));
        assert_eq!(controller.total_pages(), 10);
        assert_eq!(controller.page_markers(), vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]);

        controller.go_to_page(5);
        assert_eq!(
            controller.page_markers(),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
        assert!(controller.previous_page());
        assert_eq!(controller.list.pager.current(), 4);
    }

    #[test]
    fn test_author_names_and_empty_message() {
        let mut controller = PostController::new(6, Some(9));
        controller.finish_load(Ok((vec![user(1, "Ann")], sixty_posts())));

        assert_eq!(controller.author_name(1), "Ann");
        assert_eq!(controller.author_name(9), "User 9");
        assert!(controller.visible().is_empty());
        assert_eq!(controller.empty_message(), "No posts found for User 9.");

        controller.clear_filter();
        assert_eq!(controller.empty_message(), "Add your first post to get started!");
    }
}
