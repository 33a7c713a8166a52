//! List Controllers
//!
//! Per-resource state behind the list views. Controllers never perform
//! I/O themselves: every mutation is split into a `begin_*` step that
//! produces the request, the gateway call made by the caller, and a
//! `finish_*` step that reconciles the in-memory collection with the
//! response. `finish_*` only touches the collection on `Ok`, so a
//! failed call leaves nothing to roll back.

mod posts;
mod users;

pub use posts::{fetch_posts_and_authors, PostController, PostControllerStoreFields};
pub use users::UserController;

use crate::api::Gateway;
use crate::error::{AppError, GatewayError};
use crate::models::Resource;
use crate::pagination::Pager;

/// Hydration state of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    /// Initial fetch failed, the list stays empty but interactive
    Failed,
}

/// Create/edit panel state
#[derive(Debug, Clone, PartialEq)]
pub enum FormState<D> {
    Closed,
    Create(D),
    Edit { id: u32, draft: D },
}

impl<D> FormState<D> {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn editing_id(&self) -> Option<u32> {
        match self {
            Self::Edit { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&D> {
        match self {
            Self::Closed => None,
            Self::Create(draft) | Self::Edit { draft, .. } => Some(draft),
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut D> {
        match self {
            Self::Closed => None,
            Self::Create(draft) | Self::Edit { draft, .. } => Some(draft),
        }
    }
}

/// A save request produced from the open form
#[derive(Debug, Clone)]
pub enum Submission<R: Resource> {
    Create(R::Draft),
    Update(u32, R::Patch),
}

impl<R: Resource> Submission<R> {
    /// Issue the matching gateway call
    pub async fn send<G: Gateway<R> + ?Sized>(&self, gateway: &G) -> Result<R, GatewayError> {
        match self {
            Self::Create(draft) => gateway.create(draft).await,
            Self::Update(id, patch) => gateway.update(*id, patch).await,
        }
    }
}

/// Collection, flags, form and pager shared by both list views
#[derive(Debug, Clone)]
pub struct ListState<R: Resource> {
    pub items: Vec<R>,
    pub phase: Phase,
    /// Message shown in the error banner
    pub error: Option<String>,
    pub form: FormState<R::Draft>,
    pub pager: Pager,
}

impl<R: Resource> ListState<R> {
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            phase: Phase::Loading,
            error: None,
            form: FormState::Closed,
            pager: Pager::new(page_size),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn begin_load(&mut self) {
        self.phase = Phase::Loading;
        self.error = None;
    }

    /// Install a fetched collection, or enter `Failed` with an empty list
    pub fn finish_load(&mut self, result: Result<Vec<R>, GatewayError>) {
        match result {
            Ok(items) => {
                log::info!("loaded {} {}s", items.len(), R::LABEL);
                self.items = items;
                self.pager.reset();
                self.phase = Phase::Ready;
            }
            Err(err) => {
                self.items.clear();
                self.phase = Phase::Failed;
                self.report(err.into());
            }
        }
    }

    /// Set the banner from an error and log the detail
    pub fn report(&mut self, err: AppError) {
        log::error!("{} list: {err}", R::LABEL);
        self.error = Some(err.user_message());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn open_create(&mut self, draft: R::Draft) {
        self.form = FormState::Create(draft);
    }

    pub fn open_edit(&mut self, id: u32) {
        if let Some(entity) = self.find(id) {
            self.form = FormState::Edit { id, draft: entity.to_draft() };
        }
    }

    /// Discard the draft without touching the gateway
    pub fn cancel_form(&mut self) {
        self.form = FormState::Closed;
    }

    pub fn edit_draft(&mut self, f: impl FnOnce(&mut R::Draft)) {
        if let Some(draft) = self.form.draft_mut() {
            f(draft);
        }
    }

    /// Turn the open form into a request; `None` when the form is closed
    pub fn begin_submit(&self) -> Option<Submission<R>> {
        match &self.form {
            FormState::Closed => None,
            FormState::Create(draft) => Some(Submission::Create(draft.clone())),
            FormState::Edit { id, draft } => Some(Submission::Update(*id, R::patch_from(*id, draft.clone()))),
        }
    }

    /// Reconcile a save response
    ///
    /// On `Ok` a create is appended and an update replaces the entity
    /// with the same ID in place, then the form closes. On `Err` the
    /// collection and the draft are left as they were.
    pub fn finish_submit(&mut self, submission: Submission<R>, result: Result<R, GatewayError>) {
        let saved = match result {
            Ok(saved) => saved,
            Err(err) => {
                self.report(err.into());
                return;
            }
        };
        match submission {
            Submission::Create(_) => {
                log::info!("created {} {}", R::LABEL, saved.id());
                self.items.push(saved);
                self.pager.reset();
            }
            Submission::Update(id, _) => {
                log::info!("updated {} {id}", R::LABEL);
                if let Some(slot) = self.items.iter_mut().find(|item| item.id() == id) {
                    *slot = saved;
                }
            }
        }
        self.form = FormState::Closed;
    }

    /// Reconcile a delete response, removing `id` only on `Ok`
    pub fn finish_delete(&mut self, id: u32, result: Result<(), GatewayError>) {
        match result {
            Ok(()) => {
                log::info!("deleted {} {id}", R::LABEL);
                self.items.retain(|item| item.id() != id);
                self.pager.reset();
            }
            Err(err) => self.report(err.into()),
        }
    }

    pub fn find(&self, id: u32) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }
}
