//! In-memory gateway for tests
//!
//! Records every call so tests can assert that no re-fetch happened,
//! and can be told to fail specific operations.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{Gateway, PostGateway};
use crate::error::GatewayError;
use crate::models::{Post, PostDraft, PostPatch, Resource, User, UserDraft, UserPatch};

/// What a server does with create and update payloads
pub trait Stored: Resource {
    /// Entity as the server returns it after a create
    fn from_draft(id: u32, draft: Self::Draft) -> Self;

    /// Apply the fields present in `patch`
    fn apply_patch(&mut self, patch: &Self::Patch);
}

impl Stored for User {
    fn from_draft(id: u32, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            username: draft.username,
            email: draft.email,
        }
    }

    fn apply_patch(&mut self, patch: &UserPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(username) = &patch.username {
            self.username = username.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
    }
}

impl Stored for Post {
    fn from_draft(id: u32, draft: PostDraft) -> Self {
        Self {
            user_id: draft.user_id,
            id,
            title: draft.title,
            body: draft.body,
        }
    }

    fn apply_patch(&mut self, patch: &PostPatch) {
        if let Some(user_id) = patch.user_id {
            self.user_id = user_id;
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(body) = &patch.body {
            self.body = Some(body.clone());
        }
    }
}

pub struct FakeGateway<R: Stored> {
    items: RefCell<Vec<R>>,
    next_id: Cell<u32>,
    calls: RefCell<Vec<&'static str>>,
    failing: RefCell<Vec<&'static str>>,
}

impl<R: Stored> FakeGateway<R> {
    pub fn new(items: Vec<R>) -> Self {
        let next_id = items.iter().map(R::id).max().unwrap_or(0) + 1;
        Self {
            items: RefCell::new(items),
            next_id: Cell::new(next_id),
            calls: RefCell::new(Vec::new()),
            failing: RefCell::new(Vec::new()),
        }
    }

    /// Make every later call to `op` fail
    pub fn fail_on(&self, op: &'static str) {
        self.failing.borrow_mut().push(op);
    }

    /// Operation names in call order
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == op).count()
    }

    fn record(&self, op: &'static str) -> Result<(), String> {
        self.calls.borrow_mut().push(op);
        if self.failing.borrow().contains(&op) {
            Err("HTTP 500 Internal Server Error".to_string())
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl<R: Stored> Gateway<R> for FakeGateway<R> {
    async fn list(&self) -> Result<Vec<R>, GatewayError> {
        self.record("list")
            .map_err(|detail| GatewayError::Fetch { resource: R::LABEL, detail })?;
        Ok(self.items.borrow().clone())
    }

    async fn get(&self, id: u32) -> Result<R, GatewayError> {
        self.record("get")
            .map_err(|detail| GatewayError::Fetch { resource: R::LABEL, detail })?;
        self.items
            .borrow()
            .iter()
            .find(|item| item.id() == id)
            .cloned()
            .ok_or(GatewayError::NotFound { resource: R::LABEL, id })
    }

    async fn create(&self, draft: &R::Draft) -> Result<R, GatewayError> {
        self.record("create")
            .map_err(|detail| GatewayError::Create { resource: R::LABEL, detail })?;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = R::from_draft(id, draft.clone());
        self.items.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: u32, patch: &R::Patch) -> Result<R, GatewayError> {
        self.record("update")
            .map_err(|detail| GatewayError::Update { resource: R::LABEL, detail })?;
        let mut items = self.items.borrow_mut();
        let item = items.iter_mut().find(|item| item.id() == id).ok_or_else(|| GatewayError::Update {
            resource: R::LABEL,
            detail: "HTTP 404 Not Found".to_string(),
        })?;
        item.apply_patch(patch);
        Ok(item.clone())
    }

    async fn delete(&self, id: u32) -> Result<(), GatewayError> {
        self.record("delete")
            .map_err(|detail| GatewayError::Delete { resource: R::LABEL, detail })?;
        self.items.borrow_mut().retain(|item| item.id() != id);
        Ok(())
    }
}

#[async_trait(?Send)]
impl PostGateway for FakeGateway<Post> {
    async fn list_by_user(&self, user_id: u32) -> Result<Vec<Post>, GatewayError> {
        self.record("list_by_user")
            .map_err(|detail| GatewayError::Fetch { resource: Post::LABEL, detail })?;
        Ok(self.items.borrow().iter().filter(|p| p.user_id == user_id).cloned().collect())
    }
}

mod tests {
    use super::*;

    #[test]
    fn test_apply_patch_keeps_absent_fields() {
        let mut post = Post { user_id: 1, id: 5, title: "Old".to_string(), body: Some("text".to_string()) };
        post.apply_patch(&PostPatch { id: 5, title: Some("New".to_string()), ..Default::default() });
        assert_eq!(post.title, "New");
        assert_eq!(post.user_id, 1);
        assert_eq!(post.body.as_deref(), Some("text"));
    }
}
