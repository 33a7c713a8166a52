//! Frontend Models
//!
//! Data structures matching the remote REST resources.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A REST collection the gateway can talk to
///
/// Ties an entity to its collection path, its create payload (`Draft`)
/// and its update payload (`Patch`).
pub trait Resource: Debug + Clone + PartialEq + DeserializeOwned + Send + Sync + 'static {
    /// Field values for a create, also what the edit form holds
    type Draft: Debug + Clone + PartialEq + Serialize + Send + Sync + 'static;
    /// Partial field set sent on update
    type Patch: Debug + Clone + Serialize + Send + Sync + 'static;

    /// Collection path under the API base URL
    const PATH: &'static str;
    /// Singular human label, used in messages
    const LABEL: &'static str;

    /// Server-assigned identifier
    fn id(&self) -> u32;

    /// Current field values as an edit draft
    fn to_draft(&self) -> Self::Draft;

    /// Build the update payload for entity `id` from a full draft
    fn patch_from(id: u32, draft: Self::Draft) -> Self::Patch;
}

/// User data structure (matches the `/users` resource)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    pub username: String,
    pub email: String,
}

/// Post data structure (matches the `/posts` resource)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u32,
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    pub name: String,
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub user_id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl PostDraft {
    /// Empty draft attributed to `user_id`
    pub fn for_author(user_id: u32) -> Self {
        Self {
            user_id,
            title: String::new(),
            body: None,
        }
    }

    /// Body as shown in the textarea
    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    /// Store textarea content, an empty body is sent as absent
    pub fn set_body_text(&mut self, text: String) {
        self.body = if text.is_empty() { None } else { Some(text) };
    }
}

/// Update payload for `PUT /users/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserPatch {
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Update payload for `PUT /posts/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostPatch {
    pub id: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl Resource for User {
    type Draft = UserDraft;
    type Patch = UserPatch;

    const PATH: &'static str = "users";
    const LABEL: &'static str = "user";

    fn id(&self) -> u32 {
        self.id
    }

    fn to_draft(&self) -> UserDraft {
        UserDraft {
            name: self.name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
        }
    }

    fn patch_from(id: u32, draft: UserDraft) -> UserPatch {
        UserPatch {
            id,
            name: Some(draft.name),
            username: Some(draft.username),
            email: Some(draft.email),
        }
    }
}

impl Resource for Post {
    type Draft = PostDraft;
    type Patch = PostPatch;

    const PATH: &'static str = "posts";
    const LABEL: &'static str = "post";

    fn id(&self) -> u32 {
        self.id
    }

    fn to_draft(&self) -> PostDraft {
        PostDraft {
            user_id: self.user_id,
            title: self.title.clone(),
            body: self.body.clone(),
        }
    }

    fn patch_from(id: u32, draft: PostDraft) -> PostPatch {
        PostPatch {
            id,
            user_id: Some(draft.user_id),
            title: Some(draft.title),
            body: Some(draft.body.unwrap_or_default()),
        }
    }
}
