use std::path::Path;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::info;

use crate::error::AppError;
use crate::errors::AuthError;
use crate::ports::{LoginMember, UserLookup};

/// `UserLookup` backed by a concurrent map keyed by email.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    members: DashMap<String, LoginMember>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_members(members: impl IntoIterator<Item = LoginMember>) -> Self {
        let store = Self::new();
        for member in members {
            store.insert(member);
        }
        store
    }

    /// Seed from a JSON array of `{id, email, password, age}` objects.
    pub fn from_json_path(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read(path).map_err(|e| {
            AppError::config(format!("failed to read users file {}: {e}", path.display()))
        })?;
        let members: Vec<LoginMember> = serde_json::from_slice(&raw).map_err(|e| {
            AppError::config(format!("failed to parse users file {}: {e}", path.display()))
        })?;

        let store = Self::from_members(members);
        info!(path = %path.display(), members = store.len(), "Loaded user store");
        Ok(store)
    }

    /// Insert or replace the member stored under its email.
    pub fn insert(&self, member: LoginMember) -> Option<LoginMember> {
        self.members.insert(member.email.clone(), member)
    }

    pub fn remove(&self, email: &str) -> Option<LoginMember> {
        self.members.remove(email).map(|(_, member)| member)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[async_trait]
impl UserLookup for InMemoryUserStore {
    async fn load_by_principal(&self, principal: &str) -> Result<Option<LoginMember>, AuthError> {
        Ok(self.members.get(principal).map(|entry| entry.value().clone()))
    }
}
