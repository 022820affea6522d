#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use anyhow::Result;

use crate::domain::models::KeyValueStoreBox;

pub const SESSION_KEY: &str = "sessionId";

/// Holds the backend-issued session id for the lifetime of the store. Once an
/// id is held it is never replaced.
pub struct SessionContext {
    store: KeyValueStoreBox,
    session_id: Option<String>,
}

impl SessionContext {
    pub async fn load(store: KeyValueStoreBox) -> Result<SessionContext> {
        let session_id = store
            .get(SESSION_KEY)
            .await?
            .filter(|id| return !id.is_empty());

        tracing::debug!(store = %store.name(), session_id = ?session_id, "Loaded session");

        return Ok(SessionContext { store, session_id });
    }

    pub fn current(&self) -> Option<&str> {
        return self.session_id.as_deref();
    }

    /// Adopts and persists the id assigned by the backend when none is held
    /// yet. Returns whether the id was adopted.
    pub async fn adopt(&mut self, server_session_id: &str) -> Result<bool> {
        if self.session_id.is_some() {
            return Ok(false);
        }

        if server_session_id.is_empty() {
            tracing::warn!("Backend returned an empty session id");
            return Ok(false);
        }

        self.store.set(SESSION_KEY, server_session_id).await?;
        self.session_id = Some(server_session_id.to_string());
        tracing::debug!(session_id = server_session_id, "Adopted session");

        return Ok(true);
    }
}
