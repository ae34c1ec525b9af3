//! Application state.

use roster_store::Database;

use crate::say::SayClient;

/// Application state shared across handlers.
///
/// Built once at startup. The database handle owns the only shared resource,
/// the connection pool.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub say: SayClient,
}

impl AppState {
    pub fn new(db: Database, say: SayClient) -> Self {
        Self { db, say }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_app_state_new() {
        let db = Database::in_memory().await.unwrap();
        let say = SayClient::new("http://127.0.0.1:8081/say").unwrap();
        let state = AppState::new(db, say);
        assert_eq!(state.say.url().port(), Some(8081));
        assert_eq!(state.db.pool().available(), state.db.pool().size());
    }
}
