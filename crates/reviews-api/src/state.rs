use std::sync::Arc;

use reviews_db::Database;

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    /// Bearer token required on the admin routes.
    pub admin_token: String,
}

impl AppStateInner {
    pub fn new(db: Database, admin_token: impl Into<String>) -> AppState {
        Arc::new(Self {
            db,
            admin_token: admin_token.into(),
        })
    }
}
