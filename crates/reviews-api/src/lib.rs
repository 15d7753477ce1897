pub mod error;
pub mod middleware;
pub mod reviews;
pub mod router;
pub mod state;

pub use router::{MAX_BODY_BYTES, router};
pub use state::{AppState, AppStateInner};
