pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod query;
pub mod records;
pub mod state;
pub mod stats;
pub mod storage;

pub use app::router;
pub use models::{ProblemRecord, Stats};
pub use state::AppState;
pub use stats::{compute_stats, compute_stats_at};
pub use storage::{load_data, resolve_data_path};
