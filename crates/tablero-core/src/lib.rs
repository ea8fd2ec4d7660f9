pub mod config;
pub mod constants;
pub mod events;
pub mod feed;
pub mod models;
pub mod render_model;
pub mod runtime;
pub mod store;
pub mod time_format;
pub mod tracing_setup;

pub use config::{ConfigOverrides, DashboardConfig};
pub use events::{CoreEvent, CycleOutcome, RefreshTrigger};
pub use feed::{AgentFeedClient, FeedError, FeedTransport, HttpTransport};
pub use render_model::RenderModel;
pub use runtime::{RefreshScheduler, SchedulerHandle};
pub use store::Dashboard;
