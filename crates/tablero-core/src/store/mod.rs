pub mod aggregator;
pub mod dashboard;
pub mod filter;
pub mod selection;

pub use aggregator::{aggregate, Metrics};
pub use dashboard::Dashboard;
pub use filter::{apply as apply_filter, FilterState};
pub use selection::SelectionState;
