pub mod agent_grid;
pub mod detail;
pub mod filter_bar;
pub mod metrics;

pub use agent_grid::render_agent_grid;
pub use detail::render_detail;
pub use filter_bar::render_filter_bar;
pub use metrics::{render_header, render_metrics};
