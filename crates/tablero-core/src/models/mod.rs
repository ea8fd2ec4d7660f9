pub mod agent;
pub mod status;

pub use agent::{Agent, AgentKey, Ticket};
pub use status::{AgentStatus, StatusCategory, STATUS_ORDER};
