//! CLI command implementations.

mod captions;
mod config;
mod doctor;
mod search;
mod serve;
mod summarize;
mod watch;

pub use captions::run_captions;
pub use config::run_config;
pub use doctor::run_doctor;
pub use search::run_search;
pub use serve::run_serve;
pub use summarize::run_summarize;
pub use watch::run_watch;
