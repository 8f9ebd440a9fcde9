mod context;

pub mod compute;
pub mod config;
pub mod history;
pub mod init;
pub mod record;
pub mod summary;

pub use compute::{run_compute, run_compute_impl};
pub use config::run_config;
pub use history::{run_history, run_history_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
pub use record::{run_record, run_record_impl};
pub use summary::{run_summary, run_summary_impl};
