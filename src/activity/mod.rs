mod aggregator;
mod duration;
mod goal;
mod history;
mod record;

pub use aggregator::{EMPTY_HISTORY_STREAK, Stats, WEEK_WINDOW_DAYS, compute_stats};
pub use duration::{format_seconds, parse_duration};
pub use goal::GoalProgress;
pub use history::ActivityHistory;
pub use record::{
    DailyRecord, parse_date, parse_instant, parse_records_json, sanitize_total,
};
