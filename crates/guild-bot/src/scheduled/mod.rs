//! Time-triggered jobs

mod reminder;

pub use reminder::{
    next_reminder_time, run_reminder_loop, send_weekly_reminder, EXPECTED_REMINDER_CRON,
};
