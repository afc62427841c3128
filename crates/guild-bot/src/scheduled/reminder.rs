//! Weekly boss reset reminder
//!
//! Fires every Thursday at 00:00 UTC (the MapleStory weekly reset) and
//! posts a fixed checklist to the reminder webhook. Fully decoupled from
//! request handling: a delivery failure is logged and dropped, never
//! retried, and touches no stored state.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc, Weekday};
use tracing::{info, warn};

use crate::webhook::WebhookClient;

/// The only schedule the reminder loop accepts. Guards against a
/// misconfigured trigger firing on some other cadence.
pub const EXPECTED_REMINDER_CRON: &str = "0 0 * * 4";

const REMINDER_MESSAGE: &str = "🔔 **Weekly Boss Reset Reminder!**\n\n\
    Weekly bosses have reset! Don't forget to do:\n\
    • Normal Zakum\n\
    • Normal Hilla\n\
    • Normal Horntail\n\
    • Pink Bean\n\n\
    Need a carry? Use `/needcarry [boss name]`!";

/// Next Thursday 00:00 UTC strictly after `after`.
pub fn next_reminder_time(after: DateTime<Utc>) -> DateTime<Utc> {
    let days_ahead =
        i64::from((Weekday::Thu.num_days_from_monday() + 7 - after.weekday().num_days_from_monday()) % 7);
    let candidate = (after.date_naive() + Duration::days(days_ahead))
        .and_time(NaiveTime::MIN)
        .and_utc();

    if candidate > after {
        candidate
    } else {
        candidate + Duration::days(7)
    }
}

/// Post the weekly checklist once, after checking the trigger schedule.
///
/// A schedule other than [`EXPECTED_REMINDER_CRON`] means the trigger is
/// misconfigured; the reminder is skipped rather than sent off-cadence.
pub async fn send_weekly_reminder(client: &WebhookClient, url: &str, cron: &str) {
    if cron != EXPECTED_REMINDER_CRON {
        warn!(%cron, expected = EXPECTED_REMINDER_CRON, "Unexpected reminder schedule, skipping");
        return;
    }

    match client.post_content(url, REMINDER_MESSAGE).await {
        Ok(()) => info!("Weekly boss reminder sent"),
        Err(error) => warn!(%error, "Failed to send weekly boss reminder"),
    }
}

/// Long-running reminder task. Sleeps until each Thursday 00:00 UTC and
/// posts the checklist; runs until the process exits.
pub async fn run_reminder_loop(client: WebhookClient, url: String, cron: String) {
    if cron != EXPECTED_REMINDER_CRON {
        warn!(%cron, expected = EXPECTED_REMINDER_CRON, "Reminder loop disabled: unexpected schedule");
        return;
    }

    loop {
        let next = next_reminder_time(Utc::now());
        let wait = (next - Utc::now()).to_std().unwrap_or_default();
        info!(fire_at = %next, "Reminder scheduled");
        tokio::time::sleep(wait).await;

        send_weekly_reminder(&client, &url, &cron).await;
    }
}
