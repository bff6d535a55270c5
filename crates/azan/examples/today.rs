//! Prints today's schedule for the configured location.
//!
//! ```text
//! AZAN_TIMEZONE=Asia/Riyadh AZAN_INSTITUTION=umm_al_qura RUST_LOG=azan=debug cargo run --example today
//! ```
//!
//! Raw hours are fixed here; plug in a real astronomical provider for actual use.

use azan::prelude::*;
use azan::{FixedHours, RawPrayerHours};
use chrono::Utc;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AzanError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AzanConfig::from_env()?;
    let engine = config.engine(FixedHours::new(RawPrayerHours::new(4.9, 12.2, 15.6, 18.4, 19.7)));

    let now = Utc::now();
    let today = now.with_timezone(&config.location.timezone).date_naive();
    let hijri = engine.hijri_date_now(&now)?;
    let month = HijriMonth::from_number(hijri.month)?;

    println!("{} ({} {} {}) in {}", today, hijri.day, month, hijri.year, config.location.timezone);
    println!("Method: {}", config.location.institution);
    for (prayer, time) in engine.formatted(today)?.iter() {
        println!("  {:<9} {}", prayer.name(), time);
    }
    println!("Now: {}, next: {}", engine.current_prayer_at(&now)?, engine.next_prayer_at(&now)?);
    Ok(())
}
