//! # Azan
//!
//! Daily Islamic prayer schedules for a fixed location and calculation
//! convention, with "current prayer" and "next prayer" queries.
//!
//! This crate is a facade that re-exports functionality from the `azan` ecosystem.
//!
//! ## Crates
//!
//! - `azan-types`: Core types (Prayer, TimeOfDay, Location, AzanError)
//! - `azan-calendar`: Hijri calendar bridge
//! - `azan-schedule`: Schedule builder and prayer window resolver
//! - `azan-core`: The engine, range queries and environment configuration
//!
//! Raw prayer hours come from a [`PrayerHoursProvider`] you supply; the crate
//! does no astronomy of its own.
//!
//! ## Usage
//!
//! ```rust
//! use azan::prelude::*;
//! use azan::{FixedHours, RawPrayerHours};
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let hours = FixedHours::new(RawPrayerHours::new(5.033, 12.25, 15.75, 18.0, 19.25));
//! let engine = AzanConfig::default().engine(hours);
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//! let now = NaiveTime::from_hms_opt(13, 0, 0).unwrap();
//! assert_eq!(engine.current_prayer(date, now)?, Prayer::Duhur);
//! assert_eq!(engine.next_prayer(date, now)?, Prayer::Asr);
//! # Ok::<(), AzanError>(())
//! ```

pub use azan_core::*;
