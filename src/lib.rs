//! Hebrew Calendar Core Library
//!
//! Pure computation engine for the Hebrew (lunisolar) calendar: conversion
//! between proleptic Gregorian dates, Hebrew dates and Julian day numbers,
//! holiday and weekly Torah reading resolution, the omer count, and
//! low-precision solar event times for a geographic location.
//!
//! The crate keeps no global state and performs no I/O; the single optional
//! platform interaction is reading the wall clock when a Gregorian
//! constructor is given the 0/0 "today" sentinel.

pub mod calendar;
pub mod holidays;
pub mod parsha;
pub mod zmanim;

pub use calendar::{DateConverter, DateInfo, HebrewMonth};
pub use holidays::{Holiday, HolidayCalculator, HolidayType};
pub use parsha::{Parsha, ParshaCalculator};
pub use zmanim::{GeoLocation, SunTimes, ZmanimCalculator};

use thiserror::Error;

/// Errors that can occur in the luach_core library
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalendarError {
    #[error("Invalid Gregorian date: {0}")]
    InvalidGregorianDate(String),

    #[error("Invalid Hebrew date: {0}")]
    InvalidHebrewDate(String),

    #[error("Date before the calendar epoch (1 Tishrei 1): {0}")]
    BeforeEpoch(String),

    #[error("Invalid latitude: {0}. Must be between -90 and 90.")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0}. Must be between -180 and 180.")]
    InvalidLongitude(f64),
}
