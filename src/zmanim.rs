//! Solar Times Module
//!
//! Low-precision (Meeus) solar event times: sunrise, sunset and the fixed
//! twilight points derived from them, as minutes UTC from midnight. The
//! model is accurate to the minute at temperate latitudes; it makes no
//! attempt at sub-minute precision.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::CalendarError;

use std::f64::consts::PI;

/// Sentinel returned for both events when the sun never reaches the
/// requested altitude on that day (polar day or night).
pub const SUN_NEVER_REACHES: i32 = -720;

/// Sun altitude (degrees from zenith) for civil sunrise/sunset: refraction
/// plus solar semi-diameter.
pub const ALTITUDE_SUNRISE: f64 = 90.833;
/// First light (alot hashachar)
pub const ALTITUDE_FIRST_LIGHT: f64 = 106.01;
/// Earliest talit and tefilin
pub const ALTITUDE_TALIT: f64 = 101.0;
/// First stars (tzeit hakochavim)
pub const ALTITUDE_FIRST_STARS: f64 = 96.0;
/// Three stars
pub const ALTITUDE_THREE_STARS: f64 = 98.5;

/// Geographic location for solar calculations. Longitude is degrees east
/// of Greenwich (west negative), latitude degrees north.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CalendarError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CalendarError::InvalidLatitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CalendarError::InvalidLongitude(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Location of Jerusalem
    pub fn jerusalem() -> Self {
        Self {
            latitude: 31.7683,
            longitude: 35.2137,
        }
    }

    /// Location of New York
    pub fn new_york() -> Self {
        Self {
            latitude: 40.7128,
            longitude: -74.0060,
        }
    }
}

/// The solar day bundle, minutes UTC from midnight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SunTimes {
    /// One twelfth of the daylight span (sha'ah zmanit), in minutes
    pub sun_hour: i32,
    pub first_light: i32,
    pub talit: i32,
    pub sunrise: i32,
    pub midday: i32,
    pub sunset: i32,
    pub first_stars: i32,
    pub three_stars: i32,
}

/// Solar time calculator for a fixed location
pub struct ZmanimCalculator {
    location: GeoLocation,
}

impl ZmanimCalculator {
    pub fn new(location: GeoLocation) -> Self {
        Self { location }
    }

    /// Sunrise and sunset in minutes UTC for the sun at `altitude` degrees
    /// from zenith (90.833 is the visible horizon).
    ///
    /// Both values are `SUN_NEVER_REACHES` when the sun does not cross the
    /// requested altitude at this latitude on this date.
    pub fn sun_times_at_altitude(&self, date: NaiveDate, altitude: f64) -> (i32, i32) {
        // fractional year angle, radians
        let gama = 2.0 * PI * ((date.ordinal() as f64 - 1.0) / 365.0);

        // equation of time, minutes
        let eqtime = 229.18
            * (0.000075 + 0.001868 * gama.cos()
                - 0.032077 * gama.sin()
                - 0.014615 * (2.0 * gama).cos()
                - 0.040849 * (2.0 * gama).sin());

        // solar declination, radians
        let decl = 0.006918 - 0.399912 * gama.cos() + 0.070257 * gama.sin()
            - 0.006758 * (2.0 * gama).cos()
            + 0.000907 * (2.0 * gama).sin()
            - 0.002697 * (3.0 * gama).cos()
            + 0.00148 * (3.0 * gama).sin();

        let latitude = self.location.latitude.to_radians();
        let sun_angle = altitude.to_radians();

        // hour angle of the event; out of domain means the sun never gets
        // there at this latitude
        let cos_ha = sun_angle.cos() / (latitude.cos() * decl.cos()) - latitude.tan() * decl.tan();
        if !(-1.0..=1.0).contains(&cos_ha) {
            return (SUN_NEVER_REACHES, SUN_NEVER_REACHES);
        }

        // radians to minutes: 1440 minutes per 2 pi
        let ha = 720.0 * cos_ha.acos() / PI;

        let sunrise = (720.0 - 4.0 * self.location.longitude - ha - eqtime) as i32;
        let sunset = (720.0 - 4.0 * self.location.longitude + ha - eqtime) as i32;

        (sunrise, sunset)
    }

    /// Visible sunrise and sunset in minutes UTC.
    pub fn sun_times(&self, date: NaiveDate) -> (i32, i32) {
        self.sun_times_at_altitude(date, ALTITUDE_SUNRISE)
    }

    /// The full bundle of solar day times.
    pub fn sun_times_full(&self, date: NaiveDate) -> SunTimes {
        let (sunrise, sunset) = self.sun_times_at_altitude(date, ALTITUDE_SUNRISE);
        let (first_light, _) = self.sun_times_at_altitude(date, ALTITUDE_FIRST_LIGHT);
        let (talit, _) = self.sun_times_at_altitude(date, ALTITUDE_TALIT);
        let (_, first_stars) = self.sun_times_at_altitude(date, ALTITUDE_FIRST_STARS);
        let (_, three_stars) = self.sun_times_at_altitude(date, ALTITUDE_THREE_STARS);

        SunTimes {
            sun_hour: (sunset - sunrise) / 12,
            first_light,
            talit,
            sunrise,
            midday: (sunset + sunrise) / 2,
            sunset,
            first_stars,
            three_stars,
        }
    }

    /// Candle lighting time: `offset_minutes` before sunset, minutes UTC.
    /// Propagates the polar sentinel.
    pub fn candle_lighting(&self, date: NaiveDate, offset_minutes: i32) -> i32 {
        let (_, sunset) = self.sun_times(date);
        if sunset == SUN_NEVER_REACHES {
            return SUN_NEVER_REACHES;
        }
        sunset - offset_minutes
    }
}
