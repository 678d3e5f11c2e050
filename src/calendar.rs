//! Hebrew Calendar Conversion Module
//!
//! Implements the fixed arithmetic Hebrew calendar: the molad/dechiyot new
//! year computation, bidirectional Gregorian/Hebrew/Julian-day conversion,
//! and the composite `DateInfo` record every other module consumes.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::holidays::{Holiday, HolidayCalculator};
use crate::parsha::{Parsha, ParshaCalculator};
use crate::CalendarError;

/// One halachic hour is divided into 1080 parts.
const HOUR: i64 = 1080;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
/// Mean lunation: 29 days, 12 hours and 793 parts (the 28-day remainder is
/// accounted separately in `days_from_epoch`).
const MONTH: i64 = DAY + 12 * HOUR + 793;
/// Molad of Tishrei 3744 plus six hours, in parts.
const MOLAD_EPOCH: i64 = DAY + 6 * HOUR + 779;

/// Julian day number of 1 Tishrei in Hebrew year 1 (7 October 3761 BCE,
/// proleptic Gregorian). Dates before this are rejected.
const FIRST_TISHREI_1_JDN: i32 = 348028;

/// Offset between the `days_from_epoch` day count and the Julian day number
/// of 1 Tishrei.
const EPOCH_TO_JDN: i32 = 1715119;

/// Hebrew month in the calendar's stable numbering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum HebrewMonth {
    Tishrei = 1,
    Cheshvan = 2,
    Kislev = 3,
    Tevet = 4,
    Shvat = 5,
    Adar = 6,
    Nisan = 7,
    Iyar = 8,
    Sivan = 9,
    Tammuz = 10,
    Av = 11,
    Elul = 12,
    AdarI = 13,
    AdarII = 14,
}

impl HebrewMonth {
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(HebrewMonth::Tishrei),
            2 => Some(HebrewMonth::Cheshvan),
            3 => Some(HebrewMonth::Kislev),
            4 => Some(HebrewMonth::Tevet),
            5 => Some(HebrewMonth::Shvat),
            6 => Some(HebrewMonth::Adar),
            7 => Some(HebrewMonth::Nisan),
            8 => Some(HebrewMonth::Iyar),
            9 => Some(HebrewMonth::Sivan),
            10 => Some(HebrewMonth::Tammuz),
            11 => Some(HebrewMonth::Av),
            12 => Some(HebrewMonth::Elul),
            13 => Some(HebrewMonth::AdarI),
            14 => Some(HebrewMonth::AdarII),
            _ => None,
        }
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            HebrewMonth::Tishrei => "Tishrei",
            HebrewMonth::Cheshvan => "Cheshvan",
            HebrewMonth::Kislev => "Kislev",
            HebrewMonth::Tevet => "Tevet",
            HebrewMonth::Shvat => "Sh'vat",
            HebrewMonth::Adar => "Adar",
            HebrewMonth::Nisan => "Nisan",
            HebrewMonth::Iyar => "Iyar",
            HebrewMonth::Sivan => "Sivan",
            HebrewMonth::Tammuz => "Tammuz",
            HebrewMonth::Av => "Av",
            HebrewMonth::Elul => "Elul",
            HebrewMonth::AdarI => "Adar I",
            HebrewMonth::AdarII => "Adar II",
        }
    }
}

/// Calendar conversion algorithms
pub struct DateConverter;

impl DateConverter {
    /// Days of 1 Tishrei of `hebrew_year` since the fixed epoch (the molad
    /// of Tishrei 3744).
    ///
    /// Computes the molad of the year in parts, then applies the Molad
    /// Zaken postponements and the Lo ADU Rosh rule. All arithmetic is
    /// integer; intermediate part counts use i64.
    pub fn days_from_epoch(hebrew_year: i32) -> i32 {
        let years_from_3744 = (hebrew_year - 3744) as i64;
        let leap_months = (years_from_3744 * 7 + 1) / 19;
        let leap_left = (years_from_3744 * 7 + 1) % 19;
        let months = years_from_3744 * 12 + leap_months;

        let parts = months * MONTH + MOLAD_EPOCH;
        let mut days = months * 28 + parts / DAY - 2;

        let parts_left_in_week = parts % WEEK;
        let parts_left_in_day = parts % DAY;
        let mut week_day = parts_left_in_week / DAY;

        // Molad Zaken postponements
        if (leap_left < 12 && week_day == 3 && parts_left_in_day >= (9 + 6) * HOUR + 204)
            || (leap_left < 7 && week_day == 2 && parts_left_in_day >= (15 + 6) * HOUR + 589)
        {
            days += 1;
            week_day += 1;
        }

        // Lo ADU Rosh: the new year never falls on Sunday, Wednesday or Friday
        if week_day == 1 || week_day == 4 || week_day == 6 {
            days += 1;
        }

        days as i32
    }

    /// Length of a Hebrew year in days, one of 353/354/355/383/384/385.
    pub fn year_length(hebrew_year: i32) -> u16 {
        (Self::days_from_epoch(hebrew_year + 1) - Self::days_from_epoch(hebrew_year)) as u16
    }

    /// Julian day number of 1 Tishrei of `hebrew_year`.
    pub fn tishrei1_jdn(hebrew_year: i32) -> i32 {
        Self::days_from_epoch(hebrew_year) + EPOCH_TO_JDN
    }

    /// Classify a Hebrew year by (length, new year weekday).
    ///
    /// Only 14 of the 24 combinations are possible; the impossible slots
    /// hold 0 and are never reached for years produced by this calendar.
    ///
    /// ```text
    /// type  length  nyd       type  length  nyd
    ///  1    353     2          8    383     2
    ///  2    353     7          9    383     5
    ///  3    354     3         10    383     7
    ///  4    354     5         11    384     3
    ///  5    355     2         12    385     2
    ///  6    355     5         13    385     5
    ///  7    355     7         14    385     7
    /// ```
    pub fn year_type(year_length: u16, new_year_weekday: u8) -> u8 {
        const YEAR_TYPES: [u8; 24] = [
            1, 0, 0, 2, 0, 3, 4, 0, 5, 0, 6, 7,
            8, 0, 9, 10, 0, 11, 0, 0, 12, 0, 13, 14,
        ];

        // weekday 2,3,5,7 -> 1,2,3,4; length 353..385 -> 0..5
        let length = year_length as i32;
        let mut offset = (new_year_weekday as i32 + 1) / 2;
        offset += 4 * ((length % 10 - 3) + (length / 10 - 35));

        YEAR_TYPES[(offset - 1) as usize]
    }

    /// True if the Hebrew year has 13 months.
    pub fn is_leap_year(hebrew_year: i32) -> bool {
        (7 * hebrew_year + 1).rem_euclid(19) < 7
    }

    /// Number of months in the Hebrew year, 12 or 13.
    pub fn months_in_year(hebrew_year: i32) -> u8 {
        if Self::is_leap_year(hebrew_year) {
            13
        } else {
            12
        }
    }

    /// Days in a Hebrew month, month in the 1..14 numbering. In leap years
    /// month 6 addresses the Adar I slot.
    pub fn days_in_month(hebrew_year: i32, month: u8) -> u8 {
        match month {
            1 | 5 | 7 | 9 | 11 => 30,
            2 => {
                if Self::year_length(hebrew_year) % 10 == 5 {
                    30
                } else {
                    29
                }
            }
            3 => {
                if Self::year_length(hebrew_year) % 10 == 3 {
                    29
                } else {
                    30
                }
            }
            6 | 13 => {
                if Self::is_leap_year(hebrew_year) {
                    30
                } else {
                    29
                }
            }
            _ => 29,
        }
    }

    /// Gregorian date to Julian day number (Fliegel/Van Flandern, proleptic).
    pub fn gregorian_to_jdn(day: u8, month: u8, year: i32) -> i32 {
        let a = (14 - month as i32) / 12;
        let y = year + 4800 - a;
        let m = month as i32 + 12 * a - 3;

        day as i32 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
    }

    /// Julian day number to Gregorian (day, month, year).
    pub fn jdn_to_gregorian(jdn: i32) -> (u8, u8, i32) {
        let l = jdn as i64 + 68569;
        let n = (4 * l) / 146097;
        let l = l - (146097 * n + 3) / 4;
        let i = (4000 * (l + 1)) / 1461001;
        let l = l - (1461 * i) / 4 + 31;
        let j = (80 * l) / 2447;
        let day = (l - (2447 * j) / 80) as u8;
        let l = j / 11;
        let month = (j + 2 - 12 * l) as u8;
        let year = (100 * (n - 49) + i + l) as i32;

        (day, month, year)
    }

    /// Hebrew date to Julian day number.
    ///
    /// Months 13 and 14 fold onto the Adar slot (Adar II trails Adar I by
    /// 30 days). Returns `(jdn, jdn of 1 Tishrei, jdn of next 1 Tishrei)`.
    pub fn hebrew_to_jdn(day: u8, month: u8, year: i32) -> (i32, i32, i32) {
        let mut month = month as i32;
        let mut day = day as i32;

        if month == 13 {
            month = 6;
        }
        if month == 14 {
            month = 6;
            day += 30;
        }

        let days_from_epoch = Self::days_from_epoch(year);
        // (59*(m-1)+1)/2 approximates the cumulative alternating 30/29
        // month lengths from Tishrei
        let mut d = days_from_epoch + (59 * (month - 1) + 1) / 2 + day;

        let length_of_year = Self::days_from_epoch(year + 1) - days_from_epoch;

        if length_of_year % 10 > 4 && month > 2 {
            d += 1; // long Cheshvan
        }
        if length_of_year % 10 < 4 && month > 3 {
            d -= 1; // short Kislev
        }
        if length_of_year > 365 && month > 6 {
            d += 30; // leap year shift for Nisan onward
        }

        let jdn = d + EPOCH_TO_JDN - 1;
        let jdn_tishrei1 = days_from_epoch + EPOCH_TO_JDN;

        (jdn, jdn_tishrei1, jdn_tishrei1 + length_of_year)
    }

    /// Julian day number to Hebrew (day, month, year).
    pub fn jdn_to_hebrew(jdn: i32) -> (u8, u8, i32) {
        let (day, month, year, _, _) = Self::jdn_to_hebrew_with_bounds(jdn);
        (day, month, year)
    }

    /// As `jdn_to_hebrew`, also yielding the Julian day numbers of
    /// 1 Tishrei of the containing year and of the next year.
    pub(crate) fn jdn_to_hebrew_with_bounds(jdn: i32) -> (u8, u8, i32, i32, i32) {
        let (_, _, g_year) = Self::jdn_to_gregorian(jdn);

        // First guess, corrected when the next new year is not after us
        let mut year = g_year + 3760;
        let mut jdn_tishrei1 = Self::tishrei1_jdn(year);
        let mut jdn_tishrei1_next = Self::tishrei1_jdn(year + 1);
        if jdn_tishrei1_next <= jdn {
            year += 1;
            jdn_tishrei1 = jdn_tishrei1_next;
            jdn_tishrei1_next = Self::tishrei1_jdn(year + 1);
        }

        let size_of_year = jdn_tishrei1_next - jdn_tishrei1;
        let days = jdn - jdn_tishrei1;

        // The last 8 months of any year always hold 236 days
        let (day, month) = if days >= size_of_year - 236 {
            let days = days - (size_of_year - 236);
            let mut month = days * 2 / 59;
            let day = days - (month * 59 + 1) / 2 + 1;
            month = month + 4 + 1;
            if size_of_year > 355 && month <= 6 {
                month += 8; // leap year: this is Adar I / Adar II
            }
            (day, month)
        } else {
            // first 4-5 months need the Cheshvan/Kislev corrections
            let (mut month, day) = if size_of_year % 10 > 4 && days == 59 {
                (1, 30) // 30 Cheshvan of a long Cheshvan
            } else if size_of_year % 10 > 4 && days > 59 {
                let month = (days - 1) * 2 / 59;
                (month, days - (month * 59 + 1) / 2)
            } else if size_of_year % 10 < 4 && days > 87 {
                let month = (days + 1) * 2 / 59;
                (month, days - (month * 59 + 1) / 2 + 2)
            } else {
                let month = days * 2 / 59;
                (month, days - (month * 59 + 1) / 2 + 1)
            };
            month += 1;
            (day, month)
        };

        (day as u8, month as u8, year, jdn_tishrei1, jdn_tishrei1_next)
    }
}

/// Canonical record for a single civil day: the three date representations
/// plus the structure of the containing Hebrew year. Downstream queries
/// (holiday, parasha, omer) are pure functions of this record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInfo {
    /// Gregorian day of month, 1..31
    pub g_day: u8,
    /// Gregorian month, 1..12
    pub g_mon: u8,
    /// Gregorian year (proleptic, signed)
    pub g_year: i32,
    /// Hebrew day of month, 1..30
    pub h_day: u8,
    /// Hebrew month, 1=Tishrei..12=Elul, 13=Adar I, 14=Adar II
    pub h_mon: u8,
    /// Hebrew year
    pub h_year: i32,
    /// Julian day number
    pub jdn: i32,
    /// Day of week, 1=Sunday..7=Saturday
    pub weekday: u8,
    /// Length of the containing Hebrew year in days
    pub year_length: u16,
    /// Weekday of 1 Tishrei of the containing Hebrew year (never 1, 4 or 6)
    pub new_year_weekday: u8,
    /// Year type classifier, 1..14
    pub year_type: u8,
    /// 1-based day ordinal since 1 Tishrei
    pub days_since_new_year: u16,
    /// Week ordinal since 1 Tishrei; the week containing 1 Tishrei is week 1
    pub weeks_since_new_year: u8,
}

impl DateInfo {
    /// Build from a Gregorian date. A zero `day` or `month` means "today"
    /// as read from the platform clock.
    pub fn from_gregorian(day: u8, month: u8, year: i32) -> Result<Self, CalendarError> {
        let (day, month, year) = if day == 0 || month == 0 {
            let today = chrono::Local::now().date_naive();
            (today.day() as u8, today.month() as u8, today.year())
        } else {
            (day, month, year)
        };

        // chrono validates day-of-month against the Gregorian month lengths
        NaiveDate::from_ymd_opt(year, month as u32, day as u32).ok_or_else(|| {
            CalendarError::InvalidGregorianDate(format!("{}-{}-{}", year, month, day))
        })?;

        Self::from_jdn(DateConverter::gregorian_to_jdn(day, month, year))
    }

    /// Build from a Hebrew date.
    pub fn from_hebrew(day: u8, month: u8, year: i32) -> Result<Self, CalendarError> {
        if year < 1 {
            return Err(CalendarError::BeforeEpoch(format!("Hebrew year {}", year)));
        }
        if !(1..=14).contains(&month) {
            return Err(CalendarError::InvalidHebrewDate(format!("month {}", month)));
        }
        if (month == 13 || month == 14) && !DateConverter::is_leap_year(year) {
            return Err(CalendarError::InvalidHebrewDate(format!(
                "month {} in non-leap year {}",
                month, year
            )));
        }
        if day < 1 || day > DateConverter::days_in_month(year, month) {
            return Err(CalendarError::InvalidHebrewDate(format!(
                "day {} of month {} in year {}",
                day, month, year
            )));
        }

        let (jdn, _, _) = DateConverter::hebrew_to_jdn(day, month, year);
        Self::from_jdn(jdn)
    }

    /// Build from a Julian day number.
    pub fn from_jdn(jdn: i32) -> Result<Self, CalendarError> {
        if jdn < FIRST_TISHREI_1_JDN {
            return Err(CalendarError::BeforeEpoch(format!("jdn {}", jdn)));
        }

        let (g_day, g_mon, g_year) = DateConverter::jdn_to_gregorian(jdn);
        let (h_day, h_mon, h_year, jdn_tishrei1, jdn_tishrei1_next) =
            DateConverter::jdn_to_hebrew_with_bounds(jdn);

        let year_length = (jdn_tishrei1_next - jdn_tishrei1) as u16;
        let new_year_weekday = ((jdn_tishrei1 + 1) % 7 + 1) as u8;
        let days_since_new_year = (jdn - jdn_tishrei1 + 1) as u16;
        let weeks_since_new_year =
            ((days_since_new_year as i32 - 1 + new_year_weekday as i32 - 1) / 7 + 1) as u8;

        Ok(DateInfo {
            g_day,
            g_mon,
            g_year,
            h_day,
            h_mon,
            h_year,
            jdn,
            weekday: ((jdn + 1) % 7 + 1) as u8,
            year_length,
            new_year_weekday,
            year_type: DateConverter::year_type(year_length, new_year_weekday),
            days_since_new_year,
            weeks_since_new_year,
        })
    }

    /// The Hebrew month as an enum value.
    pub fn hebrew_month(&self) -> HebrewMonth {
        // h_mon is always 1..14 by construction
        HebrewMonth::from_number(self.h_mon).unwrap_or(HebrewMonth::Tishrei)
    }

    /// The Gregorian date as a chrono `NaiveDate`, when representable.
    pub fn gregorian_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.g_year, self.g_mon as u32, self.g_day as u32)
    }

    /// Holiday falling on this date, if any.
    pub fn holiday(&self, diaspora: bool) -> Option<Holiday> {
        HolidayCalculator::holiday(self, diaspora)
    }

    /// Stable holiday id for this date, 0 when none.
    pub fn holiday_id(&self, diaspora: bool) -> u8 {
        HolidayCalculator::holiday_id(self, diaspora)
    }

    /// Weekly Torah reading for this date, if any.
    pub fn parasha(&self, diaspora: bool) -> Option<Parsha> {
        ParshaCalculator::parasha(self, diaspora)
    }

    /// Stable parasha id for this date, 0 when none.
    pub fn parasha_id(&self, diaspora: bool) -> u8 {
        ParshaCalculator::parasha_id(self, diaspora)
    }

    /// Day of the omer count, 1..49, or 0 outside the count.
    pub fn omer_day(&self) -> u8 {
        HolidayCalculator::omer_day(self)
    }

    /// True on the first or thirtieth day of a Hebrew month.
    pub fn is_rosh_chodesh(&self) -> bool {
        self.h_day == 1 || self.h_day == 30
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_year_cycle() {
        assert!(DateConverter::is_leap_year(5784), "5784 should be leap");
        assert!(!DateConverter::is_leap_year(5783));
        assert!(!DateConverter::is_leap_year(5785));
        assert!(DateConverter::is_leap_year(5787));

        // leap years of the 19-year cycle
        for y in [3, 6, 8, 11, 14, 17, 19] {
            assert!(DateConverter::is_leap_year(y), "cycle year {} should be leap", y);
        }
        for y in [1, 2, 4, 5, 7, 9, 10, 12, 13, 15, 16, 18] {
            assert!(!DateConverter::is_leap_year(y), "cycle year {} should not be leap", y);
        }
    }

    #[test]
    fn test_new_year_gregorian_dates() {
        // (hebrew year, expected gregorian d/m/y of 1 Tishrei)
        let cases = [
            (5782, (7, 9, 2021)),
            (5783, (26, 9, 2022)),
            (5784, (16, 9, 2023)),
            (5785, (3, 10, 2024)),
            (5786, (23, 9, 2025)),
            (5787, (12, 9, 2026)),
        ];
        for (year, expected) in cases {
            let jdn = DateConverter::tishrei1_jdn(year);
            assert_eq!(
                DateConverter::jdn_to_gregorian(jdn),
                (expected.0, expected.1, expected.2),
                "1 Tishrei {}",
                year
            );
        }
    }

    #[test]
    fn test_year_lengths_and_types() {
        let cases = [
            (5782, 384, 3, 11),
            (5783, 355, 2, 5),
            (5784, 383, 7, 10),
            (5785, 355, 5, 6),
            (5786, 354, 3, 3),
            (5787, 385, 7, 14),
        ];
        for (year, length, nyd, year_type) in cases {
            assert_eq!(DateConverter::year_length(year), length, "length of {}", year);
            let t1 = DateConverter::tishrei1_jdn(year);
            assert_eq!(((t1 + 1) % 7 + 1) as u8, nyd, "new year weekday of {}", year);
            assert_eq!(
                DateConverter::year_type(length, nyd),
                year_type,
                "type of {}",
                year
            );
        }
    }

    #[test]
    fn test_year_type_table_complete() {
        let legal = [
            (353, 2, 1),
            (353, 7, 2),
            (354, 3, 3),
            (354, 5, 4),
            (355, 2, 5),
            (355, 5, 6),
            (355, 7, 7),
            (383, 2, 8),
            (383, 5, 9),
            (383, 7, 10),
            (384, 3, 11),
            (385, 2, 12),
            (385, 5, 13),
            (385, 7, 14),
        ];
        for (length, nyd, expected) in legal {
            assert_eq!(DateConverter::year_type(length, nyd), expected);
        }
    }

    #[test]
    fn test_year_length_closure() {
        for year in 4000..6200 {
            let length = DateConverter::year_length(year);
            assert!(
                matches!(length, 353 | 354 | 355 | 383 | 384 | 385),
                "year {} has impossible length {}",
                year,
                length
            );
            let leap = DateConverter::is_leap_year(year);
            assert_eq!(length > 365, leap, "leap flag vs length for year {}", year);
        }
    }

    #[test]
    fn test_lo_adu_rosh() {
        for year in 4000..6200 {
            let nyd = (DateConverter::tishrei1_jdn(year) + 1) % 7 + 1;
            assert!(
                matches!(nyd, 2 | 3 | 5 | 7),
                "1 Tishrei {} falls on forbidden weekday {}",
                year,
                nyd
            );
        }
    }

    #[test]
    fn test_gregorian_jdn_anchor() {
        // 1 January 2000 is JDN 2451545 and a Saturday
        let jdn = DateConverter::gregorian_to_jdn(1, 1, 2000);
        assert_eq!(jdn, 2451545);
        assert_eq!((jdn + 1) % 7 + 1, 7);
        assert_eq!(DateConverter::jdn_to_gregorian(jdn), (1, 1, 2000));
    }

    #[test]
    fn test_round_trip_wide_range() {
        // strided sweep over roughly 760..3500 CE
        for jdn in (2000000..3000000).step_by(97) {
            let (d, m, y) = DateConverter::jdn_to_gregorian(jdn);
            assert_eq!(
                DateConverter::gregorian_to_jdn(d, m, y),
                jdn,
                "gregorian round trip at jdn {}",
                jdn
            );

            let (hd, hm, hy) = DateConverter::jdn_to_hebrew(jdn);
            let (back, _, _) = DateConverter::hebrew_to_jdn(hd, hm, hy);
            assert_eq!(back, jdn, "hebrew round trip at jdn {} ({}/{}/{})", jdn, hd, hm, hy);
        }
    }

    #[test]
    fn test_weekday_formula() {
        for jdn in (2400000..2500000).step_by(13) {
            let info = DateInfo::from_jdn(jdn).unwrap();
            assert_eq!(info.weekday as i32, (jdn + 1) % 7 + 1);
        }
    }

    #[test]
    fn test_month_ordinal_agreement() {
        // every day of a year maps to a distinct (month, day) pair, and
        // months 13/14 appear exactly in leap years
        for year in [5782, 5784, 5785, 5786] {
            let t1 = DateConverter::tishrei1_jdn(year);
            let length = DateConverter::year_length(year) as i32;
            let leap = DateConverter::is_leap_year(year);

            let mut seen = std::collections::HashSet::new();
            let mut has_adar1 = false;
            let mut has_adar2 = false;
            for offset in 0..length {
                let (d, m, y) = DateConverter::jdn_to_hebrew(t1 + offset);
                assert_eq!(y, year, "day {} of year {}", offset, year);
                assert!(seen.insert((m, d)), "duplicate {}/{} in year {}", d, m, year);
                has_adar1 |= m == 13;
                has_adar2 |= m == 14;
                if !leap {
                    assert!(m < 13, "month {} in non-leap year {}", m, year);
                }
            }
            assert_eq!(seen.len() as i32, length);
            assert_eq!(has_adar1, leap);
            assert_eq!(has_adar2, leap);
        }
    }

    #[test]
    fn test_from_gregorian_2000() {
        let info = DateInfo::from_gregorian(1, 1, 2000).unwrap();
        assert_eq!(info.h_day, 23);
        assert_eq!(info.h_mon, 4, "should be Tevet");
        assert_eq!(info.h_year, 5760);
        assert_eq!(info.jdn, 2451545);
        assert_eq!(info.weekday, 7);
        assert_eq!(info.hebrew_month(), HebrewMonth::Tevet);
    }

    #[test]
    fn test_from_hebrew_new_year_5784() {
        let info = DateInfo::from_hebrew(1, 1, 5784).unwrap();
        assert_eq!((info.g_day, info.g_mon, info.g_year), (16, 9, 2023));
        assert_eq!(info.weekday, 7);
        assert_eq!(info.year_length, 383);
        assert_eq!(info.new_year_weekday, 7);
        assert_eq!(info.year_type, 10);
        assert_eq!(info.days_since_new_year, 1);
        assert_eq!(info.weeks_since_new_year, 1);
    }

    #[test]
    fn test_hebrew_to_jdn_bounds() {
        let (jdn, t1, t1_next) = DateConverter::hebrew_to_jdn(1, 1, 5784);
        assert_eq!(jdn, 2460204);
        assert_eq!(t1, 2460204);
        assert_eq!(t1_next, 2460204 + 383);
    }

    #[test]
    fn test_adar_numbering_in_leap_year() {
        // 5784 is leap: Purim is 14 Adar II
        let info = DateInfo::from_hebrew(14, 14, 5784).unwrap();
        assert_eq!(info.h_mon, 14);
        let round = DateInfo::from_jdn(info.jdn).unwrap();
        assert_eq!(round.h_mon, 14);
        assert_eq!(round.h_day, 14);

        // Adar II trails Adar I by 30 days
        let adar1 = DateInfo::from_hebrew(14, 13, 5784).unwrap();
        assert_eq!(info.jdn - adar1.jdn, 30);
    }

    #[test]
    fn test_from_hebrew_rejects_bad_input() {
        assert!(DateInfo::from_hebrew(1, 0, 5784).is_err());
        assert!(DateInfo::from_hebrew(1, 15, 5784).is_err());
        assert!(DateInfo::from_hebrew(0, 1, 5784).is_err());
        assert!(DateInfo::from_hebrew(31, 1, 5784).is_err());
        assert!(DateInfo::from_hebrew(1, 1, 0).is_err(), "year before epoch");
        // months 13/14 only exist in leap years
        assert!(DateInfo::from_hebrew(1, 13, 5783).is_err());
        assert!(DateInfo::from_hebrew(1, 14, 5785).is_err());
        // 30 Cheshvan only in complete years; 5786 has 354 days
        assert!(DateInfo::from_hebrew(30, 2, 5786).is_err());
        assert!(DateInfo::from_hebrew(30, 2, 5783).is_ok());
    }

    #[test]
    fn test_from_gregorian_rejects_bad_input() {
        assert!(DateInfo::from_gregorian(32, 1, 2024).is_err());
        assert!(DateInfo::from_gregorian(29, 2, 2023).is_err());
        assert!(DateInfo::from_gregorian(29, 2, 2024).is_ok());
        assert!(DateInfo::from_gregorian(1, 13, 2024).is_err());
    }

    #[test]
    fn test_days_in_month() {
        // 5783 is complete (355): long Cheshvan, regular Kislev
        assert_eq!(DateConverter::days_in_month(5783, 2), 30);
        assert_eq!(DateConverter::days_in_month(5783, 3), 30);
        // 5784 is deficient leap (383): short Kislev
        assert_eq!(DateConverter::days_in_month(5784, 2), 29);
        assert_eq!(DateConverter::days_in_month(5784, 3), 29);
        assert_eq!(DateConverter::days_in_month(5784, 13), 30, "Adar I");
        assert_eq!(DateConverter::days_in_month(5784, 14), 29, "Adar II");
        // fixed months
        assert_eq!(DateConverter::days_in_month(5785, 1), 30);
        assert_eq!(DateConverter::days_in_month(5785, 4), 29);
        assert_eq!(DateConverter::days_in_month(5785, 6), 29, "Adar in common year");
    }

    #[test]
    fn test_rosh_chodesh() {
        assert!(DateInfo::from_hebrew(1, 2, 5784).unwrap().is_rosh_chodesh());
        assert!(DateInfo::from_hebrew(30, 1, 5784).unwrap().is_rosh_chodesh());
        assert!(!DateInfo::from_hebrew(15, 2, 5784).unwrap().is_rosh_chodesh());
    }

    #[test]
    fn test_weeks_since_new_year() {
        // 5784: 1 Tishrei is Shabbat, so week 2 starts on 2 Tishrei
        let info = DateInfo::from_hebrew(2, 1, 5784).unwrap();
        assert_eq!(info.weeks_since_new_year, 2);
        // 29 Tishrei 5784 (14 Oct 2023, Shabbat) is week 5
        let info = DateInfo::from_hebrew(29, 1, 5784).unwrap();
        assert_eq!(info.weekday, 7);
        assert_eq!(info.weeks_since_new_year, 5);
    }

    #[test]
    fn test_historic_date() {
        // 6 October 1973 was 10 Tishrei 5734
        let info = DateInfo::from_gregorian(6, 10, 1973).unwrap();
        assert_eq!(info.h_day, 10);
        assert_eq!(info.h_mon, 1);
        assert_eq!(info.h_year, 5734);
    }
}
