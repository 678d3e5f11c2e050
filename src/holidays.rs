//! Holiday Resolution Module
//!
//! Maps a `DateInfo` to the holiday observed on it, applying the weekday
//! displacements of the fast days, the civil-era gating of the national
//! days, and the diaspora/Israel split. Also hosts the omer count.

use serde::{Deserialize, Serialize};

use crate::calendar::{DateConverter, DateInfo};

/// Jewish holiday, carrying its stable numeric id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Holiday {
    RoshHashana1 = 1,
    RoshHashana2 = 2,
    TzomGedaliah = 3,
    YomKippur = 4,
    Sukkot = 5,
    CholHamoedSukkot = 6,
    HoshanaRabba = 7,
    SimchatTorah = 8,
    Chanukah = 9,
    AsaraBTevet = 10,
    TuBShvat = 11,
    TaanitEsther = 12,
    Purim = 13,
    ShushanPurim = 14,
    Pesach = 15,
    CholHamoedPesach = 16,
    YomHaAtzmaut = 17,
    LagBaOmer = 18,
    ErevShavuot = 19,
    Shavuot = 20,
    TzomTammuz = 21,
    TishaBAv = 22,
    TuBAv = 23,
    YomHaShoah = 24,
    YomHaZikaron = 25,
    YomYerushalayim = 26,
    ShminiAtzeret = 27,
    PesachVii = 28,
    PesachViii = 29,
    ShavuotII = 30,
    SukkotII = 31,
    PesachII = 32,
    FamilyDay = 33,
    MemorialDayUnknownFallen = 34,
    RabinMemorialDay = 35,
    ZhabotinskyDay = 36,
    ErevYomKippur = 37,
}

impl Holiday {
    /// Stable id, 1..37.
    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Holiday::RoshHashana1),
            2 => Some(Holiday::RoshHashana2),
            3 => Some(Holiday::TzomGedaliah),
            4 => Some(Holiday::YomKippur),
            5 => Some(Holiday::Sukkot),
            6 => Some(Holiday::CholHamoedSukkot),
            7 => Some(Holiday::HoshanaRabba),
            8 => Some(Holiday::SimchatTorah),
            9 => Some(Holiday::Chanukah),
            10 => Some(Holiday::AsaraBTevet),
            11 => Some(Holiday::TuBShvat),
            12 => Some(Holiday::TaanitEsther),
            13 => Some(Holiday::Purim),
            14 => Some(Holiday::ShushanPurim),
            15 => Some(Holiday::Pesach),
            16 => Some(Holiday::CholHamoedPesach),
            17 => Some(Holiday::YomHaAtzmaut),
            18 => Some(Holiday::LagBaOmer),
            19 => Some(Holiday::ErevShavuot),
            20 => Some(Holiday::Shavuot),
            21 => Some(Holiday::TzomTammuz),
            22 => Some(Holiday::TishaBAv),
            23 => Some(Holiday::TuBAv),
            24 => Some(Holiday::YomHaShoah),
            25 => Some(Holiday::YomHaZikaron),
            26 => Some(Holiday::YomYerushalayim),
            27 => Some(Holiday::ShminiAtzeret),
            28 => Some(Holiday::PesachVii),
            29 => Some(Holiday::PesachViii),
            30 => Some(Holiday::ShavuotII),
            31 => Some(Holiday::SukkotII),
            32 => Some(Holiday::PesachII),
            33 => Some(Holiday::FamilyDay),
            34 => Some(Holiday::MemorialDayUnknownFallen),
            35 => Some(Holiday::RabinMemorialDay),
            36 => Some(Holiday::ZhabotinskyDay),
            37 => Some(Holiday::ErevYomKippur),
            _ => None,
        }
    }

    /// English name of the holiday
    pub fn name(&self) -> &'static str {
        match self {
            Holiday::RoshHashana1 => "Rosh Hashana I",
            Holiday::RoshHashana2 => "Rosh Hashana II",
            Holiday::TzomGedaliah => "Tzom Gedaliah",
            Holiday::YomKippur => "Yom Kippur",
            Holiday::Sukkot => "Sukkot",
            Holiday::CholHamoedSukkot => "Hol hamoed Sukkot",
            Holiday::HoshanaRabba => "Hoshana raba",
            Holiday::SimchatTorah => "Simchat Torah",
            Holiday::Chanukah => "Chanukah",
            Holiday::AsaraBTevet => "Asara B'Tevet",
            Holiday::TuBShvat => "Tu B'Shvat",
            Holiday::TaanitEsther => "Ta'anit Esther",
            Holiday::Purim => "Purim",
            Holiday::ShushanPurim => "Shushan Purim",
            Holiday::Pesach => "Pesach",
            Holiday::CholHamoedPesach => "Hol hamoed Pesach",
            Holiday::YomHaAtzmaut => "Yom HaAtzma'ut",
            Holiday::LagBaOmer => "Lag B'Omer",
            Holiday::ErevShavuot => "Erev Shavuot",
            Holiday::Shavuot => "Shavuot",
            Holiday::TzomTammuz => "Tzom Tammuz",
            Holiday::TishaBAv => "Tish'a B'Av",
            Holiday::TuBAv => "Tu B'Av",
            Holiday::YomHaShoah => "Yom HaShoah",
            Holiday::YomHaZikaron => "Yom HaZikaron",
            Holiday::YomYerushalayim => "Yom Yerushalayim",
            Holiday::ShminiAtzeret => "Shmini Atzeret",
            Holiday::PesachVii => "Pesach VII",
            Holiday::PesachViii => "Pesach VIII",
            Holiday::ShavuotII => "Shavuot II",
            Holiday::SukkotII => "Sukkot II",
            Holiday::PesachII => "Pesach II",
            Holiday::FamilyDay => "Family Day",
            Holiday::MemorialDayUnknownFallen => {
                "Memorial day for fallen whose place of burial is unknown"
            }
            Holiday::RabinMemorialDay => "Yitzhak Rabin memorial day",
            Holiday::ZhabotinskyDay => "Zeev Zhabotinsky day",
            Holiday::ErevYomKippur => "Erev Yom Kippur",
        }
    }

    /// Classification of this holiday
    pub fn holiday_type(&self) -> HolidayType {
        HolidayType::of(self.id())
    }
}

/// Coarse classification of holidays, used by consumers to style or group
/// observances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum HolidayType {
    Regular = 0,
    YomTov = 1,
    ErevYomKippur = 2,
    CholHamoed = 3,
    HanukkahPurim = 4,
    FastDay = 5,
    IndependenceDay = 6,
    MinorHoliday = 7,
    MemorialDay = 8,
    NationalDay = 9,
}

impl HolidayType {
    /// Classify a holiday id (0 = no holiday).
    pub fn of(holiday_id: u8) -> HolidayType {
        match holiday_id {
            0 => HolidayType::Regular,
            1 | 2 | 4 | 5 | 8 | 15 | 20 | 27 | 28 | 29 | 30 | 31 | 32 => HolidayType::YomTov,
            37 => HolidayType::ErevYomKippur,
            6 | 7 | 16 => HolidayType::CholHamoed,
            9 | 13 | 14 => HolidayType::HanukkahPurim,
            3 | 10 | 12 | 21 | 22 => HolidayType::FastDay,
            17 | 26 => HolidayType::IndependenceDay,
            11 | 18 | 23 => HolidayType::MinorHoliday,
            24 | 25 => HolidayType::MemorialDay,
            _ => HolidayType::NationalDay,
        }
    }

    /// Stable id of the classification, 0..9.
    pub fn id(&self) -> u8 {
        *self as u8
    }
}

/// Fixed-date observances keyed by (month - 1, day - 1). Months 13 (Adar I)
/// and 12 (Elul) are empty; month 14 mirrors the Adar row. Weekday and era
/// adjustments are applied on top of this table.
const HOLIDAY_TABLE: [[u8; 30]; 14] = [
    // Tishrei
    [
        1, 2, 3, 3, 0, 0, 0, 0, 37, 4,
        0, 0, 0, 0, 5, 31, 6, 6, 6, 6,
        7, 27, 8, 0, 0, 0, 0, 0, 0, 0,
    ],
    // Cheshvan
    [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 35,
        35, 35, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    // Kislev
    [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 9, 9, 9, 9, 9, 9,
    ],
    // Tevet
    [
        9, 9, 9, 0, 0, 0, 0, 0, 0, 10,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    // Sh'vat
    [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 11, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 33,
    ],
    // Adar
    [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        12, 0, 12, 13, 14, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    // Nisan
    [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 15, 32, 16, 16, 16, 16,
        28, 29, 0, 0, 0, 24, 24, 24, 0, 0,
    ],
    // Iyar
    [
        0, 17, 17, 17, 17, 17, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 18, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 26, 0, 0,
    ],
    // Sivan
    [
        0, 0, 0, 0, 19, 20, 30, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    // Tammuz
    [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 21, 21, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 36, 36,
    ],
    // Av
    [
        0, 0, 0, 0, 0, 0, 0, 0, 22, 22,
        0, 0, 0, 0, 23, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    // Elul
    [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    // Adar I
    [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
    // Adar II
    [
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        12, 0, 12, 13, 14, 0, 0, 0, 0, 0,
        0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
];

/// Holiday calculator
pub struct HolidayCalculator;

impl HolidayCalculator {
    /// Holiday falling on this date, if any.
    pub fn holiday(info: &DateInfo, diaspora: bool) -> Option<Holiday> {
        Holiday::from_id(Self::holiday_id(info, diaspora))
    }

    /// Stable holiday id for this date, 0 when none.
    pub fn holiday_id(info: &DateInfo, diaspora: bool) -> u8 {
        if !(1..=14).contains(&info.h_mon) || !(1..=30).contains(&info.h_day) {
            return 0;
        }

        let mut id = HOLIDAY_TABLE[info.h_mon as usize - 1][info.h_day as usize - 1];
        let day = info.h_day;
        let dw = info.weekday;

        // A fast that falls on Shabbat is pushed to the next day: the table
        // marks both slots, the weekday decides which one holds.
        if id == 3 && (dw == 7 || (day == 4 && dw != 1)) {
            id = 0;
        }
        if id == 21 && (dw == 7 || (day == 18 && dw != 1)) {
            id = 0;
        }
        if id == 22 && (dw == 7 || (day == 10 && dw != 1)) {
            id = 0;
        }

        // Ta'anit Esther on Shabbat moves back to Thursday, 11 Adar
        if id == 12 && (dw == 7 || (day == 11 && dw != 5)) {
            id = 0;
        }

        // The eighth light falls on 3 Tevet only when Kislev is short
        if id == 9 && info.year_length % 10 != 3 && day == 3 {
            id = 0;
        }

        if id == 26 && info.g_year < 1968 {
            id = 0;
        }

        if id == 17 {
            id = Self::independence_days(info);
        }

        // Yom HaShoah: 27 Nisan, moved off Friday and Sunday
        if id == 24 {
            if info.g_year < 1958 {
                id = 0;
            } else {
                if day == 26 && dw != 5 {
                    id = 0;
                }
                if day == 28 && dw != 2 {
                    id = 0;
                }
                if day == 27 && (dw == 6 || dw == 1) {
                    id = 0;
                }
            }
        }

        // Rabin memorial day: 12 Cheshvan, moved back to Thursday when the
        // 12th falls on Friday or Shabbat
        if id == 35 {
            if info.g_year < 1997 {
                id = 0;
            } else {
                if (day == 10 || day == 11) && dw != 5 {
                    id = 0;
                }
                if day == 12 && (dw == 6 || dw == 7) {
                    id = 0;
                }
            }
        }

        // Zhabotinsky day: 29 Tammuz, postponed to Sunday off Shabbat
        if id == 36 {
            if info.g_year < 2005 {
                id = 0;
            } else {
                if day == 30 && dw != 1 {
                    id = 0;
                }
                if day == 29 && dw == 7 {
                    id = 0;
                }
            }
        }

        // Israel folds the diaspora-only days: 22 Tishrei is the combined
        // Shmini Atzeret/Simchat Torah, the second festival days collapse
        // into chol hamoed or vanish.
        if !diaspora {
            id = match id {
                8 => 0,
                27 => 8,
                31 => 6,
                32 => 16,
                29 | 30 => 0,
                other => other,
            };
        }

        id
    }

    /// Yom HaAtzma'ut and Yom HaZikaron: anchored on 5 and 4 Iyar but moved
    /// by weekday so that neither observance touches Shabbat, with the
    /// postponement rule added in 2004. Returns 17, 25 or 0 for the 2..6
    /// Iyar slots the base table marks.
    fn independence_days(info: &DateInfo) -> u8 {
        let day = info.h_day;
        let dw = info.weekday;

        if info.g_year < 1948 {
            0
        } else if info.g_year < 2004 {
            match (day, dw) {
                (3, 5) | (4, 5) => 17,
                (5, d) if d != 6 && d != 7 => 17,
                (2, 4) | (3, 4) => 25,
                (4, d) if d != 5 && d != 6 => 25,
                _ => 0,
            }
        } else {
            match (day, dw) {
                (3, 5) | (4, 5) | (6, 3) => 17,
                (5, d) if d != 6 && d != 7 && d != 2 => 17,
                (2, 4) | (3, 4) | (5, 2) => 25,
                (4, d) if d != 5 && d != 6 && d != 1 => 25,
                _ => 0,
            }
        }
    }

    /// Classification id for a holiday id; both in their stable numberings.
    pub fn holiday_type_id(holiday_id: u8) -> u8 {
        HolidayType::of(holiday_id).id()
    }

    /// Day of the omer count, counted from 16 Nisan; 0 outside 1..49.
    pub fn omer_day(info: &DateInfo) -> u8 {
        let (nisan16, _, _) = DateConverter::hebrew_to_jdn(16, 7, info.h_year);
        let omer = info.jdn - nisan16 + 1;
        if (1..=49).contains(&omer) {
            omer as u8
        } else {
            0
        }
    }
}
