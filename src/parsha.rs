//! Parasha Scheduling Module
//!
//! Assigns the weekly Torah reading to a date: a week-of-year counter over
//! the Hebrew year, festival suppressions around Pesach and Shavuot, and a
//! per-year-type join table deciding which pairs of readings combine.

use serde::{Deserialize, Serialize};

use crate::calendar::DateInfo;

/// Weekly Torah reading, carrying its stable numeric id. Ids 1..54 are the
/// single readings, 55..61 the combined pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Parsha {
    Bereshit = 1,
    Noach = 2,
    LechLecha = 3,
    Vayera = 4,
    ChayeiSara = 5,
    Toldot = 6,
    Vayetzei = 7,
    Vayishlach = 8,
    Vayeshev = 9,
    Miketz = 10,
    Vayigash = 11,
    Vayechi = 12,
    Shemot = 13,
    Vaera = 14,
    Bo = 15,
    Beshalach = 16,
    Yitro = 17,
    Mishpatim = 18,
    Terumah = 19,
    Tetzaveh = 20,
    KiTisa = 21,
    Vayakhel = 22,
    Pekudei = 23,
    Vayikra = 24,
    Tzav = 25,
    Shmini = 26,
    Tazria = 27,
    Metzora = 28,
    AchreiMot = 29,
    Kedoshim = 30,
    Emor = 31,
    Behar = 32,
    Bechukotai = 33,
    Bamidbar = 34,
    Nasso = 35,
    Behaalotcha = 36,
    Shlach = 37,
    Korach = 38,
    Chukat = 39,
    Balak = 40,
    Pinchas = 41,
    Matot = 42,
    Masei = 43,
    Devarim = 44,
    Vaetchanan = 45,
    Eikev = 46,
    Reeh = 47,
    Shoftim = 48,
    KiTeitzei = 49,
    KiTavo = 50,
    Nitzavim = 51,
    Vayeilech = 52,
    Haazinu = 53,
    VezotHabracha = 54,
    VayakhelPekudei = 55,
    TazriaMetzora = 56,
    AchreiMotKedoshim = 57,
    BeharBechukotai = 58,
    ChukatBalak = 59,
    MatotMasei = 60,
    NitzavimVayeilech = 61,
}

impl Parsha {
    /// Stable id, 1..61.
    pub fn id(&self) -> u8 {
        *self as u8
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Parsha::Bereshit),
            2 => Some(Parsha::Noach),
            3 => Some(Parsha::LechLecha),
            4 => Some(Parsha::Vayera),
            5 => Some(Parsha::ChayeiSara),
            6 => Some(Parsha::Toldot),
            7 => Some(Parsha::Vayetzei),
            8 => Some(Parsha::Vayishlach),
            9 => Some(Parsha::Vayeshev),
            10 => Some(Parsha::Miketz),
            11 => Some(Parsha::Vayigash),
            12 => Some(Parsha::Vayechi),
            13 => Some(Parsha::Shemot),
            14 => Some(Parsha::Vaera),
            15 => Some(Parsha::Bo),
            16 => Some(Parsha::Beshalach),
            17 => Some(Parsha::Yitro),
            18 => Some(Parsha::Mishpatim),
            19 => Some(Parsha::Terumah),
            20 => Some(Parsha::Tetzaveh),
            21 => Some(Parsha::KiTisa),
            22 => Some(Parsha::Vayakhel),
            23 => Some(Parsha::Pekudei),
            24 => Some(Parsha::Vayikra),
            25 => Some(Parsha::Tzav),
            26 => Some(Parsha::Shmini),
            27 => Some(Parsha::Tazria),
            28 => Some(Parsha::Metzora),
            29 => Some(Parsha::AchreiMot),
            30 => Some(Parsha::Kedoshim),
            31 => Some(Parsha::Emor),
            32 => Some(Parsha::Behar),
            33 => Some(Parsha::Bechukotai),
            34 => Some(Parsha::Bamidbar),
            35 => Some(Parsha::Nasso),
            36 => Some(Parsha::Behaalotcha),
            37 => Some(Parsha::Shlach),
            38 => Some(Parsha::Korach),
            39 => Some(Parsha::Chukat),
            40 => Some(Parsha::Balak),
            41 => Some(Parsha::Pinchas),
            42 => Some(Parsha::Matot),
            43 => Some(Parsha::Masei),
            44 => Some(Parsha::Devarim),
            45 => Some(Parsha::Vaetchanan),
            46 => Some(Parsha::Eikev),
            47 => Some(Parsha::Reeh),
            48 => Some(Parsha::Shoftim),
            49 => Some(Parsha::KiTeitzei),
            50 => Some(Parsha::KiTavo),
            51 => Some(Parsha::Nitzavim),
            52 => Some(Parsha::Vayeilech),
            53 => Some(Parsha::Haazinu),
            54 => Some(Parsha::VezotHabracha),
            55 => Some(Parsha::VayakhelPekudei),
            56 => Some(Parsha::TazriaMetzora),
            57 => Some(Parsha::AchreiMotKedoshim),
            58 => Some(Parsha::BeharBechukotai),
            59 => Some(Parsha::ChukatBalak),
            60 => Some(Parsha::MatotMasei),
            61 => Some(Parsha::NitzavimVayeilech),
            _ => None,
        }
    }

    /// For a combined reading, the two single readings it covers.
    pub fn components(&self) -> Option<(Parsha, Parsha)> {
        match self {
            Parsha::VayakhelPekudei => Some((Parsha::Vayakhel, Parsha::Pekudei)),
            Parsha::TazriaMetzora => Some((Parsha::Tazria, Parsha::Metzora)),
            Parsha::AchreiMotKedoshim => Some((Parsha::AchreiMot, Parsha::Kedoshim)),
            Parsha::BeharBechukotai => Some((Parsha::Behar, Parsha::Bechukotai)),
            Parsha::ChukatBalak => Some((Parsha::Chukat, Parsha::Balak)),
            Parsha::MatotMasei => Some((Parsha::Matot, Parsha::Masei)),
            Parsha::NitzavimVayeilech => Some((Parsha::Nitzavim, Parsha::Vayeilech)),
            _ => None,
        }
    }

    /// English name of the reading
    pub fn name(&self) -> &'static str {
        match self {
            Parsha::Bereshit => "Bereshit",
            Parsha::Noach => "Noach",
            Parsha::LechLecha => "Lech-Lecha",
            Parsha::Vayera => "Vayera",
            Parsha::ChayeiSara => "Chayei Sara",
            Parsha::Toldot => "Toldot",
            Parsha::Vayetzei => "Vayetzei",
            Parsha::Vayishlach => "Vayishlach",
            Parsha::Vayeshev => "Vayeshev",
            Parsha::Miketz => "Miketz",
            Parsha::Vayigash => "Vayigash",
            Parsha::Vayechi => "Vayechi",
            Parsha::Shemot => "Shemot",
            Parsha::Vaera => "Vaera",
            Parsha::Bo => "Bo",
            Parsha::Beshalach => "Beshalach",
            Parsha::Yitro => "Yitro",
            Parsha::Mishpatim => "Mishpatim",
            Parsha::Terumah => "Terumah",
            Parsha::Tetzaveh => "Tetzaveh",
            Parsha::KiTisa => "Ki Tisa",
            Parsha::Vayakhel => "Vayakhel",
            Parsha::Pekudei => "Pekudei",
            Parsha::Vayikra => "Vayikra",
            Parsha::Tzav => "Tzav",
            Parsha::Shmini => "Shmini",
            Parsha::Tazria => "Tazria",
            Parsha::Metzora => "Metzora",
            Parsha::AchreiMot => "Achrei Mot",
            Parsha::Kedoshim => "Kedoshim",
            Parsha::Emor => "Emor",
            Parsha::Behar => "Behar",
            Parsha::Bechukotai => "Bechukotai",
            Parsha::Bamidbar => "Bamidbar",
            Parsha::Nasso => "Nasso",
            Parsha::Behaalotcha => "Beha'alotcha",
            Parsha::Shlach => "Sh'lach",
            Parsha::Korach => "Korach",
            Parsha::Chukat => "Chukat",
            Parsha::Balak => "Balak",
            Parsha::Pinchas => "Pinchas",
            Parsha::Matot => "Matot",
            Parsha::Masei => "Masei",
            Parsha::Devarim => "Devarim",
            Parsha::Vaetchanan => "Vaetchanan",
            Parsha::Eikev => "Eikev",
            Parsha::Reeh => "Re'eh",
            Parsha::Shoftim => "Shoftim",
            Parsha::KiTeitzei => "Ki Teitzei",
            Parsha::KiTavo => "Ki Tavo",
            Parsha::Nitzavim => "Nitzavim",
            Parsha::Vayeilech => "Vayeilech",
            Parsha::Haazinu => "Ha'Azinu",
            Parsha::VezotHabracha => "Vezot Habracha",
            Parsha::VayakhelPekudei => "Vayakhel-Pekudei",
            Parsha::TazriaMetzora => "Tazria-Metzora",
            Parsha::AchreiMotKedoshim => "Achrei Mot-Kedoshim",
            Parsha::BeharBechukotai => "Behar-Bechukotai",
            Parsha::ChukatBalak => "Chukat-Balak",
            Parsha::MatotMasei => "Matot-Masei",
            Parsha::NitzavimVayeilech => "Nitzavim-Vayeilech",
        }
    }
}

/// Which of the seven joinable pairs combine, keyed by
/// `[diaspora][year_type - 1][pair]`. Pair order: Vayakhel-Pekudei,
/// Tazria-Metzora, Achrei Mot-Kedoshim, Behar-Bechukotai, Chukat-Balak,
/// Matot-Masei, Nitzavim-Vayeilech.
const JOIN_FLAGS: [[[u8; 7]; 14]; 2] = [
    // Israel
    [
        [1, 1, 1, 1, 0, 1, 1],
        [1, 1, 1, 1, 0, 1, 0],
        [1, 1, 1, 1, 0, 1, 1],
        [1, 1, 1, 0, 0, 1, 0],
        [1, 1, 1, 1, 0, 1, 1],
        [0, 1, 1, 1, 0, 1, 0],
        [1, 1, 1, 1, 0, 1, 1],
        [0, 0, 0, 0, 0, 1, 1],
        [0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 1, 1],
        [0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 0, 1],
        [0, 0, 0, 0, 0, 1, 1],
    ],
    // diaspora
    [
        [1, 1, 1, 1, 0, 1, 1],
        [1, 1, 1, 1, 0, 1, 0],
        [1, 1, 1, 1, 1, 1, 1],
        [1, 1, 1, 1, 0, 1, 0],
        [1, 1, 1, 1, 1, 1, 1],
        [0, 1, 1, 1, 0, 1, 0],
        [1, 1, 1, 1, 0, 1, 1],
        [0, 0, 0, 0, 1, 1, 1],
        [0, 0, 0, 0, 0, 0, 0],
        [0, 0, 0, 0, 0, 1, 1],
        [0, 0, 0, 0, 0, 1, 0],
        [0, 0, 0, 0, 0, 1, 0],
        [0, 0, 0, 0, 0, 0, 1],
        [0, 0, 0, 0, 1, 1, 1],
    ],
];

/// Reading numbers at which a joinable pair opens, with the id of the
/// combined reading.
const PAIR_OPENINGS: [(i32, u8); 7] = [
    (22, 55),
    (27, 56),
    (29, 57),
    (32, 58),
    (39, 59),
    (42, 60),
    (51, 61),
];

/// Parasha calculator
pub struct ParshaCalculator;

impl ParshaCalculator {
    /// Weekly reading for this date, if any.
    pub fn parasha(info: &DateInfo, diaspora: bool) -> Option<Parsha> {
        Parsha::from_id(Self::parasha_id(info, diaspora))
    }

    /// Stable parasha id for this date, 0 when none.
    ///
    /// Weekdays yield 0 except Simchat Torah, when Vezot Habracha is read:
    /// 22 Tishrei in Israel, 23 Tishrei in diaspora.
    pub fn parasha_id(info: &DateInfo, diaspora: bool) -> u8 {
        if info.h_mon == 1 {
            if info.h_day == 22 && !diaspora {
                return 54;
            }
            if info.h_day == 23 && diaspora {
                return 54;
            }
        }

        if info.weekday != 7 {
            return 0;
        }

        let nyd = info.new_year_weekday;
        match info.weeks_since_new_year {
            // between Rosh Hashana and Yom Kippur
            1 => match nyd {
                7 => 0, // Rosh Hashana itself
                2 | 3 => 52,
                _ => 53,
            },
            2 => {
                if nyd == 5 {
                    0 // Yom Kippur
                } else {
                    53
                }
            }
            // Sukkot
            3 => 0,
            4 => {
                if nyd == 7 {
                    // Simchat Torah Shabbat in Israel; still festival in diaspora
                    if diaspora {
                        0
                    } else {
                        54
                    }
                } else {
                    1
                }
            }
            weeks => Self::counted_reading(info, diaspora, weeks),
        }
    }

    /// The general case from week 5 on: a running reading number corrected
    /// for festival Shabbatot, then folded through the join table.
    fn counted_reading(info: &DateInfo, diaspora: bool, weeks: u8) -> u8 {
        let mut reading = weeks as i32 - 3;

        // Bereshit slipped a week when the year opened on Shabbat
        if info.new_year_weekday == 7 {
            reading -= 1;
        }

        // nothing joins before Vayakhel
        if reading < 22 {
            return reading as u8;
        }

        let month = info.h_mon as i32;
        let day = info.h_day as i32;

        // a Shabbat inside Pesach carries the festival reading
        if month == 7 && day > 14 {
            if diaspora && day <= 22 {
                return 0;
            }
            if !diaspora && day < 22 {
                return 0;
            }
        }

        let next_new_year = (info.new_year_weekday as i32 + info.year_length as i32) % 7;

        // Pesach always consumes one Shabbat
        if (month == 7 && day > 21) || (month > 7 && month < 13) {
            reading -= 1;

            // in diaspora the eighth day of Pesach can itself be a Shabbat
            if diaspora && next_new_year == 2 {
                reading -= 1;
            }
        }

        // in diaspora Shavuot can fall on Shabbat (7 Sivan)
        if diaspora
            && month < 13
            && (month > 9 || (month == 9 && day >= 7))
            && next_new_year == 0
        {
            if month == 9 && day == 7 {
                return 0;
            }
            reading -= 1;
        }

        let flags = &JOIN_FLAGS[diaspora as usize][info.year_type as usize - 1];
        for (pair, &(opening, combined)) in PAIR_OPENINGS.iter().enumerate() {
            if flags[pair] != 0 && reading >= opening {
                if reading == opening {
                    return combined;
                }
                // a joined pair earlier in the year shifts later readings up
                reading += 1;
            }
        }

        reading as u8
    }
}
