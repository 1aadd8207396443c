//! Holiday name constants.
//!
//! The names are the statute's own Japanese forms. A name string is also
//! the only discriminant callers receive, so every holiday shares a single
//! constant here; 振替休日 in particular is always returned through
//! [`SUBSTITUTE_HOLIDAY`], never rebuilt ad hoc.

/// 元日 — New Year's Day (January 1).
pub const NEW_YEARS_DAY: &str = "元日";

/// 成人の日 — Coming-of-Age Day (January 15 through 1999, second Monday of
/// January since 2000).
pub const COMING_OF_AGE_DAY: &str = "成人の日";

/// 建国記念の日 — National Foundation Day (February 11, since 1967).
pub const NATIONAL_FOUNDATION_DAY: &str = "建国記念の日";

/// 春分の日 — Vernal Equinox Day.
pub const VERNAL_EQUINOX_DAY: &str = "春分の日";

/// 天皇誕生日 — The Emperor's Birthday (April 29 through 1988, December 23
/// since 1989).
pub const EMPERORS_BIRTHDAY: &str = "天皇誕生日";

/// みどりの日 — Greenery Day (April 29 from 1989 to 2006, May 4 since 2007).
pub const GREENERY_DAY: &str = "みどりの日";

/// 昭和の日 — Shōwa Day (April 29, since 2007).
pub const SHOWA_DAY: &str = "昭和の日";

/// 憲法記念日 — Constitution Memorial Day (May 3).
pub const CONSTITUTION_MEMORIAL_DAY: &str = "憲法記念日";

/// 国民の休日 — the "citizens' holiday" designated for a weekday sandwiched
/// between two holidays (May 4 from 1988 to 2006, and the Silver Week
/// Tuesday before an autumnal equinox since 2009).
pub const CITIZENS_HOLIDAY: &str = "国民の休日";

/// こどもの日 — Children's Day (May 5).
pub const CHILDRENS_DAY: &str = "こどもの日";

/// 海の日 — Marine Day (July 20 from 1996 to 2002, third Monday of July
/// since 2003).
pub const MARINE_DAY: &str = "海の日";

/// 敬老の日 — Respect-for-the-Aged Day (September 15 from 1966 to 2002,
/// third Monday of September since 2003).
pub const RESPECT_FOR_THE_AGED_DAY: &str = "敬老の日";

/// 秋分の日 — Autumnal Equinox Day.
pub const AUTUMNAL_EQUINOX_DAY: &str = "秋分の日";

/// 体育の日 — Health-Sports Day (October 10 from 1966 to 1999, second
/// Monday of October since 2000).
pub const HEALTH_AND_SPORTS_DAY: &str = "体育の日";

/// 文化の日 — Culture Day (November 3).
pub const CULTURE_DAY: &str = "文化の日";

/// 勤労感謝の日 — Labor Thanksgiving Day (November 23).
pub const LABOR_THANKSGIVING_DAY: &str = "勤労感謝の日";

/// 振替休日 — Substitute Holiday, the weekday taken off in place of a
/// holiday that fell on a non-working day (since 1973).
pub const SUBSTITUTE_HOLIDAY: &str = "振替休日";

/// 皇太子・明仁親王の結婚の儀 — wedding of Crown Prince Akihito
/// (April 10, 1959).
pub const CROWN_PRINCE_AKIHITO_WEDDING: &str = "皇太子・明仁親王の結婚の儀";

/// 昭和天皇の大喪の礼 — state funeral of Emperor Shōwa
/// (February 24, 1989).
pub const EMPEROR_SHOWA_FUNERAL: &str = "昭和天皇の大喪の礼";

/// 即位の礼正殿の儀 — enthronement ceremony of Emperor Akihito
/// (November 12, 1990).
pub const ENTHRONEMENT_CEREMONY: &str = "即位の礼正殿の儀";

/// 皇太子・徳仁親王の結婚の儀 — wedding of Crown Prince Naruhito
/// (June 9, 1993).
pub const CROWN_PRINCE_NARUHITO_WEDDING: &str = "皇太子・徳仁親王の結婚の儀";
