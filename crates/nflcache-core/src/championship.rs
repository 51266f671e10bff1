//! Built-in championship game dates.
//!
//! Play-by-play completeness is judged against this table. Championship dates
//! are fixed well in advance, so the table only needs a new row once a year.

use chrono::NaiveDate;

use crate::types::{ReferenceDates, Season};

/// Season, then year/month/day of that season's championship game.
const CHAMPIONSHIP_DATES: &[(i32, (i32, u32, u32))] = &[
    (1999, (2000, 1, 30)),
    (2000, (2001, 1, 28)),
    (2001, (2002, 2, 3)),
    (2002, (2003, 1, 26)),
    (2003, (2004, 2, 1)),
    (2004, (2005, 2, 6)),
    (2005, (2006, 2, 5)),
    (2006, (2007, 2, 4)),
    (2007, (2008, 2, 3)),
    (2008, (2009, 2, 1)),
    (2009, (2010, 2, 7)),
    (2010, (2011, 2, 6)),
    (2011, (2012, 2, 5)),
    (2012, (2013, 2, 3)),
    (2013, (2014, 2, 2)),
    (2014, (2015, 2, 1)),
    (2015, (2016, 2, 7)),
    (2016, (2017, 2, 5)),
    (2017, (2018, 2, 4)),
    (2018, (2019, 2, 3)),
    (2019, (2020, 2, 2)),
    (2020, (2021, 2, 7)),
    (2021, (2022, 2, 13)),
    (2022, (2023, 2, 12)),
    (2023, (2024, 2, 11)),
    (2024, (2025, 2, 9)),
    (2025, (2026, 2, 8)),
];

/// Returns the championship date of `season`, if it is in the built-in table.
#[must_use]
pub fn championship_date(season: Season) -> Option<NaiveDate> {
    CHAMPIONSHIP_DATES
        .iter()
        .find(|(s, _)| *s == season.year())
        .and_then(|(_, (y, m, d))| NaiveDate::from_ymd_opt(*y, *m, *d))
}

/// Returns every built-in championship date.
#[must_use]
pub fn championship_dates() -> ReferenceDates {
    CHAMPIONSHIP_DATES
        .iter()
        .filter_map(|(_, (y, m, d))| NaiveDate::from_ymd_opt(*y, *m, *d))
        .collect()
}
