//! Jalali calendar arithmetic.
//!
//! Implements the break-table approximation of the astronomical solar
//! Hijri calendar (the 33-year sub-cycle scheme popularized by
//! Birashk's tables). Leap years do not follow a fixed 4-year rule;
//! the table below lists the years in which the sub-cycle pattern
//! shifts, and everything is derived from the Julian Day Number.
//!
//! Years outside `[MIN_YEAR, MAX_YEAR]` are outside the table and are
//! reported as `None` rather than panicking.

/// Jalali years at which the leap-year sub-cycle changes.
const BREAKS: [i32; 20] = [
    -61, 9, 38, 199, 426, 686, 756, 818, 1111, 1181, 1210, 1635, 2060, 2097, 2192, 2262, 2324,
    2394, 2456, 3178,
];

/// First Jalali year covered by the break table.
pub const MIN_YEAR: i32 = -61;
/// Last Jalali year covered by the break table.
pub const MAX_YEAR: i32 = 3177;

/// Per-year facts derived from the break table.
struct JalCal {
    /// Number of years since the last leap year (0 means leap).
    leap: i32,
    /// Gregorian year containing the first day of this Jalali year.
    gy: i32,
    /// Gregorian March day of Farvardin 1st (Nowruz).
    march: i32,
}

/// Leap-year and Nowruz data for a Jalali year.
///
/// All integer division here truncates toward zero, matching the
/// reference tables.
fn jal_cal(jy: i32) -> Option<JalCal> {
    if jy < BREAKS[0] || jy >= BREAKS[BREAKS.len() - 1] {
        return None;
    }

    let gy = jy + 621;
    let mut leap_j = -14;
    let mut jp = BREAKS[0];
    let mut jump = 0;

    // Walk the break table up to the sub-cycle containing jy,
    // accumulating the leap-day count.
    for &jm in &BREAKS[1..] {
        jump = jm - jp;
        if jy < jm {
            break;
        }
        leap_j += jump / 33 * 8 + (jump % 33) / 4;
        jp = jm;
    }
    let mut n = jy - jp;

    leap_j += n / 33 * 8 + (n % 33 + 3) / 4;
    if jump % 33 == 4 && jump - n == 4 {
        leap_j += 1;
    }

    // Gregorian leap days since the epoch, and the March day of Nowruz.
    let leap_g = gy / 4 - (gy / 100 + 1) * 3 / 4 - 150;
    let march = 20 + leap_j - leap_g;

    if jump - n < 6 {
        n = n - jump + (jump + 4) / 33 * 33;
    }
    let mut leap = ((n + 1) % 33 - 1) % 4;
    if leap == -1 {
        leap = 4;
    }

    Some(JalCal { leap, gy, march })
}

/// Whether a Jalali year is a leap year (Esfand has 30 days).
pub fn is_leap_jalali_year(jy: i32) -> bool {
    jal_cal(jy).is_some_and(|r| r.leap == 0)
}

/// Number of days in a Jalali month. Months outside `[1, 12]` or years
/// outside the table yield 0.
pub fn jalali_month_length(jy: i32, jm: i32) -> i32 {
    match jm {
        1..=6 => 31,
        7..=11 => 30,
        12 if is_leap_jalali_year(jy) => 30,
        12 => 29,
        _ => 0,
    }
}

/// Whether the triple denotes an existing Jalali calendar date.
pub fn is_valid_jalali(jy: i32, jm: i32, jd: i32) -> bool {
    (MIN_YEAR..=MAX_YEAR).contains(&jy)
        && (1..=12).contains(&jm)
        && jd >= 1
        && jd <= jalali_month_length(jy, jm)
}

/// Gregorian date to Julian Day Number.
pub fn g2d(gy: i64, gm: i64, gd: i64) -> i64 {
    let mut d = (gy + (gm - 8) / 6 + 100100) * 1461 / 4 + (153 * ((gm + 9) % 12) + 2) / 5 + gd
        - 34840408;
    d = d - (gy + 100100 + (gm - 8) / 6) / 100 * 3 / 4 + 752;
    d
}

/// Julian Day Number to Gregorian date.
pub fn d2g(jdn: i64) -> (i32, i32, i32) {
    let mut j = 4 * jdn + 139361631;
    j += (4 * jdn + 183187720) / 146097 * 3 / 4 * 4 - 3908;
    let i = (j % 1461) / 4 * 5 + 308;
    let gd = (i % 153) / 5 + 1;
    let gm = i / 153 % 12 + 1;
    let gy = j / 1461 - 100100 + (8 - gm) / 6;
    (gy as i32, gm as i32, gd as i32)
}

/// Jalali date to Julian Day Number. `None` if the year is outside the
/// break table. Does not itself check day-in-month existence.
pub fn j2d(jy: i32, jm: i32, jd: i32) -> Option<i64> {
    let r = jal_cal(jy)?;
    Some(
        g2d(r.gy as i64, 3, r.march as i64)
            + ((jm - 1) * 31 - jm / 7 * (jm - 7) + jd - 1) as i64,
    )
}

/// Julian Day Number to Jalali date. `None` if the resulting year is
/// outside the break table.
pub fn d2j(jdn: i64) -> Option<(i32, i32, i32)> {
    let (gy, _, _) = d2g(jdn);
    let mut jy = gy - 621;
    let r = jal_cal(jy)?;
    let nowruz = g2d(gy as i64, 3, r.march as i64);

    // Offset from Farvardin 1st of the candidate year.
    let mut k = jdn - nowruz;
    if k >= 0 {
        if k <= 185 {
            // First half: six 31-day months.
            let jm = 1 + (k / 31) as i32;
            let jd = (k % 31) as i32 + 1;
            return Some((jy, jm, jd));
        }
        k -= 186;
    } else {
        // Previous Jalali year.
        jy -= 1;
        k += 179;
        if r.leap == 1 {
            k += 1;
        }
    }
    let jm = 7 + (k / 30) as i32;
    let jd = (k % 30) as i32 + 1;
    Some((jy, jm, jd))
}
