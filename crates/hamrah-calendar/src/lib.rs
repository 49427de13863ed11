//! HAMRAH Calendar — Jalali (solar Hijri) ↔ Gregorian conversion and
//! birth-date validation.
//!
//! The string-facing API works on `YYYY/MM/DD` Jalali date strings and
//! gates every birth date before it is allowed near storage. The
//! underlying arithmetic lives in [`arith`].
//!
//! Round-trip law: for every valid Jalali date `d`,
//! `gregorian_to_jalali(jalali_to_gregorian(d)) == Some(d)`.

use chrono::{Datelike, NaiveDate};

pub mod arith;

/// Whether `text` matches the literal shape `YYYY/MM/DD`: a 4-digit
/// year and zero-padded 2-digit month and day.
///
/// Shape only — `9999/99/99` passes. Semantic validation is
/// [`is_valid_jalali_date`].
pub fn has_date_shape(text: &str) -> bool {
    let b = text.as_bytes();
    b.len() == 10
        && b[4] == b'/'
        && b[7] == b'/'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
}

/// Validate a Jalali date string: shape `YYYY/MM/DD` and an existing
/// calendar date. Never panics.
pub fn is_valid_jalali_date(text: &str) -> bool {
    has_date_shape(text) && jalali_to_gregorian(text).is_some()
}

/// Convert a Jalali `YYYY/MM/DD` string to the equivalent Gregorian
/// calendar date.
///
/// Rejects (returns `None`) on unparseable components, a month outside
/// `[1, 12]`, a day outside `[1, 31]`, or a day that does not exist in
/// the given month and year — Mehr 31st never converts, and Esfand
/// 30th converts only in leap years.
pub fn jalali_to_gregorian(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split('/');
    let jy: i32 = parts.next()?.parse().ok()?;
    let jm: i32 = parts.next()?.parse().ok()?;
    let jd: i32 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    if !(1..=12).contains(&jm) || !(1..=31).contains(&jd) {
        return None;
    }
    if !arith::is_valid_jalali(jy, jm, jd) {
        return None;
    }

    let (gy, gm, gd) = arith::d2g(arith::j2d(jy, jm, jd)?);
    NaiveDate::from_ymd_opt(gy, gm as u32, gd as u32)
}

/// Convert a Gregorian calendar date to a zero-padded Jalali
/// `YYYY/MM/DD` string. Accepts an absent input and returns `None`
/// without raising; also `None` when the date falls outside the
/// supported Jalali year range.
pub fn gregorian_to_jalali(date: Option<NaiveDate>) -> Option<String> {
    let date = date?;
    let jdn = arith::g2d(date.year() as i64, date.month() as i64, date.day() as i64);
    let (jy, jm, jd) = arith::d2j(jdn)?;
    Some(format!("{jy:04}/{jm:02}/{jd:02}"))
}
