//! The viewer's local calendar day for "New Book" badges.
//!
//! Both sides of the comparison use the browser's local time zone: today
//! comes from the local `Date` getters and `createdAt` is shifted by the
//! current UTC offset before taking its date.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::UtcOffset;

/// Today's date and the offset it was read at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalDay {
    pub today: time::Date,
    pub offset: UtcOffset,
}

/// Convert `Date.prototype.getTimezoneOffset()` minutes (positive west of
/// UTC) into a [`UtcOffset`].
pub fn offset_from_js_minutes(minutes: f64) -> Option<UtcOffset> {
    if !minutes.is_finite() || minutes.abs() > 24.0 * 60.0 {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    let seconds = -(minutes.round() as i32) * 60;
    UtcOffset::from_whole_seconds(seconds).ok()
}

/// Current local day, or `None` outside the browser.
pub fn local_day() -> Option<LocalDay> {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        let offset = offset_from_js_minutes(now.get_timezone_offset())?;
        let year = i32::try_from(now.get_full_year()).ok()?;
        let month = u8::try_from(now.get_month() + 1).ok()?;
        let day = u8::try_from(now.get_date()).ok()?;
        let month = time::Month::try_from(month).ok()?;
        let today = time::Date::from_calendar_date(year, month, day).ok()?;
        Some(LocalDay { today, offset })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
