use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

/// `VALUE=DATE` form, e.g. `20200301`
pub const DATE_FORMAT: &str = "%Y%m%d";
/// UTC `DATE-TIME` form, e.g. `20180101T090000Z`
pub const DATETIME_FORMAT: &str = "%Y%m%dT%H%M%SZ";

#[inline]
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format(DATE_FORMAT).to_string()
}

#[inline]
pub fn format_utc(dt: &DateTime<Utc>) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}

/// Reinterprets a floating calendar date as midnight UTC.
#[inline]
pub fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// A value that can be collapsed to a floating calendar date.
///
/// All-day events have no meaningful timezone, so zoned inputs keep the date they
/// show in their own zone and drop everything else.
pub trait CalendarDate {
    fn calendar_date(&self) -> NaiveDate;
}

impl CalendarDate for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDate for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDate for DateTime<Tz> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }
}
