//! The calendar event every generator renders.
//!
//! A [`Link`] is created once, either as a timed event with [`Link::create`] or as an
//! all-day event with [`Link::create_all_day`]. Only the description and the address
//! can be filled in afterwards.
//!
//! # Examples
//!
//! ```rust
//! use calendar_links::Link;
//! use chrono::{TimeZone, Utc};
//!
//! let link = Link::create(
//!     "Meeting",
//!     Utc.with_ymd_and_hms(2018, 1, 1, 9, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2018, 1, 1, 10, 0, 0).unwrap(),
//!     false,
//! )
//! .unwrap()
//! .with_address("Samberstraat 69D, 2060 Antwerpen");
//!
//! println!("{}", link.google());
//! ```

use chrono::{DateTime, Days, TimeZone, Utc};

use crate::{
    LinkError,
    generator::{
        Generator, Google, Ics, IcsOptions, IcsPresentation, WebOffice, WebOutlook, Yahoo,
    },
    types::{CalendarDate, utc_midnight},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    title: String,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    all_day: bool,
    description: String,
    address: String,
}

impl Link {
    fn new(
        title: String,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        all_day: bool,
    ) -> Result<Self, LinkError> {
        if title.is_empty() {
            return Err(LinkError::EmptyTitle);
        }
        if start > end {
            return Err(LinkError::InvalidRange { start, end });
        }
        tracing::trace!(%start, %end, all_day, "created link");
        Ok(Self {
            title,
            start,
            end,
            all_day,
            description: String::new(),
            address: String::new(),
        })
    }

    /// Creates a timed event.
    ///
    /// With `all_day` set, the event is rebuilt as an all-day event covering every
    /// calendar date from `start`'s date to `end`'s date, both included, as seen in
    /// their own timezone.
    pub fn create<Tz: TimeZone>(
        title: impl Into<String>,
        start: DateTime<Tz>,
        end: DateTime<Tz>,
        all_day: bool,
    ) -> Result<Self, LinkError> {
        let title = title.into();
        let (utc_start, utc_end) = (start.with_timezone(&Utc), end.with_timezone(&Utc));
        if utc_start > utc_end {
            return Err(LinkError::InvalidRange {
                start: utc_start,
                end: utc_end,
            });
        }
        if !all_day {
            return Self::new(title, utc_start, utc_end, false);
        }

        let days = (end.date_naive() - start.date_naive()).num_days() + 1;
        let days = u32::try_from(days).map_err(|_| LinkError::InvalidRange {
            start: utc_start,
            end: utc_end,
        })?;
        Self::create_all_day(title, start, days)
    }

    /// Creates an all-day event starting on the calendar date of `start`.
    ///
    /// The end is exclusive: a one day event starting on 2020-03-01 ends on
    /// 2020-03-02 at midnight UTC.
    pub fn create_all_day(
        title: impl Into<String>,
        start: impl CalendarDate,
        number_of_days: u32,
    ) -> Result<Self, LinkError> {
        let start = utc_midnight(start.calendar_date());
        let end = start
            .checked_add_days(Days::new(number_of_days.into()))
            .filter(|_| number_of_days > 0)
            .ok_or(LinkError::InvalidRange { start, end: start })?;
        Self::new(title.into(), start, end, true)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Exclusive for all-day events.
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn is_all_day(&self) -> bool {
        self.all_day
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn format_with(&self, generator: &impl Generator) -> String {
        generator.generate(self)
    }

    pub fn google(&self) -> String {
        self.format_with(&Google)
    }

    pub fn yahoo(&self) -> String {
        self.format_with(&Yahoo)
    }

    pub fn web_outlook(&self) -> String {
        self.format_with(&WebOutlook)
    }

    pub fn web_office(&self) -> String {
        self.format_with(&WebOffice)
    }

    pub fn ics(&self, options: IcsOptions) -> String {
        self.format_with(&Ics::new(options))
    }

    pub fn ics_with(&self, options: IcsOptions, presentation: IcsPresentation) -> String {
        self.format_with(&Ics::with_presentation(options, presentation))
    }
}
