//! RFC 5545 ICS generation.
//!
//! The generator turns a [`Link`] into a `VCALENDAR` document holding exactly one
//! `VEVENT`. Properties are emitted in a fixed order so that equal input with
//! explicit `UID` and `DTSTAMP` renders byte-identical output:
//!
//! ```text
//! BEGIN:VCALENDAR
//! VERSION:2.0
//! PRODID:...
//! BEGIN:VEVENT
//! UID:...
//! DTSTAMP:...
//! DTSTART:...
//! DTEND:...
//! SUMMARY:...
//! DESCRIPTION:...     (if set)
//! LOCATION:...        (if set)
//! BEGIN:VALARM ... END:VALARM   (if a reminder is set)
//! ...                 (extra properties, insertion order)
//! END:VEVENT
//! END:VCALENDAR
//! ```
//!
//! # Examples
//!
//! ```rust
//! use calendar_links::{Link, generator::{IcsOptions, Reminder}};
//! use chrono::NaiveDate;
//!
//! let link = Link::create_all_day("Launch", NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(), 3)
//!     .unwrap();
//! let options = IcsOptions::new()
//!     .uid("launch@example.com")
//!     .unwrap()
//!     .reminder(Reminder::default())
//!     .unwrap();
//!
//! let ics = link.ics(options);
//! assert!(ics.contains("DTSTART;VALUE=DATE:20200301\r\n"));
//! assert!(ics.contains("TRIGGER:-PT15M\r\n"));
//! ```

use base64::{Engine, engine::general_purpose::STANDARD};
use chrono::Utc;
use uuid::Uuid;

use crate::{
    Link,
    generator::Generator,
    types::{format_date, format_duration, format_utc},
};

pub mod content_line;
pub use content_line::{ContentLine, ContentLineParams};
mod escape;
pub use escape::escape_text;
mod fold;
pub use fold::{MAX_LINE_OCTETS, fold_line};
mod options;
pub use options::*;

const VERSION: &str = "2.0";
const DATA_URI_PREFIX: &str = "data:text/calendar;charset=utf8;base64,";

#[derive(Debug, Clone, Default)]
pub struct Ics {
    options: IcsOptions,
    presentation: IcsPresentation,
}

impl Ics {
    pub fn new(options: IcsOptions) -> Self {
        Self::with_presentation(options, IcsPresentation::default())
    }

    pub fn with_presentation(options: IcsOptions, presentation: IcsPresentation) -> Self {
        Self {
            options,
            presentation,
        }
    }

    /// The unfolded content lines of the document for `link`.
    pub fn content_lines(&self, link: &Link) -> Vec<ContentLine> {
        let options = &self.options;
        let mut lines = vec![
            ContentLine::begin("VCALENDAR"),
            ContentLine::raw("VERSION", VERSION),
            ContentLine::raw(PRODID, options.text(PRODID).unwrap_or(DEFAULT_PRODID)),
            ContentLine::begin("VEVENT"),
            ContentLine::raw(
                UID,
                options
                    .text(UID)
                    .map_or_else(|| Uuid::new_v4().to_string(), str::to_owned),
            ),
            ContentLine::raw(
                DTSTAMP,
                options
                    .text(DTSTAMP)
                    .map_or_else(|| format_utc(&Utc::now()), str::to_owned),
            ),
        ];

        if link.is_all_day() {
            lines.push(
                ContentLine::raw("DTSTART", format_date(&link.start())).with_param("VALUE", "DATE"),
            );
            lines.push(
                ContentLine::raw("DTEND", format_date(&link.end())).with_param("VALUE", "DATE"),
            );
        } else {
            lines.push(ContentLine::raw("DTSTART", format_utc(&link.start())));
            lines.push(ContentLine::raw("DTEND", format_utc(&link.end())));
        }

        lines.push(ContentLine::text("SUMMARY", link.title()));
        if !link.description().is_empty() {
            lines.push(ContentLine::text("DESCRIPTION", link.description()));
        }
        if !link.address().is_empty() {
            lines.push(ContentLine::text("LOCATION", link.address()));
        }

        if let Some(reminder) = options.get_reminder() {
            lines.extend(alarm(reminder));
        }

        lines.extend(options.extra_properties().map(|(name, value)| {
            if name == URL {
                ContentLine::raw(name, value).with_param("VALUE", "URI")
            } else {
                ContentLine::text(name, value)
            }
        }));

        lines.push(ContentLine::end("VEVENT"));
        lines.push(ContentLine::end("VCALENDAR"));
        lines
    }

    fn build(&self, lines: &[ContentLine]) -> String {
        let line_ending = self.presentation.line_ending.to_string();
        let text = lines
            .iter()
            .map(|line| fold_line(&line.to_string(), &line_ending))
            .collect::<String>();

        match self.presentation.format {
            IcsFormat::File => text,
            IcsFormat::DataUri => format!("{DATA_URI_PREFIX}{}", STANDARD.encode(text)),
        }
    }
}

fn alarm(reminder: &Reminder) -> [ContentLine; 5] {
    let trigger = match reminder.trigger() {
        Trigger::Before(offset) => ContentLine::raw("TRIGGER", format_duration(-offset)),
        Trigger::At(instant) => {
            ContentLine::raw("TRIGGER", format_utc(&instant)).with_param("VALUE", "DATE-TIME")
        }
    };
    [
        ContentLine::begin("VALARM"),
        ContentLine::raw("ACTION", "DISPLAY"),
        ContentLine::text("DESCRIPTION", reminder.description()),
        trigger,
        ContentLine::end("VALARM"),
    ]
}

impl Generator for Ics {
    fn generate(&self, link: &Link) -> String {
        let lines = self.content_lines(link);
        tracing::debug!(
            uid = lines.iter().find(|line| line.name == UID).map(|line| line.value.as_str()),
            lines = lines.len(),
            "rendered ICS document"
        );
        self.build(&lines)
    }
}
