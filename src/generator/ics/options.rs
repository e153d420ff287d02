use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use derive_more::{Display, From};

use crate::{LinkError, types::format_utc};

pub const DEFAULT_PRODID: &str = "-//calendar-links//EN";
pub const DEFAULT_REMINDER_DESCRIPTION: &str = "Reminder";
pub const DEFAULT_REMINDER_MINUTES: i64 = 15;

/// Keys with dedicated handling; everything else is an extra property.
pub const UID: &str = "UID";
pub const PRODID: &str = "PRODID";
pub const DTSTAMP: &str = "DTSTAMP";
pub const REMINDER: &str = "REMINDER";
pub const URL: &str = "URL";

/// When a reminder fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Relative to the event start.
    Before(TimeDelta),
    /// An absolute instant.
    At(DateTime<Utc>),
}

impl Default for Trigger {
    fn default() -> Self {
        Self::Before(TimeDelta::minutes(DEFAULT_REMINDER_MINUTES))
    }
}

/// A `VALARM` attached to the event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reminder {
    description: Option<String>,
    trigger: Trigger,
}

impl Reminder {
    /// Fires `offset` before the event starts.
    pub fn before(offset: TimeDelta) -> Result<Self, LinkError> {
        if offset < TimeDelta::zero() {
            return Err(LinkError::InvalidOption(format!(
                "reminder offset must not be negative, got {offset}"
            )));
        }
        Ok(Self {
            description: None,
            trigger: Trigger::Before(offset),
        })
    }

    pub fn at<Tz: TimeZone>(instant: DateTime<Tz>) -> Self {
        Self {
            description: None,
            trigger: Trigger::At(instant.with_timezone(&Utc)),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn description(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or(DEFAULT_REMINDER_DESCRIPTION)
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }
}

#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum IcsOption {
    Text(String),
    Reminder(Reminder),
}

impl From<&str> for IcsOption {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// Extra properties and components for the ICS generator, keyed by uppercase
/// property name and kept in insertion order.
///
/// `UID`, `PRODID` and `DTSTAMP` replace the generated defaults and are emitted
/// verbatim. `REMINDER` adds a `VALARM`. `URL` is emitted as a URI. Any other key
/// becomes an escaped TEXT property after the built-in ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IcsOptions {
    entries: Vec<(String, IcsOption)>,
}

impl IcsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`, replacing an earlier value in place.
    pub fn set(mut self, key: &str, value: impl Into<IcsOption>) -> Result<Self, LinkError> {
        let key = key.to_ascii_uppercase();
        if key.is_empty()
            || !key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(LinkError::InvalidOption(format!(
                "invalid property name {key:?}"
            )));
        }
        if key == "BEGIN" || key == "END" {
            return Err(LinkError::InvalidOption(format!(
                "{key} cannot be set as a property"
            )));
        }

        let value = value.into();
        match (&value, key.as_str()) {
            (IcsOption::Reminder(_), REMINDER) => {}
            (IcsOption::Reminder(_), _) => {
                return Err(LinkError::InvalidOption(format!(
                    "{key} expects a text value"
                )));
            }
            (IcsOption::Text(_), REMINDER) => {
                return Err(LinkError::InvalidOption(
                    "REMINDER expects a reminder value".to_owned(),
                ));
            }
            (IcsOption::Text(text), UID | PRODID | DTSTAMP | URL) => {
                // verbatim values would otherwise break the line structure
                if text.contains(['\r', '\n']) {
                    return Err(LinkError::InvalidOption(format!(
                        "{key} must not contain line breaks"
                    )));
                }
            }
            (IcsOption::Text(_), _) => {}
        }

        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
        Ok(self)
    }

    pub fn uid(self, uid: impl Into<String>) -> Result<Self, LinkError> {
        self.set(UID, uid.into())
    }

    pub fn prodid(self, prodid: impl Into<String>) -> Result<Self, LinkError> {
        self.set(PRODID, prodid.into())
    }

    pub fn dtstamp(self, dtstamp: impl Into<String>) -> Result<Self, LinkError> {
        self.set(DTSTAMP, dtstamp.into())
    }

    pub fn dtstamp_at<Tz: TimeZone>(self, dtstamp: DateTime<Tz>) -> Result<Self, LinkError> {
        self.set(DTSTAMP, format_utc(&dtstamp.with_timezone(&Utc)))
    }

    pub fn reminder(self, reminder: Reminder) -> Result<Self, LinkError> {
        self.set(REMINDER, reminder)
    }

    pub fn url(self, url: impl Into<String>) -> Result<Self, LinkError> {
        self.set(URL, url.into())
    }

    pub fn get(&self, key: &str) -> Option<&IcsOption> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    }

    pub(crate) fn text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            IcsOption::Text(text) => Some(text),
            IcsOption::Reminder(_) => None,
        }
    }

    pub(crate) fn get_reminder(&self) -> Option<&Reminder> {
        match self.get(REMINDER)? {
            IcsOption::Reminder(reminder) => Some(reminder),
            IcsOption::Text(_) => None,
        }
    }

    /// Caller-supplied properties without dedicated handling, in insertion order.
    pub(crate) fn extra_properties(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().filter_map(|(key, value)| match value {
            IcsOption::Text(text) if ![UID, PRODID, DTSTAMP].contains(&key.as_str()) => {
                Some((key.as_str(), text.as_str()))
            }
            _ => None,
        })
    }
}

/// What the generated document is wrapped in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IcsFormat {
    /// Plain ICS text, as written to a `.ics` file.
    #[default]
    File,
    /// A `data:text/calendar` URI with the document base64 encoded, usable as a link target.
    DataUri,
}

/// The string every physical line ends with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum LineEnding {
    #[default]
    #[display("\r\n")]
    Crlf,
    /// Not RFC 5545 compliant. Eases reading and diffing generated output.
    #[display("\n")]
    Lf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IcsPresentation {
    pub format: IcsFormat,
    pub line_ending: LineEnding,
}
