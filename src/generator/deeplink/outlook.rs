use chrono::{DateTime, Utc};

use super::build_url;
use crate::{Link, generator::Generator};

const OUTLOOK_BASE_URL: &str =
    "https://outlook.live.com/calendar/deeplink/compose?path=/calendar/action/compose&rru=addevent";
const OFFICE_BASE_URL: &str =
    "https://outlook.office.com/calendar/deeplink/compose?path=/calendar/action/compose&rru=addevent";

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// outlook.live.com compose link.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebOutlook;

/// outlook.office.com compose link.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebOffice;

impl Generator for WebOutlook {
    fn generate(&self, link: &Link) -> String {
        tracing::debug!(provider = "web_outlook", "rendered calendar link");
        compose_url(OUTLOOK_BASE_URL, link)
    }
}

impl Generator for WebOffice {
    fn generate(&self, link: &Link) -> String {
        tracing::debug!(provider = "web_office", "rendered calendar link");
        compose_url(OFFICE_BASE_URL, link)
    }
}

fn compose_url(base: &str, link: &Link) -> String {
    let format = |dt: DateTime<Utc>| {
        let pattern = if link.is_all_day() {
            DATE_FORMAT
        } else {
            DATETIME_FORMAT
        };
        dt.format(pattern).to_string()
    };

    let mut params = vec![("startdt", format(link.start()))];
    // Outlook treats a missing end of an all-day event as a single day
    let single_day = (link.end() - link.start()).num_days() < 2;
    if !(link.is_all_day() && single_day) {
        params.push(("enddt", format(link.end())));
    }
    if link.is_all_day() {
        params.push(("allday", "true".to_owned()));
    }
    params.push(("subject", link.title().to_owned()));
    if !link.description().is_empty() {
        params.push(("body", link.description().to_owned()));
    }
    if !link.address().is_empty() {
        params.push(("location", link.address().to_owned()));
    }
    build_url(base, &params)
}
