use itertools::Itertools;

use super::build_url;
use crate::{
    Link,
    generator::Generator,
    types::{format_date, format_utc},
};

const BASE_URL: &str = "https://calendar.google.com/calendar/render?action=TEMPLATE";

/// Google Calendar event template link.
#[derive(Debug, Clone, Copy, Default)]
pub struct Google;

impl Generator for Google {
    fn generate(&self, link: &Link) -> String {
        let dates = [link.start(), link.end()]
            .iter()
            .map(|dt| {
                if link.is_all_day() {
                    format_date(dt)
                } else {
                    format_utc(dt)
                }
            })
            .join("/");

        let mut params = vec![("dates", dates), ("text", link.title().to_owned())];
        if !link.description().is_empty() {
            params.push(("details", link.description().to_owned()));
        }
        if !link.address().is_empty() {
            params.push(("location", link.address().to_owned()));
        }
        params.push(("sprop", String::new()));
        params.push(("sprop", "name:".to_owned()));

        tracing::debug!(provider = "google", "rendered calendar link");
        build_url(BASE_URL, &params)
    }
}
