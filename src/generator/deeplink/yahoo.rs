use super::build_url;
use crate::{
    Link,
    generator::Generator,
    types::{format_date, format_utc},
};

const BASE_URL: &str = "https://calendar.yahoo.com/?v=60&view=d&type=20";

/// Yahoo Calendar "add event" link.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yahoo;

impl Generator for Yahoo {
    fn generate(&self, link: &Link) -> String {
        let mut params = if link.is_all_day() {
            vec![
                ("ST", format_date(&link.start())),
                ("DUR", "allday".to_owned()),
                ("ET", format_date(&link.end())),
            ]
        } else {
            vec![
                ("ST", format_utc(&link.start())),
                ("ET", format_utc(&link.end())),
            ]
        };
        params.push(("TITLE", link.title().to_owned()));
        if !link.description().is_empty() {
            params.push(("DESC", link.description().to_owned()));
        }
        if !link.address().is_empty() {
            params.push(("in_loc", link.address().to_owned()));
        }

        tracing::debug!(provider = "yahoo", "rendered calendar link");
        build_url(BASE_URL, &params)
    }
}
