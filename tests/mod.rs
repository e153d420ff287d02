use calendar_links::{
    IcsOptions, IcsPresentation, Link,
    generator::{IcsFormat, LineEnding},
};
use chrono::{TimeZone, Utc};

pub fn create_short_event_link() -> Link {
    Link::create(
        "Birthday",
        Utc.with_ymd_and_hms(2018, 2, 1, 9, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2018, 2, 1, 18, 0, 0).unwrap(),
        false,
    )
    .unwrap()
    .with_description("With balloons, clowns and stuff\nBring a dog, bring a frog")
    .with_address("Party Lane 1A, 1337 Funtown")
}

pub fn fixed_options() -> IcsOptions {
    IcsOptions::new()
        .uid("random-uid")
        .unwrap()
        .dtstamp("20180201T090000Z")
        .unwrap()
}

// LF line endings keep the inline snapshots readable
pub fn diffable() -> IcsPresentation {
    IcsPresentation {
        format: IcsFormat::File,
        line_ending: LineEnding::Lf,
    }
}

pub mod ics {
    use crate::{create_short_event_link, diffable, fixed_options};
    use calendar_links::{IcsOptions, Link, Reminder};
    use chrono::{NaiveDate, TimeZone, Utc};
    use insta::assert_snapshot;

    #[test]
    fn custom_uid() {
        let ics = create_short_event_link().ics_with(fixed_options(), diffable());
        assert_snapshot!(ics.trim_end(), @r"
        BEGIN:VCALENDAR
        VERSION:2.0
        PRODID:-//calendar-links//EN
        BEGIN:VEVENT
        UID:random-uid
        DTSTAMP:20180201T090000Z
        DTSTART:20180201T090000Z
        DTEND:20180201T180000Z
        SUMMARY:Birthday
        DESCRIPTION:With balloons\, clowns and stuff\nBring a dog\, bring a frog
        LOCATION:Party Lane 1A\, 1337 Funtown
        END:VEVENT
        END:VCALENDAR
        ");
    }

    #[test]
    fn product_id() {
        let options = fixed_options().prodid("Spatie calendar-links").unwrap();
        let ics = create_short_event_link().ics_with(options, diffable());
        assert!(ics.starts_with("BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:Spatie calendar-links\n"));
    }

    #[test]
    fn default_reminder() {
        let options = fixed_options().reminder(Reminder::default()).unwrap();
        let ics = create_short_event_link().ics_with(options, diffable());
        assert_snapshot!(ics.trim_end(), @r"
        BEGIN:VCALENDAR
        VERSION:2.0
        PRODID:-//calendar-links//EN
        BEGIN:VEVENT
        UID:random-uid
        DTSTAMP:20180201T090000Z
        DTSTART:20180201T090000Z
        DTEND:20180201T180000Z
        SUMMARY:Birthday
        DESCRIPTION:With balloons\, clowns and stuff\nBring a dog\, bring a frog
        LOCATION:Party Lane 1A\, 1337 Funtown
        BEGIN:VALARM
        ACTION:DISPLAY
        DESCRIPTION:Reminder
        TRIGGER:-PT15M
        END:VALARM
        END:VEVENT
        END:VCALENDAR
        ");
    }

    #[test]
    fn custom_reminder() {
        let reminder = Reminder::at(Utc.with_ymd_and_hms(2018, 2, 1, 8, 15, 0).unwrap())
            .with_description("Party with balloons and cake!");
        let options = fixed_options()
            .reminder(reminder)
            .unwrap()
            .set("X-MICROSOFT-CDO-BUSYSTATUS", "OOF")
            .unwrap();
        let ics = create_short_event_link().ics_with(options, diffable());
        assert_snapshot!(ics.trim_end(), @r"
        BEGIN:VCALENDAR
        VERSION:2.0
        PRODID:-//calendar-links//EN
        BEGIN:VEVENT
        UID:random-uid
        DTSTAMP:20180201T090000Z
        DTSTART:20180201T090000Z
        DTEND:20180201T180000Z
        SUMMARY:Birthday
        DESCRIPTION:With balloons\, clowns and stuff\nBring a dog\, bring a frog
        LOCATION:Party Lane 1A\, 1337 Funtown
        BEGIN:VALARM
        ACTION:DISPLAY
        DESCRIPTION:Party with balloons and cake!
        TRIGGER;VALUE=DATE-TIME:20180201T081500Z
        END:VALARM
        X-MICROSOFT-CDO-BUSYSTATUS:OOF
        END:VEVENT
        END:VCALENDAR
        ");
    }

    #[test]
    fn multi_day_all_day() {
        let link =
            Link::create_all_day("Launch", NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(), 3)
                .unwrap();
        let ics = link.ics_with(fixed_options(), diffable());
        assert_snapshot!(ics.trim_end(), @r"
        BEGIN:VCALENDAR
        VERSION:2.0
        PRODID:-//calendar-links//EN
        BEGIN:VEVENT
        UID:random-uid
        DTSTAMP:20180201T090000Z
        DTSTART;VALUE=DATE:20200301
        DTEND;VALUE=DATE:20200304
        SUMMARY:Launch
        END:VEVENT
        END:VCALENDAR
        ");
    }

    #[test]
    fn escaped_title() {
        let link = Link::create(
            "Launch; Party, \"Go!\"\nSee you",
            Utc.with_ymd_and_hms(2018, 1, 1, 9, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2018, 1, 1, 10, 0, 0).unwrap(),
            false,
        )
        .unwrap();
        let ics = link.ics(IcsOptions::new().uid("random-uid").unwrap());
        assert!(ics.contains("\r\nSUMMARY:Launch\\; Party\\, \"Go!\"\\nSee you\r\n"));
        assert!(ics.contains("\r\nDTSTART:20180101T090000Z\r\n"));
        assert!(ics.contains("\r\nDTEND:20180101T100000Z\r\n"));
        assert!(ics.contains("\r\nUID:random-uid\r\n"));
    }

    #[test]
    fn folded() {
        let link = create_short_event_link()
            .with_description(
                "Join us for the launch of our new calendar integration. \
                 There will be cake, balloons and a short demo; bring your laptop!",
            )
            .with_address("Königin-Astrid-Park, Antwerpen — große Wiese neben dem Café, Eingang Süd");
        let ics = link.ics_with(fixed_options(), diffable());
        assert_snapshot!(ics.trim_end(), @r"
        BEGIN:VCALENDAR
        VERSION:2.0
        PRODID:-//calendar-links//EN
        BEGIN:VEVENT
        UID:random-uid
        DTSTAMP:20180201T090000Z
        DTSTART:20180201T090000Z
        DTEND:20180201T180000Z
        SUMMARY:Birthday
        DESCRIPTION:Join us for the launch of our new calendar integration. There w
         ill be cake\, balloons and a short demo\; bring your laptop!
        LOCATION:Königin-Astrid-Park\, Antwerpen — große Wiese neben dem Café\
         , Eingang Süd
        END:VEVENT
        END:VCALENDAR
        ");
    }
}

pub mod properties {
    use crate::fixed_options;
    use calendar_links::{
        Ics, Link, LinkError, Reminder,
        generator::{Generator, ics::MAX_LINE_OCTETS},
    };
    use chrono::{NaiveDate, TimeDelta, TimeZone, Timelike, Utc};
    use itertools::Itertools;
    use rstest::rstest;

    fn unfold(ics: &str) -> Vec<String> {
        ics.replace("\r\n ", "")
            .split_terminator("\r\n")
            .map(str::to_owned)
            .collect()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(59)]
    #[case(3600)]
    #[case(86_400 * 400)]
    fn valid_ranges_keep_instants(#[case] seconds: i64) {
        let start = Utc.with_ymd_and_hms(2021, 6, 30, 23, 59, 59).unwrap();
        let end = start + TimeDelta::seconds(seconds);
        let link = Link::create("Event", start, end, false).unwrap();
        assert_eq!((link.start(), link.end()), (start, end));

        if seconds > 0 {
            assert_eq!(
                Link::create("Event", end, start, false),
                Err(LinkError::InvalidRange { start: end, end: start })
            );
        }
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(29)]
    #[case(365)]
    fn all_day_bounds(#[case] days: u32) {
        let date = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let link = Link::create_all_day("Event", date, days).unwrap();
        assert_eq!(link.end() - link.start(), TimeDelta::days(days.into()));
        assert_eq!(link.start().num_seconds_from_midnight(), 0);
        assert_eq!(link.end().num_seconds_from_midnight(), 0);
    }

    #[rstest]
    #[case("x".repeat(500))]
    #[case("ä".repeat(300))]
    #[case("a,b;c\\d\n".repeat(40))]
    #[case("🎉 party ".repeat(50))]
    fn every_physical_line_fits(#[case] text: String) {
        let link = Link::create_all_day(
            text.clone(),
            NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
            1,
        )
        .unwrap()
        .with_description(text.clone())
        .with_address(text);
        let options = fixed_options()
            .reminder(Reminder::default().with_description("⏰".repeat(100)))
            .unwrap();
        let ics = Ics::new(options).generate(&link);

        for line in ics.split_terminator("\r\n") {
            assert!(line.len() <= MAX_LINE_OCTETS, "{line:?} is too long");
        }
        let logical = unfold(&ics);
        assert_eq!(logical.first().map(String::as_str), Some("BEGIN:VCALENDAR"));
        assert_eq!(logical.last().map(String::as_str), Some("END:VCALENDAR"));
        assert!(logical.iter().all(|line| !line.starts_with(' ')));
    }

    #[test]
    fn unfolds_to_unfolded_rendering() {
        let link = crate::create_short_event_link().with_description("lorem ipsum ".repeat(30));
        let ics = Ics::new(fixed_options()).generate(&link);
        let expected = Ics::new(fixed_options())
            .content_lines(&link)
            .iter()
            .map(ToString::to_string)
            .collect_vec();
        assert_eq!(unfold(&ics), expected);
    }

    #[test]
    fn deterministic_with_overrides() {
        let link = crate::create_short_event_link();
        let options = fixed_options().reminder(Reminder::default()).unwrap();
        assert_eq!(link.ics(options.clone()), link.ics(options));
    }
}

pub mod timezones {
    use calendar_links::Link;
    use chrono::{NaiveDate, TimeZone};
    use chrono_tz::{America::Los_Angeles, Europe::Berlin, Pacific::Auckland};
    use rstest::rstest;

    #[rstest]
    #[case(Auckland)]
    #[case(Berlin)]
    #[case(Los_Angeles)]
    fn all_day_dates_are_floating(#[case] tz: chrono_tz::Tz) {
        let start = tz.with_ymd_and_hms(2020, 3, 1, 0, 30, 0).unwrap();
        let end = tz.with_ymd_and_hms(2020, 3, 1, 23, 30, 0).unwrap();
        let link = Link::create("Launch", start, end, true).unwrap();

        assert_eq!(
            link.start().date_naive(),
            NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()
        );
        let ics = link.ics(crate::fixed_options());
        assert!(ics.contains("\r\nDTSTART;VALUE=DATE:20200301\r\n"));
        assert!(ics.contains("\r\nDTEND;VALUE=DATE:20200302\r\n"));
    }

    #[test]
    fn timed_events_render_in_utc() {
        let start = Berlin.with_ymd_and_hms(2018, 7, 1, 11, 0, 0).unwrap();
        let end = Berlin.with_ymd_and_hms(2018, 7, 1, 12, 0, 0).unwrap();
        let ics = Link::create("Meeting", start, end, false)
            .unwrap()
            .ics(crate::fixed_options());
        assert!(ics.contains("\r\nDTSTART:20180701T090000Z\r\n"));
        assert!(ics.contains("\r\nDTEND:20180701T100000Z\r\n"));
    }
}

pub mod generators {
    use calendar_links::{Generator, Link};

    struct TitleOnly;

    impl Generator for TitleOnly {
        fn generate(&self, link: &Link) -> String {
            link.title().to_uppercase()
        }
    }

    #[test]
    fn format_with_custom_generator() {
        let link = crate::create_short_event_link();
        assert_eq!(link.format_with(&TitleOnly), "BIRTHDAY");
    }

    #[test]
    fn every_provider_is_an_absolute_url() {
        let link = crate::create_short_event_link();
        for url in [link.google(), link.yahoo(), link.web_outlook(), link.web_office()] {
            assert!(url.starts_with("https://"), "{url}");
            assert!(!url.contains(' '), "{url}");
            assert!(!url.contains('\n'), "{url}");
        }
    }
}
