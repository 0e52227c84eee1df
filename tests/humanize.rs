use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use num_bigint::BigUint;

use ascii_eta::projection::humanize::{
    describe_eta, distance_in_words, with_delimiters, EtaDescription, MILLIS_PER_TROPICAL_YEAR,
};
use ascii_eta::types::Eta;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 5, 12, 0, 0).unwrap()
}

fn ymd(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

#[test]
fn invariant_short_distances() {
    let cases = [
        (TimeDelta::seconds(10), "less than 1 minute"),
        (TimeDelta::seconds(30), "about 1 minute"),
        (TimeDelta::minutes(10), "about 10 minutes"),
        (TimeDelta::minutes(50), "about 1 hour"),
        (TimeDelta::hours(3), "about 3 hours"),
        (TimeDelta::hours(30), "about 1 day"),
        (TimeDelta::days(2), "about 2 days"),
        (TimeDelta::days(31), "about 1 month"),
        (TimeDelta::days(45), "about 2 months"),
    ];

    for (distance, expected) in cases {
        assert_eq!(distance_in_words(now(), now() + distance), expected, "{distance:?}");
        assert_eq!(distance_in_words(now() + distance, now()), expected, "reversed {distance:?}");
    }
}

#[test]
fn invariant_year_distances_discount_leap_days() {
    assert_eq!(distance_in_words(ymd(2020, 6, 1), ymd(2030, 6, 1)), "about 10 years");
    assert_eq!(distance_in_words(ymd(2020, 6, 1), ymd(2030, 12, 1)), "over 10 years");
    assert_eq!(distance_in_words(ymd(2020, 6, 1), ymd(2031, 4, 1)), "almost 11 years");
    assert_eq!(distance_in_words(ymd(2023, 1, 1), ymd(2024, 1, 1)), "about 1 year");
}

#[test]
fn invariant_delimiters_group_thousands() {
    assert_eq!(with_delimiters(&BigUint::from(0u32)), "0");
    assert_eq!(with_delimiters(&BigUint::from(999u32)), "999");
    assert_eq!(with_delimiters(&BigUint::from(1000u32)), "1,000");
    assert_eq!(with_delimiters(&BigUint::from(1_234_567u32)), "1,234,567");
    assert_eq!(
        with_delimiters(&BigUint::from(10u32).pow(21)),
        "1,000,000,000,000,000,000,000"
    );
}

#[test]
fn golden_near_eta_description() {
    let eta = Eta {
        from: now(),
        emissions_ahead: BigUint::from(3u32),
        interval: TimeDelta::minutes(10),
    };

    let description = describe_eta(&eta, now());
    assert_eq!(
        description,
        EtaDescription::Within {
            distance: "about 30 minutes".to_string(),
            at: now() + TimeDelta::minutes(30),
        }
    );
    assert_eq!(
        description.to_string(),
        "in about 30 minutes (at approx. 12:30 on Mar. 05, 2024)"
    );
}

#[test]
fn golden_far_eta_description() {
    let eta = Eta {
        from: now(),
        emissions_ahead: BigUint::from(20_000u64 * MILLIS_PER_TROPICAL_YEAR),
        interval: TimeDelta::milliseconds(1),
    };

    let description = describe_eta(&eta, now());
    assert_eq!(description, EtaDescription::YearsAway(BigUint::from(20_000u32)));
    assert_eq!(description.to_string(), "in about 20,000 years");
}

#[test]
fn invariant_distance_is_measured_from_now() {
    // Anchored an hour ago, due ten minutes after the anchor: already overdue.
    let eta = Eta {
        from: now() - TimeDelta::hours(1),
        emissions_ahead: BigUint::from(1u32),
        interval: TimeDelta::minutes(10),
    };

    assert!(matches!(
        describe_eta(&eta, now()),
        EtaDescription::Within { ref distance, .. } if distance == "about 1 hour"
    ));
}
