use std::collections::HashSet;

use careview_core::{group_vitals_by_date, Vital, VitalStatus, VitalType};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn vital(id: &str, recorded_at: DateTime<Utc>) -> Vital {
    Vital {
        id: id.to_string(),
        patient_id: "patient-001".to_string(),
        kind: VitalType::HeartRate,
        value: 72.0,
        secondary_value: None,
        unit: "bpm".to_string(),
        status: VitalStatus::Normal,
        recorded_at,
    }
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

#[test]
fn today_yesterday_and_older_sections() {
    let now = fixed_now();
    let vitals = vec![
        vital("1", now),
        vital("2", now - Duration::hours(25)),
        vital("3", now - Duration::hours(50)),
    ];

    let sections = group_vitals_by_date(&vitals, now);

    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["TODAY", "YESTERDAY", "MARCH 13, 2024"]);
    assert_eq!(sections[0].vitals[0].id, "1");
    assert_eq!(sections[1].vitals[0].id, "2");
    assert_eq!(sections[2].vitals[0].id, "3");
}

#[test]
fn every_reading_lands_in_exactly_one_section() {
    let now = fixed_now();
    let vitals: Vec<Vital> = (0..10)
        .map(|i| vital(&format!("v{i}"), now - Duration::hours(i * 9)))
        .collect();

    let sections = group_vitals_by_date(&vitals, now);

    let total: usize = sections.iter().map(|s| s.vitals.len()).sum();
    assert_eq!(total, vitals.len());

    let ids: HashSet<&str> = sections
        .iter()
        .flat_map(|s| s.vitals.iter().map(|v| v.id.as_str()))
        .collect();
    assert_eq!(ids.len(), vitals.len());
}

#[test]
fn sections_list_readings_most_recent_first() {
    let now = fixed_now();
    let vitals = vec![
        vital("early", now - Duration::hours(8)),
        vital("latest", now - Duration::hours(1)),
        vital("mid", now - Duration::hours(4)),
    ];

    let sections = group_vitals_by_date(&vitals, now);

    assert_eq!(sections.len(), 1);
    for pair in sections[0].vitals.windows(2) {
        assert!(pair[0].recorded_at >= pair[1].recorded_at);
    }
    let ids: Vec<&str> = sections[0].vitals.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, ["latest", "mid", "early"]);
}

#[test]
fn day_boundary_decides_yesterday_not_elapsed_time() {
    // 10 hours earlier but across midnight counts as yesterday; a
    // reading from 01:00 the same day stays under today.
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();
    let vitals = vec![
        vital("same-day", Utc.with_ymd_and_hms(2024, 3, 15, 1, 0, 0).unwrap()),
        vital("prior-day", Utc.with_ymd_and_hms(2024, 3, 14, 22, 0, 0).unwrap()),
    ];

    let sections = group_vitals_by_date(&vitals, now);

    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["TODAY", "YESTERDAY"]);
    assert_eq!(sections[0].vitals[0].id, "same-day");
    assert_eq!(sections[1].vitals[0].id, "prior-day");
}

#[test]
fn older_sections_sort_by_descending_title_string() {
    // "MARCH 5, 2024" sorts above "JANUARY 2, 2025" even though it is
    // the older date; the section order is lexical, not chronological.
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let vitals = vec![
        vital("newer", Utc.with_ymd_and_hms(2025, 1, 2, 9, 0, 0).unwrap()),
        vital("older", Utc.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap()),
    ];

    let sections = group_vitals_by_date(&vitals, now);

    let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["MARCH 5, 2024", "JANUARY 2, 2025"]);
}

#[test]
fn grouping_is_pure_and_total() {
    let now = fixed_now();
    let vitals = vec![vital("a", now), vital("b", now - Duration::days(5))];
    let before = vitals.clone();

    let first = group_vitals_by_date(&vitals, now);
    let second = group_vitals_by_date(&vitals, now);

    assert_eq!(first, second);
    assert_eq!(vitals, before);
    assert!(first.iter().all(|s| !s.vitals.is_empty()));
}

#[test]
fn empty_input_gives_no_sections() {
    assert!(group_vitals_by_date(&[], fixed_now()).is_empty());
}
