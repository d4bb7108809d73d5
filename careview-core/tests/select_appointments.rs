use careview_core::{select_appointments, Appointment, AppointmentFilter, AppointmentStatus};
use chrono::{DateTime, Duration, TimeZone, Utc};

fn appointment(id: &str, date_time: DateTime<Utc>) -> Appointment {
    Appointment {
        id: id.to_string(),
        patient_id: "patient-001".to_string(),
        doctor_name: "Dr. Sarah Chen".to_string(),
        specialty: "Cardiology".to_string(),
        date_time,
        duration: 1800.0,
        status: AppointmentStatus::Confirmed,
        reason: "Follow-up".to_string(),
        notes: None,
        location: "Main Clinic".to_string(),
        room_number: None,
    }
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

#[test]
fn upcoming_and_past_partition_the_input() {
    let now = fixed_now();
    let appointments = vec![
        appointment("a", now + Duration::hours(1)),
        appointment("b", now - Duration::hours(2)),
        appointment("c", now + Duration::hours(3)),
    ];

    let upcoming = select_appointments(&appointments, AppointmentFilter::Upcoming, now);
    let past = select_appointments(&appointments, AppointmentFilter::Past, now);

    let upcoming_ids: Vec<&str> = upcoming.iter().map(|a| a.id.as_str()).collect();
    let past_ids: Vec<&str> = past.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(upcoming_ids, ["a", "c"]);
    assert_eq!(past_ids, ["b"]);
    assert_eq!(upcoming.len() + past.len(), appointments.len());
}

#[test]
fn appointment_exactly_at_now_counts_as_past() {
    let now = fixed_now();
    let appointments = vec![appointment("boundary", now)];

    let upcoming = select_appointments(&appointments, AppointmentFilter::Upcoming, now);
    let past = select_appointments(&appointments, AppointmentFilter::Past, now);

    assert!(upcoming.is_empty());
    assert_eq!(past.len(), 1);
}

#[test]
fn upcoming_is_sorted_soonest_first() {
    let now = fixed_now();
    let appointments = vec![
        appointment("late", now + Duration::days(7)),
        appointment("soon", now + Duration::minutes(30)),
        appointment("mid", now + Duration::days(2)),
    ];

    let upcoming = select_appointments(&appointments, AppointmentFilter::Upcoming, now);
    let ids: Vec<&str> = upcoming.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["soon", "mid", "late"]);
}

#[test]
fn past_is_sorted_most_recent_first() {
    let now = fixed_now();
    let appointments = vec![
        appointment("oldest", now - Duration::days(30)),
        appointment("recent", now - Duration::hours(1)),
        appointment("older", now - Duration::days(3)),
    ];

    let past = select_appointments(&appointments, AppointmentFilter::Past, now);
    let ids: Vec<&str> = past.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["recent", "older", "oldest"]);
}

#[test]
fn equal_timestamps_keep_input_order() {
    let now = fixed_now();
    let same_time = now + Duration::hours(4);
    let appointments = vec![
        appointment("first", same_time),
        appointment("second", same_time),
        appointment("third", same_time),
    ];

    let upcoming = select_appointments(&appointments, AppointmentFilter::Upcoming, now);
    let ids: Vec<&str> = upcoming.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["first", "second", "third"]);
}

#[test]
fn selection_is_idempotent_and_leaves_input_untouched() {
    let now = fixed_now();
    let appointments = vec![
        appointment("a", now + Duration::hours(1)),
        appointment("b", now - Duration::hours(2)),
    ];
    let before = appointments.clone();

    let first = select_appointments(&appointments, AppointmentFilter::Upcoming, now);
    let second = select_appointments(&appointments, AppointmentFilter::Upcoming, now);

    assert_eq!(first, second);
    assert_eq!(appointments, before);
}

#[test]
fn empty_input_gives_empty_output() {
    let now = fixed_now();
    assert!(select_appointments(&[], AppointmentFilter::Upcoming, now).is_empty());
    assert!(select_appointments(&[], AppointmentFilter::Past, now).is_empty());
}
