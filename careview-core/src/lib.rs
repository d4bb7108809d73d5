//! Domain records and display-state transforms for a single-patient
//! health tracker.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Patient demographics as decoded from the static profile document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
    pub gender: String,
    pub contact_number: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub blood_group: String,
    /// Height in centimetres.
    pub height: f64,
    /// Weight in kilograms.
    pub weight: f64,
    pub allergies: Vec<String>,
    pub profile_image_url: Option<String>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whole years between date of birth and `now`.
    pub fn age(&self, now: DateTime<Utc>) -> i32 {
        let born = self.date_of_birth.date_naive();
        let today = now.date_naive();
        let mut years = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            years -= 1;
        }
        years.max(0)
    }

    pub fn height_weight_string(&self) -> String {
        format!("{} cm / {} kg", self.height as i64, self.weight as i64)
    }

    pub fn allergies_string(&self) -> String {
        if self.allergies.is_empty() {
            "None".to_string()
        } else {
            self.allergies.join(", ")
        }
    }
}

/// A single vital-sign reading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vital {
    pub id: String,
    pub patient_id: String,
    #[serde(rename = "type")]
    pub kind: VitalType,
    pub value: f64,
    /// Second component of a two-part reading (diastolic pressure).
    pub secondary_value: Option<f64>,
    pub unit: String,
    pub status: VitalStatus,
    pub recorded_at: DateTime<Utc>,
}

impl Vital {
    /// Render the value for display: two-part readings as "SYS/DIA",
    /// temperature with one decimal, everything else as an integer.
    pub fn display_value(&self) -> String {
        if let Some(secondary) = self.secondary_value {
            return format!("{}/{}", self.value as i64, secondary as i64);
        }
        match self.kind {
            VitalType::Temperature => format!("{:.1}", self.value),
            _ => format!("{}", self.value as i64),
        }
    }

    /// Abbreviated relative timestamp ("5m ago", "2h ago", "3d ago").
    pub fn time_ago(&self, now: DateTime<Utc>) -> String {
        let delta = now.signed_duration_since(self.recorded_at);
        if delta.num_days() >= 1 {
            format!("{}d ago", delta.num_days())
        } else if delta.num_hours() >= 1 {
            format!("{}h ago", delta.num_hours())
        } else if delta.num_minutes() >= 1 {
            format!("{}m ago", delta.num_minutes())
        } else {
            "just now".to_string()
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum VitalType {
    BloodPressure,
    HeartRate,
    Temperature,
    BloodOxygen,
    RespiratoryRate,
    BloodGlucose,
}

impl VitalType {
    pub fn display_name(&self) -> &'static str {
        match self {
            VitalType::BloodPressure => "Blood Pressure",
            VitalType::HeartRate => "Heart Rate",
            VitalType::Temperature => "Body Temp",
            VitalType::BloodOxygen => "Blood Oxygen",
            VitalType::RespiratoryRate => "Respiratory Rate",
            VitalType::BloodGlucose => "Blood Glucose",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum VitalStatus {
    Normal,
    Warning,
    Critical,
}

impl VitalStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            VitalStatus::Normal => "Normal",
            VitalStatus::Warning => "Warning",
            VitalStatus::Critical => "Critical",
        }
    }
}

/// A scheduled visit with a provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub doctor_name: String,
    pub specialty: String,
    pub date_time: DateTime<Utc>,
    /// Planned duration in seconds.
    pub duration: f64,
    pub status: AppointmentStatus,
    pub reason: String,
    pub notes: Option<String>,
    pub location: String,
    pub room_number: Option<String>,
}

impl Appointment {
    pub fn formatted_date(&self) -> String {
        self.date_time.format("%a, %b %d, %Y").to_string()
    }

    pub fn formatted_time(&self) -> String {
        self.date_time.format("%-I:%M %p").to_string()
    }

    pub fn formatted_date_time(&self) -> String {
        self.date_time.format("%b %d, %Y • %-I:%M %p").to_string()
    }

    /// Location with the room on a second line when one is assigned.
    pub fn full_location(&self) -> String {
        match &self.room_number {
            Some(room) => format!("{}\n{}", self.location, room),
            None => self.location.clone(),
        }
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date_time > now
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "PENDING",
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::InProgress => "IN PROGRESS",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
        }
    }
}

/// Display modes for the appointment list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentFilter {
    Upcoming,
    Past,
}

/// Filter and order appointments for one display mode.
///
/// Appointments strictly after `now` count as upcoming, everything else
/// as past. Upcoming lists soonest first, past lists most recent first.
/// The sort is stable, so equal timestamps keep their input order.
pub fn select_appointments(
    appointments: &[Appointment],
    filter: AppointmentFilter,
    now: DateTime<Utc>,
) -> Vec<Appointment> {
    match filter {
        AppointmentFilter::Upcoming => {
            let mut selected: Vec<Appointment> = appointments
                .iter()
                .filter(|appointment| appointment.date_time > now)
                .cloned()
                .collect();
            selected.sort_by(|a, b| a.date_time.cmp(&b.date_time));
            selected
        }
        AppointmentFilter::Past => {
            let mut selected: Vec<Appointment> = appointments
                .iter()
                .filter(|appointment| appointment.date_time <= now)
                .cloned()
                .collect();
            selected.sort_by(|a, b| b.date_time.cmp(&a.date_time));
            selected
        }
    }
}

/// A dated group of vital readings for sectioned display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitalSection {
    pub title: String,
    pub vitals: Vec<Vital>,
}

const TODAY: &str = "TODAY";
const YESTERDAY: &str = "YESTERDAY";

/// Partition readings into labeled calendar-day sections.
///
/// Readings on the same UTC day as `now` go under "TODAY", the
/// preceding day under "YESTERDAY", and older days under their date
/// formatted "MONTH DAY, YEAR". Sections never come out empty, and
/// each section lists its readings most recent first.
pub fn group_vitals_by_date(vitals: &[Vital], now: DateTime<Utc>) -> Vec<VitalSection> {
    let today = now.date_naive();
    let yesterday = today.pred_opt();

    let mut grouped: HashMap<String, Vec<Vital>> = HashMap::new();
    for vital in vitals {
        let day = vital.recorded_at.date_naive();
        let title = if day == today {
            TODAY.to_string()
        } else if Some(day) == yesterday {
            YESTERDAY.to_string()
        } else {
            day.format("%B %-d, %Y").to_string().to_uppercase()
        };
        grouped.entry(title).or_default().push(vital.clone());
    }

    let mut sections: Vec<VitalSection> = grouped
        .into_iter()
        .map(|(title, mut vitals)| {
            vitals.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
            VitalSection { title, vitals }
        })
        .collect();

    // TODAY first, then YESTERDAY, then the remaining titles compared as
    // plain strings in descending order. Month-name titles do not sort
    // chronologically under string comparison.
    // TODO: confirm whether older sections should instead sort by calendar
    // date before changing this.
    sections.sort_by(|a, b| {
        section_rank(&a.title)
            .cmp(&section_rank(&b.title))
            .then_with(|| b.title.cmp(&a.title))
    });

    sections
}

fn section_rank(title: &str) -> u8 {
    match title {
        TODAY => 0,
        YESTERDAY => 1,
        _ => 2,
    }
}

/// Terminal failure raised while resolving records.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{0} not found")]
    NotFound(String),
}
