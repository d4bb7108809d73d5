//! Design tokens for the dark clinical look, passed explicitly to
//! renderers instead of living in ambient global state.

use careview_core::{AppointmentStatus, VitalStatus, VitalType};
use serde::{Deserialize, Serialize};

/// Core surface and text colors, as CSS-style hex strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Palette {
    pub background: String,
    pub card_background: String,
    pub primary_blue: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub accent: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: "#172133".to_string(),
            card_background: "#1f2b40".to_string(),
            primary_blue: "#3399db".to_string(),
            text_primary: "#ffffff".to_string(),
            text_secondary: "#99a6b3".to_string(),
            accent: "#3399db".to_string(),
        }
    }
}

/// Spacing scale in points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Spacing {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    pub extra_large: f32,
}

impl Default for Spacing {
    fn default() -> Self {
        Self {
            small: 8.0,
            medium: 16.0,
            large: 24.0,
            extra_large: 32.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CornerRadius {
    pub small: f32,
    pub medium: f32,
    pub large: f32,
    /// Large enough to render any card fully rounded.
    pub circle: f32,
}

impl Default for CornerRadius {
    fn default() -> Self {
        Self {
            small: 8.0,
            medium: 12.0,
            large: 16.0,
            circle: 999.0,
        }
    }
}

/// Font sizes in points.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FontScale {
    pub caption: f32,
    pub body: f32,
    pub subtitle: f32,
    pub title: f32,
    pub large_title: f32,
}

impl Default for FontScale {
    fn default() -> Self {
        Self {
            caption: 12.0,
            body: 15.0,
            subtitle: 17.0,
            title: 22.0,
            large_title: 28.0,
        }
    }
}

/// One immutable bundle of every design token a renderer needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Theme {
    pub palette: Palette,
    pub spacing: Spacing,
    pub corner_radius: CornerRadius,
    pub fonts: FontScale,
}

impl Theme {
    /// Badge color for an appointment status.
    pub fn appointment_status_color(&self, status: AppointmentStatus) -> &str {
        match status {
            AppointmentStatus::Scheduled => "#ff9900",
            AppointmentStatus::Confirmed => "#4dd963",
            AppointmentStatus::InProgress => &self.palette.primary_blue,
            AppointmentStatus::Completed => &self.palette.text_secondary,
            AppointmentStatus::Cancelled => "#ff3b30",
        }
    }

    /// Badge color for a vital reading status.
    pub fn vital_status_color(&self, status: VitalStatus) -> &str {
        match status {
            VitalStatus::Normal => "#4dd963",
            VitalStatus::Warning => "#ffcc00",
            VitalStatus::Critical => "#ff3b30",
        }
    }

    /// Icon tint per vital kind.
    pub fn vital_type_color(&self, kind: VitalType) -> &str {
        match kind {
            VitalType::HeartRate => "#f2426b",
            VitalType::BloodPressure => "#6685fa",
            VitalType::Temperature => "#f28c42",
            VitalType::BloodOxygen => "#42b3f2",
            VitalType::RespiratoryRate => "#99ccf2",
            VitalType::BloodGlucose => "#42d9b3",
        }
    }
}
