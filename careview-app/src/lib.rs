//! Presentation state for the health tracker screens.
//!
//! Each screen owns a model that loads its records from a
//! [`DataSource`], keeps the derived display state, and notifies an
//! optional subscriber about loading transitions, updates, and
//! failures. Loads also resolve as plain `Result`s, so callers that do
//! not need the eventful surface can just await them.

pub mod styles;

use std::sync::Arc;

use careview_core::{
    group_vitals_by_date, select_appointments, Appointment, AppointmentFilter, FetchError,
    Patient, VitalSection,
};
use careview_data::DataSource;
use chrono::Utc;

/// Notifications a screen model sends to its subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelEvent {
    LoadingChanged(bool),
    Updated,
    Failed(String),
}

type EventSink = Box<dyn FnMut(ModelEvent) + Send>;

fn emit(sink: &mut Option<EventSink>, event: ModelEvent) {
    if let Some(sink) = sink {
        sink(event);
    }
}

/// A screen the navigator can show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Vitals,
    Appointments,
    AppointmentDetails { id: String },
    PatientProfile,
}

/// Stack of visible screens with explicit push/pop. The root screen is
/// never popped.
pub struct NavigationStack {
    stack: Vec<Route>,
}

impl NavigationStack {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    pub fn pop(&mut self) -> Option<Route> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }

    pub fn current(&self) -> &Route {
        // Invariant: the stack always holds at least the root.
        &self.stack[self.stack.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

/// State behind the appointments list screen.
pub struct AppointmentsModel {
    source: Arc<dyn DataSource>,
    all: Vec<Appointment>,
    filter: AppointmentFilter,
    filtered: Vec<Appointment>,
    sink: Option<EventSink>,
}

impl AppointmentsModel {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            all: Vec::new(),
            filter: AppointmentFilter::Upcoming,
            filtered: Vec::new(),
            sink: None,
        }
    }

    pub fn subscribe(&mut self, sink: EventSink) {
        self.sink = Some(sink);
    }

    pub fn unsubscribe(&mut self) {
        self.sink = None;
    }

    pub fn filter(&self) -> AppointmentFilter {
        self.filter
    }

    /// The appointments currently shown, already filtered and ordered.
    pub fn appointments(&self) -> &[Appointment] {
        &self.filtered
    }

    pub async fn load(&mut self, patient_id: &str) -> Result<(), FetchError> {
        emit(&mut self.sink, ModelEvent::LoadingChanged(true));
        let result = self.source.fetch_appointments(patient_id).await;
        emit(&mut self.sink, ModelEvent::LoadingChanged(false));
        match result {
            Ok(appointments) => {
                self.all = appointments;
                self.apply_filter();
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "appointments load failed");
                emit(&mut self.sink, ModelEvent::Failed(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn set_filter(&mut self, filter: AppointmentFilter) {
        self.filter = filter;
        self.apply_filter();
    }

    fn apply_filter(&mut self) {
        self.filtered = select_appointments(&self.all, self.filter, Utc::now());
        emit(&mut self.sink, ModelEvent::Updated);
    }

    /// Navigation intent for tapping a row of the filtered list.
    pub fn select(&self, index: usize) -> Option<Route> {
        self.filtered.get(index).map(|appointment| Route::AppointmentDetails {
            id: appointment.id.clone(),
        })
    }
}

/// State behind the vitals screen: readings grouped into dated
/// sections.
pub struct VitalsModel {
    source: Arc<dyn DataSource>,
    sections: Vec<VitalSection>,
    sink: Option<EventSink>,
}

impl VitalsModel {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            sections: Vec::new(),
            sink: None,
        }
    }

    pub fn subscribe(&mut self, sink: EventSink) {
        self.sink = Some(sink);
    }

    pub fn sections(&self) -> &[VitalSection] {
        &self.sections
    }

    pub async fn load(&mut self, patient_id: &str) -> Result<(), FetchError> {
        emit(&mut self.sink, ModelEvent::LoadingChanged(true));
        let result = self.source.fetch_vitals(patient_id).await;
        emit(&mut self.sink, ModelEvent::LoadingChanged(false));
        match result {
            Ok(vitals) => {
                self.sections = group_vitals_by_date(&vitals, Utc::now());
                emit(&mut self.sink, ModelEvent::Updated);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "vitals load failed");
                emit(&mut self.sink, ModelEvent::Failed(err.to_string()));
                Err(err)
            }
        }
    }
}

/// State behind the profile screen.
pub struct PatientProfileModel {
    source: Arc<dyn DataSource>,
    patient: Option<Patient>,
    sink: Option<EventSink>,
}

impl PatientProfileModel {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            patient: None,
            sink: None,
        }
    }

    pub fn subscribe(&mut self, sink: EventSink) {
        self.sink = Some(sink);
    }

    pub fn patient(&self) -> Option<&Patient> {
        self.patient.as_ref()
    }

    pub async fn load(&mut self, patient_id: &str) -> Result<(), FetchError> {
        emit(&mut self.sink, ModelEvent::LoadingChanged(true));
        let result = self.source.fetch_patient(patient_id).await;
        emit(&mut self.sink, ModelEvent::LoadingChanged(false));
        match result {
            Ok(patient) => {
                self.patient = Some(patient);
                emit(&mut self.sink, ModelEvent::Updated);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "patient load failed");
                emit(&mut self.sink, ModelEvent::Failed(err.to_string()));
                Err(err)
            }
        }
    }
}

/// State behind the appointment detail screen.
pub struct AppointmentDetailsModel {
    source: Arc<dyn DataSource>,
    appointment_id: String,
    appointment: Option<Appointment>,
    sink: Option<EventSink>,
}

impl AppointmentDetailsModel {
    pub fn new(source: Arc<dyn DataSource>, appointment_id: impl Into<String>) -> Self {
        Self {
            source,
            appointment_id: appointment_id.into(),
            appointment: None,
            sink: None,
        }
    }

    pub fn subscribe(&mut self, sink: EventSink) {
        self.sink = Some(sink);
    }

    pub fn appointment(&self) -> Option<&Appointment> {
        self.appointment.as_ref()
    }

    pub async fn load(&mut self) -> Result<(), FetchError> {
        emit(&mut self.sink, ModelEvent::LoadingChanged(true));
        let result = self.source.fetch_appointment(&self.appointment_id).await;
        emit(&mut self.sink, ModelEvent::LoadingChanged(false));
        match result {
            Ok(appointment) => {
                self.appointment = Some(appointment);
                emit(&mut self.sink, ModelEvent::Updated);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(error = %err, "appointment detail load failed");
                emit(&mut self.sink, ModelEvent::Failed(err.to_string()));
                Err(err)
            }
        }
    }
}
