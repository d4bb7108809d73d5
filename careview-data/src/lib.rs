//! Record source: resolves patient, vital, and appointment documents.
//!
//! The mock implementation stands in for a real backend. It decodes
//! three static JSON documents and resolves each fetch after a fixed
//! simulated latency, so consumers exercise the same async surface a
//! production source would expose.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use careview_core::{Appointment, AppointmentStatus, FetchError, Patient, Vital};
use serde::de::DeserializeOwned;

/// Latency applied to every mock fetch.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(500);

/// Asynchronous provider of patient records.
///
/// Every operation either resolves with a decoded record or fails with
/// [`FetchError::NotFound`]; there is no other failure mode.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_patient(&self, id: &str) -> Result<Patient, FetchError>;
    async fn fetch_vitals(&self, patient_id: &str) -> Result<Vec<Vital>, FetchError>;
    async fn fetch_appointments(&self, patient_id: &str) -> Result<Vec<Appointment>, FetchError>;
    async fn fetch_appointment(&self, id: &str) -> Result<Appointment, FetchError>;
}

/// Data source backed by three in-memory JSON documents.
pub struct MockDataSource {
    patient_json: Option<String>,
    vitals_json: Option<String>,
    appointments_json: Option<String>,
    latency: Duration,
}

impl MockDataSource {
    /// Load `patient.json`, `vitals.json`, and `appointments.json` from
    /// a directory. A missing or unreadable file leaves that document
    /// absent; the corresponding fetches then fail with `NotFound`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            patient_json: read_document(dir, "patient.json"),
            vitals_json: read_document(dir, "vitals.json"),
            appointments_json: read_document(dir, "appointments.json"),
            latency: SIMULATED_LATENCY,
        }
    }

    /// Build directly from document contents.
    pub fn from_documents(
        patient_json: Option<String>,
        vitals_json: Option<String>,
        appointments_json: Option<String>,
    ) -> Self {
        Self {
            patient_json,
            vitals_json,
            appointments_json,
            latency: SIMULATED_LATENCY,
        }
    }

    /// Override the simulated latency (tests shorten it to near zero).
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn decode<T: DeserializeOwned>(
        &self,
        document: Option<&String>,
        what: &str,
    ) -> Result<T, FetchError> {
        let Some(raw) = document else {
            return Err(FetchError::NotFound(what.to_string()));
        };
        serde_json::from_str(raw).map_err(|err| {
            tracing::warn!(document = what, error = %err, "failed to decode document");
            FetchError::NotFound(what.to_string())
        })
    }
}

#[async_trait]
impl DataSource for MockDataSource {
    async fn fetch_patient(&self, _id: &str) -> Result<Patient, FetchError> {
        tokio::time::sleep(self.latency).await;
        self.decode(self.patient_json.as_ref(), "patient")
    }

    async fn fetch_vitals(&self, _patient_id: &str) -> Result<Vec<Vital>, FetchError> {
        tokio::time::sleep(self.latency).await;
        self.decode(self.vitals_json.as_ref(), "vitals")
    }

    async fn fetch_appointments(&self, _patient_id: &str) -> Result<Vec<Appointment>, FetchError> {
        tokio::time::sleep(self.latency).await;
        self.decode(self.appointments_json.as_ref(), "appointments")
    }

    async fn fetch_appointment(&self, id: &str) -> Result<Appointment, FetchError> {
        let appointments = self.fetch_appointments("").await?;
        appointments
            .into_iter()
            .find(|appointment| appointment.id == id)
            .ok_or_else(|| FetchError::NotFound("appointment".to_string()))
    }
}

fn read_document(dir: &Path, name: &str) -> Option<String> {
    match std::fs::read_to_string(dir.join(name)) {
        Ok(contents) => Some(contents),
        Err(err) => {
            tracing::warn!(document = name, error = %err, "failed to load document");
            None
        }
    }
}

/// Forwards patient fetches; updates are accepted and discarded.
pub struct PatientRepository {
    source: Arc<dyn DataSource>,
}

impl PatientRepository {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub async fn get_patient(&self, id: &str) -> Result<Patient, FetchError> {
        self.source.fetch_patient(id).await
    }

    /// No-op against the mock source.
    pub async fn update_patient(&self, _patient: &Patient) -> Result<(), FetchError> {
        Ok(())
    }
}

/// Forwards vital fetches; additions are accepted and discarded.
pub struct VitalRepository {
    source: Arc<dyn DataSource>,
}

impl VitalRepository {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub async fn get_vitals(&self, patient_id: &str) -> Result<Vec<Vital>, FetchError> {
        self.source.fetch_vitals(patient_id).await
    }

    /// No-op against the mock source.
    pub async fn add_vital(&self, _vital: &Vital, _patient_id: &str) -> Result<(), FetchError> {
        Ok(())
    }
}

/// Forwards appointment fetches; status updates are accepted and
/// discarded.
pub struct AppointmentRepository {
    source: Arc<dyn DataSource>,
}

impl AppointmentRepository {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    pub async fn get_appointments(&self, patient_id: &str) -> Result<Vec<Appointment>, FetchError> {
        self.source.fetch_appointments(patient_id).await
    }

    pub async fn get_appointment(&self, id: &str) -> Result<Appointment, FetchError> {
        self.source.fetch_appointment(id).await
    }

    /// No-op against the mock source.
    pub async fn update_appointment_status(
        &self,
        _id: &str,
        _status: AppointmentStatus,
    ) -> Result<(), FetchError> {
        Ok(())
    }
}
