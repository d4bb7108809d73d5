use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use careview_core::{group_vitals_by_date, select_appointments, AppointmentFilter};
use careview_data::{DataSource, MockDataSource};
use chrono::Utc;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "careview-cli",
    about = "Print one patient's profile, grouped vitals, and appointments from a data directory."
)]
struct Args {
    /// Directory holding patient.json, vitals.json, and appointments.json.
    #[arg(short, long)]
    data: PathBuf,

    /// Appointment display mode: upcoming or past.
    #[arg(short, long, default_value = "upcoming")]
    filter: String,

    /// Patient id to request.
    #[arg(short, long, default_value = "patient-001")]
    patient: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let filter = match args.filter.as_str() {
        "upcoming" => AppointmentFilter::Upcoming,
        "past" => AppointmentFilter::Past,
        other => anyhow::bail!("unknown filter {other:?}, expected upcoming or past"),
    };

    // Skip the demo latency for a snappy terminal run.
    let source = MockDataSource::from_dir(&args.data).with_latency(Duration::from_millis(0));
    let now = Utc::now();

    let patient = source
        .fetch_patient(&args.patient)
        .await
        .with_context(|| format!("could not load patient from {:?}", args.data))?;

    println!(
        "{} ({} y, {})",
        patient.full_name(),
        patient.age(now),
        patient.gender
    );
    println!(
        "Blood group {} | {}",
        patient.blood_group,
        patient.height_weight_string()
    );
    println!("Allergies: {}", patient.allergies_string());

    let vitals = source
        .fetch_vitals(&patient.id)
        .await
        .context("could not load vitals")?;
    for section in group_vitals_by_date(&vitals, now) {
        println!("\n== {} ==", section.title);
        for vital in &section.vitals {
            println!(
                "  {:<18} {:>8} {:<8} [{}]",
                vital.kind.display_name(),
                vital.display_value(),
                vital.unit,
                vital.status.display_name()
            );
        }
    }

    let appointments = source
        .fetch_appointments(&patient.id)
        .await
        .context("could not load appointments")?;
    let selected = select_appointments(&appointments, filter, now);
    println!("\n{} appointments: {}", args.filter, selected.len());
    for appointment in &selected {
        println!(
            "  {} | {} ({}) [{}]",
            appointment.formatted_date_time(),
            appointment.doctor_name,
            appointment.specialty,
            appointment.status.display_name()
        );
    }

    Ok(())
}
