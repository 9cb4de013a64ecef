//! Literal shipment data served by the API.
//!
//! Stands in for a carrier database. Three shipments:
//! - CARGO123 — in transit, 3 events
//! - CARGO456 — delivered, 3 events
//! - CARGO789 — pending, 1 event
//!
//! History is listed newest first, exactly as recorded below.

use once_cell::sync::Lazy;

use super::InMemoryCargoStore;
use crate::models::cargo::{CargoRecord, TrackingEvent};

static SAMPLE_STORE: Lazy<InMemoryCargoStore> =
    Lazy::new(|| InMemoryCargoStore::from_records(sample_records()));

/// The process-wide sample table. Built on first use, never mutated.
pub fn sample_store() -> &'static InMemoryCargoStore {
    &SAMPLE_STORE
}

/// The sample records in declaration order.
pub fn sample_records() -> Vec<CargoRecord> {
    vec![
        CargoRecord {
            cargo_code: "CARGO123".to_string(),
            status: "In Transit".to_string(),
            description: "Electronics Package".to_string(),
            origin: "Istanbul, Turkey".to_string(),
            destination: "Berlin, Germany".to_string(),
            current_location: "Sofia, Bulgaria".to_string(),
            estimated_delivery: "2025-10-25".to_string(),
            weight: "25.5 kg".to_string(),
            tracking_history: vec![
                event(
                    "2025-10-20 09:00",
                    "Sofia, Bulgaria",
                    "In Transit",
                    "Package arrived at sorting facility",
                ),
                event(
                    "2025-10-19 14:30",
                    "Istanbul, Turkey",
                    "Departed",
                    "Package departed from origin",
                ),
                event(
                    "2025-10-19 10:00",
                    "Istanbul, Turkey",
                    "Picked Up",
                    "Package picked up from sender",
                ),
            ],
        },
        CargoRecord {
            cargo_code: "CARGO456".to_string(),
            status: "Delivered".to_string(),
            description: "Clothing Items".to_string(),
            origin: "Paris, France".to_string(),
            destination: "London, UK".to_string(),
            current_location: "London, UK".to_string(),
            estimated_delivery: "2025-10-18".to_string(),
            weight: "10.2 kg".to_string(),
            tracking_history: vec![
                event(
                    "2025-10-18 11:45",
                    "London, UK",
                    "Delivered",
                    "Package delivered successfully",
                ),
                event(
                    "2025-10-18 08:00",
                    "London, UK",
                    "Out for Delivery",
                    "Package out for delivery",
                ),
                event(
                    "2025-10-17 15:00",
                    "Paris, France",
                    "Departed",
                    "Package departed from origin",
                ),
            ],
        },
        CargoRecord {
            cargo_code: "CARGO789".to_string(),
            status: "Pending".to_string(),
            description: "Documents".to_string(),
            origin: "Amsterdam, Netherlands".to_string(),
            destination: "Madrid, Spain".to_string(),
            current_location: "Amsterdam, Netherlands".to_string(),
            estimated_delivery: "2025-10-23".to_string(),
            weight: "0.5 kg".to_string(),
            tracking_history: vec![event(
                "2025-10-20 07:00",
                "Amsterdam, Netherlands",
                "Pending",
                "Package awaiting pickup",
            )],
        },
    ]
}

fn event(timestamp: &str, location: &str, status: &str, description: &str) -> TrackingEvent {
    TrackingEvent {
        timestamp: timestamp.to_string(),
        location: location.to_string(),
        status: status.to_string(),
        description: description.to_string(),
    }
}
