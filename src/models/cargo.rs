use serde::{Deserialize, Serialize};

/// A shipment record as returned by `GET /api/track`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CargoRecord {
    /// Unique cargo code (e.g., "CARGO123"). Always equals the store key.
    pub cargo_code: String,
    /// Free-text shipment status (e.g., "In Transit", "Delivered").
    pub status: String,
    /// Human description of the contents.
    pub description: String,
    pub origin: String,
    pub destination: String,
    pub current_location: String,
    /// Estimated delivery date. Not validated as a calendar date.
    pub estimated_delivery: String,
    /// Weight with unit suffix (e.g., "25.5 kg").
    pub weight: String,
    /// Milestones in display order. Absent on input means empty.
    #[serde(default)]
    pub tracking_history: Vec<TrackingEvent>,
}

impl CargoRecord {
    /// Returns true if the record has at least one tracking event.
    pub fn has_history(&self) -> bool {
        !self.tracking_history.is_empty()
    }
}

/// One timestamped milestone in a shipment's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackingEvent {
    /// Event time as recorded by the carrier. Not parsed.
    pub timestamp: String,
    pub location: String,
    pub status: String,
    pub description: String,
}
