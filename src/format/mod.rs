//! Response formatter — shapes a cargo record for the caller.
//!
//! Standard mode returns the record as-is. Integration mode converts it into
//! an ordered list of display-ready text messages for a chat consumer:
//!
//! 1. a summary message with the shipment fields,
//! 2. if there is history, a "Tracking History:" header message,
//! 3. one message per tracking event, in stored order.
//!
//! Label text and line order are part of the wire contract.

use serde::Serialize;

use crate::models::cargo::{CargoRecord, TrackingEvent};
use crate::models::integration::{
    IntegrationContent, IntegrationParams, IntegrationResponse, MessageModule,
};

/// Header payload preceding the per-event messages.
pub const HISTORY_HEADER: &str = "Tracking History:";

/// Value of the `format` query parameter that selects integration mode.
pub const INTEGRATION_PARAM: &str = "integration";

/// Shape of a successful `/api/track` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// The cargo record verbatim.
    #[default]
    Standard,
    /// [`IntegrationResponse`] message list.
    Integration,
}

impl ResponseFormat {
    /// Select a format from the raw `format` parameter. Exact match only.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some(INTEGRATION_PARAM) => ResponseFormat::Integration,
            _ => ResponseFormat::Standard,
        }
    }
}

/// A formatted track response body.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum TrackBody<'a> {
    Standard(&'a CargoRecord),
    Integration(IntegrationResponse),
}

/// Format a record in the requested mode.
pub fn format_record(record: &CargoRecord, format: ResponseFormat) -> TrackBody<'_> {
    match format {
        ResponseFormat::Standard => TrackBody::Standard(record),
        ResponseFormat::Integration => TrackBody::Integration(build_integration_response(record)),
    }
}

/// Build the chat integration payload for a record.
pub fn build_integration_response(record: &CargoRecord) -> IntegrationResponse {
    let params = IntegrationParams {
        cargo_code: record.cargo_code.clone(),
        status: record.status.clone(),
        current_location: record.current_location.clone(),
        estimated_delivery: record.estimated_delivery.clone(),
    };

    let mut modules = Vec::with_capacity(2 + record.tracking_history.len());
    modules.push(MessageModule::text(summary_text(record)));

    if record.has_history() {
        modules.push(MessageModule::text(HISTORY_HEADER));
        modules.extend(
            record
                .tracking_history
                .iter()
                .map(|event| MessageModule::text(event_text(event))),
        );
    }

    IntegrationResponse {
        content: IntegrationContent { params, modules },
        fallback: false,
    }
}

/// Multi-line shipment summary, one labeled field per line.
pub fn summary_text(record: &CargoRecord) -> String {
    [
        format!("Cargo Code: {}", record.cargo_code),
        format!("Status: {}", record.status),
        format!("Description: {}", record.description),
        format!("Origin: {}", record.origin),
        format!("Destination: {}", record.destination),
        format!("Current Location: {}", record.current_location),
        format!("Estimated Delivery: {}", record.estimated_delivery),
        format!("Weight: {}", record.weight),
    ]
    .join("\n")
}

/// Four-line description of a single tracking event.
pub fn event_text(event: &TrackingEvent) -> String {
    [
        format!("Time: {}", event.timestamp),
        format!("Location: {}", event.location),
        format!("Status: {}", event.status),
        format!("Description: {}", event.description),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{sample_store, CargoStore};

    fn payload(module: &MessageModule) -> &str {
        assert_eq!(module.data.payload.len(), 1);
        &module.data.payload[0]
    }

    #[test]
    fn test_format_param_selection() {
        assert_eq!(
            ResponseFormat::from_param(Some("integration")),
            ResponseFormat::Integration
        );
        assert_eq!(ResponseFormat::from_param(None), ResponseFormat::Standard);
        assert_eq!(
            ResponseFormat::from_param(Some("Integration")),
            ResponseFormat::Standard
        );
        assert_eq!(ResponseFormat::from_param(Some("")), ResponseFormat::Standard);
    }

    #[test]
    fn test_summary_text_exact() {
        let record = sample_store().get("CARGO123").unwrap();
        assert_eq!(
            summary_text(record),
            "Cargo Code: CARGO123\n\
             Status: In Transit\n\
             Description: Electronics Package\n\
             Origin: Istanbul, Turkey\n\
             Destination: Berlin, Germany\n\
             Current Location: Sofia, Bulgaria\n\
             Estimated Delivery: 2025-10-25\n\
             Weight: 25.5 kg"
        );
    }

    #[test]
    fn test_event_text_exact() {
        let record = sample_store().get("CARGO789").unwrap();
        assert_eq!(
            event_text(&record.tracking_history[0]),
            "Time: 2025-10-20 07:00\n\
             Location: Amsterdam, Netherlands\n\
             Status: Pending\n\
             Description: Package awaiting pickup"
        );
    }

    #[test]
    fn test_integration_modules_for_three_events() {
        let record = sample_store().get("CARGO123").unwrap();
        let response = build_integration_response(record);
        let modules = &response.content.modules;

        assert_eq!(modules.len(), 5);
        assert!(payload(&modules[0]).contains("CARGO123"));
        assert_eq!(payload(&modules[1]), HISTORY_HEADER);
        assert!(payload(&modules[2]).starts_with("Time: 2025-10-20 09:00"));
        assert!(payload(&modules[4]).starts_with("Time: 2025-10-19 10:00"));
        assert!(!response.fallback);
    }

    #[test]
    fn test_integration_single_event() {
        let record = sample_store().get("CARGO789").unwrap();
        let response = build_integration_response(record);
        assert_eq!(response.content.modules.len(), 3);
    }

    #[test]
    fn test_integration_without_history_has_only_summary() {
        let mut record = sample_store().get("CARGO789").unwrap().clone();
        record.tracking_history.clear();
        let response = build_integration_response(&record);
        assert_eq!(response.content.modules.len(), 1);
        assert!(payload(&response.content.modules[0]).contains("CARGO789"));
    }

    #[test]
    fn test_integration_params() {
        let record = sample_store().get("CARGO456").unwrap();
        let params = build_integration_response(record).content.params;
        assert_eq!(params.cargo_code, "CARGO456");
        assert_eq!(params.status, "Delivered");
        assert_eq!(params.current_location, "London, UK");
        assert_eq!(params.estimated_delivery, "2025-10-18");
    }

    #[test]
    fn test_history_order_is_preserved() {
        let mut record = sample_store().get("CARGO456").unwrap().clone();
        record.tracking_history.reverse();
        let response = build_integration_response(&record);
        let first_event = payload(&response.content.modules[2]);
        assert!(first_event.starts_with("Time: 2025-10-17 15:00"));
    }

    #[test]
    fn test_standard_body_is_record_verbatim() {
        let record = sample_store().get("CARGO123").unwrap();
        let body = format_record(record, ResponseFormat::Standard);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::to_value(record).unwrap()
        );
    }

    #[test]
    fn test_integration_output_is_deterministic() {
        let record = sample_store().get("CARGO123").unwrap();
        let a = serde_json::to_string(&format_record(record, ResponseFormat::Integration)).unwrap();
        let b = serde_json::to_string(&format_record(record, ResponseFormat::Integration)).unwrap();
        assert_eq!(a, b);
    }
}
