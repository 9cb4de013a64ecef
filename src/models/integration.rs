use serde::{Deserialize, Serialize};

/// Alternate `/api/track` response for the chat/messaging integration.
///
/// The consumer renders `content.modules` in order as separate text bubbles
/// and may read `content.params` as structured variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntegrationResponse {
    pub content: IntegrationContent,
    /// Tells the consumer to fall back to its default flow. Always false here.
    pub fallback: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IntegrationContent {
    pub params: IntegrationParams,
    pub modules: Vec<MessageModule>,
}

/// Flat subset of a cargo record exposed as integration variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IntegrationParams {
    pub cargo_code: String,
    pub status: String,
    pub current_location: String,
    pub estimated_delivery: String,
}

/// Kind of a module block. Only messages are produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModuleKind {
    Message,
}

/// Kind of a message body. Only plain text is produced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum MessageKind {
    Text,
}

/// One display block: `{"type":"MESSAGE","data":{"type":"TEXT","payload":[...]}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageModule {
    #[serde(rename = "type")]
    pub kind: ModuleKind,
    pub data: MessageData,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageData {
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub payload: Vec<String>,
}

impl MessageModule {
    /// Build a MESSAGE/TEXT module carrying a single text payload.
    pub fn text(payload: impl Into<String>) -> Self {
        MessageModule {
            kind: ModuleKind::Message,
            data: MessageData {
                kind: MessageKind::Text,
                payload: vec![payload.into()],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_module_wire_shape() {
        let module = MessageModule::text("hello");
        assert_eq!(
            serde_json::to_value(&module).unwrap(),
            json!({"type": "MESSAGE", "data": {"type": "TEXT", "payload": ["hello"]}})
        );
    }

    #[test]
    fn test_params_use_camel_case() {
        let params = IntegrationParams {
            cargo_code: "C1".to_string(),
            status: "Pending".to_string(),
            current_location: "Here".to_string(),
            estimated_delivery: "2025-10-23".to_string(),
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["cargoCode"], "C1");
        assert_eq!(value["currentLocation"], "Here");
        assert_eq!(value["estimatedDelivery"], "2025-10-23");
    }
}
