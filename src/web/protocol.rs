// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Messages exchanged on the entity-discovery WebSocket

use serde::{Deserialize, Serialize};

use crate::animator::RenderedNotification;

/// Browser → server
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientMessage {
    /// Raw intersection ratio from an IntersectionObserver
    Intersection { ratio: f64 },
    /// Visibility decided by the client itself
    Visibility { visible: bool },
}

/// Server → browser
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ServerMessage {
    Frame { notifications: Vec<RenderedNotification> },
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::NotificationStack;

    #[test]
    fn test_parse_intersection() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"intersection","ratio":0.42}"#).unwrap();
        assert_eq!(msg, ClientMessage::Intersection { ratio: 0.42 });
    }

    #[test]
    fn test_parse_visibility() {
        let msg: ClientMessage = serde_json::from_str(r#"{"type":"visibility","visible":true}"#).unwrap();
        assert_eq!(msg, ClientMessage::Visibility { visible: true });
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(serde_json::from_str::<ClientMessage>(r#"{"type":"scroll","y":10}"#).is_err());
        assert!(serde_json::from_str::<ClientMessage>(r#"{"ratio":0.5}"#).is_err());
    }

    #[test]
    fn test_frame_shape() {
        let mut stack = NotificationStack::new();
        stack.set_visible(true);
        let msg = ServerMessage::Frame { notifications: stack.frame() };
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["type"], "frame");
        let first = &json["notifications"][0];
        assert_eq!(first["id"], 0);
        assert_eq!(first["entity"], "Mikhail Volkov");
        assert_eq!(first["type"], "Person identified");
        assert_eq!(first["slot"], 2);
        assert_eq!(first["stackIndex"], 1);
        assert_eq!(first["transform"], "translateY(calc(-50% - 24px)) scale(0.92)");
    }

    #[test]
    fn test_error_shape() {
        let json = serde_json::to_value(ServerMessage::Error { message: "bad".into() }).unwrap();
        assert_eq!(json, serde_json::json!({"type": "error", "message": "bad"}));
    }
}
