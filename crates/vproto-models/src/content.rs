//! Request content items for the generation pipeline.
//!
//! Wire shapes follow the multimodal request format: content items are
//! tagged `input_text` / `input_image`, and image items reference either
//! an uploaded file id or an inline data URL.

use serde::{Deserialize, Serialize};

/// Reference to image data inside an `input_image` item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    /// An image previously uploaded to the file store.
    FileId { file_id: String },
    /// An inline `data:` URL (base64 fallback).
    Url(String),
}

/// One content item of a request message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputItem {
    InputText { text: String },
    InputImage { image_url: ImageSource },
}

impl InputItem {
    pub fn text(text: impl Into<String>) -> Self {
        Self::InputText { text: text.into() }
    }

    pub fn image_file(file_id: impl Into<String>) -> Self {
        Self::InputImage {
            image_url: ImageSource::FileId {
                file_id: file_id.into(),
            },
        }
    }

    pub fn image_url(url: impl Into<String>) -> Self {
        Self::InputImage {
            image_url: ImageSource::Url(url.into()),
        }
    }
}

/// A user message wrapping the content items for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestMessage {
    #[serde(rename = "type")]
    pub kind: String,
    pub role: String,
    pub content: Vec<InputItem>,
}

impl RequestMessage {
    /// Wrap content items as a single user message.
    pub fn user(content: Vec<InputItem>) -> Self {
        Self {
            kind: "message".to_string(),
            role: "user".to_string(),
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_item_wire_shape() {
        let item = InputItem::text("hello");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "input_text", "text": "hello"})
        );
    }

    #[test]
    fn test_image_item_wire_shapes() {
        let uploaded = InputItem::image_file("file-123");
        assert_eq!(
            serde_json::to_value(&uploaded).unwrap(),
            serde_json::json!({"type": "input_image", "image_url": {"file_id": "file-123"}})
        );

        let inline = InputItem::image_url("data:image/png;base64,AAAA");
        assert_eq!(
            serde_json::to_value(&inline).unwrap(),
            serde_json::json!({"type": "input_image", "image_url": "data:image/png;base64,AAAA"})
        );
    }

    #[test]
    fn test_user_message_wraps_content() {
        let message = RequestMessage::user(vec![InputItem::text("task")]);
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["type"], "message");
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"][0]["type"], "input_text");
    }
}
