//! Result items handed back to the host for rendering.

use serde::{Deserialize, Serialize};

/// What happens when the user selects a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResultAction {
    /// Copy text to the clipboard
    CopyToClipboard { content: String },

    /// Selecting the result has no effect
    DoNothing,
}

/// A single renderable row in the launcher's result list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub icon: String,
    pub name: String,
    pub description: String,
    pub on_enter: ResultAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_alt_enter: Option<ResultAction>,
}

impl ResultItem {
    /// An item that only informs the user; selecting it does nothing.
    pub fn message(icon: &str, name: &str, description: String) -> Self {
        Self {
            icon: icon.to_string(),
            name: name.to_string(),
            description,
            on_enter: ResultAction::DoNothing,
            on_alt_enter: None,
        }
    }

    /// An item whose primary and alternate actions copy `content`.
    pub fn copyable(icon: &str, content: String, description: String) -> Self {
        let action = ResultAction::CopyToClipboard {
            content: content.clone(),
        };
        Self {
            icon: icon.to_string(),
            name: content,
            description,
            on_enter: action.clone(),
            on_alt_enter: Some(action),
        }
    }

    /// Also make the alternate action a no-op.
    pub fn with_alt_nothing(mut self) -> Self {
        self.on_alt_enter = Some(ResultAction::DoNothing);
        self
    }

    /// Text copied when the item is selected, if any.
    pub fn copy_payload(&self) -> Option<&str> {
        match &self.on_enter {
            ResultAction::CopyToClipboard { content } => Some(content),
            ResultAction::DoNothing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_payload() {
        let item = ResultItem::copyable("images/dec.png", "255".to_string(), String::new());
        assert_eq!(item.copy_payload(), Some("255"));
        assert_eq!(item.name, "255");
        assert_eq!(item.on_alt_enter, Some(item.on_enter.clone()));

        let message = ResultItem::message("images/icon.png", "No input", String::new());
        assert_eq!(message.copy_payload(), None);
        assert_eq!(message.on_alt_enter, None);
    }

    #[test]
    fn test_serialize_actions() {
        let item = ResultItem::message("images/icon.png", "Failed", "oops".to_string())
            .with_alt_nothing();
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["on_enter"]["type"], "do_nothing");
        assert_eq!(json["on_alt_enter"]["type"], "do_nothing");

        let item = ResultItem::copyable("images/bin.png", "101".to_string(), String::new());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["on_enter"]["type"], "copy_to_clipboard");
        assert_eq!(json["on_enter"]["content"], "101");
    }

    #[test]
    fn test_message_omits_alt_action() {
        let item = ResultItem::message("images/icon.png", "No input", String::new());
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("on_alt_enter"));

        let parsed: ResultItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
    }
}
