//! Result execution - performs a result's action when no host does it for us.

use serde::Serialize;

use crate::core::ResultAction;
use crate::error::{RadixError, RadixResult};

/// Write access to the system clipboard
pub trait ClipboardAccess {
    fn set_text(&mut self, content: &str) -> RadixResult<()>;
}

/// Cross-platform clipboard using arboard
#[cfg(feature = "clipboard")]
pub struct ArboardClipboard {
    clipboard: arboard::Clipboard,
}

#[cfg(feature = "clipboard")]
impl ArboardClipboard {
    pub fn new() -> RadixResult<Self> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| RadixError::Clipboard(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

#[cfg(feature = "clipboard")]
impl ClipboardAccess for ArboardClipboard {
    fn set_text(&mut self, content: &str) -> RadixResult<()> {
        self.clipboard
            .set_text(content)
            .map_err(|e| RadixError::Clipboard(e.to_string()))
    }
}

/// Outcome of executing an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExecutionResult {
    /// Text was placed on the clipboard
    Copied { content: String },
    Nothing,
}

/// Execute a result action.
pub fn execute(
    action: &ResultAction,
    clipboard: &mut dyn ClipboardAccess,
) -> RadixResult<ExecutionResult> {
    match action {
        ResultAction::CopyToClipboard { content } => {
            clipboard.set_text(content)?;
            tracing::debug!(content = %content, "Copied to clipboard");
            Ok(ExecutionResult::Copied {
                content: content.clone(),
            })
        }
        ResultAction::DoNothing => Ok(ExecutionResult::Nothing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MemoryClipboard {
        text: Option<String>,
        fail: bool,
    }

    impl ClipboardAccess for MemoryClipboard {
        fn set_text(&mut self, content: &str) -> RadixResult<()> {
            if self.fail {
                return Err(RadixError::Clipboard("unavailable".to_string()));
            }
            self.text = Some(content.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_action() {
        let mut clipboard = MemoryClipboard::default();
        let action = ResultAction::CopyToClipboard {
            content: "ff".to_string(),
        };

        let result = execute(&action, &mut clipboard).unwrap();
        assert_eq!(
            result,
            ExecutionResult::Copied {
                content: "ff".to_string()
            }
        );
        assert_eq!(clipboard.text.as_deref(), Some("ff"));
    }

    #[test]
    fn test_do_nothing_leaves_clipboard_alone() {
        let mut clipboard = MemoryClipboard::default();
        let result = execute(&ResultAction::DoNothing, &mut clipboard).unwrap();
        assert_eq!(result, ExecutionResult::Nothing);
        assert_eq!(clipboard.text, None);
    }

    #[test]
    fn test_clipboard_failure() {
        let mut clipboard = MemoryClipboard {
            fail: true,
            ..Default::default()
        };
        let action = ResultAction::CopyToClipboard {
            content: "1".to_string(),
        };
        assert!(matches!(
            execute(&action, &mut clipboard),
            Err(RadixError::Clipboard(_))
        ));
    }
}
