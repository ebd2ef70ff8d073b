//! UI components for Twinchat
//!
//! This module contains all user interface components built with Dioxus.

pub mod chat;
pub mod setup;

/// Stylesheet bundled into the binary and injected into the window head
pub const STYLESHEET: &str = include_str!("../../assets/main.css");

/// `<head>` markup for the desktop window
pub fn custom_head() -> String {
    format!("<style>{}</style>", STYLESHEET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_is_local() {
        let head = custom_head();
        assert!(!head.contains("<script"));
        assert!(!STYLESHEET.contains("http"));
        assert!(!STYLESHEET.contains("@import"));
    }

    #[test]
    fn test_stylesheet_covers_views() {
        for class in [
            ".app-root",
            ".setup-card",
            ".form-error",
            ".chat-header",
            ".message-list",
            ".bubble-user",
            ".bubble-persona",
            ".typing-dots",
            ".send-button:disabled",
        ] {
            assert!(STYLESHEET.contains(class), "missing {}", class);
        }
    }
}
