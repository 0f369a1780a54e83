use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// `<script>` blocks including their content, shortest match to the
    /// next closing tag
    static ref SCRIPT_BLOCK: Regex = Regex::new(r"(?is)<script\b.*?</script>").unwrap();
    /// Inline event-handler attributes (`onclick=`, `onerror=`, ...)
    static ref EVENT_HANDLER: Regex =
        Regex::new(r#"(?i)\s*on\w+\s*=\s*['"][^'"]*['"]?"#).unwrap();
    /// Dangerous URI scheme prefixes, wherever they appear
    static ref URI_SCHEME: Regex = Regex::new(r"(?i)\s*(?:javascript|vbscript|data)\s*:").unwrap();
    /// Email shape: no whitespace, one `@`, a dot in the domain part
    static ref EMAIL: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Escape free-form text for embedding in markup
///
/// Replacement passes run in a fixed order with the ampersand pass last.
/// The final pass also rewrites ampersands inserted by the earlier passes,
/// so `<` comes out as `&amp;lt;`. Consumers decode accordingly; changing
/// the pass order changes the output for every structural character.
pub fn sanitize_input(text: &str) -> String {
    text.replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('/', "&#x2F;")
        .replace('\\', "&#x5C;")
        .replace('&', "&amp;")
}

/// Strip known-dangerous constructs from HTML while keeping formatting tags
///
/// This is a denylist filter, not an HTML parser: script blocks, inline
/// `on*=` handlers and `javascript:`/`vbscript:`/`data:` scheme prefixes
/// are removed, everything else passes through. A production system should
/// prefer an allowlist sanitizer library (e.g. ammonia) over this filter.
pub fn sanitize_html(html: &str) -> String {
    let html = SCRIPT_BLOCK.replace_all(html, "");
    let html = EVENT_HANDLER.replace_all(&html, "");
    let html = URI_SCHEME.replace_all(&html, "");
    html.into_owned()
}

/// Outcome of a length-checked sanitization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SanitizedText {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    pub sanitized: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Sanitize a text field, failing only when it exceeds `max_length`
///
/// Oversized input is returned unsanitized alongside the error so the form
/// can re-display it. Within the limit the text always comes back valid,
/// routed through [`sanitize_html`] or [`sanitize_input`].
pub fn sanitize_and_validate_text(text: &str, max_length: usize, allow_html: bool) -> SanitizedText {
    if text.chars().count() > max_length {
        return SanitizedText {
            is_valid: false,
            sanitized: text.to_string(),
            error: Some(format!("Text too long. Maximum {} characters.", max_length)),
        };
    }

    let sanitized = if allow_html {
        sanitize_html(text)
    } else {
        sanitize_input(text)
    };

    SanitizedText {
        is_valid: true,
        sanitized,
        error: None,
    }
}

/// Shape check for email addresses
pub fn validate_email(email: &str) -> bool {
    email.len() <= 254 && EMAIL.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_input_escapes_structural_chars() {
        let result = sanitize_input("<script>alert('x')</script>");

        assert!(!result.contains('<'));
        assert!(!result.contains('>'));
        assert!(!result.contains('\''));
    }

    #[test]
    fn test_sanitize_input_double_escapes_entities() {
        // The trailing ampersand pass rewrites the inserted entities
        assert_eq!(sanitize_input("<"), "&amp;lt;");
        assert_eq!(sanitize_input("&"), "&amp;");
        assert_eq!(sanitize_input("a < b"), "a &amp;lt; b");
    }

    #[test]
    fn test_sanitize_input_plain_text_untouched() {
        assert_eq!(sanitize_input("Acme Ltda"), "Acme Ltda");
    }

    #[test]
    fn test_sanitize_html_removes_script_blocks() {
        let html = "<p>hi</p><SCRIPT>alert(1)</SCRIPT><p>bye</p>";
        assert_eq!(sanitize_html(html), "<p>hi</p><p>bye</p>");
    }

    #[test]
    fn test_sanitize_html_shortest_script_match() {
        // Non-greedy: only up to the first closing tag is removed
        let html = "<script>a</script>keep<script>b</script>";
        assert_eq!(sanitize_html(html), "keep");
    }

    #[test]
    fn test_sanitize_html_strips_event_handlers() {
        let html = r#"<img src="x.png" onerror="alert(1)">"#;
        let result = sanitize_html(html);
        assert!(!result.to_lowercase().contains("onerror"));
        assert!(result.contains("img"));
    }

    #[test]
    fn test_sanitize_html_strips_uri_schemes() {
        let html = r#"<a href="JavaScript:alert(1)">x</a>"#;
        let result = sanitize_html(html);
        assert!(!result.to_lowercase().contains("javascript:"));

        assert!(!sanitize_html("data:text/html;base64,xyz").contains("data:"));
        assert!(!sanitize_html("vbscript:msgbox").to_lowercase().contains("vbscript:"));
    }

    #[test]
    fn test_text_within_limit_is_valid() {
        let result = sanitize_and_validate_text("hello <b>world</b>", 100, false);

        assert!(result.is_valid);
        assert!(result.error.is_none());
        assert!(!result.sanitized.contains('<'));
    }

    #[test]
    fn test_text_over_limit_fails() {
        let result = sanitize_and_validate_text("abcdef", 5, false);

        assert!(!result.is_valid);
        // The original text comes back untouched for re-display
        assert_eq!(result.sanitized, "abcdef");
        assert!(result.error.unwrap().contains("5"));
    }

    #[test]
    fn test_allow_html_routes_through_html_filter() {
        let result = sanitize_and_validate_text("<b>bold</b><script>x</script>", 100, true);

        assert!(result.is_valid);
        assert_eq!(result.sanitized, "<b>bold</b>");
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("contato@acme.com.br"));
        assert!(validate_email("a@b.co"));

        assert!(!validate_email("not-an-email"));
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email(&format!("{}@b.com", "a".repeat(260))));
    }
}
