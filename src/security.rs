//! Sanitization rules applied while parsing editor content
//!
//! Article HTML comes from a generation backend and from user storage, so it
//! may be untrusted. With [`ConversionOptions::sanitized`] the converter:
//!
//! 1. **Removes non-content elements**: `script`, `style`, embedded frames and
//!    similar subtrees contribute neither blocks nor text
//! 2. **Rejects unsafe image sources**: `javascript:`, `vbscript:`, `file:` and
//!    non-image `data:` URLs are dropped, leaving an image block without `src`
//!
//! Regardless of options, subtrees nested deeper than the depth limit are
//! skipped.
//!
//! [`ConversionOptions::sanitized`]: crate::converter::ConversionOptions::sanitized
//!
//! None of these produce errors; the editor always receives a usable document.

/// Maximum element nesting depth walked by default
pub const MAX_NESTING_DEPTH: usize = 1000;

/// Elements dropped together with their children
const REMOVED_ELEMENTS: &[&str] = &[
    "script",   // JavaScript execution
    "style",    // CSS, not article text
    "noscript", // Fallback content
    "template", // Inert markup
    "iframe",   // Embedded documents
    "object",   // Plugins
    "embed",    // Plugins
    "applet",   // Legacy Java applets
    "link",     // External resources
    "base",     // Base URL rewriting
    "meta",     // Document metadata
];

/// URL schemes never accepted as an image source
const BLOCKED_URL_SCHEMES: &[&str] = &["javascript:", "vbscript:", "file:", "about:"];

/// Inline images are the only accepted `data:` URLs
const DATA_URL_SCHEME: &str = "data:";
const DATA_IMAGE_PREFIX: &str = "data:image/";

/// What to do with an element during conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SanitizeAction {
    /// Process the element normally
    Allow,
    /// Skip the element and all its children
    Remove,
}

/// Security validator for editor HTML
#[derive(Debug, Clone)]
pub struct SecurityValidator {
    max_depth: usize,
}

impl SecurityValidator {
    /// Create a validator with the default depth limit
    pub fn new() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
        }
    }

    /// Create a validator with a custom depth limit
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Decide whether an element takes part in conversion
    ///
    /// ```
    /// use recipe_block_converter::security::{SanitizeAction, SecurityValidator};
    ///
    /// let validator = SecurityValidator::new();
    /// assert_eq!(validator.check_element("script"), SanitizeAction::Remove);
    /// assert_eq!(validator.check_element("div"), SanitizeAction::Allow);
    /// ```
    pub fn check_element(&self, tag_name: &str) -> SanitizeAction {
        if REMOVED_ELEMENTS.contains(&tag_name) {
            SanitizeAction::Remove
        } else {
            SanitizeAction::Allow
        }
    }

    /// Check if a URL is unsafe to use as an image source
    ///
    /// ASCII tab and newline characters are ignored when matching the scheme,
    /// as browsers do when resolving URLs.
    ///
    /// ```
    /// use recipe_block_converter::security::SecurityValidator;
    ///
    /// let validator = SecurityValidator::new();
    /// assert!(validator.is_unsafe_image_url("javascript:alert('xss')"));
    /// assert!(validator.is_unsafe_image_url("data:text/html,<script>alert(1)</script>"));
    /// assert!(!validator.is_unsafe_image_url("data:image/png;base64,iVBORw0KGgo="));
    /// assert!(!validator.is_unsafe_image_url("https://example.com/cake.jpg"));
    /// assert!(!validator.is_unsafe_image_url("/images/cake.jpg"));
    /// ```
    pub fn is_unsafe_image_url(&self, url: &str) -> bool {
        let normalized: String = url
            .trim()
            .chars()
            .filter(|c| !matches!(c, '\t' | '\n' | '\r'))
            .collect::<String>()
            .to_lowercase();

        if normalized.starts_with(DATA_URL_SCHEME) {
            return !normalized.starts_with(DATA_IMAGE_PREFIX);
        }

        BLOCKED_URL_SCHEMES
            .iter()
            .any(|scheme| normalized.starts_with(scheme))
    }

    /// Return the URL if it is safe to use as an image source
    pub fn sanitize_image_url<'a>(&self, url: &'a str) -> Option<&'a str> {
        if self.is_unsafe_image_url(url) {
            None
        } else {
            Some(url)
        }
    }

    /// True while `depth` is within the nesting limit
    ///
    /// ```
    /// use recipe_block_converter::security::SecurityValidator;
    ///
    /// let validator = SecurityValidator::with_max_depth(100);
    /// assert!(validator.within_depth(50));
    /// assert!(!validator.within_depth(150));
    /// ```
    pub fn within_depth(&self, depth: usize) -> bool {
        depth <= self.max_depth
    }
}

impl Default for SecurityValidator {
    fn default() -> Self {
        Self::new()
    }
}
