//! Per-icon template functions producing data-URI payloads.
//!
//! The icon generation step emits one template per icon. At render time
//! the template receives the already-encoded fill and stroke colors plus
//! an extra-styles fragment, and returns the finished payload string.

// ============================================================================
// IconTemplate
// ============================================================================

/// A per-icon template invoked with encoded color parameters.
///
/// Implementations return the icon's complete data-URI payload, e.g.
/// `data:image/svg+xml,<svg .../>`. Both arguments and the extra-styles
/// fragment arrive pre-encoded; templates splice them in verbatim.
///
/// Any `Fn(&str, &str, &str) -> String` is a template, so generated free
/// functions and closures register directly:
///
/// ```
/// use icontint::{IconTemplate, Library};
///
/// let library = Library::builder()
///     .icon("dot", "dot", |fill: &str, _stroke: &str, _extra: &str| {
///         format!("data:image/svg+xml,<svg fill='{fill}'/>")
///     })
///     .build()
///     .unwrap();
///
/// assert!(library.contains("dot"));
/// ```
pub trait IconTemplate {
    /// Expands the template with encoded fill and stroke colors and a
    /// pre-encoded extra-styles fragment.
    fn expand(&self, fill: &str, stroke: &str, extra_styles: &str) -> String;
}

impl<F> IconTemplate for F
where
    F: Fn(&str, &str, &str) -> String,
{
    fn expand(&self, fill: &str, stroke: &str, extra_styles: &str) -> String {
        self(fill, stroke, extra_styles)
    }
}

// ============================================================================
// SvgTemplate
// ============================================================================

/// A template backed by a payload string with substitution placeholders.
///
/// This is the standard template shape the generation step emits: the
/// icon's markup with [`FILL`](Self::FILL), [`STROKE`](Self::STROKE) and
/// [`EXTRA`](Self::EXTRA) markers where the parameters belong. Expansion
/// is plain text substitution; a marker absent from the payload is a
/// no-op.
///
/// # Example
///
/// ```
/// use icontint::{IconTemplate, SvgTemplate};
///
/// let template = SvgTemplate::from_svg("<svg fill='%FILL%' style='%EXTRA%'/>");
/// let payload = template.expand("rgb%280%2C0%2C0%29", "", "opacity%3A0.5%3B");
///
/// assert_eq!(
///     payload,
///     "data:image/svg+xml,<svg fill='rgb%280%2C0%2C0%29' style='opacity%3A0.5%3B'/>"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgTemplate {
    payload: String,
}

impl SvgTemplate {
    /// Marker replaced by the encoded fill color.
    pub const FILL: &'static str = "%FILL%";

    /// Marker replaced by the encoded stroke color.
    pub const STROKE: &'static str = "%STROKE%";

    /// Marker replaced by the extra-styles fragment.
    pub const EXTRA: &'static str = "%EXTRA%";

    /// Creates a template from a complete payload string.
    ///
    /// The payload must already carry its `data:` scheme and media type.
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Creates a template from bare SVG markup.
    ///
    /// The markup is wrapped as an `image/svg+xml` data URI. Markup
    /// characters outside the color markers are the generation step's
    /// responsibility to keep URI-safe.
    pub fn from_svg(markup: impl Into<String>) -> Self {
        Self {
            payload: format!("data:image/svg+xml,{}", markup.into()),
        }
    }

    /// Returns the unexpanded payload.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

impl IconTemplate for SvgTemplate {
    fn expand(&self, fill: &str, stroke: &str, extra_styles: &str) -> String {
        self.payload
            .replace(Self::FILL, fill)
            .replace(Self::STROKE, stroke)
            .replace(Self::EXTRA, extra_styles)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_svg_prefixes_data_uri_scheme() {
        let template = SvgTemplate::from_svg("<svg/>");
        assert_eq!(template.payload(), "data:image/svg+xml,<svg/>");
    }

    #[test]
    fn new_takes_payload_verbatim() {
        let template = SvgTemplate::new("data:image/png;base64,AAAA");
        assert_eq!(template.payload(), "data:image/png;base64,AAAA");
    }

    #[test]
    fn expand_substitutes_all_markers() {
        let template =
            SvgTemplate::from_svg("<svg fill='%FILL%' stroke='%STROKE%' style='%EXTRA%'/>");
        let payload = template.expand("F", "S", "E");
        assert_eq!(payload, "data:image/svg+xml,<svg fill='F' stroke='S' style='E'/>");
    }

    #[test]
    fn expand_repeats_substitution_for_repeated_markers() {
        let template = SvgTemplate::new("%FILL%|%FILL%");
        assert_eq!(template.expand("x", "", ""), "x|x");
    }

    #[test]
    fn missing_marker_is_a_no_op() {
        let template = SvgTemplate::from_svg("<svg fill='%FILL%'/>");
        let payload = template.expand("F", "S", "E");
        assert_eq!(payload, "data:image/svg+xml,<svg fill='F'/>");
    }

    #[test]
    fn closures_are_templates() {
        let template = |fill: &str, stroke: &str, extra: &str| format!("{fill}/{stroke}/{extra}");
        assert_eq!(template.expand("a", "b", "c"), "a/b/c");
    }
}
