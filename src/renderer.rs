//! Rendering icons into URI-encoded inline images and CSS shorthand.

use std::fmt;

use thiserror::Error;

use crate::config::RendererConfig;
use crate::library::Library;
use crate::tint::Tint;

// ============================================================================
// Errors
// ============================================================================

/// Per-call rendering errors.
///
/// These are configuration mistakes, not data failures: a render call
/// that fails produces no image value but never aborts the surrounding
/// style-sheet build. Callers decide whether to drop, log or raise them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// The identifier does not name a registered icon.
    #[error("unknown icon `{0}`")]
    UnknownIcon(String),
}

// ============================================================================
// IconStyle
// ============================================================================

/// Per-call style parameters for a render.
///
/// `tint` is the shared default for both paint channels; `fill` and
/// `stroke` override it individually. When all three are absent, the
/// renderer's configured default tint applies.
///
/// `extra_styles` is injected into the template verbatim. It must
/// already be percent-encoded by the caller; no escaping is applied
/// here, so a pre-encoded fragment passes through unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct IconStyle {
    /// Default tint for both fill and stroke.
    pub tint: Option<Tint>,

    /// Fill override.
    pub fill: Option<Tint>,

    /// Stroke override.
    pub stroke: Option<Tint>,

    /// Opacity in 0.0-1.0; exactly 1.0 emits no opacity term. Out-of-range
    /// values are not validated.
    pub opacity: f32,

    /// Pre-encoded style fragment appended after the opacity term.
    pub extra_styles: String,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            tint: None,
            fill: None,
            stroke: None,
            opacity: 1.0,
            extra_styles: String::new(),
        }
    }
}

impl IconStyle {
    /// Creates a style with no tint overrides, full opacity and no extra styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shared tint for fill and stroke.
    pub fn with_tint(mut self, tint: Tint) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Sets the fill tint.
    pub fn with_fill(mut self, fill: Tint) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Sets the stroke tint.
    pub fn with_stroke(mut self, stroke: Tint) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the opacity.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Sets the pre-encoded extra-styles fragment.
    pub fn with_extra_styles(mut self, extra_styles: impl Into<String>) -> Self {
        self.extra_styles = extra_styles.into();
        self
    }
}

// ============================================================================
// IconRenderer
// ============================================================================

/// Renders registered icons as color-parameterized inline images.
///
/// The renderer owns the [`Library`] and an injected [`RendererConfig`];
/// every render is a pure function of its arguments and that state, so a
/// shared renderer is safe to use from any number of threads.
///
/// # Example
///
/// ```
/// use icontint::{IconRenderer, IconStyle, Library, SvgTemplate, Tint};
///
/// let library = Library::builder()
///     .icon("dot", "dot", SvgTemplate::from_svg("<svg fill='%FILL%'/>"))
///     .build()
///     .unwrap();
/// let renderer = IconRenderer::new(library);
///
/// let css = renderer
///     .image("dot", &IconStyle::new().with_tint(Tint::rgb(255, 0, 0)))
///     .unwrap();
/// assert_eq!(css, "url(data:image/svg+xml,<svg fill='rgb%28255%2C0%2C0%29'/>)");
/// ```
#[derive(Debug)]
pub struct IconRenderer {
    library: Library,
    config: RendererConfig,
}

impl IconRenderer {
    /// Creates a renderer with the default configuration.
    pub fn new(library: Library) -> Self {
        Self::with_config(library, RendererConfig::default())
    }

    /// Creates a renderer with an explicit configuration.
    pub fn with_config(library: Library, config: RendererConfig) -> Self {
        Self { library, config }
    }

    /// Returns the underlying library.
    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Renders an icon as a bare data-URI payload.
    ///
    /// When `opacity` differs from 1.0 an `opacity%3A<value>%3B` term is
    /// placed ahead of the caller's extra styles. Fill and stroke resolve
    /// through the style's overrides, then its shared tint, then the
    /// configured default.
    pub fn data_uri(&self, icon: &str, style: &IconStyle) -> Result<String, RenderError> {
        let template = self
            .library
            .template(icon)
            .ok_or_else(|| RenderError::UnknownIcon(icon.to_owned()))?;

        let extra_styles = if style.opacity != 1.0 {
            format!("opacity%3A{}%3B{}", style.opacity, style.extra_styles)
        } else {
            style.extra_styles.clone()
        };

        let fill = self.resolve(style.fill, style).encode();
        let stroke = self.resolve(style.stroke, style).encode();

        Ok(template.expand(&fill, &stroke, &extra_styles))
    }

    /// Renders an icon wrapped as a CSS `url(...)` value.
    ///
    /// Together with [`data_uri`](Self::data_uri) this overrides the
    /// configured output form for a single call.
    pub fn url(&self, icon: &str, style: &IconStyle) -> Result<String, RenderError> {
        Ok(css_url(&self.data_uri(icon, style)?))
    }

    /// Renders an icon in the configured output form.
    ///
    /// Wraps the payload as `url(...)` when the configuration asks for
    /// it, which is the default; otherwise returns the bare payload.
    pub fn image(&self, icon: &str, style: &IconStyle) -> Result<String, RenderError> {
        if self.config.wrap_url {
            self.url(icon, style)
        } else {
            self.data_uri(icon, style)
        }
    }

    /// Renders an icon as a CSS background shorthand bundle.
    ///
    /// The image declaration is always in `url(...)` form, regardless of
    /// the configured output form; repeat, position and size pass through
    /// from the layout.
    pub fn background(
        &self,
        icon: &str,
        style: &IconStyle,
        layout: &BackgroundLayout,
    ) -> Result<Background, RenderError> {
        Ok(Background {
            image: self.url(icon, style)?,
            repeat: layout.repeat.clone(),
            position: layout.position.clone(),
            size: layout.size.clone(),
        })
    }

    fn resolve(&self, channel: Option<Tint>, style: &IconStyle) -> Tint {
        channel
            .or(style.tint)
            .unwrap_or(self.config.default_tint)
    }
}

/// Wraps a data-URI payload as a CSS `url(...)` value.
pub fn css_url(payload: &str) -> String {
    format!("url({payload})")
}

// ============================================================================
// Configurable
// ============================================================================

/// Trait for types driven by a [`RendererConfig`].
pub trait Configurable {
    /// Applies a configuration to this instance.
    fn apply_config(&mut self, config: &RendererConfig);

    /// Exports the currently active configuration.
    fn export_config(&self) -> RendererConfig;
}

impl Configurable for IconRenderer {
    fn apply_config(&mut self, config: &RendererConfig) {
        self.config = config.clone();
    }

    fn export_config(&self) -> RendererConfig {
        self.config.clone()
    }
}

// ============================================================================
// Background shorthand
// ============================================================================

/// Layout values passed through to the background shorthand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundLayout {
    /// `background-position` value.
    pub position: String,

    /// `background-size` value.
    pub size: String,

    /// `background-repeat` value.
    pub repeat: String,
}

/// Left-centered, 2em square, not repeated.
impl Default for BackgroundLayout {
    fn default() -> Self {
        Self {
            position: "left center".into(),
            size: "2em 2em".into(),
            repeat: "no-repeat".into(),
        }
    }
}

impl BackgroundLayout {
    /// Creates the default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `background-position` value.
    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }

    /// Sets the `background-size` value.
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Sets the `background-repeat` value.
    pub fn with_repeat(mut self, repeat: impl Into<String>) -> Self {
        self.repeat = repeat.into();
        self
    }
}

/// The four style declarations produced by the background shorthand.
///
/// `Display` writes the declarations one per line, image first, with no
/// trailing newline, ready to splice into a rule body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Background {
    /// `background-image` value, always in `url(...)` form.
    pub image: String,

    /// `background-repeat` value.
    pub repeat: String,

    /// `background-position` value.
    pub position: String,

    /// `background-size` value.
    pub size: String,
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "background-image: {};", self.image)?;
        writeln!(f, "background-repeat: {};", self.repeat)?;
        writeln!(f, "background-position: {};", self.position)?;
        write!(f, "background-size: {};", self.size)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::SvgTemplate;

    fn arrow_library() -> Library {
        Library::builder()
            .icon(
                "arrow",
                "arrow",
                SvgTemplate::from_svg("<svg fill='%FILL%' stroke='%STROKE%'/>"),
            )
            .icon(
                "styled",
                "styled",
                SvgTemplate::from_svg("<svg fill='%FILL%' style='%EXTRA%'/>"),
            )
            .build()
            .unwrap()
    }

    #[test]
    fn renders_black_arrow_as_css_url() {
        let renderer = IconRenderer::new(arrow_library());
        let css = renderer
            .image("arrow", &IconStyle::new().with_tint(Tint::rgb(0, 0, 0)))
            .unwrap();
        assert_eq!(
            css,
            "url(data:image/svg+xml,<svg fill='rgb%280%2C0%2C0%29' stroke='rgb%280%2C0%2C0%29'/>)"
        );
    }

    #[test]
    fn data_uri_is_never_wrapped() {
        let renderer = IconRenderer::new(arrow_library());
        let payload = renderer.data_uri("arrow", &IconStyle::new()).unwrap();
        assert!(payload.starts_with("data:image/svg+xml,"));
        assert!(!payload.starts_with("url("));
    }

    #[test]
    fn image_honors_bare_output_config() {
        let config = RendererConfig::new().with_wrap_url(false);
        let renderer = IconRenderer::with_config(arrow_library(), config);
        let css = renderer.image("arrow", &IconStyle::new()).unwrap();
        assert!(css.starts_with("data:image/svg+xml,"));
    }

    #[test]
    fn url_wraps_regardless_of_config() {
        let config = RendererConfig::new().with_wrap_url(false);
        let renderer = IconRenderer::with_config(arrow_library(), config);
        let css = renderer.url("arrow", &IconStyle::new()).unwrap();
        assert!(css.starts_with("url(data:image/svg+xml,"));
        assert!(css.ends_with(")"));
    }

    #[test]
    fn unknown_icon_is_a_soft_error() {
        let renderer = IconRenderer::new(arrow_library());
        let err = renderer.image("nonexistent", &IconStyle::new()).unwrap_err();
        assert_eq!(err, RenderError::UnknownIcon("nonexistent".into()));
    }

    #[test]
    fn full_opacity_emits_no_opacity_term() {
        let renderer = IconRenderer::new(arrow_library());
        let css = renderer.image("styled", &IconStyle::new()).unwrap();
        assert!(!css.contains("opacity"));
    }

    #[test]
    fn reduced_opacity_prepends_encoded_term() {
        let renderer = IconRenderer::new(arrow_library());
        let style = IconStyle::new()
            .with_opacity(0.5)
            .with_extra_styles("fill-rule%3Aevenodd%3B");
        let css = renderer.image("styled", &style).unwrap();
        assert!(css.contains("style='opacity%3A0.5%3Bfill-rule%3Aevenodd%3B'"));
    }

    #[test]
    fn extra_styles_pass_through_verbatim() {
        let renderer = IconRenderer::new(arrow_library());
        let style = IconStyle::new().with_extra_styles("fill-rule%3Aevenodd%3B");
        let css = renderer.image("styled", &style).unwrap();
        assert!(css.contains("style='fill-rule%3Aevenodd%3B'"));
    }

    #[test]
    fn fill_and_stroke_overrides_beat_shared_tint() {
        let renderer = IconRenderer::new(arrow_library());
        let style = IconStyle::new()
            .with_tint(Tint::rgb(1, 1, 1))
            .with_fill(Tint::rgb(255, 0, 0))
            .with_stroke(Tint::rgb(0, 0, 255));
        let css = renderer.image("arrow", &style).unwrap();
        assert!(css.contains("fill='rgb%28255%2C0%2C0%29'"));
        assert!(css.contains("stroke='rgb%280%2C0%2C255%29'"));
    }

    #[test]
    fn configured_default_tint_applies_when_style_has_none() {
        let config = RendererConfig::new().with_default_tint(Tint::rgb(7, 8, 9));
        let renderer = IconRenderer::with_config(arrow_library(), config);
        let css = renderer.image("arrow", &IconStyle::new()).unwrap();
        assert!(css.contains("fill='rgb%287%2C8%2C9%29'"));
        assert!(css.contains("stroke='rgb%287%2C8%2C9%29'"));
    }

    #[test]
    fn translucent_tint_encodes_with_alpha() {
        let renderer = IconRenderer::new(arrow_library());
        let style = IconStyle::new().with_tint(Tint::rgba(0, 0, 0, 0.5));
        let css = renderer.image("arrow", &style).unwrap();
        assert!(css.contains("fill='rgba%280%2C0%2C0%2C0.5%29'"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = IconRenderer::new(arrow_library());
        let style = IconStyle::new().with_opacity(0.25);
        assert_eq!(
            renderer.image("styled", &style).unwrap(),
            renderer.image("styled", &style).unwrap()
        );
    }

    #[test]
    fn background_forces_url_form() {
        let config = RendererConfig::new().with_wrap_url(false);
        let renderer = IconRenderer::with_config(arrow_library(), config);
        let background = renderer
            .background("arrow", &IconStyle::new(), &BackgroundLayout::default())
            .unwrap();
        assert!(background.image.starts_with("url(data:image/svg+xml,"));
    }

    #[test]
    fn background_defaults_and_declaration_order() {
        let renderer = IconRenderer::new(arrow_library());
        let background = renderer
            .background("arrow", &IconStyle::new(), &BackgroundLayout::default())
            .unwrap();

        assert_eq!(background.repeat, "no-repeat");
        assert_eq!(background.position, "left center");
        assert_eq!(background.size, "2em 2em");

        let css = background.to_string();
        let lines: Vec<_> = css.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("background-image: url("));
        assert_eq!(lines[1], "background-repeat: no-repeat;");
        assert_eq!(lines[2], "background-position: left center;");
        assert_eq!(lines[3], "background-size: 2em 2em;");
    }

    #[test]
    fn background_passes_layout_through() {
        let renderer = IconRenderer::new(arrow_library());
        let layout = BackgroundLayout::new()
            .with_position("center")
            .with_size("1em 1em")
            .with_repeat("repeat-x");
        let background = renderer
            .background("arrow", &IconStyle::new(), &layout)
            .unwrap();
        assert_eq!(background.position, "center");
        assert_eq!(background.size, "1em 1em");
        assert_eq!(background.repeat, "repeat-x");
    }

    #[test]
    fn background_propagates_unknown_icon() {
        let renderer = IconRenderer::new(arrow_library());
        let err = renderer
            .background("nonexistent", &IconStyle::new(), &BackgroundLayout::default())
            .unwrap_err();
        assert_eq!(err, RenderError::UnknownIcon("nonexistent".into()));
    }

    #[test]
    fn apply_and_export_config_round_trip() {
        let mut renderer = IconRenderer::new(arrow_library());
        let config = RendererConfig::new()
            .with_default_tint(Tint::rgb(1, 2, 3))
            .with_wrap_url(false);

        renderer.apply_config(&config);
        assert_eq!(renderer.export_config(), config);

        let css = renderer.image("arrow", &IconStyle::new()).unwrap();
        assert!(css.starts_with("data:image/svg+xml,"));
        assert!(css.contains("fill='rgb%281%2C2%2C3%29'"));
    }
}
