//! Color values and their URI-safe style-sheet encoding.
//!
//! A [`Tint`] is the color currency of the crate: icon fills and strokes
//! are tints, and the renderer's configured default is a tint. Encoding
//! produces the percent-encoded CSS color function embedded in data URIs.

use palette::{Srgb, Srgba};
use serde::{Deserialize, Serialize};

/// A 4-channel color used to tint icon fills and strokes.
///
/// Red, green and blue are kept on the 0-255 scale as `f32` so fractional
/// channels coming out of color-space conversions survive until encoding,
/// where they are rounded to the nearest integer. Alpha stays in 0.0-1.0.
///
/// Channel ranges are not validated; callers hand in normalized values.
///
/// # Example
///
/// ```
/// use icontint::Tint;
///
/// assert_eq!(Tint::rgb(255, 128, 0).encode(), "rgb%28255%2C128%2C0%29");
/// assert_eq!(Tint::rgba(0, 0, 0, 0.5).encode(), "rgba%280%2C0%2C0%2C0.5%29");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
pub struct Tint {
    /// Red channel on the 0-255 scale.
    pub r: f32,

    /// Green channel on the 0-255 scale.
    pub g: f32,

    /// Blue channel on the 0-255 scale.
    pub b: f32,

    /// Opacity in 0.0-1.0. Exactly 1.0 means fully opaque.
    #[serde(default = "opaque")]
    pub alpha: f32,
}

impl Tint {
    /// Creates an opaque tint from 8-bit channels.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a tint from 8-bit channels and an alpha in 0.0-1.0.
    pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        Self {
            r: r as f32,
            g: g as f32,
            b: b as f32,
            alpha,
        }
    }

    /// Creates a tint from raw channel values.
    ///
    /// Channels are on the 0-255 scale and may be fractional; they are
    /// rounded when the tint is encoded, not here.
    pub fn from_channels(r: f32, g: f32, b: f32, alpha: f32) -> Self {
        Self { r, g, b, alpha }
    }

    /// Returns this tint with a different alpha.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Returns true if the alpha channel is exactly 1.0.
    pub fn is_opaque(&self) -> bool {
        self.alpha == 1.0
    }

    /// Encodes the tint as a percent-encoded CSS color function.
    ///
    /// Channels are rounded to the nearest integer. Opaque tints encode
    /// as `rgb%28R%2CG%2CB%29` with no alpha term; anything else encodes
    /// as `rgba%28R%2CG%2CB%2CA%29`. Only `(`, `)` and `,` need escaping
    /// inside a data URI, so the rest of the call stays readable.
    pub fn encode(&self) -> String {
        let r = self.r.round() as u8;
        let g = self.g.round() as u8;
        let b = self.b.round() as u8;

        if self.is_opaque() {
            format!("rgb%28{r}%2C{g}%2C{b}%29")
        } else {
            format!("rgba%28{r}%2C{g}%2C{b}%2C{}%29", self.alpha)
        }
    }
}

/// Opaque black.
impl Default for Tint {
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl From<Srgb<u8>> for Tint {
    fn from(color: Srgb<u8>) -> Self {
        Self::rgb(color.red, color.green, color.blue)
    }
}

impl From<Srgb<f32>> for Tint {
    fn from(color: Srgb<f32>) -> Self {
        Self::from_channels(color.red * 255.0, color.green * 255.0, color.blue * 255.0, 1.0)
    }
}

impl From<Srgba<f32>> for Tint {
    fn from(color: Srgba<f32>) -> Self {
        Self::from_channels(
            color.color.red * 255.0,
            color.color.green * 255.0,
            color.color.blue * 255.0,
            color.alpha,
        )
    }
}

fn opaque() -> f32 {
    1.0
}

// ============================================================================
// Tests
// ============================================================================
