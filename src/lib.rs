//! icontint: color-parameterized inline icons for style-sheet generation
//!
//! This crate turns a registry of per-icon templates into URI-encoded
//! inline images: each render tints an icon's fill and stroke, injects an
//! optional opacity term, and emits a `data:` URI ready to use as a CSS
//! image value, bare or wrapped as `url(...)`. The registry itself is
//! normally emitted by an external generation step over a directory of
//! SVG sources; [`icon_library!`] declares the same shape by hand.
//!
//! # Example
//!
//! ```
//! use icontint::{IconRenderer, IconStyle, Library, SvgTemplate, Tint};
//!
//! let library = Library::builder()
//!     .icon(
//!         "arrow",
//!         "arrow",
//!         SvgTemplate::from_svg("<svg fill='%FILL%' stroke='%STROKE%'/>"),
//!     )
//!     .build()
//!     .unwrap();
//!
//! let renderer = IconRenderer::new(library);
//! let css = renderer
//!     .image("arrow", &IconStyle::new().with_tint(Tint::rgb(0, 0, 0)))
//!     .unwrap();
//!
//! assert_eq!(
//!     css,
//!     "url(data:image/svg+xml,<svg fill='rgb%280%2C0%2C0%29' stroke='rgb%280%2C0%2C0%29'/>)"
//! );
//! ```
//!
//! # Folders and backgrounds
//!
//! Icons can be grouped into folders for listing, and a background
//! shorthand bundles the image with repeat, position and size:
//!
//! ```
//! use icontint::{
//!     BackgroundLayout, IconRenderer, IconStyle, RendererConfig, Tint, icon_library,
//! };
//!
//! let library = icon_library! {
//!     "menu": "menu" = "<svg fill='%FILL%'/>",
//!     "mail": "mail" in "social" = "<svg fill='%FILL%'/>",
//! }
//! .unwrap();
//!
//! let config = RendererConfig::new().with_default_tint(Tint::rgb(255, 255, 255));
//! let renderer = IconRenderer::with_config(library, config);
//!
//! assert_eq!(renderer.library().names(Some("social")), vec!["mail"]);
//!
//! let background = renderer
//!     .background("menu", &IconStyle::new(), &BackgroundLayout::default())
//!     .unwrap();
//! assert!(
//!     background
//!         .to_string()
//!         .starts_with("background-image: url(data:image/svg+xml,")
//! );
//! ```

mod config;
mod library;
mod renderer;
mod template;
mod tint;

pub use config::RendererConfig;
pub use library::{IconEntry, Library, LibraryBuilder, LibraryError};
pub use renderer::{
    Background, BackgroundLayout, Configurable, IconRenderer, IconStyle, RenderError, css_url,
};
pub use template::{IconTemplate, SvgTemplate};
pub use tint::Tint;
