//! Icon registry: ordered metadata plus the template resolved per icon.
//!
//! A [`Library`] is built once, normally from the output of the icon
//! generation step, and read for the lifetime of the process. Icons keep
//! their registration order; folder listings and iteration never re-sort.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::template::IconTemplate;

// ============================================================================
// IconEntry
// ============================================================================

/// Metadata recorded for a registered icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    /// Display name returned by folder listings.
    pub name: String,

    /// Grouping folder, if the icon was registered under one.
    pub folder: Option<String>,
}

struct RegisteredIcon {
    key: String,
    entry: IconEntry,
    template: Box<dyn IconTemplate + Send + Sync>,
}

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while building a [`Library`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LibraryError {
    /// The same icon key was registered more than once.
    #[error("duplicate icon key `{0}`")]
    DuplicateKey(String),
}

// ============================================================================
// Library
// ============================================================================

/// Ordered, read-only registry of icons and their templates.
///
/// Registering an icon always pairs its metadata with its template, so a
/// registry entry without a resolvable template cannot exist. Lookups are
/// linear scans; libraries hold icon sets, not databases.
///
/// # Example
///
/// ```
/// use icontint::{Library, SvgTemplate};
///
/// let library = Library::builder()
///     .icon("arrow", "arrow", SvgTemplate::from_svg("<svg/>"))
///     .icon_in("mail", "mail", "social", SvgTemplate::from_svg("<svg/>"))
///     .build()
///     .unwrap();
///
/// assert_eq!(library.names(None), vec!["arrow"]);
/// assert_eq!(library.names(Some("social")), vec!["mail"]);
/// ```
pub struct Library {
    icons: Vec<RegisteredIcon>,
}

impl Library {
    /// Starts building a library.
    pub fn builder() -> LibraryBuilder {
        LibraryBuilder::default()
    }

    /// Resolves an icon key to its template.
    pub fn template(&self, key: &str) -> Option<&(dyn IconTemplate + Send + Sync)> {
        self.find(key).map(|icon| icon.template.as_ref())
    }

    /// Returns the metadata recorded for an icon key.
    pub fn entry(&self, key: &str) -> Option<&IconEntry> {
        self.find(key).map(|icon| &icon.entry)
    }

    /// Returns true if the key names a registered icon.
    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    /// Lists the names of icons registered under the given folder.
    ///
    /// `None` matches only icons registered without a folder. Names come
    /// back in registration order; the result may be empty.
    pub fn names(&self, folder: Option<&str>) -> Vec<&str> {
        self.icons
            .iter()
            .filter(|icon| icon.entry.folder.as_deref() == folder)
            .map(|icon| icon.entry.name.as_str())
            .collect()
    }

    /// Returns the number of registered icons.
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns true if no icons are registered.
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Iterates over `(key, entry)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IconEntry)> {
        self.icons
            .iter()
            .map(|icon| (icon.key.as_str(), &icon.entry))
    }

    fn find(&self, key: &str) -> Option<&RegisteredIcon> {
        self.icons.iter().find(|icon| icon.key == key)
    }
}

impl fmt::Debug for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Library")
            .field("keys", &self.icons.iter().map(|i| i.key.as_str()).collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// LibraryBuilder
// ============================================================================

/// Accumulates icon registrations and validates them into a [`Library`].
#[derive(Default)]
pub struct LibraryBuilder {
    icons: Vec<RegisteredIcon>,
}

impl LibraryBuilder {
    /// Registers an icon without a folder.
    pub fn icon(
        mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        template: impl IconTemplate + Send + Sync + 'static,
    ) -> Self {
        self.push(key.into(), name.into(), None, template);
        self
    }

    /// Registers an icon under a folder.
    pub fn icon_in(
        mut self,
        key: impl Into<String>,
        name: impl Into<String>,
        folder: impl Into<String>,
        template: impl IconTemplate + Send + Sync + 'static,
    ) -> Self {
        self.push(key.into(), name.into(), Some(folder.into()), template);
        self
    }

    /// Validates the registrations and produces the library.
    pub fn build(self) -> Result<Library, LibraryError> {
        let mut seen = HashSet::new();
        for icon in &self.icons {
            if !seen.insert(icon.key.as_str()) {
                return Err(LibraryError::DuplicateKey(icon.key.clone()));
            }
        }
        Ok(Library { icons: self.icons })
    }

    fn push(
        &mut self,
        key: String,
        name: String,
        folder: Option<String>,
        template: impl IconTemplate + Send + Sync + 'static,
    ) {
        self.icons.push(RegisteredIcon {
            key,
            entry: IconEntry { name, folder },
            template: Box::new(template),
        });
    }
}

// ============================================================================
// icon_library!
// ============================================================================

/// Declares a [`Library`] from literal icon definitions.
///
/// Each entry is `"key": "name" = markup`, with an optional
/// `in "folder"` between the name and the markup. Markup expressions are
/// wrapped via [`SvgTemplate::from_svg`](crate::SvgTemplate::from_svg),
/// and the expansion yields `Result<Library, LibraryError>` from
/// [`LibraryBuilder::build`].
///
/// # Example
///
/// ```
/// use icontint::icon_library;
///
/// let library = icon_library! {
///     "arrow": "arrow" = "<svg fill='%FILL%'/>",
///     "mail": "mail" in "social" = "<svg fill='%FILL%'/>",
/// }
/// .unwrap();
///
/// assert_eq!(library.names(Some("social")), vec!["mail"]);
/// ```
#[macro_export]
macro_rules! icon_library {
    ($( $key:literal : $name:literal $(in $folder:literal)? = $svg:expr ),+ $(,)?) => {{
        let mut builder = $crate::Library::builder();
        $(
            builder = $crate::icon_library!(@add builder, $key, $name, ($($folder)?), $svg);
        )+
        builder.build()
    }};
    (@add $builder:expr, $key:literal, $name:literal, (), $svg:expr) => {
        $builder.icon($key, $name, $crate::SvgTemplate::from_svg($svg))
    };
    (@add $builder:expr, $key:literal, $name:literal, ($folder:literal), $svg:expr) => {
        $builder.icon_in($key, $name, $folder, $crate::SvgTemplate::from_svg($svg))
    };
}

// ============================================================================
// Tests
// ============================================================================
