//! Component name and lookup key derivation.
//!
//! Every generated icon needs two names:
//!
//! - a [`ComponentName`]: the PascalCase identifier of the generated
//!   component, always derived from the full raw icon id;
//! - a lookup key: the string the aggregator dispatches on. When a
//!   [`PrefixPattern`] is configured, the key is the raw id with that prefix
//!   (and any separator symbols following it) trimmed away.
//!
//! # Example
//!
//! ```
//! use iconsmith_core::naming::{PrefixPattern, derive_component_name};
//!
//! let prefix = PrefixPattern::new("icon-").unwrap();
//! let name = derive_component_name("icon-arrow-left", Some(&prefix));
//!
//! assert_eq!(name.component_name().as_str(), "IconArrowLeft");
//! assert_eq!(name.lookup_key(), "arrow-left");
//! ```

use std::fmt;

use heck::{ToLowerCamelCase, ToUpperCamelCase};
use log::trace;
use regex::Regex;
use thiserror::Error;

/// Separator characters trimmed from the front of a key after prefix removal.
const SEPARATOR_SYMBOLS: &[char] = &['-', '_', '.', '=', '+', '#', '@', '!', '~', '*'];

/// Naming errors.
#[derive(Debug, Error)]
pub enum NamingError {
    #[error("invalid icon prefix pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Identifier of a generated component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentName(String);

impl ComponentName {
    /// Derive a component name from a raw icon id.
    ///
    /// The id is split into words (see [`pascal_case`]) and every word is
    /// capitalized, so `icon-24gl-home` becomes `Icon24GlHome`.
    pub fn from_raw_id(raw_id: &str) -> Self {
        Self(pascal_case(raw_id))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A compiled icon id prefix pattern.
///
/// The pattern is a regular expression matched against the start of raw icon
/// ids; it must leave at least one character behind to match.
#[derive(Debug, Clone)]
pub struct PrefixPattern {
    pattern: String,
    regex: Regex,
}

impl PrefixPattern {
    /// Compile a prefix pattern.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::InvalidPattern`] if the pattern is not a valid
    /// regular expression.
    pub fn new(pattern: &str) -> Result<Self, NamingError> {
        let regex = Regex::new(&format!("^{pattern}(.+?)$")).map_err(|source| {
            NamingError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Returns the pattern as configured.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the lookup key for `raw_id`.
    ///
    /// Ids that do not match the pattern are returned unchanged.
    pub fn trim<'a>(&self, raw_id: &'a str) -> &'a str {
        match self.regex.captures(raw_id).and_then(|caps| caps.get(1)) {
            Some(rest) => strip_separators(rest.as_str()),
            None => raw_id,
        }
    }
}

/// Strip a leading run of separator symbols, always keeping at least one
/// character.
fn strip_separators(value: &str) -> &str {
    let stripped = value.trim_start_matches(SEPARATOR_SYMBOLS);
    if stripped.is_empty() {
        // Separators are ASCII, so the last character is a single byte
        &value[value.len().saturating_sub(1)..]
    } else {
        stripped
    }
}

/// The two names of one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedName {
    component_name: ComponentName,
    lookup_key: String,
}

impl DerivedName {
    /// Returns the generated component identifier.
    pub fn component_name(&self) -> &ComponentName {
        &self.component_name
    }

    /// Returns the key the aggregator dispatches on.
    pub fn lookup_key(&self) -> &str {
        &self.lookup_key
    }

    /// Split into component name and lookup key.
    pub fn into_parts(self) -> (ComponentName, String) {
        (self.component_name, self.lookup_key)
    }
}

/// Derive the names of a sprite symbol.
///
/// The component name is the PascalCase form of the whole `raw_id`; the
/// prefix only affects the lookup key.
pub fn derive_component_name(raw_id: &str, prefix: Option<&PrefixPattern>) -> DerivedName {
    let lookup_key = prefix.map_or(raw_id, |prefix| prefix.trim(raw_id));
    let component_name = ComponentName::from_raw_id(raw_id);

    trace!(raw_id, lookup_key, component_name = component_name.as_str(); "Derived icon names");

    DerivedName {
        component_name,
        lookup_key: lookup_key.to_string(),
    }
}

/// Derive the names of a standalone file.
///
/// The component name is the configured prefix, first character
/// capitalized, followed by the PascalCase form of `name`. The lookup key is
/// `name` itself.
pub fn derive_local_component_name(name: &str, prefix: Option<&PrefixPattern>) -> DerivedName {
    let mut component_name = prefix.map(|p| capitalize(p.as_str())).unwrap_or_default();
    component_name.push_str(&pascal_case(name));

    DerivedName {
        component_name: ComponentName(component_name),
        lookup_key: name.to_string(),
    }
}

/// Convert a hyphenated markup attribute name to its camelCase prop name.
///
/// ```
/// use iconsmith_core::naming::prop_name;
///
/// assert_eq!(prop_name("stroke-width"), "strokeWidth");
/// assert_eq!(prop_name("d"), "d");
/// ```
pub fn prop_name(attribute_name: &str) -> String {
    attribute_name.to_lower_camel_case()
}

/// Join the words of `value` with each word capitalized and the rest of
/// the word lowercased.
///
/// Words break at every non-alphanumeric character, at a lowercase letter
/// followed by an uppercase one, before the last capital of an uppercase
/// run followed by a lowercase letter (`SVGIcon` is `SVG Icon`), and between
/// letters and digits.
fn pascal_case(value: &str) -> String {
    words(value).map(|word| word.to_upper_camel_case()).collect()
}

fn words(value: &str) -> impl Iterator<Item = &str> {
    let chars: Vec<(usize, char)> = value.char_indices().collect();
    let mut words = Vec::new();
    let mut start = None;

    for (i, &(pos, c)) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            if let Some(word_start) = start.take() {
                words.push(&value[word_start..pos]);
            }
            continue;
        }

        let Some(word_start) = start else {
            start = Some(pos);
            continue;
        };

        // `start` is set, so the previous character belongs to this word
        let prev = chars[i - 1].1;
        let next = chars.get(i + 1).map(|&(_, next)| next);
        let boundary = (prev.is_lowercase() && c.is_uppercase())
            || prev.is_alphabetic() != c.is_alphabetic()
            || (prev.is_uppercase() && c.is_uppercase() && next.is_some_and(char::is_lowercase));

        if boundary {
            words.push(&value[word_start..pos]);
            start = Some(pos);
        }
    }
    if let Some(word_start) = start {
        words.push(&value[word_start..]);
    }

    words.into_iter()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
