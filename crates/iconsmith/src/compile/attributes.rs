//! Attribute serialization and color parameterization.

use log::trace;

use iconsmith_core::{naming::prop_name, shape::Attributes};

/// Ordinal of an overridable fill color within one icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorSlot(usize);

impl ColorSlot {
    /// Returns the zero-based slot index.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Color slots assigned while compiling one icon.
///
/// Slots are handed out in call order starting at 0 and are never reused or
/// deduplicated: two fills with the same value get two slots.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColorSlots {
    defaults: Vec<String>,
}

impl ColorSlots {
    /// Create an empty slot counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next slot to a fill whose literal value is `default`.
    pub fn assign(&mut self, default: &str) -> ColorSlot {
        let slot = ColorSlot(self.defaults.len());
        self.defaults.push(default.to_string());
        slot
    }

    /// Returns the number of slots assigned so far.
    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    /// Returns `true` if no slot has been assigned.
    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }

    /// Returns the literal color of each slot, by slot index.
    pub fn defaults(&self) -> &[String] {
        &self.defaults
    }
}

/// Serialize one element's attributes as component props.
///
/// Each attribute is written on its own line, indented by `indent` spaces:
///
/// - `fill="none"` stays a literal `fill='none'`;
/// - any other `fill` becomes an overridable `getIconColor` call and takes
///   the next slot from `slots`;
/// - every other attribute is written as `camelCaseName="value"`.
pub fn serialize_attributes(attributes: &Attributes, indent: usize, slots: &mut ColorSlots) -> String {
    let mut output = String::new();

    for (name, value) in attributes {
        let line = match (name.as_str(), value.as_str()) {
            ("fill", "none") => "fill='none'".to_string(),
            ("fill", color) => {
                let slot = slots.assign(color);
                trace!(slot = slot.index(), color; "Assigned color slot");
                format!("fill={{getIconColor(color, {}, '{color}')}}", slot.index())
            }
            (name, value) => format!("{}=\"{value}\"", prop_name(name)),
        };
        output.push_str(&format!("\n{:indent$}{line}", ""));
    }

    output
}
