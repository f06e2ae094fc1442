//! Dispatch table of the aggregator component.

use std::fmt;

use iconsmith_core::naming::ComponentName;

/// The React `key` given to an icon instance in the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceKey {
    /// One-based position among the sprite's symbols.
    Symbol(usize),
    /// One-based position among the standalone files.
    Local(usize),
}

impl fmt::Display for InstanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbol(position) => write!(f, "{position}"),
            Self::Local(position) => write!(f, "L{position}"),
        }
    }
}

/// One `case` of the aggregator's `switch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseEntry {
    lookup_key: String,
    component_name: ComponentName,
    instance_key: InstanceKey,
}

impl CaseEntry {
    /// Returns the key the entry dispatches on.
    pub fn lookup_key(&self) -> &str {
        &self.lookup_key
    }

    fn render(&self) -> String {
        format!(
            "    case '{}':\n      return <{} key=\"{}\" {{...rest}} />;\n",
            self.lookup_key, self.component_name, self.instance_key
        )
    }
}

/// Ordered collection of case entries.
///
/// Lookup keys are not checked for uniqueness; with duplicates the first
/// entry wins at runtime.
#[derive(Debug, Default, Clone)]
pub struct CaseTable {
    entries: Vec<CaseEntry>,
}

impl CaseTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its rendered text.
    pub fn add_entry(
        &mut self,
        lookup_key: impl Into<String>,
        component_name: ComponentName,
        instance_key: InstanceKey,
    ) -> String {
        let entry = CaseEntry {
            lookup_key: lookup_key.into(),
            component_name,
            instance_key,
        };
        let rendered = entry.render();
        self.entries.push(entry);
        rendered
    }

    /// Returns the entries in insertion order.
    pub fn entries(&self) -> &[CaseEntry] {
        &self.entries
    }

    /// Returns `true` if an entry already dispatches on `lookup_key`.
    pub fn contains_key(&self, lookup_key: &str) -> bool {
        self.entries.iter().any(|entry| entry.lookup_key == lookup_key)
    }

    /// Render every entry, in insertion order.
    pub fn render(&self) -> String {
        self.entries.iter().map(CaseEntry::render).collect()
    }
}
