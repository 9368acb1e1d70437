//! Option declarations for commands.
//!
//! An `Opt` describes one named argument a command accepts: the flag token
//! itself (leading dash included), descriptive text for usage output, whether
//! the option carries a value, and whether it must be supplied.

/// Whether an option carries a value or marks a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptKind {
    /// The option carries an arbitrary text value
    Value,

    /// The option marks a condition. The kind is declarative only; the
    /// parser consumes a value token for flags too (see `Registry::parse`).
    Flag,
}

/// A single named option belonging to a command.
#[derive(Debug, Clone)]
pub struct Opt {
    name: String,
    description: String,
    kind: OptKind,
    required: bool,
    /// Declared default, kept as documentation; never applied during parsing
    default: Option<String>,
    /// Last value stored during parsing
    value: Option<String>,
}

impl Opt {
    /// Create an option declaration with no value and no default.
    pub fn new(name: &str, description: &str, kind: OptKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            kind,
            required,
            default: None,
            value: None,
        }
    }

    /// Record a declared default value.
    ///
    /// The default is descriptive only. Parsing never copies it into the
    /// option's value; handlers that want fallback behavior read it through
    /// `default()` themselves.
    pub fn with_default(mut self, default: &str) -> Self {
        self.default = Some(default.to_string());
        self
    }

    /// The flag token as written on the command line, e.g. `-file`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description text used in usage output
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> OptKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The declared default, if any
    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// The value stored during the last parse, if any
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub(crate) fn set_value(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }

    /// Two-line usage entry: the option name with its REQUIRED marker,
    /// then the indented description.
    pub fn usage_block(&self) -> String {
        let marker = if self.required { "REQUIRED" } else { "" };
        format!("  {} {}\n    {}\n", self.name, marker, self.description)
    }
}
