//! Commands and their handlers.
//!
//! A `Command` groups the options one subcommand accepts with an optional
//! handler invoked when the command is matched. Handlers receive the parsed
//! command and read option values through `Command::get`.

use tracing::debug;

use crate::error::{Error, Result};
use crate::opt::Opt;

/// Callback invoked when a parsed command is dispatched.
pub trait Handler {
    /// Handle the matched command, with all option values filled in.
    fn handle(&self, cmd: &Command);
}

/// Any `Fn(&Command)` works as a handler, closures included.
impl<F: Fn(&Command)> Handler for F {
    fn handle(&self, cmd: &Command) {
        self(cmd)
    }
}

/// One subcommand: a name, descriptive text, an optional handler, and the
/// options the command accepts.
///
/// A command without a handler is still matched and parsed; dispatching it
/// falls back to usage output (see `Registry::run`).
pub struct Command {
    name: String,
    description: String,
    handler: Option<Box<dyn Handler>>,
    opts: Vec<Opt>,
}

impl Command {
    /// Create a command with no options.
    pub fn new(name: &str, description: &str, handler: Option<Box<dyn Handler>>) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            handler,
            opts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Options in declaration order.
    pub fn opts(&self) -> &[Opt] {
        &self.opts
    }

    /// Append an option declaration. Declaration order is preserved in
    /// usage output.
    pub fn add_option(&mut self, opt: Opt) {
        self.opts.push(opt);
    }

    /// Find an option by its flag token, first match wins.
    pub fn find_option(&self, name: &str) -> Option<&Opt> {
        self.opts.iter().find(|o| o.name() == name)
    }

    /// The value stored for the named option during the last parse.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.find_option(name).and_then(|o| o.value())
    }

    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Store a value on the named option, overwriting any earlier value.
    pub(crate) fn store_value(&mut self, name: &str, value: &str) -> Result<()> {
        match self.opts.iter_mut().find(|o| o.name() == name) {
            Some(opt) => {
                debug!("Storing value for option: {}", name);
                opt.set_value(value);
                Ok(())
            }
            None => Err(Error::UnknownOption(name.to_string())),
        }
    }

    /// Check that every required option received a value.
    ///
    /// All unfilled required options are reported together so the caller
    /// can print one complete diagnostic instead of stopping at the first.
    pub(crate) fn ensure_required(&self) -> Result<()> {
        let missing: Vec<Opt> = self
            .opts
            .iter()
            .filter(|o| o.is_required() && o.value().is_none())
            .cloned()
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingRequired(missing))
        }
    }

    /// Invoke the handler with the parsed command. No-op without a handler.
    pub(crate) fn dispatch(&self) {
        if let Some(handler) = &self.handler {
            debug!("Dispatching command: {}", self.name);
            handler.handle(self);
        }
    }

    /// One-line synopsis of the options, e.g. ` -file val [-timeout val]`.
    pub(crate) fn usage_inline(&self) -> String {
        let mut line = String::new();
        for opt in &self.opts {
            if opt.is_required() {
                line.push_str(&format!(" {} val", opt.name()));
            } else {
                line.push_str(&format!(" [{} val]", opt.name()));
            }
        }
        line.push('\n');
        line
    }

    /// Per-option usage entries in declaration order.
    pub(crate) fn usage_block(&self) -> String {
        self.opts.iter().map(|o| o.usage_block()).collect()
    }
}
