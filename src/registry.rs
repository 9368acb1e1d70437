//! Command registry, parsing, and dispatch.
//!
//! The `Registry` owns every registered command. It resolves a subcommand
//! from the argument vector, fills option values, validates required
//! options, and either dispatches the matched command's handler or renders
//! usage text for the whole registry.

use std::process;

use tracing::debug;

use crate::command::{Command, Handler};
use crate::error::{Error, Result};
use crate::opt::Opt;

/// Result of a pure parse pass over an argument vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Index of the matched command, options filled and validated
    Matched(usize),

    /// No registered command matched the requested name
    NoMatch,
}

/// Ordered collection of commands plus the parse and dispatch machinery.
pub struct Registry {
    commands: Vec<Command>,
}

impl Registry {
    /// Create a registry with its default command.
    ///
    /// The default command is matched when the first argument names no
    /// subcommand. With a handler its description reads "Default Options",
    /// without one it reads "Show usage".
    pub fn new(default_handler: Option<Box<dyn Handler>>, default_opts: Vec<Opt>) -> Self {
        let description = if default_handler.is_some() {
            "Default Options"
        } else {
            "Show usage"
        };
        let mut registry = Self { commands: Vec::new() };
        registry.add_command("default", description, default_handler, default_opts);
        registry
    }

    /// Register a command. Registration order is preserved in usage output.
    pub fn add_command(
        &mut self,
        name: &str,
        description: &str,
        handler: Option<Box<dyn Handler>>,
        opts: Vec<Opt>,
    ) {
        let mut cmd = Command::new(name, description, handler);
        for opt in opts {
            cmd.add_option(opt);
        }
        self.commands.push(cmd);
    }

    /// Find a command by name, first match wins.
    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name() == name)
    }

    /// Registered commands in registration order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Parse an argument vector against the registered commands.
    ///
    /// `args[0]` is the program name. A first argument not starting with
    /// `-` selects the subcommand; otherwise the default command is
    /// selected. In the remaining arguments, every token starting with `-`
    /// names an option whose value is the next token; other tokens are
    /// skipped. The value token is consumed for flag options too.
    ///
    /// Parsing never prints and never exits. `Outcome::NoMatch` is not an
    /// error; the caller decides how to surface it.
    pub fn parse(&mut self, args: &[String]) -> Result<Outcome> {
        let (name, start) = match args.get(1) {
            Some(arg) if !arg.starts_with('-') => (arg.as_str(), 2),
            _ => ("default", 1),
        };

        let index = match self.commands.iter().position(|c| c.name() == name) {
            Some(index) => index,
            None => {
                debug!("No command matches: {}", name);
                return Ok(Outcome::NoMatch);
            }
        };
        debug!("Matched command: {}", name);

        let mut i = start;
        while i < args.len() {
            let arg = &args[i];
            if arg.starts_with('-') {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| Error::MissingValue(arg.clone()))?;
                self.commands[index].store_value(arg, value)?;
                i += 1;
            }
            i += 1;
        }

        self.commands[index].ensure_required()?;
        Ok(Outcome::Matched(index))
    }

    /// Parse and dispatch, reporting failures to the user.
    ///
    /// Matched commands run their handler. A command without a handler and
    /// an unmatched subcommand both fall back to usage output on stdout.
    /// Parse errors are reported on stderr and terminate the process with
    /// status 1.
    pub fn run(&mut self, args: &[String]) {
        let prog = args.first().map(|s| s.as_str()).unwrap_or("");
        match self.parse(args) {
            Ok(Outcome::Matched(index)) => {
                let cmd = &self.commands[index];
                if cmd.has_handler() {
                    cmd.dispatch();
                } else {
                    print!("{}", self.render_usage(prog));
                }
            }
            Ok(Outcome::NoMatch) => {
                print!("{}", self.render_usage(prog));
            }
            Err(err) => {
                report(&err);
                process::exit(1);
            }
        }
    }

    /// Render usage text for every registered command.
    ///
    /// The default command's line shows the bare program name; every other
    /// line appends the command name.
    pub fn render_usage(&self, prog: &str) -> String {
        let mut output = String::from("Usage:\n");
        for (index, cmd) in self.commands.iter().enumerate() {
            if index == 0 {
                output.push_str(prog);
            } else {
                output.push_str(&format!("{} {}", prog, cmd.name()));
            }
            output.push_str(&cmd.usage_inline());
            output.push_str(&format!("  {}\n", cmd.description()));
            output.push_str(&cmd.usage_block());
        }
        output
    }
}

/// Print the diagnostic for a parse failure to stderr.
fn report(err: &Error) {
    match err {
        Error::MissingRequired(missing) => {
            for opt in missing {
                eprintln!("Required option {} missing", opt.name());
                eprint!("{}", opt.usage_block());
            }
        }
        other => eprintln!("{}", other),
    }
}
