//! Demo host for the refract library.
//!
//! Registers a handful of subcommands and hands the process arguments to
//! the registry. The integration tests spawn this binary to check the
//! user-visible behavior end to end.

use refract::{Command, Opt, OptKind, Registry};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let mut registry = Registry::new(
        Some(Box::new(|cmd: &Command| {
            println!("default verbose={}", cmd.get("-verbose").unwrap_or("off"));
        })),
        vec![Opt::new("-verbose", "Enable verbose output", OptKind::Flag, false)],
    );

    registry.add_command(
        "build",
        "Build the project",
        Some(Box::new(|cmd: &Command| {
            println!("build target={}", cmd.get("-target").unwrap_or("debug"));
        })),
        vec![Opt::new("-target", "Build target", OptKind::Value, false)],
    );

    registry.add_command(
        "run",
        "Run a file",
        Some(Box::new(|cmd: &Command| {
            // Declared defaults are never applied by the parser; consult
            // them explicitly when falling back.
            let timeout = cmd
                .get("-timeout")
                .or_else(|| cmd.find_option("-timeout").and_then(|o| o.default()))
                .unwrap_or("0");
            println!("run file={} timeout={}", cmd.get("-file").unwrap_or(""), timeout);
        })),
        vec![
            Opt::new("-file", "File to run", OptKind::Value, true),
            Opt::new("-timeout", "Timeout in seconds", OptKind::Value, false).with_default("30"),
        ],
    );

    registry.add_command(
        "copy",
        "Copy a file",
        Some(Box::new(|cmd: &Command| {
            println!(
                "copy from={} to={}",
                cmd.get("-from").unwrap_or(""),
                cmd.get("-to").unwrap_or("")
            );
        })),
        vec![
            Opt::new("-from", "Source path", OptKind::Value, true),
            Opt::new("-to", "Target path", OptKind::Value, true),
        ],
    );

    registry.add_command("clean", "Remove build artifacts", None, Vec::new());

    registry.run(&args);
}
