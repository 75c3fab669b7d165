//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! `tokens` and `trace` read the same input and accept each other's flags,
//! with the irrelevant ones hidden from `--help`, so switching between them
//! only means changing the subcommand.

use clap::Command;

use super::args::*;

/// Add hidden token-output args (for commands that don't print tokens).
fn with_hidden_tokens_args(cmd: Command) -> Command {
    cmd.arg(spans_arg().hide(true))
        .arg(coalesce_arg().hide(true))
        .arg(json_arg().hide(true))
}

/// Add hidden trace args (for commands that don't trace).
fn with_hidden_trace_args(cmd: Command) -> Command {
    cmd.arg(verbose_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("pqlex")
        .about("Tokenize Power Query (M) source the way an editor highlights it")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tokens_command())
        .subcommand(trace_command())
        .subcommand(dump_command())
        .subcommand(config_command())
        .subcommand(lang_command())
}

/// Print the tokens of a document, grouped by line.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Print the tokens of a document, grouped by line")
        .override_usage(
            "\
  pqlex tokens <SOURCE>
  pqlex tokens -s <TEXT> [-l <LANG>]",
        )
        .after_help(
            r#"EXAMPLES:
  pqlex tokens query.pq                 # one token per line
  pqlex tokens query.pq --coalesce      # merge runs of the same class
  pqlex tokens -s 'let x = 1' --spans   # inline source with byte spans
  pqlex tokens query.pq --json          # machine-readable output"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(lang_arg())
        .arg(spans_arg())
        .arg(coalesce_arg())
        .arg(json_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_trace_args(cmd)
}

/// Trace rule matching for debugging a table.
pub fn trace_command() -> Command {
    let cmd = Command::new("trace")
        .about("Trace rule matches, state pushes and pops")
        .override_usage(
            "\
  pqlex trace <SOURCE>
  pqlex trace -s <TEXT> [-l <LANG>] [-v|-vv]",
        )
        .after_help(
            r#"EXAMPLES:
  pqlex trace query.pq                  # matches and stack changes
  pqlex trace -s '"a""b"' -v            # also show rule patterns"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(lang_arg())
        .arg(verbose_arg())
        .arg(color_arg());

    // Hidden unified flags
    with_hidden_tokens_args(cmd)
}

/// Show the flattened rule table.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the flattened rule table")
        .override_usage("  pqlex dump [-l <LANG>]")
        .arg(lang_arg())
        .arg(color_arg())
}

/// Print the editor language configuration.
pub fn config_command() -> Command {
    Command::new("config")
        .about("Print the editor language configuration as JSON")
        .override_usage("  pqlex config [-l <LANG>] [--compact]")
        .arg(lang_arg())
        .arg(compact_arg())
}

/// Language information commands.
pub fn lang_command() -> Command {
    Command::new("lang")
        .about("Language information")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new("list").about("List builtin languages with aliases"))
}
