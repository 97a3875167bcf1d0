//! Help text rendering.
//!
//! The command tree is mirrored into a `clap::Command` purely for formatting;
//! parsing stays with the domain layer.

use clap::{Arg, ArgAction, Command};
use generational_arena::Index;

use crate::domain::{CommandTree, FlagSchema};

/// True for the tokens that request help instead of running a command.
pub fn is_help_flag(token: &str) -> bool {
    matches!(token, "-h" | "--help")
}

/// True if a help flag appears in `tokens` outside a flag value position.
///
/// A token following a known `--name` without inline value is that flag's
/// value, so `--n1 --help` is an invalid value rather than a help request.
pub fn requested(schema: &FlagSchema, tokens: &[String]) -> bool {
    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        if is_help_flag(token) {
            return true;
        }
        if let Some(name) = token.strip_prefix("--") {
            if !name.contains('=') && schema.get(name).is_some() {
                iter.next();
            }
        }
    }
    false
}

/// Build a `clap::Command` describing `idx` and its subtree.
pub fn to_clap(tree: &CommandTree, idx: Index) -> Command {
    let Some(node) = tree.get_node(idx) else {
        return Command::new(tree.path(idx));
    };
    let spec = &node.spec;

    let mut cmd = Command::new(spec.name.clone())
        .bin_name(tree.path(idx))
        .disable_help_subcommand(true)
        .disable_version_flag(true);
    if !spec.short.is_empty() {
        cmd = cmd.about(spec.short.clone());
    }
    if !spec.long.is_empty() {
        cmd = cmd.long_about(spec.long.clone());
    }

    for flag in spec.schema.iter() {
        let mut arg = Arg::new(flag.name.clone())
            .long(flag.name.clone())
            .value_name("INT")
            .action(ArgAction::Set)
            .help(flag.usage.clone())
            .required(flag.required);
        if let Some(default) = flag.default {
            arg = arg.default_value(default.to_string());
        }
        cmd = cmd.arg(arg);
    }

    for (child, _) in tree.children(idx) {
        cmd = cmd.subcommand(to_clap(tree, child));
    }
    cmd
}

/// Plain-text long help for the command at `idx`.
pub fn render(tree: &CommandTree, idx: Index) -> String {
    to_clap(tree, idx).render_long_help().to_string()
}
