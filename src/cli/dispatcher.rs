//! Argument dispatch: resolve the command, validate flags, run the action.

use std::io::Write;

use generational_arena::Index;
use tracing::{debug, instrument, warn};

use crate::cli::error::{CliError, CliResult};
use crate::cli::{help, output};
use crate::domain::{CommandTree, DomainError, Resolution};
use crate::exitcode;
use crate::infrastructure::ConfigProvider;

/// Config key holding the name used in the root greeting.
pub const USERNAME_KEY: &str = "username";

/// Drives one invocation against an owned command tree.
pub struct Dispatcher {
    tree: CommandTree,
    config: Option<Box<dyn ConfigProvider>>,
}

impl Dispatcher {
    pub fn new(tree: CommandTree) -> Self {
        Self { tree, config: None }
    }

    /// Attach an optional configuration source (used only for the greeting).
    pub fn with_config(mut self, config: Box<dyn ConfigProvider>) -> Self {
        self.config = Some(config);
        self
    }

    /// Run `args` (program name excluded) and return the process exit code.
    ///
    /// Results and help go to `out`; a single `error: ...` line goes to `err`.
    #[instrument(level = "debug", skip(self, out, err))]
    pub fn execute(&self, args: &[String], out: &mut dyn Write, err: &mut dyn Write) -> i32 {
        match self.run(args, out) {
            Ok(()) => exitcode::OK,
            Err(e) => {
                debug!(error = ?e, "invocation failed");
                if let Err(io) = output::error(err, &e) {
                    warn!("cannot write error message: {}", io);
                }
                e.exit_code()
            }
        }
    }

    fn run(&self, args: &[String], out: &mut dyn Write) -> CliResult<()> {
        let Resolution { node, remaining } = self.tree.lookup(args)?;
        let command = self.tree.get_node(node).ok_or(DomainError::UnknownNode)?;

        if help::requested(&command.spec.schema, remaining) {
            debug!(command = %self.tree.path(node), "help requested");
            return self.print_help(node, out);
        }

        let flags = command.spec.schema.parse(remaining)?;

        match command.spec.action {
            Some(action) => {
                let line = action(&flags)?;
                output::info(out, &line)?;
            }
            None => {
                if node == self.tree.root() {
                    if let Some(name) = self.username() {
                        output::greeting(out, &name)?;
                    }
                }
                self.print_help(node, out)?;
            }
        }
        Ok(())
    }

    fn username(&self) -> Option<String> {
        self.config
            .as_ref()
            .and_then(|c| c.get(USERNAME_KEY))
            .filter(|name| !name.trim().is_empty())
    }

    fn print_help(&self, node: Index, out: &mut dyn Write) -> CliResult<()> {
        let text = help::render(&self.tree, node);
        out.write_all(text.as_bytes()).map_err(CliError::Output)
    }
}
