//! Registration of the calculator's command tree.

use crate::application::actions;
use crate::domain::{CommandSpec, CommandTree, DomainResult, FlagSchema, FlagSpec};

pub const ROOT_NAME: &str = "calc";

fn operand_schema() -> DomainResult<FlagSchema> {
    FlagSchema::new()
        .flag(FlagSpec::new("n1", "first operand, e.g. --n1 1").required())?
        .flag(FlagSpec::new("n2", "second operand, e.g. --n2 2").required())
}

/// Build the full command tree: `calc` with `add` and `sub` beneath it.
///
/// Called once at process start; the returned tree is owned by the dispatcher.
pub fn build_command_tree() -> DomainResult<CommandTree> {
    let mut tree = CommandTree::new(
        CommandSpec::new(ROOT_NAME)
            .short("A CLI calculator")
            .long("A CLI calculator that can add and subtract two numbers."),
    )?;
    let root = tree.root();

    tree.register(
        root,
        CommandSpec::new("add")
            .short("Add operator")
            .long("Add operator, adds two integers and returns the result.")
            .schema(operand_schema()?)
            .action(actions::add),
    )?;
    tree.register(
        root,
        CommandSpec::new("sub")
            .short("Sub operator")
            .long("Sub operator, subtracts two integers and returns the result.")
            .schema(operand_schema()?)
            .action(actions::sub),
    )?;

    Ok(tree)
}
