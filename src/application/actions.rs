//! Arithmetic actions for the `add` and `sub` commands.

use tracing::instrument;

use crate::domain::{DomainError, DomainResult, ResolvedFlags};

/// Typed operands shared by both arithmetic commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operands {
    pub n1: i32,
    pub n2: i32,
}

impl TryFrom<&ResolvedFlags> for Operands {
    type Error = DomainError;

    fn try_from(flags: &ResolvedFlags) -> Result<Self, Self::Error> {
        Ok(Self {
            n1: flags.require("n1")?,
            n2: flags.require("n2")?,
        })
    }
}

/// `{n1} + {n2} = {sum}`, wrapping on 32-bit overflow.
#[instrument(level = "debug")]
pub fn add(flags: &ResolvedFlags) -> DomainResult<String> {
    let Operands { n1, n2 } = Operands::try_from(flags)?;
    Ok(format!("{} + {} = {}", n1, n2, n1.wrapping_add(n2)))
}

/// `{n1} - {n2} = {difference}`, wrapping on 32-bit overflow.
#[instrument(level = "debug")]
pub fn sub(flags: &ResolvedFlags) -> DomainResult<String> {
    let Operands { n1, n2 } = Operands::try_from(flags)?;
    Ok(format!("{} - {} = {}", n1, n2, n1.wrapping_sub(n2)))
}
