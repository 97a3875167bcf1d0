//! Flag schema declaration and token parsing.
//!
//! Every flag is a named 32-bit signed integer. A schema is declared once per
//! command; parsing produces a fresh [`ResolvedFlags`] per invocation.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};

/// Declaration of a single integer flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    /// Long name, used as `--name`
    pub name: String,
    /// One-line usage text shown in help
    pub usage: String,
    /// Value applied when the flag is absent
    pub default: Option<i32>,
    /// Whether the flag must be present after defaults are applied
    pub required: bool,
}

impl FlagSpec {
    pub fn new(name: impl Into<String>, usage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage: usage.into(),
            default: None,
            required: false,
        }
    }

    pub fn default_value(mut self, value: i32) -> Self {
        self.default = Some(value);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Ordered set of flag declarations for one command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagSchema {
    flags: Vec<FlagSpec>,
}

impl FlagSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a flag declaration. Names must be unique within the schema.
    pub fn flag(mut self, spec: FlagSpec) -> DomainResult<Self> {
        if spec.name.is_empty() || spec.name.starts_with('-') || spec.name.contains('=') {
            return Err(DomainError::InvalidName(spec.name));
        }
        if self.get(&spec.name).is_some() {
            return Err(DomainError::DuplicateFlag(spec.name));
        }
        self.flags.push(spec);
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&FlagSpec> {
        self.flags.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlagSpec> {
        self.flags.iter()
    }

    /// Parse `tokens` against this schema.
    ///
    /// Accepts `--name=value` and `--name value`. Repeated flags keep the last
    /// value. Defaults are applied for absent flags, then every required flag
    /// must be present; all missing ones are reported together.
    #[instrument(level = "debug", skip(self))]
    pub fn parse(&self, tokens: &[String]) -> DomainResult<ResolvedFlags> {
        let mut values: BTreeMap<String, i32> = BTreeMap::new();
        let mut iter = tokens.iter();

        while let Some(token) = iter.next() {
            let Some(body) = token.strip_prefix("--") else {
                if token.starts_with('-') && token.len() > 1 {
                    return Err(DomainError::UnknownFlag(token.clone()));
                }
                return Err(DomainError::UnexpectedArgument(token.clone()));
            };

            let (name, inline) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value.to_string())),
                None => (body, None),
            };

            let spec = self
                .get(name)
                .ok_or_else(|| DomainError::UnknownFlag(format!("--{name}")))?;

            let raw = match inline {
                Some(value) => value,
                None => iter
                    .next()
                    .cloned()
                    .ok_or_else(|| DomainError::MissingValue(spec.name.clone()))?,
            };

            let value = parse_int(&spec.name, &raw)?;
            if let Some(previous) = values.insert(spec.name.clone(), value) {
                debug!(flag = %spec.name, previous, value, "flag repeated, last value wins");
            }
        }

        for spec in &self.flags {
            if let Some(default) = spec.default {
                values.entry(spec.name.clone()).or_insert(default);
            }
        }

        let missing: Vec<String> = self
            .flags
            .iter()
            .filter(|f| f.required && !values.contains_key(&f.name))
            .map(|f| f.name.clone())
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::MissingRequiredFlag(missing));
        }

        Ok(ResolvedFlags { values })
    }
}

fn parse_int(flag: &str, raw: &str) -> DomainResult<i32> {
    raw.parse::<i32>().map_err(|_| DomainError::InvalidValue {
        flag: flag.to_string(),
        value: raw.to_string(),
    })
}

/// Validated flag values for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFlags {
    values: BTreeMap<String, i32>,
}

impl ResolvedFlags {
    pub fn get(&self, name: &str) -> Option<i32> {
        self.values.get(name).copied()
    }

    /// Value of a flag the action cannot run without.
    pub fn require(&self, name: &str) -> DomainResult<i32> {
        self.get(name)
            .ok_or_else(|| DomainError::MissingRequiredFlag(vec![name.to_string()]))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
