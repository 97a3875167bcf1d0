use generational_arena::{Arena, Index};
use tracing::{debug, instrument};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::flags::{FlagSchema, ResolvedFlags};

/// Leaf behaviour of a command: consumes validated flags, returns the output line.
pub type Action = fn(&ResolvedFlags) -> DomainResult<String>;

/// Static description of a command, before it is placed in a tree.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: String,
    pub short: String,
    pub long: String,
    pub schema: FlagSchema,
    pub action: Option<Action>,
}

impl CommandSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: String::new(),
            long: String::new(),
            schema: FlagSchema::new(),
            action: None,
        }
    }

    pub fn short(mut self, text: impl Into<String>) -> Self {
        self.short = text.into();
        self
    }

    pub fn long(mut self, text: impl Into<String>) -> Self {
        self.long = text.into();
        self
    }

    pub fn schema(mut self, schema: FlagSchema) -> Self {
        self.schema = schema;
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

/// Command node in the arena-based tree.
#[derive(Debug)]
pub struct CommandNode {
    pub spec: CommandSpec,
    /// Index of parent node in the arena, None for the root
    pub parent: Option<Index>,
    /// Indices of child nodes, in registration order
    pub children: Vec<Index>,
}

/// Result of walking argument tokens down the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Deepest node matched by the leading tokens
    pub node: Index,
    /// Tokens left over for flag parsing
    pub remaining: &'a [String],
}

/// Immutable-after-construction command hierarchy with exactly one root.
#[derive(Debug)]
pub struct CommandTree {
    arena: Arena<CommandNode>,
    root: Index,
}

impl CommandTree {
    /// Create a tree holding only `root`.
    pub fn new(root: CommandSpec) -> DomainResult<Self> {
        validate_name(&root.name)?;
        let mut arena = Arena::new();
        let root = arena.insert(CommandNode {
            spec: root,
            parent: None,
            children: Vec::new(),
        });
        Ok(Self { arena, root })
    }

    pub fn root(&self) -> Index {
        self.root
    }

    /// Attach `child` under `parent`. Sibling names must be unique.
    #[instrument(level = "trace", skip(self, child), fields(child = %child.name))]
    pub fn register(&mut self, parent: Index, child: CommandSpec) -> DomainResult<Index> {
        validate_name(&child.name)?;
        let parent_node = self.arena.get(parent).ok_or(DomainError::UnknownNode)?;
        if self.find_child(parent, &child.name).is_some() {
            return Err(DomainError::DuplicateCommand {
                parent: parent_node.spec.name.clone(),
                name: child.name,
            });
        }

        let idx = self.arena.insert(CommandNode {
            spec: child,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(parent_node) = self.arena.get_mut(parent) {
            parent_node.children.push(idx);
        }
        Ok(idx)
    }

    pub fn get_node(&self, idx: Index) -> Option<&CommandNode> {
        self.arena.get(idx)
    }

    /// Children of `idx` in registration order.
    pub fn children(&self, idx: Index) -> impl Iterator<Item = (Index, &CommandNode)> {
        self.arena
            .get(idx)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(|&c| self.arena.get(c).map(|node| (c, node)))
    }

    pub fn find_child(&self, parent: Index, name: &str) -> Option<Index> {
        self.children(parent)
            .find(|(_, node)| node.spec.name == name)
            .map(|(idx, _)| idx)
    }

    /// Space-separated names from the root down to `idx`, e.g. `calc add`.
    pub fn path(&self, idx: Index) -> String {
        let mut names = Vec::new();
        let mut current = Some(idx);
        while let Some(i) = current {
            match self.arena.get(i) {
                Some(node) => {
                    names.push(node.spec.name.as_str());
                    current = node.parent;
                }
                None => break,
            }
        }
        names.reverse();
        names.join(" ")
    }

    /// Walk `tokens` from the root, matching command names.
    ///
    /// Stops at the first flag-like token or at a leaf. A non-flag token that
    /// names no child of a node with children is an unknown command.
    #[instrument(level = "debug", skip(self))]
    pub fn lookup<'a>(&self, tokens: &'a [String]) -> DomainResult<Resolution<'a>> {
        let mut current = self.root;
        let mut consumed = 0;

        for token in tokens {
            if token.starts_with('-') {
                break;
            }
            let node = self.arena.get(current).ok_or(DomainError::UnknownNode)?;
            if node.children.is_empty() {
                break;
            }
            match self.find_child(current, token) {
                Some(child) => {
                    current = child;
                    consumed += 1;
                }
                None => {
                    return Err(DomainError::UnknownCommand {
                        parent: self.path(current),
                        name: token.clone(),
                    })
                }
            }
        }

        debug!(node = %self.path(current), consumed, "resolved command");
        Ok(Resolution {
            node: current,
            remaining: &tokens[consumed..],
        })
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}

fn validate_name(name: &str) -> DomainResult<()> {
    if name.is_empty() || name.starts_with('-') || name.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidName(name.to_string()));
    }
    Ok(())
}
