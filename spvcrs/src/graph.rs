//! Parent/child bookkeeping for every wrapper created from a [`Context`].
//!
//! Each wrapper owns a [`Link`] into a generational arena held by the
//! context's session. A link is alive while the session has not been disposed
//! and its slot still carries the generation it was issued with. Releasing a
//! node releases its whole subtree, so dropping a reflector invalidates the
//! types, constants, resources and sets obtained from it.
//!
//! [`Context`]: crate::Context

use crate::context::Session;
use crate::{Error, Result};
use std::fmt;
use std::rc::Rc;

/// What a node in the graph stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    ParsedIr,
    Reflector,
    Resources,
    Type,
    Constant,
    Set,
}

impl NodeKind {
    fn name(self) -> &'static str {
        match self {
            NodeKind::ParsedIr => "ParsedIr",
            NodeKind::Reflector => "Reflector",
            NodeKind::Resources => "Resources",
            NodeKind::Type => "Type",
            NodeKind::Constant => "Constant",
            NodeKind::Set => "Set",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeKey {
    index: u32,
    generation: u32,
}

#[derive(Debug)]
struct Node {
    generation: u32,
    occupied: bool,
    parent: Option<NodeKey>,
    children: Vec<u32>,
}

#[derive(Debug, Default)]
pub(crate) struct Graph {
    nodes: Vec<Node>,
    free: Vec<u32>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node under `parent`, or under the root when `parent` is `None`.
    pub fn insert(&mut self, parent: Option<NodeKey>) -> NodeKey {
        let index = match self.free.pop() {
            Some(index) => {
                let node = &mut self.nodes[index as usize];
                node.occupied = true;
                node.parent = parent;
                node.children.clear();
                index
            }
            None => {
                self.nodes.push(Node {
                    generation: 0,
                    occupied: true,
                    parent,
                    children: Vec::new(),
                });
                (self.nodes.len() - 1) as u32
            }
        };

        if let Some(parent) = parent {
            self.nodes[parent.index as usize].children.push(index);
        }

        NodeKey {
            index,
            generation: self.nodes[index as usize].generation,
        }
    }

    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes
            .get(key.index as usize)
            .is_some_and(|node| node.occupied && node.generation == key.generation)
    }

    pub fn parent_of(&self, key: NodeKey) -> Option<NodeKey> {
        if !self.contains(key) {
            return None;
        }
        self.nodes[key.index as usize].parent
    }

    /// Releases `key` and every node beneath it. Stale keys are ignored.
    pub fn remove(&mut self, key: NodeKey) {
        if !self.contains(key) {
            return;
        }

        if let Some(parent) = self.nodes[key.index as usize].parent
            && self.contains(parent)
        {
            self.nodes[parent.index as usize]
                .children
                .retain(|&child| child != key.index);
        }

        let mut pending = vec![key.index];
        while let Some(index) = pending.pop() {
            let node = &mut self.nodes[index as usize];
            pending.append(&mut node.children);
            node.occupied = false;
            node.parent = None;
            node.generation = node.generation.wrapping_add(1);
            self.free.push(index);
        }
    }

    /// Releases every node.
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, node) in self.nodes.iter_mut().enumerate() {
            if node.occupied {
                node.generation = node.generation.wrapping_add(1);
            }
            node.occupied = false;
            node.parent = None;
            node.children.clear();
            self.free.push(index as u32);
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|node| node.occupied).count()
    }
}

/// A wrapper's membership in its context's graph
pub(crate) struct Link {
    session: Rc<Session>,
    key: NodeKey,
    kind: NodeKind,
}

impl Link {
    /// Registers a new node under `parent` (or the context root).
    pub fn new(session: &Rc<Session>, parent: Option<&Link>, kind: NodeKind) -> Link {
        let key = session
            .graph
            .borrow_mut()
            .insert(parent.map(|parent| parent.key));
        Link {
            session: Rc::clone(session),
            key,
            kind,
        }
    }

    pub fn session(&self) -> &Rc<Session> {
        &self.session
    }

    pub fn is_alive(&self) -> bool {
        !self.session.is_destroyed() && self.session.graph.borrow().contains(self.key)
    }

    /// Fails with [`Error::MissingParent`] unless the link is alive.
    pub fn validate(&self) -> Result<()> {
        if self.session.is_destroyed() {
            return Err(Error::MissingParent(format!(
                "{} used after its Context was disposed",
                self.kind.name()
            )));
        }
        if !self.session.graph.borrow().contains(self.key) {
            return Err(Error::MissingParent(format!(
                "{} used after its owner was released",
                self.kind.name()
            )));
        }
        Ok(())
    }

    /// Checks that `self` is a direct child of `parent`.
    pub fn compare_parent(&self, parent: &Link) -> Result<()> {
        self.validate()?;
        parent.validate()?;
        let same = Rc::ptr_eq(&self.session, &parent.session)
            && self.session.graph.borrow().parent_of(self.key) == Some(parent.key);
        if !same {
            return Err(Error::InvalidParent(format!(
                "{} does not belong to this {}",
                self.kind.name(),
                parent.kind.name()
            )));
        }
        Ok(())
    }

    /// Checks that `self` and `other` were created from the same context.
    pub fn compare_root(&self, other: &Link) -> Result<()> {
        self.validate()?;
        other.validate()?;
        if !Rc::ptr_eq(&self.session, &other.session) {
            return Err(Error::InvalidParent(format!(
                "{} belongs to a different Context than this {}",
                self.kind.name(),
                other.kind.name()
            )));
        }
        Ok(())
    }

    /// Checks that `self` belongs to `session`.
    pub fn compare_session(&self, session: &Rc<Session>) -> Result<()> {
        self.validate()?;
        if !Rc::ptr_eq(&self.session, session) {
            return Err(Error::InvalidParent(format!(
                "{} belongs to a different Context",
                self.kind.name()
            )));
        }
        Ok(())
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Link")
            .field("kind", &self.kind)
            .field("key", &self.key)
            .field("alive", &self.is_alive())
            .finish()
    }
}

impl Drop for Link {
    fn drop(&mut self) {
        if let Ok(mut graph) = self.session.graph.try_borrow_mut() {
            graph.remove(self.key);
        }
    }
}
