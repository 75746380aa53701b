//! Read-only access to `ec_deployment` state
//!
//! The expanders only ever need scalars and list lengths at a path, so the
//! host's state object is hidden behind [`ResourceState`]. Everything else
//! (typed getters, nested block views) is derived from those two calls.

use super::error::ExpandError;
use tfplug::types::{AttributePath, Dynamic, DynamicValue};

/// A leaf value in resource state
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Number(f64),
    String(String),
}

impl Scalar {
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Bool(_) => "bool",
            Scalar::Number(_) => "number",
            Scalar::String(_) => "string",
        }
    }
}

/// Typed, read-only view over a resource's state tree.
///
/// Absent and null values are `Ok(None)`. Values of the wrong shape are
/// reported as [`ExpandError::SchemaValidation`] naming the path.
pub trait ResourceState {
    fn scalar(&self, path: &AttributePath) -> Result<Option<Scalar>, ExpandError>;

    /// Number of elements of the list (or block list) at `path`
    fn list_len(&self, path: &AttributePath) -> Result<Option<usize>, ExpandError>;

    fn string(&self, path: &AttributePath) -> Result<Option<String>, ExpandError> {
        match self.scalar(path)? {
            None => Ok(None),
            Some(Scalar::String(s)) => Ok(Some(s)),
            Some(other) => Err(expected(path, "string", &other)),
        }
    }

    fn bool(&self, path: &AttributePath) -> Result<Option<bool>, ExpandError> {
        match self.scalar(path)? {
            None => Ok(None),
            Some(Scalar::Bool(b)) => Ok(Some(b)),
            Some(other) => Err(expected(path, "bool", &other)),
        }
    }

    fn number(&self, path: &AttributePath) -> Result<Option<f64>, ExpandError> {
        match self.scalar(path)? {
            None => Ok(None),
            Some(Scalar::Number(n)) => Ok(Some(n)),
            Some(other) => Err(expected(path, "number", &other)),
        }
    }

    fn strings(&self, path: &AttributePath) -> Result<Option<Vec<String>>, ExpandError> {
        let Some(len) = self.list_len(path)? else {
            return Ok(None);
        };
        (0..len)
            .map(|idx| {
                let element = path.clone().index(idx);
                self.string(&element)?
                    .ok_or_else(|| ExpandError::schema(element, "list element must not be null"))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }
}

fn expected(path: &AttributePath, expected: &str, actual: &Scalar) -> ExpandError {
    ExpandError::schema(
        path.clone(),
        format!("expected {}, got {}", expected, actual.type_name()),
    )
}

fn not_yet_known(path: &AttributePath) -> ExpandError {
    ExpandError::schema(path.clone(), "value is not yet known")
}

impl ResourceState for DynamicValue {
    fn scalar(&self, path: &AttributePath) -> Result<Option<Scalar>, ExpandError> {
        match self.lookup(path) {
            None => Ok(None),
            Some(Dynamic::Bool(b)) => Ok(Some(Scalar::Bool(*b))),
            Some(Dynamic::Number(n)) => Ok(Some(Scalar::Number(*n))),
            Some(Dynamic::String(s)) => Ok(Some(Scalar::String(s.clone()))),
            Some(Dynamic::Unknown) => Err(not_yet_known(path)),
            Some(other) => Err(ExpandError::schema(
                path.clone(),
                format!("expected a single value, got {}", other.type_name()),
            )),
        }
    }

    fn list_len(&self, path: &AttributePath) -> Result<Option<usize>, ExpandError> {
        match self.lookup(path) {
            None => Ok(None),
            Some(Dynamic::List(items)) => Ok(Some(items.len())),
            Some(Dynamic::Unknown) => Err(not_yet_known(path)),
            Some(other) => Err(ExpandError::schema(
                path.clone(),
                format!("expected list, got {}", other.type_name()),
            )),
        }
    }
}

/// A nested block of state, addressed by its path.
///
/// Terraform encodes nested blocks as lists of objects; single blocks are
/// lists holding at most one object.
pub(crate) struct Block<'a, S: ?Sized> {
    state: &'a S,
    path: AttributePath,
}

impl<'a, S: ResourceState + ?Sized> Block<'a, S> {
    pub fn root(state: &'a S) -> Self {
        Self {
            state,
            path: AttributePath::root(),
        }
    }

    pub fn path(&self) -> &AttributePath {
        &self.path
    }

    pub fn attr_path(&self, name: &str) -> AttributePath {
        self.path.clone().attribute(name)
    }

    /// String attribute; empty strings count as unset
    pub fn string(&self, name: &str) -> Result<Option<String>, ExpandError> {
        Ok(self
            .state
            .string(&self.attr_path(name))?
            .filter(|s| !s.is_empty()))
    }

    pub fn bool(&self, name: &str) -> Result<Option<bool>, ExpandError> {
        self.state.bool(&self.attr_path(name))
    }

    pub fn number(&self, name: &str) -> Result<Option<f64>, ExpandError> {
        self.state.number(&self.attr_path(name))
    }

    pub fn scalar(&self, name: &str) -> Result<Option<Scalar>, ExpandError> {
        self.state.scalar(&self.attr_path(name))
    }

    pub fn strings(&self, name: &str) -> Result<Option<Vec<String>>, ExpandError> {
        self.state.strings(&self.attr_path(name))
    }

    /// Every block of a repeated nested block, in declaration order
    pub fn blocks(&self, name: &str) -> Result<Vec<Block<'a, S>>, ExpandError> {
        let path = self.attr_path(name);
        let len = self.state.list_len(&path)?.unwrap_or(0);
        Ok((0..len)
            .map(|idx| Block {
                state: self.state,
                path: path.clone().index(idx),
            })
            .collect())
    }

    /// A nested block declared at most once
    pub fn single(&self, name: &str) -> Result<Option<Block<'a, S>>, ExpandError> {
        let mut blocks = self.blocks(name)?;
        if blocks.len() > 1 {
            return Err(ExpandError::schema(
                self.attr_path(name),
                format!("at most one block allowed, got {}", blocks.len()),
            ));
        }
        Ok(blocks.pop())
    }
}
