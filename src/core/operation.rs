//! Pluggable operations and the name → operation mapping.

use super::number::Number;
use indexmap::IndexMap;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

type OperationFn = dyn Fn(&[Number]) -> Result<Number, String> + Send + Sync;

/// A named calculator function taking any number of numeric params.
///
/// Operations are cheap to clone; clones share the same function.
///
/// # Example
///
/// ```rust
/// use calcstate::core::{Number, Operation};
///
/// let add = Operation::new(|params: &[Number]| {
///     params.iter().copied().fold(Number::Int(0), |acc, n| acc + n)
/// });
///
/// assert_eq!(add.call(&[Number::Int(2), Number::Int(3)]), Ok(Number::Int(5)));
/// ```
#[derive(Clone)]
pub struct Operation {
    func: Arc<OperationFn>,
}

impl Operation {
    /// Wrap a function that always produces a result.
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&[Number]) -> Number + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(move |params: &[Number]| Ok(func(params))),
        }
    }

    /// Wrap a function that may reject its params (e.g. division by zero).
    pub fn fallible<F>(func: F) -> Self
    where
        F: Fn(&[Number]) -> Result<Number, String> + Send + Sync + 'static,
    {
        Self {
            func: Arc::new(func),
        }
    }

    /// Invoke the function with the given params.
    pub fn call(&self, params: &[Number]) -> Result<Number, String> {
        (self.func)(params)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Operation(..)")
    }
}

/// Mapping from operation name to [`Operation`].
///
/// Iteration order is insertion order. Inserting an existing name replaces
/// its operation in place.
///
/// # Example
///
/// ```rust
/// use calcstate::core::{Number, Operation, OperationSet};
///
/// let ops = OperationSet::new()
///     .with("double", Operation::new(|p: &[Number]| p[0] * Number::Int(2)))
///     .with("negate", Operation::new(|p: &[Number]| Number::Int(0) - p[0]));
///
/// assert_eq!(ops.names(), vec!["double", "negate"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct OperationSet {
    operations: IndexMap<String, Operation>,
}

impl OperationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an operation, returning the set (fluent form of [`insert`](Self::insert)).
    pub fn with(mut self, name: impl Into<String>, operation: Operation) -> Self {
        self.insert(name, operation);
        self
    }

    /// Add an operation, returning the one previously registered under `name`.
    pub fn insert(&mut self, name: impl Into<String>, operation: Operation) -> Option<Operation> {
        self.operations.insert(name.into(), operation)
    }

    pub fn get(&self, name: &str) -> Option<&Operation> {
        self.operations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Registered names in insertion order.
    pub fn names(&self) -> Vec<String> {
        self.operations.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Operation)> {
        self.operations.iter().map(|(name, op)| (name.as_str(), op))
    }
}

impl<K: Into<String>> FromIterator<(K, Operation)> for OperationSet {
    fn from_iter<I: IntoIterator<Item = (K, Operation)>>(iter: I) -> Self {
        Self {
            operations: iter
                .into_iter()
                .map(|(name, op)| (name.into(), op))
                .collect(),
        }
    }
}

impl<K: Into<String>> From<IndexMap<K, Operation>> for OperationSet {
    fn from(operations: IndexMap<K, Operation>) -> Self {
        operations.into_iter().collect()
    }
}

impl<K: Into<String>> From<HashMap<K, Operation>> for OperationSet {
    fn from(operations: HashMap<K, Operation>) -> Self {
        operations.into_iter().collect()
    }
}

impl<K: Into<String>> From<BTreeMap<K, Operation>> for OperationSet {
    fn from(operations: BTreeMap<K, Operation>) -> Self {
        operations.into_iter().collect()
    }
}
