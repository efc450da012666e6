//! Macros for ergonomic operation set construction.

/// Build an [`OperationSet`](crate::core::OperationSet) from `name => closure` pairs.
///
/// Each closure takes `&[Number]` and returns a `Number`.
///
/// # Example
///
/// ```
/// use calcstate::operations;
/// use calcstate::core::Number;
///
/// let ops = operations! {
///     "add" => |p: &[Number]| p[0] + p[1],
///     "square" => |p: &[Number]| p[0] * p[0],
/// };
///
/// assert_eq!(ops.names(), vec!["add", "square"]);
/// ```
#[macro_export]
macro_rules! operations {
    () => {
        $crate::core::OperationSet::new()
    };
    ($($name:expr => $func:expr),+ $(,)?) => {
        $crate::core::OperationSet::new()
            $(.with($name, $crate::core::Operation::new($func)))+
    };
}
