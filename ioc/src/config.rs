//! Container tuning knobs.

/// Resolution guards applied by a [`Container`](crate::Container).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerConfig {
  /// Fail with `CircularDependency` when an identifier is requested again
  /// while it is still being resolved. When off, cycles are not checked: an
  /// autowiring cycle recurses until the stack is exhausted, and a cycle
  /// through a singleton binding whose inner resolution returns panics with
  /// "reentrant init" when the outer one tries to memoize.
  pub detect_cycles: bool,
  /// Maximum number of nested `get` calls below a top-level request. `0`
  /// still allows the top-level request itself.
  pub max_depth: Option<usize>,
}

impl Default for ContainerConfig {
  fn default() -> Self {
    Self {
      detect_cycles: true,
      max_depth: None,
    }
  }
}
