//! Error types returned by resolution.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Top-level resolution error.
///
/// There are two kinds: the requested identifier names no known class at all
/// (`NotFound`), or the class is known but the container could not produce
/// an instance of it (`Container`).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
  /// The identifier does not correspond to any class in the catalog.
  #[error("Class \"{0}\" does not exist.")]
  NotFound(String),

  /// Any other resolution failure.
  #[error(transparent)]
  Container(#[from] ContainerError),
}

impl Error {
  /// Returns `true` for the "class does not exist" kind.
  pub fn is_not_found(&self) -> bool {
    matches!(self, Error::NotFound(_))
  }
}

/// Failures for classes that exist but could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
  #[error("Class \"{class}\" is not instantiable.")]
  NotInstantiable { class: String },

  #[error("Failed to resolve class \"{class}\" because param \"{param}\" is missing a type hint.")]
  MissingTypeHint { class: String, param: String },

  #[error("Failed to resolve class \"{class}\" because of union type for param \"{param}\".")]
  UnionType { class: String, param: String },

  #[error("Failed to resolve class \"{class}\" because invalid param \"{param}\".")]
  InvalidParam { class: String, param: String },

  /// A constructor asked for an argument as a type it does not hold.
  #[error("Failed to construct class \"{class}\" because argument \"{param}\" is not a \"{expected}\".")]
  ArgumentMismatch {
    class: String,
    param: String,
    expected: &'static str,
  },

  /// A resolved instance could not be viewed as the requested Rust type.
  #[error("Class \"{class}\" resolved to an instance of \"{actual}\", which cannot be viewed as \"{expected}\".")]
  UnexpectedType {
    class: String,
    actual: String,
    expected: &'static str,
  },

  #[error("Circular dependency detected while resolving class \"{class}\": {}", .path.join(" -> "))]
  CircularDependency { class: String, path: Vec<String> },

  #[error("Failed to resolve class \"{class}\" because the resolution depth limit of {limit} was exceeded.")]
  DepthExceeded { class: String, limit: usize },

  /// A factory or constructor reported its own failure.
  #[error("Failed to construct class \"{class}\": {reason}")]
  Construction { class: String, reason: String },
}

impl ContainerError {
  /// Builds a [`ContainerError::Construction`] for use inside factories and
  /// constructors.
  pub fn construction(class: impl Into<String>, reason: impl Into<String>) -> Self {
    ContainerError::Construction {
      class: class.into(),
      reason: reason.into(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages_match_the_documented_wording() {
    assert_eq!(
      Error::NotFound("NonExistentClass".into()).to_string(),
      "Class \"NonExistentClass\" does not exist."
    );

    let err: Error = ContainerError::UnionType {
      class: "Clock".into(),
      param: "dateTime".into(),
    }
    .into();
    assert_eq!(
      err.to_string(),
      "Failed to resolve class \"Clock\" because of union type for param \"dateTime\"."
    );
    assert!(!err.is_not_found());
  }

  #[test]
  fn circular_dependency_lists_the_path() {
    let err = ContainerError::CircularDependency {
      class: "A".into(),
      path: vec!["A".into(), "B".into(), "A".into()],
    };
    assert_eq!(
      err.to_string(),
      "Circular dependency detected while resolving class \"A\": A -> B -> A"
    );
  }
}
