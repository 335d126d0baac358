//! Binding records and the resolution guard.

use crate::config::ContainerConfig;
use crate::container::Container;
use crate::error::{ContainerError, Result};
use crate::object::Object;
use once_cell::unsync::OnceCell;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A factory receives the container so it can resolve its own dependencies.
pub type Factory = Rc<dyn Fn(&Container) -> Result<Object>>;

/// How a binding produces its instance. Fixed when the binding is
/// registered.
#[derive(Clone)]
pub enum Concrete {
  /// Call the factory with the container.
  Factory(Factory),
  /// Resolve another identifier (or autowire, when it names the binding's
  /// own identifier).
  Class(String),
  /// A pre-built instance.
  Instance(Object),
}

impl Concrete {
  pub fn factory(factory: impl Fn(&Container) -> Result<Object> + 'static) -> Self {
    Concrete::Factory(Rc::new(factory))
  }

  pub(crate) fn kind(&self) -> &'static str {
    match self {
      Concrete::Factory(_) => "factory",
      Concrete::Class(_) => "class",
      Concrete::Instance(_) => "instance",
    }
  }
}

impl From<&str> for Concrete {
  fn from(id: &str) -> Self {
    Concrete::Class(id.to_owned())
  }
}

impl From<String> for Concrete {
  fn from(id: String) -> Self {
    Concrete::Class(id)
  }
}

impl From<Object> for Concrete {
  fn from(object: Object) -> Self {
    Concrete::Instance(object)
  }
}

impl fmt::Debug for Concrete {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Concrete::Factory(_) => f.write_str("Factory(..)"),
      Concrete::Class(id) => f.debug_tuple("Class").field(id).finish(),
      Concrete::Instance(object) => f.debug_tuple("Instance").field(object).finish(),
    }
  }
}

pub(crate) struct Binding {
  pub(crate) concrete: Concrete,
  /// `Some` for singleton bindings; holds the memoized instance once produced.
  pub(crate) shared: Option<OnceCell<Object>>,
}

impl Binding {
  pub(crate) fn transient(concrete: Concrete) -> Self {
    Self {
      concrete,
      shared: None,
    }
  }

  pub(crate) fn singleton(concrete: Concrete) -> Self {
    let cell = match &concrete {
      Concrete::Instance(object) => OnceCell::with_value(object.clone()),
      _ => OnceCell::new(),
    };
    Self {
      concrete,
      shared: Some(cell),
    }
  }

  pub(crate) fn is_singleton(&self) -> bool {
    self.shared.is_some()
  }
}

/// An RAII guard that records an identifier as "being resolved".
///
/// Entering fails if the identifier is already on the stack (a cycle) or it
/// would nest deeper than the configured depth limit. Dropping the guard
/// pops it.
pub(crate) struct ResolutionGuard<'a> {
  stack: &'a RefCell<Vec<String>>,
}

impl<'a> ResolutionGuard<'a> {
  pub(crate) fn enter(
    stack: &'a RefCell<Vec<String>>,
    id: &str,
    config: &ContainerConfig,
  ) -> Result<Self> {
    let mut entries = stack.borrow_mut();

    if config.detect_cycles && entries.iter().any(|entry| entry == id) {
      let mut path = entries.clone();
      path.push(id.to_owned());
      return Err(
        ContainerError::CircularDependency {
          class: id.to_owned(),
          path,
        }
        .into(),
      );
    }

    if let Some(limit) = config.max_depth {
      // The top-level request sits at depth zero.
      if entries.len() > limit {
        return Err(
          ContainerError::DepthExceeded {
            class: id.to_owned(),
            limit,
          }
          .into(),
        );
      }
    }

    entries.push(id.to_owned());
    Ok(Self { stack })
  }
}

impl Drop for ResolutionGuard<'_> {
  fn drop(&mut self) {
    self.stack.borrow_mut().pop();
  }
}
