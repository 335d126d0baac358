//! The table of classes a container knows how to find.

use crate::class::{Class, Reflect};
use std::collections::HashMap;
use std::rc::Rc;

/// Maps type identifiers to their [`Class`] metadata.
///
/// An identifier missing from the catalog is a class that "does not exist".
#[derive(Default, Clone, Debug)]
pub struct Catalog {
  classes: HashMap<String, Rc<Class>>,
}

impl Catalog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds (or replaces) a class under its own name.
  pub fn define(&mut self, class: Class) -> &mut Self {
    self.classes.insert(class.name().to_owned(), Rc::new(class));
    self
  }

  pub fn register<T: Reflect>(&mut self) -> &mut Self {
    self.define(T::class())
  }

  pub fn lookup(&self, name: &str) -> Option<Rc<Class>> {
    self.classes.get(name).cloned()
  }

  pub fn contains(&self, name: &str) -> bool {
    self.classes.contains_key(name)
  }

  pub fn len(&self) -> usize {
    self.classes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.classes.is_empty()
  }
}
