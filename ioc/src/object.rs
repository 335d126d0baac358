//! Resolved instances and constructor argument lists.

use crate::class::{Class, Reflect};
use crate::error::{ContainerError, Result};
use std::any::{type_name, Any, TypeId};
use std::fmt;
use std::rc::Rc;

/// A resolved instance together with the class describing its runtime type.
///
/// Cloning an `Object` shares the underlying value.
#[derive(Clone)]
pub struct Object {
  class: Rc<Class>,
  value: Rc<dyn Any>,
}

impl Object {
  /// Wraps an already-constructed value.
  pub fn of<T: Reflect>(value: T) -> Self {
    Self::new(Rc::new(T::class()), Rc::new(value))
  }

  pub(crate) fn new(class: Rc<Class>, value: Rc<dyn Any>) -> Self {
    Self { class, value }
  }

  /// The identifier of the instance's runtime class.
  pub fn class_name(&self) -> &str {
    self.class.name()
  }

  pub fn class(&self) -> &Rc<Class> {
    &self.class
  }

  /// Views the instance as `T`: either the class's own Rust type or any
  /// view registered with [`ClassBuilder::implements`](crate::ClassBuilder::implements).
  pub fn cast<T: ?Sized + 'static>(&self) -> Option<Rc<T>> {
    let caster = self.class.caster(TypeId::of::<T>())?;
    caster(self.value.clone())?
      .downcast::<Rc<T>>()
      .ok()
      .map(|boxed| *boxed)
  }

  pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
    self.value.downcast_ref::<T>()
  }

  pub fn is<T: Any>(&self) -> bool {
    self.value.is::<T>()
  }

  /// Reference equality: both handles point at the same instance.
  pub fn ptr_eq(this: &Self, other: &Self) -> bool {
    Rc::ptr_eq(&this.value, &other.value)
  }
}

impl fmt::Debug for Object {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Object")
      .field("class", &self.class_name())
      .finish()
  }
}

pub(crate) enum Argument {
  Object(Object),
  Value(Rc<dyn Any>),
}

/// Arguments handed to a class constructor, one per parameter in
/// declaration order.
pub struct Args {
  class: Rc<Class>,
  values: Vec<Argument>,
}

impl Args {
  pub(crate) fn new(class: Rc<Class>, values: Vec<Argument>) -> Self {
    Self { class, values }
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// The argument at `index` as a shared `T`. Works for resolved
  /// dependencies and for defaults that hold an `Rc<T>`.
  pub fn object<T: ?Sized + 'static>(&self, index: usize) -> Result<Rc<T>> {
    let found = match self.values.get(index) {
      Some(Argument::Object(object)) => object.cast::<T>(),
      Some(Argument::Value(value)) => value.downcast_ref::<Rc<T>>().cloned(),
      None => None,
    };
    found.ok_or_else(|| self.mismatch(index, type_name::<Rc<T>>()))
  }

  /// The argument at `index` as an owned `T`, typically a default value.
  pub fn value<T: Any + Clone>(&self, index: usize) -> Result<T> {
    let found = match self.values.get(index) {
      Some(Argument::Value(value)) => value.downcast_ref::<T>().cloned(),
      Some(Argument::Object(object)) => object.downcast_ref::<T>().cloned(),
      None => None,
    };
    found.ok_or_else(|| self.mismatch(index, type_name::<T>()))
  }

  fn mismatch(&self, index: usize, expected: &'static str) -> crate::Error {
    let param = self
      .class
      .params()
      .get(index)
      .map(|param| param.name().to_owned())
      .unwrap_or_else(|| format!("#{index}"));
    ContainerError::ArgumentMismatch {
      class: self.class.name().to_owned(),
      param,
      expected,
    }
    .into()
  }
}
