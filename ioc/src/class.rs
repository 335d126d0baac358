//! Type metadata the container inspects when autowiring.
//!
//! A [`Class`] describes one constructible (or deliberately non-constructible)
//! type: its identifier, its constructor parameters in declaration order, and
//! how to build it from a resolved argument list.

use crate::error::Result;
use crate::object::Args;
use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

pub(crate) type Constructor = Rc<dyn Fn(&Args) -> Result<Rc<dyn Any>>>;
pub(crate) type Caster = Rc<dyn Fn(Rc<dyn Any>) -> Option<Box<dyn Any>>>;

/// A type that can describe itself to the container.
///
/// ```
/// use autowire_ioc::{Class, Param, Reflect};
///
/// struct Widget {
///   count: i64,
/// }
///
/// impl Reflect for Widget {
///   const NAME: &'static str = "Widget";
///
///   fn class() -> Class {
///     Class::builder::<Self>(Self::NAME)
///       .param(Param::new("count").builtin("int").default_value(5_i64))
///       .construct(|args| Ok(Widget { count: args.value(0)? }))
///   }
/// }
/// ```
pub trait Reflect: Any + Sized {
  /// The type identifier used as binding key and `get` argument.
  const NAME: &'static str;

  fn class() -> Class;
}

/// What sort of type a [`Class`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassKind {
  Concrete,
  Abstract,
  Interface,
  Trait,
}

impl ClassKind {
  pub fn is_instantiable(self) -> bool {
    matches!(self, ClassKind::Concrete)
  }
}

/// The declared type of a constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
  /// A single named type. `builtin` marks primitives such as `int` or
  /// `string`, which the container can never produce.
  Named {
    name: Cow<'static, str>,
    builtin: bool,
  },
  /// One of several alternative types.
  Union(Vec<ParamType>),
}

impl ParamType {
  pub fn class(name: impl Into<Cow<'static, str>>) -> Self {
    ParamType::Named {
      name: name.into(),
      builtin: false,
    }
  }

  pub fn builtin(name: impl Into<Cow<'static, str>>) -> Self {
    ParamType::Named {
      name: name.into(),
      builtin: true,
    }
  }

  pub fn union(members: impl IntoIterator<Item = ParamType>) -> Self {
    ParamType::Union(members.into_iter().collect())
  }
}

/// One constructor parameter.
#[derive(Clone)]
pub struct Param {
  name: Cow<'static, str>,
  ty: Option<ParamType>,
  default: Option<Rc<dyn Any>>,
}

impl Param {
  /// An untyped parameter with no default.
  pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
    Self {
      name: name.into(),
      ty: None,
      default: None,
    }
  }

  pub fn typed(mut self, ty: ParamType) -> Self {
    self.ty = Some(ty);
    self
  }

  /// Declares the parameter as a dependency on the class `name`.
  pub fn class(self, name: impl Into<Cow<'static, str>>) -> Self {
    self.typed(ParamType::class(name))
  }

  pub fn builtin(self, name: impl Into<Cow<'static, str>>) -> Self {
    self.typed(ParamType::builtin(name))
  }

  pub fn union(self, members: impl IntoIterator<Item = ParamType>) -> Self {
    self.typed(ParamType::union(members))
  }

  /// Supplies a default that is passed verbatim instead of being resolved.
  pub fn default_value<V: Any>(mut self, value: V) -> Self {
    self.default = Some(Rc::new(value));
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn ty(&self) -> Option<&ParamType> {
    self.ty.as_ref()
  }

  pub fn has_default(&self) -> bool {
    self.default.is_some()
  }

  pub(crate) fn default(&self) -> Option<&Rc<dyn Any>> {
    self.default.as_ref()
  }
}

impl fmt::Debug for Param {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Param")
      .field("name", &self.name)
      .field("ty", &self.ty)
      .field("has_default", &self.has_default())
      .finish()
  }
}

/// Metadata for a single type identifier.
pub struct Class {
  name: Cow<'static, str>,
  kind: ClassKind,
  params: Vec<Param>,
  constructor: Option<Constructor>,
  casts: HashMap<TypeId, Caster>,
}

impl Class {
  /// Starts describing a concrete class backed by the Rust type `T`.
  pub fn builder<T: Any>(name: impl Into<Cow<'static, str>>) -> ClassBuilder<T> {
    let mut casts: HashMap<TypeId, Caster> = HashMap::new();
    casts.insert(
      TypeId::of::<T>(),
      Rc::new(|value: Rc<dyn Any>| {
        value
          .downcast::<T>()
          .ok()
          .map(|rc| Box::new(rc) as Box<dyn Any>)
      }),
    );
    ClassBuilder {
      name: name.into(),
      params: Vec::new(),
      casts,
      _marker: PhantomData,
    }
  }

  /// A concrete class with no constructor parameters, built via `Default`.
  pub fn with_default<T: Any + Default>(name: impl Into<Cow<'static, str>>) -> Self {
    Self::builder::<T>(name).construct(|_| Ok(T::default()))
  }

  /// A non-instantiable interface.
  pub fn interface(name: impl Into<Cow<'static, str>>) -> Self {
    Self::declared(name, ClassKind::Interface)
  }

  /// A non-instantiable abstract class.
  pub fn abstract_class(name: impl Into<Cow<'static, str>>) -> Self {
    Self::declared(name, ClassKind::Abstract)
  }

  /// A class of the given kind that carries no constructor. Only useful for
  /// kinds that are not instantiable.
  pub fn declared(name: impl Into<Cow<'static, str>>, kind: ClassKind) -> Self {
    Self {
      name: name.into(),
      kind,
      params: Vec::new(),
      constructor: None,
      casts: HashMap::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn kind(&self) -> ClassKind {
    self.kind
  }

  pub fn is_instantiable(&self) -> bool {
    self.kind.is_instantiable() && self.constructor.is_some()
  }

  pub fn params(&self) -> &[Param] {
    &self.params
  }

  pub(crate) fn constructor(&self) -> Option<&Constructor> {
    self.constructor.as_ref().filter(|_| self.kind.is_instantiable())
  }

  pub(crate) fn caster(&self, view: TypeId) -> Option<&Caster> {
    self.casts.get(&view)
  }
}

impl fmt::Debug for Class {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Class")
      .field("name", &self.name)
      .field("kind", &self.kind)
      .field("params", &self.params)
      .finish()
  }
}

/// Builder for a concrete [`Class`] backed by `T`.
pub struct ClassBuilder<T> {
  name: Cow<'static, str>,
  params: Vec<Param>,
  casts: HashMap<TypeId, Caster>,
  _marker: PhantomData<fn() -> T>,
}

impl<T: Any> ClassBuilder<T> {
  /// Appends a constructor parameter. Order of calls is declaration order.
  pub fn param(mut self, param: Param) -> Self {
    self.params.push(param);
    self
  }

  /// Lets instances of this class be viewed as `I`, typically a trait
  /// object the class implements.
  pub fn implements<I: ?Sized + 'static>(mut self, view: impl Fn(Rc<T>) -> Rc<I> + 'static) -> Self {
    self.casts.insert(
      TypeId::of::<I>(),
      Rc::new(move |value: Rc<dyn Any>| {
        value
          .downcast::<T>()
          .ok()
          .map(|rc| Box::new(view(rc)) as Box<dyn Any>)
      }),
    );
    self
  }

  /// Finishes the class with the function that builds `T` from its
  /// resolved arguments.
  pub fn construct(self, build: impl Fn(&Args) -> Result<T> + 'static) -> Class {
    Class {
      name: self.name,
      kind: ClassKind::Concrete,
      params: self.params,
      constructor: Some(Rc::new(move |args: &Args| {
        build(args).map(|value| Rc::new(value) as Rc<dyn Any>)
      })),
      casts: self.casts,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Default)]
  struct Plain;

  #[test]
  fn only_concrete_classes_are_instantiable() {
    assert!(Class::with_default::<Plain>("Plain").is_instantiable());
    assert!(!Class::interface("Greeter").is_instantiable());
    assert!(!Class::abstract_class("Base").is_instantiable());
    assert!(!Class::declared("Loggable", ClassKind::Trait).is_instantiable());
  }

  #[test]
  fn params_keep_declaration_order() {
    let class = Class::builder::<Plain>("Plain")
      .param(Param::new("first").class("Clock"))
      .param(Param::new("second").builtin("int").default_value(3_i64))
      .param(Param::new("third"))
      .construct(|_| Ok(Plain));

    let names: Vec<_> = class.params().iter().map(Param::name).collect();
    assert_eq!(names, ["first", "second", "third"]);
    assert_eq!(class.params()[0].ty(), Some(&ParamType::class("Clock")));
    assert!(class.params()[1].has_default());
    assert!(class.params()[2].ty().is_none());
  }
}
