//! The main `Container` struct and its associated methods.

use crate::catalog::Catalog;
use crate::class::{Class, Param, ParamType, Reflect};
use crate::config::ContainerConfig;
use crate::core::{Binding, Concrete, ResolutionGuard};
use crate::error::{ContainerError, Error, Result};
use crate::object::{Args, Argument, Object};
use std::any::type_name;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// The Inversion of Control (IoC) container.
///
/// Holds a [`Catalog`] of known classes and a table of bindings. Every
/// method takes `&self`, so factories can resolve and register through the
/// container they are handed. The container is single-threaded: it is
/// neither `Send` nor `Sync`, and may store values that are not either.
#[derive(Default)]
pub struct Container {
  catalog: RefCell<Catalog>,
  bindings: RefCell<HashMap<String, Rc<Binding>>>,
  resolving: RefCell<Vec<String>>,
  config: ContainerConfig,
}

impl Container {
  /// Creates a new, empty `Container` with the default configuration.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a container that autowires from `catalog`.
  pub fn with_catalog(catalog: Catalog) -> Self {
    Self {
      catalog: RefCell::new(catalog),
      ..Self::default()
    }
  }

  pub fn build() -> ContainerBuilder {
    ContainerBuilder {
      catalog: Catalog::new(),
      config: ContainerConfig::default(),
    }
  }

  pub fn config(&self) -> &ContainerConfig {
    &self.config
  }

  // --- Catalog ---

  /// Makes `class` known to autowiring, replacing any class of the same name.
  pub fn define(&self, class: Class) -> &Self {
    tracing::trace!(class = class.name(), "class defined");
    self.catalog.borrow_mut().define(class);
    self
  }

  pub fn register<T: Reflect>(&self) -> &Self {
    self.define(T::class())
  }

  // --- Bindings ---

  /// Returns `true` if an explicit binding exists for `id`. This does not
  /// mean `id` can be resolved.
  pub fn has(&self, id: &str) -> bool {
    self.bindings.borrow().contains_key(id)
  }

  /// Registers a non-singleton binding, replacing any previous one.
  ///
  /// Note that binding a pre-built [`Object`] here does not hand that object
  /// out: each `get` autowires a fresh instance of the object's class, and
  /// the stored object only marks which class to build. Use
  /// [`singleton_with`](Self::singleton_with) to hand out the object itself.
  pub fn set(&self, id: impl Into<String>, concrete: impl Into<Concrete>) -> &Self {
    self.bind(id.into(), Binding::transient(concrete.into()))
  }

  /// Registers `id` to be autowired on first use and cached afterwards.
  pub fn singleton(&self, id: impl Into<String>) -> &Self {
    let id = id.into();
    let concrete = Concrete::Class(id.clone());
    self.bind(id, Binding::singleton(concrete))
  }

  /// Registers `object` as the singleton for its own runtime class.
  pub fn singleton_instance(&self, object: Object) -> &Self {
    let id = object.class_name().to_owned();
    self.bind(id, Binding::singleton(Concrete::Instance(object)))
  }

  /// Registers a singleton binding for `id` with an explicit concrete.
  pub fn singleton_with(&self, id: impl Into<String>, concrete: impl Into<Concrete>) -> &Self {
    self.bind(id.into(), Binding::singleton(concrete.into()))
  }

  fn bind(&self, id: String, binding: Binding) -> &Self {
    tracing::debug!(
      id = %id,
      concrete = binding.concrete.kind(),
      singleton = binding.is_singleton(),
      "binding registered"
    );
    self.bindings.borrow_mut().insert(id, Rc::new(binding));
    self
  }

  // --- Resolution ---

  /// Resolves `id` into an instance.
  ///
  /// Without a binding, `id` is autowired and the result is never cached.
  /// With a binding, the binding decides; singleton bindings memoize their
  /// first successful result.
  pub fn get(&self, id: &str) -> Result<Object> {
    let _guard = ResolutionGuard::enter(&self.resolving, id, &self.config)?;

    let binding = self.bindings.borrow().get(id).cloned();
    let Some(binding) = binding else {
      tracing::trace!(id, "no binding, autowiring");
      return self.autowire(id);
    };

    match &binding.shared {
      Some(cell) => cell
        .get_or_try_init(|| {
          let object = self.produce(id, &binding.concrete)?;
          tracing::debug!(id, class = object.class_name(), "singleton memoized");
          Ok::<_, Error>(object)
        })
        .cloned(),
      None => self.produce(id, &binding.concrete),
    }
  }

  /// Resolves `T::NAME` and views the result as `T`.
  pub fn make<T: Reflect>(&self) -> Result<Rc<T>> {
    self.make_as::<T>(T::NAME)
  }

  /// Resolves `id` and views the result as `T`, which may be the concrete
  /// Rust type or an interface view such as `dyn Trait`.
  pub fn make_as<T: ?Sized + 'static>(&self, id: &str) -> Result<Rc<T>> {
    let object = self.get(id)?;
    object.cast::<T>().ok_or_else(|| {
      ContainerError::UnexpectedType {
        class: id.to_owned(),
        actual: object.class_name().to_owned(),
        expected: type_name::<T>(),
      }
      .into()
    })
  }

  fn produce(&self, id: &str, concrete: &Concrete) -> Result<Object> {
    match concrete {
      Concrete::Factory(factory) => factory(self),
      Concrete::Class(target) if target == id => self.autowire(id),
      Concrete::Class(target) => self.get(target),
      Concrete::Instance(object) => self.instantiate(object.class()),
    }
  }

  fn autowire(&self, id: &str) -> Result<Object> {
    let class = self
      .catalog
      .borrow()
      .lookup(id)
      .ok_or_else(|| Error::NotFound(id.to_owned()))?;
    self.instantiate(&class)
  }

  fn instantiate(&self, class: &Rc<Class>) -> Result<Object> {
    let constructor = class
      .constructor()
      .ok_or_else(|| ContainerError::NotInstantiable {
        class: class.name().to_owned(),
      })?;

    tracing::trace!(class = class.name(), params = class.params().len(), "instantiating");

    let values = class
      .params()
      .iter()
      .map(|param| self.argument(class, param))
      .collect::<Result<Vec<_>>>()?;

    let value = constructor(&Args::new(class.clone(), values))?;
    Ok(Object::new(class.clone(), value))
  }

  fn argument(&self, class: &Class, param: &Param) -> Result<Argument> {
    if let Some(default) = param.default() {
      return Ok(Argument::Value(default.clone()));
    }

    let name = match param.ty() {
      Some(ParamType::Named { name, builtin: false }) => name,
      ty => {
        let class = class.name().to_owned();
        let param = param.name().to_owned();
        let err = match ty {
          None => ContainerError::MissingTypeHint { class, param },
          Some(ParamType::Union(_)) => ContainerError::UnionType { class, param },
          Some(ParamType::Named { .. }) => ContainerError::InvalidParam { class, param },
        };
        return Err(err.into());
      }
    };

    self.get(name).map(Argument::Object)
  }
}

impl fmt::Debug for Container {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Container")
      .field("classes", &self.catalog.borrow().len())
      .field("bindings", &self.bindings.borrow().len())
      .field("config", &self.config)
      .finish()
  }
}

/// Configures a [`Container`] before it is created.
#[derive(Debug)]
pub struct ContainerBuilder {
  catalog: Catalog,
  config: ContainerConfig,
}

impl ContainerBuilder {
  pub fn catalog(&mut self, catalog: Catalog) -> &mut Self {
    self.catalog = catalog;
    self
  }

  pub fn define(&mut self, class: Class) -> &mut Self {
    self.catalog.define(class);
    self
  }

  pub fn register<T: Reflect>(&mut self) -> &mut Self {
    self.catalog.register::<T>();
    self
  }

  pub fn detect_cycles(&mut self, enabled: bool) -> &mut Self {
    self.config.detect_cycles = enabled;
    self
  }

  pub fn max_depth(&mut self, limit: usize) -> &mut Self {
    self.config.max_depth = Some(limit);
    self
  }

  pub fn config(&mut self, config: ContainerConfig) -> &mut Self {
    self.config = config;
    self
  }

  pub fn finalize(&mut self) -> Container {
    Container {
      catalog: RefCell::new(std::mem::take(&mut self.catalog)),
      bindings: RefCell::default(),
      resolving: RefCell::default(),
      config: self.config,
    }
  }
}
