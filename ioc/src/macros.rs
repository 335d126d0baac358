//! Public macros for ergonomic service resolution.

/// Resolves a service and panics if it cannot be resolved.
///
/// Without a container expression the thread's [`global()`](crate::global)
/// container is used. For a non-panicking version, call
/// [`Container::make`](crate::Container::make) or
/// [`Container::make_as`](crate::Container::make_as) directly.
///
/// # Panics
///
/// Panics with the resolution error if the service cannot be resolved.
///
/// # Examples
///
/// ```
/// use autowire_ioc::{resolve, Class, Container, Reflect};
/// use std::rc::Rc;
///
/// trait Greeter {
///   fn greet(&self) -> String;
/// }
///
/// #[derive(Default)]
/// struct English;
///
/// impl Greeter for English {
///   fn greet(&self) -> String {
///     "Hello!".to_string()
///   }
/// }
///
/// impl Reflect for English {
///   const NAME: &'static str = "English";
///
///   fn class() -> Class {
///     Class::builder::<Self>(Self::NAME)
///       .implements::<dyn Greeter>(|english| english as Rc<dyn Greeter>)
///       .construct(|_| Ok(English))
///   }
/// }
///
/// let container = Container::new();
/// container.register::<English>().define(Class::interface("Greeter"));
/// container.set("Greeter", English::NAME);
///
/// let english = resolve!(container => English);
/// let greeter = resolve!(container => trait Greeter, "Greeter");
/// assert_eq!(english.greet(), greeter.greet());
/// ```
#[macro_export]
macro_rules! resolve {
  // resolve!(trait Greeter, "Greeter")
  (trait $trait_ident:ident, $id:expr) => {
    $crate::global()
      .make_as::<dyn $trait_ident>($id)
      .unwrap_or_else(|err| {
        panic!(
          "Failed to resolve required trait service {}: {}",
          std::any::type_name::<dyn $trait_ident>(),
          err
        )
      })
  };

  // resolve!(Widget)
  ($type:ty) => {
    $crate::global()
      .make::<$type>()
      .unwrap_or_else(|err| {
        panic!(
          "Failed to resolve required service {}: {}",
          std::any::type_name::<$type>(),
          err
        )
      })
  };

  // resolve!(container => trait Greeter, "Greeter")
  ($container:expr => trait $trait_ident:ident, $id:expr) => {
    $container
      .make_as::<dyn $trait_ident>($id)
      .unwrap_or_else(|err| {
        panic!(
          "Failed to resolve required trait service {}: {}",
          std::any::type_name::<dyn $trait_ident>(),
          err
        )
      })
  };

  // resolve!(container => Widget)
  ($container:expr => $type:ty) => {
    $container
      .make::<$type>()
      .unwrap_or_else(|err| {
        panic!(
          "Failed to resolve required service {}: {}",
          std::any::type_name::<$type>(),
          err
        )
      })
  };
}
