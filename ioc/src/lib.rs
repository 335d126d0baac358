//! # Autowire IoC
//!
//! A single-threaded Inversion of Control (IoC) container that builds object
//! graphs by autowiring: given a type identifier, it looks up the type's
//! constructor metadata, resolves every dependency the constructor declares,
//! and constructs the instance.
//!
//! ## Core Concepts
//!
//! - **Class**: metadata describing a type: its identifier, its constructor
//!   parameters, and how to build it. Types usually describe themselves by
//!   implementing [`Reflect`].
//! - **Catalog**: the classes a container can autowire. An identifier that is
//!   not in the catalog "does not exist".
//! - **Binding**: a rule registered with `set` or `singleton` that overrides
//!   autowiring for an identifier: a factory, another identifier, or a
//!   pre-built instance.
//! - **Singleton**: a binding whose first result is cached and handed out on
//!   every later `get`.
//!
//! ## Quick Start
//!
//! ```
//! use autowire_ioc::{Class, Concrete, Container, Object, Param, Reflect};
//! use std::rc::Rc;
//!
//! trait Logger {
//!   fn log(&self, message: &str) -> String;
//! }
//!
//! #[derive(Default)]
//! struct ConsoleLogger;
//!
//! impl Logger for ConsoleLogger {
//!   fn log(&self, message: &str) -> String {
//!     format!("[console] {message}")
//!   }
//! }
//!
//! impl Reflect for ConsoleLogger {
//!   const NAME: &'static str = "ConsoleLogger";
//!
//!   fn class() -> Class {
//!     Class::builder::<Self>(Self::NAME)
//!       .implements::<dyn Logger>(|logger| logger as Rc<dyn Logger>)
//!       .construct(|_| Ok(ConsoleLogger))
//!   }
//! }
//!
//! struct Mailer {
//!   logger: Rc<dyn Logger>,
//!   retries: i64,
//! }
//!
//! impl Reflect for Mailer {
//!   const NAME: &'static str = "Mailer";
//!
//!   fn class() -> Class {
//!     Class::builder::<Self>(Self::NAME)
//!       .param(Param::new("logger").class("Logger"))
//!       .param(Param::new("retries").builtin("int").default_value(3_i64))
//!       .construct(|args| {
//!         Ok(Mailer {
//!           logger: args.object(0)?,
//!           retries: args.value(1)?,
//!         })
//!       })
//!   }
//! }
//!
//! let container = Container::new();
//! container
//!   .register::<ConsoleLogger>()
//!   .register::<Mailer>()
//!   .define(Class::interface("Logger"));
//!
//! // Every `Logger` dependency gets the same console logger.
//! container.singleton_with(
//!   "Logger",
//!   Concrete::factory(|_| Ok(Object::of(ConsoleLogger))),
//! );
//!
//! let mailer = container.make::<Mailer>().unwrap();
//! assert_eq!(mailer.retries, 3);
//! assert_eq!(mailer.logger.log("sent"), "[console] sent");
//! ```

mod catalog;
mod class;
mod config;
mod container;
mod core;
mod error;
mod global;
mod macros;
mod object;

pub use catalog::Catalog;
pub use class::{Class, ClassBuilder, ClassKind, Param, ParamType, Reflect};
pub use config::ContainerConfig;
pub use container::{Container, ContainerBuilder};
pub use crate::core::{Concrete, Factory};
pub use error::{ContainerError, Error, Result};
pub use global::global;
pub use object::{Args, Object};
