#![allow(dead_code)]

use autowire_ioc::{Catalog, Class, ClassKind, Container, Param, ParamType, Reflect};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

// Every constructed fixture takes a fresh serial so tests can tell
// instances apart by value as well as by pointer.
static SERIAL: AtomicUsize = AtomicUsize::new(0);

pub fn next_serial() -> usize {
  SERIAL.fetch_add(1, Ordering::SeqCst)
}

// --- Interfaces ---

pub trait Greeter {
  fn greet(&self) -> String;
}

pub trait Logger {
  fn log(&self, message: &str) -> String;
}

// --- Classes without constructor parameters ---

#[derive(Debug)]
pub struct Clock {
  pub serial: usize,
}

impl Reflect for Clock {
  const NAME: &'static str = "Clock";

  fn class() -> Class {
    Class::builder::<Self>(Self::NAME).construct(|_| Ok(Clock { serial: next_serial() }))
  }
}

#[derive(Debug)]
pub struct EnglishGreeter {
  pub serial: usize,
}

impl Greeter for EnglishGreeter {
  fn greet(&self) -> String {
    "Hello!".to_string()
  }
}

impl Reflect for EnglishGreeter {
  const NAME: &'static str = "EnglishGreeter";

  fn class() -> Class {
    Class::builder::<Self>(Self::NAME)
      .implements::<dyn Greeter>(|greeter| greeter as Rc<dyn Greeter>)
      .construct(|_| Ok(EnglishGreeter { serial: next_serial() }))
  }
}

#[derive(Debug)]
pub struct ConsoleLogger {
  pub serial: usize,
}

impl Logger for ConsoleLogger {
  fn log(&self, message: &str) -> String {
    format!("[console] {message}")
  }
}

impl Reflect for ConsoleLogger {
  const NAME: &'static str = "ConsoleLogger";

  fn class() -> Class {
    Class::builder::<Self>(Self::NAME)
      .implements::<dyn Logger>(|logger| logger as Rc<dyn Logger>)
      .construct(|_| Ok(ConsoleLogger { serial: next_serial() }))
  }
}

// --- Classes with constructor parameters ---

/// `Widget(count: int = 5)`
#[derive(Debug)]
pub struct Widget {
  pub count: i64,
}

impl Reflect for Widget {
  const NAME: &'static str = "Widget";

  fn class() -> Class {
    Class::builder::<Self>(Self::NAME)
      .param(Param::new("count").builtin("int").default_value(5_i64))
      .construct(|args| Ok(Widget { count: args.value(0)? }))
  }
}

/// Depends on two classes: an interface and a concrete one.
pub struct Mailer {
  pub logger: Rc<dyn Logger>,
  pub clock: Rc<Clock>,
}

impl Reflect for Mailer {
  const NAME: &'static str = "Mailer";

  fn class() -> Class {
    Class::builder::<Self>(Self::NAME)
      .param(Param::new("logger").class("Logger"))
      .param(Param::new("clock").class(Clock::NAME))
      .construct(|args| {
        Ok(Mailer {
          logger: args.object(0)?,
          clock: args.object(1)?,
        })
      })
  }
}

/// `Report(clock: ?Clock = null)`
#[derive(Debug)]
pub struct Report {
  pub clock: Option<Rc<Clock>>,
}

impl Reflect for Report {
  const NAME: &'static str = "Report";

  fn class() -> Class {
    Class::builder::<Self>(Self::NAME)
      .param(
        Param::new("clock")
          .class(Clock::NAME)
          .default_value(None::<Rc<Clock>>),
      )
      .construct(|args| Ok(Report { clock: args.value(0)? }))
  }
}

/// `Counter(int $parameter)`
#[derive(Debug)]
pub struct Counter;

impl Reflect for Counter {
  const NAME: &'static str = "Counter";

  fn class() -> Class {
    Class::builder::<Self>(Self::NAME)
      .param(Param::new("parameter").builtin("int"))
      .construct(|_| Ok(Counter))
  }
}

/// `Untyped($parameter)`
#[derive(Debug)]
pub struct Untyped;

impl Reflect for Untyped {
  const NAME: &'static str = "Untyped";

  fn class() -> Class {
    Class::builder::<Self>(Self::NAME)
      .param(Param::new("parameter"))
      .construct(|_| Ok(Untyped))
  }
}

/// `Schedule(Clock|string $dateTime)`
#[derive(Debug)]
pub struct Schedule;

impl Reflect for Schedule {
  const NAME: &'static str = "Schedule";

  fn class() -> Class {
    Class::builder::<Self>(Self::NAME)
      .param(Param::new("dateTime").union([
        ParamType::class(Clock::NAME),
        ParamType::builtin("string"),
      ]))
      .construct(|_| Ok(Schedule))
  }
}

/// `Timetable(Clock $clock, $slot)`: the first parameter resolves, the
/// second never does.
#[derive(Debug)]
pub struct Timetable;

impl Reflect for Timetable {
  const NAME: &'static str = "Timetable";

  fn class() -> Class {
    Class::builder::<Self>(Self::NAME)
      .param(Param::new("clock").class(Clock::NAME))
      .param(Param::new("slot"))
      .construct(|_| Ok(Timetable))
  }
}

/// Every fixture class, plus the non-instantiable declarations.
pub fn catalog() -> Catalog {
  let mut catalog = Catalog::new();
  catalog
    .register::<Clock>()
    .register::<EnglishGreeter>()
    .register::<ConsoleLogger>()
    .register::<Widget>()
    .register::<Mailer>()
    .register::<Report>()
    .register::<Counter>()
    .register::<Untyped>()
    .register::<Schedule>()
    .register::<Timetable>()
    .define(Class::interface("Greeter"))
    .define(Class::interface("Logger"))
    .define(Class::abstract_class("Shape"))
    .define(Class::declared("Loggable", ClassKind::Trait));
  catalog
}

pub fn container() -> Container {
  Container::with_catalog(catalog())
}
