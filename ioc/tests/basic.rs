mod common;

use autowire_ioc::{Class, Container, Object, Reflect};
use common::{Clock, ConsoleLogger, Mailer, Report, Widget};
use pretty_assertions::assert_eq;
use std::rc::Rc;

#[test]
fn test_get_autowires_a_class_without_parameters() {
  let container = common::container();

  let clock = container.get("Clock").unwrap();

  assert_eq!(clock.class_name(), "Clock");
  assert!(clock.is::<Clock>());
}

#[test]
fn test_unbound_get_returns_a_new_instance_every_time() {
  let container = common::container();

  let first = container.get("Clock").unwrap();
  let second = container.get("Clock").unwrap();

  assert!(!Object::ptr_eq(&first, &second));
  assert!(!container.has("Clock"));
}

#[test]
fn test_default_value_is_used_verbatim() {
  let container = common::container();

  let widget = container.make::<Widget>().unwrap();

  assert_eq!(widget.count, 5);
}

#[test]
fn test_default_value_wins_over_resolvable_class_type() {
  let container = common::container();

  // `clock` is typed as a resolvable class but has a default of `None`.
  let report = container.make::<Report>().unwrap();

  assert!(report.clock.is_none());
}

#[test]
fn test_class_parameters_are_resolved_recursively() {
  let container = common::container();
  container.set("Logger", ConsoleLogger::NAME);

  let mailer = container.make::<Mailer>().unwrap();

  assert_eq!(mailer.logger.log("hi"), "[console] hi");
}

#[test]
fn test_nested_dependencies_honour_bindings() {
  let container = common::container();
  let clock = Object::of(Clock { serial: 9_001 });
  container
    .set("Logger", ConsoleLogger::NAME)
    .singleton_instance(clock.clone());

  let mailer = container.make::<Mailer>().unwrap();

  assert_eq!(mailer.clock.serial, 9_001);
  assert!(Rc::ptr_eq(&mailer.clock, &clock.cast::<Clock>().unwrap()));
}

#[test]
fn test_classes_can_be_defined_after_construction() {
  #[derive(Default)]
  struct Calendar;

  let container = Container::new();
  assert!(container.get("Calendar").unwrap_err().is_not_found());

  container.define(Class::with_default::<Calendar>("Calendar"));

  assert!(container.get("Calendar").unwrap().is::<Calendar>());
}
