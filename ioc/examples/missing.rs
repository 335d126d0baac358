use autowire_ioc::{global, resolve, Class, Reflect};
use std::panic;

struct UnregisteredService;

impl Reflect for UnregisteredService {
  const NAME: &'static str = "UnregisteredService";

  fn class() -> Class {
    Class::builder::<Self>(Self::NAME).construct(|_| Ok(UnregisteredService))
  }
}

fn main() {
  // --- Using the panicking `resolve!` macro ---
  println!("Attempting to resolve a service that was never registered...");

  let result = panic::catch_unwind(|| {
    // This line will panic!
    let _service = resolve!(UnregisteredService);
  });

  assert!(result.is_err(), "resolve! should have panicked.");
  println!("Successfully caught the expected panic from resolve!.");

  // --- Using the fallible `get()` method ---
  println!("\nNow, attempting to resolve using the fallible `get()` method...");

  match global().get(UnregisteredService::NAME) {
    Ok(_) => panic!("Should not have found the service!"),
    Err(err) => println!("Correctly received an error: {err}"),
  }

  // --- Interfaces exist but cannot be built ---
  global().define(Class::interface("Repository"));
  match global().get("Repository") {
    Ok(_) => panic!("Interfaces are not instantiable!"),
    Err(err) => println!("Correctly received an error: {err}"),
  }
}
