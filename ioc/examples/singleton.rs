use autowire_ioc::{Class, Container, Object, Reflect};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing_subscriber::EnvFilter;

// A simple service that gets a unique ID upon creation.
struct RequestTracker {
  id: usize,
}

static ID_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl Reflect for RequestTracker {
  const NAME: &'static str = "RequestTracker";

  fn class() -> Class {
    Class::builder::<Self>(Self::NAME).construct(|_| {
      println!("Creating RequestTracker...");
      Ok(RequestTracker {
        id: ID_COUNTER.fetch_add(1, Ordering::SeqCst),
      })
    })
  }
}

fn main() {
  // Run with RUST_LOG=autowire_ioc=trace to watch the container work.
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let container = Container::new();
  container.register::<RequestTracker>();

  // --- Unbound: autowired fresh on every request ---
  let t1 = container.make::<RequestTracker>().unwrap();
  let t2 = container.make::<RequestTracker>().unwrap();
  println!("Unbound 1 ID: {}, Unbound 2 ID: {}", t1.id, t2.id);
  assert_ne!(t1.id, t2.id);

  // --- Singleton: autowired once, then cached ---
  container.singleton(RequestTracker::NAME);
  let s1 = container.get(RequestTracker::NAME).unwrap();
  let s2 = container.get(RequestTracker::NAME).unwrap();
  assert!(
    Object::ptr_eq(&s1, &s2),
    "Singleton instances should be identical"
  );
  println!("Singleton instances are the same pointer, as expected.");
}
