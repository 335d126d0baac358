//! The shared container instance and its accessor.

use crate::container::Container;
use std::rc::Rc;

// One container per thread, created on first access. `Container` is not
// `Sync`, so it cannot be a process-wide static. It lives as long as its
// thread and is never torn down early.
thread_local! {
  static GLOBAL_CONTAINER: Rc<Container> = Rc::new(Container::new());
}

/// Returns this thread's shared container.
///
/// Passing a container explicitly is preferred; this accessor exists for
/// bootstrap code that needs one well-known instance.
///
/// # Examples
///
/// ```
/// use autowire_ioc::{global, Class};
///
/// #[derive(Default)]
/// struct Clock;
///
/// global().define(Class::with_default::<Clock>("Clock")).singleton("Clock");
/// assert!(global().has("Clock"));
/// ```
pub fn global() -> Rc<Container> {
  GLOBAL_CONTAINER.with(Rc::clone)
}
