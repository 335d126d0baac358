use autowire_ioc::{Class, Container, Param, Reflect};
use std::rc::Rc;

// 1. Define the abstraction (the trait)
trait Logger {
  fn log(&self, message: &str);
}

// 2. Define a concrete implementation and let it be viewed as `dyn Logger`
struct ConsoleLogger;

impl Logger for ConsoleLogger {
  fn log(&self, message: &str) {
    println!("[CONSOLE LOG]: {}", message);
  }
}

impl Reflect for ConsoleLogger {
  const NAME: &'static str = "ConsoleLogger";

  fn class() -> Class {
    Class::builder::<Self>(Self::NAME)
      .implements::<dyn Logger>(|logger| logger as Rc<dyn Logger>)
      .construct(|_| Ok(ConsoleLogger))
  }
}

// 3. Define a service whose constructor depends on the abstraction
struct ReportService {
  logger: Rc<dyn Logger>,
  title: String,
}

impl ReportService {
  fn generate(&self) {
    self.logger.log(&format!("Generating '{}'...", self.title));
  }
}

impl Reflect for ReportService {
  const NAME: &'static str = "ReportService";

  fn class() -> Class {
    Class::builder::<Self>(Self::NAME)
      .param(Param::new("logger").class("Logger"))
      .param(
        Param::new("title")
          .builtin("string")
          .default_value(String::from("Quarterly report")),
      )
      .construct(|args| {
        Ok(ReportService {
          logger: args.object(0)?,
          title: args.value(1)?,
        })
      })
  }
}

fn main() {
  let container = Container::new();
  container
    .register::<ConsoleLogger>()
    .register::<ReportService>()
    .define(Class::interface("Logger"));

  // 4. Point the interface at the implementation
  container.singleton_with("Logger", ConsoleLogger::NAME);

  // 5. Autowire the service; its logger is resolved through the binding
  let report_service = container.make::<ReportService>().unwrap();
  report_service.generate();
}
