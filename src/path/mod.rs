mod resolver;

pub use resolver::{ExecutableResolver, EXECUTABLE_SUFFIXES};
