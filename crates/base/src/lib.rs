pub mod logging;
pub use logging::{StdoutLogger, init_stdout_logger, init_stdout_logger_with_level};

mod vec2;
pub use vec2::*;

// re-exported so downstream crates can name levels without their own log dependency
pub use log;
