//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter       | Implements         | Connects to                 |
//! |---------------|--------------------|-----------------------------|
//! | `system`      | SensorPort         | `sysinfo` component sensors |
//! |               | ProcessPort        | `sysinfo` process table     |
//! | `recognizer`  | RecognitionSource  | stdin, one line per phrase  |
//! | `log_sink`    | EventSink          | Console log output          |
//! | `display`     | EventSink          | Shared display model        |
//! | `config_file` | ConfigPort         | JSON file on disk           |
//! | `signals`     | (shutdown)         | SIGINT / SIGTERM            |

pub mod config_file;
pub mod display;
pub mod log_sink;
pub mod recognizer;
#[cfg(all(feature = "host", unix))]
pub mod signals;
#[cfg(feature = "host")]
pub mod system;
