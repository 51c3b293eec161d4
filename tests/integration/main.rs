//! Integration test driver for `tests/integration/` submodule.
//!
//! Each `mod` below maps to a file that exercises a specific subsystem
//! against mock adapters.  No sensors, process table or speech engine
//! are touched.

mod coordinator_tests;
mod mock_ports;
mod service_tests;
