//! Application core: monitor logic with no direct OS access.
//!
//! This module holds the rules of the thermal monitor: sampling
//! orchestration, rolling history, process ranking, threshold alerts and
//! voice-driven fan control.  All interaction with the host happens
//! through **port traits** defined in [`ports`], so the core runs under
//! test with scripted providers.

pub mod commands;
pub mod coordinator;
pub mod events;
pub mod ports;
pub mod service;
