//! ThermoWatch library.
//!
//! CPU temperature monitor with a rolling history, a ranked process table,
//! threshold alerts and a voice-controlled simulated fan.  The monitor
//! logic lives in [`app`] behind port traits; host integrations live in
//! [`adapters`].

#![deny(unused_must_use)]

pub mod actuator;
pub mod adapters;
pub mod alerts;
pub mod app;
pub mod channels;
pub mod config;
pub mod error;
pub mod history;
pub mod ranking;
pub mod sampler;
pub mod scheduler;
