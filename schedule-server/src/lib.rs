//! Platform departure scheduler server.
//!
//! A web application that turns hourly passenger demand between Putrajaya
//! and KL Sentral into a departure schedule, using either a greedy
//! platform-aware scheduler or a dynamic-programming train allocator.

pub mod config;
pub mod demand;
pub mod domain;
pub mod scheduler;
pub mod session;
pub mod web;
