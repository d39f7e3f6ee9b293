// OxyPulse-api lib.rs
//
// HTTP layer of the OxyPulse health estimation service.

// Public modules
pub mod api;
pub mod config;
pub mod entities;
pub mod openapi;
