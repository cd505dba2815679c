//! Courier Headless - REST front-end for a peer-to-peer messaging node
//!
//! This crate projects contacts, private messages and node events into JSON
//! and serves them over HTTP and WebSocket.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
