//! Data-fetch core for browsing the drinks and party-games catalogs.
//!
//! Layers, leaf first: [`decode`] turns raw backend JSON into the strict
//! [`model`], [`transport`] talks HTTP, [`catalog`] validates and decodes
//! responses, and [`ui::catalog`] publishes observable list/detail states.

pub mod catalog;
pub mod config;
pub mod decode;
pub mod model;
pub mod telemetry;
pub mod transport;
pub mod ui;
