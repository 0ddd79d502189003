// ABOUTME: Core library for costview, containing the route model and product route tables.
// ABOUTME: This crate defines the path-matching contract used by the client shell.

pub mod catalog;
pub mod pattern;
pub mod route;

pub use pattern::{PathParams, PathPattern};
pub use route::{Resolved, RouteEntry, RouteError, RouteTable};
