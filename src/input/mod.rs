//! Input adapters for the render service.
//!
//! This module contains adapters that receive requests from the outside
//! world and translate them into validated render params.

pub mod http;
