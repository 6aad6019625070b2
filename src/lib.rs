//! Client core shared by the Brezza blog frontends.
//!
//! Both deployments (admin dashboard and public blog) proxy every read and
//! write to the external backend API. This crate holds the pieces they
//! share: the authenticated [`client::ApiClient`] that unwraps the backend's
//! `{code, message, data}` envelope, the per-process [`cache::CacheManager`]
//! for low-churn resources, the [`session`] cookie helpers carrying the
//! bearer token, and the [`config`] layer that wires them together.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod session;

pub use brezza_api_types as types;
pub use cache::CacheManager;
pub use client::ApiClient;
pub use config::{CacheConfig, ClientConfig, Profile};
pub use error::ApiError;
