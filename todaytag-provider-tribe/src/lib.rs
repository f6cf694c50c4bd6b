//! todaytag-provider-tribe - The Events Calendar backend for todaytag
//!
//! Implements the core's `EventQuery` and `CategoryMutator` against the
//! WordPress REST namespace `tribe/events/v1`:
//!   GET  {api_root}events          listing, paginated via `next_rest_url`
//!   POST {api_root}events/{id}     full-record update, Basic auth

mod client;
mod convert;
pub mod types;

pub use client::{DEFAULT_PER_PAGE, TribeClient, TribeConfig};
