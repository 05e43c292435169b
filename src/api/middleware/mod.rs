//! HTTP middleware making up the request pipeline.
//!
//! Stages, outermost first:
//!
//! 1. [`access_log`] - start/duration logging, runs for every request
//! 2. [`auth`] - static API key check
//! 3. [`rate_limit`] - per-client cooldown admission
//!
//! Each stage has the same `(state, request, next) -> response` shape and
//! either calls `next.run(request)` or answers on its own.

pub mod access_log;
pub mod auth;
pub mod rate_limit;
