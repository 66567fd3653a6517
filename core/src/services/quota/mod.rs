//! Generation credit metering
//!
//! Each identity may complete `QUOTA_LIMIT` generations over its lifetime.
//! Callers check the quota before starting a generation and record usage
//! only after the generation backend confirmed success.
//!
//! The check and the increment are two separate store operations around a
//! long external call. Concurrent requests for one email can both pass the
//! check with a single credit left, so the limit can be exceeded by the
//! degree of concurrency. This is accepted behavior.

mod service;


pub use service::QuotaService;
