//! `docgen` crate — sample PDF documents for the scanning demo.
//!
//! Produces five fixed-content documents (invoice, contract, employment
//! offer, policy, memo), one per department story in the demo script.  The
//! content is deliberately literal: these files exist to be scanned, routed
//! and approved in front of an audience, not to be configurable.

pub mod documents;
pub mod error;
pub mod page;

pub use documents::{generate_all, SAMPLE_DOCUMENTS};
pub use error::DocGenError;
