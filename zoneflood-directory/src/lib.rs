//! # zoneflood-directory
//!
//! Client library for the zone directory: the remote service that owns
//! private hosted zones and their resource record sets.
//!
//! The [`ZoneDirectory`] trait is the tool-facing contract: create and
//! describe zones, page through record sets, apply atomic change batches,
//! delete empty zones. [`RestZoneDirectory`] is the one concrete
//! implementation, speaking the directory's JSON envelope protocol over
//! HTTPS with bearer-token authentication.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zoneflood_directory::{ListRecordSetsParams, RestZoneDirectory, ZoneDirectory};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let directory = RestZoneDirectory::new("api-token".to_string(), "us-east-1");
//!
//!     let zone = directory.describe_zone("Z1A2B3").await?;
//!     println!("{} holds {} record sets", zone.name, zone.record_set_count);
//!
//!     let page = directory
//!         .list_record_sets(&zone.id, &ListRecordSetsParams::default())
//!         .await?;
//!     for rs in &page.record_sets {
//!         println!("{} {} ttl={}", rs.name, rs.rr_type, rs.ttl);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, DirectoryError>`](DirectoryError).
//! Transient transport conditions (`NetworkError`, `Timeout`,
//! `RateLimited`) are reported but never retried: this client makes exactly
//! one attempt per call so callers that count submitted mutations can trust
//! their counters.

mod error;
pub mod rest;
mod traits;
mod types;

pub use error::{DirectoryError, Result};
pub use rest::{MAX_CHANGES_PER_CALL, MAX_LIST_ITEMS, RestZoneDirectory};
pub use traits::ZoneDirectory;
pub use types::{
    Change, ChangeAction, ChangeBatch, CreateZoneRequest, HostedZone, ListRecordSetsParams,
    RecordSet, RecordSetPage, RrType, ZoneNetwork,
};
