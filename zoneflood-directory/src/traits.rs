use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    ChangeBatch, CreateZoneRequest, HostedZone, ListRecordSetsParams, RecordSetPage,
};

/// The zone directory collaborator.
///
/// Everything this tool does against the remote DNS service goes through
/// this trait, so the pacing logic can be driven against an in-memory
/// double in tests and the REST client stays the only place that knows the
/// wire protocol.
#[async_trait]
pub trait ZoneDirectory: Send + Sync {
    /// Create a private hosted zone associated with a network.
    ///
    /// Fails with [`NetworkNotFound`](crate::DirectoryError::NetworkNotFound)
    /// for an unknown network identifier and
    /// [`ZoneExists`](crate::DirectoryError::ZoneExists) on a name collision.
    async fn create_zone(&self, req: &CreateZoneRequest) -> Result<HostedZone>;

    /// Describe a hosted zone, including its current record-set count.
    async fn describe_zone(&self, zone_id: &str) -> Result<HostedZone>;

    /// Fetch one page of the zone's record sets.
    ///
    /// Pass the previous page's cursor via
    /// [`ListRecordSetsParams::next_page`] to continue; a page with
    /// `truncated == false` is the last one.
    async fn list_record_sets(
        &self,
        zone_id: &str,
        params: &ListRecordSetsParams,
    ) -> Result<RecordSetPage>;

    /// Apply a change batch to the zone, all-or-nothing.
    async fn change_record_sets(&self, zone_id: &str, batch: &ChangeBatch) -> Result<()>;

    /// Delete a hosted zone.
    ///
    /// Only valid once every non-bookkeeping record set has been removed;
    /// otherwise the directory answers
    /// [`ZoneNotEmpty`](crate::DirectoryError::ZoneNotEmpty).
    async fn delete_zone(&self, zone_id: &str) -> Result<()>;
}
