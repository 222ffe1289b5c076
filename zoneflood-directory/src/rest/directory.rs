//! [`ZoneDirectory`] implementation over the REST transport.

use async_trait::async_trait;

use crate::error::{DirectoryError, Result};
use crate::traits::ZoneDirectory;
use crate::types::{
    ChangeBatch, CreateZoneRequest, HostedZone, ListRecordSetsParams, RecordSetPage,
};

use super::{ErrorContext, MAX_CHANGES_PER_CALL, MAX_LIST_ITEMS, RestZoneDirectory};

#[async_trait]
impl ZoneDirectory for RestZoneDirectory {
    async fn create_zone(&self, req: &CreateZoneRequest) -> Result<HostedZone> {
        let context = ErrorContext {
            zone_name: Some(req.name.clone()),
            network_id: Some(req.network_id.clone()),
            ..ErrorContext::default()
        };
        self.post_json("/zones", req, &context).await
    }

    async fn describe_zone(&self, zone_id: &str) -> Result<HostedZone> {
        self.get_json(
            &format!("/zones/{zone_id}"),
            &ErrorContext::for_zone(zone_id),
        )
        .await
    }

    async fn list_record_sets(
        &self,
        zone_id: &str,
        params: &ListRecordSetsParams,
    ) -> Result<RecordSetPage> {
        let params = params.validated(MAX_LIST_ITEMS);
        let mut path = format!("/zones/{zone_id}/rrsets?max_items={}", params.max_items);
        if let Some(cursor) = &params.cursor {
            path.push_str(&format!("&cursor={}", urlencoding::encode(cursor)));
        }
        self.get_json(&path, &ErrorContext::for_zone(zone_id)).await
    }

    async fn change_record_sets(&self, zone_id: &str, batch: &ChangeBatch) -> Result<()> {
        // Reject locally what the service would reject anyway, before
        // spending a request on it.
        if batch.is_empty() {
            return Err(DirectoryError::InvalidChangeBatch {
                detail: "change batch is empty".to_string(),
            });
        }
        if batch.len() > MAX_CHANGES_PER_CALL {
            return Err(DirectoryError::InvalidChangeBatch {
                detail: format!(
                    "{} changes exceed the per-call ceiling of {MAX_CHANGES_PER_CALL}",
                    batch.len()
                ),
            });
        }
        self.post_ack(
            &format!("/zones/{zone_id}/rrsets/change"),
            batch,
            &ErrorContext::for_zone(zone_id),
        )
        .await
    }

    async fn delete_zone(&self, zone_id: &str) -> Result<()> {
        self.delete_ack(
            &format!("/zones/{zone_id}"),
            &ErrorContext::for_zone(zone_id),
        )
        .await
    }
}
