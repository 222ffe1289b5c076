//! Paced record-set creation and deletion.
//!
//! The controller issues one change batch at a time and sleeps between
//! batches; the whole point of the tool is controlled, gradual load, so
//! there is deliberately no concurrency here.

use std::time::Duration;

use uuid::Uuid;

use zoneflood_directory::{
    Change, ChangeBatch, DirectoryError, HostedZone, ListRecordSetsParams, RecordSet, Result,
    RrType, ZoneDirectory,
};

/// TTL of generated record sets.
const FLOOD_TTL: u32 = 300;
/// Value of generated record sets. Resolution targets are irrelevant to
/// load, so everything points at loopback.
const FLOOD_VALUE: &str = "127.0.0.1";

/// Issues create/delete change batches against one zone, pacing them with
/// a fixed delay.
pub struct BatchController<'a> {
    directory: &'a dyn ZoneDirectory,
    max_batch_size: usize,
    batch_delay: Duration,
}

impl<'a> BatchController<'a> {
    #[must_use]
    pub fn new(
        directory: &'a dyn ZoneDirectory,
        max_batch_size: usize,
        batch_delay: Duration,
    ) -> Self {
        Self {
            directory,
            max_batch_size,
            batch_delay,
        }
    }

    /// Create record sets until the zone holds `desired` of them.
    ///
    /// `current` is the zone's record-set count at the start of the run
    /// (bookkeeping included, as the directory reports it). Each batch
    /// carries `min(max_batch_size, desired - current)` freshly generated
    /// record sets; the controller sleeps between batches but not after
    /// the last one. The first change failure aborts the loop.
    ///
    /// Returns the number of batches issued.
    pub async fn populate(
        &self,
        zone: &HostedZone,
        mut current: usize,
        desired: usize,
    ) -> Result<usize> {
        let mut batches = 0usize;
        while current < desired {
            let take = self.max_batch_size.min(desired - current);
            let changes = (0..take)
                .map(|_| Change::create(flood_record_set(&zone.name)))
                .collect();
            self.directory
                .change_record_sets(&zone.id, &ChangeBatch::new(changes))
                .await?;
            current += take;
            batches += 1;
            log::info!(
                "Applied create batch of {take} to {}: {current}/{desired}",
                zone.id
            );
            if current != desired {
                log::debug!("Sleeping {}s before the next batch", self.batch_delay.as_secs());
                tokio::time::sleep(self.batch_delay).await;
            }
        }
        Ok(batches)
    }

    /// Delete up to `desired_deletions` record sets from the zone.
    ///
    /// Enumerates the zone's deletable record sets once, then walks an
    /// index cursor over that snapshot: each batch deletes
    /// `min(max_batch_size, target - deleted)` record sets, sleeping
    /// between batches but not after the last one. Bookkeeping record sets
    /// are never part of the snapshot.
    ///
    /// Returns how many deletable record sets remain in the zone, so the
    /// caller can decide whether the now-empty zone should go too.
    pub async fn depopulate(&self, zone: &HostedZone, desired_deletions: usize) -> Result<usize> {
        let eligible = self.collect_eligible(&zone.id).await?;
        let target = desired_deletions.min(eligible.len());
        let mut deleted = 0usize;
        while deleted < target {
            let take = self.max_batch_size.min(target - deleted);
            let changes = eligible[deleted..deleted + take]
                .iter()
                .cloned()
                .map(Change::delete)
                .collect();
            self.directory
                .change_record_sets(&zone.id, &ChangeBatch::new(changes))
                .await?;
            deleted += take;
            log::info!(
                "Applied delete batch of {take} to {}: {deleted}/{target}",
                zone.id
            );
            if deleted != target {
                log::debug!("Sleeping {}s before the next batch", self.batch_delay.as_secs());
                tokio::time::sleep(self.batch_delay).await;
            }
        }
        Ok(eligible.len() - target)
    }

    /// Enumerate every deletable record set in the zone, following the
    /// directory's continuation cursor until the listing is exhausted.
    ///
    /// Bookkeeping types are skipped as pages arrive, so the returned
    /// snapshot only ever contains record sets this tool may delete.
    async fn collect_eligible(&self, zone_id: &str) -> Result<Vec<RecordSet>> {
        let mut eligible = Vec::new();
        let mut params = ListRecordSetsParams {
            max_items: u32::try_from(self.max_batch_size).unwrap_or(u32::MAX),
            cursor: None,
        };
        loop {
            let page = self.directory.list_record_sets(zone_id, &params).await?;
            eligible.extend(
                page.record_sets
                    .into_iter()
                    .filter(|rs| !rs.rr_type.is_bookkeeping()),
            );
            if !page.truncated {
                break;
            }
            let Some(cursor) = page.next_cursor else {
                return Err(DirectoryError::ParseError {
                    detail: "truncated listing page without a continuation cursor".to_string(),
                });
            };
            params = params.next_page(cursor);
        }
        Ok(eligible)
    }
}

/// A uniquely named address record under the zone.
fn flood_record_set(zone_name: &str) -> RecordSet {
    RecordSet {
        name: format!("{}.{zone_name}", Uuid::new_v4()),
        rr_type: RrType::A,
        ttl: FLOOD_TTL,
        values: vec![FLOOD_VALUE.to_string()],
    }
}
