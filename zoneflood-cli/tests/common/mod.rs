//! Shared test doubles for driving runs against an in-memory directory.

#![allow(dead_code)]
#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

use std::sync::Mutex;

use async_trait::async_trait;

use zoneflood_directory::{
    ChangeAction, ChangeBatch, CreateZoneRequest, DirectoryError, HostedZone,
    ListRecordSetsParams, RecordSet, RecordSetPage, Result, RrType, ZoneDirectory, ZoneNetwork,
};

pub const TEST_ZONE_ID: &str = "Z-FLOOD-TEST";
pub const TEST_ZONE_NAME: &str = "flood.test";

/// Assert a `Result` is `Ok` and unwrap it, failing the test otherwise.
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// Which directory operation a call hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    CreateZone,
    DescribeZone,
    ListRecordSets,
    ChangeRecordSets,
    DeleteZone,
}

#[derive(Default)]
struct State {
    zone_name: String,
    records: Vec<RecordSet>,
    calls: Vec<CallKind>,
    change_batches: Vec<ChangeBatch>,
    /// 1-based index of the change call that should fail.
    fail_change_call: Option<usize>,
    zone_deleted: bool,
}

/// In-memory [`ZoneDirectory`] that applies change batches to a record
/// store and records every call for later assertions.
pub struct ScriptedDirectory {
    state: Mutex<State>,
}

impl ScriptedDirectory {
    /// A directory holding one zone with its SOA and NS bookkeeping
    /// records and nothing else.
    pub fn new() -> Self {
        let state = State {
            zone_name: TEST_ZONE_NAME.to_string(),
            records: vec![
                RecordSet {
                    name: TEST_ZONE_NAME.to_string(),
                    rr_type: RrType::Soa,
                    ttl: 900,
                    values: vec!["ns1.flood.test admin.flood.test 1 7200 900 1209600 300".to_string()],
                },
                RecordSet {
                    name: TEST_ZONE_NAME.to_string(),
                    rr_type: RrType::Ns,
                    ttl: 172_800,
                    values: vec!["ns1.flood.test".to_string(), "ns2.flood.test".to_string()],
                },
            ],
            ..State::default()
        };
        Self {
            state: Mutex::new(state),
        }
    }

    /// Seed `n` deletable address records.
    pub fn with_flood_records(self, n: usize) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            for i in 0..n {
                state.records.push(RecordSet {
                    name: format!("r{i}.{TEST_ZONE_NAME}"),
                    rr_type: RrType::A,
                    ttl: 300,
                    values: vec!["127.0.0.1".to_string()],
                });
            }
        }
        self
    }

    /// Make the `nth` (1-based) change call fail without applying.
    pub fn failing_change_call(self, nth: usize) -> Self {
        self.state.lock().unwrap().fail_change_call = Some(nth);
        self
    }

    /// Snapshot of the hosted zone as `describe_zone` would report it.
    pub fn zone(&self) -> HostedZone {
        let state = self.state.lock().unwrap();
        HostedZone {
            id: TEST_ZONE_ID.to_string(),
            name: state.zone_name.clone(),
            record_set_count: state.records.len() as u64,
            private: true,
            network: Some(ZoneNetwork {
                id: "net-12345".to_string(),
                region: "us-east-1".to_string(),
            }),
        }
    }

    pub fn calls(&self) -> Vec<CallKind> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn change_batches(&self) -> Vec<ChangeBatch> {
        self.state.lock().unwrap().change_batches.clone()
    }

    pub fn batch_sizes(&self) -> Vec<usize> {
        self.change_batches().iter().map(ChangeBatch::len).collect()
    }

    pub fn list_call_count(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| **c == CallKind::ListRecordSets)
            .count()
    }

    pub fn record_count(&self) -> usize {
        self.state.lock().unwrap().records.len()
    }

    pub fn eligible_count(&self) -> usize {
        self.state
            .lock()
            .unwrap()
            .records
            .iter()
            .filter(|r| !r.rr_type.is_bookkeeping())
            .count()
    }

    pub fn zone_deleted(&self) -> bool {
        self.state.lock().unwrap().zone_deleted
    }
}

#[async_trait]
impl ZoneDirectory for ScriptedDirectory {
    async fn create_zone(&self, req: &CreateZoneRequest) -> Result<HostedZone> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(CallKind::CreateZone);
        state.zone_name = req.name.clone();
        Ok(HostedZone {
            id: TEST_ZONE_ID.to_string(),
            name: req.name.clone(),
            record_set_count: state.records.len() as u64,
            private: true,
            network: Some(ZoneNetwork {
                id: req.network_id.clone(),
                region: req.network_region.clone(),
            }),
        })
    }

    async fn describe_zone(&self, zone_id: &str) -> Result<HostedZone> {
        self.state.lock().unwrap().calls.push(CallKind::DescribeZone);
        if zone_id != TEST_ZONE_ID {
            return Err(DirectoryError::ZoneNotFound {
                zone_id: zone_id.to_string(),
                raw_message: None,
            });
        }
        Ok(self.zone())
    }

    async fn list_record_sets(
        &self,
        _zone_id: &str,
        params: &ListRecordSetsParams,
    ) -> Result<RecordSetPage> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(CallKind::ListRecordSets);
        let start = params
            .cursor
            .as_deref()
            .map_or(0, |c| c.parse::<usize>().unwrap_or(0));
        let end = (start + params.max_items as usize).min(state.records.len());
        let truncated = end < state.records.len();
        Ok(RecordSetPage {
            record_sets: state.records[start..end].to_vec(),
            next_cursor: truncated.then(|| end.to_string()),
            truncated,
        })
    }

    async fn change_record_sets(&self, _zone_id: &str, batch: &ChangeBatch) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(CallKind::ChangeRecordSets);
        state.change_batches.push(batch.clone());
        let nth = state.change_batches.len();
        if state.fail_change_call == Some(nth) {
            return Err(DirectoryError::Unknown {
                raw_code: Some("InternalError".to_string()),
                raw_message: "scripted change failure".to_string(),
            });
        }
        for change in &batch.changes {
            match change.action {
                ChangeAction::Create => state.records.push(change.record_set.clone()),
                ChangeAction::Delete => {
                    let target = &change.record_set;
                    if let Some(pos) = state
                        .records
                        .iter()
                        .position(|r| r.name == target.name && r.rr_type == target.rr_type)
                    {
                        state.records.remove(pos);
                    }
                }
            }
        }
        Ok(())
    }

    async fn delete_zone(&self, zone_id: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(CallKind::DeleteZone);
        let deletable = state
            .records
            .iter()
            .filter(|r| !r.rr_type.is_bookkeeping())
            .count();
        if deletable > 0 {
            return Err(DirectoryError::ZoneNotEmpty {
                zone_id: zone_id.to_string(),
                raw_message: Some(format!("{deletable} record sets remain")),
            });
        }
        state.zone_deleted = true;
        Ok(())
    }
}
