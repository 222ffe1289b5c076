use serde::{Deserialize, Serialize};

// ============ Record Types ============

/// DNS record-set type identifier.
///
/// Serialized as uppercase strings (`"A"`, `"AAAA"`, `"SOA"`, etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RrType {
    /// IPv4 address record.
    A,
    /// IPv6 address record.
    Aaaa,
    /// Canonical name (alias) record.
    Cname,
    /// Mail exchange record.
    Mx,
    /// Name server record.
    Ns,
    /// Start-of-authority record.
    Soa,
    /// Service locator record.
    Srv,
    /// Text record.
    Txt,
    /// Certificate Authority Authorization record.
    Caa,
}

impl RrType {
    /// Whether this type is one of the zone's bookkeeping records.
    ///
    /// The directory manages the zone's delegation (NS) and start-of-authority
    /// (SOA) record sets itself; they must never be mutated through the change
    /// API and are excluded from every enumeration this crate's callers do.
    #[must_use]
    pub fn is_bookkeeping(self) -> bool {
        matches!(self, Self::Ns | Self::Soa)
    }

    /// Uppercase wire representation of this type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Ns => "NS",
            Self::Soa => "SOA",
            Self::Srv => "SRV",
            Self::Txt => "TXT",
            Self::Caa => "CAA",
        }
    }
}

impl std::fmt::Display for RrType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record set as stored in a hosted zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    /// Fully qualified record name (unique label plus zone suffix).
    pub name: String,
    /// Record-set type.
    pub rr_type: RrType,
    /// Time to live in seconds.
    pub ttl: u32,
    /// One or more record data values.
    pub values: Vec<String>,
}

// ============ Zone Types ============

/// The private network a hosted zone is associated with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneNetwork {
    /// Network identifier.
    pub id: String,
    /// Region the network lives in.
    pub region: String,
}

/// A hosted zone as described by the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedZone {
    /// Directory-assigned zone identifier.
    pub id: String,
    /// Zone DNS name, without the trailing dot.
    pub name: String,
    /// Number of record sets currently in the zone, bookkeeping included.
    pub record_set_count: u64,
    /// Whether the zone resolves only inside its associated network.
    pub private: bool,
    /// Network association, present for private zones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<ZoneNetwork>,
}

/// Request to create a new private hosted zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateZoneRequest {
    /// Zone DNS name.
    pub name: String,
    /// Network to associate the zone with.
    pub network_id: String,
    /// Region of the associated network.
    pub network_region: String,
    /// Free-form comment stored with the zone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

// ============ Change Batches ============

/// The mutation applied to a single record set within a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeAction {
    /// Add the record set to the zone.
    Create,
    /// Remove the record set from the zone.
    Delete,
}

/// A single record-set mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Change {
    /// Mutation to apply.
    pub action: ChangeAction,
    /// The record set the mutation applies to.
    pub record_set: RecordSet,
}

impl Change {
    /// A create mutation for `record_set`.
    #[must_use]
    pub fn create(record_set: RecordSet) -> Self {
        Self {
            action: ChangeAction::Create,
            record_set,
        }
    }

    /// A delete mutation for `record_set`.
    #[must_use]
    pub fn delete(record_set: RecordSet) -> Self {
        Self {
            action: ChangeAction::Delete,
            record_set,
        }
    }
}

/// An ordered list of record-set mutations submitted as one atomic request.
///
/// The directory applies a batch all-or-nothing: either every change in it
/// takes effect or none does. Batches are bounded by
/// [`MAX_CHANGES_PER_CALL`](crate::rest::MAX_CHANGES_PER_CALL) on the service
/// side; the client rejects oversized and empty batches before sending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeBatch {
    /// Mutations in submission order.
    pub changes: Vec<Change>,
}

impl ChangeBatch {
    /// Wrap a list of changes into a batch.
    #[must_use]
    pub fn new(changes: Vec<Change>) -> Self {
        Self { changes }
    }

    /// Number of mutations in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Whether the batch carries no mutations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

// ============ Record-Set Listing ============

/// Parameters for one page of a record-set listing.
///
/// # Default
///
/// The default requests up to 100 items from the start of the zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRecordSetsParams {
    /// Maximum number of record sets to return in this page.
    pub max_items: u32,
    /// Opaque continuation cursor from a previous page, if resuming.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl Default for ListRecordSetsParams {
    fn default() -> Self {
        Self {
            max_items: 100,
            cursor: None,
        }
    }
}

impl ListRecordSetsParams {
    /// Clamp `max_items` to `1..=max_page_size`, preserving the cursor.
    #[must_use]
    pub fn validated(&self, max_page_size: u32) -> Self {
        Self {
            max_items: self.max_items.clamp(1, max_page_size),
            cursor: self.cursor.clone(),
        }
    }

    /// Parameters for the page following this one.
    #[must_use]
    pub fn next_page(&self, cursor: String) -> Self {
        Self {
            max_items: self.max_items,
            cursor: Some(cursor),
        }
    }
}

/// One page of a record-set listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSetPage {
    /// Record sets in this page, in zone order.
    pub record_sets: Vec<RecordSet>,
    /// Cursor for the next page, when `truncated` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
    /// Whether further pages exist.
    pub truncated: bool,
}
