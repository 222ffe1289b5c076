//! Command-line surface.

use std::time::Duration;

use clap::Parser;

/// Floods a private hosted zone with record sets in paced batches, or
/// drains it again.
#[derive(Parser, Debug)]
#[command(name = "zoneflood", version, about)]
pub struct Options {
    /// Maximum record-set mutations per change call
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub max_batch_size: u32,

    /// Total record sets the zone should hold; in delete mode, how many to
    /// remove
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u32).range(1..=10_000))]
    pub total_records: u32,

    /// Hosted zone to target; a new private zone is created when omitted
    #[arg(long)]
    pub zone_id: Option<String>,

    /// Seconds to wait between change batches
    #[arg(long, default_value_t = 10)]
    pub batch_delay_secs: u64,

    /// Network to associate a newly created zone with
    #[arg(long)]
    pub network_id: Option<String>,

    /// Delete record sets instead of creating them
    #[arg(long)]
    pub delete: bool,

    /// Directory API endpoint override
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Directory API region
    #[arg(long, default_value = "us-east-1")]
    pub region: String,

    /// Directory API token
    #[arg(long, env = "ZONEFLOOD_API_TOKEN", hide_env_values = true)]
    pub api_token: String,
}

impl Options {
    /// Inter-batch pause as a [`Duration`].
    #[must_use]
    pub fn batch_delay(&self) -> Duration {
        Duration::from_secs(self.batch_delay_secs)
    }
}
