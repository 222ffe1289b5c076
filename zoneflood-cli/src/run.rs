//! One full run: resolve the target zone, then flood or drain it.

use uuid::Uuid;

use zoneflood_directory::{CreateZoneRequest, HostedZone, ZoneDirectory};

use crate::cli::Options;
use crate::controller::BatchController;
use crate::error::AppError;

/// Execute a run against an already-constructed directory handle.
///
/// Configuration problems are reported before anything touches the
/// directory; after that, the first directory failure aborts the run.
pub async fn run(opts: &Options, directory: &dyn ZoneDirectory) -> Result<(), AppError> {
    let zone_id = match &opts.zone_id {
        Some(id) => id.clone(),
        None => create_zone(opts, directory).await?.id,
    };

    let zone = directory.describe_zone(&zone_id).await?;
    println!("{}", serde_json::to_string_pretty(&zone)?);

    let controller = BatchController::new(
        directory,
        opts.max_batch_size as usize,
        opts.batch_delay(),
    );

    if opts.delete {
        let remaining = controller
            .depopulate(&zone, opts.total_records as usize)
            .await?;
        if remaining == 0 {
            directory.delete_zone(&zone.id).await?;
            log::info!(
                "Deleted hosted zone {} after removing its last record sets",
                zone.id
            );
        } else {
            log::info!("{remaining} deletable record sets remain in {}", zone.id);
        }
    } else {
        let current = usize::try_from(zone.record_set_count).unwrap_or(usize::MAX);
        controller
            .populate(&zone, current, opts.total_records as usize)
            .await?;
    }

    log::info!("Run complete");
    Ok(())
}

/// Create a fresh private zone to flood.
async fn create_zone(
    opts: &Options,
    directory: &dyn ZoneDirectory,
) -> Result<HostedZone, AppError> {
    let Some(network_id) = &opts.network_id else {
        return Err(AppError::MissingNetworkId);
    };
    let req = CreateZoneRequest {
        name: new_zone_name(),
        network_id: network_id.clone(),
        network_region: opts.region.clone(),
        comment: Some(format!(
            "Created by zoneflood at {}",
            chrono::Utc::now().to_rfc3339()
        )),
    };
    let zone = directory.create_zone(&req).await?;
    log::info!("Created private hosted zone {} ({})", zone.id, zone.name);
    Ok(zone)
}

/// Unique zone name so repeated runs never collide.
fn new_zone_name() -> String {
    format!("zoneflood-{}.internal", Uuid::new_v4())
}
