use chrono::Utc;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::auction::AuctionService};

/// Starts the auction sweeper.
///
/// Runs every minute and closes open auctions whose end time has passed. Closing is
/// idempotent, so a sweep racing a manual close settles the item once.
///
/// # Returns
/// - `Ok(JobScheduler)` - Running scheduler, to be shut down with the server
/// - `Err(AppError::SchedulerErr)` - The job could not be created or started
pub async fn start_scheduler(db: DatabaseConnection) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = db.clone();

        Box::pin(async move {
            if let Err(e) = sweep_expired_auctions(&db).await {
                tracing::error!("Error sweeping expired auctions: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Auction sweeper started");

    Ok(scheduler)
}

async fn sweep_expired_auctions(db: &DatabaseConnection) -> Result<(), AppError> {
    let closed = AuctionService::new(db).close_expired(Utc::now()).await?;

    if !closed.is_empty() {
        tracing::info!("Closed {} expired auctions", closed.len());
    }

    Ok(())
}
