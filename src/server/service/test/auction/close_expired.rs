use chrono::{Duration, Utc};

use super::*;

/// Tests sweeping expired auctions.
///
/// Expected: only the item past its end time is closed; items without an end time
/// or ending later stay open
#[tokio::test]
async fn closes_only_expired_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();
    let expired = factory::auction_item::AuctionItemFactory::new(db)
        .ends_at(Some(now - Duration::minutes(5)))
        .build()
        .await?;
    let running = factory::auction_item::AuctionItemFactory::new(db)
        .ends_at(Some(now + Duration::hours(1)))
        .build()
        .await?;
    let open_ended = factory::create_auction_item(db).await?;
    let service = AuctionService::new(db);

    let closed = service.close_expired(now).await?;

    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0].order.auction_item_id, expired.id);
    assert!(service.get_item(running.id).await?.item.is_open());
    assert!(service.get_item(open_ended.id).await?.item.is_open());

    assert!(service.close_expired(now).await?.is_empty());

    Ok(())
}
