use super::*;

/// Tests creating an item.
///
/// Expected: open, active, current bid 0
#[tokio::test]
async fn creates_open_item() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let item = AuctionItemRepository::new(db)
        .create(CreateAuctionItemParam {
            name: "Sword".to_string(),
            lowest_bid: 100,
            image_url: None,
            questlog_url: Some("https://questlog.gg/item/sword".to_string()),
            ends_at: None,
            created_by: None,
        })
        .await?;

    assert_eq!(item.status, AuctionStatus::Open);
    assert!(item.is_active);
    assert_eq!(item.current_bid, 0);

    Ok(())
}

/// Tests the conditional bid raise.
///
/// Expected: higher amount accepted, equal or lower amount rejected
#[tokio::test]
async fn raises_only_with_higher_amount() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let item = factory::create_auction_item(db).await?;
    let repo = AuctionItemRepository::new(db);

    assert!(repo.raise_current_bid(item.id, 120).await?);
    assert!(!repo.raise_current_bid(item.id, 120).await?);
    assert!(!repo.raise_current_bid(item.id, 110).await?);

    assert_eq!(repo.find_by_id(item.id).await?.unwrap().current_bid, 120);

    Ok(())
}

/// Tests that closing only succeeds once and blocks further raises.
///
/// Expected: first close true, second false, raise after close false
#[tokio::test]
async fn closes_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let item = factory::create_auction_item(db).await?;
    let repo = AuctionItemRepository::new(db);

    assert!(repo.mark_closed(item.id).await?);
    assert!(!repo.mark_closed(item.id).await?);
    assert!(!repo.raise_current_bid(item.id, 500).await?);

    let closed = repo.find_by_id(item.id).await?.unwrap();
    assert_eq!(closed.status, AuctionStatus::Closed);
    assert!(!closed.is_active);

    Ok(())
}

/// Tests selecting expired items.
///
/// Expected: only the open item whose end time passed
#[tokio::test]
async fn finds_expired_open_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let expired = factory::auction_item::AuctionItemFactory::new(db)
        .ends_at(Some(now - Duration::minutes(5)))
        .build()
        .await?;
    factory::auction_item::AuctionItemFactory::new(db)
        .ends_at(Some(now + Duration::hours(1)))
        .build()
        .await?;
    factory::auction_item::AuctionItemFactory::new(db)
        .ends_at(Some(now - Duration::minutes(5)))
        .closed()
        .build()
        .await?;
    factory::create_auction_item(db).await?;

    let ids = AuctionItemRepository::new(db).get_expired_ids(now).await?;

    assert_eq!(ids, vec![expired.id]);

    Ok(())
}

/// Tests listing only active items.
///
/// Expected: closed items excluded when active_only is set
#[tokio::test]
async fn lists_active_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_ledger_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_auction_item(db).await?;
    factory::auction_item::AuctionItemFactory::new(db)
        .closed()
        .build()
        .await?;
    let repo = AuctionItemRepository::new(db);

    assert_eq!(repo.get_all(true).await?.len(), 1);
    assert_eq!(repo.get_all(false).await?.len(), 2);

    Ok(())
}
