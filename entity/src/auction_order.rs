use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auction_order")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub auction_item_id: i32,
    pub final_price: i64,
    pub winner_id: Option<i32>,
    pub winning_bid_id: Option<i32>,
    /// `settled` or `unsold`
    pub status: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::auction_item::Entity",
        from = "Column::AuctionItemId",
        to = "super::auction_item::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    AuctionItem,
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::WinnerId",
        to = "super::member::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Winner,
    #[sea_orm(
        belongs_to = "super::auction_bid::Entity",
        from = "Column::WinningBidId",
        to = "super::auction_bid::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    WinningBid,
}

impl Related<super::auction_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
