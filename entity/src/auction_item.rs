use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auction_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Reserve price
    pub lowest_bid: i64,
    pub current_bid: i64,
    pub is_active: bool,
    /// `open` or `closed`
    pub status: String,
    pub image_url: Option<String>,
    pub questlog_url: Option<String>,
    pub ends_at: Option<DateTimeUtc>,
    pub created_by: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::CreatedBy",
        to = "super::member::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Creator,
    #[sea_orm(has_many = "super::auction_bid::Entity")]
    AuctionBid,
    #[sea_orm(has_one = "super::auction_order::Entity")]
    AuctionOrder,
}

impl Related<super::auction_bid::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionBid.def()
    }
}

impl Related<super::auction_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
