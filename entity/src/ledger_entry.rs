use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ledger_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub member_id: i32,
    /// `attendance` or `auction`
    pub kind: String,
    pub event_id: Option<i32>,
    pub auction_order_id: Option<i32>,
    /// Signed amount, auction debits are negative.
    pub amount: i64,
    /// One row per grant source: `attendance:{member}:{event}` or `auction:{order}`.
    #[sea_orm(unique)]
    pub grant_key: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Member,
    #[sea_orm(
        belongs_to = "super::event::Entity",
        from = "Column::EventId",
        to = "super::event::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Event,
    #[sea_orm(
        belongs_to = "super::auction_order::Entity",
        from = "Column::AuctionOrderId",
        to = "super::auction_order::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    AuctionOrder,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Event.def()
    }
}

impl Related<super::auction_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
