use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "auction_bid")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub auction_item_id: i32,
    pub member_id: i32,
    pub bid_amount: i64,
    pub is_winning: bool,
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
        from = "Column::MemberId",
        to = "super::member::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Member,
}

impl Related<super::auction_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuctionItem.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
