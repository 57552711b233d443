use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251011_000001_create_difficulty_table::Difficulty,
    m20251011_000002_create_region_table::Region,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Walk::Table)
                    .if_not_exists()
                    .col(pk_uuid(Walk::Id))
                    .col(string(Walk::Name))
                    .col(string(Walk::Description))
                    .col(double(Walk::LengthInKm))
                    .col(string_null(Walk::WalkImageUrl))
                    .col(uuid(Walk::DifficultyId))
                    .col(uuid(Walk::RegionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_walks_difficulty_id")
                            .from(Walk::Table, Walk::DifficultyId)
                            .to(Difficulty::Table, Difficulty::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_walks_region_id")
                            .from(Walk::Table, Walk::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_walks_region_id")
                    .table(Walk::Table)
                    .col(Walk::RegionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Walk::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Walk {
    #[sea_orm(iden = "walks")]
    Table,
    Id,
    Name,
    Description,
    LengthInKm,
    WalkImageUrl,
    DifficultyId,
    RegionId,
}
