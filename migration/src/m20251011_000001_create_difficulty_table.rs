use sea_orm_migration::{prelude::*, schema::*};
use uuid::Uuid;

/// Seeded difficulty ids, stable across deployments.
pub const EASY_ID: Uuid = Uuid::from_u128(0x11111111_1111_1111_1111_111111111111);
pub const MEDIUM_ID: Uuid = Uuid::from_u128(0x22222222_2222_2222_2222_222222222222);
pub const HARD_ID: Uuid = Uuid::from_u128(0x33333333_3333_3333_3333_333333333333);

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Difficulty::Table)
                    .if_not_exists()
                    .col(pk_uuid(Difficulty::Id))
                    .col(string(Difficulty::Name))
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert();
        seed.into_table(Difficulty::Table)
            .columns([Difficulty::Id, Difficulty::Name]);

        for (id, name) in [(EASY_ID, "Easy"), (MEDIUM_ID, "Medium"), (HARD_ID, "Hard")] {
            seed.values([id.into(), name.into()])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Difficulty::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Difficulty {
    #[sea_orm(iden = "difficulties")]
    Table,
    Id,
    Name,
}
