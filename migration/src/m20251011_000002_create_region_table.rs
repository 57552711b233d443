use sea_orm_migration::{prelude::*, schema::*};
use uuid::Uuid;

const SEED_REGIONS: [(u128, &str, &str, &str); 7] = [
    (
        0xaaaaaaaa_aaaa_aaaa_aaaa_aaaaaaaaaaa1,
        "HP",
        "Himachal Pradesh",
        "https://images.pexels.com/photos/674010/pexels-photo-674010.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    ),
    (
        0xaaaaaaaa_aaaa_aaaa_aaaa_aaaaaaaaaaa2,
        "UK",
        "Uttarakhand",
        "https://images.pexels.com/photos/5334653/pexels-photo-5334653.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    ),
    (
        0xaaaaaaaa_aaaa_aaaa_aaaa_aaaaaaaaaaa3,
        "LD",
        "Ladakh",
        "https://images.pexels.com/photos/1566435/pexels-photo-1566435.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    ),
    (
        0xaaaaaaaa_aaaa_aaaa_aaaa_aaaaaaaaaaa4,
        "SK",
        "Sikkim",
        "https://images.pexels.com/photos/1547613/pexels-photo-1547613.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    ),
    (
        0xaaaaaaaa_aaaa_aaaa_aaaa_aaaaaaaaaaa5,
        "AR",
        "Arunachal Pradesh",
        "https://images.pexels.com/photos/1868778/pexels-photo-1868778.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    ),
    (
        0xaaaaaaaa_aaaa_aaaa_aaaa_aaaaaaaaaaa6,
        "KL",
        "Kerala",
        "https://images.pexels.com/photos/248062/pexels-photo-248062.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    ),
    (
        0xaaaaaaaa_aaaa_aaaa_aaaa_aaaaaaaaaaa7,
        "GA",
        "Goa",
        "https://images.pexels.com/photos/372281/pexels-photo-372281.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=1",
    ),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Region::Table)
                    .if_not_exists()
                    .col(pk_uuid(Region::Id))
                    .col(string(Region::Code))
                    .col(string(Region::Name))
                    .col(string_null(Region::RegionImageUrl))
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert();
        seed.into_table(Region::Table).columns([
            Region::Id,
            Region::Code,
            Region::Name,
            Region::RegionImageUrl,
        ]);

        for (id, code, name, image_url) in SEED_REGIONS {
            seed.values([
                Uuid::from_u128(id).into(),
                code.into(),
                name.into(),
                image_url.into(),
            ])
            .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Region::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Region {
    #[sea_orm(iden = "regions")]
    Table,
    Id,
    Code,
    Name,
    RegionImageUrl,
}
