// migrations/m202401150001_create_badges.rs
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Badges {
    Table,
    Id,
    BadgeId,
    Name,
    LastScanned,
    IsScanned,
}

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202401150001_create_badges"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Badges::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Badges::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    // Uniqueness is checked by the create handler, not by the schema.
                    .col(ColumnDef::new(Badges::BadgeId).string().not_null())
                    .col(ColumnDef::new(Badges::Name).string().not_null())
                    .col(ColumnDef::new(Badges::LastScanned).timestamp_with_time_zone().null())
                    .col(
                        ColumnDef::new(Badges::IsScanned)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_badges_badge_id")
                    .table(Badges::Table)
                    .col(Badges::BadgeId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Badges::Table).to_owned())
            .await
    }
}
