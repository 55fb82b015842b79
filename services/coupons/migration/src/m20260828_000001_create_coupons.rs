use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Coupons::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Coupons::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Coupons::Code)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Coupons::IsActive).boolean().not_null())
                    .col(ColumnDef::new(Coupons::IsClaimed).boolean().not_null())
                    .col(ColumnDef::new(Coupons::ClaimedIp).string())
                    .col(ColumnDef::new(Coupons::ClaimedSessionId).string())
                    .col(ColumnDef::new(Coupons::ClaimedAt).timestamp_with_time_zone())
                    .col(
                        ColumnDef::new(Coupons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Cooldown check filters on claimed_ip + claimed_at; session check on
        // claimed_session_id. Both run on every claim request.
        manager
            .create_index(
                Index::create()
                    .table(Coupons::Table)
                    .col(Coupons::ClaimedIp)
                    .col(Coupons::ClaimedAt)
                    .name("idx_coupons_claimed_ip_at")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Coupons::Table)
                    .col(Coupons::ClaimedSessionId)
                    .name("idx_coupons_claimed_session_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Coupons::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Coupons {
    Table,
    Id,
    Code,
    IsActive,
    IsClaimed,
    ClaimedIp,
    ClaimedSessionId,
    ClaimedAt,
    CreatedAt,
}
