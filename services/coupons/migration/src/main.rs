use sea_orm_migration::prelude::*;

use couponbox_coupons_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
