//! Seed a default administrator account. Idempotent: does nothing when the
//! username already exists.
//!
//! Env vars: `DATABASE_URL` (required), `ADMIN_USERNAME` / `ADMIN_PASSWORD`
//! (default `admin` / `admin123` — change them after first login).

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHasher};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, Database, EntityTrait, QueryFilter,
};
use tracing::info;
use uuid::Uuid;

use couponbox_coupons_schema::admins;

#[tokio::main]
async fn main() {
    couponbox_core::tracing::init_tracing();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL");
    let username = std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_owned());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_owned());

    let db = Database::connect(&database_url)
        .await
        .expect("failed to connect to database");

    let existing = admins::Entity::find()
        .filter(admins::Column::Username.eq(&username))
        .one(&db)
        .await
        .expect("failed to query admins");

    if existing.is_some() {
        info!("admin '{username}' already exists, skipping");
        return;
    }

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .expect("failed to hash password")
        .to_string();

    admins::ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(username.clone()),
        password_hash: Set(password_hash),
        created_at: Set(Utc::now()),
    }
    .insert(&db)
    .await
    .expect("failed to insert admin");

    info!("admin '{username}' created");
}
