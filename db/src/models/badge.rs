use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, QueryFilter, QueryOrder, Set};

/// Represents a physical access badge in the `badges` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "badges")]
pub struct Model {
    /// Surrogate primary key. Never exposed over HTTP.
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Externally supplied identifier printed on / encoded in the badge.
    pub badge_id: String,
    /// Display name of the badge holder.
    pub name: String,
    /// Time of the most recent scan, `None` until the first one.
    pub last_scanned: Option<DateTime<Utc>>,
    /// Presence flag, flipped on every scan.
    pub is_scanned: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Display name given to the bootstrapped admin badge.
pub const ADMIN_BADGE_NAME: &str = "admin";

/// Timestamp recorded for a scan at `now`, never earlier than the previous one.
pub fn next_scan_time(previous: Option<DateTime<Utc>>, now: DateTime<Utc>) -> DateTime<Utc> {
    match previous {
        Some(prev) if prev > now => prev,
        _ => now,
    }
}

impl Model {
    /// First badge carrying `badge_id`, if any.
    pub async fn find_by_badge_id(
        db: &DatabaseConnection,
        badge_id: &str,
    ) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::BadgeId.eq(badge_id))
            .order_by_asc(Column::Id)
            .one(db)
            .await
    }

    /// All badges in insertion order.
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<Self>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }

    /// Inserts a fresh, never-scanned badge. Duplicate checks are the caller's job.
    pub async fn create(
        db: &DatabaseConnection,
        badge_id: &str,
        name: &str,
    ) -> Result<Self, DbErr> {
        ActiveModel {
            badge_id: Set(badge_id.to_owned()),
            name: Set(name.to_owned()),
            last_scanned: Set(None),
            is_scanned: Set(false),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Changes the display name. Returns `None` when no such badge exists.
    pub async fn rename(
        db: &DatabaseConnection,
        badge_id: &str,
        name: &str,
    ) -> Result<Option<Self>, DbErr> {
        let Some(badge) = Self::find_by_badge_id(db, badge_id).await? else {
            return Ok(None);
        };

        let mut active: ActiveModel = badge.into();
        active.name = Set(name.to_owned());
        active.update(db).await.map(Some)
    }

    /// Flips `is_scanned`, stamps `last_scanned` and persists both in one write.
    pub async fn record_scan(self, db: &DatabaseConnection) -> Result<Self, DbErr> {
        let scanned_at = next_scan_time(self.last_scanned, Utc::now());
        let toggled = !self.is_scanned;

        let mut active: ActiveModel = self.into();
        active.is_scanned = Set(toggled);
        active.last_scanned = Set(Some(scanned_at));
        active.update(db).await
    }

    /// Deletes the first badge carrying `badge_id`. Returns whether one was removed.
    pub async fn delete_by_badge_id(db: &DatabaseConnection, badge_id: &str) -> Result<bool, DbErr> {
        let Some(badge) = Self::find_by_badge_id(db, badge_id).await? else {
            return Ok(false);
        };

        let res = Entity::delete_by_id(badge.id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    /// Deletes every badge whose identifier differs from `keep_badge_id`.
    pub async fn delete_all_except(
        db: &DatabaseConnection,
        keep_badge_id: &str,
    ) -> Result<u64, DbErr> {
        let res = Entity::delete_many()
            .filter(Column::BadgeId.ne(keep_badge_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    /// Makes sure the reserved admin badge exists. Returns `true` if it had to be created.
    pub async fn ensure_admin(db: &DatabaseConnection, admin_badge_id: &str) -> Result<bool, DbErr> {
        if Self::find_by_badge_id(db, admin_badge_id).await?.is_some() {
            tracing::info!(badge_id = admin_badge_id, "Admin badge already exists");
            return Ok(false);
        }

        Self::create(db, admin_badge_id, ADMIN_BADGE_NAME).await?;
        tracing::info!(badge_id = admin_badge_id, "Admin badge created");
        Ok(true)
    }
}
