use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::User;

pub struct UserService;

impl UserService {
    /// Look up a platform account by id. Unknown ids are a normal `None`,
    /// not an error; callers decide whether that denies or 401s.
    pub async fn find(db: &Pool<Postgres>, user_id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, is_admin, is_super_admin, created_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(db)
        .await?;

        Ok(user)
    }
}
