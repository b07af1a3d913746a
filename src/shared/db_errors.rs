use sea_orm::DbErr;

/// SQLSTATE 23505 surfaced through sea-orm / sqlx.
pub fn is_unique_violation(err: &DbErr) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("23505") || msg.contains("duplicate key") || msg.contains("unique constraint")
}

/// SQLSTATE 23503.
pub fn is_foreign_key_violation(err: &DbErr) -> bool {
    let msg = err.to_string().to_lowercase();
    msg.contains("23503") || msg.contains("foreign key constraint")
}
