use crate::domain::errors::DomainError;

/// Every database failure on the read path surfaces as
/// `StorageUnavailable`; callers own retry policy.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::PoolTimedOut => {
            DomainError::StorageUnavailable("timed out acquiring a database connection".into())
        }
        sqlx::Error::PoolClosed => {
            DomainError::StorageUnavailable("database pool is closed".into())
        }
        sqlx::Error::Io(io) => DomainError::StorageUnavailable(format!("database i/o error: {io}")),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code().map(|c| c.into_owned()).unwrap_or_default();
            DomainError::StorageUnavailable(format!(
                "database error {code}: {}",
                db_err.message()
            ))
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            DomainError::StorageUnavailable(format!("unexpected row shape: {err}"))
        }
        _ => DomainError::StorageUnavailable(err.to_string()),
    }
}
