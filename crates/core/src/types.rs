/// All catalog primary keys are PostgreSQL BIGSERIAL (or an `i64` counter
/// in the in-memory store).
pub type DbId = i64;
