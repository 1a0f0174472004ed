/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a fresh opaque employee id.
///
/// UUID v4, collision-free for the process lifetime. Assigned once at draft
/// creation; a reset or successful submission mints a new one.
pub fn employee_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
