use chrono::Utc;
use uuid::Uuid;

const SUFFIX_LEN: usize = 9;

/// Identifier for a newly ingested entry: epoch millis followed by a
/// random 9-character lowercase suffix.
pub fn generate_log_id() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}{}", Utc::now().timestamp_millis(), &suffix[..SUFFIX_LEN])
}

/// Identifier for the bundled sample entries.
pub fn sample_log_id(index: usize) -> String {
    format!("sample-{}-{}", Utc::now().timestamp_millis(), index)
}
