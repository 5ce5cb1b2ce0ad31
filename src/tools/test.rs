#[cfg(test)]
pub mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    /// Create a fresh directory under the system temp folder for filesystem tests.
    /// The label keeps directories of concurrently running tests apart.
    pub fn temp_dir(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("idcards-{label}-{nanos}"));
        fs::create_dir(&dir).unwrap();

        dir
    }
}
