use crate::core::Storage;
use crate::utils::error::Result;
use std::fs;
use std::path::Path;

/// Writes the output files under a base directory, creating it on demand.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn write_creates_missing_directories() {
        let temp = TempDir::new().unwrap();
        let base = temp.path().join("nested").join("out");
        let storage = LocalStorage::new(base.to_str().unwrap().to_string());

        storage
            .write_file("standings.csv", b"team,points")
            .await
            .unwrap();

        let written = std::fs::read(base.join("standings.csv")).unwrap();
        assert_eq!(written, b"team,points");
    }

    #[tokio::test]
    async fn write_overwrites_previous_output() {
        let temp = TempDir::new().unwrap();
        let storage = LocalStorage::new(temp.path().to_str().unwrap().to_string());

        storage.write_file("report.html", b"old").await.unwrap();
        storage.write_file("report.html", b"new").await.unwrap();

        let written = std::fs::read(temp.path().join("report.html")).unwrap();
        assert_eq!(written, b"new");
    }
}
