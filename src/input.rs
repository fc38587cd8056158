use anyhow::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, warn};

/// Configuration for input file reading behavior
#[derive(Debug, Clone)]
pub struct InputConfig {
    /// Whether to fail fast on first error or continue processing
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192,
        }
    }
}

/// Statistics for one input file
#[derive(Debug, Clone)]
pub struct InputStats {
    pub source: String,
    pub lines_read: u64,
    /// Non-blank lines forwarded to analysis
    pub candidates: u64,
    pub bytes_read: u64,
    pub read_error: Option<String>,
}

/// Async reader that turns input files into analysis candidates, one per
/// non-blank line
pub struct CandidateReader {
    config: InputConfig,
}

impl CandidateReader {
    pub fn new(config: InputConfig) -> Self {
        Self { config }
    }

    /// Read one file line-by-line with async buffered I/O, skipping blank
    /// lines
    ///
    /// With `fail_fast` off, open and decode errors are captured in the
    /// returned stats instead of aborting the batch.
    pub async fn read_candidates<P: AsRef<Path>>(
        &self,
        file_path: P,
    ) -> Result<(Vec<String>, InputStats)> {
        let path = file_path.as_ref();
        debug!("Reading input candidates from: {}", path.display());

        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                let error_msg = format!("Failed to open input {}: {}", path.display(), e);
                warn!("{}", error_msg);

                if self.config.fail_fast {
                    return Err(anyhow::anyhow!(error_msg));
                }
                let stats = InputStats {
                    source: path.display().to_string(),
                    lines_read: 0,
                    candidates: 0,
                    bytes_read: 0,
                    read_error: Some(error_msg),
                };
                return Ok((Vec::new(), stats));
            }
        };

        let reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut lines = reader.lines();
        let mut candidates = Vec::new();
        let mut line_count = 0u64;
        let mut byte_count = 0u64;

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    byte_count += line.len() as u64 + 1; // +1 for newline
                    line_count += 1;
                    if !line.trim().is_empty() {
                        candidates.push(line);
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    let error_msg = format!(
                        "UTF-8 decoding error in {} at line {}: {}",
                        path.display(),
                        line_count + 1,
                        e
                    );
                    warn!("{}", error_msg);

                    if self.config.fail_fast {
                        return Err(anyhow::anyhow!(error_msg));
                    }
                    // Return partial results with error information
                    let stats = InputStats {
                        source: path.display().to_string(),
                        lines_read: line_count,
                        candidates: candidates.len() as u64,
                        bytes_read: byte_count,
                        read_error: Some(error_msg),
                    };
                    return Ok((candidates, stats));
                }
            }
        }

        let stats = InputStats {
            source: path.display().to_string(),
            lines_read: line_count,
            candidates: candidates.len() as u64,
            bytes_read: byte_count,
            read_error: None,
        };

        info!(
            "Read {}: {} lines, {} candidates, {} bytes",
            path.display(),
            line_count,
            stats.candidates,
            byte_count
        );

        Ok((candidates, stats))
    }

    /// Read multiple input files in order
    /// WHY: sequential reads keep memory bounded and attribute errors per file
    pub async fn read_batch<P: AsRef<Path>>(
        &self,
        file_paths: &[P],
    ) -> Result<Vec<(Vec<String>, InputStats)>> {
        info!("Starting batch read of {} input files", file_paths.len());

        let mut results = Vec::new();
        for file_path in file_paths {
            let result = self.read_candidates(file_path).await?;
            results.push(result);
        }

        info!("Completed batch read of {} input files", results.len());
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::fs;

    async fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<std::path::PathBuf> {
        let file_path = dir.join(name);
        fs::write(&file_path, content).await?;
        Ok(file_path)
    }

    #[tokio::test]
    async fn test_read_candidates_skips_blank_lines() {
        let temp_dir = TempDir::new().unwrap();
        let reader = CandidateReader::new(InputConfig::default());

        let content = "racecar\n\n   \nhello\n";
        let file_path = create_test_file(temp_dir.path(), "inputs.txt", content)
            .await
            .unwrap();

        let (candidates, stats) = reader.read_candidates(&file_path).await.unwrap();

        assert_eq!(candidates, vec!["racecar", "hello"]);
        assert_eq!(stats.lines_read, 4); // blank and whitespace-only lines still count as read
        assert_eq!(stats.candidates, 2);
        assert!(stats.read_error.is_none());
    }

    #[tokio::test]
    async fn test_read_candidates_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let reader = CandidateReader::new(InputConfig::default());

        let file_path = create_test_file(temp_dir.path(), "empty.txt", "")
            .await
            .unwrap();

        let (candidates, stats) = reader.read_candidates(&file_path).await.unwrap();

        assert!(candidates.is_empty());
        assert_eq!(stats.lines_read, 0);
        assert!(stats.read_error.is_none());
    }

    #[tokio::test]
    async fn test_read_candidates_missing_file_captured() {
        let temp_dir = TempDir::new().unwrap();
        let reader = CandidateReader::new(InputConfig::default());

        let file_path = temp_dir.path().join("nonexistent.txt");
        let (candidates, stats) = reader.read_candidates(&file_path).await.unwrap();

        assert!(candidates.is_empty());
        assert!(stats.read_error.is_some());
    }

    #[tokio::test]
    async fn test_read_candidates_missing_file_fail_fast() {
        let temp_dir = TempDir::new().unwrap();
        let reader = CandidateReader::new(InputConfig {
            fail_fast: true,
            ..Default::default()
        });

        let result = reader.read_candidates(temp_dir.path().join("nope.txt")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_read_batch() {
        let temp_dir = TempDir::new().unwrap();
        let reader = CandidateReader::new(InputConfig::default());

        let file1 = create_test_file(temp_dir.path(), "a.txt", "madam\nnoon")
            .await
            .unwrap();
        let file2 = create_test_file(temp_dir.path(), "b.txt", "kayak\n")
            .await
            .unwrap();

        let results = reader.read_batch(&[&file1, &file2]).await.unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0.len(), 2);
        assert_eq!(results[1].0.len(), 1);
    }

    #[tokio::test]
    async fn test_read_candidates_unicode() {
        let temp_dir = TempDir::new().unwrap();
        let reader = CandidateReader::new(InputConfig::default());

        let content = "Été\n世界\n";
        let file_path = create_test_file(temp_dir.path(), "unicode.txt", content)
            .await
            .unwrap();

        let (candidates, stats) = reader.read_candidates(&file_path).await.unwrap();

        assert_eq!(candidates, vec!["Été", "世界"]);
        assert!(stats.read_error.is_none());
    }
}
