use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const EXPORT_FILE: &str = "rustwheel-names.txt";
const SEPARATOR: &str = ",";

/// How long the "copied" notice stays up
pub const NOTICE_DURATION: Duration = Duration::from_secs(2);

pub fn default_path() -> PathBuf {
    // Store next to the executable
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            return dir.join(EXPORT_FILE);
        }
    }
    PathBuf::from(EXPORT_FILE)
}

pub fn join_names(names: &[String]) -> String {
    names.join(SEPARATOR)
}

/// Write the list as one comma separated line. Returns what was written.
pub fn export_names(path: &Path, names: &[String]) -> io::Result<String> {
    let line = join_names(names);
    fs::write(path, format!("{line}\n"))?;
    Ok(line)
}

/// Transient confirmation shown after an export
pub struct ExportNotice {
    pub path: PathBuf,
    pub count: usize,
    at: Instant,
}

impl ExportNotice {
    pub fn new(path: PathBuf, count: usize) -> Self {
        Self {
            path,
            count,
            at: Instant::now(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.at.elapsed() < NOTICE_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_names() {
        let names = vec!["Ada".to_string(), "Grace".to_string()];
        assert_eq!(join_names(&names), "Ada,Grace");
        assert_eq!(join_names(&[]), "");
    }

    #[test]
    fn test_export_names() {
        let path = std::env::temp_dir().join(format!("rustwheel-export-{}.txt", std::process::id()));
        let names = vec!["a".to_string(), "b c".to_string()];
        let line = export_names(&path, &names).unwrap();
        assert_eq!(line, "a,b c");
        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b c\n");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_notice_fresh() {
        let notice = ExportNotice::new(PathBuf::from("x"), 3);
        assert!(notice.is_visible());
        assert_eq!(notice.count, 3);
    }
}
