//! Access log formatting.
//!
//! One Common-Log-Format line per handled request:
//! `$remote_addr - - [$time_local] "$method $target HTTP/$protocol" $status`

use chrono::{DateTime, Local};

/// Everything that goes into one access log line
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub time: DateTime<Local>,
    pub method: String,
    /// Request target: path plus any query string
    pub target: String,
    pub protocol: String,
    pub status: u16,
}

impl AccessLogEntry {
    /// New entry stamped with the current local time; protocol and status
    /// default to HTTP/1.1 and 200 until the response is known
    pub fn new(remote_addr: String, method: String, target: String) -> Self {
        Self {
            remote_addr,
            time: Local::now(),
            method,
            target,
            protocol: "1.1".to_string(),
            status: 200,
        }
    }

    /// Render as a Common Log Format line
    pub fn format_line(&self) -> String {
        let timestamp = self.time.format("%d/%b/%Y:%H:%M:%S %z");
        let request_line = format!("{} {} HTTP/{}", self.method, self.target, self.protocol);
        format!(
            "{} - - [{timestamp}] \"{request_line}\" {}",
            self.remote_addr, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entry() -> AccessLogEntry {
        let mut entry = AccessLogEntry::new(
            "127.0.0.1:52311".to_string(),
            "GET".to_string(),
            "/api/tags".to_string(),
        );
        entry.status = 502;
        entry
    }

    #[test]
    fn test_format_line_contains_request_fields() {
        let entry = create_test_entry();
        let line = entry.format_line();
        assert!(line.contains("127.0.0.1:52311"));
        assert!(line.contains("\"GET /api/tags HTTP/1.1\""));
        assert!(line.ends_with("502"));
    }

    #[test]
    fn test_format_line_has_bracketed_timestamp() {
        let line = create_test_entry().format_line();
        let open = line.find('[').unwrap();
        let close = line.find(']').unwrap();
        assert!(close > open + 1);
    }

    #[test]
    fn test_query_string_is_part_of_target() {
        let entry = AccessLogEntry::new(
            "127.0.0.1:9".to_string(),
            "GET".to_string(),
            "/notes?page=2".to_string(),
        );
        assert!(entry.format_line().contains("GET /notes?page=2"));
    }
}
