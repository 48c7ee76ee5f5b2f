//! Static file serving module
//!
//! Resolves request paths against the configured root directory, with
//! directory confinement, index file resolution, and MIME type detection.

use crate::config::AppState;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve a static file request
pub async fn serve(state: &AppState, path: &str, is_head: bool) -> Response<Full<Bytes>> {
    let root = &state.config.static_files.root;
    let index_files = &state.config.static_files.index_files;

    match load(root, path, index_files).await {
        Some((content, content_type)) => {
            http::response::build_file_response(content, content_type, is_head)
        }
        None => http::response::build_404_response(),
    }
}

/// Load a file from the root directory with index file support.
///
/// Returns `None` for anything that must be answered 404: missing files,
/// unreadable files, and any path that resolves outside the root.
pub async fn load(
    root: &str,
    request_path: &str,
    index_files: &[String],
) -> Option<(Vec<u8>, &'static str)> {
    let relative = request_path.trim_start_matches('/');

    // Reject parent-directory segments before touching the filesystem
    if relative.split('/').any(|segment| segment == "..") {
        logger::log_warning(&format!("Path traversal attempt blocked: {request_path}"));
        return None;
    }

    let root_canonical = match Path::new(root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static root not found or inaccessible '{root}': {e}"
            ));
            return None;
        }
    };

    let mut file_path = root_canonical.join(relative);

    // Directory requests try the configured index files in order
    if relative.is_empty() || relative.ends_with('/') || file_path.is_dir() {
        for index_file in index_files {
            let candidate = file_path.join(index_file);
            if candidate.is_file() {
                file_path = candidate;
                break;
            }
        }
    }

    // Missing file is a plain 404, not worth a log line
    let file_canonical = file_path.canonicalize().ok()?;

    // Canonicalization resolves symlinks, so this also confines links that
    // point outside the root
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {request_path} -> {}",
            file_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {e}",
                file_canonical.display()
            ));
            return None;
        }
    };

    let content_type =
        mime::content_type_for(file_canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

    fn index_files() -> Vec<String> {
        INDEX_FILES.iter().map(ToString::to_string).collect()
    }

    fn setup_root() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std_fs::write(dir.path().join("index.html"), "<html>home</html>").unwrap();
        std_fs::write(dir.path().join("app.js"), "console.log('hi')").unwrap();
        std_fs::create_dir(dir.path().join("notes")).unwrap();
        std_fs::write(dir.path().join("notes/index.html"), "<html>notes</html>").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_serves_file_with_content_type() {
        let root = setup_root();
        let (content, content_type) = load(root.path().to_str().unwrap(), "/app.js", &index_files())
            .await
            .unwrap();
        assert_eq!(content, b"console.log('hi')");
        assert_eq!(content_type, "application/javascript");
    }

    #[tokio::test]
    async fn test_root_path_resolves_index() {
        let root = setup_root();
        let (content, content_type) = load(root.path().to_str().unwrap(), "/", &index_files())
            .await
            .unwrap();
        assert_eq!(content, b"<html>home</html>");
        assert_eq!(content_type, "text/html; charset=utf-8");
    }

    #[tokio::test]
    async fn test_directory_path_resolves_index() {
        let root = setup_root();
        let (content, _) = load(root.path().to_str().unwrap(), "/notes/", &index_files())
            .await
            .unwrap();
        assert_eq!(content, b"<html>notes</html>");
    }

    #[tokio::test]
    async fn test_missing_file_is_none() {
        let root = setup_root();
        assert!(
            load(root.path().to_str().unwrap(), "/nope.html", &index_files())
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_traversal_is_blocked() {
        let root = setup_root();
        // A file that definitely exists outside the root
        let outside = root.path().parent().unwrap().join("secret.txt");
        let _ = std_fs::write(&outside, "secret");

        assert!(
            load(root.path().to_str().unwrap(), "/../secret.txt", &index_files())
                .await
                .is_none()
        );
        assert!(load(
            root.path().to_str().unwrap(),
            "/notes/../../secret.txt",
            &index_files()
        )
        .await
        .is_none());

        let _ = std_fs::remove_file(outside);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_symlink_outside_root_is_blocked() {
        let root = setup_root();
        let outside = root.path().parent().unwrap().join("linked-secret.txt");
        let _ = std_fs::write(&outside, "secret");
        std::os::unix::fs::symlink(&outside, root.path().join("leak.txt")).unwrap();

        assert!(
            load(root.path().to_str().unwrap(), "/leak.txt", &index_files())
                .await
                .is_none()
        );

        let _ = std_fs::remove_file(outside);
    }
}
