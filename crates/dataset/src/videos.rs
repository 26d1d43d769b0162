use std::path::{Path, PathBuf};

/// Intermediate directory holding the sampled benchmark videos.
const SAMPLED_DIR: &str = "Video-MME_sampled";

/// Duration buckets, probed in this order.
const DURATION_SUBDIRS: [&str; 3] = ["long", "medium", "short"];

/// Resolve a video URL to an existing file under the base directory.
///
/// Tries the direct join first (leading separators stripped), then falls
/// back to the sampled-video duration subdirectories using the URL's file
/// name. Returns None when no candidate exists on disk.
pub fn resolve_video(base: &Path, video_url: &str) -> Option<PathBuf> {
    let direct = base.join(video_url.trim_start_matches('/'));
    if direct.exists() {
        return Some(direct);
    }

    let filename = Path::new(video_url).file_name()?;
    for subdir in DURATION_SUBDIRS {
        let candidate = base.join(SAMPLED_DIR).join(subdir).join(filename);
        if candidate.exists() {
            return Some(candidate);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_direct_path() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("clips/a.mp4"));

        let resolved = resolve_video(dir.path(), "clips/a.mp4").unwrap();
        assert_eq!(resolved, dir.path().join("clips/a.mp4"));
    }

    #[test]
    fn test_leading_slash_stripped() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("clips/a.mp4"));

        let resolved = resolve_video(dir.path(), "/clips/a.mp4").unwrap();
        assert_eq!(resolved, dir.path().join("clips/a.mp4"));
    }

    #[test]
    fn test_sampled_subdir_fallback() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("Video-MME_sampled/medium/b.mp4"));

        let resolved = resolve_video(dir.path(), "some/remote/b.mp4").unwrap();
        assert_eq!(resolved, dir.path().join("Video-MME_sampled/medium/b.mp4"));
    }

    #[test]
    fn test_subdir_probe_order() {
        // File present in two buckets: "long" is probed first and wins
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("Video-MME_sampled/long/c.mp4"));
        touch(&dir.path().join("Video-MME_sampled/short/c.mp4"));

        let resolved = resolve_video(dir.path(), "c.mp4").unwrap();
        assert_eq!(resolved, dir.path().join("Video-MME_sampled/long/c.mp4"));
    }

    #[test]
    fn test_unresolvable_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(resolve_video(dir.path(), "missing.mp4").is_none());
    }
}
