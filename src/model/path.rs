/// Convert Windows separators to forward slashes so paths from reports
/// produced on any platform compare equal.
///
/// Extended-length paths (`\\?\C:\...`) are returned unchanged: they are
/// only valid with backslashes.
pub fn normalize_path(path: &str) -> String {
    if path.starts_with(r"\\?\") {
        return path.to_string();
    }
    path.replace('\\', "/")
}
