/// Trait for case-insensitive substring tests
///
/// Both sides are lower-cased before comparison. The needle is treated as
/// literal text.
///
/// # Examples
///
/// ```rust
/// use lts_core::util::contains_ignore_case::ContainsIgnoreCase;
///
/// assert!("Project-Alpha".contains_ignore_case("alpha"));
/// assert!("Project-Alpha".contains_ignore_case("PROJECT"));
/// assert!("Project-Alpha".contains_ignore_case("t-a"));
/// assert!(!"Project-Alpha".contains_ignore_case("beta"));
/// ```
///
/// An empty needle matches everything, regex meta characters have no
/// special meaning:
///
/// ```rust
/// use lts_core::util::contains_ignore_case::ContainsIgnoreCase;
///
/// assert!("".contains_ignore_case(""));
/// assert!("/mnt/a".contains_ignore_case(""));
/// assert!(!"/mnt/a".contains_ignore_case(".*"));
/// assert!("run (1)".contains_ignore_case("(1)"));
/// ```
pub trait ContainsIgnoreCase {
    /// Returns `true` if `needle` occurs in `self`, ignoring case
    fn contains_ignore_case(&self, needle: &str) -> bool;
}

impl ContainsIgnoreCase for str {
    fn contains_ignore_case(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.to_lowercase().contains(&needle.to_lowercase())
    }
}
