//! Progressive hint reveal.

/// Return the hint for a 1-based reveal `level`, or `None` if there isn't one.
///
/// Level 0 and levels past the end of the list are simply absent.
pub fn reveal(hints: &[String], level: u32) -> Option<&str> {
    let index = usize::try_from(level).ok()?.checked_sub(1)?;
    hints.get(index).map(String::as_str)
}
