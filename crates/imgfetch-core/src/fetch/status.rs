//! Parse HTTP status lines seen by the header callback.

/// Status code and optional reason phrase of one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub code: u32,
    pub reason: Option<String>,
}

/// Parses `HTTP/<version> <code> [reason]`. Returns `None` for header lines.
///
/// HTTP/2 and later carry no reason phrase, so `reason` is `None` there.
pub fn parse_status_line(line: &str) -> Option<StatusLine> {
    let line = line.trim();
    if !line.starts_with("HTTP/") {
        return None;
    }
    let mut parts = line.splitn(3, ' ');
    let _version = parts.next()?;
    let code = parts.next()?.trim().parse::<u32>().ok()?;
    let reason = parts
        .next()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string);
    Some(StatusLine { code, reason })
}
