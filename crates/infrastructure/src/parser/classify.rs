use digger_domain::QueryStatus;

/// Exit code the resolver uses when no server replied.
const EXIT_NO_REPLY: i32 = 9;

/// Map a `status:` token from the resolver header to a terminal status.
/// Unknown tokens return `None` so the exit-code fallback can decide.
pub fn status_from_token(token: &str) -> Option<QueryStatus> {
    let token = token.trim().trim_end_matches(',');
    if token.eq_ignore_ascii_case("NOERROR") {
        Some(QueryStatus::Success)
    } else if token.eq_ignore_ascii_case("NXDOMAIN") {
        Some(QueryStatus::NameNotFound)
    } else if token.eq_ignore_ascii_case("SERVFAIL") {
        Some(QueryStatus::ServerFailure)
    } else if token.eq_ignore_ascii_case("REFUSED") {
        Some(QueryStatus::Refused)
    } else {
        None
    }
}

/// Decide the terminal status of one resolver run.
///
/// A recognized status line wins. Otherwise exit code 0 means success, and a
/// non-zero exit falls back to a keyword scan over stdout and stderr. The scan
/// is a heuristic: answer data that happens to contain a keyword is
/// classified by that keyword.
pub fn classify(
    parsed: Option<QueryStatus>,
    exit_code: Option<i32>,
    stdout: &str,
    stderr: &str,
) -> QueryStatus {
    if let Some(status) = parsed {
        return status;
    }
    if exit_code == Some(0) {
        return QueryStatus::Success;
    }

    let combined = format!("{}\n{}", stdout, stderr).to_ascii_lowercase();
    if combined.contains("nxdomain") {
        QueryStatus::NameNotFound
    } else if combined.contains("servfail") {
        QueryStatus::ServerFailure
    } else if combined.contains("timeout") || combined.contains("timed out") {
        QueryStatus::Timeout
    } else if exit_code == Some(EXIT_NO_REPLY) {
        QueryStatus::Timeout
    } else {
        QueryStatus::Failed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_tokens() {
        assert_eq!(status_from_token("NOERROR,"), Some(QueryStatus::Success));
        assert_eq!(status_from_token("nxdomain"), Some(QueryStatus::NameNotFound));
        assert_eq!(status_from_token("SERVFAIL"), Some(QueryStatus::ServerFailure));
        assert_eq!(status_from_token("REFUSED"), Some(QueryStatus::Refused));
        assert_eq!(status_from_token("NOTIMP"), None);
    }

    #[test]
    fn test_status_line_wins_over_exit_code() {
        assert_eq!(
            classify(Some(QueryStatus::NameNotFound), Some(0), "", ""),
            QueryStatus::NameNotFound
        );
        assert_eq!(
            classify(Some(QueryStatus::Success), Some(1), "timed out", ""),
            QueryStatus::Success
        );
    }

    #[test]
    fn test_clean_exit_is_success() {
        assert_eq!(classify(None, Some(0), "", ""), QueryStatus::Success);
    }

    #[test]
    fn test_keyword_fallback() {
        assert_eq!(
            classify(None, Some(1), "", ";; connection timed out; no servers could be reached"),
            QueryStatus::Timeout
        );
        assert_eq!(
            classify(None, Some(1), "got NXDOMAIN", ""),
            QueryStatus::NameNotFound
        );
        assert_eq!(
            classify(None, Some(10), "", "SERVFAIL received"),
            QueryStatus::ServerFailure
        );
    }

    #[test]
    fn test_exit_code_fallback() {
        assert_eq!(classify(None, Some(9), "", ""), QueryStatus::Timeout);
        assert_eq!(classify(None, Some(1), "", "bad option"), QueryStatus::Failed);
        assert_eq!(classify(None, None, "", ""), QueryStatus::Failed);
    }
}
