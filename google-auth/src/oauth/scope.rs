//! Scopes requested from the user.

/// Read access to YouTube Analytics reports.
pub const YT_ANALYTICS_READONLY: &str = "https://www.googleapis.com/auth/yt-analytics.readonly";
/// Read access to YouTube Analytics monetary reports.
pub const YT_ANALYTICS_MONETARY_READONLY: &str =
    "https://www.googleapis.com/auth/yt-analytics-monetary.readonly";

/// Scopes requested by the consent URL, in order.
pub const DEFAULT_SCOPES: [&str; 2] = [YT_ANALYTICS_READONLY, YT_ANALYTICS_MONETARY_READONLY];

/// Join scopes into the single space-delimited value OAuth expects.
///
/// The result is not encoded; encode it once as a whole query value.
pub fn join_scopes<S: AsRef<str>>(scopes: &[S]) -> String {
    scopes
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_default_scopes() {
        assert_eq!(
            join_scopes(&DEFAULT_SCOPES),
            "https://www.googleapis.com/auth/yt-analytics.readonly \
             https://www.googleapis.com/auth/yt-analytics-monetary.readonly"
        );
    }

    #[test]
    fn test_join_single_scope_has_no_separator() {
        assert_eq!(join_scopes(&["openid"]), "openid");
    }
}
