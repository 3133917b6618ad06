//! Endpoint selection by host suffix

use tracing::debug;

/// Outcome of a [`join_endpoints`] call.
///
/// `matched` holds the selected endpoints in wanted-token order; `missing`
/// holds the tokens that matched nothing, also in token order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JoinReport {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl JoinReport {
    /// The matches joined by commas, no spaces. Empty string when nothing
    /// matched.
    pub fn joined(&self) -> String {
        self.matched.join(",")
    }
}

/// Select endpoints whose host's last dot-separated segment equals a wanted
/// token.
///
/// `wanted` is a single space-separated string. For each token, the first
/// endpoint whose host portion (before the first `:`) ends in a dot-segment
/// string-equal to the token is selected — for `host:port` entries with an
/// IPv4 host this matches the last octet. Matches are prefixed with
/// `http://` when `use_http_scheme` is set. The rule is literal: a dotless
/// host compares as a whole, and hostnames or IPv6 addresses get no special
/// treatment.
pub fn join_endpoints(endpoints: &[String], wanted: &str, use_http_scheme: bool) -> JoinReport {
    let mut report = JoinReport::default();
    for token in wanted.split_whitespace() {
        match endpoints.iter().find(|e| last_host_segment(e) == token) {
            Some(endpoint) => {
                debug!("Matched token {} to endpoint {}", token, endpoint);
                if use_http_scheme {
                    report.matched.push(format!("http://{}", endpoint));
                } else {
                    report.matched.push(endpoint.clone());
                }
            }
            None => report.missing.push(token.to_string()),
        }
    }
    report
}

/// Last dot-separated segment of the host portion of `host:port`.
fn last_host_segment(endpoint: &str) -> &str {
    let host = endpoint.split(':').next().unwrap_or(endpoint);
    host.rsplit('.').next().unwrap_or(host)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoints() -> Vec<String> {
        vec![
            "10.0.0.1:5052".to_string(),
            "10.0.0.2:5052".to_string(),
            "10.0.0.3:5052".to_string(),
        ]
    }

    #[test]
    fn test_join_with_miss() {
        let report = join_endpoints(&endpoints(), "1 3 9", false);
        assert_eq!(report.matched, vec!["10.0.0.1:5052", "10.0.0.3:5052"]);
        assert_eq!(report.missing, vec!["9"]);
        assert_eq!(report.joined(), "10.0.0.1:5052,10.0.0.3:5052");
    }

    #[test]
    fn test_join_with_http_scheme() {
        let report = join_endpoints(&endpoints(), "1 3 9", true);
        assert_eq!(
            report.joined(),
            "http://10.0.0.1:5052,http://10.0.0.3:5052"
        );
    }

    #[test]
    fn test_empty_wanted() {
        let report = join_endpoints(&endpoints(), "", false);
        assert!(report.matched.is_empty());
        assert!(report.missing.is_empty());
        assert_eq!(report.joined(), "");
    }

    #[test]
    fn test_whitespace_only_wanted() {
        let report = join_endpoints(&endpoints(), "   ", false);
        assert_eq!(report, JoinReport::default());
    }

    #[test]
    fn test_matches_preserve_token_order() {
        let report = join_endpoints(&endpoints(), "3 1", false);
        assert_eq!(report.matched, vec!["10.0.0.3:5052", "10.0.0.1:5052"]);
    }

    #[test]
    fn test_first_matching_endpoint_wins() {
        let endpoints = vec!["10.0.1.7:5052".to_string(), "10.0.2.7:5052".to_string()];
        let report = join_endpoints(&endpoints, "7", false);
        assert_eq!(report.matched, vec!["10.0.1.7:5052"]);
    }

    #[test]
    fn test_port_is_not_matched() {
        let report = join_endpoints(&endpoints(), "5052", false);
        assert_eq!(report.missing, vec!["5052"]);
    }

    #[test]
    fn test_exact_segment_equality() {
        // "1" must not match "10" or "11"
        let endpoints = vec!["10.0.0.10:5052".to_string(), "10.0.0.11:5052".to_string()];
        let report = join_endpoints(&endpoints, "1", false);
        assert!(report.matched.is_empty());
        assert_eq!(report.missing, vec!["1"]);
    }

    #[test]
    fn test_dotless_host_matches_whole() {
        let endpoints = vec!["localhost:5052".to_string()];
        let report = join_endpoints(&endpoints, "localhost", false);
        assert_eq!(report.matched, vec!["localhost:5052"]);
    }

    #[test]
    fn test_hostname_matches_last_label() {
        let endpoints = vec!["node1.example.com:5052".to_string()];
        let report = join_endpoints(&endpoints, "com", true);
        assert_eq!(report.matched, vec!["http://node1.example.com:5052"]);
    }
}
