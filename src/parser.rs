use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // The dot between octets is a wildcard, not a literal. Upstream output
    // has always been matched this way, so it stays.
    static ref PROXY_RE: Regex =
        Regex::new(r"<proxy>((\d{1,3}.){3}\d{1,3}:\d{2,5})</proxy>").unwrap();
}

/// Extracts every `ip:port` wrapped in `<proxy>` tags, in body order.
/// Duplicates are kept. A body without tags yields an empty list.
pub fn parse_proxies(body: &str) -> Vec<String> {
    PROXY_RE
        .captures_iter(body)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_order() {
        let body = "<proxy>1.2.3.4:8080</proxy>junk<proxy>5.6.7.8:3128</proxy>";
        assert_eq!(parse_proxies(body), vec!["1.2.3.4:8080", "5.6.7.8:3128"]);
    }

    #[test]
    fn no_tags_yields_empty() {
        assert!(parse_proxies("").is_empty());
        assert!(parse_proxies("1.2.3.4:8080\n5.6.7.8:3128").is_empty());
        assert!(parse_proxies("{\"proxies\":[\"1.2.3.4:8080\"]}").is_empty());
    }

    #[test]
    fn keeps_duplicates() {
        let body = "<proxy>1.1.1.1:80</proxy><proxy>1.1.1.1:80</proxy>";
        assert_eq!(parse_proxies(body), vec!["1.1.1.1:80", "1.1.1.1:80"]);
    }

    #[test]
    fn octet_separator_is_any_char() {
        assert_eq!(parse_proxies("<proxy>1x2-3_4:80</proxy>"), vec!["1x2-3_4:80"]);
    }

    #[test]
    fn skips_malformed_entries() {
        let body = concat!(
            "<proxy>1.2.3.4:8</proxy>",       // port too short
            "<proxy>1.2.3.4:123456</proxy>",  // port too long
            "<proxy>1234.2.3.4:80</proxy>",   // octet too long
            "<proxy>1.2.3:80</proxy>",        // three octets
            "<proxy>10.0.0.1:65535</proxy>",
        );
        assert_eq!(parse_proxies(body), vec!["10.0.0.1:65535"]);
    }

    #[test]
    fn tolerates_surrounding_markup() {
        let body = r#"<html><body><div class="list">
<proxy>192.168.1.10:3128</proxy>
<span>ignored</span><proxy>8.8.8.8:53</proxy>
</div></body></html>"#;
        assert_eq!(parse_proxies(body), vec!["192.168.1.10:3128", "8.8.8.8:53"]);
    }
}
