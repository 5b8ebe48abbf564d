//! Decides where a stored target may redirect to.
//!
//! The core stores URLs verbatim, so a stored value is only redirected to
//! when it looks like an absolute URL, a bare domain name, or an IPv4
//! address with an optional port and path.

use std::net::Ipv4Addr;

use url::{Host, Url};

const MAX_DOMAIN_LENGTH: usize = 253;
const MAX_LABEL_LENGTH: usize = 63;

/// Returns the `Location` to redirect to for a stored target, or `None`
/// when the target is not redirectable.
pub fn redirect_target(stored: &str) -> Option<String> {
    if is_url(stored) {
        return Some(stored.to_string());
    }

    if is_domain(stored) {
        return Some(format!("http://{stored}"));
    }

    let host = stored.split(':').next().unwrap_or_default();
    if host.parse::<Ipv4Addr>().is_ok() {
        let candidate = format!("http://{stored}");
        if is_url(&candidate) {
            return Some(candidate);
        }
    }

    None
}

/// An absolute `http`, `https`, `ftp` or `ftps` URL with no whitespace
/// whose host is an IP address or a dotted domain. Single-label hosts such
/// as `localhost` are rejected.
pub fn is_url(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Ok(url) = Url::parse(value) else {
        return false;
    };

    matches!(url.scheme(), "http" | "https" | "ftp" | "ftps")
        && match url.host() {
            Some(Host::Domain(domain)) => is_domain(domain),
            Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
            None => false,
        }
}

/// A dotted domain name such as `example.com`: at least two labels of
/// letters, digits and inner hyphens, and a top-level label that is not
/// purely numeric.
pub fn is_domain(value: &str) -> bool {
    let value = value.strip_suffix('.').unwrap_or(value);
    if value.is_empty() || value.len() > MAX_DOMAIN_LENGTH {
        return false;
    }

    let labels: Vec<&str> = value.split('.').collect();
    if labels.len() < 2 || !labels.iter().all(|label| is_label(label)) {
        return false;
    }

    labels
        .last()
        .is_some_and(|tld| tld.len() >= 2 && !tld.chars().all(|c| c.is_ascii_digit()))
}

fn is_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= MAX_LABEL_LENGTH
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}
