use crate::{DomainError, QuerySpec};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

pub const MAX_DOMAIN_LENGTH: usize = 253;
pub const MAX_LABEL_LENGTH: usize = 63;

/// Characters with meaning to a shell or to the resolver's own option syntax.
/// Never valid in any server form we accept.
const FORBIDDEN_SERVER_CHARS: &[char] = &[
    ';', '|', '&', '$', '`', '<', '>', '(', ')', '{', '}', '[', ']', '\\', '\'', '"', '*', '?',
    '!', '~', '#', '%', '^', '=', ',', '@', '+',
];

/// Validate a domain name per RFC 1035 label rules.
pub fn validate_domain(domain: &str) -> Result<(), DomainError> {
    check_hostname(domain).map_err(DomainError::InvalidDomain)
}

/// Validate a server given as IPv4, IPv6 or RFC 1123 hostname.
pub fn validate_server(server: &str) -> Result<(), DomainError> {
    if server.is_empty() {
        return Err(DomainError::InvalidServer(
            "Server address cannot be empty".to_string(),
        ));
    }
    if server
        .chars()
        .any(|c| c.is_whitespace() || c.is_control() || FORBIDDEN_SERVER_CHARS.contains(&c))
    {
        return Err(DomainError::InvalidServer(
            "Server address contains forbidden characters".to_string(),
        ));
    }

    if server.contains(':') {
        return server
            .parse::<Ipv6Addr>()
            .map(|_| ())
            .map_err(|_| DomainError::InvalidServer(format!("'{}' is not a valid IPv6 address", server)));
    }

    if looks_like_ipv4(server) {
        return server
            .parse::<Ipv4Addr>()
            .map(|_| ())
            .map_err(|_| DomainError::InvalidServer(format!("'{}' is not a valid IPv4 address", server)));
    }

    check_hostname(server).map_err(DomainError::InvalidServer)
}

/// Validate the target of a reverse lookup, which must be an IP address.
pub fn validate_reverse_target(address: &str) -> Result<(), DomainError> {
    address.parse::<IpAddr>().map(|_| ()).map_err(|_| {
        DomainError::InvalidDomain(format!(
            "'{}' is not an IP address suitable for a reverse lookup",
            address
        ))
    })
}

/// Validate every user-supplied part of a query spec.
pub fn validate_query(spec: &QuerySpec) -> Result<(), DomainError> {
    if spec.flags.reverse {
        validate_reverse_target(&spec.domain)?;
    } else {
        validate_domain(&spec.domain)?;
    }
    if let Some(server) = &spec.server {
        validate_server(server)?;
    }
    Ok(())
}

// All-numeric dotted input is an IPv4 attempt, never a hostname
// (RFC 1123 2.1: top-level labels are not all-numeric).
fn looks_like_ipv4(s: &str) -> bool {
    s.rsplit('.')
        .next()
        .is_some_and(|last| !last.is_empty() && last.chars().all(|c| c.is_ascii_digit()))
}

fn check_hostname(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Name cannot be empty".to_string());
    }
    if name.len() > MAX_DOMAIN_LENGTH {
        return Err(format!(
            "Name exceeds {} characters ({})",
            MAX_DOMAIN_LENGTH,
            name.len()
        ));
    }
    if name.starts_with('.') || name.ends_with('.') {
        return Err("Name cannot start or end with a dot".to_string());
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err("Name cannot start or end with a hyphen".to_string());
    }
    if name.contains("..") {
        return Err("Name cannot contain consecutive dots".to_string());
    }

    for label in name.split('.') {
        if label.len() > MAX_LABEL_LENGTH {
            return Err(format!(
                "Label '{}' exceeds {} characters",
                label, MAX_LABEL_LENGTH
            ));
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(format!("Label '{}' contains invalid characters", label));
        }
        let starts_ok = label.chars().next().is_some_and(|c| c.is_ascii_alphanumeric());
        let ends_ok = label.chars().last().is_some_and(|c| c.is_ascii_alphanumeric());
        if !starts_ok || !ends_ok {
            return Err(format!(
                "Label '{}' must start and end with a letter or digit",
                label
            ));
        }
    }

    Ok(())
}
