use digger_domain::QuerySpec;

/// Build the resolver argument vector for `spec`. The binary itself is not
/// included; the vector is handed to the process API as-is, never to a shell.
///
/// Reverse lookups put `-x` directly in front of the address and omit the
/// record-type token, since the resolver treats `-x`'s operand as the query.
pub fn build_args(spec: &QuerySpec, timeout_secs: u64) -> Vec<String> {
    let mut args = Vec::with_capacity(8);

    if let Some(server) = spec.server.as_deref() {
        args.push(format!("@{}", server));
    }

    if spec.flags.reverse {
        args.push("-x".to_string());
        args.push(spec.domain.to_string());
    } else {
        args.push(spec.domain.to_string());
        args.push(spec.record_type.as_str().to_string());
    }

    if spec.flags.trace {
        args.push("+trace".to_string());
    }
    if spec.flags.short_form {
        args.push("+short".to_string());
    }
    if spec.flags.dnssec {
        args.push("+dnssec".to_string());
    }

    args.push(format!("+time={}", timeout_secs));
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use digger_domain::{QueryFlags, RecordType};

    #[test]
    fn test_plain_query() {
        let spec = QuerySpec::new("example.com", RecordType::MX);
        assert_eq!(build_args(&spec, 5), vec!["example.com", "MX", "+time=5"]);
    }

    #[test]
    fn test_server_comes_first() {
        let spec = QuerySpec::new("example.com", RecordType::A).with_server("1.1.1.1");
        assert_eq!(
            build_args(&spec, 3),
            vec!["@1.1.1.1", "example.com", "A", "+time=3"]
        );
    }

    #[test]
    fn test_flag_order() {
        let flags = QueryFlags {
            trace: true,
            short_form: true,
            dnssec: true,
            ..QueryFlags::default()
        };
        let spec = QuerySpec::new("example.com", RecordType::AAAA).with_flags(flags);
        assert_eq!(
            build_args(&spec, 5),
            vec!["example.com", "AAAA", "+trace", "+short", "+dnssec", "+time=5"]
        );
    }

    #[test]
    fn test_reverse_lookup() {
        let flags = QueryFlags {
            reverse: true,
            ..QueryFlags::default()
        };
        let spec = QuerySpec::new("192.0.2.1", RecordType::PTR)
            .with_server("9.9.9.9")
            .with_flags(flags);
        assert_eq!(
            build_args(&spec, 5),
            vec!["@9.9.9.9", "-x", "192.0.2.1", "+time=5"]
        );
    }

    #[test]
    fn test_timeout_always_last() {
        let spec = QuerySpec::new("example.com", RecordType::TXT);
        let args = build_args(&spec, 12);
        assert_eq!(args.last().map(String::as_str), Some("+time=12"));
    }
}
