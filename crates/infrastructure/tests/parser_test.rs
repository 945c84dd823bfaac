use digger_domain::{QuerySpec, QueryStatus, RecordType};
use digger_infrastructure::parser::classify;
use digger_infrastructure::OutputParser;

const FULL_TRANSCRIPT: &str = r#"
; <<>> DiG 9.18.24 <<>> @192.0.2.53 example.com MX +time=5
; (1 server found)
;; global options: +cmd
;; Got answer:
;; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 41234
;; flags: qr rd ra; QUERY: 1, ANSWER: 2, AUTHORITY: 2, ADDITIONAL: 3

;; OPT PSEUDOSECTION:
; EDNS: version: 0, flags:; udp: 1232
;; QUESTION SECTION:
;example.com.			IN	MX

;; ANSWER SECTION:
example.com.		3600	IN	MX	10 mail1.example.com.
example.com.		3600	IN	MX	20 mail2.example.com.

;; AUTHORITY SECTION:
example.com.		86400	IN	NS	ns1.example.com.
example.com.		86400	IN	NS	ns2.example.com.

;; ADDITIONAL SECTION:
mail1.example.com.	300	IN	A	192.0.2.10
mail2.example.com.	300	IN	A	192.0.2.20
ns1.example.com.	300	IN	AAAA	2001:db8::53

;; Query time: 23 msec
;; SERVER: 192.0.2.53#53(192.0.2.53) (UDP)
;; WHEN: Mon Jan 15 10:00:00 UTC 2024
;; MSG SIZE  rcvd: 180
"#;

const NXDOMAIN_TRANSCRIPT: &str = r#"
; <<>> DiG 9.18.24 <<>> missing.example.com A +time=5
;; global options: +cmd
;; Got answer:
;; ->>HEADER<<- opcode: QUERY, status: NXDOMAIN, id: 5120
;; flags: qr rd ra; QUERY: 1, ANSWER: 0, AUTHORITY: 1, ADDITIONAL: 1

;; QUESTION SECTION:
;missing.example.com.		IN	A

;; AUTHORITY SECTION:
example.com.		900	IN	SOA	ns1.example.com. hostmaster.example.com. 2024011501 7200 3600 1209600 3600

;; Query time: 41 msec
;; SERVER: 1.1.1.1#53(1.1.1.1) (UDP)
"#;

// ============================================================================
// Golden transcripts
// ============================================================================

#[test]
fn test_full_transcript_sections() {
    let spec = QuerySpec::new("example.com", RecordType::MX).with_server("192.0.2.53");
    let parsed = OutputParser::parse(FULL_TRANSCRIPT, &spec);

    assert_eq!(parsed.status, Some(QueryStatus::Success));
    assert_eq!(parsed.warnings, 0);
    assert_eq!(parsed.answer.len(), 2);
    assert_eq!(parsed.authority.len(), 2);
    assert_eq!(parsed.additional.len(), 3);

    let mx1 = &parsed.answer[0];
    assert_eq!(mx1.name, "example.com");
    assert_eq!(mx1.ttl, 3600);
    assert_eq!(mx1.record_type, RecordType::MX);
    assert_eq!(mx1.priority, Some(10));
    assert_eq!(mx1.value, "mail1.example.com");
    assert_eq!(parsed.answer[1].priority, Some(20));
    assert_eq!(parsed.answer[1].value, "mail2.example.com");

    assert!(parsed
        .authority
        .iter()
        .all(|r| r.record_type == RecordType::NS && r.ttl == 86400));
    assert_eq!(parsed.authority[0].value, "ns1.example.com");
    assert_eq!(parsed.authority[1].value, "ns2.example.com");

    assert_eq!(parsed.additional[0].name, "mail1.example.com");
    assert_eq!(parsed.additional[0].value, "192.0.2.10");
    assert_eq!(parsed.additional[2].record_type, RecordType::AAAA);
    assert_eq!(parsed.additional[2].value, "2001:db8::53");
}

#[test]
fn test_full_transcript_metadata() {
    let spec = QuerySpec::new("example.com", RecordType::MX);
    let parsed = OutputParser::parse(FULL_TRANSCRIPT, &spec);

    assert_eq!(parsed.query_time_ms, Some(23));
    assert_eq!(parsed.server.as_deref(), Some("192.0.2.53"));
}

#[test]
fn test_nxdomain_transcript() {
    let spec = QuerySpec::new("missing.example.com", RecordType::A);
    let parsed = OutputParser::parse(NXDOMAIN_TRANSCRIPT, &spec);

    assert_eq!(parsed.status, Some(QueryStatus::NameNotFound));
    assert!(parsed.answer.is_empty());
    assert_eq!(parsed.authority.len(), 1);
    assert_eq!(parsed.authority[0].record_type, RecordType::SOA);
    assert_eq!(parsed.server.as_deref(), Some("1.1.1.1"));

    // resolver exits 0 on NXDOMAIN; the status line decides
    let status = classify(parsed.status, Some(0), NXDOMAIN_TRANSCRIPT, "");
    assert_eq!(status, QueryStatus::NameNotFound);
}

#[test]
fn test_truncated_transcript_keeps_good_records() {
    let truncated = "\
;; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 1
;; ANSWER SECTION:
example.com.		300	IN	A	192.0.2.1
example.com.		300	IN
";
    let spec = QuerySpec::new("example.com", RecordType::A);
    let parsed = OutputParser::parse(truncated, &spec);

    assert_eq!(parsed.status, Some(QueryStatus::Success));
    assert_eq!(parsed.answer.len(), 1);
    assert_eq!(parsed.warnings, 1);
}

#[test]
fn test_dnssec_answer() {
    let output = "\
;; ->>HEADER<<- opcode: QUERY, status: NOERROR, id: 7
;; ANSWER SECTION:
example.com.	3600	IN	A	192.0.2.1
example.com.	3600	IN	RRSIG	A 13 2 3600 20240201000000 20240101000000 31337 example.com. Zm9vYmFy YmF6cXV4
";
    let spec = QuerySpec::new("example.com", RecordType::A);
    let parsed = OutputParser::parse(output, &spec);

    assert_eq!(parsed.answer.len(), 2);
    let sig = parsed.answer[1].signature.as_ref().unwrap();
    assert_eq!(sig.key_tag, 31337);
    assert_eq!(sig.signer_name, "example.com");
    assert_eq!(sig.signature, "Zm9vYmFyYmF6cXV4");
}
