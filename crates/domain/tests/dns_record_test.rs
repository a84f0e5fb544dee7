use doh_lookup_domain::{AggregateResult, AnswerSet, DohAnswer, DohResponse, RecordType};

#[test]
fn test_record_type_codes() {
    assert_eq!(RecordType::A.to_u16(), 1);
    assert_eq!(RecordType::NS.to_u16(), 2);
    assert_eq!(RecordType::CNAME.to_u16(), 5);
    assert_eq!(RecordType::SOA.to_u16(), 6);
    assert_eq!(RecordType::MX.to_u16(), 15);
    assert_eq!(RecordType::TXT.to_u16(), 16);
    assert_eq!(RecordType::AAAA.to_u16(), 28);
}

#[test]
fn test_record_type_fixed_order() {
    let names: Vec<&str> = RecordType::ALL.iter().map(|rt| rt.as_str()).collect();
    assert_eq!(names, ["A", "AAAA", "CNAME", "MX", "TXT", "NS", "SOA"]);
}

#[test]
fn test_aggregate_validates_cloudflare_style_payloads() {
    let a: DohResponse = serde_json::from_str(
        r#"{"Status":0,"Answer":[{"name":"example.com","type":1,"TTL":60,"data":"93.184.216.34"}]}"#,
    )
    .unwrap();
    let cname_chain: DohResponse = serde_json::from_str(
        r#"{"Status":0,"Answer":[{"name":"www.example.com","type":5,"TTL":60,"data":"example.com."},
                                 {"name":"example.com","type":28,"TTL":60,"data":"2001:db8::1"}]}"#,
    )
    .unwrap();
    let nxdomain: DohResponse = serde_json::from_str(r#"{"Status":3}"#).unwrap();

    let result = AggregateResult::new()
        .with(RecordType::A, a.into())
        .with(RecordType::AAAA, cname_chain.into())
        .with(RecordType::MX, nxdomain.into());

    let a_records = result.valid_answers(RecordType::A).unwrap();
    assert_eq!(a_records, [DohAnswer {
        name: Some("example.com".to_string()),
        record_type: 1,
        ttl: Some(60),
        data: "93.184.216.34".into(),
    }]);
    // First record is the CNAME, so the AAAA set is not rendered.
    assert!(result.valid_answers(RecordType::AAAA).is_none());
    assert!(result.get(RecordType::MX).is_absent());
}

#[test]
fn test_aggregate_set_replaces_slot() {
    let mut result = AggregateResult::new();
    result.set(RecordType::NS, AnswerSet::Opaque("<html>".to_string()));
    result.set(
        RecordType::NS,
        AnswerSet::Records(vec![DohAnswer::new(2, "ns1.example.com.")]),
    );
    assert_eq!(result.get(RecordType::NS).records().len(), 1);
}
