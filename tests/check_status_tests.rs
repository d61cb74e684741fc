use bodsfeed::siri::{ServiceStatus, render_check_status};
use chrono::{DateTime, Utc};
use quick_xml::Reader;
use quick_xml::events::Event;

fn started_at(value: &str) -> ServiceStatus {
    ServiceStatus::started_at(
        DateTime::parse_from_rfc3339(value)
            .unwrap()
            .with_timezone(&Utc),
    )
}

fn first_text(xml: &str, name: &str) -> String {
    let mut reader = Reader::from_str(xml);
    let mut in_target = false;
    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => in_target = e.name().as_ref() == name.as_bytes(),
            Ok(Event::Text(t)) if in_target => return String::from_utf8_lossy(&t).into_owned(),
            Ok(Event::End(_)) => in_target = false,
            Ok(Event::Eof) => panic!("no <{name}> with text in document"),
            Ok(_) => {}
            Err(err) => panic!("malformed XML: {err}"),
        }
    }
}

#[test]
fn status_document_shape() {
    let xml = render_check_status(&started_at("2024-01-15T06:00:00Z")).unwrap();
    assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    assert!(xml.contains(r#"<Siri version="2.0""#));
    assert!(xml.contains(r#"xmlns="http://www.siri.org.uk/siri""#));
    assert!(xml.contains(r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#));
    assert!(!xml.contains("schemaLocation"));
    assert_eq!(first_text(&xml, "Status"), "true");
    assert_eq!(first_text(&xml, "ServiceStartedTime"), "2024-01-15T06:00:00.000Z");
    assert_eq!(first_text(&xml, "DataReady"), "true");
}

#[test]
fn service_started_time_is_stable_across_renders() {
    let status = started_at("2024-01-15T06:00:00Z");
    let first = render_check_status(&status).unwrap();
    let second = render_check_status(&status).unwrap();
    assert_eq!(
        first_text(&first, "ServiceStartedTime"),
        first_text(&second, "ServiceStartedTime")
    );
}

#[test]
fn degraded_status_renders_false() {
    let mut status = started_at("2024-01-15T06:00:00Z");
    status.status = false;
    status.data_ready = false;
    let xml = render_check_status(&status).unwrap();
    assert_eq!(first_text(&xml, "Status"), "false");
    assert_eq!(first_text(&xml, "DataReady"), "false");
}
