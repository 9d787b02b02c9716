use chrono::NaiveDate;
use edmtrain_api::{Client, Query};

fn client() -> Client {
    Client::builder()
        .token("test-token")
        .base_url("https://example.com/api")
        .build()
        .unwrap()
}

fn pairs(query: &impl Query) -> Vec<(String, String)> {
    query
        .url()
        .unwrap()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn count_key(pairs: &[(String, String)], key: &str) -> usize {
    pairs.iter().filter(|(k, _)| k == key).count()
}

#[test]
fn event_query_defaults() {
    let client = client();
    let url = client.query_for_events().url().unwrap();
    assert_eq!(url.path(), "/api/events");
    assert_eq!(url.query(), Some("client=test-token"));
}

#[test]
fn event_query_keys_appear_once_with_latest_value() {
    let client = client();
    let query = client
        .query_for_events()
        .with_event_name("first")
        .with_location_ids(&[1])
        .with_festival(true)
        .with_event_name("second")
        .with_location_ids(&[2, 3])
        .with_festival(false);
    let pairs = pairs(&query);

    assert_eq!(pairs.len(), 4);
    for key in ["eventName", "locationIds", "festivalInd", "client"] {
        assert_eq!(count_key(&pairs, key), 1, "{}", key);
    }
    assert!(pairs.contains(&("eventName".to_string(), "second".to_string())));
    assert!(pairs.contains(&("locationIds".to_string(), "2,3".to_string())));
    assert!(pairs.contains(&("festivalInd".to_string(), "false".to_string())));
    assert_eq!(count_key(&pairs, "artistIds"), 0);
    assert_eq!(count_key(&pairs, "startDate"), 0);
}

#[test]
fn event_query_dates_and_flags() {
    let client = client();
    let query = client
        .query_for_events()
        .with_start_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
        .with_end_date(NaiveDate::from_ymd_opt(2024, 3, 31).unwrap())
        .with_created_start_date(NaiveDate::from_ymd_opt(2023, 12, 25).unwrap())
        .with_created_end_date(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap())
        .with_electronic_genre(false)
        .with_other_genre(true);
    let query_string = query.url().unwrap().query().unwrap().to_string();

    assert!(query_string.contains("startDate=2024-03-01&"));
    assert!(query_string.contains("endDate=2024-03-31&"));
    assert!(query_string.contains("createdStartDate=2023-12-25&"));
    assert!(query_string.contains("createdEndDate=2024-01-09&"));
    assert!(query_string.contains("includeElectronicGenreInd=false&"));
    assert!(query_string.contains("includeOtherGenreInd=true&"));
    assert!(query_string.ends_with("&client=test-token"));
}

#[test]
fn event_query_encodes_spaces() {
    let client = client();
    let url = client
        .query_for_events()
        .with_event_name("Electric Daisy Carnival")
        .url()
        .unwrap();
    assert!(url
        .query()
        .unwrap()
        .contains("eventName=Electric%20Daisy%20Carnival&"));
}

#[test]
fn location_query_does_not_require_state_for_city() {
    let client = client();
    let query = client.query_for_locations().with_city("Denver");
    let pairs = pairs(&query);
    assert_eq!(
        pairs,
        vec![
            ("city".to_string(), "Denver".to_string()),
            ("client".to_string(), "test-token".to_string()),
        ]
    );
    assert_eq!(query.url().unwrap().path(), "/api/locations");
}

#[test]
fn location_query_overwrites_state() {
    let client = client();
    let query = client
        .query_for_locations()
        .with_state("Texas")
        .with_state("Colorado");
    assert_eq!(query.args().get("state"), Some("Colorado"));
    assert_eq!(query.args().len(), 1);
}
