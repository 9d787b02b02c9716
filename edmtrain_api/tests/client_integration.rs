use edmtrain_api::{Client, Error, MappingError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .token("test-token")
        .base_url(&format!("{}/api", server.uri()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn get_events_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("events.json");

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .and(query_param("client", "test-token"))
        .and(query_param("eventName", "Summer Solstice"))
        .and(query_param("artistIds", "1,2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let events = client
        .query_for_events()
        .with_event_name("Summer Solstice")
        .with_artist_ids(&[1, 2])
        .execute()
        .await
        .unwrap();

    assert_eq!(events.len(), 3);
    assert_eq!(events[0].id, 1);
    assert!(events[1].venue.is_virtual());
}

#[tokio::test]
async fn token_is_last_parameter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":true,"data":[]}"#))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let events = client
        .query_for_events()
        .with_festival(true)
        .execute()
        .await
        .unwrap();
    assert!(events.is_empty());

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].url.query(),
        Some("festivalInd=true&client=test-token")
    );
}

#[tokio::test]
async fn get_locations_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("locations.json");

    Mock::given(method("GET"))
        .and(path("/api/locations"))
        .and(query_param("state", "Texas"))
        .and(query_param("client", "test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let locations = client
        .query_for_locations()
        .with_state("Texas")
        .execute()
        .await
        .unwrap();

    assert_eq!(locations.len(), 2);
    assert_eq!(locations[0].city.as_deref(), Some("Austin"));
}

#[tokio::test]
async fn api_failure_is_reported() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/locations"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("failure.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.query_for_locations().with_city("Austin").execute().await;
    match result {
        Err(Error::Api(message)) => assert_eq!(message, "bad request"),
        other => panic!("expected api error, got {:?}", other),
    }
}

#[tokio::test]
async fn api_failure_with_error_status_uses_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(400).set_body_string(load_fixture("failure.json")))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.query_for_events().execute().await;
    assert!(matches!(result, Err(Error::Api(_))));
}

#[tokio::test]
async fn server_error_without_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.query_for_events().execute().await;
    match result {
        Err(Error::HttpStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.query_for_events().execute().await;
    assert!(matches!(result, Err(Error::Mapping(MappingError::Json(_)))));
}

#[tokio::test]
async fn missing_venue_returns_no_partial_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(load_fixture("event_missing_venue.json")),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let result = client.query_for_events().execute().await;
    assert!(matches!(
        result,
        Err(Error::Mapping(MappingError::MissingField("venue")))
    ));
}

#[tokio::test]
async fn connection_failure() {
    // Port 1 is reserved and closed on test machines.
    let client = Client::builder()
        .token("test-token")
        .base_url("http://127.0.0.1:1/api")
        .build()
        .unwrap();
    let result = client.query_for_events().execute().await;
    match result {
        Err(err @ Error::Connection(_)) => {
            let message = err.to_string();
            assert!(message.starts_with("Something went wrong getting a connection to the api"));
            assert!(!message.contains("test-token"));
        }
        other => panic!("expected connection error, got {:?}", other),
    }
}
