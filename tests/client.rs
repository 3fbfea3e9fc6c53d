use chrono::{TimeZone, Utc};
use mockito::{Matcher, Server};
use serde_json::json;

use filament::{
    ActivateScene, Capabilities, Client, Color, Cycle, Device, Direction, Effect, Error, Group,
    Location, OperationResult, Power, Product, State, StateDelta, States, Toggle,
};

const TOKEN: &str = "abc123";
const RESULTS: &str = include_str!("fixtures/results.json");

fn client(server: &Server) -> Client {
    Client::builder(TOKEN)
        .endpoint(server.url())
        .build()
        .expect("Failed to build client")
}

fn main_light() -> Device {
    Device {
        id: "123".to_string(),
        uuid: "123".to_string(),
        label: "Main".to_string(),
        connected: true,
        power: Power::On,
        brightness: 1.0,
        color: Color::new(240.0, 1.0, 4000.0),
        last_seen: Some(Utc.with_ymd_and_hms(2018, 10, 21, 4, 13, 4).unwrap()),
        seconds_since_seen: 0.0,
        group: Group {
            id: "123".to_string(),
            name: "My Room".to_string(),
        },
        location: Location {
            id: "123".to_string(),
            name: "My Home".to_string(),
        },
        product: Product {
            name: "LIFX BR30".to_string(),
            identifier: "lifx_br30".to_string(),
            company: "LIFX".to_string(),
            capabilities: Capabilities {
                has_color: true,
                has_variable_color_temp: true,
                has_ir: false,
                has_chain: false,
                has_multizone: false,
                min_kelvin: 2500.0,
                max_kelvin: 9000.0,
            },
        },
    }
}

fn expected_result() -> OperationResult {
    OperationResult {
        id: "d073d52260ef".to_string(),
        status: "ok".to_string(),
        label: "Main".to_string(),
    }
}

#[tokio::test]
async fn test_list_lights_with_empty_selector() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lights/all")
        .match_header("authorization", "Bearer abc123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(include_str!("fixtures/lights.json"))
        .create_async()
        .await;

    let client = client(&server);
    assert!(
        client
            .url(filament::Endpoint::Lights(""))
            .unwrap()
            .as_str()
            .ends_with("/lights/all")
    );

    let devices = client.list_lights("").await.expect("Failed to list lights");
    assert_eq!(devices, vec![main_light()]);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_lights_with_selector() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lights/group_id:1c8de82b81f445e7cfaafae49b259c71")
        .with_status(200)
        .with_body(include_str!("fixtures/lights.json"))
        .create_async()
        .await;

    let devices = client(&server)
        .list_lights("group_id:1c8de82b81f445e7cfaafae49b259c71")
        .await
        .unwrap();
    assert_eq!(devices.len(), 1);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_scenes() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/scenes")
        .match_header("authorization", "Bearer abc123")
        .with_status(200)
        .with_body(include_str!("fixtures/scenes.json"))
        .create_async()
        .await;

    let scenes = client(&server).list_scenes().await.unwrap();
    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].name, "Evening");
    assert_eq!(scenes[0].states[0].power, Some(Power::On));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_validate_color() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/color")
        .match_query(Matcher::UrlEncoded("string".into(), "red".into()))
        .with_status(200)
        .with_body(r#"{"hue":0,"saturation":1.0,"brightness":null,"kelvin":null}"#)
        .create_async()
        .await;

    let color = client(&server).validate_color("red").await.unwrap();
    assert_eq!(color.hue, 0.0);
    assert_eq!(color.saturation, 1.0);
    assert_eq!(color.brightness, None);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_set_state_multi_status() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/lights/all/state")
        .match_header("authorization", "Bearer abc123")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"power": "on"})))
        .with_status(207)
        .with_body(RESULTS)
        .create_async()
        .await;

    let response = client(&server)
        .set_state("", &json!({"power": "on"}))
        .await
        .expect("207 is a success");
    assert_eq!(response.results, vec![expected_result()]);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_typed_state_round_trip() {
    let mut state = State::new();
    state.power(Power::On);
    state.brightness(0.5);

    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/lights/id:d073d52260ef/state")
        .match_body(Matcher::Json(serde_json::to_value(&state).unwrap()))
        .with_status(200)
        .with_body(RESULTS)
        .create_async()
        .await;

    let response = client(&server)
        .set_state("id:d073d52260ef", &state)
        .await
        .unwrap();
    assert!(response.is_all_ok());
    assert_eq!(response.results, vec![expected_result()]);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_set_states() {
    let mut kitchen = State::for_selector("label:Kitchen");
    kitchen.power(Power::Off);
    let states: States = [kitchen].into_iter().collect();

    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/lights/states")
        .match_body(Matcher::Json(
            json!({"states": [{"selector": "label:Kitchen", "power": "off"}]}),
        ))
        .with_status(207)
        .with_body(RESULTS)
        .create_async()
        .await;

    let response = client(&server).set_states(&states).await.unwrap();
    assert_eq!(response.results.len(), 1);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_activate_scene() {
    let mut body = ActivateScene::new();
    body.duration(2.0);

    let mut server = Server::new_async().await;
    let mock = server
        .mock(
            "PUT",
            "/scenes/scene_id:b2ce5d1f-84a3-4b52-aa1f-8b7b7c4d8a11/activate",
        )
        .match_body(Matcher::Json(json!({"duration": 2.0})))
        .with_status(207)
        .with_body(RESULTS)
        .create_async()
        .await;

    let response = client(&server)
        .activate_scene("b2ce5d1f-84a3-4b52-aa1f-8b7b7c4d8a11", &body)
        .await
        .unwrap();
    assert!(response.is_all_ok());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_cycle() {
    let mut dim = State::new();
    dim.brightness(0.2);
    let mut bright = State::new();
    bright.brightness(1.0);
    let mut cycle: Cycle = [dim, bright].into_iter().collect();
    cycle.direction(Direction::Forward);

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/lights/all/cycle")
        .match_body(Matcher::Json(json!({
            "states": [{"brightness": 0.2}, {"brightness": 1.0}],
            "direction": "forward"
        })))
        .with_status(207)
        .with_body(RESULTS)
        .create_async()
        .await;

    client(&server).cycle("", &cycle).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_pulse_and_breathe_effects() {
    let mut effect = Effect::new();
    effect.color("green");
    effect.period(1.0);
    effect.peak(0.5);

    let mut server = Server::new_async().await;
    let pulse = server
        .mock("POST", "/lights/label:Desk/effects/pulse")
        .match_body(Matcher::Json(
            json!({"color": "green", "period": 1.0, "peak": 0.5}),
        ))
        .with_status(207)
        .with_body(RESULTS)
        .create_async()
        .await;
    let breathe = server
        .mock("POST", "/lights/all/effects/breathe")
        .with_status(207)
        .with_body(RESULTS)
        .create_async()
        .await;

    let client = client(&server);
    client.pulse_effect("label:Desk", &effect).await.unwrap();
    client.breathe_effect("", &effect).await.unwrap();

    pulse.assert_async().await;
    breathe.assert_async().await;
}

#[tokio::test]
async fn test_toggle_power() {
    let mut server = Server::new_async().await;
    let plain = server
        .mock("POST", "/lights/all/toggle")
        .match_body(Matcher::Json(json!({})))
        .with_status(207)
        .with_body(RESULTS)
        .create_async()
        .await;
    let slow = server
        .mock("POST", "/lights/group:Den/toggle")
        .match_body(Matcher::Json(json!({"duration": 4.0})))
        .with_status(207)
        .with_body(RESULTS)
        .create_async()
        .await;

    let client = client(&server);
    client.toggle_power("").await.unwrap();

    let mut toggle = Toggle::new();
    toggle.duration(4.0);
    client.toggle_power_with("group:Den", &toggle).await.unwrap();

    plain.assert_async().await;
    slow.assert_async().await;
}

#[tokio::test]
async fn test_state_delta() {
    let mut delta = StateDelta::new();
    delta.brightness(0.25);

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/lights/all/state/delta")
        .match_body(Matcher::Json(json!({"brightness": 0.25})))
        .with_status(207)
        .with_body(RESULTS)
        .create_async()
        .await;

    let response = client(&server).state_delta("", &delta).await.unwrap();
    assert_eq!(response.results, vec![expected_result()]);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_server_error_keeps_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/lights/all")
        .with_status(500)
        .with_body(r#"{"error":"internal"}"#)
        .create_async()
        .await;

    let err = client(&server).list_lights("").await.unwrap_err();
    assert!(err.is_api());
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.body(), Some(&br#"{"error":"internal"}"#[..]));
    assert!(err.to_string().contains("500"));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_raw_get_returns_body_with_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/lights/all")
        .with_status(404)
        .with_body(r#"{"error":"Could not find label:Nope."}"#)
        .create_async()
        .await;

    let client = client(&server);
    let url = format!("{}/lights/all", server.url());
    match client.get(&url).await {
        Err(Error::Api { status, body }) => {
            assert_eq!(status, 404);
            assert!(String::from_utf8_lossy(&body).contains("label:Nope"));
        }
        other => panic!("expected an API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/lights/all")
        .with_status(200)
        .with_body("[{not json")
        .create_async()
        .await;

    let err = client(&server).list_lights("").await.unwrap_err();
    assert!(err.is_decode());
    assert!(!err.is_api());
}

#[tokio::test]
async fn test_empty_url_fails_before_network() {
    let client = Client::new(TOKEN).unwrap();
    let err = client.get("").await.unwrap_err();
    assert!(matches!(err, Error::MissingCredentialOrEndpoint));

    let err = client.post("", &json!({})).await.unwrap_err();
    assert!(matches!(err, Error::MissingCredentialOrEndpoint));
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    let client = Client::builder(TOKEN)
        .endpoint("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.list_scenes().await.unwrap_err();
    assert!(err.is_transport());
}

#[test]
fn test_empty_token_is_configuration_error() {
    let err = Client::new("").unwrap_err();
    assert!(matches!(err, Error::InvalidCredential));
    assert!(err.is_configuration());
}
