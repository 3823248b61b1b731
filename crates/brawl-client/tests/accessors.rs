//! Integration tests for the typed resource accessors.

use brawl_client::{BrawlClient, Error, GameMode, PageQuery};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BrawlClient {
    BrawlClient::builder()
        .token("test-token")
        .base_url(server.uri())
        .build()
        .unwrap()
}

fn cached(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_json(body)
        .insert_header("cache-control", "max-age=120")
}

#[tokio::test]
async fn test_player_by_tag() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/%232Q0VVCJ2"))
        .respond_with(cached(json!({
            "tag": "#2Q0VVCJ2",
            "name": "Kairos",
            "nameColor": "0xffa2e3fe",
            "icon": { "id": 28000000 },
            "trophies": 31512,
            "highestTrophies": 31600,
            "expLevel": 212,
            "expPoints": 252103,
            "isQualifiedFromChampionshipChallenge": false,
            "3vs3Victories": 11832,
            "soloVictories": 1187,
            "duoVictories": 1540,
            "bestRoboRumbleTime": 0,
            "bestTimeAsBigBrawler": 0,
            "club": { "tag": "#2YQ0CL9", "name": "Tribe" },
            "brawlers": [{
                "id": 16000000,
                "name": "SHELLY",
                "power": 11,
                "rank": 25,
                "trophies": 750,
                "highestTrophies": 800,
                "starPowers": [{ "id": 23000076, "name": "SHELL SHOCK" }],
                "gadgets": [],
                "gears": []
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let player = client.players().get("#2Q0VVCJ2").await.unwrap();

    assert_eq!(player.tag, "#2Q0VVCJ2");
    assert_eq!(player.name, "Kairos");
    assert_eq!(player.three_vs_three_victories, 11832);
    assert_eq!(player.solo_victories, 1187);
    let club_name = player.club.as_ref().and_then(|c| c.name.as_deref());
    assert_eq!(club_name, Some("Tribe"));
    assert_eq!(player.brawlers[0].star_powers[0].name, "SHELL SHOCK");

    // Same player without the `#` and in lower case hits the cache
    let again = client.players().get("2q0vvcj2").await.unwrap();
    assert_eq!(again, player);
}

#[tokio::test]
async fn test_battle_log() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/%232Q0VVCJ2/battlelog"))
        .respond_with(cached(json!({
            "items": [{
                "battleTime": "20240115T183000.000Z",
                "event": { "id": 15000007, "mode": "gemGrab", "map": "Hard Rock Mine" },
                "battle": { "mode": "gemGrab", "type": "ranked", "result": "victory" }
            }],
            "paging": { "cursors": {} }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let log = client.players().battle_log("#2Q0VVCJ2").await.unwrap();

    assert_eq!(log.items.len(), 1);
    assert_eq!(log.items[0].event.mode, Some(GameMode::GemGrab));
    assert_eq!(log.items[0].battle["result"], "victory");
}

#[tokio::test]
async fn test_club_and_members() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/clubs/%232YQ0CL9"))
        .respond_with(cached(json!({
            "tag": "#2YQ0CL9",
            "name": "Tribe",
            "description": "Be active",
            "type": "inviteOnly",
            "badgeId": 8000001,
            "requiredTrophies": 30000,
            "trophies": 1200000,
            "members": []
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/clubs/%232YQ0CL9/members"))
        .and(query_param("limit", "2"))
        .respond_with(cached(json!({
            "items": [
                { "tag": "#A", "name": "One", "role": "president", "trophies": 40000 },
                { "tag": "#B", "name": "Two", "role": "member", "trophies": 35000 }
            ],
            "paging": { "cursors": { "after": "eyJwb3MiOjJ9" } }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let club = client.clubs().get("#2YQ0CL9").await.unwrap();
    assert_eq!(club.club_type.as_deref(), Some("inviteOnly"));
    assert_eq!(club.required_trophies, 30000);

    let members = client
        .clubs()
        .members("#2YQ0CL9", PageQuery::new().limit(2))
        .await
        .unwrap();
    assert_eq!(members.items.len(), 2);
    assert_eq!(members.items[0].role, "president");
    assert_eq!(
        members.paging.cursors.after.as_deref(),
        Some("eyJwb3MiOjJ9")
    );
}

#[tokio::test]
async fn test_tag_with_reserved_characters_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(cached(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let escape = client.players().get("#X/../../clubs/%23ABC/members").await;
    assert!(matches!(escape, Err(Error::InvalidTag(_))));

    let fragment = client.clubs().get("#AB#CD").await;
    assert!(matches!(fragment, Err(Error::InvalidTag(_))));

    let members = client.clubs().members("AB?x=1", PageQuery::new()).await;
    assert!(matches!(members, Err(Error::InvalidTag(_))));

    assert_eq!(client.cached_entries(), 0);
}

#[tokio::test]
async fn test_rankings() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rankings/us/players"))
        .and(query_param("after", "cursor-1"))
        .respond_with(cached(json!({
            "items": [{
                "tag": "#P",
                "name": "Top",
                "trophies": 60000,
                "rank": 1,
                "club": { "name": "Tribe" }
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rankings/global/clubs"))
        .respond_with(cached(json!({
            "items": [{
                "tag": "#C",
                "name": "Tribe",
                "badgeId": 8000001,
                "trophies": 1500000,
                "rank": 1,
                "memberCount": 30
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rankings/global/brawlers/16000000"))
        .respond_with(cached(json!({
            "items": [{ "tag": "#S", "name": "Shelly Main", "trophies": 1500, "rank": 1 }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let rankings = client.rankings();

    let players = rankings
        .players("us", PageQuery::new().after("cursor-1"))
        .await
        .unwrap();
    assert_eq!(players.items[0].club.as_ref().unwrap().name, "Tribe");

    let clubs = rankings.clubs("global", PageQuery::new()).await.unwrap();
    assert_eq!(clubs.items[0].member_count, 30);

    let shelly = rankings
        .brawlers("global", 16000000, PageQuery::new())
        .await
        .unwrap();
    assert_eq!(shelly.items[0].rank, 1);
}

#[tokio::test]
async fn test_brawlers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/brawlers"))
        .respond_with(cached(json!({
            "items": [
                { "id": 16000000, "name": "SHELLY", "starPowers": [], "gadgets": [] },
                { "id": 16000001, "name": "COLT", "starPowers": [], "gadgets": [] }
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let brawlers = client.brawlers().list(PageQuery::new()).await.unwrap();

    let names: Vec<&str> = brawlers.items.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["SHELLY", "COLT"]);
}

#[tokio::test]
async fn test_event_rotation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/events/rotation"))
        .respond_with(cached(json!([
            {
                "startTime": "20240115T080000.000Z",
                "endTime": "20240116T080000.000Z",
                "slotId": 1,
                "event": { "id": 15000007, "mode": "gemGrab", "map": "Hard Rock Mine" }
            },
            {
                "startTime": "20240115T080000.000Z",
                "endTime": "20240116T080000.000Z",
                "slotId": 9,
                "event": { "id": 15000900, "mode": "someFutureMode", "map": "New Map" }
            }
        ])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let rotation = client.events().rotation().await.unwrap();

    assert_eq!(rotation.len(), 2);
    assert_eq!(rotation[0].event.mode, GameMode::GemGrab);
    assert_eq!(
        rotation[1].event.mode,
        GameMode::Unknown("someFutureMode".to_string())
    );
}
