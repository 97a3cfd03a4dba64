//! Integration tests for the cached PokeAPI client and REPL session, using
//! mockito for HTTP mocking.

use std::time::Duration;

use mockito::{Server, ServerGuard};
use pokecache::{repl::Flow, Cache, PokeApiClient, PokedexError, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;

const PIKACHU: &str = r#"{
    "name": "pikachu",
    "base_experience": 112,
    "height": 4,
    "weight": 60,
    "stats": [{"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}}],
    "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}]
}"#;

// == Helper Functions ==

fn client_for(server: &ServerGuard, interval: Duration) -> PokeApiClient {
    let cache = Cache::new(interval);
    PokeApiClient::new(&server.url(), cache, Duration::from_secs(5)).unwrap()
}

async fn execute(session: &mut Session, line: &str) -> String {
    let mut out = Vec::new();
    let flow = session.execute(line, &mut out).await.unwrap();
    assert_eq!(flow, Flow::Continue);
    String::from_utf8(out).unwrap()
}

// == Client Tests ==

#[tokio::test]
async fn test_repeat_fetch_is_served_from_cache() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/pokemon/pikachu")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(PIKACHU)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_secs(60));

    let first = client.pokemon("pikachu").await.unwrap();
    let second = client.pokemon("pikachu").await.unwrap();

    mock.assert_async().await;
    assert_eq!(first.name, "pikachu");
    assert_eq!(second.weight, 60);
    assert_eq!(client.cache().len(), 1);
    assert_eq!(client.cache().stats().hits, 1);
}

#[tokio::test]
async fn test_error_status_is_not_cached() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/pokemon/missingno")
        .with_status(404)
        .with_body("Not Found")
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_secs(60));

    for _ in 0..2 {
        let err = client.pokemon("missingno").await.unwrap_err();
        assert!(matches!(
            err,
            PokedexError::Status { status, .. } if status.as_u16() == 404
        ));
    }

    mock.assert_async().await;
    assert!(client.cache().is_empty());
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/location-area/eterna-forest-area")
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_secs(60));

    let err = client
        .location_area("eterna-forest-area")
        .await
        .unwrap_err();
    assert!(matches!(err, PokedexError::Decode(_)));
}

#[tokio::test]
async fn test_expired_entry_is_fetched_again() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/pokemon/pikachu")
        .with_status(200)
        .with_body(PIKACHU)
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_millis(100));

    client.pokemon("pikachu").await.unwrap();
    // Several sweeps pass while the entry is older than the interval
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(client.cache().is_empty());

    client.pokemon("pikachu").await.unwrap();

    mock.assert_async().await;
}

// == Session Tests ==

#[tokio::test]
async fn test_map_pages_through_location_areas() {
    let mut server = Server::new_async().await;
    let second_page = format!("{}/location-area/page-2", server.url());
    let first_page_body = format!(
        r#"{{"count": 4, "next": "{}", "previous": null,
            "results": [{{"name": "canalave-city-area"}}, {{"name": "eterna-city-area"}}]}}"#,
        second_page
    );
    let second_page_body = format!(
        r#"{{"count": 4, "next": null, "previous": "{}/location-area/",
            "results": [{{"name": "pastoria-city-area"}}, {{"name": "sunyshore-city-area"}}]}}"#,
        server.url()
    );

    let first = server
        .mock("GET", "/location-area/")
        .with_status(200)
        .with_body(first_page_body)
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/location-area/page-2")
        .with_status(200)
        .with_body(second_page_body)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_secs(60));
    let mut session = Session::with_rng(client, StdRng::seed_from_u64(3));

    assert_eq!(
        execute(&mut session, "map").await,
        "canalave-city-area\neterna-city-area\n"
    );
    assert_eq!(
        execute(&mut session, "map").await,
        "pastoria-city-area\nsunyshore-city-area\n"
    );
    assert_eq!(
        execute(&mut session, "map").await,
        "You're on the last page\n"
    );
    // Going back is answered by the cache
    assert_eq!(
        execute(&mut session, "mapb").await,
        "canalave-city-area\neterna-city-area\n"
    );
    assert_eq!(
        execute(&mut session, "map").await,
        "pastoria-city-area\nsunyshore-city-area\n"
    );

    first.assert_async().await;
    second.assert_async().await;
}

#[tokio::test]
async fn test_explore_and_catch() {
    let mut server = Server::new_async().await;
    let _area = server
        .mock("GET", "/location-area/viridian-forest-area")
        .with_status(200)
        .with_body(
            r#"{"name": "viridian-forest-area",
                "pokemon_encounters": [{"pokemon": {"name": "pikachu", "url": ""}}]}"#,
        )
        .create_async()
        .await;
    let _pokemon = server
        .mock("GET", "/pokemon/caterpie")
        .with_status(200)
        .with_body(r#"{"name": "caterpie", "base_experience": 0, "height": 3, "weight": 29}"#)
        .create_async()
        .await;

    let client = client_for(&server, Duration::from_secs(60));
    let mut session = Session::with_rng(client, StdRng::seed_from_u64(11));

    assert_eq!(
        execute(&mut session, "explore viridian-forest-area").await,
        "Exploring viridian-forest-area...\nFound Pokemon:\n - pikachu\n"
    );

    let out = execute(&mut session, "catch caterpie").await;
    assert!(out.contains("caterpie was caught!"));
    assert_eq!(
        execute(&mut session, "pokedex").await,
        "Your Pokedex:\n - caterpie\n"
    );
}
