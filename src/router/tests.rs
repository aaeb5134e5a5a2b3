use super::*;
use crate::error::Error;

#[test]
fn root_resolves_to_home_and_game_path_to_game() {
    assert_eq!(resolve("/"), Some(Page::Home));
    assert_eq!(resolve("/game"), Some(Page::Game));
}

#[test]
fn unknown_paths_have_no_page() {
    for path in ["/about", "/games", "/game/level/1", "game"] {
        assert_eq!(resolve(path), None, "{path:?}");
    }
}

#[test]
fn query_and_fragment_are_ignored() {
    assert_eq!(resolve("/game?difficulty=hard"), Some(Page::Game));
    assert_eq!(resolve("/#top"), Some(Page::Home));
    assert_eq!(resolve("?x=1"), Some(Page::Home));
    assert_eq!(resolve(""), Some(Page::Home));
}

#[test]
fn trailing_slash_and_case_are_tolerated() {
    assert_eq!(resolve("/game/"), Some(Page::Game));
    assert_eq!(resolve("/GAME"), Some(Page::Game));
}

#[test]
fn pages_round_trip_through_their_paths() {
    for route in ROUTES {
        assert_eq!(resolve(route.path), Some(route.page));
        assert_eq!(route.page.path(), route.path);
        assert_eq!(route.page.name(), route.name);
    }
    assert_eq!(Page::Home.name(), "Home");
    assert_eq!(Page::Game.name(), "Game");
}

#[test]
fn router_push_and_back() {
    let mut router = Router::default();
    assert_eq!(router.current(), Page::Home);

    assert_eq!(router.push("/game").unwrap(), Page::Game);
    assert_eq!(router.current(), Page::Game);

    // Pushing the page we're on doesn't add history.
    router.push("/game/").unwrap();
    assert_eq!(router.back(), Some(Page::Home));
    assert_eq!(router.back(), None);
    assert_eq!(router.current(), Page::Home);
}

#[test]
fn router_rejects_unknown_path_and_stays_put() {
    let mut router = Router::new(Page::Game);
    let err = router.push("/settings").unwrap_err();
    assert!(matches!(err, Error::UnknownRoute(ref p) if p == "/settings"));
    assert_eq!(router.current(), Page::Game);
    assert_eq!(router.back(), None);
}
