mod common;

use common::{MockTransport, Reply};
use serde_json::{json, Value};
use trello_core::{Card, Entity, List, TrelloError, Verb};

fn three_cards() -> Value {
    json!([
        {"id": "c1", "name": "one", "pos": 1.0},
        {"id": "c2", "name": "two", "pos": 2.0},
        {"id": "c3", "name": "three", "pos": 3.0}
    ])
}

fn transport_with_cards(cards: Value) -> MockTransport {
    MockTransport::new()
        .json(Verb::Get, "/lists/l1/cards", cards)
        .json(Verb::Post, "/cards", json!({"id": "new", "pos": 99.0}))
}

fn inserted_pos(cards: Value, index: i64) -> String {
    let transport = transport_with_cards(cards);
    let mut card = Card::new();
    card.set_field("name", "new card");

    List::with_id("l1")
        .insert(&transport, index, &mut card)
        .expect("insert should succeed");

    transport.last_request().params["pos"].clone()
}

#[test]
fn test_insert_position_law() {
    assert_eq!(inserted_pos(three_cards(), 0), "0");
    assert_eq!(inserted_pos(three_cards(), 3), "4");
    assert_eq!(inserted_pos(three_cards(), 1), "1.5");
    assert_eq!(inserted_pos(three_cards(), -1), "2.5");
    assert_eq!(inserted_pos(json!([]), 5), "0");
    assert_eq!(inserted_pos(json!([]), -2), "0");
}

#[test]
fn test_insert_end_to_end() {
    let transport = MockTransport::new()
        .json(
            Verb::Get,
            "/lists/l1/cards",
            json!([{"id": "c1", "pos": 1.0}, {"id": "c2", "pos": 2.0}]),
        )
        .json(
            Verb::Post,
            "/cards",
            json!({"id": "c9", "pos": 1.5, "idList": "l1", "name": "Middle"}),
        );

    let mut card = Card::new();
    card.set_field("name", "Middle");
    card.set_field("desc", "goes between");
    card.set_field("due", "2026-10-18T00:00:00Z");

    List::with_id("l1").insert(&transport, 1, &mut card).unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);

    let create = &requests[1];
    assert_eq!(create.effective_verb(), Verb::Post);
    assert_eq!(create.path, "/cards");
    assert_eq!(create.params["idList"], "l1");
    assert_eq!(create.params["pos"], "1.5");
    assert_eq!(create.params["name"], "Middle");
    assert_eq!(create.params["desc"], "goes between");
    assert_eq!(create.params["due"], "2026-10-18T00:00:00Z");

    assert_eq!(card.id(), Some("c9"));
    assert_eq!(card.pos(&transport).unwrap(), 1.5);
    assert_eq!(card.id_list(&transport).unwrap(), "l1");
    assert_eq!(transport.request_count(), 2);
}

#[test]
fn test_insert_refreshes_cards_without_pos() {
    let transport = MockTransport::new()
        .json(
            Verb::Get,
            "/lists/l1/cards",
            json!([{"id": "c1", "name": "a"}, {"id": "c2", "name": "b"}]),
        )
        .json(Verb::Get, "/cards/c1", json!({"id": "c1", "pos": 10.0}))
        .json(Verb::Get, "/cards/c2", json!({"id": "c2", "pos": 20.0}))
        .json(Verb::Post, "/cards", json!({"id": "c3"}));

    let mut card = Card::new();
    List::with_id("l1").insert(&transport, 1, &mut card).unwrap();

    let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
    assert_eq!(paths, ["/lists/l1/cards", "/cards/c1", "/cards/c2", "/cards"]);
    assert_eq!(transport.last_request().params["pos"], "15");
}

#[test]
fn test_append_goes_past_last_card() {
    let transport = transport_with_cards(three_cards());
    let mut card = Card::new();

    List::with_id("l1").append(&transport, &mut card).unwrap();
    assert_eq!(transport.last_request().params["pos"], "4");
}

#[test]
fn test_insert_propagates_server_errors() {
    let transport = MockTransport::new()
        .json(Verb::Get, "/lists/l1/cards", three_cards())
        .route(Verb::Post, "/cards", Reply::Server("Bad Gateway", "upstream"));

    let mut card = Card::new();
    let err = List::with_id("l1")
        .insert(&transport, 0, &mut card)
        .unwrap_err();

    assert!(err.is_server_error());
    assert_eq!(card.id(), None);
}

#[test]
fn test_insert_into_unsaved_list_makes_no_request() {
    let transport = transport_with_cards(three_cards());
    let mut card = Card::new();

    assert!(matches!(
        List::new().insert(&transport, 0, &mut card),
        Err(TrelloError::MissingField { .. })
    ));
    assert_eq!(transport.request_count(), 0);
}

#[test]
fn test_move_card_skips_itself() {
    let transport = MockTransport::new()
        .json(Verb::Get, "/lists/l1/cards", three_cards())
        .json(
            Verb::Put,
            "/cards/c1",
            json!({"id": "c1", "idList": "l1", "pos": 2.5}),
        );

    // Without c1 the list is [2.0, 3.0]; index 1 sits between them
    let mut card = Card::with_id("c1");
    List::with_id("l1").move_card(&transport, 1, &mut card).unwrap();

    let request = transport.last_request();
    assert_eq!(request.effective_verb(), Verb::Put);
    assert_eq!(request.params["idList"], "l1");
    assert_eq!(request.params["pos"], "2.5");
    assert_eq!(card.pos(&transport).unwrap(), 2.5);
}

#[test]
fn test_comment_and_delete() {
    let transport = MockTransport::new()
        .json(
            Verb::Post,
            "/cards/c1/actions/comments",
            json!({"id": "a1", "type": "commentCard"}),
        )
        .json(Verb::Delete, "/cards/c1", json!({"_value": null}));

    let card = Card::with_id("c1");
    card.add_comment(&transport, "looks good").unwrap();
    assert_eq!(transport.last_request().params["text"], "looks good");

    card.delete(&transport).unwrap();
    assert_eq!(transport.last_request().effective_verb(), Verb::Delete);
    assert_eq!(transport.request_count(), 2);
}
