mod common;

use common::MockTransport;
use serde_json::json;
use trello_core::{
    CreateCard, Entity, Id, ListBoards, MoveCard, Trello, TrelloError, Verb,
};

fn trello(transport: MockTransport) -> Trello {
    Trello::new(Box::new(transport))
}

#[test]
fn test_create_card_with_labels_and_comment() {
    let transport = MockTransport::new()
        .json(Verb::Get, "/lists/l1/cards", json!([{"id": "c1", "pos": 5.0}]))
        .json(Verb::Post, "/cards", json!({"id": "c2", "name": "Fix login"}))
        .json(Verb::Post, "/cards/c2/actions/comments", json!({"id": "a1"}));
    let trello = trello(transport);

    let card = trello
        .create_card(&CreateCard {
            list_id: "l1".to_string(),
            name: "Fix login".to_string(),
            due: Some("2026-11-01".to_string()),
            labels: vec!["x1".to_string(), "x2".to_string()],
            comment: Some("from the CLI".to_string()),
            ..CreateCard::default()
        })
        .unwrap();

    assert_eq!(card.id(), Some("c2"));
    assert_eq!(card.fields().get("due"), Some(&json!("2026-11-01T00:00:00Z")));
}

#[test]
fn test_create_card_rejects_bad_input_before_network() {
    let trello = trello(MockTransport::new());

    let err = trello
        .create_card(&CreateCard {
            list_id: "l1".to_string(),
            name: "Card".to_string(),
            due: Some("someday".to_string()),
            ..CreateCard::default()
        })
        .unwrap_err();
    assert!(matches!(err, TrelloError::InvalidArgument { ref field, .. } if field == "due"));

    let err = trello
        .create_card(&CreateCard {
            list_id: "l1".to_string(),
            name: "   ".to_string(),
            ..CreateCard::default()
        })
        .unwrap_err();
    assert!(matches!(err, TrelloError::InvalidArgument { ref field, .. } if field == "name"));
}

#[test]
fn test_list_boards_single_board() {
    let transport = MockTransport::new().json(
        Verb::Get,
        "/boards/b1",
        json!({"id": "b1", "name": "Roadmap"}),
    );
    let trello = trello(transport);

    let mut boards = trello
        .list_boards(&ListBoards {
            board_id: Some("b1".to_string()),
            ..ListBoards::default()
        })
        .unwrap();

    assert_eq!(boards.len(), 1);
    assert_eq!(boards[0].name(trello.transport()).unwrap(), "Roadmap");
}

#[test]
fn test_lists_cards_and_labels() {
    let transport = MockTransport::new()
        .json(Verb::Get, "/boards/b1/lists", json!([{"id": "l1"}]))
        .json(Verb::Get, "/boards/b1/labels", json!([]))
        .json(Verb::Get, "/lists/l1/cards", json!([{"id": "c1"}, {"id": "c2"}]));
    let trello = trello(transport);

    assert_eq!(trello.lists(&Id::new("b1")).unwrap().len(), 1);
    assert!(trello.labels(&Id::new("b1")).unwrap().is_empty());
    assert_eq!(trello.cards(&Id::new("l1")).unwrap().len(), 2);
}

#[test]
fn test_move_and_delete_card() {
    let transport = MockTransport::new()
        .json(Verb::Get, "/lists/l2/cards", json!([]))
        .json(Verb::Put, "/cards/c1", json!({"id": "c1", "idList": "l2", "pos": 0}))
        .json(Verb::Delete, "/cards/c1", json!({}));
    let trello = trello(transport);

    let mut card = trello
        .move_card(&MoveCard {
            card_id: "c1".to_string(),
            list_id: "l2".to_string(),
            position: None,
        })
        .unwrap();
    assert_eq!(card.id_list(trello.transport()).unwrap(), "l2");

    trello.delete_card(&Id::new("c1")).unwrap();
}
