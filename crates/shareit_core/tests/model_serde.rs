use shareit_core::{Item, NewItem, User};

#[test]
fn item_serialization_uses_camel_case_fields() {
    let item = Item {
        id: 3,
        name: "Drill".to_string(),
        description: "Cordless drill".to_string(),
        available: true,
        owner: 1,
        request_id: Some(9),
    };

    let json = serde_json::to_value(&item).unwrap();
    assert_eq!(json["id"], 3);
    assert_eq!(json["available"], true);
    assert_eq!(json["owner"], 1);
    assert_eq!(json["requestId"], 9);

    let decoded: Item = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, item);
}

#[test]
fn user_serialization_keeps_email_as_entered() {
    let user = User {
        id: 1,
        name: "Ann".to_string(),
        email: "A@X.com".to_string(),
    };

    let json = serde_json::to_value(&user).unwrap();
    assert_eq!(json, serde_json::json!({"id": 1, "name": "Ann", "email": "A@X.com"}));
}

#[test]
fn new_item_request_id_defaults_to_none() {
    let value = serde_json::json!({
        "name": "Saw",
        "description": "Hand saw",
        "available": false
    });

    let item: NewItem = serde_json::from_value(value).unwrap();
    assert_eq!(item.request_id, None);
    assert!(!item.available);
}
