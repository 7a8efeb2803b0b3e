//! Tests for entity wire formats
//!
//! The JSON shapes are a compatibility boundary: roles serialize to
//! "Manager" / "Store Keeper" and product fields use camelCase keys.

use stockroom_domain::{Identity, Product, ProductDraft, Role};

#[test]
fn role_serializes_to_wire_strings() {
    assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"Manager\"");
    assert_eq!(
        serde_json::to_string(&Role::StoreKeeper).unwrap(),
        "\"Store Keeper\""
    );

    let parsed: Role = serde_json::from_str("\"Store Keeper\"").unwrap();
    assert_eq!(parsed, Role::StoreKeeper);
}

#[test]
fn identity_round_trips_through_json() {
    let identity = Identity {
        id: "1".to_string(),
        email: "manager@stockroom.dev".to_string(),
        role: Role::Manager,
        token: "tok-abc".to_string(),
    };

    let json = serde_json::to_value(&identity).unwrap();
    assert_eq!(json["email"], "manager@stockroom.dev");
    assert_eq!(json["role"], "Manager");

    let back: Identity = serde_json::from_value(json).unwrap();
    assert_eq!(back, identity);
}

#[test]
fn product_uses_camel_case_keys() {
    let product = Product {
        id: "p1".to_string(),
        name: "Iphone 12 Pro".to_string(),
        category: "Smartphone".to_string(),
        price: 1140.0,
        stock: 100,
        description: None,
        tag_keyword: Some("Electronics".to_string()),
        discount: Some(10.0),
        discount_category: Some("Holiday".to_string()),
        views: Some(14_000),
        revenue: Some(164_000.0),
    };

    let json = serde_json::to_value(&product).unwrap();
    assert_eq!(json["tagKeyword"], "Electronics");
    assert_eq!(json["discountCategory"], "Holiday");
    // Absent optionals are omitted entirely, not null
    assert!(json.get("description").is_none());
}

#[test]
fn draft_with_id_preserves_every_field() {
    let draft = ProductDraft {
        name: "X".to_string(),
        category: "Y".to_string(),
        price: 10.0,
        stock: 5,
        description: Some("desc".to_string()),
        tag_keyword: None,
        discount: None,
        discount_category: None,
        views: None,
        revenue: None,
    };

    let product = draft.clone().with_id("p9");
    assert_eq!(product.id, "p9");
    assert_eq!(product.name, draft.name);
    assert_eq!(product.description, draft.description);
}
