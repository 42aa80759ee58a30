//! Integration tests for #[derive(Annotated)]
//!
//! Registrations are applied to the global registry on first use, so every
//! test declares its own types.

use raya_metadata::{Annotated, MetadataRegistry, Target, TypeKey};
use serde::Deserialize;
use serde_json::json;

#[derive(Annotated)]
#[meta(label("Product", "Products"))]
#[allow(dead_code)]
struct Product {
    #[meta(token("sku-code"))]
    sku: String,
    #[meta(example(29.99), label("Price"))]
    price: f64,
}

#[test]
fn test_product_scenario() {
    assert_eq!(raya_metadata::label::<Product>(Target::Type).as_deref(), Some("Product"));
    assert_eq!(raya_metadata::labels::<Product>(Target::Type).as_deref(), Some("Products"));
    assert_eq!(
        raya_metadata::token::<Product>(Target::member("sku")).as_deref(),
        Some("sku-code")
    );
    assert_eq!(raya_metadata::tokens::<Product>(Target::member("sku")), None);
    assert_eq!(raya_metadata::example::<Product>(Target::member("price")), Some(json!(29.99)));
    assert_eq!(raya_metadata::label::<Product>(Target::member("price")).as_deref(), Some("Price"));
}

#[test]
fn test_default_names_after_registration() {
    assert_eq!(raya_metadata::name::<Product>(Target::Type).as_deref(), Some("Product"));
    assert_eq!(raya_metadata::name::<Product>(Target::member("sku")).as_deref(), Some("sku"));
}

#[test]
fn test_lookup_through_instance() {
    let product = Product {
        sku: "WM-001".to_string(),
        price: 29.99,
    };
    let key = raya_metadata::MetadataKey::new(TypeKey::of_val(&product), Target::member("sku"));

    let via_instance = MetadataRegistry::global().get_key(&key).unwrap();
    let via_type = MetadataRegistry::global()
        .get::<Product>(Target::member("sku"))
        .unwrap();
    assert!(via_instance.ptr_eq(&via_type));
}

#[derive(Annotated)]
#[meta(sensitive)]
#[allow(dead_code)]
struct Credentials {
    #[meta(label("Username"))]
    username: String,
    #[meta(sensitive(true), description("Never logged"))]
    password: String,
}

#[derive(Annotated)]
#[allow(dead_code)]
struct Admin {
    #[meta(sensitive(false))]
    audit_log: String,
}

#[test]
fn test_sensitive_forms() {
    assert_eq!(raya_metadata::sensitive::<Credentials>(Target::Type), Some(true));
    assert_eq!(raya_metadata::sensitive::<Credentials>(Target::member("password")), Some(true));
    assert_eq!(
        raya_metadata::description::<Credentials>(Target::member("password")).as_deref(),
        Some("Never logged")
    );
    assert_eq!(raya_metadata::sensitive::<Credentials>(Target::member("username")), None);
    assert_eq!(raya_metadata::sensitive::<Admin>(Target::member("audit_log")), Some(false));
}

#[derive(Annotated)]
#[meta(name("fooBar"), noun("foo", "foos"))]
#[meta(description("Two attributes are both applied"))]
struct Renamed;

#[derive(Annotated)]
#[allow(dead_code)]
struct Pair(#[meta(label("Left"))] u8, #[meta(label("Right"))] u8);

#[derive(Annotated)]
#[allow(dead_code)]
struct Keywords {
    #[meta(label("Type"))]
    r#type: String,
}

#[test]
fn test_member_naming() {
    assert_eq!(raya_metadata::name::<Renamed>(Target::Type).as_deref(), Some("fooBar"));
    assert_eq!(raya_metadata::nouns::<Renamed>(Target::Type).as_deref(), Some("foos"));
    assert_eq!(
        raya_metadata::description::<Renamed>(Target::Type).as_deref(),
        Some("Two attributes are both applied")
    );
    assert_eq!(raya_metadata::label::<Pair>(Target::member("0")).as_deref(), Some("Left"));
    assert_eq!(raya_metadata::label::<Pair>(Target::member("1")).as_deref(), Some("Right"));
    assert_eq!(raya_metadata::label::<Keywords>(Target::member("type")).as_deref(), Some("Type"));
}

#[derive(Annotated)]
#[meta(example(json!({ "name": "Wireless Mouse", "price": 29.99 })))]
struct Listing;

#[derive(Debug, Deserialize, PartialEq)]
struct ListingExample {
    name: String,
    price: f64,
}

#[test]
fn test_structured_example() {
    let example: Option<ListingExample> = raya_metadata::example_as::<Listing, _>(Target::Type).unwrap();
    assert_eq!(
        example,
        Some(ListingExample {
            name: "Wireless Mouse".to_string(),
            price: 29.99,
        })
    );
}

struct Undecorated;

#[test]
fn test_reading_undecorated_type_creates_nothing() {
    let registry = MetadataRegistry::global();
    let before = registry.len();

    assert_eq!(raya_metadata::label::<Undecorated>(Target::Type), None);
    assert_eq!(raya_metadata::name::<Undecorated>(Target::member("id")), None);
    assert_eq!(raya_metadata::sensitive::<Undecorated>(Target::parameter("run", 0)), None);

    assert!(!registry.contains::<Undecorated>(Target::Type));
    assert!(!registry.contains::<Undecorated>(Target::member("id")));
    assert_eq!(registry.len(), before);
}

#[test]
fn test_isolated_registry_loads_registrations() {
    let registry = MetadataRegistry::new();
    assert!(registry.is_empty());

    let count = registry.load_registrations();
    assert!(count > 0);
    assert_eq!(registry.label::<Product>(Target::Type).as_deref(), Some("Product"));

    // Separate from the global registry
    let local = registry.get::<Product>(Target::Type).unwrap();
    let global = MetadataRegistry::global().get::<Product>(Target::Type).unwrap();
    assert!(!local.ptr_eq(&global));
}
