//! Integration tests for #[annotated] on impl blocks

use raya_metadata::{annotated, Annotated, MetadataRegistry, Target};

#[allow(dead_code)]
struct ProductService;

#[allow(dead_code)]
#[annotated]
impl ProductService {
    #[meta(label("Create Product"), description("Creates a product"))]
    fn create(&self, #[meta(label("Product"))] product: String, #[meta(sensitive)] api_key: String) {}

    #[meta(token("list"))]
    fn list() -> Vec<String> {
        Vec::new()
    }

    fn lookup(&self, #[meta(noun("sku", "skus"))] sku: &str) -> Option<String> {
        Some(sku.to_string())
    }

    #[meta(example(50))]
    const PAGE_SIZE: usize = 50;
}

#[test]
fn test_method_annotations() {
    assert_eq!(
        raya_metadata::label::<ProductService>(Target::member("create")).as_deref(),
        Some("Create Product")
    );
    assert_eq!(
        raya_metadata::description::<ProductService>(Target::member("create")).as_deref(),
        Some("Creates a product")
    );
    assert_eq!(
        raya_metadata::token::<ProductService>(Target::member("list")).as_deref(),
        Some("list")
    );
    assert_eq!(
        raya_metadata::example::<ProductService>(Target::member("PAGE_SIZE")),
        Some(serde_json::json!(50))
    );
}

#[test]
fn test_parameter_annotations_skip_receiver() {
    assert_eq!(
        raya_metadata::label::<ProductService>(Target::parameter("create", 0)).as_deref(),
        Some("Product")
    );
    assert_eq!(raya_metadata::sensitive::<ProductService>(Target::parameter("create", 1)), Some(true));
    assert_eq!(raya_metadata::sensitive::<ProductService>(Target::parameter("create", 0)), None);
    assert_eq!(
        raya_metadata::nouns::<ProductService>(Target::parameter("lookup", 0)).as_deref(),
        Some("skus")
    );
}

#[test]
fn test_parameter_descriptors_are_distinct() {
    let registry = MetadataRegistry::global();
    let first = registry.get::<ProductService>(Target::parameter("create", 0)).unwrap();
    let second = registry.get::<ProductService>(Target::parameter("create", 1)).unwrap();
    assert!(!first.ptr_eq(&second));

    // Parameters get no default name, methods do
    assert_eq!(first.read().name, None);
    assert_eq!(raya_metadata::name::<ProductService>(Target::member("create")).as_deref(), Some("create"));
}

#[test]
fn test_unannotated_method_has_no_descriptor() {
    let registry = MetadataRegistry::global();
    assert!(!registry.contains::<ProductService>(Target::member("lookup")));
    assert!(registry.contains::<ProductService>(Target::parameter("lookup", 0)));
}

#[derive(Annotated)]
#[meta(label("Auth Service"))]
struct AuthService;

#[annotated]
impl AuthService {
    #[meta(sensitive)]
    fn authenticate(&self) -> bool {
        true
    }

    fn login(&self, #[meta(sensitive(false))] username: &str) -> bool {
        !username.is_empty()
    }
}

#[test]
fn test_derive_and_impl_on_same_type() {
    let service = AuthService;
    assert!(service.authenticate());
    assert!(service.login("admin"));

    assert_eq!(raya_metadata::label::<AuthService>(Target::Type).as_deref(), Some("Auth Service"));
    assert_eq!(raya_metadata::sensitive::<AuthService>(Target::member("authenticate")), Some(true));
    assert_eq!(raya_metadata::sensitive::<AuthService>(Target::parameter("login", 0)), Some(false));
}
