use product_catalog::forms::products::{CreateProductForm, UpdateProductForm};
use product_catalog::repository::InMemoryRepository;
use product_catalog::services::{ServiceError, products};

fn create_form(name: &str, description: &str, price: f64, stock: u32) -> CreateProductForm {
    CreateProductForm {
        name: name.to_string(),
        description: description.to_string(),
        price,
        stock,
    }
}

#[test]
fn create_product_assigns_identity_and_timestamps() {
    let repo = InMemoryRepository::new();

    let product =
        products::create_product(&repo, create_form("테스트 상품", "테스트 상품 설명", 10_000.0, 100))
            .expect("create product");

    assert_eq!(product.id, 1);
    assert_eq!(product.name, "테스트 상품");
    assert_eq!(product.description, "테스트 상품 설명");
    assert_eq!(product.price, 10_000.0);
    assert_eq!(product.stock, 100);
    assert_eq!(product.created_at, product.updated_at);

    let fetched = products::get_product(&repo, product.id)
        .expect("lookup")
        .expect("product should exist");
    assert_eq!(fetched, product);
}

#[test]
fn create_product_sanitizes_name_whitespace() {
    let repo = InMemoryRepository::new();

    let product = products::create_product(&repo, create_form("  노트북  ", "고성능 노트북", 1.0, 1))
        .expect("create product");

    assert_eq!(product.name, "노트북");
}

#[test]
fn create_product_rejects_negative_price() {
    let repo = InMemoryRepository::new();

    let result = products::create_product(&repo, create_form("Widget", "desc", -1.0, 1));

    assert!(matches!(result, Err(ServiceError::Form(_))));

    let all = products::list_products(&repo).expect("list products");
    assert!(all.is_empty());
}

#[test]
fn update_product_changes_supplied_fields_only() {
    let repo = InMemoryRepository::new();
    let created =
        products::create_product(&repo, create_form("테스트 상품", "테스트 상품 설명", 10_000.0, 100))
            .expect("create product");

    let form = UpdateProductForm {
        name: Some("수정된 상품".to_string()),
        price: Some(20_000.0),
        ..UpdateProductForm::default()
    };

    let updated = products::update_product(&repo, created.id, form).expect("update product");

    assert_eq!(updated.name, "수정된 상품");
    assert_eq!(updated.price, 20_000.0);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.stock, created.stock);
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn update_unknown_product_reports_offending_id() {
    let repo = InMemoryRepository::new();

    let form = UpdateProductForm {
        name: Some("수정된 상품".to_string()),
        ..UpdateProductForm::default()
    };

    let err = products::update_product(&repo, 999, form).expect_err("expected NotFound");

    assert!(matches!(err, ServiceError::NotFound(999)));
    assert_eq!(err.to_string(), "Product with ID 999 not found");
}

#[test]
fn search_with_empty_criteria_returns_everything() {
    let repo = InMemoryRepository::new();
    products::create_product(&repo, create_form("상품 1", "상품 1 설명", 10_000.0, 100))
        .expect("create product");
    products::create_product(&repo, create_form("상품 2", "상품 2 설명", 20_000.0, 200))
        .expect("create product");

    let items =
        products::search_products(&repo, products::SearchQuery::default()).expect("search");

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "상품 1");
    assert_eq!(items[1].name, "상품 2");
}

#[test]
fn search_applies_pagination_only_with_both_parameters() {
    let repo = InMemoryRepository::new();
    for index in 1..=4 {
        products::create_product(
            &repo,
            create_form(&format!("상품 {index}"), "설명", 1_000.0 * index as f64, 1),
        )
        .expect("create product");
    }

    // A lone `limit` has no pagination effect.
    let query = products::SearchQuery {
        limit: Some(2),
        ..products::SearchQuery::default()
    };
    let items = products::search_products(&repo, query).expect("search");
    assert_eq!(items.len(), 4);

    let query = products::SearchQuery {
        page: Some(2),
        limit: Some(2),
        ..products::SearchQuery::default()
    };
    let items = products::search_products(&repo, query).expect("search");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "상품 3");
    assert_eq!(items[1].name, "상품 4");
}
