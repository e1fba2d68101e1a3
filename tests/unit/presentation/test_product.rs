use frisbo_client::presentation::product::{Product, ProductDimensions};
use serde_json::json;

#[test]
fn test_product_defaults() {
    let product: Product =
        serde_json::from_value(json!({"name": "Mug", "sku": "A-1"})).unwrap();
    assert_eq!(product.vat, 0);
    assert!(product.id.is_none());
    assert!(product.dimensions.is_none());
}

#[test]
fn test_product_skips_absent_fields_on_output() {
    let product = Product {
        id: Some(77),
        name: "Plate".to_string(),
        sku: "B-2".to_string(),
        upc: None,
        external_code: None,
        ean: Some("5941234567890".to_string()),
        vat: 19,
        dimensions: Some(ProductDimensions {
            weight: Some(1),
            ..Default::default()
        }),
        has_serial_number: None,
    };
    assert_eq!(
        serde_json::to_value(&product).unwrap(),
        json!({
            "id": 77,
            "name": "Plate",
            "sku": "B-2",
            "ean": "5941234567890",
            "vat": 19,
            "dimensions": {"weight": 1}
        })
    );
}
