use extractor_client::models::{NewExtractionField, NewFieldDefinition};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

mod common;
use common::TestBackend;

#[tokio::test]
async fn extraction_fields_list_by_document() {
    let backend = TestBackend::spawn().await;

    Mock::given(method("GET"))
        .and(path("/api/extraction-fields/document/d-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "f-1",
                "document_id": "d-1",
                "field_name": "total_amount",
                "field_value": "199.00",
                "confidence": 0.81
            }
        ])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let fields = backend
        .client
        .get_extraction_fields_by_document("d-1")
        .await
        .unwrap();
    assert_eq!(fields[0].field_name, "total_amount");
    assert_eq!(fields[0].confidence, Some(0.81));
}

#[tokio::test]
async fn create_extraction_field_sends_typed_body() {
    let backend = TestBackend::spawn().await;

    Mock::given(method("POST"))
        .and(path("/api/extraction-fields"))
        .and(body_json(json!({
            "document_id": "d-1",
            "field_name": "invoice_number",
            "field_value": "INV-1",
            "confidence": 0.87
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "f-2",
            "document_id": "d-1",
            "field_name": "invoice_number",
            "field_value": "INV-1",
            "confidence": 0.87
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let field = NewExtractionField {
        document_id: "d-1".to_string(),
        field_name: "invoice_number".to_string(),
        field_value: Some("INV-1".to_string()),
        confidence: Some(0.87),
    };
    let created = backend.client.create_extraction_field(&field).await.unwrap();
    assert_eq!(created.id, "f-2");
}

#[tokio::test]
async fn bulk_create_sends_array_payload() {
    let backend = TestBackend::spawn().await;

    Mock::given(method("POST"))
        .and(path("/api/extraction-fields/bulk"))
        .and(body_json(json!([
            { "document_id": "d-1", "field_name": "vendor" },
            { "document_id": "d-1", "field_name": "due_date" }
        ])))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([
            { "id": "f-3", "document_id": "d-1", "field_name": "vendor" },
            { "id": "f-4", "document_id": "d-1", "field_name": "due_date" }
        ])))
        .expect(1)
        .mount(&backend.server)
        .await;

    let fields = vec![
        NewExtractionField {
            document_id: "d-1".to_string(),
            field_name: "vendor".to_string(),
            field_value: None,
            confidence: None,
        },
        NewExtractionField {
            document_id: "d-1".to_string(),
            field_name: "due_date".to_string(),
            field_value: None,
            confidence: None,
        },
    ];
    let created = backend
        .client
        .create_extraction_fields_bulk(&fields)
        .await
        .unwrap();
    assert_eq!(created.len(), 2);
}

#[tokio::test]
async fn field_definitions_roundtrip() {
    let backend = TestBackend::spawn().await;

    Mock::given(method("GET"))
        .and(path("/api/field-definitions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "fd-1", "name": "total_amount", "data_type": "number", "required": true }
        ])))
        .expect(1)
        .mount(&backend.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/field-definitions"))
        .and(body_json(json!({
            "name": "currency",
            "data_type": "string",
            "required": false
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "fd-2",
            "name": "currency",
            "data_type": "string",
            "required": false
        })))
        .expect(1)
        .mount(&backend.server)
        .await;

    let definitions = backend.client.get_field_definitions().await.unwrap();
    assert!(definitions[0].required);

    let definition = NewFieldDefinition {
        name: "currency".to_string(),
        description: None,
        data_type: "string".to_string(),
        required: false,
    };
    let created = backend
        .client
        .create_field_definition(&definition)
        .await
        .unwrap();
    assert_eq!(created.name, "currency");
}
