//! End-to-end requests through the default reqwest transport.

mod common;

use oapy::codec::{to_xml, DeserializeFn, XmlCodec};
use oapy::{
    ApiError, Client, Delete, Get, Json, PlainText, Post, Put, RequestOptions, Responses,
    ValidationError, Xml,
};
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::petstore::*;

async fn petstore(mock_server: &MockServer) -> Client<Petstore> {
    Client::builder(url::Url::parse(&format!("{}/api/v3/", mock_server.uri())).unwrap())
        .default_header("api_key", "special-key")
        .unwrap()
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_get_pet_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/pet/42"))
        .and(header("api_key", "special-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"name":"Skippy"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = petstore(&mock_server)
        .await
        .path(PetById)
        .method(Get)
        .params(PetIdParams { pet_id: 42 })
        .send()
        .await
        .unwrap();

    assert_eq!(response, GetPet::Ok(Pet::named("Skippy")));
    assert_eq!(response.status(), 200);
    assert!(response.is_success());
}

#[tokio::test]
async fn test_status_only_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/pet/7"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Pet not found"))
        .mount(&mock_server)
        .await;

    let response = petstore(&mock_server)
        .await
        .path(PetById)
        .method(Get)
        .params(PetIdParams { pet_id: 7 })
        .send()
        .await
        .unwrap();

    assert_eq!(response, GetPet::NotFound);
    assert!(!response.is_success());
}

#[tokio::test]
async fn test_find_by_status_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/pet/findByStatus"))
        .and(query_param("status", "available"))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![
            Pet::named("Skippy"),
            Pet::named("Rex"),
        ]))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = petstore(&mock_server)
        .await
        .path(FindByStatus)
        .method(Get)
        .query(FindByStatusQuery {
            status: Some("available".to_string()),
        })
        .send()
        .await
        .unwrap();

    let FindPets::Ok(pets) = response else {
        panic!("expected 200, got {}", response.status());
    };
    let names: Vec<_> = pets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Skippy", "Rex"]);
}

#[tokio::test]
async fn test_json_round_trip() {
    let mock_server = MockServer::start().await;
    let order = Order {
        id: 5,
        pet_id: 42,
        quantity: 2,
    };

    Mock::given(method("POST"))
        .and(path("/api/v3/store/order"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "id": 5, "petId": 42, "quantity": 2 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&order))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = petstore(&mock_server)
        .await
        .path(StoreOrder)
        .method(Post)
        .body(order.clone())
        .send()
        .await
        .unwrap();

    assert_eq!(response, PlaceOrder::Ok(order));
}

#[tokio::test]
async fn test_text_response_content_type() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/store/order"))
        .respond_with(ResponseTemplate::new(400).set_body_string("quantity must be positive"))
        .mount(&mock_server)
        .await;

    let response = petstore(&mock_server)
        .await
        .path(StoreOrder)
        .method(Post)
        .body(Order {
            id: 1,
            pet_id: 1,
            quantity: 0,
        })
        .send_as(RequestOptions::new(), PlainText)
        .await
        .unwrap();

    assert_eq!(
        response,
        PlaceOrderText::Invalid("quantity must be positive".to_string())
    );
}

#[tokio::test]
async fn test_status_without_text_content_is_status_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v3/store/order"))
        .respond_with(ResponseTemplate::new(422).set_body_string("unprocessable"))
        .mount(&mock_server)
        .await;

    let client = petstore(&mock_server).await;
    let order = Order {
        id: 1,
        pet_id: 1,
        quantity: 1,
    };

    let as_json = client
        .path(StoreOrder)
        .method(Post)
        .body(order.clone())
        .send()
        .await
        .unwrap();
    assert_eq!(as_json, PlaceOrder::Unprocessable);

    let as_text = client
        .path(StoreOrder)
        .method(Post)
        .body(order)
        .send_as(RequestOptions::new(), PlainText)
        .await
        .unwrap();
    assert_eq!(as_text, PlaceOrderText::Unprocessable);
    assert_eq!(as_text.status(), 422);
}

#[tokio::test]
async fn test_xml_in_and_out() {
    let mock_server = MockServer::start().await;
    let pet = Pet {
        id: Some(10),
        name: "Skippy".to_string(),
        status: Some("available".to_string()),
    };

    Mock::given(method("PUT"))
        .and(path("/api/v3/pet"))
        .and(header("content-type", "application/xml"))
        .and(body_string(to_xml(&pet).unwrap()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<Pet><id>10</id><name>Skippy</name><status>sold</status></Pet>"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = petstore(&mock_server)
        .await
        .path(PetCollection)
        .method_with(Put, Xml, to_xml::<Pet>)
        .body(pet)
        .send_deserialize(RequestOptions::new(), Xml, XmlCodec)
        .await
        .unwrap();

    let UpdatePetXml::Ok(updated) = response else {
        panic!("expected 200, got {}", response.status());
    };
    assert_eq!(updated.status.as_deref(), Some("sold"));
}

#[tokio::test]
async fn test_closure_deserializer_sees_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v3/pet"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Skippy"))
        .mount(&mock_server)
        .await;

    let response = petstore(&mock_server)
        .await
        .path(PetCollection)
        .method(Put)
        .body(Pet::named("Skippy"))
        .send_deserialize(
            RequestOptions::new(),
            Json,
            DeserializeFn::new(
                |text: &str, status: u16| -> Result<serde_json::Value, ValidationError> {
                    Ok(serde_json::json!({ "id": status, "name": text }))
                },
            ),
        )
        .await
        .unwrap();

    assert_eq!(
        response,
        UpdatePet::Ok(Pet {
            id: Some(200),
            name: "Skippy".to_string(),
            status: None,
        })
    );
}

#[tokio::test]
async fn test_delete_sends_no_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v3/pet/3"))
        .and(body_string(""))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = petstore(&mock_server)
        .await
        .path(PetById)
        .method(Delete)
        .params(PetIdParams { pet_id: 3 })
        .body(DeleteReason {
            reason: "adopted".to_string(),
        })
        .send()
        .await
        .unwrap();

    assert_eq!(response, DeletePet::Deleted);
}

#[tokio::test]
async fn test_malformed_json_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/pet/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
        .mount(&mock_server)
        .await;

    let err = petstore(&mock_server)
        .await
        .path(PetById)
        .method(Get)
        .params(PetIdParams { pet_id: 1 })
        .send()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Validation(ValidationError::JsonParse(_))));
}
