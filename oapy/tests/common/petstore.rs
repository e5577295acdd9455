//! A Petstore schema, written the way a generator would emit it.

use oapy::{
    responses, Delete, Get, Head, Json, Never, Operation, Options, Patch, Path, PlainText, Post,
    Put, RequestBody, ResponseUnion, Schema, Trace, Xml,
};
use serde::{Deserialize, Serialize};

pub struct Petstore;
impl Schema for Petstore {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Pet {
    pub fn named(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            status: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u64,
    pub pet_id: u64,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PetIdParams {
    #[serde(rename = "petId")]
    pub pet_id: u64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FindByStatusQuery {
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteReason {
    pub reason: String,
}

// /pet

#[derive(Debug, Clone, Copy)]
pub struct PetCollection;

impl Path<Petstore> for PetCollection {
    const TEMPLATE: &'static str = "/pet";
}

impl Operation<Put> for PetCollection {
    const STATUSES: &'static [u16] = &[200, 400, 404, 422];
    type Params = Never;
    type Query = Never;
    type RequestContentType = Json;
    type ResponseContentType = Json;
}

impl RequestBody<Put, Json> for PetCollection {
    type Body = Pet;
}

impl RequestBody<Put, Xml> for PetCollection {
    type Body = Pet;
}

responses! {
    #[derive(Debug, PartialEq)]
    pub enum UpdatePet {
        200 => Ok(Pet),
        400 => InvalidId,
        404 => NotFound,
        422 => ValidationFailed,
    }
}

// 422 declares only application/json content.
responses! {
    #[derive(Debug, PartialEq)]
    pub enum UpdatePetXml {
        200 => Ok(Pet),
        400 => InvalidId,
        404 => NotFound,
        422 => ValidationFailed,
    }
}

impl ResponseUnion<Put, Json> for PetCollection {
    type Union = UpdatePet;
}

impl ResponseUnion<Put, Xml> for PetCollection {
    type Union = UpdatePetXml;
}

// /pet/findByStatus

#[derive(Debug, Clone, Copy)]
pub struct FindByStatus;

impl Path<Petstore> for FindByStatus {
    const TEMPLATE: &'static str = "/pet/findByStatus";
}

impl Operation<Get> for FindByStatus {
    const STATUSES: &'static [u16] = &[200, 400];
    type Params = Never;
    type Query = FindByStatusQuery;
    type RequestContentType = Json;
    type ResponseContentType = Json;
}

responses! {
    #[derive(Debug, PartialEq)]
    pub enum FindPets {
        200 => Ok(Vec<Pet>),
        400 => InvalidStatus,
    }
}

impl ResponseUnion<Get, Json> for FindByStatus {
    type Union = FindPets;
}

// /pet/{petId}

#[derive(Debug, Clone, Copy)]
pub struct PetById;

impl Path<Petstore> for PetById {
    const TEMPLATE: &'static str = "/pet/{petId}";
}

impl Operation<Get> for PetById {
    const STATUSES: &'static [u16] = &[200, 400, 404];
    type Params = PetIdParams;
    type Query = Never;
    type RequestContentType = Json;
    type ResponseContentType = Json;
}

responses! {
    #[derive(Debug, PartialEq)]
    pub enum GetPet {
        200 => Ok(Pet),
        400 => InvalidId,
        404 => NotFound,
    }
}

impl ResponseUnion<Get, Json> for PetById {
    type Union = GetPet;
}

impl Operation<Delete> for PetById {
    const STATUSES: &'static [u16] = &[200, 400];
    type Params = PetIdParams;
    type Query = Never;
    type RequestContentType = Json;
    type ResponseContentType = Json;
}

impl RequestBody<Delete, Json> for PetById {
    type Body = DeleteReason;
}

responses! {
    #[derive(Debug, PartialEq)]
    pub enum DeletePet {
        200 => Deleted,
        400 => InvalidId,
    }
}

impl ResponseUnion<Delete, Json> for PetById {
    type Union = DeletePet;
}

// /store/order

#[derive(Debug, Clone, Copy)]
pub struct StoreOrder;

impl Path<Petstore> for StoreOrder {
    const TEMPLATE: &'static str = "/store/order";
}

impl Operation<Post> for StoreOrder {
    const STATUSES: &'static [u16] = &[200, 400, 422];
    type Params = Never;
    type Query = Never;
    type RequestContentType = Json;
    type ResponseContentType = Json;
}

impl RequestBody<Post, Json> for StoreOrder {
    type Body = Order;
}

responses! {
    #[derive(Debug, PartialEq)]
    pub enum PlaceOrder {
        200 => Ok(Order),
        400 => Invalid,
        422 => Unprocessable,
    }
}

// Only the 200 and 400 responses declare text/plain content.
responses! {
    #[derive(Debug, PartialEq)]
    pub enum PlaceOrderText {
        200 => Ok(String),
        400 => Invalid(String),
        422 => Unprocessable,
    }
}

impl ResponseUnion<Post, Json> for StoreOrder {
    type Union = PlaceOrder;
}

impl ResponseUnion<Post, PlainText> for StoreOrder {
    type Union = PlaceOrderText;
}

// /echo accepts every method with a JSON body.

#[derive(Debug, Clone, Copy)]
pub struct Echo;

impl Path<Petstore> for Echo {
    const TEMPLATE: &'static str = "/echo";
}

responses! {
    #[derive(Debug, PartialEq)]
    pub enum EchoResponse {
        200 => Ok(serde_json::Value),
        204 => Empty,
    }
}

macro_rules! echo_methods {
    ($($method:ty),* $(,)?) => {
        $(
            impl Operation<$method> for Echo {
                const STATUSES: &'static [u16] = &[200, 204];
                type Params = Never;
                type Query = Never;
                type RequestContentType = Json;
                type ResponseContentType = Json;
            }

            impl RequestBody<$method, Json> for Echo {
                type Body = serde_json::Value;
            }

            impl ResponseUnion<$method, Json> for Echo {
                type Union = EchoResponse;
            }
        )*
    };
}

echo_methods!(Get, Post, Put, Patch, Delete, Head, Options, Trace);
