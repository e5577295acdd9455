#![allow(dead_code)]

pub mod petstore;
pub mod recorder;

use oapy::{Client, Transport};
use url::Url;

use petstore::Petstore;

/// A Petstore client sending through `transport`.
pub fn client_with(transport: impl Transport + 'static) -> Client<Petstore> {
    Client::builder(Url::parse("https://petstore.test/api/v3/").unwrap())
        .transport(transport)
        .build()
        .unwrap()
}
