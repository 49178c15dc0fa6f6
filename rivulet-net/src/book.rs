// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use serde::Deserialize;

/// One entry of a best-seller list.
///
/// Decoded from the wire fields `display_name` and `amazon_product_url`.
/// The name doubles as the entry's identity key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Book {
    /// Display name of the list entry.
    #[serde(rename = "display_name")]
    pub name: String,
    /// Where the entry can be bought.
    #[serde(rename = "amazon_product_url")]
    pub amazon_url: String,
}

impl Book {
    /// Identity key of this entry.
    pub fn id(&self) -> &str {
        &self.name
    }
}

/// Successful fetch payload: the requested entries in wire order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookList {
    /// The entries exactly as the server ordered them.
    pub results: Vec<Book>,
}
