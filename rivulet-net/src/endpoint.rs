// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use reqwest::Url;

const BASE_URL: &str = "https://api.nytimes.com/svc/books/v3/lists.json";
const API_KEY: &str = "aL8oZVKrC1kVxRy8PMXsf9lElTdWU5BT";

/// List fetched when no other list is configured.
pub const DEFAULT_LIST: &str = "Combined Print and E-Book Fiction";

/// Locator for each remote operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// The best-seller entries of one named list.
    GetBooks {
        /// Name of the list, as the server spells it.
        list: String,
    },
}

impl Endpoint {
    /// Build the full request locator, percent-encoding the variable parts.
    ///
    /// Returns `None` when the assembled string is not a valid URL; callers
    /// map that to [`FetchError::InvalidRequest`](crate::FetchError) without
    /// attempting any transport call.
    pub fn url(&self) -> Option<Url> {
        match self {
            Endpoint::GetBooks { list } => {
                let encoded = urlencoding::encode(list);
                Url::parse(&format!("{BASE_URL}?api-key={API_KEY}&list={encoded}")).ok()
            }
        }
    }
}
