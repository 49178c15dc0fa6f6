// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use rivulet_net::Endpoint;

#[test]
fn test_get_books_locator_targets_the_lists_resource() {
    // Arrange
    let endpoint = Endpoint::GetBooks {
        list: "hardcover-fiction".to_owned(),
    };

    // Act
    let url = endpoint.url().expect("locator should construct");

    // Assert
    assert_eq!(url.scheme(), "https");
    assert_eq!(url.host_str(), Some("api.nytimes.com"));
    assert_eq!(url.path(), "/svc/books/v3/lists.json");
    let query = url.query().expect("locator should carry a query");
    assert!(query.contains("api-key="));
    assert!(query.contains("list=hardcover-fiction"));
}

#[test]
fn test_list_names_are_percent_encoded() {
    // Arrange
    let endpoint = Endpoint::GetBooks {
        list: "Combined Print & E-Book Fiction".to_owned(),
    };

    // Act
    let url = endpoint.url().expect("locator should construct");

    // Assert: spaces and ampersands cannot leak into the query structure
    let query = url.query().expect("locator should carry a query");
    assert!(query.contains("list=Combined%20Print%20%26%20E-Book%20Fiction"));
}
