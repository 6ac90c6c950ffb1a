//! DELETE /Books/{id}: existing, non-existent, and invalid IDs.

use shelfcheck_suite::prelude::{
    Resource, assert_bad_request, book_payload, expect_defect, flaky, live_client,
    next_available_id,
};

#[test]
#[ignore = "requires a live Books/Authors API (set SHELFCHECK_BASE_URL)"]
fn delete_existing_book_makes_it_unreachable() {
    let client = live_client();
    expect_defect("deleted books are still retrievable with 200", || {
        let next_id = next_available_id(&client, Resource::Books).expect("ID allocation works");
        let payload = book_payload(Some(next_id), &[]);

        let create_response = client
            .post(Resource::Books.collection_path(), &payload)
            .expect("POST /Books");
        assert_eq!(
            create_response.status, 200,
            "expected 200 status code for book creation but got {}",
            create_response.status
        );
        let book_id = create_response.json_or_fail()["id"]
            .as_i64()
            .expect("created book has an integer id");

        let get_response = client
            .get(&Resource::Books.item_path(book_id))
            .expect("GET /Books/{id}");
        assert_eq!(
            get_response.status, 200,
            "expected 200 status code for existing book but got {}",
            get_response.status
        );

        let delete_response = client
            .delete(&Resource::Books.item_path(book_id))
            .expect("DELETE /Books/{id}");
        assert_eq!(
            delete_response.status, 200,
            "expected 200 status code for deletion but got {}",
            delete_response.status
        );

        let get_response = client
            .get(&Resource::Books.item_path(book_id))
            .expect("GET /Books/{id}");
        assert_eq!(
            get_response.status, 404,
            "expected 404 status code after deletion but got {}",
            get_response.status
        );
    });
}

#[test]
#[ignore = "requires a live Books/Authors API (set SHELFCHECK_BASE_URL)"]
fn delete_non_existent_book_is_rejected() {
    let client = live_client();
    expect_defect("deleting a non-existent book wrongly returns 200", || {
        let response = client
            .delete(&Resource::Books.item_path(-100))
            .expect("DELETE /Books/{id}");
        assert_eq!(
            response.status, 404,
            "expected 404 status code for non-existent book but got {}",
            response.status
        );
    });
}

#[test]
#[ignore = "requires a live Books/Authors API (set SHELFCHECK_BASE_URL)"]
fn delete_book_with_invalid_id_is_rejected() {
    let client = live_client();

    for book_id in [
        "abc",
        "123abc",
        "12.34",
        "None",
        "1; DROP TABLE Books;",
        "<script>",
        "9999999999999999",
    ] {
        let response = client
            .delete(&Resource::Books.item_path(book_id))
            .expect("DELETE /Books/{id}");
        assert_bad_request(&response, "id", &format!("The value '{book_id}' is not valid."));
    }

    for book_id in ["!@#$%", " "] {
        flaky(
            &format!("inconsistent rejection of book_id={book_id:?}"),
            || {
                let response = client
                    .delete(&Resource::Books.item_path(book_id))
                    .expect("DELETE /Books/{id}");
                assert_bad_request(
                    &response,
                    "id",
                    &format!("The value '{book_id}' is not valid."),
                );
            },
        );
    }
}
