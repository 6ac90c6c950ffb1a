//! GET /Authors and /Authors/{id}: full collection, single authors by
//! valid, non-existent, and invalid IDs.

use shelfcheck_suite::prelude::{
    Resource, assert_bad_request, author_schema, flaky, live_client, next_available_id,
    validate_many, validate_single,
};

#[test]
#[ignore = "requires a live Books/Authors API (set SHELFCHECK_BASE_URL)"]
fn get_all_authors() {
    let client = live_client();
    let response = client
        .get(Resource::Authors.collection_path())
        .expect("GET /Authors");

    assert_eq!(
        response.status, 200,
        "expected 200 status code but got {}",
        response.status
    );
    validate_many(&response.json_or_fail(), author_schema())
        .expect("every element matches the author schema");
}

#[test]
#[ignore = "requires a live Books/Authors API (set SHELFCHECK_BASE_URL)"]
fn get_single_author_by_valid_ids() {
    let client = live_client();
    for author_id in [1, 200] {
        let response = client
            .get(&Resource::Authors.item_path(author_id))
            .expect("GET /Authors/{id}");

        assert_eq!(
            response.status, 200,
            "expected 200 status code for author_id={author_id} but got {}",
            response.status
        );
        validate_single(&response.json_or_fail(), author_schema())
            .expect("author matches the schema");
    }
}

#[test]
#[ignore = "requires a live Books/Authors API (set SHELFCHECK_BASE_URL)"]
fn get_single_non_existent_author_is_not_found() {
    let client = live_client();
    let next_id = next_available_id(&client, Resource::Authors).expect("ID allocation works");

    // Sometimes returns 200 instead of 404, as if a different data set is
    // being queried; tracked for follow-up rather than gating the run.
    for author_id in [0, next_id, -1] {
        flaky(
            &format!("intermittent 200 for non-existent author_id={author_id}"),
            || {
                let response = client
                    .get(&Resource::Authors.item_path(author_id))
                    .expect("GET /Authors/{id}");
                assert_eq!(
                    response.status, 404,
                    "expected 404 status code for id={author_id} but got {}",
                    response.status
                );
            },
        );
    }
}

#[test]
#[ignore = "requires a live Books/Authors API (set SHELFCHECK_BASE_URL)"]
fn get_single_author_with_invalid_id_is_rejected() {
    let client = live_client();

    for author_id in [
        "abc",
        "123abc",
        "!@#$%",
        " ",
        "12.34",
        "None",
        "1; DROP TABLE Authors;",
        "<script>",
    ] {
        let response = client
            .get(&Resource::Authors.item_path(author_id))
            .expect("GET /Authors/{id}");
        assert_bad_request(
            &response,
            "id",
            &format!("The value '{author_id}' is not valid."),
        );
    }
}
