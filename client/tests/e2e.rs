//! End-to-end integration tests for the VELA node client.
//!
//! These tests run every command against a local mock node and prove the
//! full contract: exact payload shapes on the wire, the protocol version
//! header on every request, validation short-circuits that spare the node
//! any traffic, and the status-to-error classification on the way back.
//!
//! Each test stands alone with its own mock server and client. No shared
//! state, no test ordering dependencies, no flaky failures.

use std::time::Duration;

use futures::future::join_all;
use httpmock::prelude::*;
use serde_json::json;

use vela_client::api::VelaClient;
use vela_client::error::ClientError;

// ---------------------------------------------------------------------------
// Test Helpers
// ---------------------------------------------------------------------------

/// Builds a client pointed at the mock node.
fn client_for(server: &MockServer) -> VelaClient {
    VelaClient::builder()
        .protocol("http")
        .host(server.host())
        .port(server.port())
        .build()
        .expect("mock endpoint should be a valid URL")
}

/// An 81-tryte hash made of a single repeated tryte.
fn hash_of(tryte: char) -> String {
    tryte.to_string().repeat(81)
}

/// A plausible `getNodeInfo` reply body.
fn node_info_body() -> serde_json::Value {
    json!({
        "appName": "VELA",
        "appVersion": "0.1.0",
        "latestMilestone": hash_of('M'),
        "latestMilestoneIndex": 107_233,
        "latestSolidSubtangleMilestone": hash_of('M'),
        "latestSolidSubtangleMilestoneIndex": 107_231,
        "neighbors": 4,
        "packetsQueueSize": 0,
        "time": 1_767_225_600_000_u64,
        "tips": 4_213,
        "transactionsToRequest": 12,
        "duration": 1,
    })
}

// ---------------------------------------------------------------------------
// 1. Node Info Round Trip
// ---------------------------------------------------------------------------

#[tokio::test]
async fn node_info_round_trip_carries_version_header() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/")
            .header("X-VELA-API-Version", "1")
            .json_body(json!({ "command": "getNodeInfo" }));
        then.status(200).json_body(node_info_body());
    });

    let client = client_for(&server);
    let info = client.get_node_info().await.unwrap();

    assert_eq!(info.app_name, "VELA");
    assert_eq!(info.latest_milestone_index, 107_233);
    assert_eq!(info.tips, 4_213);

    // Exactly one dispatch per call, version header included.
    mock.assert();
}

// ---------------------------------------------------------------------------
// 2. Neighbor Administration
// ---------------------------------------------------------------------------

#[tokio::test]
async fn neighbor_administration_round_trip() {
    let server = MockServer::start();

    let list = server.mock(|when, then| {
        when.method(POST).json_body(json!({ "command": "getNeighbors" }));
        then.status(200).json_body(json!({
            "neighbors": [{
                "address": "10.0.0.3:14700",
                "numberOfAllTransactions": 9_001,
                "numberOfInvalidTransactions": 0,
                "numberOfNewTransactions": 311,
                "connectionType": "udp",
            }],
            "duration": 0,
        }));
    });
    let add = server.mock(|when, then| {
        when.method(POST).json_body(json!({
            "command": "addNeighbors",
            "uris": ["udp://10.0.0.5:14700", "tcp://10.0.0.6:15600"],
        }));
        then.status(200)
            .json_body(json!({ "addedNeighbors": 2, "duration": 2 }));
    });
    let remove = server.mock(|when, then| {
        when.method(POST).json_body(json!({
            "command": "removeNeighbors",
            "uris": ["udp://10.0.0.5:14700"],
        }));
        then.status(200)
            .json_body(json!({ "removedNeighbors": 1, "duration": 1 }));
    });

    let client = client_for(&server);

    let listed = client.get_neighbors().await.unwrap();
    assert_eq!(listed.neighbors.len(), 1);
    assert_eq!(listed.neighbors[0].address, "10.0.0.3:14700");

    let added = client
        .add_neighbors(&["udp://10.0.0.5:14700", "tcp://10.0.0.6:15600"])
        .await
        .unwrap();
    assert_eq!(added.added_neighbors, 2);

    let removed = client.remove_neighbors(&["udp://10.0.0.5:14700"]).await.unwrap();
    assert_eq!(removed.removed_neighbors, 1);

    list.assert();
    add.assert();
    remove.assert();
}

// ---------------------------------------------------------------------------
// 3. Find Transactions Filters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn find_transactions_sends_exactly_the_supplied_filters() {
    let server = MockServer::start();
    let address = hash_of('A');
    let bundle = hash_of('B');

    // The body is matched exactly: no nulls, no empty arrays, no extra keys.
    let mock = server.mock(|when, then| {
        when.method(POST).json_body(json!({
            "command": "findTransactions",
            "addresses": [&address],
            "bundles": [&bundle],
        }));
        then.status(200)
            .json_body(json!({ "hashes": [hash_of('H')], "duration": 12 }));
    });

    let client = client_for(&server);
    let found = client
        .find_transactions(&[&address], &[], &[], &[&bundle])
        .await
        .unwrap();

    assert_eq!(found.hashes, vec![hash_of('H')]);
    mock.assert();
}

#[tokio::test]
async fn find_with_no_filters_still_asks_the_node() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .json_body(json!({ "command": "findTransactions" }));
        then.status(200).json_body(json!({ "hashes": [], "duration": 0 }));
    });

    let client = client_for(&server);
    let found = client.find_transactions(&[], &[], &[], &[]).await.unwrap();

    // An unfiltered search is the node's problem, not ours; an empty result
    // is a legitimate answer.
    assert!(found.hashes.is_empty());
    mock.assert();
}

// ---------------------------------------------------------------------------
// 4. Address Checksum Stripping
// ---------------------------------------------------------------------------

#[tokio::test]
async fn checksummed_addresses_are_sent_bare() {
    let server = MockServer::start();
    let bare = hash_of('K');
    let with_checksum = format!("{}{}", bare, "QXLICVETO");
    let other_bare = hash_of('L');

    // Both inputs arrive at the node in 81-tryte form; the already-bare one
    // passes through untouched.
    let mock = server.mock(|when, then| {
        when.method(POST).json_body(json!({
            "command": "findTransactions",
            "addresses": [&bare, &other_bare],
        }));
        then.status(200).json_body(json!({ "hashes": [], "duration": 4 }));
    });

    let client = client_for(&server);
    client
        .find_transactions_by_addresses(&[&with_checksum, &other_bare])
        .await
        .unwrap();

    mock.assert();
}

// ---------------------------------------------------------------------------
// 5. Digests Travel As Tags
// ---------------------------------------------------------------------------

#[tokio::test]
async fn digests_travel_in_the_tag_filter() {
    let server = MockServer::start();
    let digest = hash_of('D');

    let mock = server.mock(|when, then| {
        when.method(POST).json_body(json!({
            "command": "findTransactions",
            "tags": [&digest],
        }));
        then.status(200).json_body(json!({ "hashes": [], "duration": 2 }));
    });

    let client = client_for(&server);
    client.find_transactions_by_digests(&[&digest]).await.unwrap();

    mock.assert();
}

// ---------------------------------------------------------------------------
// 6. Inclusion States
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inclusion_states_validate_before_any_traffic() {
    let server = MockServer::start();
    let transaction = hash_of('T');
    let tip = hash_of('P');

    let mock = server.mock(|when, then| {
        when.method(POST).json_body(json!({
            "command": "getInclusionStates",
            "transactions": [&transaction],
            "tips": [&tip],
        }));
        then.status(200)
            .json_body(json!({ "states": [true], "duration": 5 }));
    });

    let client = client_for(&server);

    // Well-formed input goes through.
    let states = client
        .get_inclusion_states(&[&transaction], &[&tip])
        .await
        .unwrap();
    assert_eq!(states.states, vec![true]);

    // Malformed transactions fail before the wire.
    let err = client
        .get_inclusion_states(&["not-a-hash"], &[&tip])
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::InvalidHashes { argument: "transactions" }
    ));

    // Malformed tips fail before the wire too.
    let err = client
        .get_inclusion_states(&[&transaction], &["too9short"])
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidHashes { argument: "tips" }));

    // One hit from the valid call; the rejected ones never left the client.
    mock.assert();
}

// ---------------------------------------------------------------------------
// 7. Transaction Trytes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn trytes_validate_before_any_traffic() {
    let server = MockServer::start();
    let hash = hash_of('G');

    let mock = server.mock(|when, then| {
        when.method(POST).json_body(json!({
            "command": "getTrytes",
            "hashes": [&hash],
        }));
        then.status(200)
            .json_body(json!({ "trytes": ["SIGNATURE9FRAGMENT"], "duration": 3 }));
    });

    let client = client_for(&server);

    let trytes = client.get_trytes(&[&hash]).await.unwrap();
    assert_eq!(trytes.trytes, vec!["SIGNATURE9FRAGMENT".to_string()]);

    let lowercase = "a".repeat(81);
    let err = client.get_trytes(&[&lowercase]).await.unwrap_err();
    assert!(matches!(
        err,
        ClientError::InvalidHashes { argument: "hashes" }
    ));

    mock.assert();
}

// ---------------------------------------------------------------------------
// 8. Validation Never Touches The Wire
// ---------------------------------------------------------------------------

#[tokio::test]
async fn rejected_input_spares_the_node_entirely() {
    let server = MockServer::start();

    // Catch-all double: any request at all would count as a hit.
    let any_post = server.mock(|when, then| {
        when.method(POST);
        then.status(200).json_body(json!({ "duration": 0 }));
    });

    let client = client_for(&server);

    client.get_trytes(&["tooshort"]).await.unwrap_err();
    client
        .get_inclusion_states(&["not a hash"], &[])
        .await
        .unwrap_err();

    // The node heard nothing.
    any_post.assert_hits(0);
}

// ---------------------------------------------------------------------------
// 9. Tip Selection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn tip_selection_omits_absent_reference() {
    let server = MockServer::start();

    // Exact body match: a `reference` key, even null, would fail the match
    // and the test with it.
    let mock = server.mock(|when, then| {
        when.method(POST).json_body(json!({
            "command": "getTransactionsToApprove",
            "depth": 3,
        }));
        then.status(200).json_body(json!({
            "trunkTransaction": hash_of('U'),
            "branchTransaction": hash_of('V'),
            "duration": 80,
        }));
    });

    let client = client_for(&server);
    let pair = client.get_transactions_to_approve(3, None).await.unwrap();

    assert_eq!(pair.trunk_transaction, hash_of('U'));
    assert_eq!(pair.branch_transaction, hash_of('V'));
    mock.assert();
}

#[tokio::test]
async fn tip_selection_carries_supplied_reference() {
    let server = MockServer::start();
    let reference = hash_of('R');

    let mock = server.mock(|when, then| {
        when.method(POST).json_body(json!({
            "command": "getTransactionsToApprove",
            "depth": 5,
            "reference": &reference,
        }));
        then.status(200).json_body(json!({
            "trunkTransaction": hash_of('U'),
            "branchTransaction": hash_of('V'),
            "duration": 95,
        }));
    });

    let client = client_for(&server);
    client
        .get_transactions_to_approve(5, Some(&reference))
        .await
        .unwrap();

    mock.assert();
}

// ---------------------------------------------------------------------------
// 10. Node Rejections
// ---------------------------------------------------------------------------

#[tokio::test]
async fn node_rejection_surfaces_the_original_text() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(400).body("Invalid depth input");
    });

    let client = client_for(&server);
    let err = client.get_transactions_to_approve(0, None).await.unwrap_err();

    match err {
        ClientError::BadRequest { message } => assert_eq!(message, "Invalid depth input"),
        other => panic!("expected BadRequest, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// 11. Access Refusals
// ---------------------------------------------------------------------------

#[tokio::test]
async fn access_refusals_keep_their_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).json_body(json!({ "command": "getNodeInfo" }));
        then.status(401).body("command not allowed on this node");
    });
    server.mock(|when, then| {
        when.method(POST).json_body(json!({ "command": "getTips" }));
        then.status(500).body("snapshot in progress");
    });

    let client = client_for(&server);

    match client.get_node_info().await.unwrap_err() {
        ClientError::Access { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "command not allowed on this node");
        }
        other => panic!("expected Access, got {other:?}"),
    }

    match client.get_tips().await.unwrap_err() {
        ClientError::Access { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "snapshot in progress");
        }
        other => panic!("expected Access, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// 12. Statuses Outside The Contract
// ---------------------------------------------------------------------------

#[tokio::test]
async fn uncontracted_status_is_surfaced_not_guessed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(418).body("short and stout");
    });

    let client = client_for(&server);
    let err = client.get_tips().await.unwrap_err();

    match err {
        ClientError::UnexpectedStatus { status, body } => {
            assert_eq!(status, 418);
            assert_eq!(body, "short and stout");
        }
        other => panic!("expected UnexpectedStatus, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// 13. Undecodable Success Bodies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn garbage_success_body_is_a_transport_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(200).body("<html>definitely not json</html>");
    });

    let client = client_for(&server);
    let err = client.get_node_info().await.unwrap_err();

    // A 200 we cannot decode is not a success in disguise.
    assert!(matches!(err, ClientError::Transport(_)));
}

// ---------------------------------------------------------------------------
// 14. Unreachable Node
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_node_is_a_transport_failure() {
    // Bind and immediately drop a listener so the port exists but refuses.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("ephemeral bind");
        listener.local_addr().expect("local addr").port()
    };

    let client = VelaClient::builder()
        .host("127.0.0.1")
        .port(port)
        .connect_timeout(Duration::from_secs(2))
        .request_timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.get_tips().await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

// ---------------------------------------------------------------------------
// 15. Concurrent Fan-Out
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mixed_outcomes_classify_correctly_under_concurrency() {
    let server = MockServer::start();
    let info = server.mock(|when, then| {
        when.method(POST).json_body(json!({ "command": "getNodeInfo" }));
        then.status(200).json_body(node_info_body());
    });
    let tips = server.mock(|when, then| {
        when.method(POST).json_body(json!({ "command": "getTips" }));
        then.status(400).body("tips unavailable during sync");
    });
    let neighbors = server.mock(|when, then| {
        when.method(POST).json_body(json!({ "command": "getNeighbors" }));
        then.status(500).body("peer table corrupted");
    });

    let client = client_for(&server);
    let (info_result, tips_result, neighbors_result) = tokio::join!(
        client.get_node_info(),
        client.get_tips(),
        client.get_neighbors(),
    );

    assert_eq!(info_result.unwrap().app_name, "VELA");
    assert!(matches!(
        tips_result.unwrap_err(),
        ClientError::BadRequest { .. }
    ));
    assert!(matches!(
        neighbors_result.unwrap_err(),
        ClientError::Access { status: 500, .. }
    ));

    info.assert();
    tips.assert();
    neighbors.assert();
}

#[tokio::test]
async fn one_client_serves_many_concurrent_callers() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .header("X-VELA-API-Version", "1")
            .json_body(json!({ "command": "getNodeInfo" }));
        then.status(200).json_body(node_info_body());
    });

    let client = client_for(&server);
    let calls = (0..8).map(|_| client.get_node_info());
    let results = join_all(calls).await;

    assert_eq!(results.len(), 8);
    for result in results {
        assert_eq!(result.unwrap().app_version, "0.1.0");
    }

    // Eight callers, eight dispatches, every one wearing the header.
    mock.assert_hits(8);
}
