use std::sync::Arc;
use std::time::Duration;

use httpmock::prelude::*;
use radar_client::{BucketPoller, ClientError, PollPolicy, RadarClient};
use radar_core::domain::outcome::RunOutcome;
use radar_core::domain::run::RunDescriptor;
use serde_json::{Value, json};

const TOKEN: &str = "my-access-token";
const BUCKET: &str = "f3984398fj29";

fn run_json(test_id: &str, test_run_id: &str, name: &str) -> Value {
    json!({
        "status": "init",
        "environment_id": "3874fh38-340f-034f-fj93-kf8482h7d98h",
        "bucket_key": BUCKET,
        "variables": {},
        "agent": "My Test Agent",
        "test_name": name,
        "test_id": test_id,
        "url": format!("https://www.runscope.com/radar/{}/{}/results/{}", BUCKET, test_id, test_run_id),
        "region": null,
        "environment_name": "My Shared Environment",
        "test_url": format!("https://www.runscope.com/radar/{}/{}", BUCKET, test_id),
        "test_run_url": format!("https://www.runscope.com/radar/{}/{}/results/{}", BUCKET, test_id, test_run_id),
        "test_run_id": test_run_id
    })
}

fn trigger_body(runs: Vec<Value>) -> Value {
    let count = runs.len();
    json!({
        "meta": { "status": "success" },
        "data": {
            "runs_started": count,
            "runs": runs,
            "runs_failed": 0,
            "runs_total": count
        },
        "error": null
    })
}

fn detail_body(result: &str) -> Value {
    let finished_at = if result == "working" {
        Value::Null
    } else {
        json!(1485460040.414293)
    };
    json!({
        "meta": { "status": "success" },
        "data": {
            "started_at": 1485460015.527726,
            "finished_at": finished_at,
            "result": result,
            "requests_executed": 1,
            "assertions_defined": 2,
            "assertions_passed": 2,
            "assertions_failed": 0,
            "scripts_defined": 0,
            "scripts_passed": 0,
            "scripts_failed": 0,
            "variables_defined": 0,
            "variables_passed": 0,
            "variables_failed": 0,
            "requests": [{
                "uuid": "sdf334fg-6234-4f3w-454g-hf8374h87hg7",
                "method": "GET",
                "url": "https://example.com/health",
                "result": result,
                "assertions_defined": 2,
                "assertions_passed": 2,
                "assertions_failed": 0
            }]
        },
        "error": null
    })
}

fn result_path(test_id: &str, test_run_id: &str) -> String {
    format!("/buckets/{}/tests/{}/results/{}", BUCKET, test_id, test_run_id)
}

fn descriptor(test_id: &str, test_run_id: &str) -> RunDescriptor {
    serde_json::from_value(run_json(test_id, test_run_id, "My Test Name")).unwrap()
}

#[tokio::test]
async fn trigger_returns_runs_in_response_order() {
    let server = MockServer::start_async().await;
    let trigger = server
        .mock_async(|when, then| {
            when.method(GET).path("/radar/bucket/abc/trigger");
            then.status(201).json_body(trigger_body(vec![
                run_json("t1", "782c37dd-d33f-4025-9f8d-073b31f2f2b5", "My Test Name"),
                run_json("t2", "345g345g3-d33f-4025-9f8d-f234ffr", "My 2nd Test Name"),
            ]));
        })
        .await;

    let client = RadarClient::new(server.base_url(), TOKEN);
    let response = client
        .trigger_bucket(&server.url("/radar/bucket/abc/trigger"))
        .await
        .unwrap();

    trigger.assert_async().await;
    assert_eq!(response.data.runs_total, Some(2));

    let runs = response.into_runs();
    assert_eq!(runs.len(), 2);
    assert_eq!(
        runs.first().unwrap().test_run_id,
        "782c37dd-d33f-4025-9f8d-073b31f2f2b5"
    );
    assert_eq!(
        runs.last().unwrap().test_run_id,
        "345g345g3-d33f-4025-9f8d-f234ffr"
    );
    assert_eq!(runs[1].test_name.as_deref(), Some("My 2nd Test Name"));
}

#[tokio::test]
async fn trigger_rejects_any_status_but_created() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/radar/bucket/abc/trigger");
            then.status(200).body("already running");
        })
        .await;

    let client = RadarClient::new(server.base_url(), TOKEN);
    let err = client
        .trigger_bucket(&server.url("/radar/bucket/abc/trigger"))
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(200));
    assert_eq!(err.to_string(), "Received error 200 OK already running");
}

#[tokio::test]
async fn trigger_requires_url() {
    let client = RadarClient::new("http://localhost:1", TOKEN);
    let err = client.trigger_bucket("").await.unwrap_err();
    assert!(matches!(err, ClientError::MissingTriggerUrl));
}

#[tokio::test]
async fn trigger_with_malformed_body_is_parse_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/trigger");
            then.status(201).json_body(json!({ "data": {} }));
        })
        .await;

    let client = RadarClient::new(server.base_url(), TOKEN);
    let err = client.trigger_bucket(&server.url("/trigger")).await.unwrap_err();
    assert!(matches!(err, ClientError::ParseError(_)));
}

#[tokio::test]
async fn fetch_result_sends_bearer_token_and_merges_detail() {
    let server = MockServer::start_async().await;
    let detail = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(result_path("t1", "run-1"))
                .header("authorization", format!("Bearer {}", TOKEN));
            then.status(200).json_body(detail_body("pass"));
        })
        .await;

    let client = RadarClient::new(server.base_url(), TOKEN);
    let run = descriptor("t1", "run-1");
    let result = client.fetch_result(&run).await.unwrap();

    detail.assert_async().await;
    assert_eq!(result.run, run);
    assert_eq!(result.result(), &RunOutcome::Pass);
    assert_eq!(result.detail.started_at, Some(1485460015.527726));
    assert_eq!(result.detail.finished_at, Some(1485460040.414293));
    assert_eq!(result.detail.requests_executed, 1);
    assert_eq!(result.detail.assertions_passed, 2);
    assert_eq!(result.detail.requests.len(), 1);
    assert_eq!(result.detail.requests[0].method.as_deref(), Some("GET"));
}

#[tokio::test]
async fn fetch_result_while_working_has_no_finish_time() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(result_path("t1", "run-1"));
            then.status(200).json_body(detail_body("working"));
        })
        .await;

    let client = RadarClient::new(server.base_url(), TOKEN);
    let result = client
        .fetch_result(&descriptor("t1", "run-1"))
        .await
        .unwrap();

    assert!(result.is_working());
    assert!(result.detail.finished_at.is_none());
    assert!(result.duration().is_none());
}

#[tokio::test]
async fn fetch_result_error_embeds_status_and_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(result_path("t1", "run-1"));
            then.status(404).body("tis broke");
        })
        .await;

    let client = RadarClient::new(server.base_url(), TOKEN);
    let err = client
        .fetch_result(&descriptor("t1", "run-1"))
        .await
        .unwrap_err();

    assert!(err.is_client_error());
    assert_eq!(err.to_string(), "Received error 404 Not Found tis broke");
}

#[tokio::test]
async fn poll_two_passing_runs() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/trigger");
            then.status(201).json_body(trigger_body(vec![
                run_json("t1", "run-1", "First"),
                run_json("t2", "run-2", "Second"),
            ]));
        })
        .await;
    for (test_id, run_id) in [("t1", "run-1"), ("t2", "run-2")] {
        server
            .mock_async(|when, then| {
                when.method(GET).path(result_path(test_id, run_id));
                then.status(200).json_body(detail_body("pass"));
            })
            .await;
    }

    let client = Arc::new(RadarClient::new(server.base_url(), TOKEN));
    let poller = BucketPoller::new(client, PollPolicy::new(Duration::ZERO, 5));
    let (passed, results) = poller
        .poll_and_evaluate(&server.url("/trigger"), &RunOutcome::Pass)
        .await
        .unwrap()
        .into_parts();

    assert!(passed);
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].run.test_name.as_deref(), Some("First"));
    assert_eq!(results[1].run.test_name.as_deref(), Some("Second"));
}

#[tokio::test]
async fn poll_one_failing_run_of_three() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/trigger");
            then.status(201).json_body(trigger_body(vec![
                run_json("t1", "run-1", "First"),
                run_json("t2", "run-2", "Second"),
                run_json("t3", "run-3", "Third"),
            ]));
        })
        .await;
    for (test_id, run_id, result) in [
        ("t1", "run-1", "pass"),
        ("t2", "run-2", "fail"),
        ("t3", "run-3", "pass"),
    ] {
        server
            .mock_async(|when, then| {
                when.method(GET).path(result_path(test_id, run_id));
                then.status(200).json_body(detail_body(result));
            })
            .await;
    }

    let client = Arc::new(RadarClient::new(server.base_url(), TOKEN));
    let poller = BucketPoller::new(client, PollPolicy::new(Duration::ZERO, 5));
    let verdict = poller
        .poll_and_evaluate(&server.url("/trigger"), &RunOutcome::Pass)
        .await
        .unwrap();

    assert!(!verdict.passed);
    assert_eq!(verdict.results.len(), 3);
    assert_eq!(
        verdict.report_lines(),
        vec![format!(
            "Second: fail - https://www.runscope.com/radar/{}/t2/results/run-2",
            BUCKET
        )]
    );
}

#[tokio::test]
async fn poll_times_out_when_a_run_keeps_working() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/trigger");
            then.status(201)
                .json_body(trigger_body(vec![run_json("t1", "run-1", "Slow")]));
        })
        .await;
    let detail = server
        .mock_async(|when, then| {
            when.method(GET).path(result_path("t1", "run-1"));
            then.status(200).json_body(detail_body("working"));
        })
        .await;

    let client = Arc::new(RadarClient::new(server.base_url(), TOKEN));
    let poller = BucketPoller::new(client, PollPolicy::new(Duration::ZERO, 5));
    let err = poller
        .poll_and_evaluate(&server.url("/trigger"), &RunOutcome::Pass)
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert_eq!(
        err.to_string(),
        "Timed out waiting for results, tests still 'working'"
    );
    assert_eq!(detail.calls_async().await, 6);
}
