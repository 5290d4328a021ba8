//! Error taxonomy tests: codes, default messages, and the mapping onto
//! JSON-RPC error responses.

use a2a_protocol::error::*;
use a2a_protocol::types::{JsonRpcError, JsonRpcId, JsonRpcResponse, Task, WireFormat};
use serde_json::json;

#[test]
fn all_nine_codes_and_messages() {
    let cases: [(A2AError, i64, &str); 9] = [
        (A2AError::parse_error(), -32700, "Invalid JSON payload"),
        (
            A2AError::invalid_request(),
            -32600,
            "Request payload validation error",
        ),
        (A2AError::method_not_found(), -32601, "Method not found"),
        (A2AError::invalid_params(), -32602, "Invalid parameters"),
        (A2AError::internal_error(), -32603, "Internal error"),
        (A2AError::task_not_found(), -32001, "Task not found"),
        (
            A2AError::task_not_cancelable(),
            -32002,
            "Task cannot be canceled",
        ),
        (
            A2AError::push_notification_not_supported(),
            -32003,
            "Push Notification is not supported",
        ),
        (
            A2AError::unsupported_operation(),
            -32004,
            "This operation is not supported",
        ),
    ];

    for (err, code, message) in cases {
        assert_eq!(err.code(), code);
        assert_eq!(err.to_string(), message);

        let rpc: JsonRpcError = err.into();
        assert_eq!(rpc.code, code);
        assert_eq!(rpc.message, message);
    }
}

#[test]
fn task_not_found_response_wire_shape() {
    let resp =
        JsonRpcResponse::from_a2a_error(Some(JsonRpcId::Number(7)), A2AError::task_not_found());
    let wire = resp.to_wire().unwrap();
    assert_eq!(wire["jsonrpc"], "2.0");
    assert_eq!(wire["id"], 7);
    assert_eq!(wire["error"]["code"], -32001);
    assert_eq!(wire["error"]["message"], "Task not found");
    assert!(wire.get("result").is_none());
    assert!(wire["error"].get("data").is_none());
}

#[test]
fn error_data_propagates_to_wire() {
    let err = A2AError::method_not_found().with_data(json!({"method": "tasks/explode"}));
    let rpc: JsonRpcError = err.into();
    assert_eq!(rpc.data, Some(json!({"method": "tasks/explode"})));

    let wire = serde_json::to_value(&rpc).unwrap();
    assert_eq!(wire["data"]["method"], "tasks/explode");
}

#[test]
fn malformed_json_text_is_a_parse_error() {
    let err = Task::from_wire_str("{\"id\": ").unwrap_err();
    assert_eq!(err.code(), PARSE_ERROR);
    assert_eq!(err.to_string(), "Invalid JSON payload");
}

#[test]
fn shape_violation_is_not_a_parse_error() {
    // Valid JSON, wrong shape: missing required 'status'.
    let err = Task::from_wire_str(r#"{"id": "t1"}"#).unwrap_err();
    assert_eq!(err.code(), INTERNAL_ERROR);

    let rpc: JsonRpcError = err.into();
    assert_eq!(rpc.code, INTERNAL_ERROR);
    // The validation detail becomes the wire message.
    assert!(rpc.message.contains("status"));
    assert!(rpc.data.is_none());
}

#[test]
fn json_rpc_error_roundtrip() {
    let rpc = JsonRpcError {
        code: -32004,
        message: "This operation is not supported".to_string(),
        data: Some(json!("tasks/resubscribe")),
    };
    let decoded = JsonRpcError::from_wire(rpc.to_wire().unwrap()).unwrap();
    assert_eq!(decoded, rpc);
}
