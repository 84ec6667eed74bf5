use serde_json::Value;
use splitview_compile::{handle_compile_request, CompileResponse};

fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

#[test]
fn python_prints_are_echoed() {
    let reply = handle_compile_request(
        r#"{"code":"print('hello')\nprint(1 + 2)","language":"python"}"#,
    );

    assert_eq!(reply.status, 200);
    let response: CompileResponse = serde_json::from_str(&reply.body).unwrap();
    assert!(response.success);
    assert_eq!(response.output, "Output\n> 'hello'\n> 1 + 2");
    assert!(response.error.is_none());
    assert!(parse(&reply.body).get("error").is_none());
}

#[test]
fn java_without_println_reports_compiled_message() {
    let reply =
        handle_compile_request(r#"{"code":"class Main {}","language":"java"}"#);

    assert_eq!(reply.status, 200);
    assert_eq!(
        parse(&reply.body)["output"],
        "Output\nCode compiled and executed successfully. No output detected."
    );
}

#[test]
fn missing_fields_are_a_bad_request() {
    for body in [
        r#"{"code":"","language":"python"}"#,
        r#"{"code":"print(1)"}"#,
        r#"{}"#,
    ] {
        let reply = handle_compile_request(body);
        assert_eq!(reply.status, 400, "{body}");
        assert_eq!(
            parse(&reply.body),
            serde_json::json!({ "success": false, "error": "Code and language are required" })
        );
    }
}

#[test]
fn unsupported_language_is_still_ok_status() {
    let reply = handle_compile_request(r#"{"code":"puts 1","language":"ruby"}"#);

    assert_eq!(reply.status, 200);
    let body = parse(&reply.body);
    assert_eq!(body["success"], false);
    assert_eq!(body["output"], "");
    assert_eq!(body["error"], "Unsupported language: ruby");
}

#[test]
fn malformed_json_is_a_server_error() {
    let reply = handle_compile_request("{code: nope");

    assert_eq!(reply.status, 500);
    assert!(!reply.is_success());
    let body = parse(&reply.body);
    assert_eq!(body["success"], false);
    assert_eq!(body["output"], "");
    assert!(body["error"].as_str().is_some_and(|message| !message.is_empty()));
}
