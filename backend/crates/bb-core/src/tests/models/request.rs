use crate::{Request, RequestOpCode};

#[test]
fn test_op_code_display_matches_as_str() {
    assert_eq!(RequestOpCode::Create.to_string(), "create");
    assert_eq!(RequestOpCode::Logs.to_string(), RequestOpCode::Logs.as_str());
}

#[test]
fn test_bare_request_has_no_args() {
    let request = Request::bare(RequestOpCode::Status);

    assert_eq!(request.op, RequestOpCode::Status);
    assert!(request.args.is_empty());
}
