pub mod arg_parser;
pub mod request_parser;
