//! Tests for the HTTP parser.

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use crate::parser::{parse_request, parse_request_with, Error, Method, ParseMode};

    #[test]
    fn test_parse_simple_get_request() {
        let input = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/index.html");
        assert_eq!(req.get_header("Host"), Some("example.com"));
        assert!(req.body.is_empty());
    }

    #[test]
    fn test_start_line_tokens_become_method_and_path() {
        let input = b"POST /submit HTTP/1.1\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.method.as_str(), "POST");
        assert_eq!(req.path, "/submit");
    }

    #[test]
    fn test_extension_method_accepted() {
        let input = b"BREW /pot HTTP/1.1\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.method.as_str(), "BREW");
        assert_eq!(req.method, "BREW".parse().unwrap());
    }

    #[test]
    fn test_missing_version_token_accepted() {
        let input = b"GET /hello\r\nHost: localhost\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/hello");
    }

    #[test]
    fn test_single_token_start_line_rejected() {
        let input = b"GET\r\nHost: localhost\r\n\r\n";
        let err = parse_request(input).unwrap_err();

        assert!(matches!(err, Error::MalformedRequest(_)));
    }

    #[test]
    fn test_empty_method_token_rejected() {
        let input = b" /hello HTTP/1.1\r\n\r\n";
        let err = parse_request(input).unwrap_err();

        assert!(matches!(err, Error::MalformedRequest(_)));
    }

    #[test]
    fn test_no_crlf_is_malformed() {
        let input = b"GET /hello HTTP/1.1";
        let err = parse_request(input).unwrap_err();

        assert!(matches!(err, Error::MalformedRequest(_)));
    }

    #[test]
    fn test_empty_input_is_malformed() {
        let err = parse_request(b"").unwrap_err();

        assert!(matches!(err, Error::MalformedRequest(_)));
    }

    #[test]
    fn test_query_params() {
        let input = b"GET /search?a=1&b=2 HTTP/1.1\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.path, "/search");
        assert_eq!(req.get_param("a"), Some("1"));
        assert_eq!(req.get_param("b"), Some("2"));
        assert!(!req.has_param("c"));
    }

    #[test]
    fn test_percent_decoding() {
        let input = b"GET /greet?word=%68%65%6C%6C%6F HTTP/1.1\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.get_param("word"), Some("hello"));
    }

    #[test]
    fn test_plus_decodes_to_space() {
        let input = b"GET /greet?name=Alice+Smith HTTP/1.1\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.get_param("name"), Some("Alice Smith"));
    }

    #[test]
    fn test_html_entities_unescaped_after_percent_decoding() {
        // %26lt%3Bb%26gt%3B percent-decodes to &lt;b&gt;
        let input = b"GET /greet?q=%26lt%3Bb%26gt%3B HTTP/1.1\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.get_param("q"), Some("<b>"));
    }

    #[test]
    fn test_invalid_percent_encoding_falls_back_to_raw_value() {
        // %FF%FE decodes to bytes that are not valid UTF-8
        let input = b"GET /greet?q=%FF%FE HTTP/1.1\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.get_param("q"), Some("%FF%FE"));
    }

    #[test]
    fn test_pair_without_equals_skipped_in_lenient_mode() {
        let input = b"GET /search?a=1&flag&b=2 HTTP/1.1\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.get_param("a"), Some("1"));
        assert_eq!(req.get_param("b"), Some("2"));
        assert!(!req.has_param("flag"));
    }

    #[test]
    fn test_pair_without_equals_rejected_in_strict_mode() {
        let input = b"GET /search?a=1&flag HTTP/1.1\r\n\r\n";
        let err = parse_request_with(input, ParseMode::Strict).unwrap_err();

        assert!(matches!(err, Error::InvalidParamPair(ref p) if p == "flag"));
    }

    #[test]
    fn test_empty_query_string_accepted_in_strict_mode() {
        let input = b"GET /search? HTTP/1.1\r\n\r\n";
        let req = parse_request_with(input, ParseMode::Strict).unwrap();

        assert_eq!(req.path, "/search");
        assert!(req.params.is_empty());
    }

    #[test]
    fn test_duplicate_params_last_wins() {
        let input = b"GET /search?a=1&a=2 HTTP/1.1\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.get_param("a"), Some("2"));
        assert_eq!(req.params.len(), 1);
    }

    #[test]
    fn test_form_body_params() {
        let input = b"POST /submit HTTP/1.1\r\n\
            Content-Type: application/x-www-form-urlencoded\r\n\r\n\
            name=Alice";
        let req = parse_request(input).unwrap();

        assert_eq!(req.get_param("name"), Some("Alice"));
        assert_eq!(req.body, "name=Alice");
    }

    #[test]
    fn test_form_body_overrides_query_on_collision() {
        let input = b"POST /submit?name=Bob&page=2 HTTP/1.1\r\n\
            Content-Type: application/x-www-form-urlencoded\r\n\r\n\
            name=Alice";
        let req = parse_request(input).unwrap();

        assert_eq!(req.get_param("name"), Some("Alice"));
        assert_eq!(req.get_param("page"), Some("2"));
    }

    #[test]
    fn test_form_body_decodes_only_the_first_line() {
        let input = b"POST /submit HTTP/1.1\r\n\
            Content-Type: application/x-www-form-urlencoded\r\n\r\n\
            a=1\r\nb=2";
        let req = parse_request(input).unwrap();

        assert_eq!(req.get_param("a"), Some("1"));
        assert!(!req.has_param("b"));
        assert_eq!(req.body, "a=1\r\nb=2");
    }

    #[test]
    fn test_form_body_requires_exact_content_type() {
        let input = b"POST /submit HTTP/1.1\r\n\
            Content-Type: application/x-www-form-urlencoded; charset=utf-8\r\n\r\n\
            name=Alice";
        let req = parse_request(input).unwrap();

        assert!(!req.has_param("name"));
        assert_eq!(req.body, "name=Alice");
    }

    #[test]
    fn test_headers_keep_case_as_received() {
        let input = b"GET / HTTP/1.1\r\nHoSt: example.com\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.get_header("HoSt"), Some("example.com"));
        assert!(!req.has_header("Host"));
    }

    #[test]
    fn test_duplicate_headers_last_wins() {
        let input = b"GET / HTTP/1.1\r\n\
            Custom: first\r\n\
            Custom: second\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.get_header("Custom"), Some("second"));
    }

    #[test]
    fn test_headers_with_multiple_colons() {
        let input = b"GET / HTTP/1.1\r\n\
            Host: localhost:8080\r\n\
            Custom-Header: value: with: colons\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.get_header("Host"), Some("localhost:8080"));
        assert_eq!(req.get_header("Custom-Header"), Some("value: with: colons"));
    }

    #[test]
    fn test_header_line_without_separator_skipped_in_lenient_mode() {
        let input = b"GET / HTTP/1.1\r\nInvalidHeader\r\nHost: localhost\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.get_header("Host"), Some("localhost"));
        assert_eq!(req.headers.len(), 1);
    }

    #[test]
    fn test_header_line_without_separator_rejected_in_strict_mode() {
        let input = b"GET / HTTP/1.1\r\nInvalidHeader\r\nHost: localhost\r\n\r\n";
        let err = parse_request_with(input, ParseMode::Strict).unwrap_err();

        assert!(matches!(err, Error::InvalidHeaderLine(ref l) if l == "InvalidHeader"));
    }

    #[test]
    fn test_strict_mode_accepts_well_formed_request() {
        let input = b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\nbody text";
        let req = parse_request_with(input, ParseMode::Strict).unwrap();

        assert_eq!(req.get_header("Host"), Some("localhost"));
        assert_eq!(req.body, "body text");
    }

    #[test]
    fn test_missing_blank_line_treats_remainder_as_body() {
        let input = b"GET / HTTP/1.1\r\nHost: localhost";
        let req = parse_request(input).unwrap();

        assert!(req.headers.is_empty());
        assert_eq!(req.body, "Host: localhost");
    }

    #[test]
    fn test_body_after_blank_line() {
        let input = b"POST /upload HTTP/1.1\r\nHost: localhost\r\n\r\nline one\r\nline two";
        let req = parse_request(input).unwrap();

        assert_eq!(req.get_header("Host"), Some("localhost"));
        assert_eq!(req.body, "line one\r\nline two");
    }

    #[test]
    fn test_empty_request_target_accepted() {
        let input = b"GET  HTTP/1.1\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.path, "");
    }

    #[test]
    fn test_query_only_request_target_accepted() {
        let input = b"GET ?a=1 HTTP/1.1\r\n\r\n";
        let req = parse_request(input).unwrap();

        assert_eq!(req.path, "");
        assert_eq!(req.get_param("a"), Some("1"));
    }

    #[test]
    fn test_malformed_utf8_is_parsed_lossily() {
        let mut input = Vec::from(*b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n");
        input.splice(5..5, vec![0xFF, 0xFF]);

        let req = parse_request(&input).unwrap();
        assert_eq!(req.method, Method::GET);
        assert_eq!(req.get_header("Host"), Some("localhost"));
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::GET.to_string(), "GET");
        assert_eq!(Method::POST.to_string(), "POST");
        assert_eq!("BREW".parse::<Method>().unwrap().to_string(), "BREW");
    }

    #[test]
    fn test_method_constants_match_parsed_tokens() {
        for (token, method) in [
            ("GET", Method::GET),
            ("POST", Method::POST),
            ("PUT", Method::PUT),
            ("DELETE", Method::DELETE),
            ("HEAD", Method::HEAD),
            ("OPTIONS", Method::OPTIONS),
            ("PATCH", Method::PATCH),
        ] {
            assert_eq!(token.parse::<Method>().unwrap(), method);
        }
    }

    #[test]
    fn test_json_body() {
        #[derive(Deserialize)]
        struct User {
            name: String,
        }

        let input = b"POST /users HTTP/1.1\r\n\
            Content-Type: application/json\r\n\r\n\
            {\"name\":\"Alice\"}";
        let req = parse_request(input).unwrap();

        assert!(req.is_json());
        let user: User = req.json().unwrap();
        assert_eq!(user.name, "Alice");
    }

    #[test]
    fn test_json_on_invalid_body_fails() {
        let input = b"POST /users HTTP/1.1\r\n\
            Content-Type: application/json\r\n\r\n\
            not json";
        let req = parse_request(input).unwrap();

        let result: Result<serde_json::Value, _> = req.json();
        assert!(matches!(result, Err(Error::JsonError(_))));
    }
}
