use rustyfetch::{
    CacheMode, Credentials, Error, Guard, HeadersInit, HttpRequest, HttpResponse, RequestInit,
    RequestMode, ResponseInit, ResponseType,
};

fn post(body: &str) -> HttpRequest {
    HttpRequest::new(
        "http://example.com/items",
        RequestInit {
            method: Some("post".to_string()),
            headers: Some(HeadersInit::from([("X-Custom", "1"), ("Host", "example.com")])),
            body: Some(body.to_string()),
            credentials: Some(Credentials::Include),
            cache: Some(CacheMode::NoCache),
            ..Default::default()
        },
    )
    .unwrap()
}

#[test]
fn request_normalizes_method() {
    let req = post("data");
    assert_eq!(req.method, "POST");

    let req = HttpRequest::new(
        "/",
        RequestInit {
            method: Some("patch".to_string()),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(req.method, "patch");
}

#[test]
fn request_rejects_body_for_get_and_head() {
    for method in ["GET", "head"] {
        let err = HttpRequest::new(
            "/",
            RequestInit {
                method: Some(method.to_string()),
                body: Some("data".to_string()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::BodyNotAllowed(_)));
    }
}

#[test]
fn request_headers_use_request_guard() {
    let mut req = post("data");
    assert_eq!(req.headers().guard(), Guard::Request);
    // initial headers are kept as given
    assert!(req.headers().has("Host"));

    req.headers_mut().append("Cookie", "a=b").unwrap();
    req.headers_mut().append("X-Other", "2").unwrap();
    assert!(!req.headers().has("Cookie"));
    assert_eq!(req.headers().get("x-other"), Some("2"));
}

#[test]
fn request_from_request_transfers_body() {
    let mut source = post("data");
    let req = HttpRequest::from_request(&mut source, RequestInit::default()).unwrap();

    assert_eq!(req.url, "http://example.com/items");
    assert_eq!(req.method, "POST");
    assert_eq!(req.credentials, Credentials::Include);
    assert_eq!(req.cache, CacheMode::NoCache);
    assert_eq!(req.headers().get_all("X-Custom"), vec!["1"]);
    assert_eq!(req.raw_body(), "data");
    assert!(!req.body_used());
    assert!(source.body_used());

    let err = HttpRequest::from_request(&mut source, RequestInit::default()).unwrap_err();
    assert_eq!(err, Error::BodyAlreadyUsed);
}

#[test]
fn request_from_request_with_own_body_leaves_source_unread() {
    let mut source = post("data");
    let req = HttpRequest::from_request(
        &mut source,
        RequestInit {
            body: Some("other".to_string()),
            headers: Some(HeadersInit::from([("Accept", "*/*")])),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(req.raw_body(), "other");
    assert!(!req.headers().has("X-Custom"));
    assert_eq!(req.headers().get("accept"), Some("*/*"));
    assert!(!source.body_used());
}

#[test]
fn request_from_request_with_empty_body_still_transfers() {
    let mut source = post("data");
    let req = HttpRequest::from_request(
        &mut source,
        RequestInit {
            body: Some(String::new()),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(req.raw_body(), "data");
    assert!(source.body_used());
}

#[test]
fn request_headers_are_independent_copies() {
    let mut source = post("data");
    let mut req = HttpRequest::from_request(&mut source, RequestInit::default()).unwrap();
    req.headers_mut().set("X-Custom", "2").unwrap();

    assert_eq!(req.headers().get("X-Custom"), Some("2"));
    assert_eq!(source.headers().get("X-Custom"), Some("1"));
}

#[test]
fn request_no_cors_mode() {
    let mut req = HttpRequest::new(
        "/",
        RequestInit {
            mode: Some(RequestMode::NoCors),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(req.headers().guard(), Guard::RequestNoCors);

    req.headers_mut().append("Content-Type", "application/json").unwrap();
    req.headers_mut().append("Content-Type", "text/plain").unwrap();
    assert_eq!(req.headers().get_all("Content-Type"), vec!["text/plain"]);
}

#[test]
fn request_clone() {
    let mut req = post("data");
    let copy = req.try_clone().unwrap();
    assert_eq!(copy.method, req.method);
    assert_eq!(copy.headers().guard(), req.headers().guard());
    assert!(copy.headers().iter().eq(req.headers().iter()));
    assert_eq!(copy.raw_body(), "data");
    assert!(!req.body_used());

    assert_eq!(req.text().unwrap(), "data");
    assert_eq!(req.try_clone().unwrap_err(), Error::BodyAlreadyUsed);
}

#[test]
fn response_fields() {
    let mut res = HttpResponse::new(
        "body",
        ResponseInit {
            status: Some(404),
            status_text: Some("Not Found".to_string()),
            headers: Some(HeadersInit::from([("Content-Type", "text/plain")])),
            url: Some("http://example.com/missing".to_string()),
        },
    );

    assert_eq!(res.response_type, ResponseType::Default);
    assert_eq!(res.status, 404);
    assert!(!res.ok());
    assert_eq!(res.status_text, "Not Found");
    assert_eq!(res.url, "http://example.com/missing");
    assert_eq!(res.headers().guard(), Guard::Response);
    assert_eq!(res.text().unwrap(), "body");
    assert!(res.body_used());
}

#[test]
fn response_headers_use_response_guard() {
    let mut res = HttpResponse::new("", ResponseInit::default());
    res.headers_mut().append("Set-Cookie", "a=b").unwrap();
    res.headers_mut().append("Host", "example.com").unwrap();
    assert!(!res.headers().has("Set-Cookie"));
    assert!(res.headers().has("Host"));
}

#[test]
fn response_clone_keeps_fields() {
    let res = HttpResponse::redirect("/next", 307).unwrap();
    let copy = res.try_clone().unwrap();
    assert_eq!(copy.status, 307);
    assert_eq!(copy.headers().get("location"), Some("/next"));
    assert_eq!(copy.headers().guard(), Guard::Response);
}
