use akismet_core::{Akismet, AkismetError, Comment, Verdict, LIBRARY_AGENT};
use tests::MockClient;

const KEY: &str = "123456789abc";
const BLOG: &str = "https://blog.example";

fn akismet(client: &MockClient) -> Akismet<&MockClient> {
    Akismet::new(client, KEY, BLOG).expect("valid configuration")
}

fn sample_comment() -> Comment {
    Comment::new("127.0.0.1", "Mozilla/5.0")
        .with_referrer("http://www.google.com")
        .with_type("comment")
        .with_author("admin")
        .with_content("It means a lot that you would take the time to review our software.")
        .with_test(true)
}

#[test]
fn test_verify_key_valid() {
    let client = MockClient::replying("Valid\n");
    let akismet = akismet(&client);
    assert!(!akismet.is_verified_key());

    let response = akismet.verify_key().expect("Execution failed");
    assert!(response.is_success());
    assert!(akismet.is_verified_key());
    assert_eq!(response.raw_response.as_deref(), Some("Valid"));

    let last = client.last_request();
    assert_eq!(last.url, "https://rest.akismet.com/1.1/verify-key");
    assert_eq!(
        last.form(),
        vec![
            ("key".to_string(), KEY.to_string()),
            ("blog".to_string(), BLOG.to_string()),
        ]
    );
}

#[test]
fn test_verify_key_invalid_resets_flag() {
    let client = MockClient::replying("valid").then(
        200,
        "invalid",
        &[("x-akismet-debug-help", "We were unable to verify the key")],
    );
    let akismet = akismet(&client);

    assert!(akismet.verify_key().unwrap().is_success());
    assert!(akismet.is_verified_key());

    let response = akismet.verify_key().unwrap();
    assert_eq!(response.verdict(), Verdict::Negative);
    assert!(!akismet.is_verified_key());
    assert_eq!(response.debug_help, "We were unable to verify the key");
}

#[test]
fn test_comment_methods_use_key_subdomain() {
    let client = MockClient::replying("false");
    let akismet = akismet(&client);
    let comment = sample_comment();

    akismet.check_comment(&comment).unwrap();
    akismet.submit_spam(&comment).unwrap();
    akismet.submit_ham(&comment).unwrap();

    let urls: Vec<String> = client.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        [
            "https://123456789abc.rest.akismet.com/1.1/comment-check",
            "https://123456789abc.rest.akismet.com/1.1/submit-spam",
            "https://123456789abc.rest.akismet.com/1.1/submit-ham",
        ]
    );
}

#[test]
fn test_check_comment_true_and_false() {
    let client = MockClient::replying("true").then(200, "false", &[]);
    let akismet = akismet(&client);
    let comment = sample_comment();

    let spam = akismet.check_comment(&comment).unwrap();
    assert!(spam.is_success());
    assert_eq!(spam.verdict(), Verdict::Affirmative);

    let ham = akismet.check_comment(&comment).unwrap();
    assert!(!ham.is_success());
    assert_eq!(ham.verdict(), Verdict::Negative);
    assert_eq!(ham.http_status_code, Some(200));
}

#[test]
fn test_submissions_accept_thanks() {
    let client = MockClient::replying("Thanks for making the web a better place.");
    let akismet = akismet(&client);
    let comment = sample_comment();

    assert!(akismet.submit_spam(&comment).unwrap().is_success());
    assert!(akismet.submit_ham(&comment).unwrap().is_success());
}

#[test]
fn test_comment_fields_on_the_wire() {
    let client = MockClient::replying("false");
    let akismet = akismet(&client);

    let comment = sample_comment().with_author_email("  ").with_other("honeypot", "x");
    akismet.check_comment(&comment).unwrap();

    let last = client.last_request();
    assert_eq!(last.field("blog").as_deref(), Some(BLOG));
    assert_eq!(last.field("user_ip").as_deref(), Some("127.0.0.1"));
    assert_eq!(last.field("user_agent").as_deref(), Some("Mozilla/5.0"));
    assert_eq!(last.field("referrer").as_deref(), Some("http://www.google.com"));
    assert_eq!(last.field("comment_type").as_deref(), Some("comment"));
    assert_eq!(last.field("comment_author").as_deref(), Some("admin"));
    assert_eq!(last.field("is_test").as_deref(), Some("1"));
    assert_eq!(last.field("honeypot").as_deref(), Some("x"));
    assert_eq!(last.field("comment_author_email"), None);
    assert_eq!(last.field("permalink"), None);
    let form = last.form();
    assert_eq!(form.last().map(|(k, _)| k.as_str()), Some("honeypot"));
}

#[test]
fn test_request_headers() {
    let client = MockClient::replying("false");
    let mut akismet = akismet(&client);
    akismet.set_app_user_agent("MyBlog/2.0");

    akismet.check_comment(&sample_comment()).unwrap();

    let last = client.last_request();
    let expected_agent = format!("MyBlog/2.0 | {}", LIBRARY_AGENT);
    assert_eq!(last.header("User-Agent"), Some(expected_agent.as_str()));
    assert_eq!(
        last.header("Content-Type"),
        Some("application/x-www-form-urlencoded")
    );
}

#[test]
fn test_pro_tip_discard() {
    let client = MockClient::new()
        .then(200, "true", &[("X-akismet-pro-tip", "discard")])
        .then(200, "true", &[]);
    let akismet = akismet(&client);
    let comment = sample_comment();

    let first = akismet.check_comment(&comment).unwrap();
    assert!(first.is_discard);
    assert_eq!(first.pro_tip, "discard");

    let second = akismet.check_comment(&comment).unwrap();
    assert!(!second.is_discard);
    assert_eq!(second.pro_tip, "");
}

#[test]
fn test_error_headers_are_reported() {
    let client = MockClient::new().then(
        200,
        "invalid",
        &[
            ("x-akismet-error", "Invalid key"),
            ("x-akismet-debug-help", "Check your key at akismet.com"),
        ],
    );
    let akismet = akismet(&client);

    let response = akismet.check_comment(&sample_comment()).unwrap();
    assert!(!response.is_success());
    assert_eq!(response.error_message, "Invalid key");
    assert_eq!(response.debug_help, "Check your key at akismet.com");
}

#[test]
fn test_missing_ip_and_agent_fails_without_network() {
    let client = MockClient::replying("true");
    let akismet = akismet(&client);
    let comment = Comment::new("", " ").with_content("no origin");

    assert!(matches!(
        akismet.check_comment(&comment),
        Err(AkismetError::Validation(_))
    ));
    assert!(matches!(
        akismet.submit_spam(&comment),
        Err(AkismetError::Validation(_))
    ));
    assert!(matches!(
        akismet.submit_ham(&comment),
        Err(AkismetError::Validation(_))
    ));
    assert!(client.requests().is_empty());
}

#[test]
fn test_transport_failure_is_not_an_error() {
    let client = MockClient::refusing();
    let akismet = akismet(&client);
    let comment = sample_comment();

    let responses = [
        akismet.verify_key().unwrap(),
        akismet.check_comment(&comment).unwrap(),
        akismet.submit_spam(&comment).unwrap(),
        akismet.submit_ham(&comment).unwrap(),
    ];
    for response in &responses {
        assert!(!response.is_success());
        assert!(response.is_unreachable());
        assert_eq!(response.http_status_code, None);
        assert!(response
            .transport_error
            .as_deref()
            .unwrap()
            .contains("Connection refused"));
    }
    assert!(!akismet.is_verified_key());
    assert_eq!(client.requests().len(), 4);
}

#[test]
fn test_unusable_key_sends_nothing() {
    let client = MockClient::replying("true");
    let akismet = Akismet::new(&client, "not a key", BLOG).unwrap();

    let response = akismet.check_comment(&sample_comment()).unwrap();
    assert_eq!(response.verdict(), Verdict::Unreachable);
    assert!(client.requests().is_empty());
}

#[test]
fn test_shared_client_across_threads() {
    let client = MockClient::replying("true");
    let akismet = akismet(&client);
    let comment = sample_comment();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert!(akismet.check_comment(&comment).unwrap().is_success());
            });
        }
    });
    assert_eq!(client.requests().len(), 4);
}

#[test]
fn test_response_serializes_to_json() {
    let client = MockClient::new().then(200, "true", &[("x-akismet-pro-tip", "discard")]);
    let akismet = akismet(&client);

    let response = akismet.check_comment(&sample_comment()).unwrap();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["verdict"], "affirmative");
    assert_eq!(json["is_discard"], true);
    assert_eq!(json["http_status_code"], 200);
}
