use akismet_core::{comment_type, Akismet, Comment, HttpClient, HttpResponse};
use std::process;

/// A simple Mock Client for demonstration.
/// It doesn't actually make HTTP requests, but returns the canned replies
/// Akismet sends for its test user.
pub struct ExampleMockClient;

impl HttpClient for ExampleMockClient {
    fn post(
        &self,
        url: &str,
        _headers: &[(String, String)],
        body: &str,
    ) -> Result<HttpResponse, String> {
        println!(">>> [MOCK] Intercepted a POST to '{}'", url);

        let (reply, headers) = if url.ends_with("/verify-key") {
            ("valid", Vec::new())
        } else if url.ends_with("/comment-check") {
            // Akismet always flags the author "viagra-test-123" as spam.
            if body.contains("comment_author=viagra-test-123") {
                (
                    "true",
                    vec![("x-akismet-pro-tip".to_string(), "discard".to_string())],
                )
            } else {
                ("false", Vec::new())
            }
        } else {
            ("Thanks for making the web a better place.", Vec::new())
        };

        Ok(HttpResponse {
            status: 200,
            headers,
            body: Some(reply.to_string()),
        })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .init();

    // We instantiate our custom mock client instead of reqwest
    let akismet = match Akismet::new(ExampleMockClient, "123456789abc", "https://blog.example") {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    let comment = Comment::new(
        "127.0.0.1",
        "Mozilla/5.0 (Windows; U; Windows NT 6.1; en-US; rv:1.9.2) Gecko/20100115 Firefox/3.6",
    )
    .with_test(true)
    .with_referrer("http://www.google.com")
    .with_permalink("https://blog.example/post=1")
    .with_type(comment_type::COMMENT)
    .with_author("viagra-test-123")
    .with_author_email("test@test.com")
    .with_author_url("http://www.CheckOutMyCoolSite.com")
    .with_content("It means a lot that you would take the time to review our software.");

    let run = || -> akismet_core::Result<()> {
        if !akismet.verify_key()?.is_success() {
            eprintln!("Invalid API Key.");
            process::exit(1);
        }

        let check = akismet.check_comment(&comment)?;
        if check.is_success() {
            println!("The comment is SPAM according to Akismet (discard: {}).", check.is_discard);
            if akismet.submit_spam(&comment)?.is_success() {
                println!("The comment has been submitted as SPAM to Akismet");
            }
        } else {
            println!("The comment is not SPAM (HAM) according to Akismet.");
            if akismet.submit_ham(&comment)?.is_success() {
                println!("The comment has been submitted as HAM to Akismet");
            }
        }
        Ok(())
    };

    if let Err(e) = run() {
        eprintln!("Execution error: {}", e);
        process::exit(1);
    }
}
