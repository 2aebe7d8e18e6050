//! Client library for the [Akismet](https://akismet.com) anti-spam service.
//!
//! ```no_run
//! use akismet_core::{Akismet, Comment};
//!
//! let akismet = Akismet::with_default_client("123456789abc", "https://blog.example")?;
//! if akismet.verify_key()?.is_success() {
//!     let comment = Comment::new("127.0.0.1", "Mozilla/5.0").with_content("Buy now!");
//!     let response = akismet.check_comment(&comment)?;
//!     println!("spam: {} (discard: {})", response.is_success(), response.is_discard);
//! }
//! # Ok::<(), akismet_core::AkismetError>(())
//! ```

pub mod akismet;
pub mod client;
pub mod comment;
pub mod error;
pub mod form;
pub mod logging;
pub mod method;
#[cfg(feature = "reqwest")]
pub mod reqwest_client;
pub mod response;

pub use akismet::{user_agent, Akismet, LIBRARY_AGENT};
pub use client::{HttpClient, HttpResponse};
pub use comment::{comment_type, date_to_gmt, Comment, ADMIN_ROLE};
pub use error::{AkismetError, Result};
pub use method::Method;
#[cfg(feature = "reqwest")]
pub use reqwest_client::ReqwestClient;
pub use response::{AkismetResponse, Verdict};
