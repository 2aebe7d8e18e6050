use std::fs;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use akismet_core::{Akismet, AkismetResponse, Comment, ReqwestClient, Verdict};

/// akismet: check and report comments with the Akismet anti-spam service
#[derive(Parser, Debug)]
#[command(
    name = "akismet",
    version,
    about = "Akismet anti-spam service client",
    after_help = "Exit status: 0 when Akismet answers yes (valid key, spam, submission accepted), 1 when it answers no, 2 on errors."
)]
struct Cli {
    /// Akismet API key
    #[arg(short, long, env = "AKISMET_API_KEY", hide_env_values = true)]
    key: String,

    /// Registered site URL
    #[arg(short, long, env = "AKISMET_BLOG")]
    blog: String,

    /// Application identifier prepended to the User-Agent header
    #[arg(long)]
    app_agent: Option<String>,

    /// Print the full response as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log more (-v: decisions, -vv: wire transcripts with the key masked)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Verify the API key for the site
    Verify,
    /// Ask whether a comment is spam
    Check(CommentArgs),
    /// Report a missed spam comment
    SubmitSpam(CommentArgs),
    /// Report a false positive
    SubmitHam(CommentArgs),
}

#[derive(Args, Debug)]
struct CommentArgs {
    /// Load the comment from a JSON file; flags below override its fields
    #[arg(long)]
    comment_json: Option<String>,

    #[arg(long)]
    ip: Option<String>,

    #[arg(long)]
    user_agent: Option<String>,

    #[arg(long)]
    referrer: Option<String>,

    #[arg(long)]
    permalink: Option<String>,

    /// comment, forum-post, reply, blog-post, contact-form, signup, message, ...
    #[arg(long = "type")]
    comment_type: Option<String>,

    #[arg(long)]
    author: Option<String>,

    #[arg(long)]
    author_email: Option<String>,

    #[arg(long)]
    author_url: Option<String>,

    #[arg(long)]
    content: Option<String>,

    #[arg(long)]
    user_role: Option<String>,

    #[arg(long)]
    recheck_reason: Option<String>,

    /// Mark the request as a test so it does not train Akismet
    #[arg(long)]
    test: bool,

    /// Extra form field, repeatable
    #[arg(long = "extra", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    extras: Vec<(String, String)>,
}

impl CommentArgs {
    fn into_comment(self) -> anyhow::Result<Comment> {
        let mut comment = match self.comment_json {
            Some(path) => {
                let json = fs::read_to_string(&path)
                    .with_context(|| format!("Error reading comment file '{}'", path))?;
                Comment::from_json(&json).with_context(|| format!("Invalid comment in '{}'", path))?
            }
            None => Comment::default(),
        };

        let overrides = [
            (self.ip, &mut comment.user_ip),
            (self.user_agent, &mut comment.user_agent),
            (self.referrer, &mut comment.referrer),
            (self.permalink, &mut comment.permalink),
            (self.comment_type, &mut comment.comment_type),
            (self.author, &mut comment.author),
            (self.author_email, &mut comment.author_email),
            (self.author_url, &mut comment.author_url),
            (self.content, &mut comment.content),
            (self.user_role, &mut comment.user_role),
            (self.recheck_reason, &mut comment.recheck_reason),
        ];
        for (value, field) in overrides {
            if let Some(v) = value {
                *field = v;
            }
        }

        comment.is_test |= self.test;
        comment.other.extend(self.extras);
        Ok(comment)
    }
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (k, v) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", s))?;
    Ok((k.to_string(), v.to_string()))
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "✖".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut akismet = Akismet::new(ReqwestClient::new(), cli.key, cli.blog)?;
    if let Some(agent) = cli.app_agent {
        akismet.set_app_user_agent(agent);
    }
    debug!("{:?}", akismet);

    let (response, yes, no) = match cli.command {
        Command::Verify => (akismet.verify_key()?, "API key is valid", "API key is invalid"),
        Command::Check(args) => (
            akismet.check_comment(&args.into_comment()?)?,
            "The comment is SPAM according to Akismet",
            "The comment is not SPAM (HAM) according to Akismet",
        ),
        Command::SubmitSpam(args) => (
            akismet.submit_spam(&args.into_comment()?)?,
            "The comment has been submitted as SPAM to Akismet",
            "Akismet did not accept the SPAM submission",
        ),
        Command::SubmitHam(args) => (
            akismet.submit_ham(&args.into_comment()?)?,
            "The comment has been submitted as HAM to Akismet",
            "Akismet did not accept the HAM submission",
        ),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        report(&response, yes, no);
    }

    Ok(match response.verdict() {
        Verdict::Affirmative => ExitCode::SUCCESS,
        Verdict::Negative => ExitCode::from(1),
        Verdict::Unreachable => ExitCode::from(2),
    })
}

fn report(response: &AkismetResponse, yes: &str, no: &str) {
    match response.verdict() {
        Verdict::Affirmative => println!("{} {}", "✔".green().bold(), yes),
        Verdict::Negative => println!("{} {}", "✖".yellow().bold(), no),
        Verdict::Unreachable => {
            let reason = response.transport_error.as_deref().unwrap_or("unknown error");
            println!("{} Could not reach Akismet: {}", "✖".red().bold(), reason);
            return;
        }
    }

    if let Some(status) = response.http_status_code {
        println!("  {} {}", "Status:".dimmed(), status);
    }
    if let Some(ref body) = response.raw_response {
        println!("  {} {}", "Response:".dimmed(), body);
    }
    if !response.pro_tip.is_empty() {
        println!("  {} {}", "Pro tip:".dimmed(), response.pro_tip.cyan());
    }
    if !response.error_message.is_empty() {
        println!("  {} {}", "Error:".dimmed(), response.error_message.red());
    }
    if !response.debug_help.is_empty() {
        println!("  {} {}", "Debug help:".dimmed(), response.debug_help);
    }
}
