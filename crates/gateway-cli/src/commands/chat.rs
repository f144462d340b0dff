//! Chat command - send messages through the gateway.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use gateway_sdk::{format_error_message, render_markdown, ChatOutcome, Client, FailureReply};
use serde_json::{json, Value};
use std::io::{self, BufRead, Read, Write};
use std::time::Duration;

use crate::output::{self, OutputFormat};

/// Arguments for the chat command.
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Message to send (if not provided, reads from stdin)
    #[arg(short, long)]
    pub message: Option<String>,

    /// Model to use (the gateway default when omitted)
    #[arg(short = 'M', long)]
    pub model: Option<String>,

    /// Render replies as HTML
    #[arg(long)]
    pub html: bool,

    /// Interactive chat mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "130")]
    pub timeout: u64,
}

/// Execute the chat command.
pub async fn execute(args: ChatArgs, base_url: &str, json: bool) -> Result<()> {
    let format = OutputFormat::from_json_flag(json);

    let client = Client::builder()
        .base_url(base_url)
        .timeout(Duration::from_secs(args.timeout))
        .build()?;

    if args.interactive {
        run_interactive_mode(&client, &args, format).await
    } else {
        run_single_message(&client, &args, format).await
    }
}

/// Run a single message chat.
async fn run_single_message(client: &Client, args: &ChatArgs, format: OutputFormat) -> Result<()> {
    let message = if let Some(ref msg) = args.message {
        msg.clone()
    } else {
        let mut input = String::new();
        io::stdin().lock().read_to_string(&mut input)?;
        input
    };

    let Some(message) = prepare_message(&message) else {
        output::warning("Nothing to send");
        return Ok(());
    };

    let outcome = send(client, message, args.model.as_deref(), format).await;
    print_outcome(&outcome, args.html, format)
}

/// Run interactive chat mode.
async fn run_interactive_mode(client: &Client, args: &ChatArgs, format: OutputFormat) -> Result<()> {
    let model = args.model.as_deref().unwrap_or("the default model");
    output::info(&format!("Interactive chat with {model} (type 'exit' to quit)"));
    println!();

    let stdin = io::stdin();
    loop {
        print!("{} ", "You:".green().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let Some(message) = prepare_message(&input) else {
            continue;
        };
        if matches!(message, "exit" | "quit") {
            break;
        }

        let outcome = send(client, message, args.model.as_deref(), format).await;

        if outcome.is_success() && format == OutputFormat::Text {
            print!("{} ", "Gemini:".blue().bold());
        }
        print_outcome(&outcome, args.html, format)?;
        println!();
    }

    output::info("Goodbye!");
    Ok(())
}

/// Text to send for raw input, trimmed; `None` when there is nothing to send.
fn prepare_message(raw: &str) -> Option<&str> {
    Some(raw.trim()).filter(|message| !message.is_empty())
}

/// Send one message, with a spinner while it is in flight.
async fn send(client: &Client, message: &str, model: Option<&str>, format: OutputFormat) -> ChatOutcome {
    if format == OutputFormat::Json {
        return client.send_message(message, model).await;
    }

    let spinner = output::spinner("Thinking...");
    let outcome = client.send_message(message, model).await;
    spinner.finish_and_clear();
    outcome
}

/// Print the outcome as text or as the gateway envelope.
fn print_outcome(outcome: &ChatOutcome, html: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => output::json(&envelope(outcome)),
        OutputFormat::Text => {
            match outcome {
                ChatOutcome::Success { reply } => println!("{}", display_reply(reply, html)),
                ChatOutcome::Failure(failure) => {
                    output::error(&display_failure(failure));
                    if let Some(details) = &failure.details {
                        output::key_value("Details", details);
                    }
                }
            }
            Ok(())
        }
    }
}

fn display_reply(reply: &str, html: bool) -> String {
    if html {
        render_markdown(reply)
    } else {
        reply.to_string()
    }
}

fn display_failure(failure: &FailureReply) -> String {
    format_error_message(&failure.error_code, &failure.error, failure.status)
}

/// Rebuild the wire envelope for `--json`.
fn envelope(outcome: &ChatOutcome) -> Value {
    match outcome {
        ChatOutcome::Success { reply } => json!({ "success": true, "reply": reply }),
        ChatOutcome::Failure(failure) => {
            let mut value = json!({
                "success": false,
                "error": failure.error,
                "errorCode": failure.error_code,
            });
            if let Some(details) = &failure.details {
                value["details"] = json!(details);
            }
            value
        }
    }
}
