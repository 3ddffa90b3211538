//! STDIO front-end tests

use super::common::{ScriptedBackend, controller};
use lifeline_chat::OutputFormat;
use lifeline_chat::backend::ChatReply;
use lifeline_chat::domain::Message;
use lifeline_chat::stdio::{format_message, run_with_io};

async fn session(backend: ScriptedBackend, input: &str, format: OutputFormat) -> String {
    let (mut chat, _) = controller(backend);
    chat.greet("Hello! How are you feeling today?");
    let mut output: Vec<u8> = Vec::new();
    run_with_io(&mut chat, format, input.as_bytes(), &mut output)
        .await
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[tokio::test]
async fn prints_greeting_then_each_exchange() {
    let backend = ScriptedBackend::new()
        .reply(ChatReply::new("Glad to hear it."))
        .reply(ChatReply::new("Take care."));

    let output = session(backend, "good\nbye\n", OutputFormat::Text).await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "[1:05 PM] Bot: Hello! How are you feeling today?",
            "[1:05 PM] You: good",
            "[1:05 PM] Bot: Glad to hear it.",
            "[1:05 PM] You: bye",
            "[1:05 PM] Bot: Take care.",
        ]
    );
}

#[tokio::test]
async fn blank_lines_are_skipped() {
    let output = session(ScriptedBackend::new(), "\n   \n", OutputFormat::Text).await;
    assert_eq!(output.lines().count(), 1);
}

#[tokio::test]
async fn html_format_emits_fragments() {
    let backend = ScriptedBackend::new().reply(
        ChatReply::new("See [help](https://example.com/help)")
            .with_message_type("Potential Suicide Post"),
    );

    let output = session(backend, "hi\n", OutputFormat::Html).await;

    let last = output.lines().last().unwrap();
    assert!(last.starts_with("<div class=\"message bot-message urgent-message\">"));
    assert!(last.contains("<a href=\"https://example.com/help\" target=\"_blank\""));
}

#[test]
fn multi_line_replies_are_indented_under_the_prefix() {
    let message = Message::bot("line1\nline2", "9:05 AM");
    let text = format_message(&message, OutputFormat::Text);
    assert_eq!(text, "[9:05 AM] Bot: line1\n               line2");
}

#[test]
fn urgent_replies_are_marked_in_text() {
    let message = Message::urgent_bot("reach out", "9:05 AM");
    assert_eq!(
        format_message(&message, OutputFormat::Text),
        "[9:05 AM] Bot (!): reach out"
    );
}
