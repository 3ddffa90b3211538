//! ChatController tests

use super::common::{ScriptedBackend, controller, decode_failure};
use lifeline_chat::backend::{ChatReply, ChatRequest};
use lifeline_chat::constants::FAILURE_MESSAGE;
use lifeline_chat::domain::{LogEntry, Sender};

#[tokio::test]
async fn submit_appends_user_then_bot() {
    let (mut chat, _) = controller(ScriptedBackend::new().reply(ChatReply::new("Hi, I'm here.")));

    assert!(chat.submit("hello").await);

    let messages: Vec<_> = chat.log().messages().collect();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].sender, Sender::User);
    assert_eq!(messages[0].text, "hello");
    assert_eq!(messages[1].sender, Sender::Bot);
    assert_eq!(messages[1].text, "Hi, I'm here.");
    assert!(!messages[1].urgent);
    assert_eq!(chat.log().typing_count(), 0);
    assert!(!chat.is_awaiting_reply());
}

#[tokio::test]
async fn submit_sends_trimmed_text() {
    let (mut chat, backend) = controller(ScriptedBackend::new());

    chat.submit("   how are you?  ").await;

    assert_eq!(backend.requests(), vec![ChatRequest::new("how are you?")]);
    let first = chat.log().messages().next().unwrap();
    assert_eq!(first.text, "how are you?");
}

#[tokio::test]
async fn blank_input_changes_nothing() {
    let (mut chat, backend) = controller(ScriptedBackend::new());
    chat.input_mut().set("   \t ");

    assert!(!chat.submit_input().await);
    assert!(!chat.submit("").await);

    assert!(chat.log().is_empty());
    assert_eq!(chat.input().text(), "   \t ");
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn submit_input_clears_the_field() {
    let (mut chat, backend) = controller(ScriptedBackend::new());
    chat.input_mut().set("I had a rough day");

    assert!(chat.submit_input().await);

    assert!(chat.input().is_empty());
    assert_eq!(chat.input().cursor(), 0);
    assert_eq!(backend.requests()[0].message, "I had a rough day");
}

#[tokio::test]
async fn placeholder_sits_between_user_message_and_reply() {
    let (mut chat, _) = controller(ScriptedBackend::new());

    let pending = chat.begin_submit("hello").unwrap();
    let entries = chat.log().entries();
    assert_eq!(entries.len(), 2);
    assert!(matches!(&entries[0], LogEntry::Message(m) if m.text == "hello"));
    assert_eq!(entries[1], LogEntry::Typing(pending.handle));
    assert!(chat.is_awaiting_reply());

    chat.complete(pending.handle, Ok(ChatReply::new("hey")));
    let entries = chat.log().entries();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|entry| !entry.is_typing()));
    assert!(matches!(&entries[1], LogEntry::Message(m) if m.text == "hey"));
}

#[tokio::test]
async fn crisis_classification_marks_reply_urgent() {
    let reply = ChatReply::new("Please call [AASRA](http://www.aasra.info/)")
        .with_message_type("Potential Suicide Post");
    let (mut chat, _) = controller(ScriptedBackend::new().reply(reply));

    chat.submit("I can't go on").await;

    let bot = chat.log().messages().last().unwrap();
    assert!(bot.is_bot());
    assert!(bot.urgent);
}

#[tokio::test]
async fn other_classifications_are_not_urgent() {
    let (mut chat, _) = controller(
        ScriptedBackend::new()
            .reply(ChatReply::new("a").with_message_type("Non Suicide Post"))
            .reply(ChatReply::new("b")),
    );

    chat.submit("one").await;
    chat.submit("two").await;

    assert!(chat.log().messages().all(|m| !m.urgent));
}

#[tokio::test]
async fn failure_shows_generic_apology() {
    let (mut chat, _) = controller(ScriptedBackend::new().fail());

    assert!(chat.submit("hello").await);

    let bots: Vec<_> = chat.log().messages().filter(|m| m.is_bot()).collect();
    assert_eq!(bots.len(), 1);
    assert_eq!(bots[0].text, FAILURE_MESSAGE);
    assert!(!bots[0].urgent);
    assert_eq!(chat.log().typing_count(), 0);
}

#[tokio::test]
async fn controller_stays_usable_after_failure() {
    let (mut chat, _) = controller(ScriptedBackend::new().fail().reply(ChatReply::new("back")));

    chat.submit("first").await;
    chat.submit("second").await;

    let texts: Vec<_> = chat.log().messages().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["first", FAILURE_MESSAGE, "second", "back"]);
}

#[test]
fn overlapping_submissions_remove_only_their_own_placeholder() {
    let (mut chat, _) = controller(ScriptedBackend::new());

    let first = chat.begin_submit("first").unwrap();
    let second = chat.begin_submit("second").unwrap();
    assert_eq!(chat.log().typing_count(), 2);

    chat.complete(second.handle, Ok(ChatReply::new("reply to second")));
    assert_eq!(chat.log().typing_count(), 1);
    assert!(chat.log().entries().contains(&LogEntry::Typing(first.handle)));

    chat.complete(first.handle, Err(decode_failure()));
    assert_eq!(chat.log().typing_count(), 0);
    assert_eq!(chat.log().messages().count(), 4);
}

#[test]
fn completing_twice_does_not_duplicate_the_reply() {
    let (mut chat, _) = controller(ScriptedBackend::new());
    let pending = chat.begin_submit("hi").unwrap();

    chat.complete(pending.handle, Ok(ChatReply::new("once")));
    chat.complete(pending.handle, Ok(ChatReply::new("twice")));

    let texts: Vec<_> = chat.log().messages().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["hi", "once"]);
}

#[tokio::test]
async fn messages_carry_render_time_labels() {
    let (mut chat, _) = controller(ScriptedBackend::new());

    chat.greet("Hello! I'm here to chat with you.");
    chat.submit("hi").await;

    assert!(chat.log().messages().all(|m| m.time == "1:05 PM"));
}

#[test]
fn greeting_is_a_plain_bot_message() {
    let (mut chat, _) = controller(ScriptedBackend::new());

    chat.greet("Welcome");

    let messages: Vec<_> = chat.log().messages().collect();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].is_bot());
    assert!(!messages[0].urgent);
}
