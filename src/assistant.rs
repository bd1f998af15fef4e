//! Scripted health assistant.
//!
//! Replies come from a short list of canned answers, matched on the opening
//! words of each known question, with a localized fallback. Every reply is
//! delivered after a simulated thinking delay on a tokio task so the caller
//! can keep accepting input; the task can be cancelled, and a reply whose
//! session has gone away is dropped.

use crate::i18n::{LocalizationContext, MessageKey};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Number of leading characters of a known question that must appear in the input.
const MATCH_PREFIX_CHARS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyAction {
    BookAppointment,
    CheckPharmacy,
    MonitorClosely,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: usize,
    pub sender: Sender,
    pub text: String,
    pub follow_up: Vec<&'static str>,
    pub action: Option<ReplyAction>,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(id: usize, sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id,
            sender,
            text: text.into(),
            follow_up: Vec::new(),
            action: None,
            sent_at: Utc::now(),
        }
    }

    /// Canned replies carry follow-up questions or an action.
    pub fn is_recommendation(&self) -> bool {
        !self.follow_up.is_empty() || self.action.is_some()
    }
}

struct CannedReply {
    question: &'static str,
    response: &'static str,
    follow_up: &'static [&'static str],
    action: Option<ReplyAction>,
}

static COMMON_QUESTIONS: [CannedReply; 4] = [
    CannedReply {
        question: "I have fever and headache",
        response: "I understand you're experiencing fever and headache. These symptoms can indicate various conditions. Let me ask a few questions to help better assess your situation.",
        follow_up: &[
            "How long have you had these symptoms?",
            "What's your current temperature?",
            "Any other symptoms like nausea or body aches?",
        ],
        action: None,
    },
    CannedReply {
        question: "My blood pressure is high today",
        response: "High blood pressure readings can be concerning. For immediate care, please rest and avoid stress. If it's severely elevated (over 180/120), seek immediate medical attention.",
        follow_up: &[],
        action: Some(ReplyAction::MonitorClosely),
    },
    CannedReply {
        question: "I need to book an appointment",
        response: "I can help you book an appointment with a doctor. Based on your symptoms, I recommend seeing a general physician. Would you like me to check available slots?",
        follow_up: &[],
        action: Some(ReplyAction::BookAppointment),
    },
    CannedReply {
        question: "What medicines are available nearby?",
        response: "I can help you find medicines at nearby pharmacies. Let me check the current stock at pharmacies in Nabha.",
        follow_up: &[],
        action: Some(ReplyAction::CheckPharmacy),
    },
];

/// Questions offered as quick picks.
pub fn quick_questions() -> impl Iterator<Item = &'static str> {
    COMMON_QUESTIONS.iter().map(|c| c.question)
}

fn find_canned(input: &str) -> Option<&'static CannedReply> {
    let input = input.to_lowercase();
    COMMON_QUESTIONS.iter().find(|canned| {
        let prefix: String = canned
            .question
            .to_lowercase()
            .chars()
            .take(MATCH_PREFIX_CHARS)
            .collect();
        input.contains(&prefix)
    })
}

/// Build the reply to `input` in the context's current language.
pub fn compose_reply(id: usize, input: &str, ctx: &LocalizationContext) -> ChatMessage {
    match find_canned(input) {
        Some(canned) => {
            let mut reply = ChatMessage::new(id, Sender::Bot, canned.response);
            reply.follow_up = canned.follow_up.to_vec();
            reply.action = canned.action;
            reply
        }
        None => {
            let fallback = ctx.translate(MessageKey::ChatbotFallbackReply);
            ChatMessage::new(id, Sender::Bot, fallback)
        }
    }
}

/// Handle to a reply that is still thinking.
#[derive(Debug)]
pub struct ReplyTask {
    handle: JoinHandle<bool>,
}

impl ReplyTask {
    pub fn cancel(&self) {
        self.handle.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the task. `true` if the reply reached its session.
    pub async fn delivered(self) -> bool {
        self.handle.await.unwrap_or(false)
    }
}

/// One conversation with the assistant.
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    reply_delay: Duration,
    replies_tx: mpsc::UnboundedSender<ChatMessage>,
    replies_rx: mpsc::UnboundedReceiver<ChatMessage>,
    next_id: usize,
}

impl ChatSession {
    /// Start a conversation with a greeting in the current language.
    pub fn new(ctx: &LocalizationContext, reply_delay: Duration) -> Self {
        let (replies_tx, replies_rx) = mpsc::unbounded_channel();
        let greeting = ctx.translate(MessageKey::ChatbotGreeting);

        Self {
            messages: vec![ChatMessage::new(1, Sender::Bot, greeting)],
            reply_delay,
            replies_tx,
            replies_rx,
            next_id: 2,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Record the user's message and schedule the reply.
    ///
    /// Blank input is ignored. Must be called from within a tokio runtime.
    pub fn send(&mut self, input: &str, ctx: &LocalizationContext) -> Option<ReplyTask> {
        if input.trim().is_empty() {
            return None;
        }

        let user_message = ChatMessage::new(self.take_id(), Sender::User, input);
        self.messages.push(user_message);

        let reply = compose_reply(self.take_id(), input, ctx);
        let delay = self.reply_delay;
        let tx = self.replies_tx.clone();
        debug!("Reply {} scheduled in {:?}", reply.id, delay);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let id = reply.id;
            match tx.send(reply) {
                Ok(()) => true,
                Err(_) => {
                    info!("Chat session closed, discarding reply {}", id);
                    false
                }
            }
        });

        Some(ReplyTask { handle })
    }

    /// Collect replies that have arrived, without waiting.
    pub fn drain_replies(&mut self) -> Vec<ChatMessage> {
        let mut arrived = Vec::new();
        while let Ok(reply) = self.replies_rx.try_recv() {
            arrived.push(reply);
        }
        self.messages.extend(arrived.iter().cloned());
        arrived
    }

    /// Wait for the next reply to arrive.
    pub async fn next_reply(&mut self) -> Option<ChatMessage> {
        let reply = self.replies_rx.recv().await?;
        self.messages.push(reply.clone());
        Some(reply)
    }

    fn take_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
