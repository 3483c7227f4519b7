use serde::Serialize;

pub const GREETING: &str = "Hi! I'm MindfulBot, your personal wellness assistant. I'm here to provide support, coping strategies, and a listening ear. How are you feeling today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyKind {
    Normal,
    Support,
    Crisis,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub content: &'static str,
    pub kind: ReplyKind,
}

struct Rule {
    keywords: &'static [&'static str],
    kind: ReplyKind,
    content: &'static str,
}

// Checked in order; crisis phrases come first.
const RULES: [Rule; 5] = [
    Rule {
        keywords: &["suicide", "kill myself", "end it all", "hurt myself", "can't go on", "want to die"],
        kind: ReplyKind::Crisis,
        content: "I'm really concerned about you right now. Please know that you're not alone and help is available. Would you like me to connect you with crisis support resources? You can also call the 988 Suicide & Crisis Lifeline (call or text 988) for immediate support.",
    },
    Rule {
        keywords: &["anxious", "worried", "panic"],
        kind: ReplyKind::Support,
        content: "I hear that you're feeling anxious. Let's try a quick grounding technique together: Can you name 5 things you can see, 4 things you can touch, 3 things you can hear, 2 things you can smell, and 1 thing you can taste? This can help bring you back to the present moment.",
    },
    Rule {
        keywords: &["depressed", "sad", "down"],
        kind: ReplyKind::Support,
        content: "I'm sorry you're feeling down. Depression can make everything feel heavier. Remember that these feelings are temporary, even when they don't feel like it. Have you been able to do any small self-care activities today, like taking a shower, eating a meal, or stepping outside?",
    },
    Rule {
        keywords: &["stressed", "overwhelmed"],
        kind: ReplyKind::Support,
        content: "Stress can feel overwhelming, but you're taking a positive step by reaching out. Let's break things down: What's the most pressing thing on your mind right now? Sometimes tackling one small task can help reduce the overall feeling of being overwhelmed.",
    },
    Rule {
        keywords: &["sleep", "tired", "insomnia"],
        kind: ReplyKind::Support,
        content: "Sleep is so important for mental health. If you're having trouble sleeping, try creating a wind-down routine: dim the lights an hour before bed, put away screens, and try some deep breathing or gentle stretching. How has your sleep been lately?",
    },
];

const GENERAL_REPLIES: [&str; 4] = [
    "Thank you for sharing with me. Your feelings are valid, and I'm here to support you.",
    "It sounds like you're going through a lot right now. What's one small thing that brought you a moment of peace today?",
    "I appreciate you opening up. Sometimes just talking about what we're experiencing can help us process it.",
    "You're being very brave by reaching out for support. What would be most helpful for you right now?",
];

/// Picks the scripted reply for `message`. Messages matching no keyword get
/// a general reply chosen by message length, so equal input yields equal
/// output.
pub fn reply(message: &str) -> ChatReply {
    let lower = message.to_lowercase();
    if let Some(rule) = RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| lower.contains(keyword)))
    {
        return ChatReply {
            content: rule.content,
            kind: rule.kind,
        };
    }

    let index = message.trim().chars().count() % GENERAL_REPLIES.len();
    ChatReply {
        content: GENERAL_REPLIES[index],
        kind: ReplyKind::Normal,
    }
}
