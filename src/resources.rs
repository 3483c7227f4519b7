use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Crisis,
    Support,
    Emergency,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrisisResource {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub phone: Option<&'static str>,
    pub text: Option<&'static str>,
    pub website: Option<&'static str>,
    pub available: &'static str,
    pub kind: ResourceKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct CopingStep {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CrisisDirectory {
    pub resources: &'static [CrisisResource],
    pub immediate_steps: &'static [CopingStep],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meditation {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_minutes: u32,
    pub category: &'static str,
    pub difficulty: Difficulty,
    pub rating: f32,
    pub instructor: &'static str,
    pub tags: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct ForumCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForumPost {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub author: &'static str,
    pub hours_ago: u32,
    pub likes: u32,
    pub replies: u32,
    pub category: &'static str,
    pub anonymous: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Forum {
    pub categories: &'static [ForumCategory],
    pub posts: Vec<&'static ForumPost>,
    pub guidelines: &'static [&'static str],
}

static CRISIS_RESOURCES: [CrisisResource; 4] = [
    CrisisResource {
        id: "1",
        name: "988 Suicide & Crisis Lifeline",
        description: "Free and confidential emotional support for people in suicidal crisis or emotional distress.",
        phone: Some("988"),
        text: Some("988"),
        website: Some("https://988lifeline.org"),
        available: "24/7",
        kind: ResourceKind::Crisis,
    },
    CrisisResource {
        id: "2",
        name: "Crisis Text Line",
        description: "Free, 24/7 support for those in crisis via text message.",
        phone: None,
        text: Some("Text HOME to 741741"),
        website: Some("https://crisistextline.org"),
        available: "24/7",
        kind: ResourceKind::Crisis,
    },
    CrisisResource {
        id: "3",
        name: "NAMI Helpline",
        description: "Information, referrals and support for people with mental health conditions.",
        phone: Some("1-800-950-NAMI (6264)"),
        text: None,
        website: Some("https://nami.org"),
        available: "Mon-Fri 10am-10pm ET",
        kind: ResourceKind::Support,
    },
    CrisisResource {
        id: "4",
        name: "Emergency Services",
        description: "For immediate medical emergencies and life-threatening situations.",
        phone: Some("911"),
        text: None,
        website: None,
        available: "24/7",
        kind: ResourceKind::Emergency,
    },
];

static IMMEDIATE_STEPS: [CopingStep; 4] = [
    CopingStep {
        title: "Take Deep Breaths",
        description: "Focus on slow, deep breathing to help calm your nervous system.",
        icon: "🫁",
    },
    CopingStep {
        title: "Find a Safe Space",
        description: "Move to a comfortable, secure location where you feel protected.",
        icon: "🏠",
    },
    CopingStep {
        title: "Reach Out",
        description: "Contact a crisis helpline, trusted friend, or emergency services.",
        icon: "📞",
    },
    CopingStep {
        title: "Stay Present",
        description: "Use grounding techniques like naming 5 things you can see around you.",
        icon: "👁️",
    },
];

static MEDITATIONS: [Meditation; 6] = [
    Meditation {
        id: "1",
        title: "5-Minute Morning Calm",
        description: "Start your day with intention and peace. Perfect for busy students.",
        duration_minutes: 5,
        category: "stress",
        difficulty: Difficulty::Beginner,
        rating: 4.8,
        instructor: "Sarah Chen",
        tags: &["morning", "breathing", "centering"],
    },
    Meditation {
        id: "2",
        title: "Exam Anxiety Relief",
        description: "Specifically designed to calm pre-test nerves and boost confidence.",
        duration_minutes: 10,
        category: "anxiety",
        difficulty: Difficulty::Beginner,
        rating: 4.9,
        instructor: "Dr. Michael Torres",
        tags: &["anxiety", "confidence", "exams"],
    },
    Meditation {
        id: "3",
        title: "Deep Sleep Preparation",
        description: "Wind down from a busy day and prepare your mind for restful sleep.",
        duration_minutes: 15,
        category: "sleep",
        difficulty: Difficulty::Beginner,
        rating: 4.7,
        instructor: "Luna Park",
        tags: &["sleep", "relaxation", "bedtime"],
    },
    Meditation {
        id: "4",
        title: "Study Focus Enhancer",
        description: "Improve concentration and mental clarity for better study sessions.",
        duration_minutes: 8,
        category: "focus",
        difficulty: Difficulty::Intermediate,
        rating: 4.6,
        instructor: "James Wilson",
        tags: &["focus", "productivity", "clarity"],
    },
    Meditation {
        id: "5",
        title: "Gratitude & Self-Compassion",
        description: "Cultivate appreciation and kindness toward yourself.",
        duration_minutes: 12,
        category: "gratitude",
        difficulty: Difficulty::Beginner,
        rating: 4.8,
        instructor: "Emma Rodriguez",
        tags: &["gratitude", "self-love", "positivity"],
    },
    Meditation {
        id: "6",
        title: "Advanced Mindfulness Practice",
        description: "Deep mindfulness exploration for experienced practitioners.",
        duration_minutes: 20,
        category: "stress",
        difficulty: Difficulty::Advanced,
        rating: 4.9,
        instructor: "Zen Master Lin",
        tags: &["mindfulness", "awareness", "meditation"],
    },
];

static FORUM_CATEGORIES: [ForumCategory; 5] = [
    ForumCategory {
        id: "all",
        name: "All Posts",
        count: 42,
    },
    ForumCategory {
        id: "anxiety",
        name: "Anxiety Support",
        count: 15,
    },
    ForumCategory {
        id: "depression",
        name: "Depression",
        count: 12,
    },
    ForumCategory {
        id: "stress",
        name: "Stress Management",
        count: 8,
    },
    ForumCategory {
        id: "success",
        name: "Success Stories",
        count: 7,
    },
];

static FORUM_POSTS: [ForumPost; 3] = [
    ForumPost {
        id: "1",
        title: "Celebrating small wins - 30 days of mood tracking!",
        content: "Just wanted to share that I've completed my first month of daily check-ins. It really helped me notice patterns...",
        author: "Anonymous Student",
        hours_ago: 2,
        likes: 24,
        replies: 8,
        category: "success",
        anonymous: true,
    },
    ForumPost {
        id: "2",
        title: "Struggling with exam anxiety - any coping strategies?",
        content: "Finals week is approaching and I'm feeling overwhelmed. Has anyone found effective ways to manage test anxiety?",
        author: "WorriedSophmore",
        hours_ago: 4,
        likes: 12,
        replies: 15,
        category: "anxiety",
        anonymous: true,
    },
    ForumPost {
        id: "3",
        title: "Morning meditation routine that actually works",
        content: "After trying different approaches, I found a 10-minute morning routine that fits my schedule...",
        author: "MindfulMornings",
        hours_ago: 6,
        likes: 31,
        replies: 12,
        category: "stress",
        anonymous: false,
    },
];

static FORUM_GUIDELINES: [&str; 4] = [
    "Be respectful and supportive of all community members",
    "Keep personal information private and respect anonymity",
    "If you're in crisis, please seek immediate professional help",
    "Report any inappropriate content to maintain a safe space",
];

pub fn crisis_directory() -> CrisisDirectory {
    CrisisDirectory {
        resources: &CRISIS_RESOURCES,
        immediate_steps: &IMMEDIATE_STEPS,
    }
}

pub fn meditations() -> &'static [Meditation] {
    &MEDITATIONS
}

/// Sessions in `category` (`None` or `"all"` for every category) whose
/// title, description or a tag contains `query`, ignoring case.
pub fn filter_meditations(category: Option<&str>, query: Option<&str>) -> Vec<&'static Meditation> {
    let category = category.map(str::trim).filter(|c| !c.is_empty() && *c != "all");
    let query = query.unwrap_or_default().trim().to_lowercase();

    meditations()
        .iter()
        .filter(|session| category.is_none_or(|c| session.category == c))
        .filter(|session| {
            session.title.to_lowercase().contains(&query)
                || session.description.to_lowercase().contains(&query)
                || session.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
        })
        .collect()
}

pub fn forum_posts() -> &'static [ForumPost] {
    &FORUM_POSTS
}

/// Posts in `category`; `None` or `"all"` keeps every post.
pub fn filter_posts(category: Option<&str>) -> Vec<&'static ForumPost> {
    let category = category.map(str::trim).filter(|c| !c.is_empty() && *c != "all");
    forum_posts()
        .iter()
        .filter(|post| category.is_none_or(|c| post.category == c))
        .collect()
}

pub fn forum(category: Option<&str>) -> Forum {
    Forum {
        categories: &FORUM_CATEGORIES,
        posts: filter_posts(category),
        guidelines: &FORUM_GUIDELINES,
    }
}
