//! Static content: specialists, booking options, community messages.

use crate::screen::SpecialistId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Specialist {
    pub id: SpecialistId,
    pub name: &'static str,
    pub specialty: &'static str,
    pub rating: f32,
    pub experience: &'static str,
    pub next_available: &'static str,
    pub location: &'static str,
    pub online: bool,
}

pub const SPECIALISTS: &[Specialist] = &[
    Specialist {
        id: SpecialistId(1),
        name: "Dr. Sarah Chen",
        specialty: "Anxiety & Stress",
        rating: 4.9,
        experience: "8 years",
        next_available: "Today 2:00 PM",
        location: "University Health Center",
        online: true,
    },
    Specialist {
        id: SpecialistId(2),
        name: "Dr. Michael Torres",
        specialty: "Depression & Mood",
        rating: 4.8,
        experience: "12 years",
        next_available: "Tomorrow 10:30 AM",
        location: "Campus Wellness",
        online: false,
    },
    Specialist {
        id: SpecialistId(3),
        name: "Dr. Emily Rodriguez",
        specialty: "Student Life Balance",
        rating: 4.9,
        experience: "6 years",
        next_available: "Today 4:15 PM",
        location: "Student Services",
        online: true,
    },
];

pub fn specialist(id: SpecialistId) -> Option<&'static Specialist> {
    SPECIALISTS.iter().find(|s| s.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub time: &'static str,
    pub available: bool,
}

pub const TIME_SLOTS: &[TimeSlot] = &[
    TimeSlot { time: "9:00 AM", available: true },
    TimeSlot { time: "10:30 AM", available: true },
    TimeSlot { time: "2:00 PM", available: false },
    TimeSlot { time: "3:30 PM", available: true },
    TimeSlot { time: "4:15 PM", available: true },
    TimeSlot { time: "5:00 PM", available: true },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionType {
    pub name: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const SESSION_TYPES: &[SessionType] = &[
    SessionType {
        name: "Video Session",
        duration: "50 minutes",
        description: "Face-to-face video call from anywhere on campus",
    },
    SessionType {
        name: "In-Person Session",
        duration: "50 minutes",
        description: "Meet at the University Health Center",
    },
    SessionType {
        name: "Chat Session",
        duration: "30 minutes",
        description: "Text-based session for quick support",
    },
];

/// Guidance lines the call screen rotates through: (main, sub).
pub const CALL_MESSAGES: &[(&str, &str)] = &[
    ("Inhale...\nExhale...", "Just breathe. I'm here to listen."),
    (
        "Tell me how you're\nfeeling...",
        "What's been on your mind today?\nNo need to explain, just share.",
    ),
];

pub const PRESET_REPLIES: &[&str] = &[
    "I understand",
    "You're not alone",
    "One day at a time",
    "Sending strength",
    "It's okay to feel this",
];

pub const TREE_MESSAGES: &[&str] = &[
    "Taking a few deep breaths before my exam helped me feel more centered. Small moments matter.",
    "Found peace watching the sunset from my dorm window. Sometimes it's the simple things.",
    "A warm cup of tea and 5 minutes of quiet time in the library corner was perfect.",
    "Went for a short walk between classes. Fresh air always helps clear my mind.",
    "Listened to my favorite song and let myself feel the emotions. Music heals.",
    "Called my friend when I was struggling. Talking really helped me feel less alone.",
    "Did some stretching in my room. My body and mind both felt so much better.",
    "Wrote down three things I'm grateful for today. Gratitude shifts everything.",
    "Took a few minutes to pet a campus dog. Animals bring such pure joy.",
    "Made myself a healthy meal instead of ordering takeout. Self-care in action.",
    "Meditated for just 5 minutes between study sessions. Small practices, big impact.",
    "Watched the clouds from my window. Nature's patterns are so calming.",
    "Organized my desk space. A tidy environment helps my thoughts feel clearer.",
    "Practiced saying 'no' to something that would drain my energy. Boundaries matter.",
    "Sent a kind message to someone I care about. Connection is everything.",
];

pub fn tree_message(tree_id: u32) -> &'static str {
    TREE_MESSAGES[tree_id as usize % TREE_MESSAGES.len()]
}

/// (title, detail)
pub const ACHIEVEMENTS: &[(&str, &str)] = &[
    ("Two Week Streak", "Consistent daily check-ins"),
    ("Tree Caretaker", "Watered your tree 10 times"),
];
