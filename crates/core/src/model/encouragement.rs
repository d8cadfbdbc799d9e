//! Fixed pools of coach messages.

/// Messages shown shortly after advancing to the next section.
pub const ADVANCE_MESSAGES: [&str; 4] = [
    "Great! Keep that momentum going!",
    "You're picking this up fast!",
    "One step at a time, nice and steady!",
    "That's exactly how learning works, step by step!",
];

/// General encouragement, used on the landing page coach avatar.
pub const COACH_MESSAGES: [&str; 5] = [
    "You're doing great! Keep up that enthusiasm!",
    "Every question is a chance to grow. Go for it!",
    "Learning is like climbing: the view from the top is worth it!",
    "Don't fear mistakes. They're the best teachers you'll meet!",
    "Believe in yourself. You're more capable than you think!",
];

/// Greeting shown once when the tutorial page loads.
pub const WELCOME_MESSAGE: &str =
    "Welcome to the world of circles! Let's explore them step by step.";
