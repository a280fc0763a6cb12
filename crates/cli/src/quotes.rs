//! Motivational quotes shown on the dashboard.

use rand::seq::SliceRandom;

const QUOTES: &[&str] = &[
    "The only way to do great work is to love what you do.",
    "Success is the sum of small efforts repeated day in and day out.",
    "Don't watch the clock; do what it does. Keep going.",
    "The future belongs to those who believe in the beauty of their dreams.",
    "You don't have to be great to start, but you have to start to be great.",
    "Study hard, dream big, and never give up.",
    "Education is the most powerful weapon which you can use to change the world.",
    "The expert in anything was once a beginner.",
    "Your limitation—it's only your imagination.",
    "Push yourself, because no one else is going to do it for you.",
];

/// Pick a random quote.
pub fn random_quote() -> &'static str {
    QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(QUOTES[0])
}
