//! Rule-based response generation for chat messages.
//!
//! Composes replies from fixed keyword-matched templates without requiring
//! an LLM. Matching is case-insensitive substring containment against the
//! lower-cased utterance, first match wins; a default pool guarantees a
//! reply for any non-empty input.

use rand::Rng;

use mysam_core::FeedbackSnapshot;

// =============================================================================
// ReplyPicker
// =============================================================================

/// Source of the index used to pick from a default reply pool.
///
/// Abstracted so tests can pin the otherwise-random pick.
pub trait ReplyPicker: Send + Sync {
    /// Pick an index in `0..len`. `len` is always non-zero.
    fn pick(&self, len: usize) -> usize;
}

/// Uniform random pick from the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomPicker;

impl ReplyPicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Always picks the same index (clamped to the pool). Test helper, but also
/// usable to disable reply variety entirely.
#[derive(Debug)]
pub struct FixedPicker(pub usize);

impl ReplyPicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

fn contains_any(lower: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| lower.contains(n))
}

// =============================================================================
// FeedbackEngine
// =============================================================================

/// Response generator for the daily-feedback companion.
///
/// Replies are parameterized by the day's feedback snapshot: the star rating
/// and whether all four priorities were completed.
pub struct FeedbackEngine {
    picker: Box<dyn ReplyPicker>,
}

impl Default for FeedbackEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackEngine {
    pub fn new() -> Self {
        Self {
            picker: Box::new(RandomPicker),
        }
    }

    pub fn with_picker(picker: Box<dyn ReplyPicker>) -> Self {
        Self { picker }
    }

    /// Generate a reply to a non-empty utterance.
    pub fn reply(&self, utterance: &str, context: &FeedbackSnapshot) -> String {
        let lower = utterance.to_lowercase();
        let rating = context.rating.stars();
        let all_done = context.completion.all_completed();

        if contains_any(&lower, &["visit", "doctor", "call"]) {
            return format!(
                "That's great to hear about your visits! With your {}-star rating today, \
                 it sounds like you're making real connections. What made these visits \
                 particularly memorable?",
                rating
            );
        }

        if contains_any(&lower, &["challenge", "difficult", "hard"]) {
            let clause = if all_done {
                "Despite that, you still completed all your priorities - that shows real determination!"
            } else {
                "Remember, every challenge is a chance to grow."
            };
            return format!(
                "I appreciate you sharing that challenge. {} How can I help you prepare \
                 better for tomorrow?",
                clause
            );
        }

        if contains_any(&lower, &["success", "win", "great"]) {
            return format!(
                "That's fantastic! Your {}-star day is really showing through. These \
                 successes add up - you're building momentum! What's your strategy for tomorrow?",
                rating
            );
        }

        if contains_any(&lower, &["tired", "exhausted", "busy"]) {
            let clause = if all_done {
                "You completed everything today - no wonder you're tired! That's dedication."
            } else {
                "Busy days can be draining."
            };
            return format!("{} Make sure to recharge tonight. You've earned it!", clause);
        }

        if contains_any(&lower, &["tomorrow", "plan", "next"]) {
            return format!(
                "Great mindset! Looking ahead is key. Based on today's {}-star performance, \
                 what would make tomorrow even better? I'm here to help you plan!",
                rating
            );
        }

        let pool = self.default_pool(context);
        let index = self.picker.pick(pool.len());
        pool.into_iter().nth(index).unwrap_or_else(|| {
            // Unreachable with a well-behaved picker; fall back rather than panic.
            "Tell me more about your day.".to_string()
        })
    }

    /// The four generic encouragement templates used when no rule matches.
    fn default_pool(&self, context: &FeedbackSnapshot) -> Vec<String> {
        let rating = context.rating.stars();
        let completion_clause = if context.completion.all_completed() {
            "You had a perfect completion day, so you're clearly doing something right!"
        } else {
            "Tell me more about what happened today."
        };
        vec![
            format!(
                "That's really insightful! Your {}/5 rating tells me you're being honest \
                 with yourself, which is the first step to improvement. What else is on your mind?",
                rating
            ),
            format!("I'm listening! {}", completion_clause),
            "Thanks for sharing that! Every detail helps me understand how to support you \
             better. What would you like to focus on?"
                .to_string(),
            "That's valuable feedback! Your honesty helps us make mySAM even better for you. \
             Anything else you'd like to add?"
                .to_string(),
        ]
    }
}

// =============================================================================
// AssistantEngine
// =============================================================================

/// Response generator for the voice-flavor call assistant.
///
/// Independently-tuned rule table; operates without any session context.
pub struct AssistantEngine {
    picker: Box<dyn ReplyPicker>,
}

impl Default for AssistantEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl AssistantEngine {
    pub fn new() -> Self {
        Self {
            picker: Box::new(RandomPicker),
        }
    }

    pub fn with_picker(picker: Box<dyn ReplyPicker>) -> Self {
        Self { picker }
    }

    /// Generate a reply to a non-empty utterance.
    pub fn reply(&self, utterance: &str) -> String {
        let lower = utterance.to_lowercase();

        if contains_any(&lower, &["visit", "doctor", "met"]) {
            return "Great! I've noted that visit. Can you tell me more about the outcome? \
                    Did you discuss any specific products or get any commitments?"
                .to_string();
        }

        if contains_any(&lower, &["prescription", "sample"]) {
            return "Excellent work on securing that! How many samples did you provide? \
                    Any follow-up needed?"
                .to_string();
        }

        if contains_any(&lower, &["follow up", "callback"]) {
            return "I've recorded that follow-up. When would you like to schedule the \
                    next interaction?"
                .to_string();
        }

        if contains_any(&lower, &["challenge", "difficult", "issue"]) {
            return "I understand. Let me note that challenge. What support do you need \
                    from the team to address this?"
                .to_string();
        }

        if contains_any(&lower, &["success", "great", "excellent"]) {
            return "That's fantastic! Your hard work is paying off. Anything else you'd \
                    like to share about today?"
                .to_string();
        }

        let pool = Self::default_pool();
        pool[self.picker.pick(pool.len())].to_string()
    }

    /// The five generic acknowledgements used when no rule matches.
    fn default_pool() -> [&'static str; 5] {
        [
            "Got it! I've recorded that. What else happened today?",
            "Thanks for sharing! Tell me more about your interactions.",
            "Noted! Any other important details from today?",
            "Perfect! I'm documenting everything. Continue when you're ready.",
            "Understood. How did the rest of your day go?",
        ]
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use mysam_core::{Activity, ActivityCompletion, Mood, Rating};

    fn snapshot(rating: u8, completed: usize) -> FeedbackSnapshot {
        let mut completion = ActivityCompletion::default();
        for activity in Activity::ALL.iter().take(completed) {
            completion.set(*activity, true);
        }
        FeedbackSnapshot {
            selected_moods: vec![Mood::Happy],
            rating: Rating::new(rating).unwrap(),
            completion,
        }
    }

    fn feedback() -> FeedbackEngine {
        FeedbackEngine::new()
    }

    fn assistant() -> AssistantEngine {
        AssistantEngine::new()
    }

    // ---- Feedback: rule matching ----

    #[test]
    fn test_feedback_visit_rule_references_rating() {
        let reply = feedback().reply("I had a great doctor visit", &snapshot(4, 2));
        assert!(reply.contains("4-star"));
        assert!(reply.contains("visits"));
    }

    #[test]
    fn test_feedback_call_keyword_matches_visit_rule() {
        let reply = feedback().reply("made a tough call today", &snapshot(3, 0));
        assert!(reply.contains("3-star"));
    }

    #[test]
    fn test_feedback_challenge_rule_full_completion_branch() {
        let reply = feedback().reply("it was difficult", &snapshot(3, 4));
        assert!(reply.contains("completed all your priorities"));
    }

    #[test]
    fn test_feedback_challenge_rule_partial_completion_branch() {
        let reply = feedback().reply("it was difficult", &snapshot(3, 2));
        assert!(reply.contains("chance to grow"));
    }

    #[test]
    fn test_feedback_success_rule() {
        let reply = feedback().reply("big win with the new product", &snapshot(5, 4));
        assert!(reply.contains("5-star"));
        assert!(reply.contains("momentum"));
    }

    #[test]
    fn test_feedback_tired_rule_branches() {
        let done = feedback().reply("so exhausted", &snapshot(3, 4));
        assert!(done.contains("no wonder you're tired"));

        let partial = feedback().reply("so exhausted", &snapshot(3, 1));
        assert!(partial.contains("Busy days can be draining."));
    }

    #[test]
    fn test_feedback_tomorrow_rule() {
        let reply = feedback().reply("planning for tomorrow", &snapshot(2, 0));
        assert!(reply.contains("2-star"));
        assert!(reply.contains("Looking ahead"));
    }

    // ---- Feedback: first-match precedence ----

    #[test]
    fn test_doctor_beats_tomorrow() {
        // Rule 1 (visit/doctor/call) must win over rule 5 (tomorrow/plan/next).
        let reply = feedback().reply("seeing the doctor tomorrow", &snapshot(4, 2));
        assert!(reply.contains("visits"));
        assert!(!reply.contains("Looking ahead"));
    }

    #[test]
    fn test_challenge_beats_success() {
        let reply = feedback().reply("a difficult but great day", &snapshot(4, 0));
        assert!(reply.contains("challenge"));
        assert!(!reply.contains("momentum"));
    }

    #[test]
    fn test_success_beats_tired() {
        let reply = feedback().reply("great but tired", &snapshot(4, 0));
        assert!(reply.contains("momentum"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let reply = feedback().reply("VISITED THE DOCTOR", &snapshot(5, 0));
        assert!(reply.contains("visits"));
    }

    // ---- Feedback: default pool ----

    #[test]
    fn test_feedback_default_pool_membership() {
        // Nondeterministic branch: assert membership, not exact output.
        let ctx = snapshot(3, 2);
        let engine = feedback();
        let pool = engine.default_pool(&ctx);
        for _ in 0..20 {
            let reply = engine.reply("hmm", &ctx);
            assert!(pool.contains(&reply));
        }
    }

    #[test]
    fn test_feedback_default_pool_pinned_by_picker() {
        let ctx = snapshot(3, 2);
        let engine = FeedbackEngine::with_picker(Box::new(FixedPicker(0)));
        let reply = engine.reply("hmm", &ctx);
        assert!(reply.contains("3/5 rating"));
    }

    #[test]
    fn test_feedback_default_pool_completion_clause() {
        let engine = FeedbackEngine::with_picker(Box::new(FixedPicker(1)));
        let reply = engine.reply("hmm", &snapshot(3, 4));
        assert!(reply.contains("perfect completion day"));

        let reply = engine.reply("hmm", &snapshot(3, 1));
        assert!(reply.contains("Tell me more about what happened today."));
    }

    #[test]
    fn test_feedback_total_over_arbitrary_input() {
        let ctx = snapshot(1, 0);
        assert!(!feedback().reply("zzz qqq 123 !!!", &ctx).is_empty());
        assert!(!feedback().reply("\u{00e9}\u{1f4a5}", &ctx).is_empty());
    }

    // ---- Assistant: rule matching ----

    #[test]
    fn test_assistant_visit_rule() {
        let reply = assistant().reply("I met Dr. Chen this morning");
        assert!(reply.contains("noted that visit"));
    }

    #[test]
    fn test_assistant_prescription_rule() {
        let reply = assistant().reply("left samples at the clinic");
        assert!(reply.contains("How many samples"));
    }

    #[test]
    fn test_assistant_follow_up_rule() {
        let reply = assistant().reply("need a follow up next week");
        assert!(reply.contains("recorded that follow-up"));
    }

    #[test]
    fn test_assistant_callback_matches_follow_up_rule() {
        let reply = assistant().reply("she asked for a callback");
        assert!(reply.contains("recorded that follow-up"));
    }

    #[test]
    fn test_assistant_challenge_rule() {
        let reply = assistant().reply("ran into an issue with access");
        assert!(reply.contains("What support do you need"));
    }

    #[test]
    fn test_assistant_success_rule() {
        let reply = assistant().reply("excellent outcome");
        assert!(reply.contains("hard work is paying off"));
    }

    // ---- Assistant: precedence ----

    #[test]
    fn test_assistant_visit_beats_success() {
        // "met" (rule 1) must win over "great" (rule 5).
        let reply = assistant().reply("met the doctor, went great");
        assert!(reply.contains("noted that visit"));
    }

    #[test]
    fn test_assistant_prescription_beats_challenge() {
        let reply = assistant().reply("sample drop was difficult");
        assert!(reply.contains("How many samples"));
    }

    // ---- Assistant: default pool ----

    #[test]
    fn test_assistant_default_pool_membership() {
        let pool = AssistantEngine::default_pool();
        let engine = assistant();
        for _ in 0..20 {
            let reply = engine.reply("mmhm");
            assert!(pool.contains(&reply.as_str()));
        }
    }

    #[test]
    fn test_assistant_default_pool_pinned_by_picker() {
        let engine = AssistantEngine::with_picker(Box::new(FixedPicker(2)));
        assert_eq!(
            engine.reply("mmhm"),
            "Noted! Any other important details from today?"
        );
    }

    // ---- Pickers ----

    #[test]
    fn test_random_picker_in_bounds() {
        let picker = RandomPicker;
        for _ in 0..100 {
            assert!(picker.pick(4) < 4);
        }
    }

    #[test]
    fn test_fixed_picker_clamps() {
        assert_eq!(FixedPicker(10).pick(4), 3);
        assert_eq!(FixedPicker(1).pick(4), 1);
    }
}
