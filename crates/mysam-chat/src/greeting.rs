//! Greeting synthesis for new chat sessions.
//!
//! The feedback companion opens with a greeting built from the day's
//! snapshot; the call assistant opens with a static prompt.

use mysam_core::FeedbackSnapshot;

/// Compose the feedback companion's opening greeting.
///
/// Clauses are concatenated in fixed order:
/// 1. salutation naming the rep;
/// 2. completion status (perfect / partial / omitted when nothing is done);
/// 3. rating clause from a non-overlapping threshold ladder;
/// 4. selected moods, in selection order (omitted when empty);
/// 5. closing prompt inviting elaboration.
pub fn compose_greeting(rep_name: &str, context: &FeedbackSnapshot) -> String {
    let mut greeting = format!("Hi {}!\n\nThanks for sharing your day with me!\n\n", rep_name);

    let completed = context.completed_count();
    if context.completion.all_completed() {
        greeting.push_str(
            "Incredible! You completed ALL your priorities today! That's outstanding!\n\n",
        );
    } else if completed > 0 {
        greeting.push_str(&format!(
            "You completed {} out of 4 priorities today. Great progress!\n\n",
            completed
        ));
    }

    let stars = context.rating.stars();
    if stars == 5 {
        greeting.push_str("A perfect 5-star day! You're absolutely crushing it!\n\n");
    } else if stars >= 4 {
        greeting.push_str(&format!(
            "You rated today {}/5 - that's a solid day!\n\n",
            stars
        ));
    } else if stars >= 3 {
        greeting.push_str(&format!(
            "You rated today {}/5. Every day is a learning opportunity!\n\n",
            stars
        ));
    } else {
        greeting.push_str(&format!(
            "You rated today {}/5. Remember, tough days build resilience!\n\n",
            stars
        ));
    }

    if !context.selected_moods.is_empty() {
        let labels: Vec<&str> = context.selected_moods.iter().map(|m| m.label()).collect();
        greeting.push_str(&format!("I noticed you felt: {} today.\n\n", labels.join(", ")));
    }

    greeting.push_str(
        "Tell me more about your day! What were your biggest wins? \
         Any challenges you'd like to discuss?",
    );
    greeting
}

/// The call assistant's static opening prompt.
pub fn assistant_greeting(rep_name: &str) -> String {
    format!(
        "Hi {}! I'm your AI assistant. Tell me about your day - I'll help you \
         document your calls and activities. You can speak or type!",
        rep_name
    )
}
