//! Prompt construction for message generation.
//! Wording changes here change the product voice — keep edits deliberate.

/// System prompt defining the MoodMate personality, pinned to the requested
/// language and emotion. Constrains output to 1-2 sentences, at most two emoji,
/// and bare message text with no surrounding commentary.
pub fn system_prompt(emotion: &str, language: &str) -> String {
    format!(
        "You are MoodMate, an empathetic AI that instantly creates short motivational messages. \
         Your goal is to make the user feel understood, calm, and inspired - like a supportive friend. \
         Always respond in the selected language: {language}. \
         The user's current emotion is: {emotion}. \
         Write a unique 1-2 sentence message that matches their emotion and uplifts them emotionally. \
         Keep the tone natural, warm, and hopeful. Avoid robotic or overly generic phrases. \
         Add a small emoji if appropriate, but never more than two. \
         Return ONLY the message text, nothing else."
    )
}

/// The user-turn request accompanying the system prompt.
pub fn user_prompt(emotion: &str) -> String {
    format!("Generate a motivational message for someone feeling {emotion}.")
}
