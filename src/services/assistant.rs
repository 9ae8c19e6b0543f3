// ABOUTME: Nutrition coach assistant building a profile-aware system prompt for chat completion
// ABOUTME: Completion failures are returned as inline assistant text, never as errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutriplan Contributors

use crate::external::chat::{ChatCompletion, ChatMessage};
use crate::logging::AppLogger;
use nutriplan_core::models::{Targets, UserNutritionProfile};
use std::fmt::Write as _;
use std::time::Instant;
use tracing::warn;

/// Reply shown when the assistant cannot answer
pub const ASSISTANT_UNAVAILABLE_REPLY: &str =
    "Sorry, I couldn't reach the nutrition assistant right now. Please try again in a moment.";

/// System prompt describing the user and their daily targets
#[must_use]
pub fn coach_system_prompt(profile: &UserNutritionProfile, targets: Option<&Targets>) -> String {
    let mut prompt = String::from(
        "You are a friendly, evidence-based nutrition coach. Keep answers short and practical. \
         Do not give medical advice; suggest seeing a professional for medical concerns.\n",
    );

    let _ = write!(
        prompt,
        "\nUser: {} years, {}, {} cm, {} kg, activity {}, goal {}.",
        profile.age,
        profile.gender.as_str(),
        profile.height_cm,
        profile.weight_kg,
        profile.activity_level.as_str().replace('_', " "),
        profile.goal.as_str().replace('_', " "),
    );

    if !profile.dietary_restrictions.is_empty() {
        let tags: Vec<&str> = profile
            .dietary_restrictions
            .iter()
            .map(|restriction| restriction.as_tag())
            .collect();
        let _ = write!(
            prompt,
            "\nDietary restrictions: {}. Never suggest foods that break them.",
            tags.join(", ")
        );
    }

    if let Some(targets) = targets {
        let _ = write!(
            prompt,
            "\nDaily targets: {} kcal, protein {} g ({}%), carbs {} g ({}%), fat {} g ({}%).",
            targets.calories,
            targets.protein.grams,
            targets.protein.percentage,
            targets.carbs.grams,
            targets.carbs.percentage,
            targets.fat.grams,
            targets.fat.percentage,
        );
    }

    prompt
}

/// Ask the assistant, returning its reply as an assistant message
///
/// Any completion failure becomes [`ASSISTANT_UNAVAILABLE_REPLY`].
pub async fn ask_assistant<C>(
    chat: &C,
    profile: &UserNutritionProfile,
    targets: Option<&Targets>,
    history: &[ChatMessage],
) -> ChatMessage
where
    C: ChatCompletion + ?Sized,
{
    let system_prompt = coach_system_prompt(profile, targets);
    let started = Instant::now();
    let result = chat.complete(&system_prompt, history).await;
    let duration_ms = started.elapsed().as_millis() as u64;
    AppLogger::log_collaborator_call(chat.name(), "complete", result.is_ok(), duration_ms);

    match result {
        Ok(reply) if !reply.trim().is_empty() => ChatMessage::assistant(reply),
        Ok(_) => {
            warn!("Assistant returned an empty reply");
            ChatMessage::assistant(ASSISTANT_UNAVAILABLE_REPLY)
        }
        Err(e) => {
            warn!(error = %e, "Assistant completion failed");
            ChatMessage::assistant(ASSISTANT_UNAVAILABLE_REPLY)
        }
    }
}
