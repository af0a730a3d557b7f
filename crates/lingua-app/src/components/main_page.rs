//! Main page: welcome header, daily-challenge card, 21-day calendar.

use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;
use lingua_core::{CalendarWindow, ChallengeAggregator, ChallengeSummary};

use crate::state::{AppContext, Page};
use crate::theme::ThemeToggle;

/// Dashboard for the signed-in user's challenge progress.
#[component]
pub fn MainPage() -> Element {
    let mut ctx = use_context::<AppContext>();
    let user_name = ctx.user_name.read().clone();

    let mut summary = use_signal(|| None::<ChallengeSummary>);
    let mut loading = use_signal(|| true);

    // One fan-out/fan-in fetch on mount; a store failure keeps the card in
    // its loading state rather than crashing the page.
    use_effect(move || {
        let user = ctx.user_name.read().clone();
        if user.is_empty() {
            loading.set(false);
            return;
        }
        let store = Arc::clone(&ctx.services.read().store);
        spawn(async move {
            let today = Local::now().date_naive();
            match ChallengeAggregator::new(store).load(&user, today).await {
                Ok(result) => {
                    summary.set(Some(result));
                    loading.set(false);
                }
                Err(e) => {
                    tracing::warn!("challenge aggregation failed: {}", e);
                }
            }
        });
    });

    let is_loading = *loading.read();
    let current = summary.read().clone();

    // With nothing loaded yet, render the window uncompleted so the grid
    // keeps its shape.
    let window = current
        .as_ref()
        .map(|s| s.window.clone())
        .unwrap_or_else(|| CalendarWindow::anchored_at(Local::now().date_naive()));
    let completed = current
        .as_ref()
        .map(|s| s.completed_dates.clone())
        .unwrap_or_default();
    let days = window.days(&completed);
    let today_done = current.as_ref().is_some_and(|s| s.is_today_done());
    let friends_done = current
        .map(|s| s.friends_done_today)
        .unwrap_or_default();

    rsx! {
        div { class: "main-container",
            div { class: "page-header",
                h1 { "Welcome to LinguaLearn AI" }
                ThemeToggle {}
            }
            div { class: "page-welcome", "Welcome, {user_name}!" }

            div { class: "daily-challenge",
                div { class: "challenge-info",
                    div { class: "challenge-title", "📅 Daily challenge" }
                    div { class: "challenge-desc", "Learn a new word today!" }
                    div { class: "challenge-status",
                        if is_loading {
                            span { class: "challenge-loading", "Loading..." }
                        } else if today_done {
                            span { class: "challenge-done", "You finished today's challenge" }
                        } else {
                            span { class: "challenge-notyet", "Not done yet - go learn a word!" }
                        }
                    }
                    div { class: "challenge-friends",
                        span { class: "challenge-friends-title", "Friends done today: " }
                        if is_loading {
                            span { class: "challenge-loading", "Loading..." }
                        } else if friends_done.is_empty() {
                            span { class: "challenge-none", "No friends done yet" }
                        } else {
                            for name in friends_done.iter() {
                                span { key: "{name}", class: "challenge-friend", "{name}" }
                            }
                        }
                    }
                }

                div { class: "challenge-calendar-container",
                    div { class: "challenge-calendar-header", "Last 21 days" }
                    div { class: "challenge-calendar",
                        for day in days.iter() {
                            div {
                                key: "{day.date}",
                                class: calendar_day_class(day.completed, day.is_today),
                                "{day.day_of_month()}"
                            }
                        }
                    }
                }
            }

            div { class: "main-menu",
                button { onclick: move |_| ctx.page.set(Page::Chat), "AI conversation" }
                button { onclick: move |_| ctx.page.set(Page::History), "Conversation history" }
            }
        }
    }
}

fn calendar_day_class(completed: bool, is_today: bool) -> &'static str {
    match (completed, is_today) {
        (true, true) => "calendar-day completed current-day",
        (true, false) => "calendar-day completed",
        (false, true) => "calendar-day current-day",
        (false, false) => "calendar-day",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_day_class_variants() {
        assert_eq!(calendar_day_class(false, false), "calendar-day");
        assert_eq!(calendar_day_class(true, false), "calendar-day completed");
        assert_eq!(calendar_day_class(false, true), "calendar-day current-day");
        assert_eq!(
            calendar_day_class(true, true),
            "calendar-day completed current-day"
        );
    }
}
