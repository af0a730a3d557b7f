//! Daily-challenge aggregation for the dashboard.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::join_all;

use crate::calendar::CalendarWindow;
use crate::error::StoreResult;
use crate::records::{challenge_users_path, ChallengeRecord, FriendsRecord, FRIENDS};
use crate::store::{get_typed, DocumentStore};

/// Aggregated challenge view for one user and one anchor day.
#[derive(Debug, Clone)]
pub struct ChallengeSummary {
    pub window: CalendarWindow,
    /// Window dates the user completed.
    pub completed_dates: BTreeSet<NaiveDate>,
    /// Friend list entries with a completed record for the anchor day.
    pub friends_done_today: Vec<String>,
}

impl ChallengeSummary {
    pub fn is_today_done(&self) -> bool {
        self.completed_dates.contains(&self.window.today())
    }
}

/// Computes a user's 21-day completion set and which friends finished today.
///
/// All reads are fired concurrently and merged by key once every lookup has
/// resolved; an absent record of any kind is a legitimate "not completed" /
/// "no friends", never an error.
pub struct ChallengeAggregator<S> {
    store: Arc<S>,
}

impl<S: DocumentStore> ChallengeAggregator<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Load the summary for `user_name` with the window anchored at `today`.
    pub async fn load(&self, user_name: &str, today: NaiveDate) -> StoreResult<ChallengeSummary> {
        let window = CalendarWindow::anchored_at(today);

        let per_date = join_all(window.dates().iter().map(|&date| {
            let store = Arc::clone(&self.store);
            let user = user_name.to_string();
            async move {
                let record =
                    get_typed::<ChallengeRecord, _>(&*store, &challenge_users_path(date), &user)
                        .await?;
                StoreResult::Ok((date, record.is_some_and(|r| r.completed)))
            }
        }));

        let today_path = challenge_users_path(today);
        let friends = get_typed::<FriendsRecord, _>(&*self.store, FRIENDS, user_name);
        let today_records = self.store.list(&today_path);

        let (per_date, friends, today_records) = tokio::join!(per_date, friends, today_records);

        let mut completed_dates = BTreeSet::new();
        for result in per_date {
            let (date, completed) = result?;
            if completed {
                completed_dates.insert(date);
            }
        }

        let friend_list = friends?.map(|r| r.friends).unwrap_or_default();

        let friends_done_today: Vec<String> = today_records?
            .into_iter()
            .filter(|(name, doc)| {
                friend_list.iter().any(|f| f == name)
                    && serde_json::from_value::<ChallengeRecord>(doc.clone())
                        .map(|r| r.completed)
                        .unwrap_or(false)
            })
            .map(|(name, _)| name)
            .collect();

        Ok(ChallengeSummary {
            window,
            completed_dates,
            friends_done_today,
        })
    }
}
