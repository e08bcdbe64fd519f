//! Parsing and validation of the TOML activity seed.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::SeedError;
use crate::models::activity::Activity;

/// The seed compiled into the crate.
pub const DEFAULT_SEED: &str = include_str!("../seed/activities.toml");

#[derive(Debug, Deserialize)]
struct SeedDocument {
    #[serde(default, rename = "activity")]
    activities: Vec<Activity>,
}

pub fn parse(contents: &str) -> Result<Vec<Activity>, SeedError> {
    let document: SeedDocument = toml::from_str(contents)?;

    let mut names = HashSet::new();
    for activity in &document.activities {
        if !names.insert(activity.name.as_str()) {
            return Err(SeedError::DuplicateActivity {
                name: activity.name.clone(),
            });
        }

        let mut emails = HashSet::new();
        for email in &activity.participants {
            if !emails.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant {
                    activity: activity.name.clone(),
                    email: email.clone(),
                });
            }
        }

        if activity.participants.len() > activity.max_participants as usize {
            tracing::warn!(
                "Seeded roster for '{}' exceeds capacity ({} > {})",
                activity.name,
                activity.participants.len(),
                activity.max_participants
            );
        }
    }

    Ok(document.activities)
}

pub fn default_activities() -> Result<Vec<Activity>, SeedError> {
    parse(DEFAULT_SEED)
}
