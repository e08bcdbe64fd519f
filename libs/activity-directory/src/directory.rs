use std::fmt;

use tokio::sync::RwLock;
use tracing::info;

use crate::error::{DirectoryError, SeedError};
use crate::models::activity::{Activity, ActivityListing};
use crate::seed;

/// Outcome of a successful roster change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    SignedUp { activity: String, email: String },
    Unregistered { activity: String, email: String },
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SignedUp { activity, email } => write!(f, "Signed up {} for {}", email, activity),
            Self::Unregistered { activity, email } => {
                write!(f, "Unregistered {} from {}", email, activity)
            }
        }
    }
}

/// In-memory store of every activity and its roster.
///
/// The activity set is fixed at construction. Every mutation holds the write
/// lock across its check and its update, so concurrent signups for the same
/// email cannot both succeed.
#[derive(Debug)]
pub struct ActivityDirectory {
    activities: RwLock<Vec<Activity>>,
    enforce_capacity: bool,
}

impl ActivityDirectory {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
            enforce_capacity: false,
        }
    }

    /// Builds a directory from the seed compiled into the crate.
    pub fn seeded() -> Result<Self, SeedError> {
        Ok(Self::new(seed::default_activities()?))
    }

    /// Builds a directory from a TOML seed document.
    pub fn from_seed(contents: &str) -> Result<Self, SeedError> {
        Ok(Self::new(seed::parse(contents)?))
    }

    /// Reject signups once a roster reaches `max_participants`.
    pub fn with_capacity_enforced(mut self, enforce: bool) -> Self {
        self.enforce_capacity = enforce;
        self
    }

    pub fn enforces_capacity(&self) -> bool {
        self.enforce_capacity
    }

    pub async fn len(&self) -> usize {
        self.activities.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.activities.read().await.is_empty()
    }

    pub async fn list(&self) -> ActivityListing {
        ActivityListing::new(self.activities.read().await.clone())
    }

    pub async fn get(&self, name: &str) -> Result<Activity, DirectoryError> {
        self.activities
            .read()
            .await
            .iter()
            .find(|a| a.name == name)
            .cloned()
            .ok_or_else(|| not_found(name))
    }

    pub async fn enroll(&self, name: &str, email: &str) -> Result<Confirmation, DirectoryError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| not_found(name))?;

        if activity.is_registered(email) {
            return Err(DirectoryError::AlreadyRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }

        if self.enforce_capacity && activity.is_full() {
            return Err(DirectoryError::ActivityFull {
                activity: name.to_string(),
                max_participants: activity.max_participants,
            });
        }

        activity.participants.push(email.to_string());
        info!(
            "Enrolled {} in {} ({}/{})",
            email,
            name,
            activity.participants.len(),
            activity.max_participants
        );

        Ok(Confirmation::SignedUp {
            activity: name.to_string(),
            email: email.to_string(),
        })
    }

    pub async fn withdraw(&self, name: &str, email: &str) -> Result<Confirmation, DirectoryError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .iter_mut()
            .find(|a| a.name == name)
            .ok_or_else(|| not_found(name))?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            });
        };

        activity.participants.remove(position);
        info!("Withdrew {} from {}", email, name);

        Ok(Confirmation::Unregistered {
            activity: name.to_string(),
            email: email.to_string(),
        })
    }
}

fn not_found(name: &str) -> DirectoryError {
    DirectoryError::NotFound {
        activity: name.to_string(),
    }
}
