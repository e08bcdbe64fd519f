use thiserror::Error;

/// Failures of a roster operation against the directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound { activity: String },

    #[error("Student is already signed up for this activity")]
    AlreadyRegistered { activity: String, email: String },

    #[error("Student is not registered for this activity")]
    NotRegistered { activity: String, email: String },

    #[error("Activity is full")]
    ActivityFull { activity: String, max_participants: u32 },
}

/// Failures while loading the seed document.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to parse activity seed: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Activity '{name}' is defined more than once")]
    DuplicateActivity { name: String },

    #[error("Activity '{activity}' lists participant '{email}' more than once")]
    DuplicateParticipant { activity: String, email: String },
}
