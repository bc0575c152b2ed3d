use nexus_core::models::{JobProgress, JobState};

/// Pipeline stages in execution order, with the progress reported on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Drafting,
    Schema,
    Merge,
    Check,
    Persist,
    Done,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Self::Drafting,
        Self::Schema,
        Self::Merge,
        Self::Check,
        Self::Persist,
        Self::Done,
    ];

    pub fn progress(self) -> u8 {
        match self {
            Self::Drafting => 5,
            Self::Schema => 40,
            Self::Merge => 65,
            Self::Check => 75,
            Self::Persist => 85,
            Self::Done => 100,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Drafting => "Drafting",
            Self::Schema => "Schema validate",
            Self::Merge => "Merge & de-dup",
            Self::Check => "Checking",
            Self::Persist => "Persisting",
            Self::Done => "Done",
        }
    }

    pub fn status(self) -> JobProgress {
        let state = if self == Self::Done {
            JobState::Succeeded
        } else {
            JobState::Running
        };
        JobProgress::new(state, self.progress(), self.message())
    }
}
