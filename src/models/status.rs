use serde::{Deserialize, Serialize};

/// Project health indicator, stored as its ordinal.
///
/// Only the states the application actually assigns are listed; an ordinal
/// read from the database that maps to no variant is a decode error.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type,
)]
#[repr(i32)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Green = 0,
}

impl Status {
    pub fn ordinal(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for Status {
    type Error = String;

    fn try_from(ordinal: i32) -> Result<Self, Self::Error> {
        match ordinal {
            0 => Ok(Status::Green),
            other => Err(format!("Unknown status ordinal: {other}")),
        }
    }
}
