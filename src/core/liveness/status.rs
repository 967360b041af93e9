//! Backend liveness value

use crate::adapters::api::ApiResponse;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one liveness probe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Liveness {
    Online,
    Offline,
}

impl Liveness {
    /// Classify a ping response
    pub fn from_response(response: &ApiResponse) -> Self {
        if response.is_success() {
            Self::Online
        } else {
            Self::Offline
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, Self::Online)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
        }
    }
}

impl fmt::Display for Liveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
