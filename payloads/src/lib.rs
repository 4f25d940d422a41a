pub mod api_client;
pub mod config;
pub mod display;
pub mod responses;
pub mod session;

pub use api_client::{APIClient, ClientError};
pub use config::ClientConfig;
pub use display::{DisplayExhibition, Matchers};
pub use session::{SessionSignal, SessionStatus};

use serde::{Deserialize, Serialize};

/// Service-assigned identifier of an exhibition.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct ExhibitionId(pub String);

impl std::str::FromStr for ExhibitionId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for ExhibitionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Identifier of a signed-in user.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct UserId(pub String);
