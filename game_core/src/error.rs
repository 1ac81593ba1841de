use core::fmt;

use crate::components::Side;

#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    MissingBall,
    MissingPaddle(Side),
    InvalidConfig(String),
    ConfigParse(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBall => write!(f, "no ball entity in the world"),
            Self::MissingPaddle(side) => write!(f, "no {side} paddle entity in the world"),
            Self::InvalidConfig(reason) => write!(f, "invalid config: {reason}"),
            Self::ConfigParse(reason) => write!(f, "failed to parse config: {reason}"),
        }
    }
}

impl std::error::Error for SimError {}
