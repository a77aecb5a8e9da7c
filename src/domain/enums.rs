//! Closed enums shared with the backend.
//!
//! Every enum serializes with the backend's SCREAMING_SNAKE spelling and
//! parses through `FromStr`, failing with [`InvalidEnumValue`] on anything
//! outside the declared members.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Raised when a string does not name a member of a closed enum.
///
/// The message lists every accepted member and echoes the rejected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid enum value. Expected {}, received '{received}'", quoted(.expected))]
pub struct InvalidEnumValue {
    pub expected: &'static [&'static str],
    pub received: String,
}

fn quoted(members: &[&str]) -> String {
    members
        .iter()
        .map(|m| format!("'{}'", m))
        .collect::<Vec<_>>()
        .join(" | ")
}

macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// All members in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            const NAMES: &'static [&'static str] = &[$($text),+];

            /// Backend spelling of this member.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = InvalidEnumValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    _ => Err(InvalidEnumValue {
                        expected: $name::NAMES,
                        received: s.to_string(),
                    }),
                }
            }
        }
    };
}

closed_enum! {
    /// Role of a portal user
    UserType {
        Client => "CLIENT",
        Developer => "DEVELOPER",
        Pm => "PM",
    }
}

closed_enum! {
    /// Urgency of a task
    TaskPriority {
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
    }
}

closed_enum! {
    /// Position of a task on the project board
    ///
    /// Declaration order is the left-to-right board order.
    TaskStatus {
        ToDo => "TO_DO",
        InProgress => "IN_PROGRESS",
        Closed => "CLOSED",
    }
}

closed_enum! {
    /// Lifecycle of a payment request
    PaymentRequestStatus {
        Pending => "PENDING",
        Approved => "APPROVED",
        Rejected => "REJECTED",
        Paid => "PAID",
    }
}
