//! Closed value sets for post parameters that the API accepts as text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use yaylib_client::Error;

macro_rules! text_enum {
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
            /// Wire representation.
            pub fn as_str(&self) -> &'static str {
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
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(Error::invalid_argument(format!(
                        concat!("unknown ", stringify!($name), " '{}'"),
                        other
                    ))),
                }
            }
        }
    };
}

text_enum! {
    /// Content type of a post.
    PostType {
        Text => "text",
        Image => "image",
        Video => "video",
        Survey => "survey",
        ShareableUrl => "shareable_url",
        Call => "call",
    }
}

text_enum! {
    /// Kind of conference call.
    CallType {
        Voice => "voice",
        Video => "video",
    }
}

text_enum! {
    /// Ordering of timeline results (`order_by`).
    TimelineOrder {
        Recent => "recent",
        Popular => "popular",
    }
}
