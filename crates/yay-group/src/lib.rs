//! # yay-group
//!
//! Group (circle) endpoints of the Yay! API.
//!
//! ## Features
//!
//! - **Discovery** - Browse groups by category or keyword, list your own groups
//! - **Membership** - Join, leave, invite, accept and decline join requests
//! - **Moderation** - Bans, moderator and ownership offers
//! - **Settings** - Create and update groups (signed requests)
//! - **Related groups** - Link and unlink related groups
//!
//! ## Example
//!
//! ```rust,ignore
//! use yaylib_client::{Credentials, YayClient};
//! use yaylib_group::{GroupClient, GroupSettings};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), yaylib_group::Error> {
//!     let client = GroupClient::new(YayClient::new(Credentials::from_env()?)?);
//!
//!     let created = client
//!         .create_group(&GroupSettings::new("rustaceans").description("all things Rust"))
//!         .await?;
//!
//!     let group = client.get_group(created.group_id).await?;
//!     println!("{:?}", group.group.topic);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod options;
mod types;

pub use client::GroupClient;

pub use options::{
    GetGroupsOptions, GroupMembersOptions, GroupSettings, InvitableUsersOptions,
    RelatedGroupsOptions,
};

pub use types::{
    CreateGroupQuota, CreateGroupResponse, Group, GroupCategoriesResponse, GroupCategory,
    GroupResponse, GroupUser, GroupUserResponse, GroupUsersResponse, GroupsRelatedResponse,
    GroupsResponse, UnreadStatusResponse, UsersByTimestampResponse, UsersResponse,
};

pub use yaylib_client::{Error, ErrorKind, Result};
