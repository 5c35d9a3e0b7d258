//! Peer resolution from user-supplied identifiers.
//!
//! Accepts `@username`, bare usernames, `+phone` numbers, and numeric IDs.
//! Phone and ID lookups scan the account's dialogs, so they only find peers
//! the account already knows about.

use grammers_client::types::peer::Peer;
use grammers_client::Client;
use grammers_tl_types as tl;

use crate::error::{Error, Result};

/// How a raw identifier should be resolved.
#[derive(Debug, PartialEq, Eq)]
pub enum TargetKind<'a> {
    Phone(&'a str),
    Id(i64),
    Username(&'a str),
}

/// Classify a raw identifier without touching the network.
pub fn classify_target(input: &str) -> TargetKind<'_> {
    let trimmed = input.trim();
    if let Some(digits) = trimmed.strip_prefix('+') {
        if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
            return TargetKind::Phone(trimmed);
        }
    }
    if let Ok(id) = trimmed.parse::<i64>() {
        return TargetKind::Id(id);
    }
    TargetKind::Username(trimmed.strip_prefix('@').unwrap_or(trimmed))
}

/// Resolve a user-supplied identifier to a Peer.
pub async fn resolve_peer(client: &Client, input: &str) -> Result<Peer> {
    if input.trim().is_empty() {
        return Err(Error::InvalidArgument("empty peer identifier".to_string()));
    }

    match classify_target(input) {
        TargetKind::Username(username) => client
            .resolve_username(username)
            .await
            .map_err(|e| Error::TelegramError(e.to_string()))?
            .ok_or_else(|| Error::PeerNotFound(format!("Username @{} not found", username))),
        TargetKind::Id(id) => find_peer_by_id(client, id).await,
        TargetKind::Phone(phone) => find_peer_by_phone(client, phone).await,
    }
}

/// Get ID from a Peer, whatever its kind.
pub fn peer_id(peer: &Peer) -> i64 {
    match peer {
        Peer::User(u) => u.raw.id(),
        Peer::Group(g) => match &g.raw {
            tl::enums::Chat::Empty(c) => c.id,
            tl::enums::Chat::Chat(c) => c.id,
            tl::enums::Chat::Forbidden(c) => c.id,
            tl::enums::Chat::Channel(c) => c.id,
            tl::enums::Chat::ChannelForbidden(c) => c.id,
        },
        Peer::Channel(c) => c.raw.id,
    }
}

/// Display name for a peer (username when available, otherwise title/name).
pub fn peer_display(peer: &Peer) -> String {
    match peer {
        Peer::User(u) => match u.username() {
            Some(username) => format!("@{}", username),
            None => u.full_name(),
        },
        Peer::Group(g) => g.title().unwrap_or("Group").to_string(),
        Peer::Channel(c) => c.title().to_string(),
    }
}

/// Find any dialog peer by its numeric ID.
async fn find_peer_by_id(client: &Client, target_id: i64) -> Result<Peer> {
    let mut dialogs = client.iter_dialogs();

    while let Some(dialog) = dialogs
        .next()
        .await
        .map_err(|e| Error::TelegramError(e.to_string()))?
    {
        if peer_id(&dialog.peer) == target_id {
            return Ok(dialog.peer);
        }
    }

    Err(Error::PeerNotFound(format!(
        "Peer {} not found in dialogs",
        target_id
    )))
}

/// Find a user by phone number among the account's dialogs.
async fn find_peer_by_phone(client: &Client, phone: &str) -> Result<Peer> {
    let wanted: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let mut dialogs = client.iter_dialogs();

    while let Some(dialog) = dialogs
        .next()
        .await
        .map_err(|e| Error::TelegramError(e.to_string()))?
    {
        if let Peer::User(user) = &dialog.peer {
            let known = match &user.raw {
                tl::enums::User::User(u) => u.phone.clone(),
                tl::enums::User::Empty(_) => None,
            };
            if let Some(known) = known {
                let digits: String = known.chars().filter(|c| c.is_ascii_digit()).collect();
                if digits == wanted {
                    return Ok(dialog.peer);
                }
            }
        }
    }

    Err(Error::PeerNotFound(format!(
        "Phone {} not found in dialogs",
        phone
    )))
}

/// Find a freshly created supergroup by channel ID.
///
/// New groups show up in the creator's dialogs immediately, either as a
/// Group wrapping a megagroup channel or as a Channel.
pub async fn find_group_peer(client: &Client, channel_id: i64) -> Result<Peer> {
    let mut dialogs = client.iter_dialogs();

    while let Some(dialog) = dialogs
        .next()
        .await
        .map_err(|e| Error::TelegramError(e.to_string()))?
    {
        match &dialog.peer {
            Peer::Group(_) | Peer::Channel(_) if peer_id(&dialog.peer) == channel_id => {
                return Ok(dialog.peer);
            }
            _ => {}
        }
    }

    Err(Error::PeerNotFound(format!(
        "Created group {} not found in dialogs",
        channel_id
    )))
}

/// Convert a Peer to InputPeer for raw API calls.
pub fn peer_to_input(peer: &Peer) -> tl::enums::InputPeer {
    match peer {
        Peer::User(user) => {
            let (user_id, access_hash) = match &user.raw {
                tl::enums::User::User(u) => (u.id, u.access_hash.unwrap_or(0)),
                tl::enums::User::Empty(u) => (u.id, 0),
            };
            tl::enums::InputPeer::User(tl::types::InputPeerUser {
                user_id,
                access_hash,
            })
        }
        Peer::Channel(channel) => tl::enums::InputPeer::Channel(tl::types::InputPeerChannel {
            channel_id: channel.raw.id,
            access_hash: channel.raw.access_hash.unwrap_or(0),
        }),
        Peer::Group(group) => match &group.raw {
            tl::enums::Chat::Chat(c) => {
                tl::enums::InputPeer::Chat(tl::types::InputPeerChat { chat_id: c.id })
            }
            tl::enums::Chat::Channel(c) => {
                tl::enums::InputPeer::Channel(tl::types::InputPeerChannel {
                    channel_id: c.id,
                    access_hash: c.access_hash.unwrap_or(0),
                })
            }
            _ => tl::enums::InputPeer::Empty,
        },
    }
}

/// Convert a Peer to InputChannel; None when the peer is not a channel.
pub fn peer_to_input_channel(peer: &Peer) -> Option<tl::enums::InputChannel> {
    match peer_to_input(peer) {
        tl::enums::InputPeer::Channel(c) => Some(
            tl::types::InputChannel {
                channel_id: c.channel_id,
                access_hash: c.access_hash,
            }
            .into(),
        ),
        _ => None,
    }
}

/// Convert a user Peer to InputUser for invitations.
pub fn user_to_input(peer: &Peer) -> Option<tl::enums::InputUser> {
    match peer {
        Peer::User(user) => match &user.raw {
            tl::enums::User::User(u) => Some(
                tl::types::InputUser {
                    user_id: u.id,
                    access_hash: u.access_hash.unwrap_or(0),
                }
                .into(),
            ),
            tl::enums::User::Empty(_) => None,
        },
        _ => None,
    }
}
