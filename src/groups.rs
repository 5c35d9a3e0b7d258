//! Grammers-backed implementation of the provisioning operations.
//!
//! Everything here is a thin translation to raw channel/message API calls;
//! the ordering and error policy live in `provision.rs`.

use std::collections::HashMap;

use async_trait::async_trait;
use grammers_client::types::peer::Peer;
use grammers_client::Client;
use grammers_tl_types as tl;

use crate::config::GROUP_ABOUT;
use crate::error::{Error, Result};
use crate::peers::{find_group_peer, peer_to_input, peer_to_input_channel, user_to_input};
use crate::provision::{CreatedGroup, GroupActions};

/// Remote group operations bound to one client, one logging peer, and one
/// member set for the duration of a run.
pub struct TelegramGroupActions<'a> {
    client: &'a Client,
    log_peer: Peer,
    members: Vec<Peer>,
    group_peers: HashMap<i64, Peer>,
}

impl<'a> TelegramGroupActions<'a> {
    pub fn new(client: &'a Client, log_peer: Peer, members: Vec<Peer>) -> Self {
        Self {
            client,
            log_peer,
            members,
            group_peers: HashMap::new(),
        }
    }

    fn group_peer(&self, group: &CreatedGroup) -> Result<&Peer> {
        self.group_peers.get(&group.id).ok_or_else(|| {
            Error::PeerNotFound(format!("No cached peer for group {}", group.id))
        })
    }
}

/// Pull the created channel's ID out of the updates returned by createChannel.
fn created_channel_id(updates: &tl::enums::Updates) -> Option<i64> {
    let chats = match updates {
        tl::enums::Updates::Updates(u) => &u.chats,
        tl::enums::Updates::Combined(u) => &u.chats,
        _ => return None,
    };

    chats.iter().find_map(|chat| match chat {
        tl::enums::Chat::Channel(channel) => Some(channel.id),
        _ => None,
    })
}

#[async_trait]
impl GroupActions for TelegramGroupActions<'_> {
    async fn create_group(&mut self, title: &str) -> Result<CreatedGroup> {
        let request = tl::functions::channels::CreateChannel {
            broadcast: false,
            megagroup: true,
            for_import: false,
            forum: false,
            title: title.to_string(),
            about: GROUP_ABOUT.to_string(),
            geo_point: None,
            address: None,
            ttl_period: None,
        };

        let updates = self.client.invoke(&request).await?;
        let id = created_channel_id(&updates).ok_or_else(|| {
            Error::TelegramError("createChannel response contained no channel".to_string())
        })?;

        // Refresh the full peer (with access hash) the same way the
        // original flow re-fetched the entity after creation.
        let peer = find_group_peer(self.client, id).await?;
        self.group_peers.insert(id, peer);

        Ok(CreatedGroup {
            id,
            title: title.to_string(),
            invite_link: None,
        })
    }

    async fn make_history_visible(&mut self, group: &CreatedGroup) -> Result<()> {
        let peer = self.group_peer(group)?;
        let request = tl::functions::messages::EditChatDefaultBannedRights {
            peer: peer_to_input(peer),
            banned_rights: tl::types::ChatBannedRights {
                view_messages: false,
                send_messages: false,
                send_media: false,
                send_stickers: false,
                send_gifs: false,
                send_games: false,
                send_inline: false,
                embed_links: false,
                send_polls: false,
                change_info: false,
                invite_users: false,
                pin_messages: false,
                manage_topics: false,
                send_photos: false,
                send_videos: false,
                send_roundvideos: false,
                send_audios: false,
                send_voices: false,
                send_docs: false,
                send_plain: false,
                until_date: 0,
            }
            .into(),
        };

        self.client.invoke(&request).await?;
        Ok(())
    }

    async fn invite_members(&mut self, group: &CreatedGroup) -> Result<usize> {
        let peer = self.group_peer(group)?;
        let channel = peer_to_input_channel(peer).ok_or_else(|| {
            Error::TelegramError(format!("Group {} is not a channel peer", group.id))
        })?;

        let users: Vec<tl::enums::InputUser> =
            self.members.iter().filter_map(user_to_input).collect();
        if users.is_empty() {
            return Ok(0);
        }

        let invited = users.len();
        let request = tl::functions::channels::InviteToChannel { channel, users };
        self.client.invoke(&request).await?;

        Ok(invited)
    }

    async fn export_invite_link(&mut self, group: &CreatedGroup) -> Result<String> {
        let peer = self.group_peer(group)?;
        let request = tl::functions::messages::ExportChatInvite {
            legacy_revoke_permanent: false,
            request_needed: false,
            peer: peer_to_input(peer),
            expire_date: None,
            usage_limit: None,
            title: None,
        };

        match self.client.invoke(&request).await? {
            tl::enums::ExportedChatInvite::ChatInviteExported(invite) => Ok(invite.link),
            other => Err(Error::TelegramError(format!(
                "unexpected exportChatInvite response: {:?}",
                other
            ))),
        }
    }

    async fn notify_log_peer(&mut self, text: &str) -> Result<()> {
        self.client
            .send_message(&self.log_peer, text)
            .await
            .map_err(|e| Error::TelegramError(e.to_string()))?;
        Ok(())
    }

    async fn send_group_message(&mut self, group: &CreatedGroup, text: &str) -> Result<()> {
        let peer = self.group_peer(group)?.clone();
        self.client
            .send_message(&peer, text)
            .await
            .map_err(|e| Error::TelegramError(e.to_string()))?;
        Ok(())
    }

    fn has_members(&self) -> bool {
        !self.members.is_empty()
    }
}
