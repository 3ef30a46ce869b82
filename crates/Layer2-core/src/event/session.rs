//! 세션/채널 이벤트 - criteria가 없는 카테고리
//!
//! 모든 활성 리스너가 매칭됩니다.

use super::game::{ChatChannel, Player};
use super::types::{EventCategory, EventHeader, ScriptEvent};
use crate::filter::NoCriteria;
use crate::marshal::ScriptContext;

/// OnJoinChannel - 채팅 채널을 열 때
#[derive(Debug, Clone)]
pub struct OnJoinChannel {
    header: EventHeader,
    chatter: Player,
    channel: ChatChannel,
}

impl OnJoinChannel {
    pub fn new(chatter: Player, channel: ChatChannel) -> Self {
        Self {
            header: EventHeader::new(EventCategory::OnJoinChannel, true),
            chatter,
            channel,
        }
    }

    pub fn chatter(&self) -> &Player {
        &self.chatter
    }

    pub fn channel(&self) -> &ChatChannel {
        &self.channel
    }
}

impl ScriptEvent for OnJoinChannel {
    type Criteria = NoCriteria;
    const CATEGORY: EventCategory = EventCategory::OnJoinChannel;

    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn push(&self, context: &mut ScriptContext) {
        context
            .push_serialized("chatter", &self.chatter)
            .push_serialized("channel", &self.channel);
    }

    fn check_match(&self, _criteria: &NoCriteria) -> bool {
        true
    }
}

/// OnLeaveChannel - 채팅 채널을 닫을 때
#[derive(Debug, Clone)]
pub struct OnLeaveChannel {
    header: EventHeader,
    chatter: Player,
    channel: ChatChannel,
}

impl OnLeaveChannel {
    pub fn new(chatter: Player, channel: ChatChannel) -> Self {
        Self {
            header: EventHeader::new(EventCategory::OnLeaveChannel, true),
            chatter,
            channel,
        }
    }

    pub fn chatter(&self) -> &Player {
        &self.chatter
    }

    pub fn channel(&self) -> &ChatChannel {
        &self.channel
    }
}

impl ScriptEvent for OnLeaveChannel {
    type Criteria = NoCriteria;
    const CATEGORY: EventCategory = EventCategory::OnLeaveChannel;

    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn push(&self, context: &mut ScriptContext) {
        context
            .push_serialized("chatter", &self.chatter)
            .push_serialized("channel", &self.channel);
    }

    fn check_match(&self, _criteria: &NoCriteria) -> bool {
        true
    }
}

/// OnLogin - 서버 접속
#[derive(Debug, Clone)]
pub struct OnLogin {
    header: EventHeader,
    player: Player,
}

impl OnLogin {
    pub fn new(player: Player) -> Self {
        Self {
            header: EventHeader::new(EventCategory::OnLogin, true),
            player,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }
}

impl ScriptEvent for OnLogin {
    type Criteria = NoCriteria;
    const CATEGORY: EventCategory = EventCategory::OnLogin;

    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn push(&self, context: &mut ScriptContext) {
        context.push_serialized("player", &self.player);
    }

    fn check_match(&self, _criteria: &NoCriteria) -> bool {
        true
    }
}

/// OnLogout - 서버 종료 (강제 종료, 타임아웃 여부 포함)
#[derive(Debug, Clone)]
pub struct OnLogout {
    header: EventHeader,
    player: Player,
    forced: bool,
    timeout: bool,
}

impl OnLogout {
    pub fn new(player: Player, forced: bool, timeout: bool) -> Self {
        Self {
            header: EventHeader::new(EventCategory::OnLogout, true),
            player,
            forced,
            timeout,
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn is_forced(&self) -> bool {
        self.forced
    }

    pub fn is_timeout(&self) -> bool {
        self.timeout
    }
}

impl ScriptEvent for OnLogout {
    type Criteria = NoCriteria;
    const CATEGORY: EventCategory = EventCategory::OnLogout;

    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn push(&self, context: &mut ScriptContext) {
        context
            .push_serialized("player", &self.player)
            .push("forced", self.forced)
            .push("timeout", self.timeout);
    }

    fn check_match(&self, _criteria: &NoCriteria) -> bool {
        true
    }
}
