//! Game entity references
//!
//! 이벤트 페이로드가 들고 다니는 최소한의 게임 엔티티 정보.
//! 실제 엔티티는 게임 로직 쪽이 소유하며, 여기서는 스크립트에
//! 넘길 필드만 복사해 둡니다.

use serde::{Deserialize, Serialize};

/// 맵 좌표
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: u16,
    pub y: u16,
    pub z: u8,
}

impl Position {
    pub fn new(x: u16, y: u16, z: u8) -> Self {
        Self { x, y, z }
    }
}

/// 크리처 (플레이어, 몬스터, NPC)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    pub id: u32,
    pub name: String,
    pub position: Position,
}

impl Creature {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: Position::default(),
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

/// 플레이어
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub position: Position,
}

impl Player {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            position: Position::default(),
        }
    }

    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }
}

/// 아이템
///
/// `unique_id`와 `action_id`는 맵 에디터에서 부여되며 0이면 없음.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: u16,
    pub unique_id: u16,
    pub action_id: u16,
    pub count: u16,
}

impl Item {
    pub fn new(item_id: u16) -> Self {
        Self {
            item_id,
            unique_id: 0,
            action_id: 0,
            count: 1,
        }
    }

    pub fn with_unique_id(mut self, unique_id: u16) -> Self {
        self.unique_id = unique_id;
        self
    }

    pub fn with_action_id(mut self, action_id: u16) -> Self {
        self.action_id = action_id;
        self
    }
}

/// 타일 (위치 + 위에 놓인 아이템들, 바닥이 첫 번째)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tile {
    pub position: Position,
    pub items: Vec<Item>,
}

impl Tile {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            items: Vec::new(),
        }
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }
}

/// 채팅 채널
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChannel {
    pub id: u16,
    pub name: String,
}

impl ChatChannel {
    pub fn new(id: u16, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// 살펴볼 수 있는 대상
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Thing {
    Item(Item),
    Creature(Creature),
}

/// 말하기 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeakClass {
    Say,
    Whisper,
    Yell,
    PrivateMessage,
    Channel,
    Broadcast,
    MonsterSay,
    MonsterYell,
}

/// 장비 슬롯
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Head,
    Necklace,
    Backpack,
    Armor,
    Right,
    Left,
    Legs,
    Feet,
    Ring,
    Ammo,
}

/// 게임 액션 결과 코드 (핸들러가 덮어쓸 수 있음)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnValue {
    #[default]
    NoError,
    NotPossible,
    CannotUseThisObject,
    TooFarAway,
    NotEnoughRoom,
    YouAreExhausted,
    ThereIsNoWay,
}
