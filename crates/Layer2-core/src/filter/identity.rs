//! 아이템 식별 필터

use crate::event::Item;

/// 어떤 ID로 아이템을 식별할지
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityKind {
    /// 아이템 타입 ID
    ItemId,
    /// 맵 고유 인스턴스 ID
    UniqueId,
    /// 액션 태그
    ActionId,
}

/// 아이템 식별 필터 (OnUseItem criteria, 다른 필터의 구성 요소)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemIdentity {
    pub kind: IdentityKind,
    pub id: u16,
}

impl ItemIdentity {
    pub fn new(kind: IdentityKind, id: u16) -> Self {
        Self { kind, id }
    }

    pub fn item_id(id: u16) -> Self {
        Self::new(IdentityKind::ItemId, id)
    }

    pub fn unique_id(id: u16) -> Self {
        Self::new(IdentityKind::UniqueId, id)
    }

    pub fn action_id(id: u16) -> Self {
        Self::new(IdentityKind::ActionId, id)
    }

    /// 아이템의 해당 ID 필드와 정확히 일치하는지 확인
    pub fn matches(&self, item: &Item) -> bool {
        let value = match self.kind {
            IdentityKind::ItemId => item.item_id,
            IdentityKind::UniqueId => item.unique_id,
            IdentityKind::ActionId => item.action_id,
        };
        value == self.id
    }

    /// 아이템 중 하나라도 일치하는지 확인
    pub fn matches_any<'a>(&self, items: impl IntoIterator<Item = &'a Item>) -> bool {
        items.into_iter().any(|item| self.matches(item))
    }
}
