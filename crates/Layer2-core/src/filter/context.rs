//! 복합 필터 (식별 필터 + 방향/단계 플래그)
//!
//! 모든 조건이 일치해야 매칭됩니다 (AND).

use super::identity::ItemIdentity;
use crate::event::{Item, Slot, Thing, Tile};

// ============================================================================
// OnEquipItem
// ============================================================================

/// 장착 필터
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquipItemFilter {
    pub identity: ItemIdentity,
    /// None이면 모든 슬롯
    pub slot: Option<Slot>,
    /// true: 장착, false: 해제
    pub equip: bool,
}

impl EquipItemFilter {
    pub fn new(identity: ItemIdentity, equip: bool) -> Self {
        Self {
            identity,
            slot: None,
            equip,
        }
    }

    pub fn in_slot(mut self, slot: Slot) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn matches(&self, item: &Item, slot: Slot, equip: bool) -> bool {
        self.equip == equip
            && self.slot.map_or(true, |expected| expected == slot)
            && self.identity.matches(item)
    }
}

// ============================================================================
// OnMoveCreature
// ============================================================================

/// 크리처 이동 필터 (도착 타일의 아이템으로 식별)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveCreatureFilter {
    pub identity: ItemIdentity,
    /// true: 들어올 때, false: 나갈 때
    pub step_in: bool,
}

impl MoveCreatureFilter {
    pub fn new(identity: ItemIdentity, step_in: bool) -> Self {
        Self { identity, step_in }
    }

    pub fn matches(&self, tile: &Tile, step_in: bool) -> bool {
        self.step_in == step_in && self.identity.matches_any(&tile.items)
    }
}

// ============================================================================
// OnMoveItem
// ============================================================================

/// 아이템 이동 필터
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveItemFilter {
    pub identity: ItemIdentity,
    /// true: 타일에 추가, false: 타일에서 제거
    pub add_item: bool,
    /// true면 옮겨진 아이템 대신 타일 위 아이템으로 식별
    pub item_on_tile: bool,
}

impl MoveItemFilter {
    pub fn new(identity: ItemIdentity, add_item: bool) -> Self {
        Self {
            identity,
            add_item,
            item_on_tile: false,
        }
    }

    pub fn on_tile(mut self) -> Self {
        self.item_on_tile = true;
        self
    }

    pub fn matches(&self, item: &Item, tile: &Tile, add_item: bool) -> bool {
        if self.add_item != add_item {
            return false;
        }
        if self.item_on_tile {
            self.identity.matches_any(&tile.items)
        } else {
            self.identity.matches(item)
        }
    }
}

// ============================================================================
// OnLook
// ============================================================================

/// 살펴보기 필터 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookKind {
    /// 모든 대상
    None,
    ItemId,
    UniqueId,
    ActionId,
    CreatureId,
}

/// 살펴보기 필터
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookFilter {
    pub kind: LookKind,
    pub id: u32,
}

impl LookFilter {
    pub fn new(kind: LookKind, id: u32) -> Self {
        Self { kind, id }
    }

    pub fn any() -> Self {
        Self::new(LookKind::None, 0)
    }

    pub fn creature(id: u32) -> Self {
        Self::new(LookKind::CreatureId, id)
    }

    pub fn matches(&self, object: &Thing) -> bool {
        match (self.kind, object) {
            (LookKind::None, _) => true,
            (LookKind::ItemId, Thing::Item(item)) => u32::from(item.item_id) == self.id,
            (LookKind::UniqueId, Thing::Item(item)) => u32::from(item.unique_id) == self.id,
            (LookKind::ActionId, Thing::Item(item)) => u32::from(item.action_id) == self.id,
            (LookKind::CreatureId, Thing::Creature(creature)) => creature.id == self.id,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Creature, Position};

    #[test]
    fn test_equip_requires_all_parts() {
        let item = Item::new(2400);
        let filter = EquipItemFilter::new(ItemIdentity::item_id(2400), true).in_slot(Slot::Right);

        assert!(filter.matches(&item, Slot::Right, true));
        assert!(!filter.matches(&item, Slot::Right, false));
        assert!(!filter.matches(&item, Slot::Left, true));
        assert!(!filter.matches(&Item::new(2401), Slot::Right, true));
    }

    #[test]
    fn test_equip_any_slot() {
        let filter = EquipItemFilter::new(ItemIdentity::item_id(2400), false);
        assert!(filter.matches(&Item::new(2400), Slot::Ring, false));
    }

    #[test]
    fn test_move_creature_step_direction() {
        let tile = Tile::new(Position::new(100, 100, 7)).with_item(Item::new(426).with_action_id(1000));
        let filter = MoveCreatureFilter::new(ItemIdentity::action_id(1000), true);

        assert!(filter.matches(&tile, true));
        assert!(!filter.matches(&tile, false));
        assert!(!filter.matches(&Tile::new(Position::new(1, 1, 7)), true));
    }

    #[test]
    fn test_move_item_on_tile() {
        let moved = Item::new(2148);
        let tile = Tile::new(Position::new(5, 5, 7)).with_item(Item::new(1386).with_unique_id(9));

        let by_item = MoveItemFilter::new(ItemIdentity::item_id(2148), true);
        assert!(by_item.matches(&moved, &tile, true));
        assert!(!by_item.matches(&moved, &tile, false));

        let by_tile = MoveItemFilter::new(ItemIdentity::unique_id(9), true).on_tile();
        assert!(by_tile.matches(&moved, &tile, true));
        assert!(!MoveItemFilter::new(ItemIdentity::unique_id(9), true).matches(&moved, &tile, true));
    }

    #[test]
    fn test_look_kinds() {
        let item = Thing::Item(Item::new(1987).with_unique_id(5));
        let creature = Thing::Creature(Creature::new(0x1000_0001, "Rat"));

        assert!(LookFilter::any().matches(&item));
        assert!(LookFilter::any().matches(&creature));
        assert!(LookFilter::new(LookKind::UniqueId, 5).matches(&item));
        assert!(!LookFilter::new(LookKind::UniqueId, 5).matches(&creature));
        assert!(LookFilter::creature(0x1000_0001).matches(&creature));
        assert!(!LookFilter::creature(1987).matches(&item));
    }
}
