//! 아이템 이벤트 - OnUseItem, OnEquipItem, OnMoveItem

use super::game::{Item, Player, Position, ReturnValue, Slot, Tile};
use super::types::{EventCategory, EventHeader, ScriptEvent};
use crate::filter::{EquipItemFilter, ItemIdentity, MoveItemFilter};
use crate::marshal::{ScriptContext, ScriptReturn};

// ============================================================================
// OnUseItem
// ============================================================================

/// 플레이어가 아이템을 사용할 때
///
/// 핸들러는 `retval`로 결과 코드를 바꿀 수 있습니다.
#[derive(Debug, Clone)]
pub struct OnUseItem {
    header: EventHeader,
    user: Player,
    item: Item,
    target: Option<Position>,
    retval: ReturnValue,
}

impl OnUseItem {
    pub fn new(user: Player, item: Item, target: Option<Position>) -> Self {
        Self {
            // 스크립트 없는 아이템은 기본 사용 동작이 없음
            header: EventHeader::new(EventCategory::OnUseItem, false),
            user,
            item,
            target,
            retval: ReturnValue::NoError,
        }
    }

    pub fn user(&self) -> &Player {
        &self.user
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn target(&self) -> Option<Position> {
        self.target
    }

    pub fn retval(&self) -> ReturnValue {
        self.retval
    }
}

impl ScriptEvent for OnUseItem {
    type Criteria = ItemIdentity;
    const CATEGORY: EventCategory = EventCategory::OnUseItem;

    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn push(&self, context: &mut ScriptContext) {
        context
            .push_serialized("user", &self.user)
            .push_serialized("item", &self.item)
            .push_serialized("target", &self.target)
            .push_serialized("retval", &self.retval);
    }

    fn update(&mut self, result: &ScriptReturn) {
        if let Some(retval) = result.read::<ReturnValue>("retval") {
            self.retval = retval;
        }
    }

    fn check_match(&self, criteria: &ItemIdentity) -> bool {
        criteria.matches(&self.item)
    }
}

// ============================================================================
// OnEquipItem
// ============================================================================

/// 플레이어가 아이템을 장착/해제할 때
#[derive(Debug, Clone)]
pub struct OnEquipItem {
    header: EventHeader,
    user: Player,
    item: Item,
    slot: Slot,
    equip: bool,
}

impl OnEquipItem {
    pub fn new(user: Player, item: Item, slot: Slot, equip: bool) -> Self {
        Self {
            header: EventHeader::new(EventCategory::OnEquipItem, true),
            user,
            item,
            slot,
            equip,
        }
    }

    pub fn user(&self) -> &Player {
        &self.user
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn is_equip(&self) -> bool {
        self.equip
    }
}

impl ScriptEvent for OnEquipItem {
    type Criteria = EquipItemFilter;
    const CATEGORY: EventCategory = EventCategory::OnEquipItem;

    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn push(&self, context: &mut ScriptContext) {
        context
            .push_serialized("user", &self.user)
            .push_serialized("item", &self.item)
            .push_serialized("slot", &self.slot)
            .push("equip", self.equip);
    }

    fn check_match(&self, criteria: &EquipItemFilter) -> bool {
        criteria.matches(&self.item, self.slot, self.equip)
    }
}

// ============================================================================
// OnMoveItem
// ============================================================================

/// 아이템이 타일에 추가/제거될 때
#[derive(Debug, Clone)]
pub struct OnMoveItem {
    header: EventHeader,
    item: Item,
    tile: Tile,
    add_item: bool,
}

impl OnMoveItem {
    pub fn new(item: Item, tile: Tile, add_item: bool) -> Self {
        Self {
            header: EventHeader::new(EventCategory::OnMoveItem, true),
            item,
            tile,
            add_item,
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn tile(&self) -> &Tile {
        &self.tile
    }

    pub fn is_add(&self) -> bool {
        self.add_item
    }
}

impl ScriptEvent for OnMoveItem {
    type Criteria = MoveItemFilter;
    const CATEGORY: EventCategory = EventCategory::OnMoveItem;

    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn push(&self, context: &mut ScriptContext) {
        context
            .push_serialized("item", &self.item)
            .push_serialized("tile", &self.tile)
            .push("add_item", self.add_item);
    }

    fn check_match(&self, criteria: &MoveItemFilter) -> bool {
        criteria.matches(&self.item, &self.tile, self.add_item)
    }
}
