//! 크리처 이벤트 - OnMoveCreature, OnLook

use super::game::{Creature, Player, Thing, Tile};
use super::types::{EventCategory, EventHeader, ScriptEvent};
use crate::filter::{LookFilter, MoveCreatureFilter};
use crate::marshal::{ScriptContext, ScriptReturn};

// ============================================================================
// OnMoveCreature
// ============================================================================

/// 크리처가 타일에 들어가거나 나올 때
#[derive(Debug, Clone)]
pub struct OnMoveCreature {
    header: EventHeader,
    creature: Creature,
    tile: Tile,
    step_in: bool,
}

impl OnMoveCreature {
    pub fn new(creature: Creature, tile: Tile, step_in: bool) -> Self {
        Self {
            header: EventHeader::new(EventCategory::OnMoveCreature, true),
            creature,
            tile,
            step_in,
        }
    }

    pub fn creature(&self) -> &Creature {
        &self.creature
    }

    pub fn tile(&self) -> &Tile {
        &self.tile
    }

    pub fn is_step_in(&self) -> bool {
        self.step_in
    }
}

impl ScriptEvent for OnMoveCreature {
    type Criteria = MoveCreatureFilter;
    const CATEGORY: EventCategory = EventCategory::OnMoveCreature;

    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn push(&self, context: &mut ScriptContext) {
        context
            .push_serialized("creature", &self.creature)
            .push_serialized("tile", &self.tile)
            .push("step_in", self.step_in);
    }

    fn check_match(&self, criteria: &MoveCreatureFilter) -> bool {
        criteria.matches(&self.tile, self.step_in)
    }
}

// ============================================================================
// OnLook
// ============================================================================

/// 플레이어가 오브젝트를 살펴볼 때
///
/// 핸들러는 `description`을 바꿀 수 있습니다.
#[derive(Debug, Clone)]
pub struct OnLook {
    header: EventHeader,
    player: Player,
    object: Thing,
    description: String,
}

impl OnLook {
    pub fn new(player: Player, object: Thing, description: impl Into<String>) -> Self {
        Self {
            header: EventHeader::new(EventCategory::OnLook, true),
            player,
            object,
            description: description.into(),
        }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn object(&self) -> &Thing {
        &self.object
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn into_description(self) -> String {
        self.description
    }
}

impl ScriptEvent for OnLook {
    type Criteria = LookFilter;
    const CATEGORY: EventCategory = EventCategory::OnLook;

    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn push(&self, context: &mut ScriptContext) {
        context
            .push_serialized("player", &self.player)
            .push_serialized("object", &self.object)
            .push("description", self.description.as_str());
    }

    fn update(&mut self, result: &ScriptReturn) {
        if let Some(description) = result.read::<String>("description") {
            self.description = description;
        }
    }

    fn check_match(&self, criteria: &LookFilter) -> bool {
        criteria.matches(&self.object)
    }
}
