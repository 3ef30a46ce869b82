//! # Filter Criteria
//!
//! 리스너가 어떤 이벤트에 반응할지 결정하는 카테고리별 조건.
//!
//! - `string`: 문자열 필터 (all / substring / prefix / exact, 대소문자 옵션)
//! - `identity`: 아이템 식별 필터 (item id / unique id / action id)
//! - `context`: 식별 필터 + 방향/단계 플래그 조합 (AND)
//!
//! 리스너는 criteria를 `FilterCriteria`(닫힌 sum type)로 보관하고,
//! 디스패치 시 `EventCriteria::extract`로 카테고리의 구체 타입을 꺼냅니다.

mod context;
mod identity;
mod string;

pub use context::{EquipItemFilter, LookFilter, LookKind, MoveCreatureFilter, MoveItemFilter};
pub use identity::{IdentityKind, ItemIdentity};
pub use string::{MatchMode, StringFilter};

use crate::event::EventCategory;
use otscript_foundation::{Error, Result};

// ============================================================================
// FilterCriteria - 저장용 sum type
// ============================================================================

/// 리스너에 저장되는 criteria
#[derive(Debug, Clone, PartialEq)]
pub enum FilterCriteria {
    Say(StringFilter),
    UseItem(ItemIdentity),
    EquipItem(EquipItemFilter),
    MoveCreature(MoveCreatureFilter),
    MoveItem(MoveItemFilter),
    Look(LookFilter),
}

impl FilterCriteria {
    /// criteria 종류 이름
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Say(_) => "Say",
            Self::UseItem(_) => "UseItem",
            Self::EquipItem(_) => "EquipItem",
            Self::MoveCreature(_) => "MoveCreature",
            Self::MoveItem(_) => "MoveItem",
            Self::Look(_) => "Look",
        }
    }

    /// 해당 카테고리 리스너에 붙일 수 있는지 확인
    pub fn fits(criteria: Option<&FilterCriteria>, category: EventCategory) -> bool {
        criteria.map(FilterCriteria::kind) == category.criteria_kind()
    }

    /// 절대 매칭될 수 없는 값 거부 (스크립트 등록 경로)
    pub fn validate(&self) -> Result<()> {
        if let Self::Look(filter) = self {
            let item_kind = matches!(
                filter.kind,
                LookKind::ItemId | LookKind::UniqueId | LookKind::ActionId
            );
            if item_kind && filter.id > u32::from(u16::MAX) {
                return Err(Error::InvalidCriteria(format!(
                    "{:?} {} is outside the item id range",
                    filter.kind, filter.id
                )));
            }
        }
        Ok(())
    }
}

// ============================================================================
// EventCriteria - 카테고리별 구체 타입
// ============================================================================

/// `ScriptEvent::Criteria`가 구현하는 trait
///
/// 저장된 `FilterCriteria`와 구체 타입 사이를 변환합니다.
pub trait EventCriteria: Sized + 'static {
    /// 저장된 criteria에서 구체 타입 추출 (종류가 다르면 None)
    fn extract(stored: Option<&FilterCriteria>) -> Option<&Self>;

    /// 저장용으로 변환
    fn into_stored(self) -> Option<FilterCriteria>;
}

/// criteria가 없는 카테고리용 (모든 활성 리스너가 매칭)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoCriteria;

impl EventCriteria for NoCriteria {
    fn extract(stored: Option<&FilterCriteria>) -> Option<&Self> {
        match stored {
            None => Some(&NoCriteria),
            Some(_) => None,
        }
    }

    fn into_stored(self) -> Option<FilterCriteria> {
        None
    }
}

macro_rules! stored_criteria {
    ($ty:ty, $variant:ident) => {
        impl EventCriteria for $ty {
            fn extract(stored: Option<&FilterCriteria>) -> Option<&Self> {
                match stored {
                    Some(FilterCriteria::$variant(criteria)) => Some(criteria),
                    _ => None,
                }
            }

            fn into_stored(self) -> Option<FilterCriteria> {
                Some(FilterCriteria::$variant(self))
            }
        }

        impl From<$ty> for FilterCriteria {
            fn from(criteria: $ty) -> Self {
                FilterCriteria::$variant(criteria)
            }
        }
    };
}

stored_criteria!(StringFilter, Say);
stored_criteria!(ItemIdentity, UseItem);
stored_criteria!(EquipItemFilter, EquipItem);
stored_criteria!(MoveCreatureFilter, MoveCreature);
stored_criteria!(MoveItemFilter, MoveItem);
stored_criteria!(LookFilter, Look);

// ============================================================================
// 테스트
// ============================================================================
