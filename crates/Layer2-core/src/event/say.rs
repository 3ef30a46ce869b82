//! OnSay - 크리처가 말할 때

use super::game::{ChatChannel, Creature, SpeakClass};
use super::types::{EventCategory, EventHeader, ScriptEvent};
use crate::filter::StringFilter;
use crate::marshal::{ScriptContext, ScriptReturn};

/// OnSay 이벤트
///
/// 핸들러는 `text`와 `class`를 바꿀 수 있습니다.
#[derive(Debug, Clone)]
pub struct OnSay {
    header: EventHeader,
    speaker: Creature,
    class: SpeakClass,
    channel: Option<ChatChannel>,
    text: String,
}

impl OnSay {
    pub fn new(
        speaker: Creature,
        class: SpeakClass,
        channel: Option<ChatChannel>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            header: EventHeader::new(EventCategory::OnSay, true),
            speaker,
            class,
            channel,
            text: text.into(),
        }
    }

    pub fn speaker(&self) -> &Creature {
        &self.speaker
    }

    pub fn class(&self) -> SpeakClass {
        self.class
    }

    pub fn channel(&self) -> Option<&ChatChannel> {
        self.channel.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl ScriptEvent for OnSay {
    type Criteria = StringFilter;
    const CATEGORY: EventCategory = EventCategory::OnSay;

    fn header(&self) -> &EventHeader {
        &self.header
    }

    fn push(&self, context: &mut ScriptContext) {
        context
            .push_serialized("speaker", &self.speaker)
            .push_serialized("class", &self.class)
            .push_serialized("channel", &self.channel)
            .push("text", self.text.as_str());
    }

    fn update(&mut self, result: &ScriptReturn) {
        if let Some(text) = result.read::<String>("text") {
            self.text = text;
        }
        if let Some(class) = result.read::<SpeakClass>("class") {
            self.class = class;
        }
    }

    fn check_match(&self, criteria: &StringFilter) -> bool {
        criteria.matches(&self.text)
    }
}
