//! 문자열 필터 (OnSay)

use std::borrow::Cow;

/// 문자열 매칭 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchMode {
    /// 항상 매칭
    All,
    /// 부분 문자열
    Substring,
    /// 앞부분 일치
    Prefix,
    /// 완전 일치
    Exact,
}

/// 문자열 필터
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringFilter {
    pub text: String,
    pub mode: MatchMode,
    pub case_sensitive: bool,
}

impl StringFilter {
    /// 새 필터 생성 (기본: 대소문자 무시)
    pub fn new(text: impl Into<String>, mode: MatchMode) -> Self {
        Self {
            text: text.into(),
            mode,
            case_sensitive: false,
        }
    }

    pub fn all() -> Self {
        Self::new(String::new(), MatchMode::All)
    }

    pub fn exact(text: impl Into<String>) -> Self {
        Self::new(text, MatchMode::Exact)
    }

    pub fn prefix(text: impl Into<String>) -> Self {
        Self::new(text, MatchMode::Prefix)
    }

    pub fn substring(text: impl Into<String>) -> Self {
        Self::new(text, MatchMode::Substring)
    }

    /// 대소문자 구분 설정
    pub fn case_sensitive(mut self, sensitive: bool) -> Self {
        self.case_sensitive = sensitive;
        self
    }

    /// 입력 문자열이 필터와 매칭되는지 확인
    pub fn matches(&self, input: &str) -> bool {
        if self.mode == MatchMode::All {
            return true;
        }

        let (input, text): (Cow<'_, str>, Cow<'_, str>) = if self.case_sensitive {
            (Cow::Borrowed(input), Cow::Borrowed(&self.text))
        } else {
            (
                Cow::Owned(input.to_lowercase()),
                Cow::Owned(self.text.to_lowercase()),
            )
        };

        match self.mode {
            MatchMode::All => true,
            MatchMode::Substring => input.contains(text.as_ref()),
            MatchMode::Prefix => input.starts_with(text.as_ref()),
            MatchMode::Exact => input == text,
        }
    }
}
