//! The Korean → TypeScript keyword table.

use crate::{is_boundary_after, is_boundary_before};

/// One entry of the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    /// Korean spelling as written in `.ks` source.
    pub spelling: &'static str,
    /// TypeScript text emitted in its place.
    pub replacement: &'static str,
    /// Only match when flanked by non-identifier characters or input edges.
    pub requires_boundary: bool,
}

impl KeywordRule {
    const fn word(spelling: &'static str, replacement: &'static str) -> Self {
        Self {
            spelling,
            replacement,
            requires_boundary: true,
        }
    }

    const fn compound(spelling: &'static str, replacement: &'static str) -> Self {
        Self {
            spelling,
            replacement,
            requires_boundary: false,
        }
    }

    /// Whether this rule applies at byte offset `pos` of `source`.
    pub fn matches_at(&self, source: &str, pos: usize) -> bool {
        if !source[pos..].starts_with(self.spelling) {
            return false;
        }
        !self.requires_boundary
            || (is_boundary_before(source, pos)
                && is_boundary_after(source, pos + self.spelling.len()))
    }
}

/// Keyword table in priority order.
///
/// A spelling that is a textual prefix of another must come after it
/// whenever the prefix alone could pass the boundary check, otherwise the
/// longer entry is unreachable.
pub static KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule::word("내보내기 기본내보내기", "export default"),
    KeywordRule::word("비동기함수", "async function"),
    KeywordRule::word("상수", "const"),
    KeywordRule::word("변수", "let"),
    KeywordRule::word("함수", "function"),
    KeywordRule::word("반환", "return"),
    KeywordRule::word("만약", "if"),
    KeywordRule::word("아니면", "else"),
    KeywordRule::word("반복", "for"),
    KeywordRule::word("동안", "while"),
    KeywordRule::word("오브", "of"),
    KeywordRule::word("참", "true"),
    KeywordRule::word("거짓", "false"),
    KeywordRule::word("비어있음", "null"),
    KeywordRule::word("정의안됨", "undefined"),
    KeywordRule::word("무효", "void"),
    KeywordRule::word("가져오기", "import"),
    KeywordRule::word("내보내기", "export"),
    KeywordRule::word("타입", "type"),
    KeywordRule::word("인터페이스", "interface"),
    KeywordRule::word("구현", "implements"),
    KeywordRule::word("확장", "extends"),
    KeywordRule::word("클래스", "class"),
    KeywordRule::word("생성자", "constructor"),
    KeywordRule::word("이것", "this"),
    KeywordRule::word("새로운", "new"),
    KeywordRule::word("비동기", "async"),
    KeywordRule::word("대기", "await"),
    KeywordRule::word("시도", "try"),
    KeywordRule::word("잡기", "catch"),
    KeywordRule::word("던지기", "throw"),
    KeywordRule::word("문자열", "string"),
    KeywordRule::word("숫자", "number"),
    KeywordRule::word("불리언", "boolean"),
    KeywordRule::word("아무거나", "any"),
    KeywordRule::word("배열", "Array"),
    KeywordRule::word("레코드", "Record"),
    KeywordRule::word("맵", "Map"),
    KeywordRule::word("세트", "Set"),
    KeywordRule::word("약한맵", "WeakMap"),
    KeywordRule::word("약한세트", "WeakSet"),
    KeywordRule::word("프로미스", "Promise"),
    KeywordRule::word("객체", "Object"),
    KeywordRule::word("날짜", "Date"),
    KeywordRule::word("오류", "Error"),
    KeywordRule::word("정규식", "RegExp"),
    KeywordRule::word("제이슨", "JSON"),
    KeywordRule::word("수학", "Math"),
    KeywordRule::compound("콘솔.출력", "console.log"),
];
