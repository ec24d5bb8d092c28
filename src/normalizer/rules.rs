//! 音译规则定义
//!
//! 包含多字母规则（按优先级排列）和单字母映射表

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};

/// 多字母规则，顺序即优先级：同一位置上先声明者胜出
const MULTI_CHAR_RULES: &[(&str, &str)] = &[
    ("shch", "щ"),
    ("sch", "щ"),
    ("yo", "ё"),
    ("zh", "ж"),
    ("kh", "х"),
    ("ts", "ц"),
    ("ch", "ч"),
    ("sh", "ш"),
    ("yu", "ю"),
    ("ya", "я"),
    ("ye", "е"),
    ("je", "е"),
];

/// 单字母映射，按 a..=z 排列
const SINGLE_CHAR_RULES: [&str; 26] = [
    "а", "б", "ц", "д", "е", "ф", "г", "х", "и", "й", "к", "л", "м", "н", "о", "п", "к", "р",
    "с", "т", "у", "в", "в", "кс", "ы", "з",
];

/// 音译规则表（可复用，预编译多模式匹配器）
pub struct TransliterationRules {
    matcher: AhoCorasick,
}

impl TransliterationRules {
    pub fn new() -> Self {
        let keys: Vec<&str> = MULTI_CHAR_RULES.iter().map(|(key, _)| *key).collect();
        // LeftmostFirst：最左位置优先，同一起点按声明顺序取第一个
        let matcher = match AhoCorasickBuilder::new()
            .match_kind(MatchKind::LeftmostFirst)
            .build(&keys)
        {
            Ok(matcher) => matcher,
            Err(e) => panic!("音译规则自动机构建失败: {:?}", e),
        };

        Self { matcher }
    }

    /// 音译一个纯 ASCII 字母片段
    ///
    /// 先转小写，未命中多字母规则的位置逐字母映射
    pub fn transliterate(&self, run: &str) -> String {
        let lowered = run.to_ascii_lowercase();
        let mut result = String::with_capacity(lowered.len() * 2);
        let mut last_end = 0;

        for mat in self.matcher.find_iter(lowered.as_str()) {
            self.push_single_chars(&lowered[last_end..mat.start()], &mut result);
            result.push_str(MULTI_CHAR_RULES[mat.pattern().as_usize()].1);
            last_end = mat.end();
        }
        self.push_single_chars(&lowered[last_end..], &mut result);

        result
    }

    /// 单字母映射（对 a-z 是全映射）
    pub fn map_single(&self, ch: char) -> Option<&'static str> {
        if ch.is_ascii_lowercase() {
            Some(SINGLE_CHAR_RULES[(ch as u8 - b'a') as usize])
        } else {
            None
        }
    }

    fn push_single_chars(&self, segment: &str, out: &mut String) {
        for ch in segment.chars() {
            match self.map_single(ch) {
                Some(mapped) => out.push_str(mapped),
                None => out.push(ch),
            }
        }
    }
}

impl Default for TransliterationRules {
    fn default() -> Self {
        Self::new()
    }
}
