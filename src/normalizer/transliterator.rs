//! 拉丁字母音译
//!
//! 将每个最大的 `[A-Za-z]+` 片段改写为小写西里尔字母，其余字符原样保留

use crate::normalizer::rules::TransliterationRules;
use crate::normalizer::tokenizer::{TokenType, Tokenizer};
use crate::normalizer::types::{Replacement, ReplacementReason};

/// 音译器（无状态，可跨线程共享）
pub struct Transliterator {
    rules: TransliterationRules,
}

impl Transliterator {
    pub fn new() -> Self {
        Self {
            rules: TransliterationRules::new(),
        }
    }

    /// 音译文本
    ///
    /// 纯函数，不可失败
    pub fn normalize(&self, text: &str) -> String {
        self.normalize_with_replacements(text).0
    }

    /// 音译文本并返回每个被改写片段的记录
    pub fn normalize_with_replacements(&self, text: &str) -> (String, Vec<Replacement>) {
        let mut result = String::with_capacity(text.len() * 2);
        let mut replacements = Vec::new();

        for token in Tokenizer::tokenize(text) {
            if token.token_type != TokenType::Latin {
                result.push_str(token.text);
                continue;
            }

            let replaced = self.rules.transliterate(token.text);
            result.push_str(&replaced);
            replacements.push(Replacement {
                original: token.text.to_string(),
                replaced,
                start: token.start,
                end: token.end,
                reason: ReplacementReason::Transliteration,
            });
        }

        (result, replacements)
    }
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::new()
    }
}
