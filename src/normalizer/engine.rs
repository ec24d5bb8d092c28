//! 规范化主引擎
//!
//! 组合音译与数词展开，顺序固定：先音译，再展开数字

use std::time::Instant;

use crate::config::NormalizerConfig;
use crate::normalizer::numerals::NumeralExpander;
use crate::normalizer::transliterator::Transliterator;
use crate::normalizer::types::NormalizationResult;

/// 规范化引擎（可复用，预编译规则）
pub struct SpeechNormalizer {
    config: NormalizerConfig,
    transliterator: Transliterator,
    numeral_expander: NumeralExpander,
}

impl SpeechNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            config,
            transliterator: Transliterator::new(),
            numeral_expander: NumeralExpander::new(),
        }
    }

    /// 规范化文本
    ///
    /// 纯函数，不可失败
    pub fn normalize(&self, text: &str) -> NormalizationResult {
        let start = Instant::now();

        if text.is_empty() {
            return NormalizationResult::unchanged(String::new(), 0);
        }

        let mut current = text.to_string();
        let mut applied = Vec::new();

        // 1. 拉丁字母音译
        if self.config.transliterate_latin {
            let (next, replacements) = self.transliterator.normalize_with_replacements(&current);
            current = next;
            applied.extend(replacements);
        }

        // 2. 数字展开（在音译结果上进行）
        if self.config.expand_numbers {
            let (next, replacements) = self.numeral_expander.normalize_with_replacements(&current);
            current = next;
            applied.extend(replacements);
        }

        let elapsed_us = start.elapsed().as_micros() as u64;
        let changed = current != text;

        tracing::debug!(
            "规范化完成: {} -> {} 字节, {} 处替换, 耗时 {}us",
            text.len(),
            current.len(),
            applied.len(),
            elapsed_us
        );

        NormalizationResult {
            text: current,
            changed,
            applied,
            elapsed_us,
        }
    }

    /// 准备待朗读的语句
    ///
    /// 去除首尾空白，空文本返回 None
    pub fn prepare_utterance(&self, text: &str) -> Option<NormalizationResult> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(self.normalize(trimmed))
    }
}

impl Default for SpeechNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}
