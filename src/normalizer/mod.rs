//! 语音合成前的文本规范化层
//!
//! 语音合成模型只能正确朗读西里尔文，需先把拉丁字母和阿拉伯数字改写掉。
//!
//! ## 处理流程
//! 1. 分词（拉丁字母串/数字串/其他）
//! 2. 拉丁字母串按固定优先级的多字母规则 + 单字母表音译
//! 3. 数字串读作俄语数词（量级名词按数值变格）
//!
//! 两个阶段互不依赖，只作用于不相交的字符类，调用方须先音译再展开数字。

mod engine;
mod numerals;
mod rules;
mod tokenizer;
mod transliterator;
mod types;

pub use engine::SpeechNormalizer;
pub use numerals::NumeralExpander;
pub use transliterator::Transliterator;
pub use types::{NormalizationResult, Replacement, ReplacementReason};

lazy_static::lazy_static! {
    /// 进程级共享的两个阶段，初始化后只读
    static ref TRANSLITERATOR: Transliterator = Transliterator::new();
    static ref NUMERAL_EXPANDER: NumeralExpander = NumeralExpander::new();
}

/// 将拉丁字母片段音译为西里尔字母
pub fn normalize_latin(text: &str) -> String {
    TRANSLITERATOR.normalize(text)
}

/// 将数字片段展开为俄语数词
pub fn normalize_numbers(text: &str) -> String {
    NUMERAL_EXPANDER.normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_functions_compose() {
        let text = normalize_numbers(&normalize_latin("Call 112 now"));
        assert_eq!(text, "цалл сто двенадцать нов");
    }

    #[test]
    fn test_free_functions_match_stage_instances() {
        let text = "Shchi 2001, kod 007";
        assert_eq!(normalize_latin(text), Transliterator::new().normalize(text));
        assert_eq!(normalize_numbers(text), NumeralExpander::new().normalize(text));
        assert_eq!(normalize_numbers(text), "Shchi две тысячи один, kod ноль ноль семь");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_latin(""), "");
        assert_eq!(normalize_numbers(""), "");
    }

    #[test]
    fn test_stages_touch_disjoint_classes() {
        assert_eq!(normalize_latin("2 + 2 = 4"), "2 + 2 = 4");
        assert_eq!(normalize_numbers("abc"), "abc");
    }
}
