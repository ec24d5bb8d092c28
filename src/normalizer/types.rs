//! 规范化类型定义

use serde::{Deserialize, Serialize};

/// 替换记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replacement {
    /// 原始片段
    pub original: String,
    /// 替换后文本
    pub replaced: String,
    /// 起始位置（该阶段输入中的字节索引）
    pub start: usize,
    /// 结束位置（不含）
    pub end: usize,
    /// 替换原因
    pub reason: ReplacementReason,
}

/// 替换原因
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementReason {
    /// 拉丁字母音译为西里尔字母
    Transliteration,
    /// 数字按数值读作俄语数词
    NumberWords,
    /// 数字逐位读出（前导零或超出量级）
    DigitSpelling,
}

/// 规范化结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationResult {
    /// 规范化后的文本
    pub text: String,
    /// 是否有改动
    pub changed: bool,
    /// 按阶段顺序排列的替换记录
    pub applied: Vec<Replacement>,
    /// 处理耗时（微秒）
    pub elapsed_us: u64,
}

impl NormalizationResult {
    /// 创建无修改的结果
    pub fn unchanged(text: String, elapsed_us: u64) -> Self {
        Self {
            text,
            changed: false,
            applied: Vec::new(),
            elapsed_us,
        }
    }
}
