// src/config.rs

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// 规范化流水线配置
// ============================================================================

/// 规范化流水线配置
///
/// 只决定启用哪些阶段，各阶段的规则表是固定的
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    /// 是否音译拉丁字母（默认启用）
    #[serde(default = "default_enabled")]
    pub transliterate_latin: bool,
    /// 是否展开数字（默认启用）
    #[serde(default = "default_enabled")]
    pub expand_numbers: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            transliterate_latin: default_enabled(),
            expand_numbers: default_enabled(),
        }
    }
}

impl NormalizerConfig {
    /// 在给定的配置根目录下定位配置文件（不存在时创建应用目录）
    fn config_path_in(config_dir: Option<PathBuf>) -> Result<PathBuf> {
        let config_dir = config_dir.ok_or_else(|| anyhow::anyhow!("无法获取配置目录"))?;
        let app_dir = config_dir.join("SpeechNormalizer");
        std::fs::create_dir_all(&app_dir)?;
        Ok(app_dir.join("config.json"))
    }

    /// 解析命令行使用的配置
    ///
    /// 显式给出的路径必须存在；未给出时读 `<config_dir>/SpeechNormalizer/config.json`，
    /// 失败则回退默认配置
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        Self::load_or_default_in(explicit, dirs::config_dir())
    }

    fn load_or_default_in(explicit: Option<&Path>, config_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                anyhow::bail!("配置文件不存在: {}", path.display());
            }
            return Self::load_from(path);
        }

        match Self::config_path_in(config_dir).and_then(|path| Self::load_from(&path)) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("加载默认配置失败，使用默认配置: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// 从指定路径加载配置
    ///
    /// 文件不存在时返回默认配置；内容无法解析时记录警告并回退默认配置
    pub fn load_from(path: &Path) -> Result<Self> {
        tracing::info!("尝试从以下路径加载配置: {:?}", path);

        if !path.exists() {
            tracing::warn!("配置文件不存在，使用默认配置");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<Self>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!("解析配置失败，使用默认配置: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// 保存到指定路径
    ///
    /// 先写临时文件再重命名，避免写入中途崩溃留下半截配置
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        tracing::info!("保存配置到: {:?}", path);

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &content).map_err(|e| {
            tracing::error!("写入临时文件失败: {}", e);
            e
        })?;

        if let Err(e) = std::fs::rename(&temp_path, path) {
            tracing::error!("重命名临时文件失败: {}", e);
            let _ = std::fs::remove_file(&temp_path);
            return Err(e.into());
        }

        tracing::info!("配置保存成功");
        Ok(())
    }
}
