// Configuration Storage Service
// Handles config file read/write and version backup

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::models::VariationStyle;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    pub version: String,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisConfig {
    /// Simulated latency before analysis results commit.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Styles generated per analysis, in display order.
    #[serde(default = "default_styles")]
    pub styles: Vec<VariationStyle>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            styles: default_styles(),
        }
    }
}

fn default_delay_ms() -> u64 {
    3000
}

fn default_styles() -> Vec<VariationStyle> {
    VariationStyle::ALL.to_vec()
}

pub struct ConfigStore {
    config_dir: PathBuf,
    config_file: PathBuf,
}

impl ConfigStore {
    pub fn new(config_dir: PathBuf) -> Self {
        let config_file = config_dir.join("config.json");
        Self { config_dir, config_file }
    }

    /// Get default config directory
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("writeRight"))
    }

    /// Whether a config file has been written yet
    pub fn exists(&self) -> bool {
        self.config_file.exists()
    }

    /// Ensure config directory exists
    pub fn ensure_dir(&self) -> Result<(), String> {
        fs::create_dir_all(&self.config_dir)
            .map_err(|e| format!("Failed to create config dir: {}", e))
    }

    /// Load configuration from file
    pub fn load(&self) -> Result<AppConfig, String> {
        if !self.config_file.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&self.config_file)
            .map_err(|e| format!("Failed to read config: {}", e))?;

        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse config: {}", e))
    }

    /// Save configuration to file
    pub fn save(&self, config: &AppConfig) -> Result<(), String> {
        self.ensure_dir()?;

        // Create backup if file exists
        if self.config_file.exists() {
            self.create_backup()?;
        }

        let content = serde_json::to_string_pretty(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(&self.config_file, content)
            .map_err(|e| format!("Failed to write config: {}", e))
    }

    /// Create a backup of current config
    fn create_backup(&self) -> Result<(), String> {
        let backup_dir = self.config_dir.join("backups");
        fs::create_dir_all(&backup_dir)
            .map_err(|e| format!("Failed to create backup dir: {}", e))?;

        let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
        let backup_file = backup_dir.join(format!("config_{}.json", timestamp));

        fs::copy(&self.config_file, &backup_file)
            .map_err(|e| format!("Failed to create backup: {}", e))?;

        // Keep only last 10 backups
        self.cleanup_old_backups(&backup_dir, 10)?;

        Ok(())
    }

    /// Remove old backups, keeping only the most recent N
    fn cleanup_old_backups(&self, backup_dir: &PathBuf, keep: usize) -> Result<(), String> {
        let mut entries: Vec<_> = fs::read_dir(backup_dir)
            .map_err(|e| format!("Failed to read backup dir: {}", e))?
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "json"))
            .collect();

        if entries.len() <= keep {
            return Ok(());
        }

        // Sort by modification time (oldest first)
        entries.sort_by_key(|e| {
            e.metadata()
                .and_then(|m| m.modified())
                .unwrap_or(std::time::SystemTime::UNIX_EPOCH)
        });

        // Remove oldest entries
        for entry in entries.iter().take(entries.len() - keep) {
            let _ = fs::remove_file(entry.path());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.analysis.delay_ms, 3000);
        assert_eq!(config.analysis.styles.len(), 5);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            version: "1.0.0".to_string(),
            analysis: AnalysisConfig {
                delay_ms: 500,
                styles: vec![VariationStyle::Academic, VariationStyle::Concise],
            },
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"delayMs\":500"));
        assert!(json.contains("\"academic\""));

        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.version, "1.0.0");
        assert_eq!(parsed.analysis.styles.len(), 2);
    }

    #[test]
    fn test_save_reload_and_backup() {
        let dir = std::env::temp_dir().join(format!("writeRight_config_test_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let store = ConfigStore::new(dir.clone());

        let mut config = AppConfig {
            version: "1.0.0".to_string(),
            analysis: AnalysisConfig::default(),
        };
        store.save(&config).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap().version, "1.0.0");

        // Second save moves the previous file into backups/
        config.version = "1.0.1".to_string();
        store.save(&config).unwrap();
        assert_eq!(store.load().unwrap().version, "1.0.1");
        assert!(dir.join("backups").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let parsed: AppConfig = serde_json::from_str(r#"{"version":"1.0.0","analysis":{}}"#).unwrap();
        assert_eq!(parsed.analysis.delay_ms, 3000);
        assert_eq!(parsed.analysis.styles, VariationStyle::ALL.to_vec());
    }
}
