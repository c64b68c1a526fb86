//! JSON 스냅샷 저장소.
//!
//! 스냅샷 하나를 UTF-8 JSON 문서 하나로 통째로 기록합니다. 임시 파일에 쓴 뒤
//! 이름을 바꾸므로 읽는 쪽은 항상 완전한 문서만 봅니다.

use std::path::{Path, PathBuf};

use feargreed_core::{OutputConfig, Snapshot};
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{DataError, Result};

/// 파일 기반 스냅샷 저장소.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
    pretty: bool,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            path: path.into(),
            pretty,
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        Self::new(config.path.clone(), config.pretty)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 스냅샷을 JSON 문자열로 직렬화.
    pub fn render(&self, snapshot: &Snapshot) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(snapshot)?
        } else {
            serde_json::to_string(snapshot)?
        };
        Ok(json)
    }

    /// 기존 파일을 교체합니다.
    pub async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = self.render(snapshot)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, json.as_bytes()).await?;
        if let Err(e) = fs::rename(&tmp, &self.path).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(DataError::Io(e));
        }

        info!(
            path = %self.path.display(),
            as_of = %snapshot.as_of,
            final_score = snapshot.final_score(),
            "Snapshot saved"
        );
        Ok(())
    }

    /// 저장된 스냅샷 읽기.
    pub async fn load(&self) -> Result<Snapshot> {
        let bytes = fs::read(&self.path).await?;
        let snapshot: Snapshot = serde_json::from_slice(&bytes)?;

        debug!(path = %self.path.display(), as_of = %snapshot.as_of, "Snapshot loaded");
        Ok(snapshot)
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "snapshot.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4().simple()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use feargreed_core::{MarketMetrics, ScoreCard, ScoreSheet};

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            as_of: NaiveDate::from_ymd_opt(2025, 5, 12).unwrap(),
            metrics: MarketMetrics {
                vix: Some(18.2),
                current_sp: Some(5650.1),
                ma125: Some(5580.4),
                bond_10y: Some(4.4),
                put_call: Some(0.91),
                junk_spread: Some(3.4),
                sp_high: Some(6140.0),
                sp_low: Some(4980.0),
                usd_dxy: None,
                volatility: Some(0.21),
                correlation: Some(0.12),
                sentiment: 0.6,
                technical: 0.5,
                economic: 0.85,
                global: 0.55,
            },
            scores: ScoreSheet::from_card(&ScoreCard::uniform(61), 61),
        }
    }

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("feargreed-store-{}", Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let dir = temp_dir();
        let store = JsonSnapshotStore::new(dir.join("docs").join("daily.json"), true);
        let snapshot = sample_snapshot();

        store.save(&snapshot).await.unwrap();
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded, snapshot);

        // 임시 파일이 남지 않음
        let mut entries = fs::read_dir(dir.join("docs")).await.unwrap();
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.unwrap() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        assert_eq!(names, vec!["daily.json".to_string()]);

        fs::remove_dir_all(&dir).await.unwrap();
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let dir = temp_dir();
        let store = JsonSnapshotStore::new(dir.join("daily.json"), false);

        let mut snapshot = sample_snapshot();
        store.save(&snapshot).await.unwrap();

        snapshot.as_of = NaiveDate::from_ymd_opt(2025, 5, 13).unwrap();
        snapshot.scores.final_score = 40;
        store.save(&snapshot).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.final_score(), 40);
        assert_eq!(loaded.as_of, snapshot.as_of);

        fs::remove_dir_all(&dir).await.unwrap();
    }

    #[test]
    fn test_render_contract() {
        let store = JsonSnapshotStore::new("daily.json", false);
        let json = store.render(&sample_snapshot()).unwrap();

        assert!(json.starts_with("{\"asOf\":\"2025-05-12\""));
        assert!(json.contains("\"usdDxy\":null"));
        assert!(json.contains("\"finalScore\":61"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let store = JsonSnapshotStore::new(temp_dir().join("none.json"), true);
        assert!(matches!(store.load().await, Err(DataError::Io(_))));
    }
}
