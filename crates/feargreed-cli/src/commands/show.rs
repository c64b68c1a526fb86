//! `feargreed show`: 저장된 스냅샷을 읽어 표시합니다.

use std::path::PathBuf;

use anyhow::{Context, Result};
use feargreed_analytics::recompute_final_score;
use feargreed_core::{AppConfig, Snapshot};
use feargreed_data::JsonSnapshotStore;
use tracing::warn;

use super::report::format_report;

/// 조회 설정.
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    /// 입력 경로 (없으면 설정 파일의 `output.path`)
    pub input: Option<PathBuf>,
    /// 원본 JSON 출력
    pub raw: bool,
}

/// 스냅샷을 읽고 심리 구간과 지표별 점수를 출력합니다.
pub async fn show_snapshot(app: &AppConfig, config: ShowConfig) -> Result<Snapshot> {
    let path = config.input.unwrap_or_else(|| app.output.path.clone());
    let store = JsonSnapshotStore::new(path, true);

    let snapshot = store
        .load()
        .await
        .with_context(|| format!("스냅샷을 읽을 수 없습니다: {}", store.path().display()))?;

    let recomputed = recompute_final_score(&snapshot);
    if recomputed != snapshot.final_score() {
        warn!(
            stored = snapshot.final_score(),
            recomputed, "저장된 최종 점수와 재계산 결과가 다릅니다"
        );
    }

    if config.raw {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", format_report(&snapshot, None));
    }

    Ok(snapshot)
}
