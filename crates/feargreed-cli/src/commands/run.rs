//! `feargreed run`: 수집 → 계산 → 저장을 한 번 실행합니다.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use feargreed_analytics::{assemble_snapshot, SentimentEngine};
use feargreed_core::{AppConfig, Snapshot};
use feargreed_data::{JsonSnapshotStore, ObservationCollector};
use tracing::info;

use super::report::format_report;

/// 실행 설정.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 출력 경로 (없으면 설정 파일의 `output.path`)
    pub output: Option<PathBuf>,
    /// 저장하지 않고 JSON만 출력
    pub dry_run: bool,
    /// 스냅샷 날짜 (없으면 오늘)
    pub as_of: Option<NaiveDate>,
}

/// 지수를 계산하고 스냅샷을 저장합니다.
///
/// 주 지수 시계열을 가져오지 못하면 스냅샷을 쓰지 않고 에러를 반환합니다.
pub async fn run_index(app: &AppConfig, config: RunConfig) -> Result<Snapshot> {
    let as_of = config.as_of.unwrap_or_else(|| Local::now().date_naive());
    info!(%as_of, dry_run = config.dry_run, "Fear & Greed 지수 업데이트 시작");

    let collector =
        ObservationCollector::from_config(app).context("데이터 수집기 초기화 실패")?;
    let observation = collector.collect().await;

    let evaluation = SentimentEngine::new()
        .evaluate(&observation)
        .context("지수 계산 실패 (스냅샷을 저장하지 않음)")?;
    let snapshot = assemble_snapshot(
        as_of,
        &observation,
        &evaluation.derived,
        &evaluation.card,
        evaluation.final_score,
    );

    let mut output = app.output.clone();
    if let Some(path) = config.output {
        output.path = path;
    }
    let store = JsonSnapshotStore::from_config(&output);

    println!("{}", format_report(&snapshot, Some(&evaluation.card)));

    if config.dry_run {
        println!("{}", store.render(&snapshot)?);
        println!("\n(dry-run: 파일을 저장하지 않았습니다)");
    } else {
        store
            .save(&snapshot)
            .await
            .with_context(|| format!("스냅샷 저장 실패: {}", store.path().display()))?;
        println!("\n✅ 저장 완료: {}", store.path().display());
    }

    Ok(snapshot)
}
