//! 콘솔 출력 형식.

use std::fmt::Write;

use feargreed_core::{Indicator, ScoreCard, SentimentMood, Snapshot};
use rust_decimal::Decimal;

/// 최종 점수, 심리 구간, 지표별 점수와 가중 기여도를 표로 만듭니다.
///
/// 점수표가 주어지면 지표별 품질(관측/대체/이력 부족/계산 불가)도 표시합니다.
pub fn format_report(snapshot: &Snapshot, card: Option<&ScoreCard>) -> String {
    let score = snapshot.final_score();
    let mood = SentimentMood::from_score(score);

    let mut out = String::new();
    let _ = writeln!(out, "📊 Fear & Greed Index ({})", snapshot.as_of);
    let _ = writeln!(out, "최종 점수: {} / 100  [{}]", score, mood);
    let _ = writeln!(out, "리스크 수준: {}", mood.risk_level());
    let _ = writeln!(out, "{}", mood.description());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<18} {:>5} {:>7} {:>7}  {}",
        "지표", "점수", "가중치", "기여", "품질"
    );

    for indicator in Indicator::ALL {
        let value = snapshot.scores.value(indicator);
        let weight = indicator.spec().weight();
        let contribution = weight * Decimal::from(value);
        let quality = card
            .map(|c| c.get(indicator).quality.to_string())
            .unwrap_or_else(|| "-".to_string());

        let _ = writeln!(
            out,
            "{:<18} {:>5} {:>6}% {:>7}  {}",
            indicator.score_key(),
            value,
            (weight * Decimal::ONE_HUNDRED).normalize(),
            contribution.round_dp(2),
            quality
        );
    }

    let metrics = &snapshot.metrics;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "VIX {} | S&P {} (MA125 {}) | 10Y {}% | P/C {} | HY {}%p",
        optional(metrics.vix, 2),
        optional(metrics.current_sp, 2),
        optional(metrics.ma125, 2),
        optional(metrics.bond_10y, 2),
        optional(metrics.put_call, 2),
        optional(metrics.junk_spread, 2)
    );
    let _ = write!(
        out,
        "변동성 {} | 상관계수 {}",
        optional(metrics.volatility, 3),
        optional(metrics.correlation, 3)
    );

    out
}

fn optional(value: Option<f64>, precision: usize) -> String {
    value.map_or_else(|| "미계산".to_string(), |v| format!("{:.*}", precision, v))
}
