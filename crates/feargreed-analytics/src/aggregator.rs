//! 고정 가중치 합산.
//!
//! 최종 점수 = round(Σ 가중치 × 하위 점수). 가중치는 basis point로 저장된
//! [`SCORING_TABLE`](feargreed_core::SCORING_TABLE) 값이며 합이 정확히 1입니다.
//! 부동소수점 오차 없이 합산하기 위해 `Decimal`로 계산하고, 정확히 `.5`인 합은
//! 가까운 짝수로 반올림합니다.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use feargreed_core::{Indicator, ScoreCard, Snapshot};

/// 지표 순서([`Indicator::ALL`])대로 나열된 점수를 합산합니다.
pub fn combine(values: &[u8; Indicator::COUNT]) -> u8 {
    let total: Decimal = weighted(values).map(|(_, contribution)| contribution).sum();

    total
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED)
        .to_u8()
        .unwrap_or(0)
}

/// 점수표의 최종 점수.
pub fn aggregate(card: &ScoreCard) -> u8 {
    combine(&values_of(|indicator| card.value(indicator)))
}

/// 저장된 스냅샷의 하위 점수로 최종 점수를 다시 계산합니다.
///
/// 기록된 `finalScore`와 다르면 스냅샷이 손상되었거나 다른 가중치로 생성된 것입니다.
pub fn recompute_final_score(snapshot: &Snapshot) -> u8 {
    combine(&values_of(|indicator| snapshot.scores.value(indicator)))
}

/// 지표별 가중 기여도 (가중치 × 점수).
pub fn weighted_contributions(card: &ScoreCard) -> Vec<(Indicator, Decimal)> {
    weighted(&values_of(|indicator| card.value(indicator))).collect()
}

fn values_of(value: impl Fn(Indicator) -> u8) -> [u8; Indicator::COUNT] {
    Indicator::ALL.map(value)
}

fn weighted(values: &[u8; Indicator::COUNT]) -> impl Iterator<Item = (Indicator, Decimal)> + '_ {
    Indicator::ALL.iter().map(move |&indicator| {
        let weight = indicator.spec().weight();
        (indicator, weight * Decimal::from(values[indicator.index()]))
    })
}
