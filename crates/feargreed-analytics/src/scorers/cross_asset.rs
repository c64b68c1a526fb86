//! 여러 자산·지역의 시계열을 비교하는 채점기.

use chrono::NaiveDate;
use feargreed_core::{Indicator, ScoreQuality, SubScore};

use super::{score_measure, score_value};
use crate::indicators::{cross_asset_correlation, mean, period_return};

/// 주식-금, 주식-채권 평균 상관계수. `[0, 1]` 역방향, 즉 `(1 − 상관) × 100`.
///
/// 한 시계열이라도 비었거나 공통 관측일이 점수표의 `min_history`(10)개 미만이면 50.
pub fn score_correlation(
    equity: &[(NaiveDate, f64)],
    gold: &[(NaiveDate, f64)],
    bonds: &[(NaiveDate, f64)],
) -> SubScore {
    score_measure(
        Indicator::Correlation,
        cross_asset_correlation(
            equity,
            gold,
            bonds,
            Indicator::Correlation.spec().min_history,
        ),
    )
}

/// 미국·유럽·아시아 지수 기간 수익률의 평균. `[-0.1, 0.1]` 정방향.
pub fn score_global(us: &[f64], europe: &[f64], asia: &[f64]) -> SubScore {
    let returns = [us, europe, asia].map(period_return);

    match returns {
        [Some(us), Some(europe), Some(asia)] => {
            score_value(Indicator::Global, (us + europe + asia) / 3.0)
        }
        _ => SubScore::neutral(ScoreQuality::InsufficientHistory),
    }
}

/// 주식 수익률 − 장기채(TLT) 수익률. `[-0.2, 0.2]` 정방향.
pub fn score_safe_haven(equity: &[f64], long_bond: &[f64]) -> SubScore {
    match (period_return(equity), period_return(long_bond)) {
        (Some(equity), Some(bond)) => score_value(Indicator::SafeHaven, equity - bond),
        _ => SubScore::neutral(ScoreQuality::InsufficientHistory),
    }
}

/// 마지막 거래량 / 평균 거래량. `[0.5, 2.0]` 역방향.
pub fn score_volume(volumes: &[f64]) -> SubScore {
    let (Some(&current), Some(average)) = (volumes.last(), mean(volumes)) else {
        return SubScore::neutral(ScoreQuality::InsufficientHistory);
    };

    if !(average > 0.0) {
        return SubScore::neutral(ScoreQuality::Degenerate);
    }

    score_value(Indicator::Volume, current / average)
}
