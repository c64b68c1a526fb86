//! 공포·탐욕 지수 계산 파이프라인.
//!
//! 관측값 → 파생 시계열 → 13개 채점기 → 가중 합산 → 스냅샷.
//!
//! 입력이 같으면 결과도 같습니다. 엔진은 I/O를 하지 않으며 날짜는 호출자가 넘깁니다.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use feargreed_core::{
    indicator_span, FetchOutcome, Indicator, MarketObservation, PriceHistory, Reading,
    ScoreCard, ScoreQuality, SentimentError, SentimentResult, Snapshot, SubScore,
};

use crate::aggregator::aggregate;
use crate::indicators::{cross_asset_correlation, IndicatorResult};
use crate::scorers::{
    score_breadth, score_economic, score_global, score_junk, score_measure, score_momentum,
    score_put_call, score_safe_haven, score_sentiment, score_technical, score_vix,
    score_volatility, score_volume,
};
use crate::snapshot::{assemble_snapshot, DerivedMetrics};

/// 한 번의 평가 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub card: ScoreCard,
    pub final_score: u8,
    pub derived: DerivedMetrics,
}

/// 공포·탐욕 지수 계산기.
///
/// 주 지수 시계열만 필수입니다. 나머지 입력은 없거나 부족하면 중립 점수로
/// 대체되고 품질 표시가 남습니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentimentEngine;

impl SentimentEngine {
    pub fn new() -> Self {
        Self
    }

    /// 13개 하위 점수와 최종 점수 계산.
    ///
    /// # 에러
    ///
    /// 주 지수 시계열이 없거나 비어 있으면 `FatalInputMissing`.
    pub fn evaluate(&self, observation: &MarketObservation) -> SentimentResult<Evaluation> {
        let equity = primary_history(&observation.equity)?;
        let closes = equity.closes();

        let correlation: Option<IndicatorResult<f64>> =
            observation.cross_asset.fetched().map(|assets| {
                cross_asset_correlation(
                    &assets.equity.dated_closes(),
                    &assets.gold.dated_closes(),
                    &assets.bonds.dated_closes(),
                    Indicator::Correlation.spec().min_history,
                )
            });

        let derived = DerivedMetrics::from_equity(
            equity,
            correlation.as_ref().and_then(|r| r.as_ref().ok().copied()),
        )
        .ok_or_else(|| {
            SentimentError::FatalInputMissing(format!("{} 종가가 없습니다", equity.symbol))
        })?;

        let card = ScoreCard::from_fn(|indicator| {
            let _span = indicator_span!("score", indicator).entered();

            let score = match indicator {
                Indicator::Vix => from_reading(observation.vix, score_vix),
                Indicator::Momentum => score_momentum(&closes),
                Indicator::SafeHaven => from_outcome(&observation.safe_haven, |h| {
                    score_safe_haven(&h.equity.closes(), &h.long_bond.closes())
                }),
                Indicator::PutCall => from_reading(observation.put_call, score_put_call),
                Indicator::Junk => from_reading(observation.junk_spread, score_junk),
                Indicator::Breadth => {
                    score_breadth(derived.current_sp, derived.sp_high, derived.sp_low)
                }
                Indicator::Volume => {
                    from_outcome(&observation.volume_window, |h| score_volume(&h.volumes()))
                }
                Indicator::Volatility => score_volatility(&closes),
                Indicator::Correlation => match &correlation {
                    Some(measure) => score_measure(indicator, measure.clone()),
                    None => SubScore::neutral(ScoreQuality::Fallback),
                },
                Indicator::Sentiment => {
                    let score = score_sentiment(observation.vix.value, observation.put_call.value);
                    if observation.vix.is_fallback() || observation.put_call.is_fallback() {
                        score.degrade(ScoreQuality::Fallback)
                    } else {
                        score
                    }
                }
                Indicator::Technical => score_technical(&closes),
                Indicator::Economic => from_reading(observation.bond_10y, score_economic),
                Indicator::Global => from_outcome(&observation.regional, |h| {
                    score_global(&h.us.closes(), &h.europe.closes(), &h.asia.closes())
                }),
            };

            if score.quality == ScoreQuality::Observed {
                debug!(score = score.value, "sub-score computed");
            } else {
                warn!(
                    score = score.value,
                    quality = %score.quality,
                    "sub-score degraded"
                );
            }
            score
        });

        let final_score = aggregate(&card);

        info!(
            symbol = %equity.symbol,
            bars = equity.len(),
            final_score,
            degraded = card.degraded_count(),
            "sentiment index evaluated"
        );

        Ok(Evaluation {
            card,
            final_score,
            derived,
        })
    }

    /// 평가 후 `as_of` 날짜의 스냅샷을 만듭니다.
    pub fn run(
        &self,
        observation: &MarketObservation,
        as_of: NaiveDate,
    ) -> SentimentResult<Snapshot> {
        let evaluation = self.evaluate(observation)?;

        Ok(assemble_snapshot(
            as_of,
            observation,
            &evaluation.derived,
            &evaluation.card,
            evaluation.final_score,
        ))
    }
}

fn primary_history(outcome: &FetchOutcome<PriceHistory>) -> SentimentResult<&PriceHistory> {
    match outcome {
        FetchOutcome::Fetched(history) if !history.is_empty() => Ok(history),
        FetchOutcome::Fetched(history) => Err(SentimentError::FatalInputMissing(format!(
            "{} 가격 데이터가 비어 있습니다",
            history.symbol
        ))),
        FetchOutcome::Unavailable { reason } => Err(SentimentError::FatalInputMissing(format!(
            "주 지수 가격 데이터 조회 실패: {reason}"
        ))),
    }
}

/// 대체값으로 채운 입력은 값은 그대로 채점하고 품질만 낮춥니다.
fn from_reading(reading: Reading, scorer: fn(f64) -> SubScore) -> SubScore {
    let score = scorer(reading.value);
    if reading.is_fallback() {
        score.degrade(ScoreQuality::Fallback)
    } else {
        score
    }
}

fn from_outcome<T>(outcome: &FetchOutcome<T>, scorer: impl FnOnce(&T) -> SubScore) -> SubScore {
    match outcome {
        FetchOutcome::Fetched(value) => scorer(value),
        FetchOutcome::Unavailable { .. } => SubScore::neutral(ScoreQuality::Fallback),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feargreed_core::{CrossAssetHistory, RegionalHistory, SafeHavenHistory, NEUTRAL_SCORE};

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn history(symbol: &str, n: usize, drift: f64) -> PriceHistory {
        let closes: Vec<f64> = (0..n)
            .map(|i| 100.0 + drift * i as f64 + if i % 3 == 0 { 1.5 } else { -0.5 })
            .collect();
        PriceHistory::from_closes(symbol, start(), &closes)
    }

    fn sparse_observation(equity: FetchOutcome<PriceHistory>) -> MarketObservation {
        MarketObservation {
            vix: Reading::fallback(20.0),
            equity,
            bond_10y: Reading::fallback(4.0),
            put_call: Reading::fallback(0.95),
            junk_spread: Reading::fallback(3.5),
            volume_window: FetchOutcome::unavailable("offline"),
            cross_asset: FetchOutcome::unavailable("offline"),
            regional: FetchOutcome::unavailable("offline"),
            safe_haven: FetchOutcome::unavailable("offline"),
        }
    }

    #[test]
    fn test_missing_equity_is_fatal() {
        let engine = SentimentEngine::new();

        let unavailable = sparse_observation(FetchOutcome::unavailable("timeout"));
        let err = engine.evaluate(&unavailable).unwrap_err();
        assert!(matches!(err, SentimentError::FatalInputMissing(_)));
        assert!(err.is_fatal());

        let empty = sparse_observation(FetchOutcome::Fetched(PriceHistory::new("^GSPC", vec![])));
        assert!(engine.run(&empty, start()).is_err());
    }

    #[test]
    fn test_unavailable_series_fall_back_to_neutral() {
        let observation = sparse_observation(FetchOutcome::Fetched(history("^GSPC", 130, 0.2)));
        let evaluation = SentimentEngine::new().evaluate(&observation).unwrap();

        for indicator in [
            Indicator::Volume,
            Indicator::Correlation,
            Indicator::Global,
            Indicator::SafeHaven,
        ] {
            let score = evaluation.card.get(indicator);
            assert_eq!(score.value, NEUTRAL_SCORE, "{indicator}");
            assert_eq!(score.quality, ScoreQuality::Fallback, "{indicator}");
        }

        // 대체값도 관측값과 같은 방식으로 채점
        let vix = evaluation.card.get(Indicator::Vix);
        assert_eq!(vix.value, score_vix(20.0).value);
        assert_eq!(vix.quality, ScoreQuality::Fallback);
        assert_eq!(evaluation.derived.correlation, None);
    }

    #[test]
    fn test_short_equity_history() {
        let observation = sparse_observation(FetchOutcome::Fetched(history("^GSPC", 15, 0.2)));
        let evaluation = SentimentEngine::new().evaluate(&observation).unwrap();

        for indicator in [Indicator::Momentum, Indicator::Volatility, Indicator::Technical] {
            let score = evaluation.card.get(indicator);
            assert_eq!(score.value, NEUTRAL_SCORE);
            assert_eq!(score.quality, ScoreQuality::InsufficientHistory);
        }
    }

    #[test]
    fn test_full_observation_is_observed() {
        let equity = history("^GSPC", 130, 0.2);
        let observation = MarketObservation {
            vix: Reading::live(15.0),
            equity: FetchOutcome::Fetched(equity.clone()),
            bond_10y: Reading::live(4.2),
            put_call: Reading::live(0.85),
            junk_spread: Reading::live(3.1),
            volume_window: FetchOutcome::Fetched(equity.clone()),
            cross_asset: FetchOutcome::Fetched(CrossAssetHistory {
                equity: history("^GSPC", 22, 0.2),
                gold: history("GC=F", 22, -0.1),
                bonds: history("^TNX", 22, 0.05),
            }),
            regional: FetchOutcome::Fetched(RegionalHistory {
                us: history("^GSPC", 22, 0.2),
                europe: history("^STOXX50E", 22, 0.1),
                asia: history("^N225", 22, -0.1),
            }),
            safe_haven: FetchOutcome::Fetched(SafeHavenHistory {
                equity: history("^GSPC", 63, 0.2),
                long_bond: history("TLT", 63, -0.1),
            }),
        };

        let engine = SentimentEngine::new();
        let evaluation = engine.evaluate(&observation).unwrap();

        assert_eq!(evaluation.card.get(Indicator::Vix).quality, ScoreQuality::Observed);
        assert_eq!(
            evaluation.card.get(Indicator::SafeHaven).quality,
            ScoreQuality::Observed
        );
        assert!(evaluation.derived.correlation.is_some());
        assert!(evaluation.final_score <= 100);

        let snapshot = engine.run(&observation, start()).unwrap();
        assert_eq!(snapshot.final_score(), evaluation.final_score);
        assert_eq!(snapshot.scores.vix_score, score_vix(15.0).value);
    }
}
