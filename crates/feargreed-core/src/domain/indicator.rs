//! 13개 하위 지표 정의.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::scoring::{IndicatorSpec, SCORING_TABLE};

/// 종합 지수를 구성하는 하위 지표.
///
/// 선언 순서가 [`SCORING_TABLE`]과 [`crate::ScoreCard`]의 인덱스 순서입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// VIX 수준
    Vix,
    /// S&P 500 125일 이동평균 대비 모멘텀
    Momentum,
    /// 주식 대 장기채 3개월 상대 성과
    SafeHaven,
    /// Put/Call 비율
    PutCall,
    /// 하이일드 스프레드
    Junk,
    /// 기간 고가/저가 내 현재 위치
    Breadth,
    /// 평균 대비 당일 거래량
    Volume,
    /// 연환산 실현 변동성
    Volatility,
    /// 주식·금·채권 상관관계
    Correlation,
    /// VIX + Put/Call 복합 심리
    Sentiment,
    /// RSI + MACD
    Technical,
    /// 10년 국채 금리
    Economic,
    /// 미국·유럽·아시아 1개월 수익률
    Global,
}

impl Indicator {
    /// 지표 개수.
    pub const COUNT: usize = 13;

    /// 선언 순서대로 모든 지표.
    pub const ALL: [Indicator; Self::COUNT] = [
        Indicator::Vix,
        Indicator::Momentum,
        Indicator::SafeHaven,
        Indicator::PutCall,
        Indicator::Junk,
        Indicator::Breadth,
        Indicator::Volume,
        Indicator::Volatility,
        Indicator::Correlation,
        Indicator::Sentiment,
        Indicator::Technical,
        Indicator::Economic,
        Indicator::Global,
    ];

    /// 점수표 배열 인덱스.
    pub fn index(self) -> usize {
        self as usize
    }

    /// 스냅샷 JSON의 `scores` 키.
    pub fn score_key(self) -> &'static str {
        match self {
            Self::Vix => "vixScore",
            Self::Momentum => "momentumScore",
            Self::SafeHaven => "safeHavenScore",
            Self::PutCall => "putCallScore",
            Self::Junk => "junkScore",
            Self::Breadth => "breadthScore",
            Self::Volume => "volumeScore",
            Self::Volatility => "volatilityScore",
            Self::Correlation => "correlationScore",
            Self::Sentiment => "sentimentScore",
            Self::Technical => "technicalScore",
            Self::Economic => "economicScore",
            Self::Global => "globalScore",
        }
    }

    /// 점수 계산 상수.
    pub fn spec(self) -> &'static IndicatorSpec {
        &SCORING_TABLE[self.index()]
    }

    /// 사용자에게 보여줄 지표 설명.
    pub fn description(self) -> &'static str {
        match self {
            Self::Vix => "VIX 지수는 시장의 변동성 기대를 측정합니다. 낮은 VIX는 탐욕, 높은 VIX는 공포를 나타냅니다.",
            Self::Momentum => "S&P 500의 125일 이동평균 대비 현재 가격 위치입니다. 상승 모멘텀은 탐욕을 나타냅니다.",
            Self::SafeHaven => "최근 3개월 주식과 장기 국채의 상대 성과입니다. 주식이 앞설수록 탐욕을 나타냅니다.",
            Self::PutCall => "옵션 시장의 Put/Call 비율입니다. 낮은 비율은 탐욕, 높은 비율은 공포를 나타냅니다.",
            Self::Junk => "하이일드 채권 스프레드입니다. 스프레드가 좁을수록 위험 선호(탐욕)를 나타냅니다.",
            Self::Breadth => "기간 고점/저점 사이에서 현재 지수의 위치입니다. 고점에 가까울수록 탐욕을 나타냅니다.",
            Self::Volume => "평균 거래량 대비 당일 거래량입니다. 거래량이 낮을수록 탐욕을 나타냅니다.",
            Self::Volatility => "S&P 500의 연환산 실현 변동성입니다. 낮은 변동성은 탐욕, 높은 변동성은 공포를 나타냅니다.",
            Self::Correlation => "주식·금·채권 수익률 간 상관관계입니다. 낮은 상관관계는 탐욕을 나타냅니다.",
            Self::Sentiment => "VIX와 Put/Call 비율을 결합한 투자 심리입니다.",
            Self::Technical => "RSI와 MACD를 결합한 기술적 점수입니다.",
            Self::Economic => "10년 국채 금리로 본 경기 상황입니다.",
            Self::Global => "미국·유럽·아시아 대표 지수의 1개월 평균 수익률입니다.",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.score_key())
    }
}
