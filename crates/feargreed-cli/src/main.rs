//! 공포·탐욕 지수 CLI.
//!
//! # 사용 예시
//!
//! ```bash
//! # 지수 계산 후 docs/daily.json 저장
//! feargreed run
//!
//! # 저장 없이 결과만 확인
//! feargreed run --dry-run
//!
//! # 다른 경로로 저장
//! feargreed run -o public/daily.json
//!
//! # 마지막 스냅샷 보기
//! feargreed show
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use feargreed_cli::commands::{run_index, show_snapshot, RunConfig, ShowConfig};
use feargreed_core::{init_logging, AppConfig, LogConfig};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "feargreed")]
#[command(about = "Fear & Greed Index - 13개 지표 기반 시장 심리 지수", long_about = None)]
#[command(version)]
struct Cli {
    /// 설정 파일 경로 (없으면 기본값 + 환경 변수)
    #[arg(short, long, global = true, default_value = "config/default.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 데이터를 수집하고 지수를 계산하여 스냅샷 저장
    Run {
        /// 출력 파일 경로 (기본: 설정의 output.path)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 스냅샷 날짜 (YYYY-MM-DD, 기본: 오늘)
        #[arg(long)]
        as_of: Option<chrono::NaiveDate>,

        /// 파일을 저장하지 않고 JSON만 출력
        #[arg(long, default_value = "false")]
        dry_run: bool,
    },

    /// 저장된 스냅샷 표시
    Show {
        /// 입력 파일 경로 (기본: 설정의 output.path)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// JSON 원문 출력
        #[arg(long, default_value = "false")]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config_found = cli.config.exists();
    let app = AppConfig::load_optional(Some(&cli.config))?;

    init_logging(LogConfig::from_section(&app.logging))
        .map_err(|e| anyhow!("로깅 초기화 실패: {}", e))?;

    if !config_found {
        info!(path = %cli.config.display(), "설정 파일 없음, 기본값 사용");
    }

    match cli.command {
        Commands::Run {
            output,
            as_of,
            dry_run,
        } => {
            let config = RunConfig {
                output,
                dry_run,
                as_of,
            };

            match run_index(&app, config).await {
                Ok(snapshot) => {
                    info!(
                        as_of = %snapshot.as_of,
                        final_score = snapshot.final_score(),
                        "✅ Fear & Greed index updated"
                    );
                }
                Err(e) => {
                    error!("Index update failed: {:#}", e);
                    return Err(e);
                }
            }
        }

        Commands::Show { input, raw } => {
            show_snapshot(&app, ShowConfig { input, raw }).await?;
        }
    }

    Ok(())
}
