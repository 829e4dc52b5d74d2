use clap::Parser;
use math_ops::core::decimal::format_result;
use math_ops::utils::error::ErrorSeverity;
use math_ops::utils::logger;
use math_ops::{CalculationEngine, CliConfig, DecimalCalculator};

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌 (輸出到 stderr)
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting math-ops CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let operation = config.command.operation();
    let operands = config.command.operands();
    let engine = CalculationEngine::new(DecimalCalculator::new());

    match engine.run(operation, operands.a, operands.b) {
        Ok(response) => {
            println!("{}", format_result(response.result));
        }
        Err(e) => {
            tracing::error!(
                "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
                operation,
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
