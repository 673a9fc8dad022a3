use clap::Parser;
use multiring::utils::{logger, validation::Validate};
use multiring::{BufferPipeline, CliConfig, Console, LocalStorage, ToolEngine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting multiring CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 創建存儲和管道
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = BufferPipeline::new(storage, config, Console::new());
    let engine = ToolEngine::new(pipeline, Console::new());

    match engine.run() {
        Ok(summary) => {
            tracing::info!("✅ Geoprocessing completed successfully!");
            tracing::info!("📁 Point artifact: {}", summary.point_artifact);
            tracing::info!("📁 Buffer artifact: {}", summary.buffer_artifact);
            println!("✅ Geoprocessing completed successfully!");
            println!("📁 Point artifact: {}", summary.point_artifact);
            println!(
                "📁 Buffer artifact: {} ({} rings)",
                summary.buffer_artifact, summary.ring_count
            );
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Geoprocessing failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
