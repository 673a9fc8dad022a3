use clap::Parser;
use multiring::config::scenario::ScenarioConfig;
use multiring::utils::{logger, validation::Validate};
use multiring::{BufferPipeline, ConfigProvider, Console, LocalStorage, ToolEngine};

#[derive(Parser)]
#[command(name = "multiring-scenario")]
#[command(about = "Run the point buffer tool from a TOML scenario file")]
struct Args {
    /// Path to the TOML scenario file
    #[arg(short, long, default_value = "scenario.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting scenario-based buffer tool");
    tracing::info!("📁 Loading scenario from: {}", args.config);

    // 載入 TOML 場景
    let config = match ScenarioConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load scenario file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML");
            std::process::exit(1);
        }
    };

    // 驗證場景
    if let Err(e) = config.validate() {
        tracing::error!("❌ Scenario validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Some(tool) = &config.tool {
        tracing::info!("✅ Scenario '{}' loaded and validated", tool.name);
    } else {
        tracing::info!("✅ Scenario loaded and validated");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = BufferPipeline::new(storage, config, Console::new());
    let engine = ToolEngine::new(pipeline, Console::new());

    match engine.run() {
        Ok(summary) => {
            println!("✅ Buffer tool completed successfully!");
            println!("📁 Point artifact: {}", summary.point_artifact);
            println!(
                "📁 Buffer artifact: {} ({} rings)",
                summary.buffer_artifact, summary.ring_count
            );
        }
        Err(e) => {
            tracing::error!("❌ Scenario run failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
