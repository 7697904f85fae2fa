use anyhow::Context;
use clap::Parser;
use zero_mover::core::codec::render_sequence;
use zero_mover::core::ConfigProvider;
use zero_mover::utils::{logger, validation::Validate};
use zero_mover::{LocalStorage, MoverEngine, MoverError, Strategy, TomlConfig, ZeroMovePipeline};

#[derive(Parser)]
#[command(name = "toml-mover")]
#[command(about = "Move zeros to the end of a sequence described by a TOML job file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "zero-mover.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Override the strategy from the config
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Dry run - show what would be written without writing it
    #[arg(long)]
    dry_run: bool,
}

fn report_failure(e: &MoverError) -> ! {
    tracing::error!(
        "❌ Job failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting TOML-based zero mover");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    // 應用命令列覆蓋設定
    if let Some(strategy) = args.strategy {
        config.transform.strategy = Some(strategy);
        tracing::info!("🔧 Strategy overridden to: {}", strategy);
    }

    if let Err(e) = config.validate() {
        report_failure(&e);
    }

    if let Some(path) = config.source.path.take() {
        let absolute = std::path::absolute(&path)
            .with_context(|| format!("cannot resolve input path '{}'", path))?;
        config.source.path = Some(absolute.to_string_lossy().into_owned());
    }

    tracing::info!("📋 Job: {}", config.job.name);
    if let Some(description) = &config.job.description {
        tracing::info!("📝 {}", description);
    }

    let storage = LocalStorage::new(config.load.output_path.clone());
    let engine = MoverEngine::new(ZeroMovePipeline::new(storage, config));

    if args.dry_run {
        let report = match engine.run_report().await {
            Ok(report) => report,
            Err(e) => report_failure(&e),
        };
        let rendered = match render_sequence(&report.output, Default::default()) {
            Ok(rendered) => rendered,
            Err(e) => report_failure(&e),
        };
        let pipeline = engine.pipeline();
        println!("🔍 Dry run for '{}'", pipeline.config().job.name);
        println!("   strategy: {}", report.strategy);
        println!("   result:   {}", rendered);
        for format in pipeline.effective_formats() {
            println!(
                "   would write: {}/{}",
                pipeline.config().output_path(),
                pipeline.output_file_name(format)
            );
        }
        return Ok(());
    }

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Zeros moved successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => report_failure(&e),
    }
}
