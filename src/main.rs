use clap::Parser;
use zero_mover::utils::{logger, validation::Validate};
use zero_mover::{CliConfig, LocalStorage, MoverEngine, MoverError, SequenceFormat, ZeroMovePipeline};

fn report_failure(e: &MoverError) -> ! {
    tracing::error!(
        "❌ zero-mover failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        report_failure(&e);
    }

    // 輸入檔以目前目錄為基準，不受 output_path 影響
    if let Some(input) = config.input.take() {
        let absolute = std::path::absolute(&input)?;
        config.input = Some(absolute.to_string_lossy().into_owned());
    }

    let print_only = config.stdout;
    let storage = LocalStorage::new(config.output_path.clone());
    let engine = MoverEngine::new(ZeroMovePipeline::new(storage, config));

    if print_only {
        if let Err(e) = engine
            .run_to_writer(SequenceFormat::Text, &mut std::io::stdout())
            .await
        {
            report_failure(&e);
        }
        return Ok(());
    }

    match engine.run().await {
        Ok(output_path) => {
            println!("✅ Zeros moved successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => report_failure(&e),
    }

    Ok(())
}
