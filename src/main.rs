use clap::Parser;
use mock_rewriter::utils::logger;
use mock_rewriter::{CliConfig, LocalStorage, RewriteEngine};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting mock-rewriter");
    tracing::debug!("CLI config: {:?}", cli);

    let config = cli.resolve().inspect_err(|e| {
        tracing::error!("❌ Configuration failed: {}", e);
    })?;

    let engine = RewriteEngine::new(LocalStorage::default(), config.build_rules()?);
    let path = config.target_path();
    tracing::debug!("Loaded {} rule(s)", engine.rules().len());

    match engine.run(&path) {
        Ok(report) => {
            tracing::debug!("Report: {:?}", report);
            println!("✅ Mock setups collapsed in {}", path.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!("❌ Rewrite failed: {}", e);
            Err(e.into())
        }
    }
}
