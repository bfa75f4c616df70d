use clap::Parser;
use zdexport_uploader::utils::{logger, validation::Validate};
use zdexport_uploader::{CliConfig, SqliteStore, StoreConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting zdexport-uploader");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    let store_config = StoreConfig::default();
    if let Err(e) = config.validate().and(store_config.validate()) {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // 啟動前先確保資料目錄與資料表存在；失敗就不接受流量
    SqliteStore::init(&store_config)?;
    tracing::info!("📁 Store ready at {}", store_config.db_path.display());

    zdexport_uploader::http::serve(&config.bind_addr(), store_config).await
}
