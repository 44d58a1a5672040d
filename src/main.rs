use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};

use toolshelf::core::config::{self, CliOverrides, ShelfConfig};
use toolshelf::core::favorites::{Favorites, FileStore};
use toolshelf::core::filter::{PriceFilter, SortOrder};
use toolshelf::core::state::App;
use toolshelf::headless::{self, ListingFilters};
use toolshelf::tui;

#[derive(Parser)]
#[command(name = "toolshelf", about = "Browse, compare and bookmark AI tools")]
struct Args {
    /// Catalog file path or http(s) URL
    #[arg(long)]
    catalog: Option<String>,

    /// Initial sort order
    #[arg(short, long, value_enum)]
    sort: Option<SortOrder>,

    /// Print the filtered list and exit instead of starting the UI
    #[arg(long)]
    print: bool,

    /// Category to show (with --print)
    #[arg(long, requires = "print")]
    category: Option<String>,

    /// Price filter (with --print)
    #[arg(long, value_enum, requires = "print")]
    price: Option<PriceFilter>,

    /// Search text (with --print)
    #[arg(long, requires = "print")]
    search: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The log file lives in the configured data dir, so config problems are
    // held until the logger is up.
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (ShelfConfig::default(), Some(e)),
    };
    let overrides = CliOverrides {
        catalog: args.catalog.clone(),
        sort: args.sort,
    };
    let resolved = config::resolve(&file_config, &overrides);

    fs::create_dir_all(&resolved.data_dir)?;

    // File logger: toolshelf.log in the data directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(resolved.data_dir.join("toolshelf.log")) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    match &config_error {
        Some(e) => log::warn!("{}, using default config", e),
        None => log::debug!("Config: {:?}", file_config),
    }
    for warning in &resolved.warnings {
        log::warn!("{}", warning);
    }

    log::info!(
        "Toolshelf starting up with catalog {} (data dir {})",
        resolved.catalog,
        resolved.data_dir.display()
    );

    let favorites = Favorites::load(Box::new(FileStore::new(resolved.data_dir.clone())));

    if args.print {
        let filters = ListingFilters {
            category: args.category,
            price: args.price,
            search: args.search,
        };
        return headless::print_listing(&resolved, &filters, &favorites).await;
    }

    let app = App::new(favorites).with_default_sort(resolved.default_sort);
    tui::run(&resolved, app)
}
