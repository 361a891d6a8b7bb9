use clap::{Parser, Subcommand};
use country_data::features::browser::view::{region_options, render_detail, render_list};
use country_data::features::browser::{
    BrowserFilter, CountriesApiClient, CountryBrowser, RegionSelection,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "country-browser")]
#[command(about = "Browse countries served by the country-data backend", long_about = None)]
struct Cli {
    #[arg(short, long, env = "COUNTRIES_BACKEND_URL", default_value = "http://localhost:3001")]
    backend_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List countries, filtered by name, capital or timezone and by region
    List {
        /// Matched against name, capital and timezones (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Region to show, or "All"
        #[arg(short, long, default_value = "All")]
        region: String,

        /// How many pages of 40 to load
        #[arg(short, long, default_value_t = 1)]
        pages: usize,
    },
    /// Show one country by its alpha-2 code
    Show { code: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = CountriesApiClient::new(&cli.backend_url);

    match cli.command {
        Commands::List {
            search,
            region,
            pages,
        } => {
            let mut browser = CountryBrowser::new(client);
            if let Err(e) = browser.load_pages(pages.max(1)).await {
                tracing::error!("{}", e);
                eprintln!("Failed to load countries");
            }

            let filter = BrowserFilter::new(search, RegionSelection::from(region.as_str()));
            let loaded = browser.cache().countries();
            println!("Regions: {}", region_options(&loaded).join(", "));
            print!(
                "{}",
                render_list(&browser.visible(&filter), browser.cache().has_more())
            );
        }
        Commands::Show { code } => match CountryBrowser::new(client).country(&code).await {
            Ok(country) => print!("{}", render_detail(&country)),
            Err(e) => {
                tracing::error!("{}", e);
                eprintln!("Failed to load country details");
            }
        },
    }

    Ok(())
}
