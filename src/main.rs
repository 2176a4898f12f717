use std::time::Duration;

use clap::Parser;
use tavily_search::config::Config;
use tavily_search::{SearchClient, SearchContext, SearchRequest, WebSearch};

#[derive(Parser, Debug)]
#[command(name = "tavily-search", about = "Run a single web search against the Tavily API")]
struct Args {
    /// The search query to execute
    #[arg(short, long, default_value = "current weather in Knoxville, TN")]
    query: String,

    /// Timeout for the whole search, in seconds
    #[arg(short, long, default_value_t = 30)]
    timeout_secs: u64,

    #[arg(short, long, default_value_t = 20)]
    max_results: u32,

    #[arg(long)]
    no_answer: bool,

    #[arg(long)]
    no_raw_content: bool,

    #[arg(long)]
    no_images: bool,

    #[arg(long)]
    no_image_descriptions: bool,

    #[arg(long)]
    no_auto_parameters: bool,

    /// Print the response as JSON instead of debug output
    #[arg(long)]
    json: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let timeout = Duration::from_secs(args.timeout_secs);

    let http_client = reqwest::Client::builder().timeout(timeout).build()?;
    let client = SearchClient::builder(config.api_key)
        .search_url(config.search_url)
        .transport(http_client)
        .build()?;

    let request = SearchRequest::new(args.query)
        .auto_parameters(!args.no_auto_parameters)
        .include_answer(!args.no_answer)
        .include_raw_content(!args.no_raw_content)
        .include_images(!args.no_images)
        .include_image_descriptions(!args.no_image_descriptions)
        .max_results(args.max_results);

    let ctx = SearchContext::with_timeout(timeout);
    let response = client.search(&ctx, &request).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{:#?}", response);
    }
    Ok(())
}
