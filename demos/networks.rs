use clap::Parser;
use iem::Iem;
use std::error::Error;

/// Print every IEM network as JSON.
#[derive(Debug, Parser)]
#[command(name = "networks")]
struct Args {
    /// Only print networks whose id contains this text, e.g. ASOS
    #[arg(long)]
    filter: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let iem = Iem::new()?;
    let mut networks = iem.networks().all().await?;
    if let Some(filter) = &args.filter {
        networks.retain(|n| n.id.contains(filter.as_str()));
    }

    println!("{}", serde_json::to_string_pretty(&networks)?);
    println!("Network count: {}", networks.len());
    Ok(())
}
