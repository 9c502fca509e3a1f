use std::io::{self, Write};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use voca_core::Result;
use voca_news::{create_source, init_logging, NewsArgs, NewsCommands, NewsSource};

mod pager;

use pager::Pager;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Browse today's headlines and read articles in the pager
    News(NewsArgs),
}

async fn run_news(args: NewsArgs) -> Result<()> {
    let mut source = create_source(&args.source, &args.config())?;
    info!("🦗 Fetching headlines from {}", source.name());
    source.fetch_articles().await?;

    let pager = Pager::new(!args.no_pager);
    match args.command {
        Some(NewsCommands::Show { index }) => {
            let article = source.retrieve_article(&index).await?;
            pager.show(&article).await
        }
        Some(NewsCommands::List) => {
            print!("{}", source.list_articles()?);
            Ok(())
        }
        None => {
            print!("{}", source.list_articles()?);
            read_articles(source.as_ref(), &pager).await
        }
    }
}

/// Prompts for listing indexes until `q`, end of input or Ctrl-C.
async fn read_articles(source: &dyn NewsSource, pager: &Pager) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("Select an article number (or 'q' to exit): ");
        io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                println!();
                break;
            }
        };
        let Some(line) = line else {
            println!();
            break;
        };

        let input = line.trim();
        if input.is_empty() {
            println!("No input provided");
            continue;
        }
        if input == "q" {
            break;
        }

        match source.retrieve_article(input).await {
            Ok(article) => {
                if let Err(e) = pager.show(&article).await {
                    error!("Error displaying article in pager view: {}", e);
                }
            }
            Err(e) => error!("Error retrieving article {}: {}", input, e),
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::News(args) => run_news(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_news_show() {
        let cli = Cli::try_parse_from(["voca", "-v", "news", "--no-pager", "show", "1-1"]).unwrap();
        assert!(cli.verbose);
        let Commands::News(args) = cli.command;
        assert!(args.no_pager);
        assert_eq!(args.command, Some(NewsCommands::Show { index: "1-1".to_string() }));
    }

    #[test]
    fn test_news_requires_no_subcommand() {
        let cli = Cli::try_parse_from(["voca", "news"]).unwrap();
        let Commands::News(args) = cli.command;
        assert!(args.command.is_none());
        assert_eq!(args.source, "apnews");
    }

    #[test]
    fn test_command_is_required() {
        assert!(Cli::try_parse_from(["voca"]).is_err());
    }
}
