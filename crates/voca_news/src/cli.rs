use std::time::Duration;

use clap::{Args, Subcommand};

use crate::config::{NewsConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

#[derive(Args, Debug, Clone)]
pub struct NewsArgs {
    /// The news source to read
    #[arg(long, default_value = "apnews")]
    pub source: String,
    /// Homepage of the news source
    #[arg(long, env = "VOCA_NEWS_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    /// HTTP timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,
    /// Print articles to stdout instead of opening the pager
    #[arg(long)]
    pub no_pager: bool,
    #[command(subcommand)]
    pub command: Option<NewsCommands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum NewsCommands {
    /// Print the article listing and exit
    List,
    /// Show one article by its listing index (e.g. 3 or 3-1)
    Show { index: String },
}

impl NewsArgs {
    pub fn config(&self) -> NewsConfig {
        NewsConfig::default()
            .with_base_url(self.base_url.clone())
            .with_timeout(Duration::from_secs(self.timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        news: NewsArgs,
    }

    #[test]
    fn test_defaults_to_interactive() {
        let cli = TestCli::try_parse_from(["voca"]).unwrap();
        assert_eq!(cli.news.source, "apnews");
        assert_eq!(cli.news.timeout, 30);
        assert!(!cli.news.no_pager);
        assert!(cli.news.command.is_none());
    }

    #[test]
    fn test_show_subcommand() {
        let cli = TestCli::try_parse_from(["voca", "--no-pager", "show", "2-1"]).unwrap();
        assert!(cli.news.no_pager);
        assert_eq!(cli.news.command, Some(NewsCommands::Show { index: "2-1".to_string() }));
    }

    #[test]
    fn test_config_from_flags() {
        let cli = TestCli::try_parse_from([
            "voca",
            "--base-url",
            "https://example.org",
            "--timeout",
            "5",
            "list",
        ])
        .unwrap();
        let config = cli.news.config();
        assert_eq!(config.base_url, "https://example.org");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(cli.news.command, Some(NewsCommands::List));
    }
}
