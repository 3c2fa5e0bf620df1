use crate::demo::{
    run_demo, run_portfolio_health, run_score, DemoArgs, PortfolioHealthArgs, ScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use recruit_fit::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Recruiting Fit Service",
    about = "Score school fit and check portfolio balance from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Aggregate dimension sub-scores into a fit score and tier
    Score(ScoreArgs),
    /// Inspect an exported school list
    Portfolio {
        #[command(subcommand)]
        command: PortfolioCommand,
    },
    /// Evaluate a sample athlete against sample schools end to end
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum PortfolioCommand {
    /// Report tier counts, status and warnings for a school list CSV
    Health(PortfolioHealthArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => {
            run_score(args);
            Ok(())
        }
        Command::Portfolio {
            command: PortfolioCommand::Health(args),
        } => run_portfolio_health(args),
        Command::Demo(args) => run_demo(args),
    }
}
