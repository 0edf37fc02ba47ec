use aeai_cli::{CliArgs, SiteApp};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let app = SiteApp::from_args(&args)?;
    app.run(args).await?;
    Ok(())
}
