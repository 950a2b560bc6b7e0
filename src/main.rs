use anyhow::Result;
use clap::{crate_version, App as ClapApp, Arg};
use form_manager_tui::app::App;
use form_manager_tui::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = ClapApp::new("form-manager")
        .version(crate_version!())
        .about("Browse, search and edit form records served by a REST API")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml (default: ~/.config/form-manager-tui)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("url")
                .short("u")
                .long("url")
                .value_name("URL")
                .help("Collection endpoint, overriding the configured api_url")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(url) = matches.value_of("url") {
        config.api_url = url.to_string();
    }

    App::start(config).await
}
