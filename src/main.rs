use std::io;

use clap::{
    CommandFactory, Parser,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use artistcli::{config, error, session::Session, spotify::SpotifyClient, success, utils};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Artist to look up; asked for interactively when omitted
    artist: Option<String>,

    /// Print shell completions and exit
    #[clap(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    config::load_env();

    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(shell, &mut cmd, name, &mut io::stdout());
        return;
    }

    let credentials = match config::credentials() {
        Ok(c) => c,
        Err(e) => error!("Cannot load credentials. Err: {}", e),
    };

    let client = SpotifyClient::new();

    let pb = utils::spinner("Fetching access token...");
    let token = client.get_token(&credentials).await;
    pb.finish_and_clear();
    let token = match token {
        Ok(t) => t,
        Err(e) => error!("Failed to fetch access token. Err: {}", e),
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let artist_name = match cli.artist {
        Some(name) => name,
        None => match artistcli::session::prompt(&mut input, &mut out, "Write artist name: ") {
            Ok(Some(name)) => name,
            Ok(None) => return,
            Err(e) => error!("Cannot read artist name. Err: {}", e),
        },
    };

    let pb = utils::spinner("Searching artist...");
    let search = client.search_artist(&token, &artist_name).await;
    pb.finish_and_clear();
    let artist = match search.and_then(|res| res.into_first_artist(&artist_name)) {
        Ok(a) => a,
        Err(e) => error!("Artist search failed. Err: {}", e),
    };

    let mut session = Session::new(&client, token, artist);
    if let Err(e) = session.run(&mut input, &mut out).await {
        error!("Session aborted. Err: {}", e);
    }

    success!("Bye!");
}
