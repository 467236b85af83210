//! Interactive command loop for one resolved artist.
//!
//! A [`Session`] is created once the startup search found an artist. It reads
//! commands line by line and answers them, fetching top tracks lazily and
//! keeping them for the rest of the session.
//!
//! # Commands
//!
//! - `id` - print the artist id
//! - `top_track` - print the most popular track or the whole top-tracks list
//! - `genres` - print the artist's genres, capitalized
//! - `markets` - print the countries the most popular track is available in
//! - `exit` - leave the session
//!
//! Any other input is ignored and the prompt is shown again.

use std::io::{BufRead, Write};

use crate::{
    errors::Result,
    spotify::SpotifyClient,
    types::{Artist, Track},
    utils,
};

pub const PROMPT: &str = ">>> ";

const MENU: &str = "
    Write:

    'id' - get id of the artist
    'top_track' - to get top track/s
    'genres' - to get genres of artist
    'markets' - to get available markets of the most popular song
    'exit' - to exit app
";

const TOP_TRACK_MENU: &str = "
    Write:

    one - to get one most popular song
    set - to get set of most popular songs
    back - to go back to choices
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Id,
    TopTrack,
    Genres,
    Markets,
    Exit,
}

impl Command {
    /// Parses one input line. Only the exact command words are recognised.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "id" => Some(Command::Id),
            "top_track" => Some(Command::TopTrack),
            "genres" => Some(Command::Genres),
            "markets" => Some(Command::Markets),
            "exit" => Some(Command::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopTrackChoice {
    One,
    Set,
}

impl TopTrackChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "one" => Some(TopTrackChoice::One),
            "set" => Some(TopTrackChoice::Set),
            _ => None,
        }
    }
}

pub struct Session<'a> {
    client: &'a SpotifyClient,
    token: String,
    artist: Artist,
    tracks: Option<Vec<Track>>,
}

impl<'a> Session<'a> {
    pub fn new(client: &'a SpotifyClient, token: String, artist: Artist) -> Self {
        Self {
            client,
            token,
            artist,
            tracks: None,
        }
    }

    pub fn artist(&self) -> &Artist {
        &self.artist
    }

    /// Top tracks fetched so far, `None` until a command needed them.
    pub fn tracks(&self) -> Option<&[Track]> {
        self.tracks.as_deref()
    }

    /// Runs the command loop until `exit` or end of input.
    ///
    /// Errors from the Spotify API are returned to the caller and end the
    /// session.
    pub async fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "_____ Information found about {} _____",
            self.artist.name
        )?;
        writeln!(out, "{}", MENU)?;

        while let Some(line) = prompt(input, out, PROMPT)? {
            match Command::parse(&line) {
                Some(Command::Exit) => return Ok(()),
                Some(command) => self.dispatch(command, input, out).await?,
                None => log::debug!("ignoring unknown command {:?}", line),
            }
        }

        log::debug!("end of input, leaving session");
        Ok(())
    }

    async fn dispatch<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        input: &mut R,
        out: &mut W,
    ) -> Result<()> {
        match command {
            Command::Id => writeln!(out, "{}", self.artist.id)?,
            Command::Genres => {
                for genre in &self.artist.genres {
                    writeln!(out, "{}", utils::capitalize(genre))?;
                }
            }
            Command::TopTrack => self.top_track(input, out).await?,
            Command::Markets => self.markets(out).await?,
            Command::Exit => {}
        }

        Ok(())
    }

    async fn top_track<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<()> {
        let artist_name = self.artist.name.clone();
        let tracks = self.tracks_or_fetch().await?;

        writeln!(out, "{}", TOP_TRACK_MENU)?;
        let choice = prompt(input, out, PROMPT)?;

        match choice.as_deref().and_then(TopTrackChoice::parse) {
            Some(TopTrackChoice::One) => match tracks.first() {
                Some(track) => writeln!(out, "{}", track.name)?,
                None => writeln!(out, "No tracks found for {}", artist_name)?,
            },
            Some(TopTrackChoice::Set) => {
                for (idx, track) in tracks.iter().enumerate() {
                    writeln!(out, "{}) {}", idx + 1, track.name)?;
                }
            }
            None => {}
        }

        Ok(())
    }

    async fn markets<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let first_id = self.tracks_or_fetch().await?.first().map(|t| t.id.clone());
        let Some(track_id) = first_id else {
            writeln!(out, "No tracks found for {}", self.artist.name)?;
            return Ok(());
        };

        let pb = utils::spinner("Fetching available markets...");
        let markets = self.client.get_markets(&track_id, &self.token).await;
        pb.finish_and_clear();

        for name in utils::market_names(&markets?) {
            writeln!(out, "{}", name)?;
        }

        Ok(())
    }

    async fn tracks_or_fetch(&mut self) -> Result<&[Track]> {
        if self.tracks.is_none() {
            let pb = utils::spinner("Fetching top tracks...");
            let fetched = self.client.top_tracks(&self.artist.id, &self.token).await;
            pb.finish_and_clear();
            self.tracks = Some(fetched?);
        }

        Ok(self.tracks.as_deref().unwrap_or_default())
    }
}

/// Writes `text`, then reads one line without its line ending.
///
/// Returns `None` once the input is exhausted.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}
