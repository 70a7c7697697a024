//! Interactive commands understood by `mspctl`.

use anyhow::{Result, anyhow, bail};
use mspproxy::Proxy;
use mspsource::{ProviderAdapter, SearchKind, SearchQuery};
use std::io::Write;

pub const HELP: &str = "\
commands:
  tracks|artist|album|playlist|stations|category|genre|podcast|similar <query>
  next | prev | get [n] | remove | clear
  mode NORMAL|SHUFFLE | filter ALLOW|DISALLOW
  queue | json | now | refresh | help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Enqueue(SearchQuery),
    Next,
    Prev,
    Get(Option<usize>),
    Mode(String),
    Filter(String),
    Remove,
    Clear,
    Queue,
    Json,
    Now,
    Refresh,
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let search = |kind: SearchKind| -> Result<Self> {
            if rest.is_empty() {
                bail!("'{word}' needs a query");
            }
            Ok(Command::Enqueue(SearchQuery::new(kind, rest)))
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "tracks" => search(SearchKind::Tracks)?,
            "artist" => search(SearchKind::Artist)?,
            "album" => search(SearchKind::Album)?,
            "playlist" => search(SearchKind::Playlist)?,
            "stations" => search(SearchKind::Stations)?,
            "category" => search(SearchKind::Category)?,
            "genre" => search(SearchKind::Genre)?,
            "podcast" => search(SearchKind::Podcast)?,
            "similar" => search(SearchKind::RecommendationsByTrack)?,
            "next" | "n" => Command::Next,
            "prev" | "p" => Command::Prev,
            "get" if rest.is_empty() => Command::Get(None),
            "get" => Command::Get(Some(
                rest.parse()
                    .map_err(|_| anyhow!("'{rest}' is not a queue position"))?,
            )),
            "mode" => Command::Mode(rest.to_string()),
            "filter" => Command::Filter(rest.to_string()),
            "remove" => Command::Remove,
            "clear" => Command::Clear,
            "queue" | "q" => Command::Queue,
            "json" => Command::Json,
            "now" => Command::Now,
            "refresh" => Command::Refresh,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => bail!("unknown command '{other}' (try 'help')"),
        };
        Ok(Some(command))
    }
}

fn print_url(out: &mut impl Write, url: &str) -> Result<()> {
    if url.is_empty() {
        writeln!(out, "(end of queue)")?;
    } else {
        writeln!(out, "{url}")?;
    }
    Ok(())
}

/// Runs `command` against `proxy`, printing results to `out`.
///
/// Returns `false` once the session should end.
pub fn execute<A: ProviderAdapter>(
    proxy: &mut Proxy<A>,
    command: Command,
    out: &mut impl Write,
) -> Result<bool> {
    match command {
        Command::Enqueue(query) => {
            let admitted = proxy.enqueue(query)?;
            writeln!(out, "queued {admitted} item(s), {} in queue", proxy.length())?;
        }
        Command::Next => print_url(out, &proxy.next_url()?)?,
        Command::Prev => print_url(out, &proxy.prev_url()?)?,
        Command::Get(position) => print_url(out, &proxy.get_url(position)?)?,
        Command::Mode(name) => {
            proxy.set_play_mode(&name)?;
            writeln!(out, "mode {}", proxy.mode())?;
        }
        Command::Filter(name) => {
            proxy.set_explicit_track_filter(&name)?;
            writeln!(out, "filter {}, {} in queue", proxy.explicit_filter(), proxy.length())?;
        }
        Command::Remove => match proxy.remove_current_url() {
            Some(item) => writeln!(out, "removed {} - {}", item.artist, item.title)?,
            None => writeln!(out, "nothing to remove")?,
        },
        Command::Clear => {
            proxy.clear_queue();
            writeln!(out, "queue cleared")?;
        }
        Command::Queue => {
            for line in proxy.print_queue() {
                writeln!(out, "{line}")?;
            }
        }
        Command::Json => writeln!(out, "{}", proxy.snapshot().to_json()?)?,
        Command::Now | Command::Refresh => {
            if command == Command::Refresh {
                proxy.refresh_now_playing()?;
            }
            if proxy.now_playing().is_none() {
                writeln!(out, "nothing playing")?;
            } else {
                writeln!(
                    out,
                    "[{}/{}] {} - {}",
                    proxy.queue_position_one_based(),
                    proxy.length(),
                    proxy.current_artist(),
                    proxy.current_title()
                )?;
                let album = proxy.current_album();
                if !album.is_empty() {
                    writeln!(out, "  from {album}")?;
                }
                let description = proxy.current_description();
                if !description.is_empty() {
                    writeln!(out, "  {description}")?;
                }
            }
        }
        Command::Help => writeln!(out, "{HELP}")?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}
