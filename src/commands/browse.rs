//! Browse command - Interactive explorer reading commands from stdin

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use std::io::{self, BufRead, Write};

use quran_explorer::audio::{AudioOutput, Transition};
use quran_explorer::config::Config;
use quran_explorer::quran::{Category, QuranSource, Translation};
use quran_explorer::session::{Session, View};

use super::render::{self, SurahView};
use super::utils;

const HELP: &str = "\
Commands:
  list                     Show surahs matching the current search and filter
  search [text]            Search by name, Arabic name or number (empty clears)
  filter <category>        all, mecca or medina
  filter juz <n>           Same as `juz <n>`
  juz <n>                  Show surahs in juz n (1-30)
  open <n>                 Open surah n
  verse <n>                Open verse n of the open surah
  back                     Return from a verse to its surah
  home                     Return to the surah list
  reciter <id>             Choose reciter (see `reciters`)
  reciters                 List reciters
  translation <lang>       en, bn or ur
  play [n]                 Surah view: full surah, or verse n
                           Verse view: this verse, or listed recording n
  stop                     Stop playback
  help                     Show this help
  quit                     Leave the explorer";

/// One line of input to the explorer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Help,
    Home,
    List,
    Search(String),
    Filter(Category, Option<u8>),
    Juz(u8),
    Open(u16),
    Verse(u32),
    Back,
    Reciter(String),
    Reciters,
    Translation(Translation),
    Play(Option<u32>),
    Stop,
    Quit,
}

impl BrowseCommand {
    /// Parse a line; blank lines yield `Ok(None)`
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "help" | "?" => Self::Help,
            "home" | "h" => Self::Home,
            "list" | "ls" => Self::List,
            "search" | "s" => Self::Search(rest.to_string()),
            "filter" | "f" => {
                let mut parts = rest.split_whitespace();
                let category = parts
                    .next()
                    .and_then(Category::parse)
                    .context("Usage: filter <all|mecca|medina|juz> [juz]")?;
                let juz = parts
                    .next()
                    .map(|n| n.parse::<u8>().context("Juz must be a number"))
                    .transpose()?;
                if juz.is_some() && category != Category::Juz {
                    anyhow::bail!("Only `filter juz` takes a juz number");
                }
                Self::Filter(category, juz)
            }
            "juz" => Self::Juz(number(rest, "juz <n>")?),
            "open" | "o" => Self::Open(number(rest, "open <surah>")?),
            "verse" | "v" => Self::Verse(number(rest, "verse <n>")?),
            "back" | "b" => Self::Back,
            "reciter" | "r" if !rest.is_empty() => Self::Reciter(rest.to_string()),
            "reciter" | "r" | "reciters" => Self::Reciters,
            "translation" | "t" => Self::Translation(
                Translation::parse(rest).context("Usage: translation <en|bn|ur>")?,
            ),
            "play" | "p" if rest.is_empty() => Self::Play(None),
            "play" | "p" => Self::Play(Some(number(rest, "play [n]")?)),
            "stop" => Self::Stop,
            "quit" | "exit" | "q" => Self::Quit,
            other => anyhow::bail!("Unknown command '{}'. Type `help` for a list", other),
        };
        Ok(Some(command))
    }
}

fn number<T: std::str::FromStr>(s: &str, usage: &str) -> Result<T> {
    s.parse().ok().with_context(|| format!("Usage: {}", usage))
}

/// Execute the browse command on stdin/stdout
pub fn execute(config: &Config) -> Result<()> {
    let client = utils::client(config)?;
    println!("Loading the Holy Quran...");
    let mut session = Session::load(
        client,
        utils::player_output(config),
        config.audio_url.clone(),
        &config.reciter,
        config.translation,
    )
    .context("Failed to load the surah list")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run(&mut session, stdin.lock(), &mut stdout)?;
    session.stop()?;
    Ok(())
}

/// Read commands until `quit` or end of input
pub fn run<S, O, R, W>(session: &mut Session<S, O>, input: R, out: &mut W) -> Result<()>
where
    S: QuranSource,
    O: AudioOutput,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", home(session))?;
    writeln!(out, "Type `help` for commands.")?;

    let mut lines = input.lines();
    loop {
        match session.tick() {
            Ok(true) => writeln!(out, "{}", "Playback finished.".dimmed())?,
            Ok(false) => {}
            Err(e) => writeln!(out, "{} {:#}", "Error:".red(), e)?,
        }
        write!(out, "quran> ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out)?;
            break;
        };
        let line = line?;

        let command = match BrowseCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                writeln!(out, "{} {}", "Error:".red(), e)?;
                continue;
            }
        };
        if command == BrowseCommand::Quit {
            break;
        }

        tracing::debug!(?command, "browse command");
        match apply(session, command) {
            Ok(output) => writeln!(out, "{}", output)?,
            Err(e) => writeln!(out, "{} {:#}", "Error:".red(), e)?,
        }
    }

    Ok(())
}

/// Apply one command and return what to print
fn apply<S, O>(session: &mut Session<S, O>, command: BrowseCommand) -> Result<String>
where
    S: QuranSource,
    O: AudioOutput,
{
    let output = match command {
        BrowseCommand::Help => HELP.to_string(),
        BrowseCommand::Home => {
            session.go_home();
            home(session)
        }
        BrowseCommand::List => surah_list(session),
        BrowseCommand::Search(query) => {
            session.set_query(&query);
            surah_list(session)
        }
        BrowseCommand::Filter(category, juz) => {
            if let Some(juz) = juz {
                session.set_juz(juz)?;
            }
            session.set_category(category);
            surah_list(session)
        }
        BrowseCommand::Juz(juz) => {
            session.set_juz(juz)?;
            surah_list(session)
        }
        BrowseCommand::Open(surah_no) => {
            session.open_surah(surah_no)?;
            current_view(session)
        }
        BrowseCommand::Verse(ayah_no) => {
            session.open_verse(ayah_no)?;
            current_view(session)
        }
        BrowseCommand::Back => {
            session.back_to_surah()?;
            current_view(session)
        }
        BrowseCommand::Reciter(id) => {
            let reciter = session.set_reciter(&id)?;
            format!("Reciter: {}", reciter.name)
        }
        BrowseCommand::Reciters => render::reciter_table(Some(session.reciter())).to_string(),
        BrowseCommand::Translation(translation) => {
            session.set_translation(translation);
            format!("Translation: {}", translation)
        }
        BrowseCommand::Play(target) => describe(play(session, target)?),
        BrowseCommand::Stop => {
            session.stop()?;
            "Stopped.".to_string()
        }
        BrowseCommand::Quit => String::new(),
    };
    Ok(output)
}

fn play<S, O>(session: &mut Session<S, O>, target: Option<u32>) -> Result<Transition>
where
    S: QuranSource,
    O: AudioOutput,
{
    let transition = match (session.view(), target) {
        (View::Home, _) => anyhow::bail!("Open a surah first (`open <n>`)"),
        (View::Surah, None) => session.play_surah()?,
        (View::Surah, Some(ayah_no)) => session.play_verse(ayah_no)?,
        (View::Verse, None) => {
            let ayah_no = session.verse().map(|v| v.ayah_no).unwrap_or(1);
            session.play_verse(ayah_no)?
        }
        (View::Verse, Some(index)) => session.play_track(index as usize)?,
    };
    Ok(transition)
}

fn describe(transition: Transition) -> String {
    match transition {
        Transition::Started(url) => format!("{} {}", "Playing".green(), url.dimmed()),
        Transition::Paused(url) => format!("{} {}", "Paused".yellow(), url.dimmed()),
    }
}

fn playing_url<S, O: AudioOutput>(session: &Session<S, O>) -> Option<&str>
where
    S: QuranSource,
{
    let state = session.player().state();
    state.current_url().filter(|_| state.is_active())
}

fn home<S: QuranSource, O: AudioOutput>(session: &Session<S, O>) -> String {
    format!(
        "{}\n{}\n\n{}",
        "The Noble Quran".bold(),
        render::catalog_stats(session.catalog()),
        surah_list(session)
    )
}

fn surah_list<S: QuranSource, O: AudioOutput>(session: &Session<S, O>) -> String {
    super::list::format_list(session.catalog(), session.filter(), None)
}

fn current_view<S: QuranSource, O: AudioOutput>(session: &Session<S, O>) -> String {
    let playing = playing_url(session);
    match session.view() {
        View::Home => home(session),
        View::Surah => match session.surah() {
            Some(surah) => render::format_surah(
                surah,
                &SurahView {
                    translation: session.translation(),
                    reciter: session.reciter(),
                    arabic_only: false,
                    playing,
                },
            ),
            None => home(session),
        },
        View::Verse => match session.verse() {
            Some(verse) => render::format_verse(verse, session.translation(), playing),
            None => home(session),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quran_explorer::audio::AudioError;
    use quran_explorer::quran::types::catalog_from_list;
    use quran_explorer::quran::{
        self, AudioTrack, Catalog, RevelationPlace, Surah, SurahInfo, Verse,
    };
    use std::collections::BTreeMap;
    use std::io::Cursor;
    use url::Url;

    fn info() -> SurahInfo {
        SurahInfo {
            surah_name: "Al-Kawthar".to_string(),
            surah_name_arabic: "الكوثر".to_string(),
            surah_name_arabic_long: None,
            surah_name_translation: Some("Abundance".to_string()),
            revelation_place: RevelationPlace::Mecca,
            total_ayah: 3,
        }
    }

    struct OneSurah;

    impl QuranSource for OneSurah {
        fn list_surahs(&self) -> quran::Result<Catalog> {
            Ok(catalog_from_list(vec![info()]))
        }

        fn get_surah(&self, surah_no: u16) -> quran::Result<Surah> {
            if surah_no != 1 {
                return Err(quran::Error::NotFound(format!("{surah_no}.json")));
            }
            Ok(Surah {
                info: info(),
                surah_no,
                audio: BTreeMap::from([(
                    "1".to_string(),
                    AudioTrack {
                        reciter: "Mishary Rashid Al Afasy".to_string(),
                        url: "https://audio.test/108.mp3".to_string(),
                        original_url: None,
                    },
                )]),
                arabic1: vec!["a".to_string(), "b".to_string(), "c".to_string()],
                arabic2: Vec::new(),
                english: vec!["x".to_string(), "y".to_string(), "z".to_string()],
                bengali: Vec::new(),
                urdu: Vec::new(),
            })
        }

        fn get_verse(&self, surah_no: u16, ayah_no: u32) -> quran::Result<Verse> {
            Ok(Verse {
                info: info(),
                surah_no,
                ayah_no,
                audio: BTreeMap::new(),
                arabic1: "verse text".to_string(),
                arabic2: String::new(),
                english: "verse translation".to_string(),
                bengali: String::new(),
                urdu: String::new(),
            })
        }
    }

    #[derive(Debug, Default)]
    struct SilentOutput;

    impl AudioOutput for SilentOutput {
        fn start(&mut self, _url: &str) -> std::result::Result<(), AudioError> {
            Ok(())
        }

        fn stop(&mut self) -> std::result::Result<(), AudioError> {
            Ok(())
        }

        fn is_finished(&mut self) -> std::result::Result<bool, AudioError> {
            Ok(false)
        }
    }

    /// Output whose process can never be checked on
    #[derive(Debug, Default)]
    struct LostOutput;

    impl AudioOutput for LostOutput {
        fn start(&mut self, _url: &str) -> std::result::Result<(), AudioError> {
            Ok(())
        }

        fn stop(&mut self) -> std::result::Result<(), AudioError> {
            Ok(())
        }

        fn is_finished(&mut self) -> std::result::Result<bool, AudioError> {
            Err(AudioError::Io(io::Error::other("lost track of player")))
        }
    }

    fn session() -> Session<OneSurah, SilentOutput> {
        session_with(SilentOutput)
    }

    fn session_with<O: AudioOutput>(output: O) -> Session<OneSurah, O> {
        Session::load(
            OneSurah,
            output,
            Url::parse("https://verses.test/").unwrap(),
            "1",
            Translation::English,
        )
        .unwrap()
    }

    fn run_script(script: &str) -> String {
        let mut session = session();
        let mut out = Vec::new();
        run(&mut session, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(BrowseCommand::parse("  ").unwrap(), None);
        assert_eq!(
            BrowseCommand::parse("open 2").unwrap(),
            Some(BrowseCommand::Open(2))
        );
        assert_eq!(
            BrowseCommand::parse("search  al baq ").unwrap(),
            Some(BrowseCommand::Search("al baq".to_string()))
        );
        assert_eq!(
            BrowseCommand::parse("filter juz 30").unwrap(),
            Some(BrowseCommand::Filter(Category::Juz, Some(30)))
        );
        assert_eq!(
            BrowseCommand::parse("FILTER meccan").unwrap(),
            Some(BrowseCommand::Filter(Category::Mecca, None))
        );
        assert_eq!(
            BrowseCommand::parse("play").unwrap(),
            Some(BrowseCommand::Play(None))
        );
        assert_eq!(
            BrowseCommand::parse("play 3").unwrap(),
            Some(BrowseCommand::Play(Some(3)))
        );
        assert_eq!(
            BrowseCommand::parse("reciter").unwrap(),
            Some(BrowseCommand::Reciters)
        );
        assert_eq!(
            BrowseCommand::parse("reciter 2").unwrap(),
            Some(BrowseCommand::Reciter("2".to_string()))
        );
        assert_eq!(
            BrowseCommand::parse("t bn").unwrap(),
            Some(BrowseCommand::Translation(Translation::Bengali))
        );
        assert_eq!(
            BrowseCommand::parse("exit").unwrap(),
            Some(BrowseCommand::Quit)
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(BrowseCommand::parse("open").is_err());
        assert!(BrowseCommand::parse("open two").is_err());
        assert!(BrowseCommand::parse("filter taif").is_err());
        assert!(BrowseCommand::parse("filter mecca 5").is_err());
        assert!(BrowseCommand::parse("translation fr").is_err());
        assert!(BrowseCommand::parse("dance").is_err());
    }

    #[test]
    fn test_run_navigates_and_plays() {
        let output = run_script("open 1\nplay\nplay\nverse 2\nback\nhome\nquit\n");
        assert!(output.contains("The Noble Quran"));
        assert!(output.contains("Surah 1 • 3 Verses • Mecca"));
        assert!(output.contains("Playing"));
        assert!(output.contains("Paused"));
        assert!(output.contains("verse translation"));
        assert!(output.contains("Total Verses: 3"));
    }

    #[test]
    fn test_run_reports_errors_and_continues() {
        let output = run_script("play\nopen 7\nverse 1\nbogus\nlist\n");
        assert!(output.contains("Open a surah first"));
        assert!(output.contains("not found"));
        assert!(output.contains("no surah is open"));
        assert!(output.contains("Unknown command 'bogus'"));
        assert!(output.contains("1 surahs found"));
    }

    #[test]
    fn test_run_filters_list() {
        let output = run_script("filter medina\nsearch kaw\nfilter all\n");
        assert!(output.contains("No surahs found matching \"\"\n"));
        assert!(output.contains("No surahs found matching \"kaw\"\n"));
        assert!(output.contains("1 surahs found"));
    }

    #[test]
    fn test_filter_with_juz_keeps_category() {
        let mut session = session();
        let mut out = Vec::new();
        let script = "filter mecca 5\nfilter medina\njuz 31\nfilter juz 0\n";
        run(&mut session, Cursor::new(script), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("Only `filter juz` takes a juz number"));
        assert!(output.contains("juz 31 is out of range (1-30)"));
        assert!(output.contains("juz 0 is out of range (1-30)"));
        assert_eq!(session.filter().category, Category::Medina);
        assert_eq!(session.filter().juz, 1);

        run(&mut session, Cursor::new("filter juz 30\n"), &mut Vec::new()).unwrap();
        assert_eq!(session.filter().category, Category::Juz);
        assert_eq!(session.filter().juz, 30);
    }

    #[test]
    fn test_playback_errors_do_not_end_session() {
        let mut session = session_with(LostOutput);
        let mut out = Vec::new();
        run(&mut session, Cursor::new("open 1\nplay\nlist\n"), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("lost track of player"));
        assert!(output.contains("1 surahs found"));
    }
}
