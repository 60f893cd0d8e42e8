use std::io::{self, BufRead, Read, Write};

use unicode_width::UnicodeWidthStr;

use emoji_core::settings::settings;
use emoji_core::{explain_to_emoji, translate_with, Direction, MatchOptions, Segment};
use emoji_session::{DictionaryLoader, TranslateOutcome, TranslatorSession};

use super::{die, open_index};

fn read_text(text: Option<String>) -> String {
    match text {
        Some(t) => t,
        None => {
            let mut buf = String::new();
            die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
            buf
        }
    }
}

pub fn translate_cmd(dict: Option<&str>, text: Option<String>, reverse: bool) {
    let index = open_index(dict);
    let text = read_text(text);
    let direction = if reverse {
        Direction::ToText
    } else {
        Direction::ToEmoji
    };
    let opts = MatchOptions::from(&settings().matching);
    print!("{}", translate_with(&text, direction, &index, &opts));
    if !text.ends_with('\n') {
        println!();
    }
}

pub fn explain_cmd(dict: Option<&str>, text: Option<String>, json: bool) {
    let index = open_index(dict);
    let text = read_text(text);
    let opts = MatchOptions::from(&settings().matching);
    let segments = explain_to_emoji(&text, &index, &opts);
    if json {
        let out = die!(
            serde_json::to_string_pretty(&segments),
            "Error serializing segments: {}"
        );
        println!("{out}");
    } else {
        print!("{}", format_segments(&text, &segments));
    }
}

/// Format segments as an aligned table, one segment per line.
pub fn format_segments(text: &str, segments: &[Segment]) -> String {
    const PAD_WIDTH: usize = 20;
    let mut out = format!(
        "=== Segments for {:?} ({} chars, {} segments) ===\n",
        text,
        text.chars().count(),
        segments.len()
    );
    for seg in segments {
        let label = format!("{:?}", seg.source);
        let width = UnicodeWidthStr::width(label.as_str());
        let padded = if width < PAD_WIDTH {
            format!("{}{}", label, " ".repeat(PAD_WIDTH - width))
        } else {
            label
        };
        let kind = format!("{:?}", seg.kind);
        out.push_str(&format!(
            "  [{:>3},{:>3}) {} {:<9} -> {}\n",
            seg.start, seg.end, padded, kind, seg.output
        ));
    }
    let translated: String = segments.iter().map(|s| s.output.as_str()).collect();
    out.push_str(&format!("\n  result: {}\n", translated));
    out
}

/// Line-oriented session: each line is translated in the current direction.
pub fn repl_cmd(dict: Option<&str>) {
    let path = crate::resolve_dict_path(dict);
    let loader = die!(
        DictionaryLoader::spawn(path, settings().index.collision),
        "Error starting dictionary loader: {}"
    );
    let mut session = TranslatorSession::with_loader(loader);

    println!("Emoji translator. Commands: :swap  :clear  :show  :quit");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt(&session, &mut stdout);

    for line in stdin.lock().lines() {
        let line = die!(line, "Error reading stdin: {}");
        match line.trim() {
            ":quit" | ":q" => break,
            ":swap" => {
                session.swap_direction();
                println!("direction: {:?}", session.direction());
                if !session.input().is_empty() {
                    println!("input:  {}", session.input());
                }
            }
            ":clear" => session.clear(),
            ":show" => show(&session),
            _ => {
                session.set_input(line);
                match session.translate() {
                    TranslateOutcome::Translated => println!("{}", session.output()),
                    TranslateOutcome::EmptyInput => {}
                    TranslateOutcome::NotReady => {
                        println!("(loading dictionary...)");
                        session.wait_ready();
                        session.translate();
                        println!("{}", session.output());
                    }
                }
            }
        }
        prompt(&session, &mut stdout);
    }
}

fn show(session: &TranslatorSession) {
    println!("direction: {:?}", session.direction());
    println!("input:     {}", session.input());
    println!("output:    {}", session.output());
    match session.index() {
        Some(index) => {
            let stats = index.stats();
            println!(
                "dictionary: {} records, {} words, {} phrases, {} glyphs",
                stats.records, stats.words, stats.phrases, stats.glyphs
            );
        }
        None => println!("dictionary: loading"),
    }
}

fn prompt(session: &TranslatorSession, stdout: &mut io::Stdout) {
    print!("{}\n> ", session.placeholder());
    let _ = stdout.flush();
}
