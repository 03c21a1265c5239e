use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use kanjideck_anki::{Card, CardRenderer, write_deck};
use kanjideck_core::edict::Edict;
use kanjideck_core::examples::ExampleResolver;
use kanjideck_core::styler::Styler;
use kanjideck_core::wordfreq::WordFrequency;
use kanjideck_kanjidic::KanjiCatalog;

mod stats;
mod targets;

use self::targets::TargetSetBuilder;

/// Builds an Anki-importable deck of kanji study cards.
#[derive(Parser)]
#[command(name = "kanjideck")]
struct Args {
    /// File listing the kanji to make cards for
    #[arg(short, long)]
    input: PathBuf,

    /// Word frequency list
    #[arg(long, default_value = "dictionaries/wordfreq.txt")]
    wordfreq: PathBuf,

    /// EDICT dictionary file
    #[arg(long, default_value = "dictionaries/edict.txt")]
    edict: PathBuf,

    /// kanjidic2 XML file
    #[arg(long, default_value = "dictionaries/kanjidic2.xml")]
    kanjidic: PathBuf,

    /// Output deck file, rewritten each run
    #[arg(short, long, default_value = "kanjideck.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let styler = Styler::new();

    let wordfreq =
        WordFrequency::load_from_file(&args.wordfreq).context("loading word frequency list")?;
    let edict =
        Edict::load_from_file(&args.edict, styler.clone()).context("loading dictionary")?;
    let catalog =
        KanjiCatalog::load_from_file(&args.kanjidic, &styler).context("loading kanji catalog")?;
    let raw_targets = fs::read_to_string(&args.input)
        .with_context(|| format!("reading target kanji from {}", args.input.display()))?;

    let resolver = ExampleResolver::new(&wordfreq, &edict);
    let builder = TargetSetBuilder::new(&catalog, &resolver);
    let kanjilist = builder.build(&raw_targets);
    tracing::info!("resolved {} kanji", kanjilist.len());

    stats::log_example_frequencies(&kanjilist);

    let renderer = CardRenderer::new();
    let cards: Vec<Card> = kanjilist.iter().map(|kanji| renderer.render(kanji)).collect();
    write_deck(&args.output, &cards).context("writing deck file")?;
    tracing::info!("wrote {} cards to {}", cards.len(), args.output.display());

    Ok(())
}
