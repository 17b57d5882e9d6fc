use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use ppdeck::{BlobHandle, BlobStore as _, MemoryBlobStore, SlideRecord, TextRole};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};

#[derive(Parser, Debug)]
#[command(name = "ppdeck", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a one-slide default deck JSON.
    New(NewArgs),
    /// Bundle a deck JSON and its files into a `.ppproj` archive.
    Pack(PackArgs),
    /// Extract a `.ppproj` archive into a deck JSON plus asset files.
    Unpack(UnpackArgs),
    /// Print archive metadata without extracting.
    Inspect(InspectArgs),
    /// Print each slide's resolved text placement.
    Layout(LayoutArgs),
}

#[derive(Parser, Debug)]
struct NewArgs {
    /// Output deck JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PackArgs {
    /// Input deck JSON. `customImage` values are paths relative to it.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Background audio file; overrides the deck's `audio` field.
    #[arg(long)]
    audio: Option<PathBuf>,

    /// Output `.ppproj` path.
    #[arg(long)]
    out: PathBuf,

    /// Store entries uncompressed.
    #[arg(long)]
    stored: bool,
}

#[derive(Parser, Debug)]
struct UnpackArgs {
    /// Input `.ppproj` archive.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory (created if missing).
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct InspectArgs {
    /// Input `.ppproj` archive.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct LayoutArgs {
    /// Input deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Rendered canvas width in pixels.
    #[arg(long, default_value_t = 1280.0)]
    viewport_width: f64,
}

/// On-disk deck: slides plus an optional audio file path.
#[derive(Debug, Default, serde::Serialize, serde::Deserialize)]
struct DeckFile {
    slides: Vec<SlideRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    audio: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::New(args) => cmd_new(args),
        Command::Pack(args) => cmd_pack(args),
        Command::Unpack(args) => cmd_unpack(args),
        Command::Inspect(args) => cmd_inspect(args),
        Command::Layout(args) => cmd_layout(args),
    }
}

fn read_deck_json(path: &Path) -> anyhow::Result<DeckFile> {
    let f = File::open(path).with_context(|| format!("open deck '{}'", path.display()))?;
    let deck: DeckFile = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse deck JSON '{}'", path.display()))?;
    anyhow::ensure!(!deck.slides.is_empty(), "deck '{}' has no slides", path.display());
    Ok(deck)
}

fn write_deck_json(path: &Path, deck: &DeckFile) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(deck).context("encode deck JSON")?;
    std::fs::write(path, json).with_context(|| format!("write deck '{}'", path.display()))
}

fn cmd_new(args: NewArgs) -> anyhow::Result<()> {
    let deck = DeckFile {
        slides: ppdeck::SlideDeck::new().into_vec(),
        audio: None,
    };
    write_deck_json(&args.out, &deck)?;
    println!("wrote {}", args.out.display());
    Ok(())
}

/// Whether a deck reference names a file next to the deck rather than a URL or handle.
fn is_file_ref(reference: &str) -> bool {
    !reference.is_empty()
        && !reference.contains("://")
        && !reference.starts_with("data:")
        && !reference.starts_with(ppdeck::BLOB_PREFIX)
}

fn load_file(store: &mut MemoryBlobStore, root: &Path, rel: &str) -> anyhow::Result<BlobHandle> {
    let rel = ppdeck::normalize_rel_path(rel)?;
    let path = root.join(&rel);
    let bytes = std::fs::read(&path).with_context(|| format!("read asset '{}'", path.display()))?;
    let media = ppdeck::sniff_media(&bytes);
    Ok(store.create(bytes, Some(media.mime))?)
}

fn cmd_pack(args: PackArgs) -> anyhow::Result<()> {
    let deck = read_deck_json(&args.in_path)?;
    let root = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    let mut store = MemoryBlobStore::new();

    let mut slides = deck.slides;
    for slide in &mut slides {
        if let Some(rel) = slide.custom_image.clone().filter(|r| is_file_ref(r)) {
            let handle = load_file(&mut store, root, &rel)
                .with_context(|| format!("slide '{}'", slide.id))?;
            slide.custom_image = Some(handle.into_string());
        }
    }

    let audio = match (&args.audio, deck.audio.as_deref().filter(|r| is_file_ref(r))) {
        (Some(path), _) => {
            let bytes =
                std::fs::read(path).with_context(|| format!("read audio '{}'", path.display()))?;
            let mime = ppdeck::sniff_media(&bytes).mime;
            Some(store.create(bytes, Some(mime))?)
        }
        (None, Some(rel)) => Some(load_file(&mut store, root, rel)?),
        (None, None) => None,
    };

    let mut opts = ppdeck::ArchiveOpts::default();
    if args.stored {
        opts.compression = ppdeck::Compression::Stored;
    }
    if let Some(name) = args.audio.as_deref().and_then(Path::file_name) {
        opts.audio_display_name = name.to_string_lossy().into_owned();
    }

    let bytes = ppdeck::serialize_project(
        &slides,
        audio.as_ref().map(BlobHandle::as_str),
        &store,
        &opts,
    )?;
    std::fs::write(&args.out, &bytes)
        .with_context(|| format!("write archive '{}'", args.out.display()))?;
    println!(
        "packed {} slides, {} assets, {} bytes -> {}",
        slides.len(),
        store.len(),
        bytes.len(),
        args.out.display()
    );
    Ok(())
}

fn cmd_unpack(args: UnpackArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read archive '{}'", args.in_path.display()))?;
    let mut store = MemoryBlobStore::new();
    let loaded = ppdeck::deserialize_project(&bytes, &mut store)?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("create output dir '{}'", args.out.display()))?;
    let write_blob = |handle: &BlobHandle, stem: &str| -> anyhow::Result<String> {
        let data = store.read(handle)?;
        let name = format!("{stem}.{}", ppdeck::sniff_media(&data).extension);
        let path = args.out.join(&name);
        std::fs::write(&path, data.as_slice())
            .with_context(|| format!("write asset '{}'", path.display()))?;
        Ok(name)
    };

    let mut slides = loaded.slides.clone();
    for (i, slide) in slides.iter_mut().enumerate() {
        if let Some(handle) = slide.custom_image.as_deref().and_then(BlobHandle::parse) {
            slide.custom_image = match write_blob(&handle, &format!("slide_{}", i + 1)) {
                Ok(name) => Some(name),
                Err(e) => {
                    tracing::warn!(slide = %slide.id, error = %e, "skipping slide image");
                    None
                }
            };
        }
    }
    let audio = loaded
        .audio
        .as_ref()
        .map(|h| write_blob(h, "audio"))
        .transpose()?;

    let deck_path = args.out.join("deck.json");
    write_deck_json(&deck_path, &DeckFile { slides, audio })?;
    println!(
        "unpacked {} slides (format {}) -> {}",
        loaded.slides.len(),
        loaded.version,
        deck_path.display()
    );
    Ok(())
}

fn cmd_inspect(args: InspectArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.in_path)
        .with_context(|| format!("read archive '{}'", args.in_path.display()))?;
    let summary = ppdeck::inspect_project(&bytes)?;
    let m = &summary.manifest;

    println!("version: {}", m.version);
    println!("timestamp: {}", m.timestamp);
    println!("slides: {}", m.slides.len());
    if let Some(audio) = &m.audio {
        println!("audio: {} ({})", audio.path, audio.display_name);
    }
    println!(
        "total auto-advance: {}s",
        ppdeck::total_presentation_time(&m.slides)
    );
    for e in &summary.entries {
        println!("  {:>10} {:>10}  {}", e.size, e.compressed_size, e.name);
    }
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let deck = read_deck_json(&args.in_path)?;
    let scale = ppdeck::compute_scale(args.viewport_width);
    println!("scale: {scale:.4}");
    for (i, slide) in deck.slides.iter().enumerate() {
        for role in TextRole::ALL {
            let p = ppdeck::resolve_placement(slide, role);
            let px = p.to_viewport(scale);
            println!(
                "slide {} [{}] {:<8} virtual ({:.0}, {:.0}) {:.0}x{:.0}  px ({:.1}, {:.1}) {:.1}x{:.1}",
                i + 1,
                slide.id,
                role.prefix(),
                p.position.x,
                p.position.y,
                p.width,
                p.height,
                px.x0,
                px.y0,
                px.width(),
                px.height(),
            );
        }
    }
    Ok(())
}
