use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "posterkit", version)]
struct Cli {
    /// Log compositing decisions to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Composite a logo onto a poster and write a JPEG.
    Composite(CompositeArgs),
    /// Print the text-to-image prompt for a poster brief.
    Prompt(PromptArgs),
    /// Run the full pipeline with an externally generated poster image.
    Produce(ProduceArgs),
    /// List the supported platforms and formats.
    Formats,
}

#[derive(Parser, Debug)]
struct CompositeArgs {
    /// Poster image (any format the decoder understands).
    #[arg(long)]
    base: PathBuf,

    /// Logo image drawn on top of the poster.
    #[arg(long)]
    overlay: PathBuf,

    /// Free-text placement, e.g. "Bottom right corner".
    #[arg(long, default_value = "bottom right")]
    placement: String,

    /// Output JPEG path.
    #[arg(long, default_value = posterkit::DOWNLOAD_FILE_NAME)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PromptArgs {
    /// Poster brief JSON.
    #[arg(long)]
    form: PathBuf,
}

#[derive(Parser, Debug)]
struct ProduceArgs {
    /// Poster brief JSON.
    #[arg(long)]
    form: PathBuf,

    /// Poster image returned by the external generator.
    #[arg(long)]
    poster: PathBuf,

    /// Logo image; overrides `style.logoImage` from the brief.
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Output JPEG path.
    #[arg(long, default_value = posterkit::DOWNLOAD_FILE_NAME)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Composite(args) => cmd_composite(args),
        Command::Prompt(args) => cmd_prompt(args),
        Command::Produce(args) => cmd_produce(args),
        Command::Formats => cmd_formats(),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_form_json(path: &Path) -> anyhow::Result<posterkit::FormData> {
    let f = File::open(path).with_context(|| format!("open poster brief '{}'", path.display()))?;
    let r = BufReader::new(f);
    let form: posterkit::FormData =
        serde_json::from_reader(r).with_context(|| "parse poster brief JSON")?;
    Ok(form)
}

fn read_image(path: &Path) -> anyhow::Result<posterkit::ImageSource> {
    let bytes = std::fs::read(path).with_context(|| format!("read image '{}'", path.display()))?;
    Ok(posterkit::ImageSource::from_bytes(bytes))
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_composite(args: CompositeArgs) -> anyhow::Result<()> {
    let request = posterkit::CompositeRequest::new(
        read_image(&args.base)?,
        read_image(&args.overlay)?,
        args.placement,
    );
    let result = posterkit::composite(request)?;

    let layout = result.overlay();
    eprintln!(
        "logo {:?}: {}x{} at ({}, {})",
        layout.placement, layout.size.width, layout.size.height, layout.anchor.x, layout.anchor.y
    );
    write_output(&args.out, result.jpeg_bytes())
}

fn cmd_prompt(args: PromptArgs) -> anyhow::Result<()> {
    let form = read_form_json(&args.form)?;
    print!("{}", posterkit::build_prompt(&form));
    Ok(())
}

fn cmd_produce(args: ProduceArgs) -> anyhow::Result<()> {
    let mut form = read_form_json(&args.form)?;

    if let Some(logo_path) = &args.logo {
        let bytes = std::fs::read(logo_path)
            .with_context(|| format!("read logo '{}'", logo_path.display()))?;
        let mime = image::guess_format(&bytes)
            .with_context(|| format!("detect logo format '{}'", logo_path.display()))?
            .to_mime_type();
        form.style.logo_image = Some(posterkit::encode_data_uri(mime, &bytes));
    }

    let generator = posterkit::StaticPosterGenerator::new(read_image(&args.poster)?);
    let output = posterkit::produce_poster(&form, &generator)?;

    let bytes = output
        .image
        .encoded_bytes()
        .context("read finished poster bytes")?;
    write_output(&args.out, &bytes)
}

fn cmd_formats() -> anyhow::Result<()> {
    for platform in posterkit::PLATFORMS {
        println!("{}", platform.name);
        for f in platform.formats {
            println!(
                "  {:<22} {:>4}x{:<4} {}",
                f.name, f.width, f.height, f.aspect_ratio
            );
        }
    }
    Ok(())
}
