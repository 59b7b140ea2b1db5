//! Maze Panel CLI
//!
//! Usage:
//!   maze-panel [OPTIONS] [FILE]
//!   maze-panel --code <HEX> [OPTIONS]
//!
//! Options:
//!   -m, --mode <MODE>        filled, outline or bricks
//!   -d, --dimensions <FILE>  Panel dimensions (TOML format)
//!   -p, --palette <FILE>     Color palette (TOML format)
//!   --check                  Report design issues instead of rendering
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use maze_panel::grid::DEFAULT_SIZE;
use maze_panel::{
    decode, encode, parse_grid, render_with_issues, Band, Engraving, Grid, Palette,
    PanelDimensions, RenderMode, RenderOptions, SvgConfig,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Mode {
    /// Solid preview
    Filled,
    /// Cut lines only
    Outline,
    /// Studded brick preview
    Bricks,
}

impl From<Mode> for RenderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Filled => RenderMode::Filled,
            Mode::Outline => RenderMode::Outline,
            Mode::Bricks => RenderMode::Bricks,
        }
    }
}

#[derive(Parser)]
#[command(name = "maze-panel")]
#[command(about = "Render maze panel grids to fabrication SVG")]
struct Cli {
    /// Text grid file (reads from stdin if neither FILE nor --code is given)
    input: Option<PathBuf>,

    /// Grid as a hex code
    #[arg(short, long, conflicts_with = "input")]
    code: Option<String>,

    /// Side length of the grid decoded from --code
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Render mode
    #[arg(short, long, value_enum, default_value = "filled")]
    mode: Mode,

    /// Scale factor for the document size
    #[arg(short, long, default_value_t = 1.0)]
    zoom: f64,

    /// Highlight design issues in the drawing
    #[arg(long)]
    show_issues: bool,

    /// Refuse to render a design with issues
    #[arg(long)]
    validate: bool,

    /// Engraving along the top band
    #[arg(long)]
    top: Option<String>,

    /// Engraving along the right band
    #[arg(long)]
    right: Option<String>,

    /// Engraving along the bottom band
    #[arg(long)]
    bottom: Option<String>,

    /// Engraving along the left band
    #[arg(long)]
    left: Option<String>,

    /// Outline the engraving in the band containing border cell ROW,COL
    #[arg(long, value_name = "ROW,COL", value_parser = parse_cell)]
    select: Option<(usize, usize)>,

    /// Panel dimensions file (TOML format)
    #[arg(short, long)]
    dimensions: Option<PathBuf>,

    /// Color palette file (TOML format)
    #[arg(short, long)]
    palette: Option<PathBuf>,

    /// Palette family for empty cells in brick mode
    #[arg(long, default_value = "plate")]
    base_plate: String,

    /// Write the SVG without indentation
    #[arg(long)]
    compact: bool,

    /// Print the grid's hex code and exit
    #[arg(long)]
    encode: bool,

    /// List design issues and exit (status 1 if any)
    #[arg(long)]
    check: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // If no input at all and stdin is a terminal (interactive), show intro help
    if cli.input.is_none() && cli.code.is_none() && io::stdin().is_terminal() {
        print_intro();
        return;
    }

    let grid = load_grid(&cli);

    if cli.encode {
        println!("{}", encode(&grid));
        return;
    }

    let dimensions = match &cli.dimensions {
        Some(path) => match PanelDimensions::from_file(path) {
            Ok(d) => d,
            Err(e) => {
                eprintln!("Error loading dimensions '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => PanelDimensions::default(),
    };

    let palette = match &cli.palette {
        Some(path) => match Palette::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading palette '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Palette::default(),
    };

    let engravings = collect_engravings(&cli, grid.size());
    let selected = cli.select.and_then(|(row, col)| {
        let band = Band::at(row, col, grid.size())?;
        let target = Engraving::in_band("", band, grid.size());
        engravings
            .iter()
            .position(|e| (e.row, e.col) == (target.row, target.col))
    });

    let options = RenderOptions::new()
        .with_mode(cli.mode.into())
        .with_zoom(cli.zoom)
        .with_show_issues(cli.show_issues)
        .with_validate_design(cli.validate)
        .with_selected_engraving(selected)
        .with_base_plate(cli.base_plate.clone())
        .with_dimensions(dimensions)
        .with_palette(palette)
        .with_svg(SvgConfig::new().with_pretty_print(!cli.compact));

    let (svg, issues) = render_with_issues(&grid, &engravings, &options);

    if cli.check {
        for issue in &issues {
            println!("{}", issue);
        }
        if !issues.is_empty() {
            std::process::exit(1);
        }
        return;
    }

    if cli.validate && !issues.is_empty() {
        for issue in &issues {
            eprintln!("Error: {}", issue);
        }
        std::process::exit(1);
    }

    tracing::info!(issues = issues.len(), "rendered panel");
    println!("{}", svg);
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_grid(cli: &Cli) -> Grid {
    if let Some(code) = &cli.code {
        return match decode(code, cli.size) {
            Ok(grid) => grid,
            Err(e) => {
                eprintln!("Error decoding grid code '{}': {}", code, e);
                std::process::exit(1);
            }
        };
    }

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    match parse_grid(&source) {
        Ok(grid) => grid,
        Err(e) => {
            eprint!("{}", e.format(&source, &filename));
            std::process::exit(1);
        }
    }
}

fn collect_engravings(cli: &Cli, size: usize) -> Vec<Engraving> {
    [
        (&cli.top, Band::Top),
        (&cli.right, Band::Right),
        (&cli.bottom, Band::Bottom),
        (&cli.left, Band::Left),
    ]
    .into_iter()
    .filter_map(|(text, band)| {
        text.as_deref()
            .map(|text| Engraving::in_band(text, band, size))
    })
    .collect()
}

fn parse_cell(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {}", e))?;
    let col = col.trim().parse().map_err(|e| format!("bad column: {}", e))?;
    Ok((row, col))
}

fn print_intro() {
    println!(
        r#"Maze Panel - render maze panel grids to fabrication SVG

USAGE:
    maze-panel [OPTIONS] [FILE]
    maze-panel --code <HEX> [OPTIONS]
    cat panel.txt | maze-panel

GRID FORMAT:
    One row per line, '#' for a filled cell and '.' for an empty one.
    The outer ring is the frame and is always filled. ';' starts a comment.

OPTIONS:
    -m, --mode         filled, outline (cut file) or bricks
    -z, --zoom         Scale factor for the document size
    --show-issues      Highlight floating pieces, covered holes, diagonals
    --validate         Refuse to render a design with issues
    --top/--right/--bottom/--left <TEXT>
                       Engrave text along a band of the frame
    -d, --dimensions   Panel dimensions (TOML file)
    -p, --palette      Color palette (TOML file)
    --encode           Print the grid's hex code
    --check            List design issues
    -h, --help         Print help

QUICK START:
    maze-panel --code 0002 --mode outline > panel.svg"#
    );
}
