use clap::{CommandFactory, Parser, ValueEnum};
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use docdiff::{CompareMethod, Comparison, RenderOptions, ViewMode, sample};

#[derive(Parser)]
#[command(name = "docdiff")]
#[command(about = "Pull-request style comparison of two text documents")]
struct Cli {
    /// Old version of the document
    #[arg(required_unless_present_any = ["sample", "completions", "man"])]
    old: Option<PathBuf>,

    /// New version of the document
    #[arg(required_unless_present_any = ["sample", "completions", "man"])]
    new: Option<PathBuf>,

    /// Render one shared column instead of side-by-side panes
    #[arg(short, long)]
    unified: bool,

    /// Highlighting granularity inside changed rows
    #[arg(long, value_enum, default_value_t = Compare::Words)]
    compare: Compare,

    /// When to emit ANSI colors
    #[arg(long, value_enum, default_value_t = Color::Auto)]
    color: Color,

    /// Header label printed above the comparison (defaults to the new
    /// file's path)
    #[arg(long)]
    label: Option<String>,

    /// Compare the built-in reference documents instead of files
    #[arg(long, conflicts_with_all = ["old", "new"])]
    sample: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<clap_complete::Shell>,

    /// Print a man page and exit
    #[arg(long)]
    man: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Compare {
    Lines,
    Words,
}

impl From<Compare> for CompareMethod {
    fn from(compare: Compare) -> Self {
        match compare {
            Compare::Lines => CompareMethod::Lines,
            Compare::Words => CompareMethod::Words,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Color {
    Auto,
    Always,
    Never,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "docdiff", &mut io::stdout());
        return Ok(());
    }

    if cli.man {
        let mut buf = Vec::new();
        clap_mangen::Man::new(Cli::command()).render(&mut buf)?;
        io::stdout().write_all(&buf)?;
        return Ok(());
    }

    let (comparison, label) = if cli.sample {
        (
            Comparison::sample(),
            cli.label.unwrap_or_else(|| sample::LABEL.to_string()),
        )
    } else {
        let old = cli.old.ok_or("two input files are required")?;
        let new = cli.new.ok_or("two input files are required")?;
        let comparison = Comparison::from_files(&old, &new)?;
        let label = cli.label.unwrap_or_else(|| new.display().to_string());
        (comparison, label)
    };

    let color = match cli.color {
        Color::Auto => io::stdout().is_terminal(),
        Color::Always => true,
        Color::Never => false,
    };

    let options = RenderOptions {
        view: if cli.unified {
            ViewMode::Unified
        } else {
            ViewMode::Split
        },
        compare: cli.compare.into(),
        color,
    };

    let stats = comparison.stats();
    if color {
        println!("{} ({})", label.bold(), stats.summary());
    } else {
        println!("{} ({})", label, stats.summary());
    }
    println!();
    print!("{}", comparison.render(&options));

    Ok(())
}
