use clap::{Parser, Subcommand};
use fixhtml::fix::RunOptions;
use fixhtml::{args, check, config, fix, output};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fixhtml")]
#[command(about = "Wrap code snippets in generated book HTML in <pre> blocks")]
#[command(long_about = "\
Wrap code snippets in generated book HTML in <pre> blocks

Rewrites every file directly inside the book output directory in place:

  <code       → <pre><code
  </code>     → </code></pre>
  #include <  → #include &lt

The images/, js/ and styles/ children are skipped. Files that are not
UTF-8 are reported and left unchanged. The rewrite is not idempotent:
run it once per book build.

Positional tokens from older build scripts still work:

  fixhtml v              verbose
  fixhtml p ../out/html/ use ../out/html/ as the book directory

Run 'fixhtml gen-config' to generate a documented fixhtml.toml.")]
#[command(version)]
struct Cli {
    /// Book HTML output directory [default: ../book/html/]
    #[arg(long, global = true)]
    path: Option<PathBuf>,

    /// Config file [default: ./fixhtml.toml if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (accepted, currently no effect)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    legacy: TokenArgs,
}

/// Positional tokens, accepted before or after a subcommand.
#[derive(clap::Args, Clone, Default)]
struct TokenArgs {
    /// Positional tokens: `v` for verbose, `p <path>` for the book directory
    #[arg(value_name = "TOKENS")]
    tokens: Vec<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite the book HTML in place (default)
    Fix(TokenArgs),
    /// List code-tag lines without changing anything
    Check(TokenArgs),
    /// Print a stock fixhtml.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut tokens = cli.legacy.tokens;
    let command = cli
        .command
        .unwrap_or_else(|| Command::Fix(TokenArgs::default()));
    if let Command::Fix(sub) | Command::Check(sub) = &command {
        tokens.extend(sub.tokens.iter().cloned());
    }
    let legacy = args::parse_tokens(&tokens)?;

    match command {
        Command::Fix(_) => {
            let site_config = config::load_config(cli.config.as_deref())?;
            let options = RunOptions {
                root: resolve_root(legacy.path, cli.path, &site_config),
                verbose: legacy.verbose || cli.verbose,
            };
            output::print_encoding();
            let mut printer = output::FixPrinter::default();
            let summary = fix::fix_directory(&options, &site_config, |event| printer.print(&event))?;
            output::print_fix_summary(&summary);
        }
        Command::Check(_) => {
            let site_config = config::load_config(cli.config.as_deref())?;
            let root = resolve_root(legacy.path, cli.path, &site_config);
            let reports = check::check_directory(&root, &site_config)?;
            output::print_check_report(&reports);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Positional `p` token, then `--path`, then `root` from the config file.
fn resolve_root(
    token_path: Option<PathBuf>,
    flag_path: Option<PathBuf>,
    site_config: &config::FixConfig,
) -> PathBuf {
    token_path
        .or(flag_path)
        .unwrap_or_else(|| site_config.root_path())
}
