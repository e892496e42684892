use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokensmith_mixin::FormatOptions;
use tokensmith_tree::{PathFilter, Token};
use tracing::Level;

#[derive(Parser)]
#[command(name = "tokensmith")]
#[command(about = "tokensmith — design token to SCSS mixin compiler")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a token file into SCSS mixins
    Build {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Omit the generated-file header comment
        #[arg(long)]
        no_header: bool,
    },

    /// Print the flattened, attributed tokens as JSON
    Tokens {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Load and compile a token file without writing output
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Input token file (JSON)
    path: PathBuf,

    /// Treat the input as an array of flattened tokens instead of a token tree
    #[arg(long)]
    flat: bool,

    /// Only keep tokens whose path contains this segment (repeatable)
    #[arg(long = "include", value_name = "SEGMENT")]
    include: Vec<String>,

    /// Drop tokens whose path contains this segment (repeatable)
    #[arg(long = "exclude", value_name = "SEGMENT")]
    exclude: Vec<String>,

    /// Log pipeline progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            input,
            output,
            no_header,
        } => cmd_build(&input, output.as_deref(), no_header),
        Command::Tokens { input } => cmd_tokens(&input),
        Command::Check { input } => cmd_check(&input),
    }
}

fn init_tracing(verbose: bool) {
    if !verbose {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .try_init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn read_source(path: &Path) -> String {
    if !path.exists() {
        fail(format!("file not found: {}", path.display()));
    }
    match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => fail(format!("reading {}: {e}", path.display())),
    }
}

/// Read and flatten the input, applying path filters.
fn load_tokens(input: &InputArgs) -> Vec<Token> {
    init_tracing(input.verbose);
    let source = read_source(&input.path);

    let tokens = if input.flat {
        match serde_json::from_str::<Vec<Token>>(&source) {
            Ok(tokens) => tokens,
            Err(e) => fail(format!("{}: invalid token list: {e}", input.path.display())),
        }
    } else {
        match tokensmith_tree::load_str(&source) {
            Ok(tree) => tokensmith_tree::tokens(&tree),
            Err(e) => fail(format!("{}: {e}", input.path.display())),
        }
    };

    let filter = PathFilter {
        include: input.include.clone(),
        exclude: input.exclude.clone(),
    };
    let tokens = filter.apply(tokens);
    tracing::info!(count = tokens.len(), path = %input.path.display(), "loaded tokens");
    tokens
}

fn cmd_build(input: &InputArgs, output: Option<&Path>, no_header: bool) {
    let tokens = load_tokens(input);
    let options = FormatOptions { header: !no_header };
    let compiled = tokensmith_mixin::compile(&tokens, &options);

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &compiled.scss) {
                fail(format!("writing {}: {e}", path.display()));
            }
            eprintln!(
                "Built: {} ({} mixins)",
                path.display(),
                compiled.mixins.len()
            );
        }
        None => print!("{}", compiled.scss),
    }
}

fn cmd_tokens(input: &InputArgs) {
    let tokens = load_tokens(input);
    match serde_json::to_string_pretty(&tokens) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(e),
    }
}

fn cmd_check(input: &InputArgs) {
    let tokens = load_tokens(input);
    let compiled = tokensmith_mixin::compile(&tokens, &FormatOptions::default());
    eprintln!(
        "OK: {} ({} tokens, {} mixins)",
        input.path.display(),
        tokens.len(),
        compiled.mixins.len()
    );
}
