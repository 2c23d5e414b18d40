use clap::Parser;
use owo_colors::OwoColorize;
use propflags::{DecodedFlags, FlagSpec};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "propflags",
    about = "Decode property flag codes (bitmasks or 'weca' letters)"
)]
struct Cli {
    /// Flag specs: numerals such as 3, 0b1010, 0xF, or letter codes such as ew
    #[arg(required = true)]
    flags: Vec<FlagSpec>,
    /// Print one JSON object per spec
    #[arg(long)]
    json: bool,
    /// Log decoding at debug level (overrides RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    for spec in &cli.flags {
        let flags = spec.resolve();
        tracing::debug!(?spec, %flags, "decoded flag spec");
        let decoded = DecodedFlags::from(flags);

        if cli.json {
            match serde_json::to_string(&decoded) {
                Ok(line) => println!("{line}"),
                Err(err) => eprintln!("{} {err}", "error:".red().bold()),
            }
        } else {
            println!("{}", render(spec, &decoded));
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render(spec: &FlagSpec, decoded: &DecodedFlags) -> String {
    let input = match spec {
        FlagSpec::Bits(mask) => format!("{mask:#06b}"),
        FlagSpec::Letters(code) => format!("{code:?}"),
    };
    let flag = |name: &str, on: bool| {
        if on {
            name.green().to_string()
        } else {
            format!("!{name}").bright_black().to_string()
        }
    };
    let writable = if decoded.kind == "accessor" {
        String::new()
    } else {
        format!(" {}", flag("writable", decoded.writable))
    };
    format!(
        "{} {} {:#06b} {}{} {} {}",
        input.yellow(),
        decoded.code.bright_cyan().bold(),
        decoded.mask,
        decoded.kind,
        writable,
        flag("enumerable", decoded.enumerable),
        flag("configurable", decoded.configurable),
    )
}
