use anyhow::{Context, Result};
use clap::Parser;

use sem_ver::cli::{self, BumpRequest, CompareRequest, ToolOutcome};
use sem_ver::config::{self, OutputFormat};
use sem_ver::ui;
use sem_ver::{BumpPart, CompareOp};

#[derive(clap::Parser)]
#[command(
    name = "sem-ver",
    version,
    about = "Parse, compare and bump SemVer 2.0.0 versions"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, global = true, help = "Print results as JSON")]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Bump the major, minor or patch component of a version
    Bump {
        #[arg(
            value_name = "VERSION",
            help = "Current version, e.g. 1.2.3 or v1.2.3-rc.1"
        )]
        current: String,

        #[arg(value_name = "PART", help = "major, minor or patch")]
        part: BumpPart,

        #[arg(long, help = "Keep pre-release and build metadata")]
        keep_prerelease: bool,

        #[arg(
            long,
            help = "Report the result as not a dry run (nothing is written either way)"
        )]
        no_dry_run: bool,

        #[arg(long, help = "Reject a leading 'v' prefix")]
        no_v_prefix: bool,
    },
    /// Compare two versions with lt, lte, eq, gte or gt
    Compare {
        left: String,

        #[arg(value_name = "OP", help = "lt, lte, eq, gte or gt")]
        op: CompareOp,

        right: String,

        #[arg(long, help = "Reject a leading 'v' prefix")]
        no_v_prefix: bool,
    },
    /// Run bump_version or compare_versions on a JSON request
    Call {
        #[arg(value_name = "TOOL", help = "bump_version or compare_versions")]
        tool: String,

        #[arg(value_name = "JSON", help = "Request arguments as a JSON object")]
        request: String,
    },
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config_path = args.config.as_deref();
    let config = config::load_config(config_path).context("Error loading config")?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output.format
    };

    let (outcome, format) = match args.command {
        Command::Bump {
            current,
            part,
            keep_prerelease,
            no_dry_run,
            no_v_prefix,
        } => {
            let request = BumpRequest {
                version: current,
                part,
                dry_run: config.defaults.dry_run && !no_dry_run,
                allow_v_prefix: config.defaults.allow_v_prefix && !no_v_prefix,
                keep_prerelease: config.defaults.keep_prerelease || keep_prerelease,
            };
            (bump(&request)?, format)
        }
        Command::Compare {
            left,
            op,
            right,
            no_v_prefix,
        } => {
            let request = CompareRequest {
                left,
                right,
                op,
                allow_v_prefix: config.defaults.allow_v_prefix && !no_v_prefix,
            };
            (compare(&request)?, format)
        }
        // Raw requests bypass config defaults and always answer in JSON
        Command::Call { tool, request } => {
            let outcome = cli::call_tool(&tool, &request)?;
            (outcome, OutputFormat::Json)
        }
    };

    ui::print_outcome(&outcome, format)
}

fn bump(request: &BumpRequest) -> Result<ToolOutcome> {
    request.validate()?;
    Ok(ToolOutcome::Bump(cli::bump_version(request)?))
}

fn compare(request: &CompareRequest) -> Result<ToolOutcome> {
    request.validate()?;
    Ok(ToolOutcome::Compare(cli::compare_versions(request)?))
}
